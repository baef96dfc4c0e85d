use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> CommandResult {
        Ok(session.vfs.current_dir().to_string())
    }
}

use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.first().map(String::as_str) == Some("-c") {
            session.history.clear();
            return Ok("History cleared".to_string());
        }
        let out = session
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:4}  {}", i + 1, cmd.command))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(out)
    }
}

use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct ClearCommand;

// erase screen, then cursor home - the host terminal writes this straight
// into its scrollback handling
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> CommandResult {
        Ok(CLEAR_SEQUENCE.to_string())
    }
}

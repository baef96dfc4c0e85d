use crate::command::{Command, CommandResult};
use crate::session::Session;

/// export NAME=value...
pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.is_empty() {
            return Err("export: usage: export NAME=value".to_string());
        }
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    session.env.insert(name.to_string(), value.to_string());
                }
                // bare name exports as empty, matching the usual shells
                None if !arg.is_empty() => {
                    session.env.entry(arg.clone()).or_default();
                }
                _ => return Err(format!("export: '{}': not a valid identifier", arg)),
            }
        }
        Ok(String::new())
    }
}

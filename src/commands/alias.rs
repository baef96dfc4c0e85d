use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct AliasCommand;

impl Command for AliasCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.is_empty() {
            // no args = show all aliases
            let out: Vec<String> = session
                .aliases
                .iter()
                .map(|(k, v)| format!("{}='{}'", k, v))
                .collect();
            return Ok(out.join("\n"));
        }

        let mut output = Vec::new();
        let mut failed = false;
        for arg in args {
            if let Some((name, value)) = arg.split_once('=') {
                session
                    .aliases
                    .insert(name.to_string(), value.trim_matches('\'').to_string());
            } else if let Some(value) = session.aliases.get(arg) {
                output.push(format!("{}='{}'", arg, value));
            } else {
                output.push(format!("alias: {}: not found", arg));
                failed = true;
            }
        }
        if failed {
            Err(output.join("\n"))
        } else {
            Ok(output.join("\n"))
        }
    }
}

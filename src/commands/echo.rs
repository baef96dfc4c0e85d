use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let mut newline = true;
        let mut parts: Vec<&str> = Vec::new();
        for arg in args {
            if arg == "-n" && parts.is_empty() {
                newline = false;
            } else if let Some(name) = arg.strip_prefix('$') {
                // $VAR expands from the session environment, unknown -> empty
                parts.push(session.env.get(name).map(String::as_str).unwrap_or(""));
            } else {
                parts.push(arg);
            }
        }
        let mut out = parts.join(" ");
        if newline {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_joins_args() {
        let mut s = Session::new();
        assert_eq!(
            EchoCommand
                .execute(&["hello".to_string(), "world".to_string()], &mut s)
                .unwrap(),
            "hello world\n"
        );
    }

    #[test]
    fn test_echo_n_flag() {
        let mut s = Session::new();
        assert_eq!(
            EchoCommand
                .execute(&["-n".to_string(), "hi".to_string()], &mut s)
                .unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_echo_env_expansion() {
        let mut s = Session::new();
        assert_eq!(
            EchoCommand.execute(&["$USER".to_string()], &mut s).unwrap(),
            "user\n"
        );
        assert_eq!(
            EchoCommand.execute(&["$MISSING".to_string()], &mut s).unwrap(),
            "\n"
        );
    }
}

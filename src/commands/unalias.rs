use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct UnaliasCommand;

impl Command for UnaliasCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.is_empty() {
            return Err("unalias: usage: unalias name [name ...]".to_string());
        }
        let mut errors = Vec::new();
        for name in args {
            if session.aliases.remove(name).is_none() {
                errors.push(format!("unalias: {}: not found", name));
            }
        }
        if errors.is_empty() {
            Ok(String::new())
        } else {
            Err(errors.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unalias_removes() {
        let mut s = Session::new();
        UnaliasCommand.execute(&["ll".to_string()], &mut s).unwrap();
        assert!(!s.aliases.contains_key("ll"));
    }

    #[test]
    fn test_unalias_unknown() {
        let mut s = Session::new();
        let err = UnaliasCommand.execute(&["zz".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "unalias: zz: not found");
    }
}

use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> CommandResult {
        // BTreeMap iteration keeps the dump sorted and stable
        let out: Vec<String> = session
            .env
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        Ok(out.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_dumps_seeded_vars() {
        let mut s = Session::new();
        let out = EnvCommand.execute(&[], &mut s).unwrap();
        assert!(out.contains("HOME=/"));
        assert!(out.contains("USER=user"));
        assert!(out.contains("SHELL=/bin/vsh"));
        assert!(out.contains("PATH=/usr/local/bin:/usr/bin:/bin"));
    }
}

use crate::command::{Command, CommandResult};
use crate::session::Session;

/// git with hard-coded output. There is no object store behind this - it
/// exists so pasted tutorial commands don't explode.
pub struct GitCommand;

const GIT_USAGE: &str = "usage: git <command>\n\nThese are common simulated commands:\n  init       create an empty repository\n  status     show the working tree status\n  add        stage file contents\n  commit     record changes\n  log        show commit history\n  branch     list branches\n  push       update remote refs\n  pull       fetch and integrate";

impl Command for GitCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> CommandResult {
        let out = match args.first().map(String::as_str) {
            None | Some("--help") => GIT_USAGE.to_string(),
            Some("--version") => "git version 2.43.0".to_string(),
            Some("init") => "Initialized empty Git repository in .git/ (simulated)".to_string(),
            Some("status") => "On branch main\nnothing to commit, working tree clean".to_string(),
            Some("add") => String::new(),
            Some("commit") => {
                let message = args
                    .iter()
                    .position(|a| a == "-m")
                    .and_then(|i| args.get(i + 1))
                    .map(String::as_str)
                    .unwrap_or("update");
                format!("[main 0000000] {}\n 1 file changed (simulated)", message)
            }
            Some("log") => "commit 0000000000000000000000000000000000000000\nAuthor: developer <developer@localhost>\n\n    initial commit (simulated)".to_string(),
            Some("branch") => "* main".to_string(),
            Some("checkout" | "switch") => {
                let target = args.get(1).map(String::as_str).unwrap_or("main");
                format!("Switched to branch '{}' (simulated)", target)
            }
            Some("push") => "Everything up-to-date (simulated)".to_string(),
            Some("pull") => "Already up to date (simulated)".to_string(),
            Some("clone") => "fatal: network access is not available in the virtual shell".to_string(),
            _ => GIT_USAGE.to_string(),
        };
        Ok(out)
    }
}

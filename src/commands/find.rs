use crate::command::{Command, CommandResult};
use crate::session::Session;

/// find [pattern]
/// Every path at or under the working directory whose full path contains
/// the pattern as a substring. `*` (or no pattern) matches everything.
pub struct FindCommand;

impl Command for FindCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let pattern = args.first().map(String::as_str).unwrap_or("*");
        let cwd = session.vfs.current_dir().to_string();

        let mut paths = vec![cwd.clone()];
        paths.extend(session.vfs.paths_under(&cwd));

        let matched: Vec<String> = paths
            .into_iter()
            .filter(|p| pattern == "*" || p.contains(pattern))
            .collect();
        Ok(matched.join("\n"))
    }
}

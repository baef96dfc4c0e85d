use regex::Regex;

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// grep PATTERN FILE
/// Matching lines, each prefixed with its 1-based line number.
pub struct GrepCommand;

impl Command for GrepCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let [pattern, file] = args else {
            return Err("Usage: grep PATTERN FILE".to_string());
        };
        let regex =
            Regex::new(pattern).map_err(|_| format!("grep: invalid pattern '{}'", pattern))?;

        let resolved = path::resolve(file, session.vfs.current_dir());
        let entry = session
            .vfs
            .read_file(&resolved)
            .map_err(|_| format!("grep: {}: No such file or directory", file))?;

        let matches: Vec<String> = entry
            .content
            .lines()
            .enumerate()
            .filter(|(_, line)| regex.is_match(line))
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();

        if matches.is_empty() {
            // not an error, just nothing to show
            Ok(format!("grep: no matches for '{}' in {}", pattern, file))
        } else {
            Ok(matches.join("\n"))
        }
    }
}

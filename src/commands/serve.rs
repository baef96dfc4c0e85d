use crate::command::{Command, CommandResult};
use crate::session::Session;

/// serve [path]
/// Pretends to start a static server; real previews come from the editor's
/// sandbox iframe.
pub struct ServeCommand;

impl Command for ServeCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let dir = args.first().map(String::as_str).unwrap_or(".");
        let root = crate::path::resolve(dir, session.vfs.current_dir());
        if !session.vfs.is_directory(&root) {
            return Err(format!("serve: {}: No such file or directory", dir));
        }
        Ok(format!(
            "Serving {} at http://localhost:3000 (simulated)\nUse the editor's preview pane to actually run the project.",
            root
        ))
    }
}

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;
use crate::sync::guess_mime;
use crate::vfs::FileEntry;

/// touch FILE...
/// Create empty files; silently does nothing when the path already exists.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
        if files.is_empty() {
            return Err("touch: missing file operand".to_string());
        }
        for f in files {
            let resolved = path::resolve(f, session.vfs.current_dir());
            if session.vfs.exists(&resolved) {
                // no mtimes in this filesystem, so an existing path is a no-op
                continue;
            }
            session
                .vfs
                .write_file(&resolved, FileEntry::new("", guess_mime(&resolved)))
                .map_err(|e| format!("touch: cannot touch '{}': {}", f, e))?;
        }
        Ok(String::new())
    }
}

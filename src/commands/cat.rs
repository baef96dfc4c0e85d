use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.is_empty() {
            return Err("cat: missing operand".to_string());
        }
        let mut out = String::new();
        for arg in args {
            let resolved = path::resolve(arg, session.vfs.current_dir());
            if session.vfs.is_directory(&resolved) {
                return Err(format!("cat: {}: Is a directory", arg));
            }
            match session.vfs.read_file(&resolved) {
                // content verbatim, no trailing newline added
                Ok(entry) => out.push_str(&entry.content),
                Err(_) => return Err(format!("cat: {}: No such file or directory", arg)),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileEntry;

    #[test]
    fn test_cat_verbatim() {
        let mut s = Session::new();
        s.vfs
            .write_file("/a.txt", FileEntry::new("line1\nline2", None))
            .unwrap();
        assert_eq!(
            CatCommand.execute(&["a.txt".to_string()], &mut s).unwrap(),
            "line1\nline2"
        );
    }

    #[test]
    fn test_cat_missing_and_directory() {
        let mut s = Session::new();
        s.vfs.create_directory("/d").unwrap();
        assert_eq!(
            CatCommand.execute(&["nope".to_string()], &mut s).unwrap_err(),
            "cat: nope: No such file or directory"
        );
        assert_eq!(
            CatCommand.execute(&["d".to_string()], &mut s).unwrap_err(),
            "cat: d: Is a directory"
        );
    }
}

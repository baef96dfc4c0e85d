use crate::command::{Command, CommandResult};
use crate::commands::cp::transfer;
use crate::session::Session;

pub struct MvCommand;

impl Command for MvCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        transfer(args, session, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileEntry;

    #[test]
    fn test_mv_relocates_file() {
        let mut s = Session::new();
        s.vfs.create_directory("/b").unwrap();
        s.vfs.write_file("/a.js", FileEntry::new("let x = 1;", None)).unwrap();
        MvCommand
            .execute(&["/a.js".to_string(), "/b/a.js".to_string()], &mut s)
            .unwrap();
        assert!(!s.vfs.is_file("/a.js"));
        assert_eq!(s.vfs.read_file("/b/a.js").unwrap().content, "let x = 1;");
    }

    #[test]
    fn test_mv_rename_in_place() {
        let mut s = Session::new();
        s.vfs.write_file("/a.js", FileEntry::new("x", None)).unwrap();
        MvCommand
            .execute(&["a.js".to_string(), "renamed.js".to_string()], &mut s)
            .unwrap();
        assert!(!s.vfs.is_file("/a.js"));
        assert!(s.vfs.is_file("/renamed.js"));
    }

    #[test]
    fn test_mv_missing_source() {
        let mut s = Session::new();
        let err = MvCommand
            .execute(&["ghost".to_string(), "x".to_string()], &mut s)
            .unwrap_err();
        assert_eq!(err, "mv: cannot stat 'ghost': No such file or directory");
    }
}

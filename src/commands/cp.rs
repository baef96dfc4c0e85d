use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

pub struct CpCommand;

impl Command for CpCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        transfer(args, session, true)
    }
}

/// Shared body of cp and mv: resolve both operands, aim into a directory
/// destination, then a single VFS move_or_copy. `keep_source` is the only
/// difference between the two commands.
pub fn transfer(args: &[String], session: &mut Session, keep_source: bool) -> CommandResult {
    let name = if keep_source { "cp" } else { "mv" };
    let operands: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    let [src, dst] = operands.as_slice() else {
        return Err(format!("{}: missing file operand", name));
    };

    let cwd = session.vfs.current_dir().to_string();
    let src_path = path::resolve(src, &cwd);
    let mut dst_path = path::resolve(dst, &cwd);

    if !session.vfs.is_file(&src_path) {
        return Err(format!("{}: cannot stat '{}': No such file or directory", name, src));
    }
    // `cp a.js dir` drops the file inside dir under its own name
    if session.vfs.is_directory(&dst_path) {
        dst_path = path::join(&dst_path, path::basename(&src_path));
    }
    session
        .vfs
        .move_or_copy(&src_path, &dst_path, keep_source)
        .map_err(|e| format!("{}: cannot create '{}': {}", name, dst, e))?;
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileEntry;

    fn session() -> Session {
        let mut s = Session::new();
        s.vfs.create_directory("/b").unwrap();
        s.vfs.write_file("/a.js", FileEntry::new("let x = 1;", None)).unwrap();
        s
    }

    #[test]
    fn test_cp_duplicates_content() {
        let mut s = session();
        CpCommand
            .execute(&["/a.js".to_string(), "/copy.js".to_string()], &mut s)
            .unwrap();
        assert_eq!(s.vfs.read_file("/a.js").unwrap().content, "let x = 1;");
        assert_eq!(s.vfs.read_file("/copy.js").unwrap().content, "let x = 1;");
    }

    #[test]
    fn test_cp_into_directory() {
        let mut s = session();
        CpCommand
            .execute(&["/a.js".to_string(), "/b".to_string()], &mut s)
            .unwrap();
        assert!(s.vfs.is_file("/b/a.js"));
    }

    #[test]
    fn test_cp_missing_source() {
        let mut s = session();
        let err = CpCommand
            .execute(&["/ghost.js".to_string(), "/x.js".to_string()], &mut s)
            .unwrap_err();
        assert_eq!(err, "cp: cannot stat '/ghost.js': No such file or directory");
    }

    #[test]
    fn test_cp_overwrites_destination() {
        let mut s = session();
        s.vfs.write_file("/old.js", FileEntry::new("old", None)).unwrap();
        CpCommand
            .execute(&["/a.js".to_string(), "/old.js".to_string()], &mut s)
            .unwrap();
        assert_eq!(s.vfs.read_file("/old.js").unwrap().content, "let x = 1;");
    }
}

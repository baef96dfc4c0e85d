use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;
use crate::vfs::VfsError;

/// mkdir [-p] DIRECTORY...
/// Create directories. Unlike the loosest real-world shells, the parent has
/// to exist unless -p is given.
pub struct MkdirCommand;

const MKDIR_HELP: &str = "Usage: mkdir [OPTION]... DIRECTORY...\nCreate the DIRECTORY(ies), if they do not already exist.\n\n  -p, --parents  no error if existing, make parent directories as needed\n      --help     display this help and exit";

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.iter().any(|a| a == "--help") {
            return Ok(MKDIR_HELP.to_string());
        }
        let mut parents = false;
        let mut paths = vec![];
        for arg in args {
            match arg.as_str() {
                "-p" | "--parents" => parents = true,
                s if s.starts_with('-') => {
                    return Err(format!("mkdir: unrecognized option '{}'", s));
                }
                _ => paths.push(arg.as_str()),
            }
        }
        if paths.is_empty() {
            return Err("mkdir: missing operand".to_string());
        }

        let mut errors = Vec::new();
        for p in paths {
            let resolved = path::resolve(p, session.vfs.current_dir());
            let res = if parents {
                session.vfs.create_dir_all(&resolved)
            } else if session.vfs.exists(&resolved) {
                // plain mkdir refuses both an existing dir and a file squatting
                // on the name; create_directory alone would tolerate the dir
                Err(VfsError::AlreadyExists(resolved.clone()))
            } else {
                session.vfs.create_directory(&resolved)
            };
            if let Err(e) = res {
                errors.push(format!("mkdir: cannot create directory '{}': {}", p, e));
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
    fn test_mkdir_creates() {
        let mut s = Session::new();
        MkdirCommand.execute(&["src".to_string()], &mut s).unwrap();
        assert!(s.vfs.is_directory("/src"));
    }

    #[test]
    fn test_mkdir_existing_fails() {
        let mut s = Session::new();
        s.vfs.create_directory("/src").unwrap();
        let err = MkdirCommand.execute(&["src".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "mkdir: cannot create directory 'src': File exists");
    }

    #[test]
    fn test_mkdir_over_file_fails() {
        let mut s = Session::new();
        s.vfs
            .write_file("/src", crate::vfs::FileEntry::new("", None))
            .unwrap();
        let err = MkdirCommand.execute(&["src".to_string()], &mut s).unwrap_err();
        assert!(err.contains("File exists"));
    }

    #[test]
    fn test_mkdir_missing_parent_is_posix_strict() {
        // a laxer shell would happily create /a/b/c with no /a/b; this one
        // follows POSIX and wants -p for that
        let mut s = Session::new();
        let err = MkdirCommand
            .execute(&["a/b/c".to_string()], &mut s)
            .unwrap_err();
        assert!(err.contains("No such file or directory"));
        assert!(!s.vfs.is_directory("/a"));

        MkdirCommand
            .execute(&["-p".to_string(), "a/b/c".to_string()], &mut s)
            .unwrap();
        assert!(s.vfs.is_directory("/a/b/c"));
    }
}

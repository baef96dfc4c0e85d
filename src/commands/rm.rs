use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;
use crate::vfs::VfsError;

/// rm [-r|-rf] PATH...
/// Remove files, or directories with -r.
pub struct RmCommand;

const RM_HELP: &str = "Usage: rm [OPTION]... FILE...\nRemove the FILE(s).\n\n  -f, --force       ignore nonexistent files, never prompt\n  -r, -R, --recursive  remove directories and their contents recursively\n      --help        display this help and exit";

impl Command for RmCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.iter().any(|a| a == "--help") {
            return Ok(RM_HELP.to_string());
        }
        let mut recursive = false;
        let mut force = false;
        let mut targets = vec![];
        for arg in args {
            if arg.starts_with('-') && arg.len() > 1 && !arg.starts_with("--") {
                // combined short flags: -r, -f, -rf, -fr
                for c in arg.chars().skip(1) {
                    match c {
                        'r' | 'R' => recursive = true,
                        'f' => force = true,
                        _ => return Err(format!("rm: invalid option -- '{}'", c)),
                    }
                }
            } else {
                match arg.as_str() {
                    "--recursive" => recursive = true,
                    "--force" => force = true,
                    _ => targets.push(arg.as_str()),
                }
            }
        }
        if targets.is_empty() {
            return Err("rm: missing operand".to_string());
        }

        let mut errors = Vec::new();
        for t in targets {
            let resolved = path::resolve(t, session.vfs.current_dir());
            let res = if session.vfs.is_file(&resolved) {
                session.vfs.delete_file(&resolved)
            } else if session.vfs.is_directory(&resolved) {
                session.vfs.delete_directory(&resolved, recursive)
            } else if force {
                Ok(())
            } else {
                Err(VfsError::NotFound(resolved.clone()))
            };
            if let Err(e) = res {
                errors.push(format!("rm: cannot remove '{}': {}", t, e));
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
    use crate::vfs::FileEntry;

    fn session() -> Session {
        let mut s = Session::new();
        s.vfs.create_directory("/src").unwrap();
        s.vfs.write_file("/src/a.js", FileEntry::new("x", None)).unwrap();
        s.vfs.write_file("/top.txt", FileEntry::new("y", None)).unwrap();
        s
    }

    #[test]
    fn test_rm_file() {
        let mut s = session();
        RmCommand.execute(&["/top.txt".to_string()], &mut s).unwrap();
        assert!(!s.vfs.is_file("/top.txt"));
    }

    #[test]
    fn test_rm_populated_dir_needs_recursive() {
        let mut s = session();
        let err = RmCommand.execute(&["/src".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "rm: cannot remove '/src': Directory not empty");
        RmCommand
            .execute(&["-rf".to_string(), "/src".to_string()], &mut s)
            .unwrap();
        assert!(!s.vfs.is_directory("/src"));
        assert!(!s.vfs.is_file("/src/a.js"));
    }

    #[test]
    fn test_rm_empty_dir_without_flag() {
        let mut s = Session::new();
        s.vfs.create_directory("/empty").unwrap();
        RmCommand.execute(&["/empty".to_string()], &mut s).unwrap();
        assert!(!s.vfs.is_directory("/empty"));
    }

    #[test]
    fn test_rm_missing_target() {
        let mut s = session();
        let err = RmCommand.execute(&["/ghost".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "rm: cannot remove '/ghost': No such file or directory");
        // -f swallows it
        RmCommand
            .execute(&["-f".to_string(), "/ghost".to_string()], &mut s)
            .unwrap();
    }
}

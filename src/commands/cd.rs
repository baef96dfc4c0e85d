use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.len() > 1 {
            return Err("cd: too many arguments".to_string());
        }

        let target = match args.first().map(String::as_str) {
            // bare cd goes home, classic unix behavior
            None | Some("~") => session.home().to_string(),
            Some("-") => match session.env.get("OLDPWD") {
                Some(oldpwd) => oldpwd.clone(),
                None => return Err("cd: OLDPWD not set".to_string()),
            },
            Some(p) if p.starts_with("~/") => {
                let home = session.home();
                path::resolve(&p[2..], home)
            }
            Some(p) => p.to_string(),
        };

        let resolved = path::resolve(&target, session.vfs.current_dir());
        let old = session.vfs.current_dir().to_string();
        if session.vfs.set_current_dir(&resolved).is_err() {
            // cwd stays put on failure
            let shown = args.first().map(String::as_str).unwrap_or(&resolved);
            return Err(format!("cd: no such file or directory: {}", shown));
        }

        // keep PWD/OLDPWD in lockstep for cd - and the prompt
        session.env.insert("OLDPWD".to_string(), old);
        session.env.insert("PWD".to_string(), resolved);
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut s = Session::new();
        s.vfs.create_directory("/src").unwrap();
        s.vfs.create_directory("/src/lib").unwrap();
        s
    }

    #[test]
    fn test_cd_absolute_and_relative() {
        let mut s = session();
        CdCommand.execute(&["/src".to_string()], &mut s).unwrap();
        assert_eq!(s.vfs.current_dir(), "/src");
        assert_eq!(s.env.get("PWD").unwrap(), "/src");
        CdCommand.execute(&["lib".to_string()], &mut s).unwrap();
        assert_eq!(s.vfs.current_dir(), "/src/lib");
    }

    #[test]
    fn test_cd_parent() {
        let mut s = session();
        CdCommand.execute(&["/src/lib".to_string()], &mut s).unwrap();
        CdCommand.execute(&["..".to_string()], &mut s).unwrap();
        assert_eq!(s.vfs.current_dir(), "/src");
    }

    #[test]
    fn test_cd_no_args_goes_home() {
        let mut s = session();
        CdCommand.execute(&["/src".to_string()], &mut s).unwrap();
        CdCommand.execute(&[], &mut s).unwrap();
        assert_eq!(s.vfs.current_dir(), "/");
    }

    #[test]
    fn test_cd_missing_leaves_cwd() {
        let mut s = session();
        let err = CdCommand.execute(&["/nope".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "cd: no such file or directory: /nope");
        assert_eq!(s.vfs.current_dir(), "/");
    }

    #[test]
    fn test_cd_to_file_fails() {
        let mut s = session();
        s.vfs
            .write_file("/src/a.js", crate::vfs::FileEntry::new("", None))
            .unwrap();
        let err = CdCommand.execute(&["/src/a.js".to_string()], &mut s).unwrap_err();
        assert!(err.contains("no such file or directory"));
    }

    #[test]
    fn test_cd_dash_swaps_back() {
        let mut s = session();
        CdCommand.execute(&["/src".to_string()], &mut s).unwrap();
        CdCommand.execute(&["/src/lib".to_string()], &mut s).unwrap();
        CdCommand.execute(&["-".to_string()], &mut s).unwrap();
        assert_eq!(s.vfs.current_dir(), "/src");
    }
}

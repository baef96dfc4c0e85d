use std::fmt::Write as _;

use chrono::Local;

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// ls [-a] [-l] [path]
/// List the direct children of a directory.
pub struct LsCommand;

const LS_HELP: &str = "Usage: ls [OPTION]... [FILE]\nList information about the FILE (the current directory by default).\n\n  -a             do not ignore entries starting with .\n  -l             use a long listing format\n      --help     display this help and exit";

// long format fakes the parts a browser shell can't know
const FILE_MODE: &str = "-rw-r--r--";
const DIR_MODE: &str = "drwxr-xr-x";
const OWNER: &str = "developer developer";
const DIR_SIZE: usize = 4096;

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        if args.iter().any(|a| a == "--help") {
            return Ok(LS_HELP.to_string());
        }

        let mut show_all = false;
        let mut long = false;
        let mut paths = vec![];
        for arg in args {
            if arg.starts_with('-') && arg.len() > 1 {
                for c in arg.chars().skip(1) {
                    match c {
                        'a' => show_all = true,
                        'l' => long = true,
                        _ => {} // ignore unknown flags
                    }
                }
            } else {
                paths.push(arg.as_str());
            }
        }

        let target = path::resolve(paths.first().copied().unwrap_or(""), session.vfs.current_dir());
        if !session.vfs.is_directory(&target) {
            return Err(format!(
                "ls: cannot access '{}': No such file or directory",
                paths.first().copied().unwrap_or(target.as_str())
            ));
        }

        let (dirs, files) = session.vfs.list_children(&target);
        let mut entries: Vec<(String, bool)> = Vec::new();
        for d in dirs {
            if show_all || !is_hidden(&d) {
                entries.push((d, true));
            }
        }
        for f in files {
            if show_all || !is_hidden(&f) {
                entries.push((f, false));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        if long {
            let stamp = Local::now().format("%b %e %H:%M").to_string();
            for (name, is_dir) in &entries {
                let (mode, size, suffix) = if *is_dir {
                    (DIR_MODE, DIR_SIZE, "/")
                } else {
                    let full = path::join(&target, name);
                    let size = session.vfs.read_file(&full).map(|e| e.content.len()).unwrap_or(0);
                    (FILE_MODE, size, "")
                };
                writeln!(out, "{} {} {:>6} {} {}{}", mode, OWNER, size, stamp, name, suffix)
                    .unwrap();
            }
        } else {
            let names: Vec<String> = entries
                .iter()
                .map(|(name, is_dir)| if *is_dir { format!("{}/", name) } else { name.clone() })
                .collect();
            out = names.join("  ");
        }
        Ok(out)
    }
}

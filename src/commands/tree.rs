use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// tree [path]
/// Indented hierarchy with box-drawing connectors plus a summary line.
pub struct TreeCommand;

impl Command for TreeCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let arg = args.first().map(String::as_str).unwrap_or(".");
        let target = path::resolve(arg, session.vfs.current_dir());
        if !session.vfs.is_directory(&target) {
            return Err(format!("tree: '{}': No such file or directory", arg));
        }

        let mut out = String::new();
        out.push_str(arg);
        out.push('\n');
        let mut dir_count = 0usize;
        let mut file_count = 0usize;
        render(session, &target, "", &mut out, &mut dir_count, &mut file_count);
        out.push('\n');
        out.push_str(&format!("{} directories, {} files", dir_count, file_count));
        Ok(out)
    }
}

fn render(
    session: &Session,
    dir: &str,
    prefix: &str,
    out: &mut String,
    dir_count: &mut usize,
    file_count: &mut usize,
) {
    let (dirs, files) = session.vfs.list_children(dir);
    // one alphabetical run, directories and files mixed, like real tree
    let mut entries: Vec<(String, bool)> = dirs
        .into_iter()
        .map(|d| (d, true))
        .chain(files.into_iter().map(|f| (f, false)))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let last = entries.len().saturating_sub(1);
    for (i, (name, is_dir)) in entries.iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
        if *is_dir {
            *dir_count += 1;
            let child_prefix = format!("{}{}", prefix, if i == last { "    " } else { "│   " });
            render(
                session,
                &path::join(dir, name),
                &child_prefix,
                out,
                dir_count,
                file_count,
            );
        } else {
            *file_count += 1;
        }
    }
}

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// node / python / pip stand-ins. Scripts are never executed - running a
/// file just confirms it exists and prints a canned banner.
#[derive(Clone, Copy)]
pub enum Runtime {
    Node,
    Python,
    Pip,
}

pub struct RuntimeCommand {
    runtime: Runtime,
}

impl RuntimeCommand {
    pub fn new(runtime: Runtime) -> Self {
        Self { runtime }
    }

    fn name(&self) -> &'static str {
        match self.runtime {
            Runtime::Node => "node",
            Runtime::Python => "python",
            Runtime::Pip => "pip",
        }
    }

    fn version(&self) -> &'static str {
        match self.runtime {
            Runtime::Node => "v20.11.0",
            Runtime::Python => "Python 3.12.1",
            Runtime::Pip => "pip 23.3.2",
        }
    }
}

impl Command for RuntimeCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult {
        let name = self.name();
        match args.first().map(String::as_str) {
            None => Ok(format!(
                "{} (simulated): interactive mode is not available, pass a file",
                name
            )),
            Some("--version" | "-v" | "-V") => Ok(self.version().to_string()),
            Some("install") if matches!(self.runtime, Runtime::Pip) => {
                let pkg = args.get(1).map(String::as_str).unwrap_or("<package>");
                Ok(format!(
                    "Collecting {}\nInstalling collected packages: {}\nSuccessfully installed {} (simulated)",
                    pkg, pkg, pkg
                ))
            }
            Some(file) => {
                let resolved = path::resolve(file, session.vfs.current_dir());
                if !session.vfs.is_file(&resolved) {
                    return Err(format!("{}: cannot open {}: no such file", name, file));
                }
                Ok(format!(
                    "[simulated {}] {} loaded - code execution happens in the preview pane",
                    name, file
                ))
            }
        }
    }

    fn simulated_delay_ms(&self, args: &[String]) -> u32 {
        // pip install pretends to hit the network
        match (self.runtime, args.first().map(String::as_str)) {
            (Runtime::Pip, Some("install")) => 1200,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileEntry;

    #[test]
    fn test_node_runs_existing_file_only() {
        let mut s = Session::new();
        s.vfs.write_file("/app.js", FileEntry::new("x", None)).unwrap();
        let node = RuntimeCommand::new(Runtime::Node);
        assert!(node.execute(&["app.js".to_string()], &mut s).is_ok());
        let err = node.execute(&["ghost.js".to_string()], &mut s).unwrap_err();
        assert_eq!(err, "node: cannot open ghost.js: no such file");
    }

    #[test]
    fn test_pip_install_delay() {
        let pip = RuntimeCommand::new(Runtime::Pip);
        assert_eq!(pip.simulated_delay_ms(&["install".to_string()]), 1200);
        assert_eq!(pip.simulated_delay_ms(&["--version".to_string()]), 0);
    }

    #[test]
    fn test_versions() {
        let mut s = Session::new();
        let out = RuntimeCommand::new(Runtime::Python)
            .execute(&["--version".to_string()], &mut s)
            .unwrap();
        assert_eq!(out, "Python 3.12.1");
    }
}

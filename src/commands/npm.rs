use crate::command::{Command, CommandResult};
use crate::session::Session;

/// npm / yarn / pnpm with canned, deterministic output. Nothing is ever
/// downloaded; install-flavored subcommands only report a simulated delay
/// so the terminal feels honest.
#[derive(Clone, Copy)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

pub struct PackageManagerCommand {
    tool: PackageManager,
}

const INSTALL_DELAY_MS: u32 = 1200;

impl PackageManagerCommand {
    pub fn new(tool: PackageManager) -> Self {
        Self { tool }
    }

    fn name(&self) -> &'static str {
        match self.tool {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    fn version(&self) -> &'static str {
        match self.tool {
            PackageManager::Npm => "10.2.4",
            PackageManager::Yarn => "1.22.21",
            PackageManager::Pnpm => "8.15.1",
        }
    }

    fn usage(&self) -> String {
        format!(
            "Usage: {} <command>\n\nCommands:\n  install [package]  install dependencies\n  run <script>       run a package script\n  init               create a package.json\n  test               run tests\n  --version          print the version",
            self.name()
        )
    }
}

fn is_install(sub: &str) -> bool {
    matches!(sub, "install" | "i" | "add")
}

impl Command for PackageManagerCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> CommandResult {
        let name = self.name();
        let sub = args.first().map(String::as_str).unwrap_or("");
        let out = match sub {
            "" => self.usage(),
            "--version" | "-v" => self.version().to_string(),
            s if is_install(s) => {
                let what = args
                    .get(1)
                    .map(|p| format!("+ {}@latest\n", p))
                    .unwrap_or_default();
                format!(
                    "{}\nadded 42 packages, and audited 43 packages in 1s\n\nfound 0 vulnerabilities",
                    what.trim_end()
                )
                .trim_start()
                .to_string()
            }
            "run" => match args.get(1) {
                Some(script) => format!("> {}\n> simulated script run\n\n(done)", script),
                None => format!("{}: missing script name", name),
            },
            "init" => "Wrote to package.json (simulated - nothing was created)".to_string(),
            "test" => "> test\n\nNo tests configured (simulated)".to_string(),
            "start" => "> start\n\nStarted development server (simulated)".to_string(),
            // help-style listing for anything unrecognized, still exit 0
            _ => self.usage(),
        };
        Ok(out)
    }

    fn simulated_delay_ms(&self, args: &[String]) -> u32 {
        match args.first().map(String::as_str) {
            Some(s) if is_install(s) => INSTALL_DELAY_MS,
            _ => 0,
        }
    }
}

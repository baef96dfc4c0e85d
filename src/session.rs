use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::vfs::VirtualFileSystem;

/// History keeps the most recent 100 commands, oldest evicted first.
pub const HISTORY_LIMIT: usize = 100;

// history echoes of the typed line are clipped so one pasted blob can't
// bloat every later `history` call; output is never clipped
const COMMAND_ECHO_LIMIT: usize = 512;

/// One executed command, immutable once appended to history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalCommand {
    pub command: String,
    pub args: Vec<String>,
    pub output: String,
    pub exit_code: i32,
    pub timestamp: DateTime<Local>,
}

/// Everything one terminal session owns: the virtual filesystem plus the
/// shell-ish state around it (environment, aliases, history). One instance
/// per terminal tab, discarded when the tab closes.
pub struct Session {
    pub vfs: VirtualFileSystem,
    pub env: BTreeMap<String, String>,
    pub aliases: BTreeMap<String, String>,
    pub history: VecDeque<TerminalCommand>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let mut env = BTreeMap::new();
        // HOME is the project root - the whole VFS is one editor project
        env.insert("HOME".to_string(), "/".to_string());
        env.insert("PWD".to_string(), "/".to_string());
        env.insert("USER".to_string(), "user".to_string());
        env.insert("SHELL".to_string(), "/bin/vsh".to_string());
        env.insert("PATH".to_string(), "/usr/local/bin:/usr/bin:/bin".to_string());

        let mut aliases = BTreeMap::new();
        aliases.insert("ll".to_string(), "ls -la".to_string());
        aliases.insert("la".to_string(), "ls -a".to_string());
        aliases.insert("..".to_string(), "cd ..".to_string());
        aliases.insert("cls".to_string(), "clear".to_string());

        Self {
            vfs: VirtualFileSystem::new(),
            env,
            aliases,
            history: VecDeque::new(),
        }
    }

    /// Swap in a freshly imported filesystem (session start / reset) and
    /// point cwd + PWD back at the root.
    pub fn reset_vfs(&mut self, vfs: VirtualFileSystem) {
        self.vfs = vfs;
        self.env.insert("PWD".to_string(), self.vfs.current_dir().to_string());
    }

    pub fn home(&self) -> &str {
        self.env.get("HOME").map(String::as_str).unwrap_or("/")
    }

    /// `user:path $` with the home prefix shown as `~`.
    pub fn prompt(&self) -> String {
        let user = self.env.get("USER").map(String::as_str).unwrap_or("user");
        let cwd = self.vfs.current_dir();
        let home = self.home();
        let shown = if cwd == home {
            "~".to_string()
        } else if home == "/" {
            format!("~{}", cwd)
        } else if cwd.starts_with(home) && cwd.as_bytes().get(home.len()) == Some(&b'/') {
            format!("~{}", &cwd[home.len()..])
        } else {
            cwd.to_string()
        };
        format!("{}:{} $", user, shown)
    }

    pub fn record(&mut self, mut cmd: TerminalCommand) {
        cmd.command = clip(&cmd.command);
        cmd.args = cmd.args.iter().map(|a| clip(a)).collect();
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(cmd);
    }
}

fn clip(s: &str) -> String {
    if s.len() <= COMMAND_ECHO_LIMIT {
        s.to_string()
    } else {
        let mut end = COMMAND_ECHO_LIMIT;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s[..end].to_string()
    }
}

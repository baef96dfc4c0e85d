use chrono::Local;

use crate::command::CommandRegistry;
use crate::session::{Session, TerminalCommand};
use crate::sync::{self, ProjectNode};
use crate::vfs::VfsError;

/// Exit code for a dispatch-table miss, same as every POSIX shell.
pub const EXIT_NOT_FOUND: i32 = 127;

pub type ChangeListener = Box<dyn FnMut(&[ProjectNode])>;

/// What one `execute` produced: the history record plus the artificial
/// latency (ms) the host should sleep before presenting the output.
pub struct ExecutionOutcome {
    pub record: TerminalCommand,
    pub delay_ms: u32,
}

/// One virtual shell. Owns the session state and the command table, started
/// and stopped by the hosting terminal UI - one per terminal tab, nothing
/// shared between tabs.
pub struct Interpreter {
    session: Session,
    registry: CommandRegistry,
    on_change: Option<ChangeListener>,
}

impl Interpreter {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            session: Session::new(),
            registry,
            on_change: None,
        }
    }

    /// Editor callback fired with the full exported tree after every
    /// mutating command.
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Rebuild the filesystem wholesale from the editor's project tree.
    /// Called at session start and on reset; does not fire the change
    /// listener since the editor already has this tree.
    pub fn setup_virtual_fs(&mut self, tree: &[ProjectNode]) -> Result<(), VfsError> {
        let vfs = sync::import_tree(tree)?;
        self.session.reset_vfs(vfs);
        Ok(())
    }

    /// Run one input line through tokenize -> alias -> dispatch -> record.
    pub fn execute(&mut self, line: &str) -> ExecutionOutcome {
        let raw = line.trim();
        if raw.is_empty() {
            // blank line: no output, no history entry
            return noop_outcome();
        }

        let mut tokens = tokenize(raw);
        expand_alias(&mut tokens, &self.session);
        let Some(name) = tokens.first().cloned() else {
            // an alias can legitimately expand to nothing
            return noop_outcome();
        };
        let args = tokens[1..].to_vec();

        tracing::debug!(command = %name, argc = args.len(), "dispatch");

        let generation_before = self.session.vfs.generation();
        let (output, exit_code, delay_ms) = match self.registry.get(&name) {
            Some(handler) => {
                let delay = handler.simulated_delay_ms(&args);
                match handler.execute(&args, &mut self.session) {
                    Ok(output) => (output, 0, delay),
                    // handler failures never escape this layer
                    Err(message) => (message, 1, delay),
                }
            }
            None => (format!("{}: command not found", name), EXIT_NOT_FOUND, 0),
        };

        // one notification per mutating command, after the handler is done,
        // so multi-step handlers (mv = copy + delete) look atomic
        if self.session.vfs.generation() != generation_before {
            if let Some(listener) = self.on_change.as_mut() {
                let tree = sync::export_tree(&self.session.vfs);
                listener(&tree);
            }
        }

        let record = TerminalCommand {
            command: raw.to_string(),
            args,
            output,
            exit_code,
            timestamp: Local::now(),
        };
        self.session.record(record.clone());
        ExecutionOutcome { record, delay_ms }
    }

    /// Prefix completion: command names first, then direct children of the
    /// working directory (directories with a `/` suffix), at most 10.
    pub fn auto_complete(&self, partial: &str) -> Vec<String> {
        const MAX_SUGGESTIONS: usize = 10;
        let partial = partial.trim_start();
        let mut out = Vec::new();
        if partial.is_empty() {
            return out;
        }
        for name in self.registry.get_command_names() {
            if name.starts_with(partial) {
                out.push(name);
            }
        }
        let cwd = self.session.vfs.current_dir();
        let (dirs, files) = self.session.vfs.list_children(cwd);
        for d in dirs {
            if d.starts_with(partial) {
                out.push(format!("{}/", d));
            }
        }
        for f in files {
            if f.starts_with(partial) {
                out.push(f);
            }
        }
        out.truncate(MAX_SUGGESTIONS);
        out
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(CommandRegistry::default_commands())
    }
}

fn noop_outcome() -> ExecutionOutcome {
    ExecutionOutcome {
        record: TerminalCommand {
            command: String::new(),
            args: Vec::new(),
            output: String::new(),
            exit_code: 0,
            timestamp: Local::now(),
        },
        delay_ms: 0,
    }
}

/// Whitespace split, except a double-quoted span stays one token (quotes
/// stripped). No escapes, no single quotes - matches the editor terminal's
/// input conventions.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    tokens
}

// first token only, one level deep - an alias expanding to another alias
// name is left alone
fn expand_alias(tokens: &mut Vec<String>, session: &Session) {
    if let Some(first) = tokens.first() {
        if let Some(expansion) = session.aliases.get(first) {
            let mut expanded = tokenize(expansion);
            expanded.extend(tokens.drain(1..));
            *tokens = expanded;
        }
    }
}

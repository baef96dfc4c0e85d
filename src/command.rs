use std::collections::BTreeMap;

use crate::session::Session;

pub type CommandResult = Result<String, String>;

pub trait Command {
    fn execute(&self, args: &[String], session: &mut Session) -> CommandResult;

    /// Artificial latency in milliseconds for network-flavored commands.
    /// The async entry point sleeps this long before resolving; everything
    /// stays deterministic, only slower.
    fn simulated_delay_ms(&self, _args: &[String]) -> u32 {
        0
    }
}

pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: BTreeMap::new() }
    }

    pub fn register_command(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|b| b.as_ref())
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Filesystem and session builtins - the set every host gets.
    pub fn core_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command("ls", Box::new(crate::commands::ls::LsCommand));
        reg.register_command("cd", Box::new(crate::commands::cd::CdCommand));
        reg.register_command("pwd", Box::new(crate::commands::pwd::PwdCommand));
        reg.register_command("mkdir", Box::new(crate::commands::mkdir::MkdirCommand));
        reg.register_command("rm", Box::new(crate::commands::rm::RmCommand));
        reg.register_command("cat", Box::new(crate::commands::cat::CatCommand));
        reg.register_command("touch", Box::new(crate::commands::touch::TouchCommand));
        reg.register_command("cp", Box::new(crate::commands::cp::CpCommand));
        reg.register_command("mv", Box::new(crate::commands::mv::MvCommand));
        reg.register_command("echo", Box::new(crate::commands::echo::EchoCommand));
        reg.register_command("grep", Box::new(crate::commands::grep::GrepCommand));
        reg.register_command("find", Box::new(crate::commands::find::FindCommand));
        reg.register_command("tree", Box::new(crate::commands::tree::TreeCommand));
        reg.register_command("env", Box::new(crate::commands::env::EnvCommand));
        reg.register_command("export", Box::new(crate::commands::export::ExportCommand));
        reg.register_command("alias", Box::new(crate::commands::alias::AliasCommand));
        reg.register_command("unalias", Box::new(crate::commands::unalias::UnaliasCommand));
        reg.register_command("history", Box::new(crate::commands::history::HistoryCommand));
        reg.register_command("clear", Box::new(crate::commands::clear::ClearCommand));
        reg.register_command("help", Box::new(crate::commands::help::HelpCommand));
        reg
    }

    /// The simulated developer tools: canned output, zero real I/O. Kept
    /// separate so a host can opt out of the whole group.
    pub fn simulated_tools(reg: &mut Self) {
        use crate::commands::npm::{PackageManager, PackageManagerCommand};
        use crate::commands::runtime::{Runtime, RuntimeCommand};
        reg.register_command("npm", Box::new(PackageManagerCommand::new(PackageManager::Npm)));
        reg.register_command("yarn", Box::new(PackageManagerCommand::new(PackageManager::Yarn)));
        reg.register_command("pnpm", Box::new(PackageManagerCommand::new(PackageManager::Pnpm)));
        reg.register_command("node", Box::new(RuntimeCommand::new(Runtime::Node)));
        reg.register_command("python", Box::new(RuntimeCommand::new(Runtime::Python)));
        reg.register_command("pip", Box::new(RuntimeCommand::new(Runtime::Pip)));
        reg.register_command("git", Box::new(crate::commands::git::GitCommand));
        reg.register_command("curl", Box::new(crate::commands::fetch::FetchCommand::curl()));
        reg.register_command("wget", Box::new(crate::commands::fetch::FetchCommand::wget()));
        reg.register_command("serve", Box::new(crate::commands::serve::ServeCommand));
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::core_commands();
        Self::simulated_tools(&mut reg);
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

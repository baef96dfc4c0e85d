use crate::command::{Command, CommandResult};
use crate::session::Session;

/// help
/// The full command reference.
pub struct HelpCommand;

const HELP_TEXT: &str = "\
Available commands:

File system:
  ls [-a] [-l] [path]   list directory contents
  cd [path]             change the working directory
  pwd                   print the working directory
  mkdir [-p] <name>     create a directory
  rm [-r] [-f] <path>   remove a file or directory
  cat <file>            print file contents
  touch <file>          create an empty file
  cp <src> <dst>        copy a file
  mv <src> <dst>        move or rename a file
  find [pattern]        list paths under the working directory
  tree [path]           show the directory hierarchy

Text:
  echo [text]           print text (expands $VARS)
  grep <pattern> <file> search a file, matches with line numbers

Session:
  env                   show environment variables
  export NAME=value     set an environment variable
  alias [name[=value]]  list or define aliases
  unalias <name>        remove an alias
  history               show recent commands
  clear                 clear the terminal
  help                  this text

Simulated tools (no real network or processes):
  npm / yarn / pnpm     package manager commands
  node / python / pip   language runtimes
  git <subcommand>      version control
  curl / wget <url>     fetch a url
  serve                 static file server";

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> CommandResult {
        Ok(HELP_TEXT.to_string())
    }
}

use crate::command::{Command, CommandResult};
use crate::session::Session;

/// curl / wget without a network. The response is the same fixed document
/// every time; the only nod to reality is the simulated latency.
pub struct FetchCommand {
    name: &'static str,
}

const FETCH_DELAY_MS: u32 = 800;

const CANNED_BODY: &str = "<!doctype html>\n<html>\n<head><title>Simulated response</title></head>\n<body>\n  <p>The virtual shell does not perform real network requests.</p>\n</body>\n</html>";

impl FetchCommand {
    pub fn curl() -> Self {
        Self { name: "curl" }
    }

    pub fn wget() -> Self {
        Self { name: "wget" }
    }
}

impl Command for FetchCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> CommandResult {
        let url = match args.iter().find(|a| !a.starts_with('-')) {
            Some(u) => u,
            None => return Err(format!("{}: missing URL", self.name)),
        };
        let out = match self.name {
            "curl" => format!("* Connected to {} (simulated)\n{}", url, CANNED_BODY),
            _ => format!(
                "--simulated--  {}\nResolving host... done.\nHTTP request sent, awaiting response... 200 OK\n'index.html' saved (simulated, nothing written)",
                url
            ),
        };
        Ok(out)
    }

    fn simulated_delay_ms(&self, _args: &[String]) -> u32 {
        FETCH_DELAY_MS
    }
}

// virtual shell for the browser code editor - a fake POSIX-ish terminal
// over an in-memory filesystem, no real processes or disk anywhere
pub mod command;
pub mod commands;
pub mod events;
pub mod interpreter;
pub mod path;
pub mod session;
pub mod sync;
pub mod vfs;

use wasm_bindgen::prelude::*;

use command::CommandRegistry;
use interpreter::Interpreter;
use sync::ProjectNode;

// better errors in browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One terminal tab's shell, exported to the hosting editor. The editor
/// constructs it on mount, feeds it the project tree, pushes completed
/// input lines through `execute`, and drops it when the tab closes.
#[wasm_bindgen]
pub struct TerminalSession {
    interpreter: Interpreter,
}

#[wasm_bindgen]
impl TerminalSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TerminalSession {
        let mut interpreter = Interpreter::new(CommandRegistry::default_commands());
        // every mutating command pushes the whole exported tree back at the
        // editor; reconciliation is the editor's job
        interpreter.set_change_listener(Box::new(|tree| events::emit_fs_change(tree)));
        TerminalSession { interpreter }
    }

    /// Rebuild the filesystem from the editor's project tree. Call once per
    /// session start or reset.
    #[wasm_bindgen(js_name = setupVirtualFS)]
    pub fn setup_virtual_fs(&mut self, tree: JsValue) -> Result<(), JsValue> {
        let nodes: Vec<ProjectNode> =
            serde_wasm_bindgen::from_value(tree).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.interpreter
            .setup_virtual_fs(&nodes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run one completed input line. Resolves to the executed command
    /// record; network-flavored commands resolve after their simulated
    /// latency, and the host must not submit the next line before then.
    pub async fn execute(&mut self, line: String) -> JsValue {
        let outcome = self.interpreter.execute(&line);
        #[cfg(target_arch = "wasm32")]
        if outcome.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(outcome.delay_ms).await;
        }
        serde_wasm_bindgen::to_value(&outcome.record).unwrap_or(JsValue::NULL)
    }

    /// Tab-completion candidates for a partial word: command names first,
    /// then entries of the working directory, at most 10.
    #[wasm_bindgen(js_name = getAutoComplete)]
    pub fn get_auto_complete(&self, partial: &str) -> JsValue {
        let suggestions = self.interpreter.auto_complete(partial);
        serde_wasm_bindgen::to_value(&suggestions).unwrap_or(JsValue::NULL)
    }

    /// `user:path $`, home shown as `~`.
    #[wasm_bindgen(js_name = getPrompt)]
    pub fn get_prompt(&self) -> String {
        self.interpreter.prompt()
    }

    #[wasm_bindgen(js_name = currentDirectory)]
    pub fn current_directory(&self) -> String {
        self.interpreter.session().vfs.current_dir().to_string()
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

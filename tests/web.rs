//! Browser smoke tests for the exported session. Run with `wasm-pack test`;
//! the full engine coverage lives in the native unit tests.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use vshell::TerminalSession;

wasm_bindgen_test_configure!(run_in_browser);

fn project_tree() -> wasm_bindgen::JsValue {
    let tree = serde_json::json!([
        {
            "name": "src",
            "path": "/src",
            "type": "folder",
            "children": [
                { "name": "index.js", "path": "/src/index.js", "type": "file", "content": "console.log('hi');\n" }
            ]
        }
    ]);
    serde_wasm_bindgen::to_value(&tree).unwrap()
}

#[wasm_bindgen_test]
async fn executes_against_imported_tree() {
    let mut session = TerminalSession::new();
    session.setup_virtual_fs(project_tree()).unwrap();

    let record = session.execute("ls src".to_string()).await;
    let json: serde_json::Value = serde_wasm_bindgen::from_value(record).unwrap();
    assert_eq!(json["output"], "index.js");
    assert_eq!(json["exitCode"], 0);
}

#[wasm_bindgen_test]
async fn unknown_command_is_reported() {
    let mut session = TerminalSession::new();
    let record = session.execute("frobnicate".to_string()).await;
    let json: serde_json::Value = serde_wasm_bindgen::from_value(record).unwrap();
    assert_eq!(json["exitCode"], 127);
}

#[wasm_bindgen_test]
fn autocomplete_is_capped() {
    let session = TerminalSession::new();
    let value = session.get_auto_complete("c");
    let list: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(!list.is_empty() && list.len() <= 10);
}

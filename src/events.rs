//! Delivery of filesystem-change notifications to the hosting editor. The
//! payload is always the full exported tree, not a diff - the editor
//! reconciles it against its own state.

use crate::sync::ProjectNode;

/// Hand the exported tree to the page. Prefers the global
/// `__onFileSystemChange` callback; falls back to a `vfs-change`
/// CustomEvent on window when the callback isn't installed.
#[cfg(target_arch = "wasm32")]
pub fn emit_fs_change(tree: &[ProjectNode]) {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{window, CustomEvent, CustomEventInit};

    let Some(win) = window() else {
        web_sys::console::warn_1(&"[vshell] no window object, dropping fs-change".into());
        return;
    };

    let detail = match serde_wasm_bindgen::to_value(tree) {
        Ok(v) => v,
        Err(_) => JsValue::NULL,
    };

    // global callback first - dom events get lost when the terminal is
    // mounted inside a shadow root
    if let Ok(cb) = js_sys::Reflect::get(win.as_ref(), &"__onFileSystemChange".into()) {
        if cb.is_function() {
            let cb: js_sys::Function = cb.unchecked_into();
            if cb.call1(&JsValue::NULL, &detail).is_ok() {
                return;
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict("vfs-change", &init) {
        let _ = win.dispatch_event(&event);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit_fs_change(_tree: &[ProjectNode]) {}

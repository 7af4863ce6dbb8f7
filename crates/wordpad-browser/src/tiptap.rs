//! `DocumentSurface` backed by a TipTap editor.
//!
//! The host page constructs the TipTap `Editor` (StarterKit + Image) and
//! hands it over. Every command runs as `chain().focus().<cmd>().run()`, one transaction
//! per call.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wordpad_core::upload::TRAILING_PARAGRAPH;
use wordpad_core::{DocumentSurface, Mark};

#[wasm_bindgen]
extern "C" {
    /// A TipTap `Editor` instance.
    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    pub type TiptapEditor;

    #[wasm_bindgen(method)]
    pub fn chain(this: &TiptapEditor) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = isActive)]
    pub fn is_active(this: &TiptapEditor, name: &str, attributes: &JsValue) -> bool;

    #[wasm_bindgen(method)]
    pub fn on(this: &TiptapEditor, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &TiptapEditor, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method, getter, js_name = isDestroyed)]
    pub fn is_destroyed(this: &TiptapEditor) -> bool;

    /// Builder returned by `editor.chain()`.
    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    pub type ChainedCommands;

    #[wasm_bindgen(method)]
    pub fn focus(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = insertContent)]
    pub fn insert_content(this: &ChainedCommands, value: &str) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = setImage)]
    pub fn set_image(this: &ChainedCommands, options: &JsValue) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = toggleBold)]
    pub fn toggle_bold(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = toggleItalic)]
    pub fn toggle_italic(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = toggleHeading)]
    pub fn toggle_heading(this: &ChainedCommands, attributes: &JsValue) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = toggleBulletList)]
    pub fn toggle_bullet_list(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method, js_name = toggleOrderedList)]
    pub fn toggle_ordered_list(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method)]
    pub fn undo(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method)]
    pub fn redo(this: &ChainedCommands) -> ChainedCommands;

    #[wasm_bindgen(method)]
    pub fn run(this: &ChainedCommands) -> bool;
}

/// Build a `{ key: value }` attribute object.
fn attrs(key: &str, value: JsValue) -> JsValue {
    let obj = Object::new();
    // Setting a plain property on a fresh object can't fail.
    let _ = Reflect::set(&obj, &JsValue::from_str(key), &value);
    obj.into()
}

/// TipTap-backed document surface.
pub struct TiptapSurface {
    editor: TiptapEditor,
}

impl TiptapSurface {
    pub fn new(editor: TiptapEditor) -> Self {
        Self { editor }
    }

    pub fn editor(&self) -> &TiptapEditor {
        &self.editor
    }

    fn run(&self, command: impl FnOnce(ChainedCommands) -> ChainedCommands) {
        if self.editor.is_destroyed() {
            tracing::debug!("command on destroyed editor ignored");
            return;
        }
        let applied = command(self.editor.chain().focus()).run();
        if !applied {
            tracing::debug!("editor command not applied");
        }
    }
}

impl DocumentSurface for TiptapSurface {
    fn insert_content(&self, html: &str) {
        self.run(|chain| chain.insert_content(html));
    }

    fn set_image(&self, src: &str) {
        let options = attrs("src", JsValue::from_str(src));
        self.run(|chain| chain.set_image(&options));
    }

    fn insert_image_block(&self, src: &str) {
        let options = attrs("src", JsValue::from_str(src));
        self.run(|chain| chain.set_image(&options).insert_content(TRAILING_PARAGRAPH));
    }

    fn toggle_bold(&self) {
        self.run(|chain| chain.toggle_bold());
    }

    fn toggle_italic(&self) {
        self.run(|chain| chain.toggle_italic());
    }

    fn toggle_heading(&self, level: u8) {
        let level = attrs("level", JsValue::from(level));
        self.run(|chain| chain.toggle_heading(&level));
    }

    fn toggle_bullet_list(&self) {
        self.run(|chain| chain.toggle_bullet_list());
    }

    fn toggle_ordered_list(&self) {
        self.run(|chain| chain.toggle_ordered_list());
    }

    fn undo(&self) {
        self.run(|chain| chain.undo());
    }

    fn redo(&self) {
        self.run(|chain| chain.redo());
    }

    fn is_active(&self, mark: Mark) -> bool {
        if self.editor.is_destroyed() {
            return false;
        }
        let attributes = match mark {
            Mark::Heading(level) => attrs("level", JsValue::from(level)),
            _ => JsValue::UNDEFINED,
        };
        self.editor.is_active(mark.schema_name(), &attributes)
    }
}

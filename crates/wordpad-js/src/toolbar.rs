//! Toolbar DOM: one button per command plus the hidden image picker.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, HtmlInputElement};
use wordpad_core::{ToolbarCommand, ToolbarState};

pub(crate) struct Toolbar {
    buttons: Vec<(ToolbarCommand, HtmlElement)>,
    file_input: HtmlInputElement,
}

impl Toolbar {
    /// Create the buttons and append them to `container`.
    pub fn build(document: &Document, container: &HtmlElement) -> Result<Self, JsValue> {
        let mut buttons = Vec::with_capacity(ToolbarCommand::TOOLBAR.len());
        for &command in ToolbarCommand::TOOLBAR {
            let button: HtmlElement = document.create_element("button")?.dyn_into()?;
            button.set_attribute("type", "button")?;
            button.set_attribute("data-command", &command.to_string())?;
            button.set_title(&command.title());
            button.set_text_content(Some(&command.label()));
            button.class_list().add_1("toolbar-button")?;
            container.append_child(&button)?;
            buttons.push((command, button));
        }

        let file_input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        file_input.set_type("file");
        file_input.set_accept("image/*");
        file_input.set_hidden(true);
        container.append_child(&file_input)?;

        Ok(Self {
            buttons,
            file_input,
        })
    }

    pub fn buttons(&self) -> &[(ToolbarCommand, HtmlElement)] {
        &self.buttons
    }

    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }

    /// Reflect `state` as `is-active` / `aria-pressed` on mark buttons.
    pub fn refresh(&self, state: &ToolbarState) {
        for (command, button) in &self.buttons {
            if command.mark().is_none() {
                continue;
            }
            let active = state.is_active(*command);
            let _ = button.class_list().toggle_with_force("is-active", active);
            let _ = button.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
    }

    /// Detach everything this toolbar added to the DOM.
    pub fn remove(&self) {
        for (_, button) in &self.buttons {
            button.remove();
        }
        self.file_input.remove();
    }
}

//! JsWordpad - the editor page wrapper for JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use wordpad_browser::{
    TiptapEditor, TiptapSurface, export_and_notify, handle_file_selected, handle_paste_event,
    js_error_message,
};
use wordpad_core::{ClipboardIngest, ToolbarCommand, ToolbarState, WordpadConfig, execute_command};

use crate::toolbar::Toolbar;

/// State shared with event listeners.
struct Shared {
    surface: Rc<TiptapSurface>,
    ingest: ClipboardIngest,
    config: WordpadConfig,
    notifier: RefCell<Option<js_sys::Function>>,
}

/// DOM wiring that exists only while mounted.
struct Mounted {
    editor: TiptapEditor,
    page: HtmlElement,
    toolbar: Rc<Toolbar>,
    _listeners: Vec<EventListener>,
    on_transaction: Closure<dyn FnMut()>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if !self.editor.is_destroyed() {
            self.editor
                .off("transaction", self.on_transaction.as_ref().unchecked_ref());
        }
        self.toolbar.remove();
    }
}

/// The editor page instance exposed to JavaScript.
#[wasm_bindgen]
pub struct JsWordpad {
    shared: Rc<Shared>,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl JsWordpad {
    /// Wrap a TipTap editor. `config` is an optional partial `WordpadConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(editor: TiptapEditor, config: JsValue) -> Result<JsWordpad, JsError> {
        let config: WordpadConfig = if config.is_undefined() || config.is_null() {
            WordpadConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };
        let ingest = ClipboardIngest::new(config.phrase_filter()?);

        tracing::debug!(phrases = ingest.filter().len(), "wordpad created");

        Ok(Self {
            shared: Rc::new(Shared {
                surface: Rc::new(TiptapSurface::new(editor)),
                ingest,
                config,
                notifier: RefCell::new(None),
            }),
            mounted: None,
        })
    }

    /// Build the toolbar into `toolbar` and intercept pastes on `page`.
    ///
    /// `page` is also the element exported to PDF. Mounting again replaces
    /// the previous wiring.
    pub fn mount(&mut self, toolbar: HtmlElement, page: HtmlElement) -> Result<(), JsError> {
        self.mounted = None;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document"))?;
        let ui = Rc::new(
            Toolbar::build(&document, &toolbar)
                .map_err(|e| JsError::new(&js_error_message(&e)))?,
        );

        let mut listeners = Vec::new();

        for (command, button) in ui.buttons() {
            let command = *command;
            let shared = self.shared.clone();
            let ui = ui.clone();
            listeners.push(EventListener::new(button, "click", move |_| {
                if command == ToolbarCommand::InsertImage {
                    ui.file_input().click();
                    return;
                }
                execute_command(shared.surface.as_ref(), command);
                ui.refresh(&ToolbarState::derive(shared.surface.as_ref()));
            }));
        }

        {
            let surface = self.shared.surface.clone();
            let input = ui.file_input().clone();
            listeners.push(EventListener::new(ui.file_input(), "change", move |_| {
                handle_file_selected(&input, surface.clone());
            }));
        }

        {
            // Capture phase, so a sanitized paste never reaches the editor's
            // own paste handling inside `page`.
            let shared = self.shared.clone();
            let options = EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: false,
            };
            listeners.push(EventListener::new_with_options(
                &page,
                "paste",
                options,
                move |event| {
                    let Some(evt) = event.dyn_ref::<web_sys::ClipboardEvent>() else {
                        tracing::warn!("paste event is not a ClipboardEvent");
                        return;
                    };
                    handle_paste_event(evt, &shared.ingest, shared.surface.as_ref());
                },
            ));
        }

        let on_transaction = {
            let surface = self.shared.surface.clone();
            let ui = ui.clone();
            Closure::<dyn FnMut()>::new(move || {
                ui.refresh(&ToolbarState::derive(surface.as_ref()));
            })
        };
        let editor = self.shared.surface.editor().clone();
        editor.on("transaction", on_transaction.as_ref().unchecked_ref());

        ui.refresh(&ToolbarState::derive(self.shared.surface.as_ref()));

        self.mounted = Some(Mounted {
            editor,
            page,
            toolbar: ui,
            _listeners: listeners,
            on_transaction,
        });
        Ok(())
    }

    /// Remove the toolbar and all listeners.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    /// Run a toolbar command by name (`bold`, `h1`, `undo`, `image`, ...).
    ///
    /// Returns false if nothing was dispatched.
    pub fn execute(&self, command: &str) -> Result<bool, JsError> {
        let command: ToolbarCommand = command.parse()?;
        if command == ToolbarCommand::InsertImage {
            return Ok(match &self.mounted {
                Some(mounted) => {
                    mounted.toolbar.file_input().click();
                    true
                }
                None => false,
            });
        }
        Ok(execute_command(self.shared.surface.as_ref(), command))
    }

    /// Whether the button for `command` is currently highlighted.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self, command: &str) -> Result<bool, JsError> {
        let command: ToolbarCommand = command.parse()?;
        Ok(ToolbarState::derive(self.shared.surface.as_ref()).is_active(command))
    }

    /// Sanitize text the way pastes are sanitized.
    pub fn sanitize(&self, text: &str) -> String {
        self.shared.ingest.filter().sanitize(text)
    }

    /// Set the callback used for non-fatal notifications (e.g. failed export).
    ///
    /// Without one, `window.alert` is used.
    #[wasm_bindgen(js_name = setNotifier)]
    pub fn set_notifier(&self, callback: Option<js_sys::Function>) {
        *self.shared.notifier.borrow_mut() = callback;
    }

    /// Export the mounted page to `document.pdf` (or the configured name).
    ///
    /// Resolves to true on success. Failures are notified and resolve to
    /// false rather than rejecting.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self) -> js_sys::Promise {
        let shared = self.shared.clone();
        let page = self.mounted.as_ref().map(|m| m.page.clone());
        let notifier = self.shared.notifier.borrow().clone();

        wasm_bindgen_futures::future_to_promise(async move {
            let exported =
                export_and_notify(page.as_deref(), &shared.config.export, notifier.as_ref()).await;
            Ok(JsValue::from_bool(exported))
        })
    }
}

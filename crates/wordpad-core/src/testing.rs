//! Test double for `DocumentSurface`.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::surface::{DocumentSurface, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    InsertContent(String),
    SetImage(String),
    /// Image plus trailing paragraph, recorded only by a batched surface.
    InsertImageBlock(String),
    ToggleBold,
    ToggleItalic,
    ToggleHeading(u8),
    ToggleBulletList,
    ToggleOrderedList,
    Undo,
    Redo,
}

/// Records every call and keeps a set of active marks that the toggles flip.
#[derive(Default)]
pub struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
    active: RefCell<HashSet<Mark>>,
    batched: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface that overrides `insert_image_block` with one call.
    pub fn batched() -> Self {
        Self {
            batched: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn set_active(&self, mark: Mark, active: bool) {
        let mut set = self.active.borrow_mut();
        if active {
            set.insert(mark);
        } else {
            set.remove(&mark);
        }
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }

    fn toggle(&self, mark: Mark) {
        let mut set = self.active.borrow_mut();
        if !set.remove(&mark) {
            set.insert(mark);
        }
    }
}

impl DocumentSurface for RecordingSurface {
    fn insert_content(&self, html: &str) {
        self.record(SurfaceCall::InsertContent(html.to_string()));
    }

    fn set_image(&self, src: &str) {
        self.record(SurfaceCall::SetImage(src.to_string()));
    }

    fn insert_image_block(&self, src: &str) {
        if self.batched {
            self.record(SurfaceCall::InsertImageBlock(src.to_string()));
        } else {
            self.set_image(src);
            self.insert_content(crate::upload::TRAILING_PARAGRAPH);
        }
    }

    fn toggle_bold(&self) {
        self.record(SurfaceCall::ToggleBold);
        self.toggle(Mark::Bold);
    }

    fn toggle_italic(&self) {
        self.record(SurfaceCall::ToggleItalic);
        self.toggle(Mark::Italic);
    }

    fn toggle_heading(&self, level: u8) {
        self.record(SurfaceCall::ToggleHeading(level));
        self.toggle(Mark::Heading(level));
    }

    fn toggle_bullet_list(&self) {
        self.record(SurfaceCall::ToggleBulletList);
        self.toggle(Mark::BulletList);
    }

    fn toggle_ordered_list(&self) {
        self.record(SurfaceCall::ToggleOrderedList);
        self.toggle(Mark::OrderedList);
    }

    fn undo(&self) {
        self.record(SurfaceCall::Undo);
    }

    fn redo(&self) {
        self.record(SurfaceCall::Redo);
    }

    fn is_active(&self, mark: Mark) -> bool {
        self.active.borrow().contains(&mark)
    }
}

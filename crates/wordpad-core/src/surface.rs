//! Document surface trait and toolbar commands.
//!
//! The rich-text engine (document model, undo history, rendering) lives
//! outside this crate. `DocumentSurface` is the seam: the browser layer
//! implements it over TipTap, tests implement it with a recorder.
//!
//! Toolbar state is never stored on our side. `ToolbarState::derive` asks the
//! surface each time, so the highlight can't drift from the real formatting.

use std::fmt;
use std::str::FromStr;

use crate::error::WordpadError;
use crate::upload::TRAILING_PARAGRAPH;

/// Marks and block types the surface can report as active at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    /// Heading with level 1..=6.
    Heading(u8),
    BulletList,
    OrderedList,
}

impl Mark {
    /// Name of the mark/node type in the editor schema.
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading(_) => "heading",
            Self::BulletList => "bulletList",
            Self::OrderedList => "orderedList",
        }
    }
}

/// Core trait for the editable region.
///
/// Every mutating call applies at the current caret and focuses the surface
/// first. Methods take `&self` since the engine owns its own state and may
/// call back into us (transaction listeners) while a command is running.
pub trait DocumentSurface {
    /// Insert an HTML fragment at the caret.
    fn insert_content(&self, html: &str);

    /// Insert an image node with the given source at the caret.
    fn set_image(&self, src: &str);

    /// Insert an image followed by an empty paragraph, as one undo step.
    ///
    /// Surfaces that batch commands should override this; the default runs
    /// two separate commands.
    fn insert_image_block(&self, src: &str) {
        self.set_image(src);
        self.insert_content(TRAILING_PARAGRAPH);
    }

    fn toggle_bold(&self);

    fn toggle_italic(&self);

    fn toggle_heading(&self, level: u8);

    fn toggle_bullet_list(&self);

    fn toggle_ordered_list(&self);

    fn undo(&self);

    fn redo(&self);

    /// Whether `mark` is active at the caret.
    fn is_active(&self, mark: Mark) -> bool;
}

/// A toolbar button's command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarCommand {
    Bold,
    Italic,
    Heading(u8),
    BulletList,
    OrderedList,
    Undo,
    Redo,
    /// Open the image file picker.
    InsertImage,
}

impl ToolbarCommand {
    /// Buttons shown on the toolbar, in order.
    pub const TOOLBAR: &'static [ToolbarCommand] = &[
        Self::Bold,
        Self::Italic,
        Self::Heading(1),
        Self::Heading(2),
        Self::BulletList,
        Self::OrderedList,
        Self::Undo,
        Self::Redo,
        Self::InsertImage,
    ];

    /// Button text.
    pub fn label(&self) -> String {
        match self {
            Self::Bold => "B".into(),
            Self::Italic => "I".into(),
            Self::Heading(level) => format!("H{level}"),
            Self::BulletList => "•".into(),
            Self::OrderedList => "1.".into(),
            Self::Undo => "↶".into(),
            Self::Redo => "↷".into(),
            Self::InsertImage => "Image".into(),
        }
    }

    /// Tooltip / accessible name.
    pub fn title(&self) -> String {
        match self {
            Self::Bold => "Bold".into(),
            Self::Italic => "Italic".into(),
            Self::Heading(level) => format!("Heading {level}"),
            Self::BulletList => "Bullet list".into(),
            Self::OrderedList => "Numbered list".into(),
            Self::Undo => "Undo".into(),
            Self::Redo => "Redo".into(),
            Self::InsertImage => "Insert image".into(),
        }
    }

    /// The mark whose active state this button reflects, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Self::Bold => Some(Mark::Bold),
            Self::Italic => Some(Mark::Italic),
            Self::Heading(level) => Some(Mark::Heading(*level)),
            Self::BulletList => Some(Mark::BulletList),
            Self::OrderedList => Some(Mark::OrderedList),
            Self::Undo | Self::Redo | Self::InsertImage => None,
        }
    }
}

impl fmt::Display for ToolbarCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bold => f.write_str("bold"),
            Self::Italic => f.write_str("italic"),
            Self::Heading(level) => write!(f, "h{level}"),
            Self::BulletList => f.write_str("bulletList"),
            Self::OrderedList => f.write_str("orderedList"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::InsertImage => f.write_str("image"),
        }
    }
}

impl FromStr for ToolbarCommand {
    type Err = WordpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmd = match s {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "bulletList" => Self::BulletList,
            "orderedList" => Self::OrderedList,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "image" => Self::InsertImage,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            _ => return Err(WordpadError::UnknownCommand(s.to_string())),
        };
        Ok(cmd)
    }
}

/// Execute a toolbar command on a surface.
///
/// Returns true if the command was dispatched to the surface. `InsertImage`
/// needs a file picker and is left to the platform layer.
pub fn execute_command<S: DocumentSurface + ?Sized>(surface: &S, command: ToolbarCommand) -> bool {
    tracing::debug!(%command, "toolbar command");
    match command {
        ToolbarCommand::Bold => surface.toggle_bold(),
        ToolbarCommand::Italic => surface.toggle_italic(),
        ToolbarCommand::Heading(level) => surface.toggle_heading(level),
        ToolbarCommand::BulletList => surface.toggle_bullet_list(),
        ToolbarCommand::OrderedList => surface.toggle_ordered_list(),
        ToolbarCommand::Undo => surface.undo(),
        ToolbarCommand::Redo => surface.redo(),
        ToolbarCommand::InsertImage => return false,
    }
    true
}

/// Active formatting at the caret, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarState {
    pub bold: bool,
    pub italic: bool,
    /// Level of the active heading, if the caret is in one.
    pub heading: Option<u8>,
    pub bullet_list: bool,
    pub ordered_list: bool,
}

impl ToolbarState {
    /// Query the surface for the current state.
    pub fn derive<S: DocumentSurface + ?Sized>(surface: &S) -> Self {
        Self {
            bold: surface.is_active(Mark::Bold),
            italic: surface.is_active(Mark::Italic),
            heading: (1..=6).find(|&level| surface.is_active(Mark::Heading(level))),
            bullet_list: surface.is_active(Mark::BulletList),
            ordered_list: surface.is_active(Mark::OrderedList),
        }
    }

    /// Whether the button for `command` should be highlighted.
    pub fn is_active(&self, command: ToolbarCommand) -> bool {
        match command {
            ToolbarCommand::Bold => self.bold,
            ToolbarCommand::Italic => self.italic,
            ToolbarCommand::Heading(level) => self.heading == Some(level),
            ToolbarCommand::BulletList => self.bullet_list,
            ToolbarCommand::OrderedList => self.ordered_list,
            ToolbarCommand::Undo | ToolbarCommand::Redo | ToolbarCommand::InsertImage => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, SurfaceCall};

    #[test]
    fn test_parse_commands() {
        assert_eq!("bold".parse::<ToolbarCommand>().unwrap(), ToolbarCommand::Bold);
        assert_eq!("h1".parse::<ToolbarCommand>().unwrap(), ToolbarCommand::Heading(1));
        assert_eq!("h6".parse::<ToolbarCommand>().unwrap(), ToolbarCommand::Heading(6));
        assert_eq!(
            "orderedList".parse::<ToolbarCommand>().unwrap(),
            ToolbarCommand::OrderedList
        );
        assert_eq!(
            "image".parse::<ToolbarCommand>().unwrap(),
            ToolbarCommand::InsertImage
        );
    }

    #[test]
    fn test_parse_rejects_bad_heading() {
        for bad in ["h0", "h7", "h", "hx", "h01", "h+1", "h 1", "H1", "Bold", ""] {
            let err = bad.parse::<ToolbarCommand>().unwrap_err();
            assert!(matches!(err, WordpadError::UnknownCommand(_)), "{bad}");
        }
    }

    #[test]
    fn test_display_parses_back() {
        for cmd in ToolbarCommand::TOOLBAR {
            assert_eq!(cmd.to_string().parse::<ToolbarCommand>().unwrap(), *cmd);
        }
    }

    #[test]
    fn test_each_command_dispatches_one_call() {
        let cases = [
            (ToolbarCommand::Bold, SurfaceCall::ToggleBold),
            (ToolbarCommand::Italic, SurfaceCall::ToggleItalic),
            (ToolbarCommand::Heading(2), SurfaceCall::ToggleHeading(2)),
            (ToolbarCommand::BulletList, SurfaceCall::ToggleBulletList),
            (ToolbarCommand::OrderedList, SurfaceCall::ToggleOrderedList),
            (ToolbarCommand::Undo, SurfaceCall::Undo),
            (ToolbarCommand::Redo, SurfaceCall::Redo),
        ];
        for (cmd, expected) in cases {
            let surface = RecordingSurface::new();
            assert!(execute_command(&surface, cmd));
            assert_eq!(surface.calls(), vec![expected]);
        }
    }

    #[test]
    fn test_insert_image_is_left_to_platform() {
        let surface = RecordingSurface::new();
        assert!(!execute_command(&surface, ToolbarCommand::InsertImage));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_state_follows_surface() {
        let surface = RecordingSurface::new();
        assert_eq!(ToolbarState::derive(&surface), ToolbarState::default());

        surface.set_active(Mark::Bold, true);
        surface.set_active(Mark::Heading(2), true);
        let state = ToolbarState::derive(&surface);
        assert!(state.bold);
        assert!(!state.italic);
        assert_eq!(state.heading, Some(2));
        assert!(state.is_active(ToolbarCommand::Bold));
        assert!(state.is_active(ToolbarCommand::Heading(2)));
        assert!(!state.is_active(ToolbarCommand::Heading(1)));
        assert!(!state.is_active(ToolbarCommand::Undo));

        // Toggling through the surface is reflected on the next derive.
        execute_command(&surface, ToolbarCommand::Bold);
        assert!(!ToolbarState::derive(&surface).bold);
    }
}

//! Screen trait and associated types.
//!
//! Screens own their local state, draw themselves, and answer input with a
//! [`ScreenAction`] instead of reaching into the view controller. The app
//! applies the action.

use crate::controller::{ViewId, Workspace};
use crate::keymap::{Action, Keymap};
use crate::widgets::ToastMessage;
use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources for rendering.
pub struct RenderContext<'a> {
    pub keymap: &'a Keymap,
    /// The committed workspace.
    pub workspace: &'a Workspace,
}

impl<'a> RenderContext<'a> {
    pub fn new(keymap: &'a Keymap, workspace: &'a Workspace) -> Self {
        Self { keymap, workspace }
    }
}

/// Read-only resources for event handling.
pub struct ScreenContext<'a> {
    pub keymap: &'a Keymap,
    pub workspace: &'a Workspace,
    /// Wall-clock time used to stamp notes and new ideas.
    pub now: NaiveDateTime,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap, workspace: &'a Workspace, now: NaiveDateTime) -> Self {
        Self {
            keymap,
            workspace,
            now,
        }
    }

    /// The keymap action for a key press, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.keymap.get_action(key.code, key.modifiers)
    }
}

/// What a screen asks the app to do after handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Switch to another top-level view.
    Navigate(ViewId),
    /// Enter a project's team space.
    SelectProject(String),
    /// Leave the team space.
    BackToPersonal,
    /// Show a notification.
    Toast(ToastMessage),
    /// Open the help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

/// A top-level screen.
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event the app did not consume itself.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// While true, the app forwards every key here so the user can type
    /// freely; global shortcuts are suspended.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Footer hint text, `"keys: Label | ..."`.
    fn footer(&self, keymap: &Keymap) -> String {
        keymap.footer_navigation()
    }
}

/// The key of a press event; repeats and releases are ignored.
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};

    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn char_key(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    /// Send one event to a screen with default keymap and the given workspace.
    pub fn send(screen: &mut dyn Screen, workspace: &Workspace, event: Event) -> ScreenAction {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, workspace, now());
        screen.handle_event(event, &ctx).unwrap()
    }

    /// Type a string into a focused input.
    pub fn type_text(screen: &mut dyn Screen, workspace: &Workspace, text: &str) {
        for c in text.chars() {
            send(screen, workspace, char_key(c));
        }
    }

    /// Render a screen into a test terminal and return its text.
    pub fn render_text(screen: &mut dyn Screen, workspace: &Workspace, width: u16, height: u16) -> String {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&keymap, workspace);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
        crate::utils::buffer_to_string(terminal.backend().buffer())
    }
}

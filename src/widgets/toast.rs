//! Toast notification widget.
//!
//! A non-blocking notification that appears in the corner of the screen
//! and closes itself after a few seconds. Expiry is measured against the
//! instant the caller passes in, so it follows the same clock as the
//! workspace transition timers.

use crate::controller::OneShot;
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Toast notification variant for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Warning => "\u{26A0}", // ⚠
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    fn style(&self) -> Style {
        let t = theme();
        match self {
            ToastVariant::Success => t.success_style(),
            ToastVariant::Info => t.emphasis_style(),
            ToastVariant::Warning => t.warning_style(),
            ToastVariant::Error => t.error_style(),
        }
    }
}

/// A message waiting to be shown, before it has a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: ToastVariant::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: ToastVariant::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: ToastVariant::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: ToastVariant::Error,
        }
    }
}

/// A toast on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: ToastMessage,
    timer: OneShot,
}

impl Toast {
    pub fn new(message: ToastMessage, now: Instant) -> Self {
        Self {
            message,
            timer: OneShot::start(now, DEFAULT_DURATION),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.timer = OneShot::start(self.timer.started_at(), duration);
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.timer.is_due(now)
    }
}

/// Renders a toast in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(area: Rect) -> Rect {
        let toast_width = 44u16.min(area.width.saturating_sub(4));
        let toast_height = 3u16.min(area.height);

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 2); // Above footer

        Rect::new(x, y, toast_width, toast_height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::calculate_area(area);
        let variant = self.toast.message.variant;

        Widget::render(Clear, toast_area, buf);

        let message = format!(" {} {} ", variant.icon(), self.toast.message.message);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(variant.style());

        Paragraph::new(message)
            .block(block)
            .style(theme().text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds the single toast currently on screen.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show a message, replacing any existing toast
    pub fn push(&mut self, message: ToastMessage, now: Instant) {
        self.current = Some(Toast::new(message, now));
    }

    /// Drop an expired toast; returns whether one is still showing
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}

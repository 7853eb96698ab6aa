//! User-facing status line.

use colored::{ColoredString, Colorize};

use crate::models::EventCode;

/// Visual weight of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Muted,
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
}

impl Status {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }

    pub fn competitors_loaded(count: usize) -> Self {
        Self::new(format!("Loaded {} competitors.", count), Tone::Success)
    }

    pub fn competitors_failed() -> Self {
        Self::new(
            "Failed to load competitors. Check the network or proxy settings.",
            Tone::Error,
        )
    }

    pub fn events_loaded(count: usize) -> Self {
        Self::new(format!("Loaded {} events.", count), Tone::Success)
    }

    pub fn events_failed() -> Self {
        Self::new(
            "Failed to load events. Check the network or proxy settings.",
            Tone::Error,
        )
    }

    pub fn no_event_selected() -> Self {
        Self::new("Select an event first.", Tone::Error)
    }

    pub fn no_competitors_loaded() -> Self {
        Self::new("Load competitors before ranking.", Tone::Error)
    }

    pub fn nobody_registered() -> Self {
        Self::new("No competitors registered for that event.", Tone::Info)
    }

    pub fn ranking_loaded(event: EventCode) -> Self {
        Self::new(format!("Loaded pre-ranking for {}.", event), Tone::Success)
    }

    /// Status text colored by tone, for terminal output.
    pub fn colored(&self) -> ColoredString {
        match self.tone {
            Tone::Muted => self.text.dimmed(),
            Tone::Info => self.text.blue(),
            Tone::Success => self.text.green(),
            Tone::Error => self.text.red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

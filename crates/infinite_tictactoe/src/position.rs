//! Named board positions, for reading and describing moves.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A square named by where it sits; the discriminant is its board index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(usize)]
pub enum Position {
    /// Index 0.
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Index 1.
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Index 2.
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Index 3.
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Index 4.
    #[strum(serialize = "Center")]
    Center,
    /// Index 5.
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Index 6.
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Index 7.
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Index 8.
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// Display label, e.g. `Top-left`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Reads what a player typed: a board index (0-8) or a label.
    ///
    /// Labels match case-insensitively and ignore spaces, dashes and
    /// underscores, so `"top left"`, `"Top-left"` and `"TOP_LEFT"` all work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        let wanted = squash(s);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|position| squash(position.label()) == wanted)
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The position at `index`, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Row 0-2, top to bottom.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column 0-2, left to right.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

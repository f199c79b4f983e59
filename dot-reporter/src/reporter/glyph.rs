use colored::Colorize;
use strum::{Display, EnumIter};

/// Outcome of a single test, as far as the dot display cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TestStatus {
    Success,
    Fail,
    Error,
    Skipped,
    Incomplete,
    Warning,
}

impl TestStatus {
    pub fn glyph(&self) -> Glyph {
        match self {
            TestStatus::Success => Glyph::plain('.'),
            TestStatus::Fail => Glyph::error('F'),
            TestStatus::Error => Glyph::error('E'),
            TestStatus::Skipped => Glyph::plain('S'),
            TestStatus::Incomplete => Glyph::plain('I'),
            TestStatus::Warning => Glyph::plain('W'),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestStatus::Fail | TestStatus::Error)
    }
}

/// A single display character. Always one column wide, whatever the styling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub is_error: bool,
}

impl Glyph {
    const fn plain(symbol: char) -> Self {
        Self {
            symbol,
            is_error: false,
        }
    }

    const fn error(symbol: char) -> Self {
        Self {
            symbol,
            is_error: true,
        }
    }

    pub fn render(&self) -> String {
        let text = self.symbol.to_string();
        if self.is_error {
            text.red().bold().to_string()
        } else {
            text
        }
    }
}

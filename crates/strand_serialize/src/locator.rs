//! Output position tracking.

use std::fmt;

use strand_ir::Uri;

/// Where in the output a serializer currently is.
///
/// Reset to line 0, column 0 every time a session starts; backends advance it
/// as they write.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Locator {
    uri: Option<Uri>,
    line: u32,
    column: u32,
}

impl Locator {
    pub(crate) fn reset(uri: Option<Uri>) -> Self {
        Locator {
            uri,
            line: 0,
            column: 0,
        }
    }

    /// Base URI of the current session, if any.
    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Move to the start of the next line.
    pub fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 0;
    }

    /// Advance the column. Both counters saturate at `u32::MAX`.
    pub fn advance(&mut self, columns: u32) {
        self.column = self.column.saturating_add(columns);
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.uri {
            Some(uri) => write!(f, "{uri}:{}:{}", self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

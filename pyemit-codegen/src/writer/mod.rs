//! Output buffer with indentation and cursor bookkeeping.
//!
//! [`CodeWriter`] is the single mutable state the emitter carries: a growable
//! text buffer, the current indentation level, and the (line, column) of the
//! output cursor. The cursor is what positions the caret diagnostic when
//! emission aborts mid-walk, so both write primitives keep it exact.

mod indent;

pub use indent::Indent;

/// A growable code buffer that tracks indentation depth and cursor position.
///
/// Lines are 1-based, columns 0-based. A chunk ending in a line break
/// advances the line and zeroes the column; any other chunk advances the
/// column by its emitted length, indentation included.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buffer: String,
    level: usize,
    indent: Indent,
    line: usize,
    column: usize,
}

impl CodeWriter {
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            level: 0,
            indent,
            line: 1,
            column: 0,
        }
    }

    /// Append text without leading indentation.
    pub fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.advance(text, 0);
    }

    /// Append text prefixed with the current indentation.
    pub fn push_indented(&mut self, text: &str) {
        let unit = self.indent.as_str();
        for _ in 0..self.level {
            self.buffer.push_str(unit);
        }
        self.buffer.push_str(text);
        self.advance(text, unit.len() * self.level);
    }

    /// Append a bare line break.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
        self.line += 1;
        self.column = 0;
    }

    fn advance(&mut self, text: &str, prefix: usize) {
        if text.ends_with('\n') {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += prefix + text.len();
        }
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decrease the indentation level, saturating at zero.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the buffer contents, leaving the writer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Clear the buffer and reset level and cursor to their initial state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.level = 0;
        self.line = 1;
        self.column = 0;
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

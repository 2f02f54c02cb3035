//! Indentation configuration for emitted Python.

/// Indentation width per nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Four spaces per level (PEP 8).
    #[default]
    Four,
    /// Eight spaces per level.
    Eight,
}

impl Indent {
    /// The string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Four => "    ",
            Self::Eight => "        ",
        }
    }

    /// Width of one level in spaces.
    pub fn width(&self) -> usize {
        self.as_str().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Four.as_str(), "    ");
        assert_eq!(Indent::Eight.as_str(), "        ");
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(Indent::Four.width(), 4);
        assert_eq!(Indent::Eight.width(), 8);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Four);
    }
}

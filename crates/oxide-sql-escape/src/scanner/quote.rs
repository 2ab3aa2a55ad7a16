//! Quote modes shared by the splitter and the escape transformer.

/// The lexical mode a scan is in.
///
/// Outside of [`QuoteMode::Plain`] every character up to the matching closer
/// is literal text: braces, commas and parentheses carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Ordinary text.
    #[default]
    Plain,
    /// Inside `'...'`.
    SingleQuote,
    /// Inside `"..."`.
    DoubleQuote,
    /// Inside `[...]`.
    BracketQuote,
}

impl QuoteMode {
    /// Returns the mode opened by `c`, if `c` is an opening delimiter.
    #[must_use]
    pub const fn opened_by(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::SingleQuote),
            '"' => Some(Self::DoubleQuote),
            '[' => Some(Self::BracketQuote),
            _ => None,
        }
    }

    /// Returns the closing delimiter, or `None` for plain text.
    #[must_use]
    pub const fn closer(self) -> Option<char> {
        match self {
            Self::Plain => None,
            Self::SingleQuote => Some('\''),
            Self::DoubleQuote => Some('"'),
            Self::BracketQuote => Some(']'),
        }
    }

    /// Returns true in plain mode.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::Plain)
    }

    /// Returns the mode after consuming `c` in this mode.
    #[must_use]
    pub const fn step(self, c: char) -> Self {
        match self.closer() {
            None => match Self::opened_by(c) {
                Some(mode) => mode,
                None => Self::Plain,
            },
            Some(closer) if c == closer => Self::Plain,
            Some(_) => self,
        }
    }
}

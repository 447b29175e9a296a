/// Maximum number of characters retained from one line of input.
pub const MAX_LINE_LEN: usize = 149;

/// 入力1行を表す値オブジェクト
///
/// A length-bounded character sequence with an explicit length. The constructor
/// truncates anything past [`MAX_LINE_LEN`]; the read boundary in
/// [`crate::input`] enforces the same cap before a line is ever materialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputLine(String);

impl InputLine {
    /// Build a line, truncating past the character cap.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((idx, _)) = text.char_indices().nth(MAX_LINE_LEN) {
            text.truncate(idx);
        }
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl From<&str> for InputLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

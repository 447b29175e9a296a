/// Outcome of classifying one character.
///
/// `Other` covers everything outside the four counted categories (tabs,
/// punctuation, symbols); those characters increment no counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel,
    Consonant,
    Digit,
    Space,
    Other,
}

impl CharClass {
    /// Whether this outcome contributes to one of the four tally counters.
    #[inline]
    pub const fn is_counted(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Classify a single character. Total over all inputs; first matching rule wins.
///
/// Rules are checked in a fixed order (vowel, letter, digit, space) even though
/// the categories cannot overlap, so the decision is reproducible by reading
/// top to bottom.
#[must_use]
pub fn classify(c: char) -> CharClass {
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U' => CharClass::Vowel,
        c if c.is_ascii_alphabetic() => CharClass::Consonant,
        c if c.is_ascii_digit() => CharClass::Digit,
        ' ' => CharClass::Space,
        _ => CharClass::Other,
    }
}

//! Navigation keys and surface-word normalization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Separator between alternate spellings inside one conjugation slot ("parla/parles").
pub const ALTERNATE_SEPARATOR: char = '/';

/// Accented vowels folded to their bare letter for alphabetical browsing.
const LETTER_FOLDS: &[(char, char)] = &[
    ('à', 'a'),
    ('è', 'e'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ú', 'u'),
];

/// Navigation key for a word: its first character, lowercased, accent-folded.
///
/// Total over its input: `None` and `""` both give an empty key.
///
/// - "parlar" → "p"
/// - "Útil" → "u"
/// - "èsser" → "e"
/// - "ç" → "ç" (not in the fold table)
pub fn letter_key(word: Option<&str>) -> String {
    let Some(first) = word.and_then(|w| w.chars().next()) else {
        return String::new();
    };

    first
        .to_lowercase()
        .map(|c| {
            LETTER_FOLDS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |(_, bare)| *bare)
        })
        .collect()
}

/// Split a raw slot value into its independent surface words.
///
/// Alternates are split on `/`, each piece trimmed; empty pieces are dropped.
/// With the `unicode-normalization` feature every word is NFC-composed so a
/// decomposed "à" and a precomposed "à" are the same word.
pub fn surface_words(raw: &str) -> Vec<String> {
    raw.split(ALTERNATE_SEPARATOR)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(compose)
        .collect()
}

#[cfg(feature = "unicode-normalization")]
fn compose(word: &str) -> String {
    word.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn compose(word: &str) -> String {
    word.to_string()
}

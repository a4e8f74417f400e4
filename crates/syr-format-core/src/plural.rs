use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{LanguagePack, PluralMarks};

/// Removes all combining marks, which also drops a previously added plural mark
pub fn singularize(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Adds the plural mark to a word. It goes above the last occurrence of the marking
/// consonant, or above the penultimate letter, if the word doesn't contain that consonant.
pub fn pluralize(word: &str, marks: &PluralMarks) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let position = match chars.iter().rposition(|c| *c == marks.consonant) {
        Some(index) => index + 1,
        // single letter words carry it on their only letter
        None => chars.len().saturating_sub(1).max(1),
    };
    chars.insert(position, marks.diacritic);
    chars.into_iter().collect()
}

/// Picks the singular form for exactly one, the plural form for any other amount,
/// including zero, negative and fractional amounts
pub fn get_plural_form(pack: &LanguagePack, word: &str, amount: f64) -> String {
    if amount == 1.0 {
        singularize(word)
    } else {
        pluralize(word, &pack.plural)
    }
}

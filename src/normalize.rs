//! Text normalization for mixed Darija/Arabic/French symptom descriptions

use pyo3::prelude::*;

/// Arabic diacritics, Quranic annotation marks and the tatweel elongation.
/// None of these carry lexical meaning for matching.
fn is_arabic_mark(c: char) -> bool {
    matches!(c,
        '\u{0617}'..='\u{061A}' |   // honorific marks
        '\u{064B}'..='\u{0652}' |   // tashkeel (fathatan..sukun)
        '\u{0670}' |                // superscript alef
        '\u{06D6}'..='\u{06ED}' |   // Quranic annotation signs
        '\u{0640}')                 // tatweel (kashida)
}

/// Collapse accented French letters to their base letter
fn fold_accent(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'â' => 'a',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'û' | 'ù' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

/// Characters that survive normalization: Latin letters, the Arabic block,
/// digits and whitespace. Everything else becomes a separator.
fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || ('\u{0600}'..='\u{06FF}').contains(&c)
        || c.is_whitespace()
}

/// Normalize free text so script, spelling and diacritic variants compare equal.
///
/// Lowercases, strips Arabic diacritics and tatweel, folds French accents to
/// base letters, replaces punctuation and stray symbols with spaces, then
/// collapses whitespace. Never fails: empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if is_arabic_mark(c) {
            continue;
        }
        let c = fold_accent(c);
        out.push(if is_kept(c) { c } else { ' ' });
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "normalize")]
pub fn py_normalize(text: &str) -> String {
    normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Fievre  ET   Toux "), "fievre et toux");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn strips_arabic_diacritics() {
        // "sokhana" (fever) with and without tashkeel
        assert_eq!(normalize("سَخَانَة"), normalize("سخانة"));
    }

    #[test]
    fn strips_tatweel() {
        assert_eq!(normalize("كحـــة"), normalize("كحة"));
    }

    #[test]
    fn folds_french_accents() {
        assert_eq!(normalize("fièvre"), normalize("fievre"));
        assert_eq!(normalize("Ça brûle, maux de tête"), "ca brule maux de tete");
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(normalize("fievre+toux!"), "fievre toux");
        assert_eq!(normalize("mal,de.gorge"), "mal de gorge");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(normalize("depuis 2 jours"), "depuis 2 jours");
    }

    #[test]
    fn mixed_scripts_survive() {
        assert_eq!(normalize("سخانة et fièvre"), "سخانة et fievre");
    }

    #[test]
    fn idempotent() {
        for s in ["fièvre + toux!!", "سَخَانَة وكحة", "  Mal de GORGE  ", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}

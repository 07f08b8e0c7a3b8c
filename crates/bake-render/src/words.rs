//! Word transforms used by the renderer.
//!
//! Only a handful of fixed English rules are ever exercised, so they are
//! spelled out here rather than pulled from a general language library.

/// Uppercase the first character of a phrase, leaving the rest untouched.
pub fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pluralize a noun by suffix rules.
///
/// Applies to the last word of a multi-word name, since the rules only look
/// at the ending: sibilant endings take `es`, consonant + `y` becomes `ies`,
/// everything else takes `s`.
pub fn pluralize(noun: &str) -> String {
    const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if SIBILANTS.iter().any(|suffix| noun.ends_with(suffix)) {
        return format!("{noun}es");
    }
    if let Some(stem) = noun.strip_suffix('y') {
        if let Some(last) = stem.chars().last() {
            if !"aeiouAEIOU".contains(last) {
                return format!("{stem}ies");
            }
        }
    }
    format!("{noun}s")
}

/// Join a list into English prose with an Oxford-style final "and".
pub fn humanize_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        _ => {
            let (last, rest) = items.split_last().expect("list has at least three items");
            format!("{}, and {}", rest.join(", "), last)
        }
    }
}

/// The indefinite article for a word: `an` before a vowel, else `a`.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(first) if "aeiouAEIOU".contains(first) => "an",
        _ => "a",
    }
}

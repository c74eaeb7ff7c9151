//! Token similarity primitives for medication autocomplete.
//!
//! `similarity` is a partial-overlap ratio: it measures how well the shorter
//! token aligns inside the longer one, not whole-string equality. Brand
//! names are frequently typed as fragments ("zest" for "Zestril"), so
//! containment has to score as a perfect match.

use strsim::levenshtein;

/// Partial-overlap similarity between two tokens, 0–100.
///
/// Case-insensitive on both sides. 100 means the shorter token is fully
/// contained in the longer one; 0 means no usable alignment. Empty input on
/// either side scores 0.
pub fn similarity(a: &str, b: &str) -> u32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (needle, hay) = if a_chars.len() <= b_chars.len() {
        (a.as_str(), b_chars)
    } else {
        (b.as_str(), a_chars)
    };
    let len = needle.chars().count();

    // Best alignment of the shorter token over equal-length windows of the
    // longer one. A zero-distance window is an exact containment.
    let mut best = 0u32;
    for window in hay.windows(len) {
        let window: String = window.iter().collect();
        let distance = levenshtein(needle, &window);
        let ratio = (((len - distance) as f64 / len as f64) * 100.0).round() as u32;
        if ratio > best {
            best = ratio;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Find the whitespace-delimited word in `text` that best matches `query`.
///
/// Left-to-right scan with a strictly-greater comparison: the first word to
/// reach the top score wins ties. Empty `text` yields `("", 0)`.
pub fn best_token_match(query: &str, text: &str) -> (String, u32) {
    let mut best_word = "";
    let mut best_ratio = 0u32;
    for word in text.split_whitespace() {
        let ratio = similarity(query, word);
        if ratio > best_ratio {
            best_ratio = ratio;
            best_word = word;
        }
    }
    (best_word.to_string(), best_ratio)
}

//! Medication autocomplete — ranks catalog entries against a partial query.
//!
//! Each medication contributes at most one candidate per query: either its
//! canonical name or its best-matching brand name, whichever scores higher.
//! Candidates below the confidence floor are dropped, the rest are sorted by
//! score (catalog order breaks ties) and the top five are returned as
//! `[generic_name, displayed_alias]` pairs.

pub mod score;

use serde::Serialize;

use crate::reference::{MedicationCatalog, MedicationRecord};

use self::score::best_token_match;

/// Number of suggestions returned to the client.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Candidates must score strictly above this to surface.
const MIN_CONFIDENCE: u32 = 50;

/// Additive bonus when the name starts with the query. May push a score
/// past 100; ordering still holds since scores are plain integers.
const PREFIX_BOOST: u32 = 20;

/// One suggestion: `(generic_name, displayed_alias)`.
/// Serializes as a 2-element JSON array, the shape the frontend consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion(pub String, pub String);

/// A scored candidate, internal to one query evaluation.
#[derive(Debug)]
struct RankedCandidate {
    generic: String,
    display: String,
    score: u32,
}

/// Rank the catalog against `query` and return the top `top_k` suggestions.
///
/// An empty query short-circuits to an empty result without scoring. An
/// empty catalog, or a query nothing matches confidently, also yields an
/// empty result — never an error.
pub fn rank_medications(
    query: &str,
    catalog: &MedicationCatalog,
    top_k: usize,
) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let mut candidates: Vec<RankedCandidate> = catalog
        .records()
        .filter_map(|record| evaluate_record(&query, record))
        .collect();

    // Stable sort: equal scores keep catalog order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    candidates
        .into_iter()
        .take(top_k)
        .map(|c| Suggestion(c.generic, c.display))
        .collect()
}

/// Score one record against the query. Returns the record's single candidate,
/// or `None` when neither score clears the confidence floor.
fn evaluate_record(query: &str, record: &MedicationRecord) -> Option<RankedCandidate> {
    let (_, mut name_score) = best_token_match(query, &record.name);

    // Best-matching token across all brand names; first alias wins ties.
    let mut alt_match = String::new();
    let mut alt_score = 0u32;
    for alt in &record.alternate_names {
        let (word, ratio) = best_token_match(query, alt);
        if ratio > alt_score {
            alt_score = ratio;
            alt_match = word;
        }
    }

    if record.name.starts_with(query) {
        name_score += PREFIX_BOOST;
    }
    // The prefix check runs against the matched token, not the full brand
    // string: "Zestril" in "Zestril XL" still earns the boost.
    if alt_score > 0 && alt_match.to_lowercase().starts_with(query) {
        alt_score += PREFIX_BOOST;
    }

    if alt_score > name_score {
        if alt_score > MIN_CONFIDENCE {
            let matched = alt_match.to_lowercase();
            // Display the first brand name containing the matched token.
            let display = record
                .alternate_names
                .iter()
                .find(|alt| alt.to_lowercase().contains(&matched))?;
            return Some(RankedCandidate {
                generic: record.name.clone(),
                display: display.clone(),
                score: alt_score,
            });
        }
    } else if name_score > MIN_CONFIDENCE {
        return Some(RankedCandidate {
            generic: record.name.clone(),
            display: record.name.clone(),
            score: name_score,
        });
    }
    None
}

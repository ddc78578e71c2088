use tracing::{debug, warn};

use super::canonical::canonical_identifier;
use crate::index::{SymbolIndex, SymbolOccurrence};

/// The first candidate whose canonical identifier equals `identifier`.
pub fn select_exact<'c, I>(
    index: &I,
    candidates: &'c [SymbolOccurrence],
    identifier: &str,
) -> Option<&'c SymbolOccurrence>
where
    I: SymbolIndex + ?Sized,
{
    candidates.iter().find(|candidate| {
        let canonical = canonical_identifier(index, candidate);
        debug!(usr = %candidate.usr, canonical = %canonical, "comparing canonical identifier");
        canonical == identifier
    })
}

/// Number of `scopes` that occur as substrings of the candidate's symbol key.
pub fn score(candidate: &SymbolOccurrence, scopes: &[String]) -> usize {
    scopes
        .iter()
        .filter(|scope| candidate.usr.contains(scope.as_str()))
        .count()
}

/// The highest-scoring candidate. Ties go to the earliest candidate; a best
/// score of zero selects nothing.
pub fn select_by_score<'c>(
    candidates: &'c [SymbolOccurrence],
    scopes: &[String],
) -> Option<&'c SymbolOccurrence> {
    let mut best: Option<(&SymbolOccurrence, usize)> = None;
    let mut tied = 0;

    for candidate in candidates {
        let candidate_score = score(candidate, scopes);
        debug!(usr = %candidate.usr, score = candidate_score, "scored candidate");

        match best {
            Some((_, best_score)) if candidate_score < best_score => {}
            Some((_, best_score)) if candidate_score == best_score => tied += 1,
            _ => {
                best = Some((candidate, candidate_score));
                tied = 0;
            }
        }
    }

    let (winner, best_score) = best?;
    if best_score == 0 {
        return None;
    }
    if tied > 0 {
        warn!(
            usr = %winner.usr,
            score = best_score,
            tied,
            "ambiguous match, keeping first candidate in index order"
        );
    }
    Some(winner)
}

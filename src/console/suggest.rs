//! "Did you mean" hints for mistyped operator tokens.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Best fuzzy match for `token` among `candidates`, highest score first,
/// earlier candidates winning ties.
pub fn suggest<'a>(token: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if token.is_empty() {
        return None;
    }
    let matcher = SkimMatcherV2::default();
    let mut best: Option<(&'a str, i64)> = None;

    for &candidate in candidates {
        if let Some(score) = matcher.fuzzy_match(candidate, token)
            && best.is_none_or(|(_, top)| score > top)
        {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate)
}

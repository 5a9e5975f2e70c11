use crate::models::{ScoringWeights, UserProfile};
use std::collections::HashSet;

/// Number of elements two string lists share, ignoring order and duplicates.
#[inline]
pub fn intersection_count(a: &[String], b: &[String]) -> usize {
    let left: HashSet<&str> = a.iter().map(String::as_str).collect();
    b.iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .intersection(&left)
        .count()
}

#[inline]
fn non_empty_equal(a: &str, b: &str) -> bool {
    !a.is_empty() && a == b
}

/// Calculate a compatibility score (0-100) between two profiles.
///
/// Scoring formula (numerator / denominator * 100):
/// - shared hobbies        x 3   (denominator: |user.hobbies| x 3)
/// - same relationship goal + 5  (denominator: always + 5)
/// - shared values         x 4   (denominator: |user.values| x 4)
/// - shared languages      x 2   (denominator: |user.languages| x 2)
/// - same communication style and love language + 3 each (denominator: + 6)
///
/// The set-based denominator terms count only the `user` side, so the score
/// is not symmetric: score(a, b) and score(b, a) differ whenever the two
/// sides have different hobby/value/language cardinalities. This matches the
/// reference behavior and is relied on by callers; the matches service always
/// scores with the requesting user as the `user` argument.
pub fn calculate_match_score(
    user: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    // Common interests and hobbies
    score += intersection_count(&user.hobbies, &candidate.hobbies) as f64 * weights.hobbies;
    total_weight += user.hobbies.len() as f64 * weights.hobbies;

    // Matching relationship goals
    if non_empty_equal(&user.relationship_goals, &candidate.relationship_goals) {
        score += weights.relationship_goals;
    }
    total_weight += weights.relationship_goals;

    // Common values
    score += intersection_count(&user.values, &candidate.values) as f64 * weights.values;
    total_weight += user.values.len() as f64 * weights.values;

    // Shared languages
    score += intersection_count(&user.languages, &candidate.languages) as f64 * weights.languages;
    total_weight += user.languages.len() as f64 * weights.languages;

    // Communication style and love language affinity
    if non_empty_equal(&user.communication_style, &candidate.communication_style) {
        score += weights.affinity;
    }
    if non_empty_equal(&user.love_language, &candidate.love_language) {
        score += weights.affinity;
    }
    total_weight += 2.0 * weights.affinity;

    if total_weight > 0.0 {
        (score / total_weight * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

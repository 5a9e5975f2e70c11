use crate::core::{filters::mutual_interest, scoring::calculate_match_score};
use crate::models::{RedactedProfile, ScoredMatch, ScoringWeights, UserProfile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Matching orchestrator.
///
/// # Pipeline stages
/// 1. Exclude the requesting user
/// 2. Mutual gender-interest filter
/// 3. Compatibility scoring, min_score cutoff
/// 4. Rank, truncate, redact
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find matches for a user among all stored candidates.
    ///
    /// The requesting user is always the asymmetric `user` side of the
    /// scoring formula. Ordering is score descending; ties break on
    /// candidate id ascending so results are reproducible across runs.
    ///
    /// # Arguments
    /// * `user_id` - Identifier of the requesting user (excluded from results)
    /// * `user` - The requesting user's profile
    /// * `candidates` - Every stored (id, profile) pair
    /// * `min_score` - Minimum score a candidate must reach
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches(
        &self,
        user_id: &str,
        user: &UserProfile,
        candidates: Vec<(String, UserProfile)>,
        min_score: f64,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredMatch> = candidates
            .into_iter()
            .filter(|(candidate_id, _)| candidate_id != user_id)
            .filter(|(_, candidate)| mutual_interest(user, candidate))
            .filter_map(|(candidate_id, candidate)| {
                let score = calculate_match_score(user, &candidate, &self.weights);
                if score >= min_score {
                    Some(ScoredMatch {
                        user_id: candidate_id,
                        match_score: round2(score),
                        profile: RedactedProfile::from(&candidate),
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[inline]
fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(gender: &str, interested_in: &[&str], hobbies: &[&str]) -> UserProfile {
        UserProfile {
            name: "Candidate".to_string(),
            age: 27,
            gender: gender.to_string(),
            interested_in: interested_in.iter().map(|s| s.to_string()).collect(),
            relationship_goals: "Marriage".to_string(),
            hobbies: hobbies.iter().map(|s| s.to_string()).collect(),
            personality_traits: vec![],
            ideal_partner_traits: vec![],
            deal_breakers: vec!["secret".to_string()],
            love_language: "Quality Time".to_string(),
            communication_style: "Direct".to_string(),
            life_goals: vec![],
            values: vec!["Family".to_string()],
            location: "Berlin".to_string(),
            languages: vec!["English".to_string()],
            education: "Bachelor's".to_string(),
            occupation: "Designer".to_string(),
        }
    }

    fn user() -> UserProfile {
        candidate("Male", &["Female"], &["hiking", "cooking"])
    }

    #[test]
    fn test_excludes_self() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates = vec![
            ("me".to_string(), me.clone()),
            ("other".to_string(), candidate("Female", &["Male"], &["hiking", "cooking"])),
        ];

        let result = matcher.find_matches("me", &me, candidates, 0.0, 10);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "other");
    }

    #[test]
    fn test_mutual_interest_required() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates = vec![
            // Interested in the user, user interested back: kept.
            ("a".to_string(), candidate("Female", &["Male"], &["hiking"])),
            // User not interested in this gender: dropped.
            ("b".to_string(), candidate("Non-binary", &["Male"], &["hiking"])),
            // Not interested in the user's gender: dropped.
            ("c".to_string(), candidate("Female", &["Female"], &["hiking"])),
        ];

        let result = matcher.find_matches("me", &me, candidates, 0.0, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "a");
    }

    #[test]
    fn test_min_score_cutoff() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates = vec![
            ("strong".to_string(), candidate("Female", &["Male"], &["hiking", "cooking"])),
            ("weak".to_string(), candidate("Female", &["Male"], &[])),
        ];

        let result = matcher.find_matches("me", &me, candidates, 90.0, 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "strong");
    }

    #[test]
    fn test_sorted_descending_with_id_tiebreak() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates = vec![
            ("z".to_string(), candidate("Female", &["Male"], &["hiking", "cooking"])),
            ("m".to_string(), candidate("Female", &["Male"], &["hiking"])),
            ("a".to_string(), candidate("Female", &["Male"], &["hiking", "cooking"])),
        ];

        let result = matcher.find_matches("me", &me, candidates, 0.0, 10);

        assert_eq!(result.matches.len(), 3);
        for pair in result.matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        // "a" and "z" tie on score; id breaks the tie.
        assert_eq!(result.matches[0].user_id, "a");
        assert_eq!(result.matches[1].user_id, "z");
        assert_eq!(result.matches[2].user_id, "m");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates: Vec<(String, UserProfile)> = (0..20)
            .map(|i| {
                (
                    format!("c{:02}", i),
                    candidate("Female", &["Male"], &["hiking"]),
                )
            })
            .collect();

        let result = matcher.find_matches("me", &me, candidates, 0.0, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_results_are_redacted() {
        let matcher = Matcher::with_default_weights();
        let me = user();
        let candidates = vec![(
            "other".to_string(),
            candidate("Female", &["Male"], &["hiking"]),
        )];

        let result = matcher.find_matches("me", &me, candidates, 0.0, 10);

        let json = serde_json::to_value(&result.matches[0]).unwrap();
        assert!(json["profile"].get("deal_breakers").is_none());
        assert!(json["profile"].get("values").is_none());
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let matcher = Matcher::with_default_weights();
        let me = candidate("Male", &["Female"], &["h1", "h2", "h3"]);
        let candidates = vec![(
            "other".to_string(),
            candidate("Female", &["Male"], &["h1"]),
        )];

        let result = matcher.find_matches("me", &me, candidates, 0.0, 10);

        let score = result.matches[0].match_score;
        assert_eq!(score, (score * 100.0).round() / 100.0);
    }
}

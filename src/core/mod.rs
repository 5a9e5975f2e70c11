// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::mutual_interest;
pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_match_score, intersection_count};

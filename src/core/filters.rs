use crate::models::UserProfile;

/// Check whether two profiles pass the mutual gender-interest filter.
///
/// A candidate survives only if both directions hold: the candidate's gender
/// is in the user's interested_in list AND the user's gender is in the
/// candidate's interested_in list. Comparison is literal string membership.
#[inline]
pub fn mutual_interest(user: &UserProfile, candidate: &UserProfile) -> bool {
    user.interested_in.contains(&candidate.gender)
        && candidate.interested_in.contains(&user.gender)
}

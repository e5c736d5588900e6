//! Matcher: the filter-then-select pass over a materialized posting pool.
//!
//! A posting is recommended when it passes the hard constraints (experience
//! ceiling, location compatibility) and shares at least one skill with the profile.
//! Matching is exact and case-sensitive; there is no overlap scoring and the
//! input order is preserved.

use crate::matching::models::{Posting, Profile, REMOTE_LOCATION};

/// Returns the postings from `postings` that match `profile`, in input order.
pub fn recommend(profile: &Profile, postings: Vec<Posting>) -> Vec<Posting> {
    postings
        .into_iter()
        .filter(|posting| is_match(profile, posting))
        .collect()
}

pub fn is_match(profile: &Profile, posting: &Posting) -> bool {
    meets_hard_constraints(profile, posting) && shares_skill(&profile.skills, &posting.required_skills)
}

/// Same predicate the store applies in SQL. Re-checked here so a pool that
/// skipped the pre-filter can never widen the result.
pub fn meets_hard_constraints(profile: &Profile, posting: &Posting) -> bool {
    posting.experience_required <= profile.experience
        && (posting.location == profile.preferred_location || posting.location == REMOTE_LOCATION)
}

/// True iff any required skill appears verbatim in the profile's skills.
pub fn shares_skill(profile_skills: &[String], required_skills: &[String]) -> bool {
    required_skills
        .iter()
        .any(|required| profile_skills.contains(required))
}

//! Tag-overlap bonus points for the free-form level-4 keyword fields

use std::collections::BTreeSet;

/// Award bonus points for overlap between a candidate's and a job's
/// level-4 tag sets.
///
/// The fewer tags the job specifies, the more each one is worth: with
/// `n` unique job tags, each tag found in the candidate's set is worth
/// `ceil(max_points / min(n, 4))`, so a single required tag is worth
/// the full cap while four or more share the smallest slice. A job
/// with no tags at all is unconstrained and awards the full cap. The
/// total never exceeds `max_points`.
pub fn tag_bonus(
    candidate_tags: &BTreeSet<String>,
    job_tags: &BTreeSet<String>,
    max_points: u32,
) -> u32 {
    let n = job_tags.len() as u32;
    if n == 0 {
        return max_points;
    }

    let per_tag = max_points.div_ceil(n.min(4));
    let matched = job_tags
        .iter()
        .filter(|tag| candidate_tags.contains(*tag))
        .count() as u32;

    (matched * per_tag).min(max_points)
}

//! Profile-to-catalog matching.
//!
//! A job matches when at least one of its required skills appears verbatim
//! in the profile's skills. Comparison is exact and case-sensitive; there is
//! no normalisation, scoring or ranking, and output keeps catalog order.

use std::collections::HashSet;

use crate::models::{Job, UserProfile};

/// Jobs sharing at least one skill with the profile. A profile without
/// skills matches nothing.
pub fn filter_jobs(profile: &UserProfile, all_jobs: &[Job]) -> Vec<Job> {
    let skills = skill_set(profile);
    if skills.is_empty() {
        return Vec::new();
    }

    all_jobs
        .iter()
        .filter(|job| {
            job.skills_required
                .iter()
                .any(|s| skills.contains(s.as_str()))
        })
        .cloned()
        .collect()
}

/// Without a profile the whole catalog is returned; with one, it is filtered.
pub fn jobs_for(profile: Option<&UserProfile>, all_jobs: &[Job]) -> Vec<Job> {
    match profile {
        Some(profile) => filter_jobs(profile, all_jobs),
        None => all_jobs.to_vec(),
    }
}

/// The job's required skills that the profile has, in the job's order.
pub fn matched_skills(profile: &UserProfile, job: &Job) -> Vec<String> {
    let skills = skill_set(profile);
    job.skills_required
        .iter()
        .filter(|s| skills.contains(s.as_str()))
        .cloned()
        .collect()
}

fn skill_set(profile: &UserProfile) -> HashSet<&str> {
    profile.skills.iter().map(String::as_str).collect()
}

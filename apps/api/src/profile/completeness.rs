use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// One completeness check. `Experience` only counts toward the percentage;
/// the completeness gate ignores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Graduation,
    Skills,
    Projects,
    Accomplishments,
    Experience,
}

const CHECKS: &[ProfileField] = &[
    ProfileField::Name,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::Graduation,
    ProfileField::Skills,
    ProfileField::Projects,
    ProfileField::Accomplishments,
    ProfileField::Experience,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub is_complete: bool,
    pub percentage: f32,
    pub missing: Vec<ProfileField>,
}

fn is_satisfied(profile: &UserProfile, field: ProfileField) -> bool {
    let education = &profile.education;
    match field {
        ProfileField::Name => !profile.name.trim().is_empty(),
        ProfileField::Email => !profile.email.trim().is_empty(),
        ProfileField::Phone => !profile.phone.trim().is_empty(),
        ProfileField::Graduation => {
            !education.graduation_degree.trim().is_empty()
                && !education.graduation_institute.trim().is_empty()
                && !education.graduation_year.trim().is_empty()
        }
        ProfileField::Skills => !profile.skills.is_empty(),
        ProfileField::Projects => !profile.projects.is_empty(),
        ProfileField::Accomplishments => !profile.accomplishments.trim().is_empty(),
        ProfileField::Experience => !profile.experience.is_empty(),
    }
}

/// Completeness gate: every check except experience must pass.
pub fn is_complete(profile: &UserProfile) -> bool {
    CHECKS
        .iter()
        .filter(|&&field| field != ProfileField::Experience)
        .all(|&field| is_satisfied(profile, field))
}

/// Share of the eight checks that pass, scaled to 0–100. Experience counts here.
pub fn completion_percentage(profile: &UserProfile) -> f32 {
    let satisfied = CHECKS
        .iter()
        .filter(|&&field| is_satisfied(profile, field))
        .count();
    (satisfied as f32 / CHECKS.len() as f32) * 100.0
}

pub fn completeness_report(profile: &UserProfile) -> CompletenessReport {
    let missing = CHECKS
        .iter()
        .copied()
        .filter(|&field| !is_satisfied(profile, field))
        .collect();

    CompletenessReport {
        is_complete: is_complete(profile),
        percentage: completion_percentage(profile),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Experience, Project};

    fn required_only() -> UserProfile {
        UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            education: Education {
                graduation_degree: "B.Tech".to_string(),
                graduation_institute: "IIT Delhi".to_string(),
                graduation_year: "2024".to_string(),
                ..Default::default()
            },
            skills: vec!["Kotlin".to_string()],
            projects: vec![Project {
                title: "Pathly".to_string(),
                ..Default::default()
            }],
            accomplishments: "Hackathon winner".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_without_experience_is_complete() {
        let profile = required_only();
        assert!(is_complete(&profile));
        assert!((completion_percentage(&profile) - 87.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_accomplishments_is_never_complete() {
        let mut profile = required_only();
        profile.accomplishments = "   ".to_string();
        profile.experience = vec![Experience::default()];
        assert!(!is_complete(&profile));
    }

    #[test]
    fn test_full_profile_scores_100() {
        let mut profile = required_only();
        profile.experience = vec![Experience {
            company_name: "Acme".to_string(),
            role: "Intern".to_string(),
            ..Default::default()
        }];
        assert!((completion_percentage(&profile) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_graduation_counts_as_one_check() {
        let mut profile = required_only();
        profile.education.graduation_year.clear();
        assert!(!is_complete(&profile));
        // 6 of 8: graduation and experience fail
        assert!((completion_percentage(&profile) - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let profile = UserProfile::default();
        assert!(!is_complete(&profile));
        assert_eq!(completion_percentage(&profile), 0.0);
    }

    #[test]
    fn test_report_lists_missing_in_check_order() {
        let mut profile = required_only();
        profile.phone.clear();
        let report = completeness_report(&profile);
        assert!(!report.is_complete);
        assert_eq!(
            report.missing,
            vec![ProfileField::Phone, ProfileField::Experience]
        );
    }
}

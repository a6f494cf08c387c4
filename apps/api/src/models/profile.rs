use serde::{Deserialize, Serialize};

/// Three-stage education record: graduation plus the two prior school boards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub graduation_degree: String,
    pub graduation_institute: String,
    pub graduation_year: String,
    pub twelfth_board: String,
    pub twelfth_year: String,
    pub tenth_board: String,
    pub tenth_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company_name: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

/// A user's structured resume-source data. Saved wholesale; there are no
/// partial-field updates.
///
/// `is_complete` is derived from the other fields on every save and is never
/// trusted from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: Education,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub accomplishments: String,
    pub experience: Vec<Experience>,
    pub is_complete: bool,
}

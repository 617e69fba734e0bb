use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::DeclaredFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: String,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub tech_stack: Vec<String>,

    pub repo_url: Option<String>,

    pub demo_url: Option<String>,

    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,

    pub highlights: Option<Vec<String>>,
}

impl DeclaredFields for NewProject {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("title", "title"),
        ("description", "description"),
        ("tech_stack", "techStack"),
        ("repo_url", "repoUrl"),
        ("demo_url", "demoUrl"),
        ("image_url", "imageUrl"),
        ("highlights", "highlights"),
    ];
}

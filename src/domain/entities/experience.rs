use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::DeclaredFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    /// Free text, e.g. "2021 - Present".
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewExperience {
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    pub location: Option<String>,

    #[validate(length(min = 1, message = "Period is required"))]
    pub period: String,

    pub description: Vec<String>,
}

impl DeclaredFields for NewExperience {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("company", "company"),
        ("role", "role"),
        ("location", "location"),
        ("period", "period"),
        ("description", "description"),
    ];
}

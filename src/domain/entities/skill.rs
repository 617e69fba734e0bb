use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::DeclaredFields;

pub const MIN_PROFICIENCY: i32 = 0;
pub const MAX_PROFICIENCY: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    /// Free-text grouping label, e.g. "Languages".
    pub category: String,
    pub proficiency: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(range(
        min = MIN_PROFICIENCY,
        max = MAX_PROFICIENCY,
        message = "Proficiency must be between 0 and 100"
    ))]
    pub proficiency: i32,
}

impl DeclaredFields for NewSkill {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("category", "category"),
        ("proficiency", "proficiency"),
    ];
}

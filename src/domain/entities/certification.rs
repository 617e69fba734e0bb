use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::DeclaredFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: i32,
    pub name: String,
    pub issuer: String,
    pub verification_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCertification {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Issuer is required"))]
    pub issuer: String,

    pub verification_url: Option<String>,
}

impl DeclaredFields for NewCertification {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("issuer", "issuer"),
        ("verification_url", "verificationUrl"),
    ];
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{
    errors::{AppError, FieldError},
    validation::{first_field_error, DeclaredFields},
};

/// Contact form body as received. Fields are kept as raw JSON so a missing
/// or wrongly typed field is reported against that field instead of failing
/// the whole body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactFormBody {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl DeclaredFields for ContactForm {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("email", "email"),
        ("message", "message"),
    ];
}

impl TryFrom<ContactFormBody> for ContactForm {
    type Error = AppError;

    /// Reads and validates the body, reporting only the first bad field.
    fn try_from(body: ContactFormBody) -> Result<Self, Self::Error> {
        let mut type_errors = Vec::new();

        let form = ContactForm {
            name: text_field("name", body.name, &mut type_errors),
            email: text_field("email", body.email, &mut type_errors),
            message: text_field("message", body.message, &mut type_errors),
        };

        // A wrongly typed field is read as "", which every field rejects, so
        // the first failing field is also the first badly typed one.
        match form.validate() {
            Ok(()) => Ok(form),
            Err(errors) => {
                let first = first_field_error(&errors, Self::FIELDS);
                let err = type_errors
                    .into_iter()
                    .find(|e| e.field == first.field)
                    .unwrap_or(first);
                Err(err.into())
            }
        }
    }
}

fn text_field(path: &str, value: Value, type_errors: &mut Vec<FieldError>) -> String {
    let received = match value {
        Value::String(s) => return s,
        Value::Null => return String::new(),
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };

    type_errors.push(FieldError {
        field: path.to_string(),
        message: format!("Expected string, received {received}"),
    });
    String::new()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
}

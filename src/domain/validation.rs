use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::{AppError, FieldError};

/// Payloads that report validation failures one field at a time.
///
/// `validator` collects errors into a map, which loses the order fields were
/// declared in. Implementors list their fields so the first failing one can
/// be picked deterministically.
pub trait DeclaredFields: Validate {
    /// `(struct field, wire path)` pairs in declaration order. Errors are
    /// looked up by struct field and reported under the wire path.
    const FIELDS: &'static [(&'static str, &'static str)];

    fn validate_first(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| first_field_error(&errors, Self::FIELDS).into())
    }
}

/// Returns the first error in `fields` order. Fields missing from the list
/// are considered afterwards, alphabetically, under their struct name.
pub fn first_field_error(errors: &ValidationErrors, fields: &[(&str, &str)]) -> FieldError {
    let field_errors = errors.field_errors();

    let declared = fields.iter().find_map(|(field, path)| {
        field_errors
            .get(*field)
            .and_then(|errs| errs.first())
            .map(|e| to_field_error(path, e))
    });

    if let Some(error) = declared {
        return error;
    }

    let mut rest: Vec<(String, &Vec<ValidationError>)> = field_errors
        .iter()
        .map(|(field, errs)| (field.to_string(), *errs))
        .collect();
    rest.sort_by(|a, b| a.0.cmp(&b.0));

    rest.into_iter()
        .find_map(|(field, errs)| errs.first().map(|e| to_field_error(&field, e)))
        .unwrap_or_else(|| FieldError {
            field: String::new(),
            message: "Invalid input".to_string(),
        })
}

fn to_field_error(field: &str, error: &ValidationError) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: error
            .message
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Invalid value".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Signup {
        #[validate(length(min = 1, message = "Zeta is required"))]
        zeta: String,
        #[validate(length(min = 1, message = "Alpha is required"))]
        alpha: String,
        #[validate(email)]
        contact_email: String,
    }

    impl DeclaredFields for Signup {
        const FIELDS: &'static [(&'static str, &'static str)] = &[
            ("zeta", "zeta"),
            ("alpha", "alpha"),
            ("contact_email", "contactEmail"),
        ];
    }

    #[test]
    fn picks_first_declared_field_not_alphabetical() {
        let signup = Signup {
            zeta: String::new(),
            alpha: String::new(),
            contact_email: "nope".into(),
        };

        match signup.validate_first() {
            Err(AppError::ValidationError(err)) => {
                assert_eq!(err.field, "zeta");
                assert_eq!(err.message, "Zeta is required");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn reports_wire_path_with_default_message() {
        let signup = Signup {
            zeta: "z".into(),
            alpha: "a".into(),
            contact_email: "nope".into(),
        };

        let errors = signup.validate().unwrap_err();
        let err = first_field_error(&errors, Signup::FIELDS);
        assert_eq!(err.field, "contactEmail");
        assert_eq!(err.message, "Invalid value");
    }

    #[test]
    fn undeclared_fields_are_still_reported() {
        let signup = Signup {
            zeta: String::new(),
            alpha: String::new(),
            contact_email: "a@b.co".into(),
        };

        let errors = signup.validate().unwrap_err();
        let err = first_field_error(&errors, &[]);
        assert_eq!(err.field, "alpha");
    }

    #[test]
    fn valid_payload_passes() {
        let signup = Signup {
            zeta: "z".into(),
            alpha: "a".into(),
            contact_email: "a@b.co".into(),
        };
        assert!(signup.validate_first().is_ok());
    }
}

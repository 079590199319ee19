//! Boundary validation for student bodies. Limits follow the column widths of the `students` table.

use crate::error::AppError;
use crate::model::{NewStudent, StudentPatch};

/// Per-field limits. `marks` has none: the 0..=100 range is a convention, not a rule.
struct TextRule {
    field: &'static str,
    max_length: usize,
    required: bool,
}

const NAME: TextRule = TextRule {
    field: "name",
    max_length: 100,
    required: true,
};
const GENDER: TextRule = TextRule {
    field: "gender",
    max_length: 10,
    required: false,
};
const SUBJECT: TextRule = TextRule {
    field: "subject",
    max_length: 100,
    required: false,
};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Every field is present by construction; only values are checked.
    pub fn validate_new(body: &NewStudent) -> Result<(), AppError> {
        validate_text(&NAME, &body.name)?;
        validate_text(&GENDER, &body.gender)?;
        validate_text(&SUBJECT, &body.subject)?;
        validate_age(body.age)
    }

    /// Validate only the fields present in an update body.
    pub fn validate_patch(body: &StudentPatch) -> Result<(), AppError> {
        if let Some(ref name) = body.name {
            validate_text(&NAME, name)?;
        }
        if let Some(ref gender) = body.gender {
            validate_text(&GENDER, gender)?;
        }
        if let Some(ref subject) = body.subject {
            validate_text(&SUBJECT, subject)?;
        }
        if let Some(age) = body.age {
            validate_age(age)?;
        }
        Ok(())
    }
}

fn validate_text(rule: &TextRule, value: &str) -> Result<(), AppError> {
    if rule.required && value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", rule.field)));
    }
    if value.chars().count() > rule.max_length {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            rule.field, rule.max_length
        )));
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::Validation("age must be at least 0".into()));
    }
    Ok(())
}

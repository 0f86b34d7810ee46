use std::fmt;

use super::domain::CandidateDraft;

/// Fields a validation failure can point at. Gender and experience are
/// enum-typed on the draft, so enumeration membership cannot fail here;
/// presentation layers reject unknown labels at parse time via
/// `Gender::from_label` / `Experience::from_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateField {
    Name,
    Phone,
    Email,
    Skills,
}

impl CandidateField {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateField::Name => "name",
            CandidateField::Phone => "phone",
            CandidateField::Email => "email",
            CandidateField::Skills => "skills",
        }
    }
}

/// A single per-field constraint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: CandidateField,
    pub message: &'static str,
}

/// Structured validation result carrying every offending field, so the
/// presentation layer can render per-field messages in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn mentions(&self, field: CandidateField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self
            .errors
            .iter()
            .map(|error| error.field.label())
            .collect();
        write!(f, "invalid candidate fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Explicit validator for candidate drafts. Create requires at least one
/// skill; update accepts an empty skill set.
#[derive(Debug, Clone, Copy)]
pub struct CandidateValidator {
    require_skills: bool,
}

impl CandidateValidator {
    pub fn for_create() -> Self {
        Self {
            require_skills: true,
        }
    }

    pub fn for_update() -> Self {
        Self {
            require_skills: false,
        }
    }

    pub fn check(&self, draft: &CandidateDraft) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if draft.name.chars().count() < 2 {
            errors.push(FieldError {
                field: CandidateField::Name,
                message: "must be at least 2 characters",
            });
        }

        if draft.phone.trim().is_empty() {
            errors.push(FieldError {
                field: CandidateField::Phone,
                message: "is required",
            });
        }

        if !is_email_shaped(&draft.email) {
            errors.push(FieldError {
                field: CandidateField::Email,
                message: "must be a valid email address",
            });
        }

        if self.require_skills && draft.skills.is_empty() {
            errors.push(FieldError {
                field: CandidateField::Skills,
                message: "select at least one skill",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

/// Conventional email shape: one `@`, non-empty local part, and a domain
/// containing a dot with text on both sides. Not an RFC 5321 parser.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

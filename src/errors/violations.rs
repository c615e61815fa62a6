use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::response::ErrorDetail;

/// Leading location segments that only say where the value came from
const ORIGIN_SEGMENTS: [&str; 5] = ["body", "query", "path", "header", "cookie"];

/// Key validator uses for struct-level (schema) errors
const SCHEMA_LEVEL_KEY: &str = "__all__";

/// One structural violation as reported by the request schema layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Location of the offending value, e.g. `["body", "address", "zip"]`
    pub loc: Vec<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn new<I, L>(loc: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Dotted field path with the origin segment stripped, `None` when
    /// nothing is left.
    pub fn field_path(&self) -> Option<String> {
        let segments = match self.loc.split_first() {
            Some((first, rest)) if ORIGIN_SEGMENTS.contains(&first.as_str()) => rest,
            _ => &self.loc[..],
        };
        if segments.is_empty() {
            None
        } else {
            Some(segments.join("."))
        }
    }

    pub fn to_detail(&self) -> ErrorDetail {
        ErrorDetail {
            field: self.field_path(),
            message: self.message.clone(),
        }
    }
}

/// Flatten validator errors into violations rooted at `origin`.
///
/// Siblings are reported sorted by field name, not in declaration order:
/// validator keeps errors in a hash map and loses the order fields were
/// declared in.
pub fn from_validation_errors(origin: &str, errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    let mut loc = vec![origin.to_string()];
    collect(&mut loc, errors, &mut out);
    out
}

fn collect(loc: &mut Vec<String>, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in entries {
        let name = name.to_string();
        let pushed = name != SCHEMA_LEVEL_KEY;
        if pushed {
            loc.push(name);
        }

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.push(FieldViolation {
                        loc: loc.clone(),
                        message: describe(error),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(loc, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    loc.push(index.to_string());
                    collect(loc, inner, out);
                    loc.pop();
                }
            }
        }

        if pushed {
            loc.pop();
        }
    }
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("failed '{}' validation", error.code),
    }
}

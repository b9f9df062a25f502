//! Request and response schema types
//!
//! Request bodies deserialize with every field optional, then validate into
//! the query-layer input types. Validation collects all failed reasons.

use serde::{Deserialize, Serialize};

use crate::db::{DevotionalChanges, NewDevotional};
use crate::error::ValidationError;

/// POST /api/devotionals body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDevotionalRequest {
    pub verse: Option<String>,
    pub content: Option<String>,
}

/// PATCH /api/devotionals/:id body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDevotionalRequest {
    pub verse: Option<String>,
    pub content: Option<String>,
}

/// POST /api/devotionals response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Devotional created successfully.".to_string(),
            id,
        }
    }
}

impl CreateDevotionalRequest {
    /// Both fields must be present and non-empty
    pub fn validate(self) -> Result<NewDevotional, ValidationError> {
        let mut reasons = Vec::new();
        let verse = required("verse", self.verse, &mut reasons);
        let content = required("content", self.content, &mut reasons);

        match (verse, content) {
            (Some(verse), Some(content)) => Ok(NewDevotional { verse, content }),
            _ => Err(ValidationError::new(reasons)),
        }
    }
}

impl UpdateDevotionalRequest {
    /// At least one field must be present; a present field must be non-empty
    pub fn validate(self) -> Result<DevotionalChanges, ValidationError> {
        if self.verse.is_none() && self.content.is_none() {
            return Err(ValidationError::single(
                "at least one of verse or content is required",
            ));
        }

        let mut reasons = Vec::new();
        let verse = non_empty("verse", self.verse, &mut reasons);
        let content = non_empty("content", self.content, &mut reasons);

        if reasons.is_empty() {
            Ok(DevotionalChanges { verse, content })
        } else {
            Err(ValidationError::new(reasons))
        }
    }
}

fn required(field: &str, value: Option<String>, reasons: &mut Vec<String>) -> Option<String> {
    if value.is_none() {
        reasons.push(format!("{} is required", field));
        return None;
    }
    non_empty(field, value, reasons)
}

fn non_empty(field: &str, value: Option<String>, reasons: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if v.is_empty() => {
            reasons.push(format!("{} must not be empty", field));
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(verse: Option<&str>, content: Option<&str>) -> CreateDevotionalRequest {
        CreateDevotionalRequest {
            verse: verse.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    fn update(verse: Option<&str>, content: Option<&str>) -> UpdateDevotionalRequest {
        UpdateDevotionalRequest {
            verse: verse.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn test_create_accepts_both_fields() {
        let new = create(Some("John 3:16"), Some("For God so loved...")).validate().unwrap();
        assert_eq!(new.verse, "John 3:16");
        assert_eq!(new.content, "For God so loved...");
    }

    #[test]
    fn test_create_collects_every_reason() {
        let err = create(None, Some("")).validate().unwrap_err();
        assert_eq!(
            err.reasons,
            vec!["verse is required", "content must not be empty"]
        );
    }

    #[test]
    fn test_create_from_json_with_null_field() {
        let request: CreateDevotionalRequest =
            serde_json::from_str(r#"{"verse": null, "content": "x"}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.reasons, vec!["verse is required"]);
    }

    #[test]
    fn test_update_requires_a_field() {
        let err = update(None, None).validate().unwrap_err();
        assert_eq!(err.reasons.len(), 1);
    }

    #[test]
    fn test_update_keeps_absent_fields_absent() {
        let changes = update(None, Some("new content")).validate().unwrap();
        assert_eq!(changes.verse, None);
        assert_eq!(changes.content.as_deref(), Some("new content"));
    }

    #[test]
    fn test_update_rejects_empty_field() {
        let err = update(Some(""), Some("ok")).validate().unwrap_err();
        assert_eq!(err.reasons, vec!["verse must not be empty"]);
    }
}

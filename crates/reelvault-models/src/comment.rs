use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValidationError;

/// A viewer comment on a movie. Comments are append-only: never edited
/// or deleted once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
}

impl Comment {
    /// Build a comment with a fresh id. A blank display name falls back
    /// to "Anon"; text must be non-empty after trimming.
    pub fn new(user: &str, text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let user = user.trim();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user: if user.is_empty() {
                "Anon".to_string()
            } else {
                user.to_string()
            },
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment() {
        let comment = Comment::new("Bob", "Great film").unwrap();
        assert_eq!(comment.user, "Bob");
        assert_eq!(comment.text, "Great film");
        assert!(!comment.id.is_empty());
    }

    #[test]
    fn test_new_comment_trims_text() {
        let comment = Comment::new("Bob", "  loved it  ").unwrap();
        assert_eq!(comment.text, "loved it");
    }

    #[test]
    fn test_new_comment_empty_text_rejected() {
        assert_eq!(Comment::new("Bob", "   "), Err(ValidationError::EmptyText));
        assert_eq!(Comment::new("Bob", ""), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_new_comment_anonymous_default() {
        let comment = Comment::new("", "nice").unwrap();
        assert_eq!(comment.user, "Anon");
        let comment = Comment::new("   ", "nice").unwrap();
        assert_eq!(comment.user, "Anon");
    }

    #[test]
    fn test_comment_ids_are_unique() {
        let a = Comment::new("Bob", "first").unwrap();
        let b = Comment::new("Bob", "second").unwrap();
        assert_ne!(a.id, b.id);
    }
}

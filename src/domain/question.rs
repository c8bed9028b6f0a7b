//! Question entity and its write payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question, optionally attached to a subject via `subject_id`.
///
/// The attachment is a soft reference: deleting the subject neither cascades
/// nor is rejected, so a question may outlive the subject it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i32,
    pub title: String,
    pub question: String,
    pub subject_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Creation payload. The id is caller-supplied; a collision with an existing
/// row is a store error, never a silent overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub question: Option<String>,
    pub subject_id: Option<i32>,
}

/// Partial update: absent fields are left unchanged. `subject_id` nests the
/// option so an explicit JSON `null` detaches the question from its subject
/// while an absent field skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub question: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_id: Option<Option<i32>>,
}

impl QuestionPatch {
    /// True when the patch carries no fields to write.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.question.is_none() && self.subject_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_question_deserialises_camel_case() {
        let payload: NewQuestion = serde_json::from_str(
            r#"{"id": 1, "title": "Q1", "question": "2+2=?", "subjectId": 3}"#,
        )
        .expect("deserialise payload");

        assert_eq!(payload.id, Some(1));
        assert_eq!(payload.subject_id, Some(3));
    }

    #[rstest]
    fn patch_with_only_subject_id_is_not_empty() {
        let patch = QuestionPatch {
            subject_id: Some(Some(2)),
            ..QuestionPatch::default()
        };
        assert!(!patch.is_empty());
        assert!(QuestionPatch::default().is_empty());
    }

    #[rstest]
    fn patch_null_subject_id_means_detach() {
        let detach: QuestionPatch =
            serde_json::from_str(r#"{"subjectId": null}"#).expect("deserialise patch");
        assert_eq!(detach.subject_id, Some(None));
        assert!(!detach.is_empty());

        let untouched: QuestionPatch = serde_json::from_str("{}").expect("deserialise patch");
        assert_eq!(untouched.subject_id, None);
    }
}

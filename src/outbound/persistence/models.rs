//! Diesel row models and conversions to/from domain types.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{NewQuestion, NewSubject, Question, QuestionPatch, Subject, SubjectPatch};

use super::schema::{questions, subjects};

/// A `subjects` row as read from the store.
#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = subjects, check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubjectRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload for `subjects`. `None` fields fall back to column defaults,
/// so a missing `name` becomes a store-level not-null violation rather than
/// an API-layer rejection.
#[derive(Debug, Insertable)]
#[diesel(table_name = subjects)]
pub struct NewSubjectRow {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<NewSubject> for NewSubjectRow {
    fn from(subject: NewSubject) -> Self {
        Self {
            name: subject.name,
            description: subject.description,
        }
    }
}

/// Partial update for `subjects`; `None` fields are skipped, while
/// `Some(None)` writes NULL to the nullable column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = subjects)]
pub struct SubjectChangeset {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl From<SubjectPatch> for SubjectChangeset {
    fn from(patch: SubjectPatch) -> Self {
        Self {
            name: patch.name,
            description: patch.description,
        }
    }
}

/// A `questions` row as read from the store.
#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = questions, check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuestionRow {
    pub id: i32,
    pub title: String,
    pub question: String,
    pub subject_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            question: row.question,
            subject_id: row.subject_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload for `questions`; the id travels with the payload because
/// the caller assigns it.
#[derive(Debug, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestionRow {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub question: Option<String>,
    pub subject_id: Option<i32>,
}

impl From<NewQuestion> for NewQuestionRow {
    fn from(question: NewQuestion) -> Self {
        Self {
            id: question.id,
            title: question.title,
            question: question.question,
            subject_id: question.subject_id,
        }
    }
}

/// Partial update for `questions`; `None` fields are skipped, while
/// `Some(None)` clears the subject reference.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = questions)]
pub struct QuestionChangeset {
    pub title: Option<String>,
    pub question: Option<String>,
    pub subject_id: Option<Option<i32>>,
}

impl From<QuestionPatch> for QuestionChangeset {
    fn from(patch: QuestionPatch) -> Self {
        Self {
            title: patch.title,
            question: patch.question,
            subject_id: patch.subject_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn subject_row_converts_to_domain() {
        let row = SubjectRow {
            id: 4,
            name: "Math".into(),
            description: Some("arithmetic".into()),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        let subject = Subject::from(row);
        assert_eq!(subject.id, 4);
        assert_eq!(subject.name, "Math");
        assert_eq!(subject.description.as_deref(), Some("arithmetic"));
    }

    #[rstest]
    fn question_payload_keeps_caller_id() {
        let payload = NewQuestion {
            id: Some(9),
            title: Some("Q1".into()),
            question: Some("2+2=?".into()),
            subject_id: None,
        };

        let row = NewQuestionRow::from(payload);
        assert_eq!(row.id, Some(9));
        assert_eq!(row.subject_id, None);
    }

    #[rstest]
    fn patch_maps_only_supplied_fields() {
        let changeset = SubjectChangeset::from(SubjectPatch {
            name: Some("X".into()),
            description: None,
        });

        assert_eq!(changeset.name.as_deref(), Some("X"));
        assert!(changeset.description.is_none());
    }

    #[rstest]
    fn patch_null_reaches_the_changeset_as_a_write() {
        let changeset = SubjectChangeset::from(SubjectPatch {
            name: None,
            description: Some(None),
        });

        assert!(changeset.name.is_none());
        assert_eq!(changeset.description, Some(None));
    }
}

//! Subject entity and its write payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A subject groups questions (one subject has many questions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Creation payload. Fields stay optional so missing values reach the store
/// untouched and surface as store-level constraint errors, not 400s.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Partial update: absent fields are left unchanged. `description` nests the
/// option so an explicit JSON `null` clears the column while an absent field
/// skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl SubjectPatch {
    /// True when the patch carries no fields to write.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn subject_serialises_camel_case() {
        let subject = Subject {
            id: 1,
            name: "Math".into(),
            description: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        let value = serde_json::to_value(&subject).expect("serialise subject");
        let object = value.as_object().expect("object");
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
        assert_eq!(object.get("description"), Some(&serde_json::Value::Null));
    }

    #[rstest]
    #[case(SubjectPatch::default(), true)]
    #[case(SubjectPatch { name: Some("X".into()), description: None }, false)]
    #[case(SubjectPatch { name: None, description: Some(Some("d".into())) }, false)]
    #[case(SubjectPatch { name: None, description: Some(None) }, false)]
    fn patch_emptiness(#[case] patch: SubjectPatch, #[case] empty: bool) {
        assert_eq!(patch.is_empty(), empty);
    }

    #[rstest]
    fn patch_distinguishes_null_from_absent() {
        let cleared: SubjectPatch =
            serde_json::from_str(r#"{"description": null}"#).expect("deserialise patch");
        assert_eq!(cleared.description, Some(None));

        let untouched: SubjectPatch = serde_json::from_str("{}").expect("deserialise patch");
        assert_eq!(untouched.description, None);
    }
}

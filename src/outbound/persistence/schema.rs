//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `migrations/` exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Subjects table.
    subjects (id) {
        /// Primary key; assigned by the store when the insert omits it.
        id -> Integer,
        /// Display name.
        name -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamp,
        /// Defaulted at creation; not maintained on update.
        updated_at -> Timestamp,
    }
}

diesel::table! {
    /// Questions table.
    questions (id) {
        /// Primary key; caller-supplied.
        id -> Integer,
        /// Short title.
        title -> Text,
        /// Question body text.
        question -> Text,
        /// Soft reference to `subjects.id`; not enforced by the store.
        subject_id -> Nullable<Integer>,
        /// Record creation timestamp.
        created_at -> Timestamp,
        /// Defaulted at creation; not maintained on update.
        updated_at -> Timestamp,
    }
}

diesel::joinable!(questions -> subjects (subject_id));
diesel::allow_tables_to_appear_in_same_query!(subjects, questions);

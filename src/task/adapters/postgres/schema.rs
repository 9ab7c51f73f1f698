//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task name, unique per UTC calendar day.
        #[max_length = 200]
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Priority storage form.
        #[max_length = 16]
        priority -> Varchar,
        /// Completion flag.
        is_done -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

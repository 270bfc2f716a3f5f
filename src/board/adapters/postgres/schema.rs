//! Diesel schema for board persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional project description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records linked to their project.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Status column.
        #[max_length = 20]
        status -> Varchar,
        /// Priority on the 1..=5 scale.
        priority -> Nullable<Int2>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);

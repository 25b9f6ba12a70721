//! Canonical key layout.
//!
//! | Key                         | Value                          |
//! |-----------------------------|--------------------------------|
//! | `project:<id>`              | Project record                 |
//! | `project:list`              | JSON array of project ids      |
//! | `project:<id>:todos`        | JSON array of the project's todo ids |
//! | `todo:<id>`                 | Todo record                    |
//!
//! Every read and write goes through these functions so the scheme cannot
//! drift between call sites.

/// Global project index.
pub const PROJECT_INDEX: &str = "project:list";

/// Whether `id` can name a record without landing on an index key.
///
/// `project:list` and `project:<id>:todos` share the `project:` prefix, so
/// `list` and anything containing the separator never name a project.
pub fn is_record_id(id: &str) -> bool {
    !id.is_empty() && id != "list" && !id.contains(':')
}

pub fn project(id: &str) -> String {
    format!("project:{}", id)
}

pub fn project_todos(project_id: &str) -> String {
    format!("project:{}:todos", project_id)
}

pub fn todo(id: &str) -> String {
    format!("todo:{}", id)
}

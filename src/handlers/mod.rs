//! HTTP handlers for student CRUD and marks analytics.

pub mod analytics;
pub mod students;

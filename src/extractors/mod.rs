//! Request extractors whose rejections use the standard error envelope.

mod json;
mod student_id;
pub use json::JsonBody;
pub use student_id::StudentIdPath;

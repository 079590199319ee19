//! Student record and its request/response representations.

use serde::{Deserialize, Serialize};

/// One row of the `students` table. `student_id` never changes after insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StudentRecord {
    pub student_id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub subject: String,
    /// Expected 0..=100; not enforced anywhere.
    pub marks: i32,
}

/// POST body. The client chooses the identifier.
#[derive(Clone, Debug, Deserialize)]
pub struct NewStudent {
    pub student_id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub subject: String,
    pub marks: i32,
}

impl From<NewStudent> for StudentRecord {
    fn from(n: NewStudent) -> Self {
        StudentRecord {
            student_id: n.student_id,
            name: n.name,
            age: n.age,
            gender: n.gender,
            subject: n.subject,
            marks: n.marks,
        }
    }
}

/// PUT body. Absent (or null) fields keep the stored value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub marks: Option<i32>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.subject.is_none()
            && self.marks.is_none()
    }

    /// Overlay supplied fields on `existing`. The identifier is always taken from `existing`.
    pub fn merge_into(self, existing: StudentRecord) -> StudentRecord {
        StudentRecord {
            student_id: existing.student_id,
            name: self.name.unwrap_or(existing.name),
            age: self.age.unwrap_or(existing.age),
            gender: self.gender.unwrap_or(existing.gender),
            subject: self.subject.unwrap_or(existing.subject),
            marks: self.marks.unwrap_or(existing.marks),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student_id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub subject: String,
    pub marks: i32,
}

impl From<StudentRecord> for StudentResponse {
    fn from(r: StudentRecord) -> Self {
        StudentResponse {
            student_id: r.student_id,
            name: r.name,
            age: r.age,
            gender: r.gender,
            subject: r.subject,
            marks: r.marks,
        }
    }
}

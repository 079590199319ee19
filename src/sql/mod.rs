//! SQL for the `students` table. Identifiers are fixed; values always go through bind parameters.

pub const STUDENTS_TABLE: &str = "students";

pub const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        student_id INT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        age INT NOT NULL,
        gender VARCHAR(10) NOT NULL,
        subject VARCHAR(100) NOT NULL,
        marks INT NOT NULL
    )
"#;

pub const SELECT_ALL: &str =
    "SELECT student_id, name, age, gender, subject, marks FROM students";

pub const SELECT_BY_ID: &str =
    "SELECT student_id, name, age, gender, subject, marks FROM students WHERE student_id = $1";

pub const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE student_id = $1)";

pub const INSERT: &str = "INSERT INTO students (student_id, name, age, gender, subject, marks) \
     VALUES ($1, $2, $3, $4, $5, $6)";

pub const UPDATE: &str = "UPDATE students SET name = $2, age = $3, gender = $4, subject = $5, marks = $6 \
     WHERE student_id = $1";

pub const DELETE_BY_ID: &str = "DELETE FROM students WHERE student_id = $1";

/// Quote identifier for PostgreSQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_escapes_embedded_quotes() {
        assert_eq!(quote_ident("school"), "\"school\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn statements_target_students_table() {
        for sql in [CREATE_STUDENTS_TABLE, SELECT_ALL, SELECT_BY_ID, INSERT, UPDATE, DELETE_BY_ID] {
            assert!(sql.contains(STUDENTS_TABLE), "{}", sql);
        }
        assert!(CREATE_STUDENTS_TABLE.contains("IF NOT EXISTS"));
    }
}

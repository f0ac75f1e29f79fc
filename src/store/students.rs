//! SQLite-backed student store
//!
//! One connection per store; every operation is a single statement (plus,
//! for writes, a uniqueness pre-check), so the storage engine's own
//! statement atomicity is the transaction boundary. The connection is a
//! scoped resource owned by the store and released on drop, on every exit
//! path.

use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::errors::{StoreError, StoreResult};
use super::resequencer;
use super::student::{Student, StudentInput};

/// DDL for the students table. The email column carries the hard UNIQUE
/// constraint; phone uniqueness is enforced by the store's pre-checks.
pub(super) const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    first_name VARCHAR(50),
    last_name VARCHAR(50),
    number VARCHAR(15),
    birthdate DATE,
    email TEXT UNIQUE NOT NULL
)";

/// Persistence for student rows, backed by a single SQLite file.
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Opens (or creates) the database at `path` and ensures the table
    /// exists.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(Self { conn })
    }

    /// Inserts a new student, returning the id assigned by the storage
    /// layer.
    ///
    /// # Errors
    ///
    /// - `PhoneConflict` if any existing row holds the candidate phone
    /// - `EmailConflict` if the email UNIQUE constraint rejects the row
    /// - `Integrity` for any other constraint violation
    pub fn insert(&self, input: &StudentInput) -> StoreResult<i64> {
        let taken: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM students WHERE number = ?1",
                params![input.phone],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(StoreError::PhoneConflict);
        }

        self.conn
            .execute(
                "INSERT INTO students (first_name, last_name, number, birthdate, email)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    input.first_name,
                    input.last_name,
                    input.phone,
                    input.birthdate,
                    input.email
                ],
            )
            .map_err(map_constraint)?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Returns all rows ordered by id, with the internal `number` column
    /// exposed as `phone`.
    pub fn list(&self) -> StoreResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, number AS phone, birthdate, email
             FROM students ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_student)?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }

    /// Fetches a single row by id.
    pub fn get(&self, id: i64) -> StoreResult<Student> {
        self.conn
            .query_row(
                "SELECT id, first_name, last_name, number AS phone, birthdate, email
                 FROM students WHERE id = ?1",
                params![id],
                row_to_student,
            )
            .optional()?
            .ok_or(StoreError::NotFound)
    }

    /// Overwrites all fields of the row matching `id`.
    ///
    /// The phone pre-check excludes the target row, so a student may keep
    /// their own number across an update.
    pub fn update(&self, id: i64, input: &StudentInput) -> StoreResult<()> {
        let taken: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM students WHERE number = ?1 AND id != ?2",
                params![input.phone, id],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(StoreError::PhoneConflict);
        }

        let changed = self
            .conn
            .execute(
                "UPDATE students
                 SET first_name = ?1, last_name = ?2, number = ?3, birthdate = ?4, email = ?5
                 WHERE id = ?6",
                params![
                    input.first_name,
                    input.last_name,
                    input.phone,
                    input.birthdate,
                    input.email,
                    id
                ],
            )
            .map_err(map_constraint)?;

        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Removes the row with the given id.
    ///
    /// Callers should follow a successful delete with `resequence`; a
    /// resequencing failure must not be treated as a failed delete.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Compacts ids to `1..N` preserving order. See `resequencer`.
    pub fn resequence(&mut self) -> StoreResult<()> {
        resequencer::resequence(&mut self.conn)
    }
}

fn row_to_student(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
        birthdate: row.get(4)?,
        email: row.get(5)?,
    })
}

/// Maps a SQLite failure on a write path to the store taxonomy.
///
/// SQLite reports UNIQUE violations as generic constraint failures; the
/// message names the offending column, and email is the only column with
/// a UNIQUE constraint, so a uniqueness violation here is an email
/// conflict.
fn map_constraint(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(e, ref msg)
            if e.code == ErrorCode::ConstraintViolation =>
        {
            let text = msg.as_deref().unwrap_or("").to_ascii_uppercase();
            if text.contains("UNIQUE") || text.contains("EMAIL") {
                StoreError::EmailConflict
            } else {
                StoreError::Integrity
            }
        }
        other => StoreError::Sqlite(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, StudentStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::open(temp_dir.path().join("students.db")).unwrap();
        (temp_dir, store)
    }

    fn sample(phone: &str, email: &str) -> StudentInput {
        StudentInput {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            phone: phone.to_string(),
            birthdate: "2000-01-01".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let (_tmp, store) = open_store();
        let id1 = store.insert(&sample("9123456789", "ann@x.com")).unwrap();
        let id2 = store.insert(&sample("9123456780", "bob@x.com")).unwrap();
        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
    }

    #[test]
    fn test_duplicate_phone_rejected_without_new_row() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        let err = store
            .insert(&sample("9123456789", "other@x.com"))
            .unwrap_err();
        assert!(matches!(err, StoreError::PhoneConflict));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected_by_constraint() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        let err = store.insert(&sample("8123456789", "ann@x.com")).unwrap_err();
        assert!(matches!(err, StoreError::EmailConflict));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_exposes_phone_field() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        let students = store.list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].phone, "9123456789");
    }

    #[test]
    fn test_get_missing_row_is_not_found() {
        let (_tmp, store) = open_store();
        assert!(matches!(store.get(42), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let (_tmp, store) = open_store();
        let id = store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        let mut updated = sample("8123456789", "ann.lee@x.com");
        updated.first_name = "Anne".to_string();
        store.update(id, &updated).unwrap();

        let row = store.get(id).unwrap();
        assert_eq!(row.first_name, "Anne");
        assert_eq!(row.phone, "8123456789");
        assert_eq!(row.email, "ann.lee@x.com");
    }

    #[test]
    fn test_update_keeps_own_phone() {
        let (_tmp, store) = open_store();
        let id = store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        // Same phone, new email: the pre-check must exclude the target row.
        store.update(id, &sample("9123456789", "new@x.com")).unwrap();
        assert_eq!(store.get(id).unwrap().email, "new@x.com");
    }

    #[test]
    fn test_update_rejects_phone_held_by_other_row() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();
        let id2 = store.insert(&sample("8123456789", "bob@x.com")).unwrap();

        let err = store
            .update(id2, &sample("9123456789", "bob@x.com"))
            .unwrap_err();
        assert!(matches!(err, StoreError::PhoneConflict));
    }

    #[test]
    fn test_update_nonexistent_id_leaves_table_unchanged() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();

        let err = store.update(99, &sample("7123456789", "new@x.com")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));

        let students = store.list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].email, "ann@x.com");
    }

    #[test]
    fn test_update_duplicate_email_is_conflict() {
        let (_tmp, store) = open_store();
        store.insert(&sample("9123456789", "ann@x.com")).unwrap();
        let id2 = store.insert(&sample("8123456789", "bob@x.com")).unwrap();

        let err = store
            .update(id2, &sample("8123456789", "ann@x.com"))
            .unwrap_err();
        assert!(matches!(err, StoreError::EmailConflict));
    }

    #[test]
    fn test_delete_missing_row_is_not_found() {
        let (_tmp, store) = open_store();
        assert!(matches!(store.delete(1), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_delete_removes_row() {
        let (_tmp, store) = open_store();
        let id = store.insert(&sample("9123456789", "ann@x.com")).unwrap();
        store.delete(id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_store_reopens_with_existing_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.db");

        {
            let store = StudentStore::open(&path).unwrap();
            store.insert(&sample("9123456789", "ann@x.com")).unwrap();
        }

        let store = StudentStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }
}

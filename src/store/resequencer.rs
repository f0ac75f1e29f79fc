//! ID resequencer
//!
//! Rebuilds the students table so primary keys are contiguous starting at
//! 1, preserving row order by prior id. The rebuild is destructive
//! (drop-and-recreate), so the whole pass runs inside one transaction:
//! any failure mid-rebuild rolls back and leaves the table as it was.
//!
//! O(N) in row count and intended for small datasets only. Must not run
//! concurrently with other writers against the same table; the store
//! serializes all access through its single connection.

use rusqlite::{params, Connection};

use super::errors::StoreResult;
use super::student::Student;
use super::students::CREATE_TABLE_SQL;

/// Compacts ids to exactly `1..N` in original-order-preserving sequence.
///
/// Atomic from the caller's perspective: either the full table is rebuilt
/// with compacted ids, or the transaction rolls back on drop and nothing
/// changed.
pub fn resequence(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;

    let rows: Vec<Student> = {
        let mut stmt = tx.prepare(
            "SELECT id, first_name, last_name, number AS phone, birthdate, email
             FROM students ORDER BY id",
        )?;
        let mapped = stmt.query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                phone: row.get(3)?,
                birthdate: row.get(4)?,
                email: row.get(5)?,
            })
        })?;

        let mut rows = Vec::new();
        for row in mapped {
            rows.push(row?);
        }
        rows
    };

    tx.execute("DROP TABLE students", [])?;
    tx.execute(CREATE_TABLE_SQL, [])?;

    for (idx, row) in rows.iter().enumerate() {
        tx.execute(
            "INSERT INTO students (id, first_name, last_name, number, birthdate, email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                (idx + 1) as i64,
                row.first_name,
                row.last_name,
                row.phone,
                row.birthdate,
                row.email
            ],
        )?;
    }

    tx.commit()?;
    Ok(())
}

//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `records` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate field rules before issuing SQL mutations.
//! - Each operation is one parameterized statement with the engine's implicit
//!   per-statement commit; there is no multi-step protocol.
//! - `email` uniqueness is enforced by the storage constraint, not by a
//!   read-before-write check.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::contact::{Contact, ContactDraft, ContactValidationError, RecordId};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, age, email FROM records";

const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "age", "email"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller-side precondition not met; storage was never touched.
    Validation(ContactValidationError),
    /// Underlying storage failure.
    Db(DbError),
    /// Update/Delete target id does not exist. Recoverable.
    NotFound(RecordId),
    /// The email collides with a different existing record. Recoverable;
    /// no row was modified.
    EmailTaken(String),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from an expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::EmailTaken(email) => {
                write!(f, "email `{email}` is already used by another record")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "contact repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "contact repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "contact repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::EmailTaken(_) => None,
            Self::InvalidData(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD operations.
///
/// All operations take explicit inputs and report explicit outcomes; there is
/// no hidden state beyond the open connection held by the implementation.
pub trait ContactRepository {
    /// Inserts a new record; storage assigns the next id.
    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<RecordId>;
    /// Replaces `name`, `age`, `email` of the record matching `contact.id`.
    fn update_contact(&self, contact: &Contact) -> RepoResult<()>;
    /// Loads one record by id.
    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>>;
    /// Returns the full snapshot of all records in insertion order.
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    /// Permanently removes the record matching `id`.
    fn delete_contact(&self, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema does
    ///   not match what this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<RecordId> {
        draft.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO records (name, age, email) VALUES (?1, ?2, ?3);",
            params![draft.name.as_str(), draft.age, draft.email.as_str()],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::EmailTaken(draft.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        contact.validate()?;

        let changed = self.conn.execute(
            "UPDATE records SET name = ?1, age = ?2, email = ?3 WHERE id = ?4;",
            params![
                contact.name.as_str(),
                contact.age,
                contact.email.as_str(),
                contact.id,
            ],
        );

        match changed {
            Ok(0) => Err(RepoError::NotFound(contact.id)),
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::EmailTaken(contact.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        // Rowid order equals insertion order for this table; ORDER BY makes
        // the snapshot deterministic regardless of engine internals.
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn delete_contact(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM records WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let contact = Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        email: row.get("email")?,
    };

    contact
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} (records.id={})", contact.id)))?;

    Ok(contact)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    )
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "records")? {
        return Err(RepoError::MissingRequiredTable("records"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "records", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "records",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table_name: &str, column_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        [table_name, column_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

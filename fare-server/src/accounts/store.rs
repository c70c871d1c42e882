//! File-backed account store.
//!
//! Records are stored one per line as `email,password,first,last`, the
//! flat-file shape of the original backend. The whole file is loaded at
//! open time into a map keyed by lowercased email; registrations append
//! to the file so the store survives restarts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::info;

/// Errors from the account store.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Reading or writing the backing file failed.
    #[error("account file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line in the backing file does not have four fields.
    #[error("malformed account record at line {line}")]
    Malformed { line: usize },

    /// A field contains the record separator or a newline.
    #[error("invalid {field}: must not contain commas or newlines")]
    InvalidField { field: &'static str },

    /// A required field is empty.
    #[error("invalid {field}: must not be empty")]
    EmptyField { field: &'static str },
}

/// A registered account, without the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The account was created.
    Registered,

    /// An account with this email already exists.
    EmailTaken,
}

/// Outcome of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials matched.
    Authenticated(Account),

    /// Unknown email or wrong password. Deliberately not distinguished.
    InvalidCredentials,
}

/// One stored record.
#[derive(Debug, Clone)]
struct Record {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

impl Record {
    fn account(&self) -> Account {
        Account {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Thread-safe, file-backed credential store.
pub struct AccountStore {
    path: PathBuf,
    inner: RwLock<HashMap<String, Record>>,
}

impl AccountStore {
    /// Open a store, loading existing records from `path`.
    ///
    /// A missing file is an empty store; it is created on first
    /// registration. A malformed line is an error, not silently dropped:
    /// credential data that cannot be read back should be looked at.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AccountError> {
        let path = path.as_ref().to_path_buf();

        let mut records = HashMap::new();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                for (i, line) in contents.lines().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    let record = parse_line(line).ok_or(AccountError::Malformed { line: i + 1 })?;
                    records.insert(record.email.to_lowercase(), record);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AccountError::Io(e)),
        }

        info!(path = %path.display(), accounts = records.len(), "account store opened");

        Ok(Self {
            path,
            inner: RwLock::new(records),
        })
    }

    /// Register a new account.
    ///
    /// Returns `EmailTaken` (not an error) when the email is already
    /// registered; email comparison is case-insensitive.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<RegisterOutcome, AccountError> {
        validate_field("email", email)?;
        validate_field("password", password)?;
        validate_field("first name", first_name)?;
        validate_field("last name", last_name)?;

        let key = email.to_lowercase();
        let mut guard = self.inner.write().await;

        if guard.contains_key(&key) {
            return Ok(RegisterOutcome::EmailTaken);
        }

        let record = Record {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        // Append under the write lock so concurrent registrations cannot
        // interleave lines.
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        let line = format!(
            "{},{},{},{}\n",
            record.email, record.password, record.first_name, record.last_name
        );
        file.write_all(line.as_bytes()).await?;

        guard.insert(key, record);
        Ok(RegisterOutcome::Registered)
    }

    /// Check credentials against the store.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthOutcome {
        let guard = self.inner.read().await;

        match guard.get(&email.to_lowercase()) {
            Some(record) if record.password == password => {
                AuthOutcome::Authenticated(record.account())
            }
            _ => AuthOutcome::InvalidCredentials,
        }
    }

    /// Number of registered accounts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the store has no accounts.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn parse_line(line: &str) -> Option<Record> {
    let mut parts = line.split(',');
    let email = parts.next()?;
    let password = parts.next()?;
    let first_name = parts.next()?;
    let last_name = parts.next()?;
    if parts.next().is_some() || email.is_empty() {
        return None;
    }

    Some(Record {
        email: email.to_string(),
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

fn validate_field(field: &'static str, value: &str) -> Result<(), AccountError> {
    if value.is_empty() {
        return Err(AccountError::EmptyField { field });
    }
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(AccountError::InvalidField { field });
    }
    Ok(())
}

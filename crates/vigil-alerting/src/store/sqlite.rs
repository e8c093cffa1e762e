//! SQLite-backed alert store. Append-only; rows are never updated.
//!
//! Timestamps are stored as UTC RFC 3339 strings, so lexicographic ordering
//! matches chronological ordering.

use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params_from_iter, Connection};

use vigil_core::errors::StorageError;
use vigil_core::models::{AlertDetails, AlertQuery, AlertRecord, AlertType, Severity};
use vigil_core::traits::IAlertStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS alerts (
    id         TEXT PRIMARY KEY,
    timestamp  TEXT NOT NULL,
    alert_type TEXT NOT NULL,
    severity   TEXT NOT NULL,
    message    TEXT NOT NULL,
    details    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_alerts_timestamp ON alerts(timestamp DESC);
CREATE INDEX IF NOT EXISTS idx_alerts_type ON alerts(alert_type);";

/// Durable alert log over a single SQLite connection.
pub struct SqliteAlertStore {
    conn: Mutex<Connection>,
}

impl SqliteAlertStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(to_unavailable)?;
        Self::init(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(to_unavailable)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA).map_err(to_unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::Unavailable {
            message: format!("alert store lock poisoned: {e}"),
        })?;
        f(&guard)
    }
}

impl IAlertStore for SqliteAlertStore {
    fn append(&self, record: &AlertRecord) -> Result<(), StorageError> {
        let details = serde_json::to_string(&record.details).map_err(|e| {
            StorageError::CorruptionDetected {
                details: format!("details serialization failed: {e}"),
            }
        })?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO alerts (id, timestamp, alert_type, severity, message, details)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    record.id,
                    record
                        .timestamp
                        .to_rfc3339_opts(SecondsFormat::Micros, true),
                    record.alert_type.as_str(),
                    record.severity.as_str(),
                    record.message,
                    details,
                ],
            )
            .map_err(to_unavailable)?;
            Ok(())
        })
    }

    fn query(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>, StorageError> {
        let mut sql = String::from(
            "SELECT id, timestamp, alert_type, severity, message, details FROM alerts",
        );
        let mut clauses: Vec<String> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(alert_type) = query.alert_type {
            args.push(alert_type.as_str().to_string());
            clauses.push(format!("alert_type = ?{}", args.len()));
        }
        if let Some(severity) = query.severity {
            args.push(severity.as_str().to_string());
            clauses.push(format!("severity = ?{}", args.len()));
        }
        if let Some(since) = query.since {
            args.push(since.to_rfc3339_opts(SecondsFormat::Micros, true));
            clauses.push(format!("timestamp >= ?{}", args.len()));
        }
        if let Some(until) = query.until {
            args.push(until.to_rfc3339_opts(SecondsFormat::Micros, true));
            clauses.push(format!("timestamp <= ?{}", args.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY timestamp DESC");

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql).map_err(to_unavailable)?;
            let rows = stmt
                .query_map(params_from_iter(args.iter()), |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                })
                .map_err(to_unavailable)?;

            let mut records = Vec::new();
            for row in rows {
                let (id, timestamp, alert_type, severity, message, details) =
                    row.map_err(to_unavailable)?;
                records.push(decode_row(
                    id, &timestamp, &alert_type, &severity, message, &details,
                )?);
            }
            Ok(records)
        })
    }
}

fn decode_row(
    id: String,
    timestamp: &str,
    alert_type: &str,
    severity: &str,
    message: String,
    details: &str,
) -> Result<AlertRecord, StorageError> {
    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| corruption(&id, &format!("timestamp: {e}")))?
        .with_timezone(&Utc);
    let alert_type =
        AlertType::from_str(alert_type).map_err(|e| corruption(&id, &e))?;
    let severity = Severity::from_str(severity).map_err(|e| corruption(&id, &e))?;
    let details: AlertDetails =
        serde_json::from_str(details).map_err(|e| corruption(&id, &format!("details: {e}")))?;
    Ok(AlertRecord {
        id,
        timestamp,
        alert_type,
        severity,
        message,
        details,
    })
}

fn corruption(id: &str, reason: &str) -> StorageError {
    StorageError::CorruptionDetected {
        details: format!("alert {id}: {reason}"),
    }
}

fn to_unavailable(e: rusqlite::Error) -> StorageError {
    StorageError::Unavailable {
        message: e.to_string(),
    }
}

//! Alert store implementations. The contract itself lives in
//! `vigil_core::traits::IAlertStore`.

pub mod sqlite;

pub use sqlite::SqliteAlertStore;

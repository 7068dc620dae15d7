//! Local persistence of accounts and the active session.
//!
//! `StorageManager` keeps two JSON files in the data directory:
//! - `accounts.json`: every registered account
//! - `session.json`: the logged-in username, absent when logged out

pub mod manager;

pub use manager::{StorageManager, StoredData};

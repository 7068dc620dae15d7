//! Authentication module for accounts and sessions.
//!
//! This module provides:
//! - `CredentialStore`: registered accounts and username/password verification
//! - `Session`: whether someone is logged in, and who

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{Session, SessionData};

//! Data models for storefront accounts.
//!
//! - `Account`: a registered username and its stored credential
//! - `Credential`: plaintext or Argon2id-hashed password

pub mod account;

pub use account::{Account, Credential};

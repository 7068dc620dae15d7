//! Storefront core library.
//!
//! Accounts, credential verification and session state for the storefront
//! app, plus the screen models the front ends render.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod screens;
pub mod service;

pub use auth::{CredentialStore, Session, SessionData};
pub use config::Config;
pub use error::{AccountError, Result};
pub use service::AccountService;

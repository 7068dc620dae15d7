//! Screen state for whatever front end draws the app.
//!
//! - `Destination`, `Navigator`: the bottom navigation bar
//! - `AccountView`, `AccountAction`: what the user screen offers for a session

pub mod account;
pub mod navigation;

pub use account::{AccountAction, AccountView};
pub use navigation::{Destination, Navigator};

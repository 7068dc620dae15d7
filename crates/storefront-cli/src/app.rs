//! Application state for the storefront terminal front end.
//!
//! `App` ties the account service to the bottom navigation and turns each
//! line the user types into a navigation change or an account action.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, error, info, warn};

use storefront_core::screens::{AccountAction, AccountView, Destination, Navigator};
use storefront_core::{AccountError, AccountService, Config};

use crate::input::{check_password, check_username, is_yes, Prompter};

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Quitting,
}

pub struct App {
    pub config: Config,
    pub service: AccountService,
    pub navigator: Navigator,
    pub state: AppState,
    pub status_message: Option<String>,
    persist_config: bool,
}

impl App {
    /// Open account data from the configured data directory
    pub fn new(config: Config) -> Result<Self> {
        debug!(hash_passwords = config.hash_passwords, "Config loaded");

        let service = AccountService::from_config(&config)?;
        let mut app = Self::with_service(config, service);
        app.persist_config = true;
        Ok(app)
    }

    /// An app that never writes the config file
    pub fn with_service(config: Config, service: AccountService) -> Self {
        Self {
            config,
            service,
            navigator: Navigator::new(),
            state: AppState::Normal,
            status_message: None,
            persist_config: false,
        }
    }

    pub fn account_view(&self) -> AccountView {
        AccountView::from_session(self.service.session())
    }

    /// Handle one line of input from the main prompt
    pub fn handle_line<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        prompter: &mut Prompter<R, W>,
    ) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if line.eq_ignore_ascii_case("q") {
            self.state = AppState::Quitting;
            return Ok(());
        }

        let mut chars = line.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            if let Some(dest) = Destination::from_key(key) {
                if self.navigator.select(dest) {
                    debug!(destination = dest.title(), "Navigated");
                }
                return Ok(());
            }
        }

        if self.navigator.current() == Destination::User {
            let view = self.account_view();
            let action = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| view.actions.get(i).copied());
            if let Some(action) = action {
                return self.run_action(action, prompter);
            }
        }

        self.status_message = Some(format!("Unknown command: {}", line));
        Ok(())
    }

    /// Run an action offered by the user screen
    pub fn run_action<R: BufRead, W: Write>(
        &mut self,
        action: AccountAction,
        prompter: &mut Prompter<R, W>,
    ) -> Result<()> {
        if !self.account_view().allows(action) {
            self.status_message = Some(format!("{} is not available right now", action.label()));
            return Ok(());
        }

        match action {
            AccountAction::SignUp | AccountAction::LogIn => self.credential_action(action, prompter),
            AccountAction::LogOut => {
                let result = self.service.log_out();
                self.report(result, "Logged out");
                Ok(())
            }
            AccountAction::EditPassword => {
                let Some(password) = prompter.secret("New password: ")? else {
                    return Ok(());
                };
                if let Err(msg) = check_password(&password) {
                    self.status_message = Some(msg.to_string());
                    return Ok(());
                }
                match self.service.change_password(&password) {
                    Err(AccountError::EmptyField) => {
                        self.status_message = Some("Password cannot be empty".to_string());
                    }
                    result => self.report(result, "Password updated"),
                }
                Ok(())
            }
            AccountAction::DeleteAccount => {
                let answer = prompter
                    .line("Are you sure you want to delete your account? [y/N]: ")?
                    .unwrap_or_default();
                if !is_yes(&answer) {
                    self.status_message = Some("Account kept".to_string());
                    return Ok(());
                }
                let result = self.service.delete_account();
                self.report(result, "Account deleted");
                Ok(())
            }
        }
    }

    fn credential_action<R: BufRead, W: Write>(
        &mut self,
        action: AccountAction,
        prompter: &mut Prompter<R, W>,
    ) -> Result<()> {
        let label = match self.config.last_username {
            Some(ref last) if action == AccountAction::LogIn => format!("Email [{}]: ", last),
            _ => "Email: ".to_string(),
        };
        let Some(mut username) = prompter.line(&label)? else {
            return Ok(());
        };
        if username.is_empty() && action == AccountAction::LogIn {
            username = self.config.last_username.clone().unwrap_or_default();
        }
        let Some(password) = prompter.secret("Password: ")? else {
            return Ok(());
        };

        if let Err(msg) = check_username(&username).and_then(|_| check_password(&password)) {
            self.status_message = Some(msg.to_string());
            return Ok(());
        }

        let result = if action == AccountAction::SignUp {
            self.service.sign_up(&username, &password)
        } else {
            self.service.log_in(&username, &password)
        };

        if result.is_ok() {
            info!(action = action.label(), "Account action succeeded");
            self.remember_username(&username);
        }
        self.report(result, &format!("Welcome {}", username));
        Ok(())
    }

    fn remember_username(&mut self, username: &str) {
        self.config.last_username = Some(username.to_string());
        if self.persist_config {
            if let Err(e) = self.config.save() {
                warn!(error = %e, "Failed to save config");
            }
        }
    }

    fn report(&mut self, result: storefront_core::Result<()>, success: &str) {
        self.status_message = Some(match result {
            Ok(()) => success.to_string(),
            Err(e) => {
                if e.is_validation() {
                    debug!(error = %e, "Account action rejected");
                } else {
                    error!(error = %e, "Account action failed");
                }
                e.user_message()
            }
        });
    }
}

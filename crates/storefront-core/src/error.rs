use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Username and password must not be empty")]
    EmptyField,

    #[error("An account named '{0}' already exists")]
    DuplicateUsername(String),

    #[error("No account named '{0}'")]
    NotFound(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No user is logged in")]
    NotAuthenticated,

    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl AccountError {
    /// Message suitable for showing directly to the person at the screen.
    pub fn user_message(&self) -> String {
        match self {
            AccountError::EmptyField => "Please enter your email and password".to_string(),
            AccountError::DuplicateUsername(_) => "That email is already registered".to_string(),
            AccountError::NotFound(_) => "Account not found".to_string(),
            AccountError::InvalidCredentials => "Invalid email or password".to_string(),
            AccountError::NotAuthenticated => "Please log in first".to_string(),
            AccountError::Hashing(_) | AccountError::Storage(_) => {
                format!("Something went wrong: {}", self)
            }
        }
    }

    /// Validation outcomes are the caller's to report; everything else is an
    /// environment failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AccountError::Hashing(_) | AccountError::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;

use crate::auth::Session;

const MEMBER_DESCRIPTION: &str = "Thank you for being a member! As a gift you can use the discount code - 5off - at your next purchase";

const GUEST_DESCRIPTION: &str = "As a member you can get exclusive deals and notifications of new products or offers. If you wish to unsubscribe from our newsletter, remove your account";

/// Something the user screen lets you do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    SignUp,
    LogIn,
    LogOut,
    EditPassword,
    DeleteAccount,
}

impl AccountAction {
    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::SignUp => "Sign up",
            AccountAction::LogIn => "Log in",
            AccountAction::LogOut => "Log out",
            AccountAction::EditPassword => "Edit account",
            AccountAction::DeleteAccount => "Delete account",
        }
    }

    /// Needs a username/password form
    pub fn needs_credentials(&self) -> bool {
        matches!(self, AccountAction::SignUp | AccountAction::LogIn)
    }

    /// Asks the user to confirm before running
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, AccountAction::DeleteAccount)
    }
}

/// What the user screen shows for a given session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub title: String,
    pub description: &'static str,
    pub actions: Vec<AccountAction>,
}

impl AccountView {
    pub fn from_session(session: &Session) -> Self {
        match session.current_username() {
            Some(username) => Self {
                title: format!("Welcome {}", username),
                description: MEMBER_DESCRIPTION,
                actions: vec![
                    AccountAction::LogOut,
                    AccountAction::EditPassword,
                    AccountAction::DeleteAccount,
                ],
            },
            None => Self {
                title: "Sign up".to_string(),
                description: GUEST_DESCRIPTION,
                actions: vec![AccountAction::SignUp, AccountAction::LogIn],
            },
        }
    }

    /// The credential form is shown only when logged out
    pub fn shows_credential_form(&self) -> bool {
        self.actions.iter().any(AccountAction::needs_credentials)
    }

    pub fn allows(&self, action: AccountAction) -> bool {
        self.actions.contains(&action)
    }
}

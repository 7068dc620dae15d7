//! Line input: prompts, hidden password entry and field validation.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Maximum length for username input.
/// Usernames are email addresses, 50 chars covers most.
const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// `hide_secrets` reads passwords without echo; only works on a terminal
    pub fn new(input: R, output: W, hide_secrets: bool) -> Self {
        Self {
            input,
            output,
            hide_secrets,
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one trimmed line. `None` at end of input.
    pub fn line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Read a password. Surrounding whitespace is kept.
    pub fn secret(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        if self.hide_secrets {
            return match rpassword::read_password() {
                Ok(password) => Ok(Some(password)),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
                Err(e) => Err(e.into()),
            };
        }

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Checks a username before it reaches the store
pub fn check_username(username: &str) -> Result<(), &'static str> {
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err("Email is too long");
    }
    if username.chars().any(char::is_control) {
        return Err("Email contains invalid characters");
    }
    Ok(())
}

/// Checks a password before it reaches the store
pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err("Password is too long");
    }
    if password.chars().any(char::is_control) {
        return Err("Password contains invalid characters");
    }
    Ok(())
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_trims_and_hits_eof() {
        let mut p = Prompter::new(Cursor::new("  alice  \r\n"), Vec::new(), false);
        assert_eq!(p.line("Email: ").unwrap(), Some("alice".to_string()));
        assert_eq!(p.line("Email: ").unwrap(), None);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Email: Email: ");
    }

    #[test]
    fn test_secret_keeps_inner_whitespace() {
        let mut p = Prompter::new(Cursor::new(" pass word \n"), Vec::new(), false);
        assert_eq!(p.secret("Password: ").unwrap(), Some(" pass word ".to_string()));
    }

    #[test]
    fn test_check_username() {
        assert!(check_username("alice@example.com").is_ok());
        assert!(check_username(&"a".repeat(50)).is_ok());
        assert!(check_username(&"a".repeat(51)).is_err());
        assert!(check_username("al\tice").is_err());
    }

    #[test]
    fn test_check_password() {
        assert!(check_password("correct horse battery staple").is_ok());
        assert!(check_password(&"p".repeat(128)).is_ok());
        assert!(check_password(&"p".repeat(129)).is_err());
        assert!(check_password("pw\x00").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}

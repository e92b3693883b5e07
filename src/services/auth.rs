/// Swappable authentication collaborator. The calculator core never touches
/// this; it only gates the interactive commands.
pub trait AuthProvider {
    fn login(&self, email: &str, password: &str) -> bool;
}

/// Mock provider: any non-empty email/password pair is accepted.
pub struct MockAuth;

impl AuthProvider for MockAuth {
    fn login(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && !password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthProvider, MockAuth};

    #[test]
    fn non_empty_credentials_pass() {
        assert!(MockAuth.login("finance@example.com", "hunter2"));
    }

    #[test]
    fn empty_credentials_fail() {
        assert!(!MockAuth.login("", "hunter2"));
        assert!(!MockAuth.login("finance@example.com", ""));
    }
}

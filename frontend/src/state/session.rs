use shared::{SessionCheckResponse, User};

/// Authentication state of the page. Starts in `Checking` until the
/// initial session-check round trip resolves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Checking,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    /// Outcome of the session check. A response claiming authenticated
    /// without a user body is treated as anonymous.
    pub fn from_check(response: SessionCheckResponse) -> SessionState {
        match response {
            SessionCheckResponse {
                authenticated: true,
                user: Some(user),
            } => SessionState::Authenticated(user),
            _ => SessionState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Permissions, Profile};

    fn some_user() -> User {
        User {
            id: 7,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            profile: Profile::User,
            active: true,
            permissions: Permissions::default(),
            last_login: None,
        }
    }

    #[test]
    fn test_authenticated_check_yields_authenticated_state() {
        let state = SessionState::from_check(SessionCheckResponse {
            authenticated: true,
            user: Some(some_user()),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().username, "ana");
    }

    #[test]
    fn test_unauthenticated_check_yields_anonymous() {
        let state = SessionState::from_check(SessionCheckResponse {
            authenticated: false,
            user: None,
        });
        assert_eq!(state, SessionState::Anonymous);
        assert!(state.user().is_none());
    }

    #[test]
    fn test_authenticated_without_user_body_is_anonymous() {
        let state = SessionState::from_check(SessionCheckResponse {
            authenticated: true,
            user: None,
        });
        assert_eq!(state, SessionState::Anonymous);
    }
}

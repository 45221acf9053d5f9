//! Session primitives shared across the UI.
//!
//! # Design
//! - Auth is an injected capability, not an ambient lookup: interaction
//!   logic takes `&impl AuthQuery` so tests can substitute a fake.
//! - Keep session data as simple values so callers can store/clear it
//!   without side effects.
//! - Treat an empty token as signed out at the call site.

use clipstream_api_models::UserProfile;

/// Read-only capability answering whether the viewer is signed in.
pub trait AuthQuery {
    /// Whether the current viewer has an established session.
    fn is_authenticated(&self) -> bool;
}

/// Session slice held in the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Bearer token attached to outbound requests, when signed in.
    pub token: Option<String>,
    /// Profile of the signed-in account.
    pub user: Option<UserProfile>,
}

impl SessionSlice {
    /// Install a session from a successful sign-in.
    pub fn establish(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the session on sign-out or token rejection.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Signed-in account id, when available.
    #[must_use]
    pub fn viewer_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id)
    }
}

impl AuthQuery for SessionSlice {
    fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.trim().is_empty()) && self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthQuery, SessionSlice};
    use clipstream_api_models::UserProfile;

    fn profile() -> UserProfile {
        UserProfile {
            id: 9,
            nickname: "viewer".to_string(),
            email: "viewer@example.com".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn empty_session_is_signed_out() {
        assert!(!SessionSlice::default().is_authenticated());
    }

    #[test]
    fn blank_token_is_signed_out() {
        let mut session = SessionSlice::default();
        session.establish("   ".to_string(), profile());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn token_without_profile_is_signed_out() {
        let session = SessionSlice {
            token: Some("tok".to_string()),
            user: None,
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn establish_and_clear_round_trip() {
        let mut session = SessionSlice::default();
        session.establish("tok".to_string(), profile());
        assert!(session.is_authenticated());
        assert_eq!(session.viewer_id(), Some(9));
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.viewer_id(), None);
    }
}

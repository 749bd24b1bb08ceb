use store::{Identity, ProfileRecord};

/// Authentication state of one mounted session root.
///
/// `profile` is only ever set while `user` is set and refers to the same uid.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<Identity>,
    pub profile: Option<ProfileRecord>,
    /// True from mount until the first auth-state notification.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Anonymous,
    Authenticated { profile_pending: bool },
}

impl Session {
    /// Settled state with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            return SessionPhase::Initializing;
        }
        match self.user {
            None => SessionPhase::Anonymous,
            Some(_) => SessionPhase::Authenticated {
                profile_pending: self.profile.is_none(),
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name to greet the user with: profile first, then the identity.
    pub fn display_name(&self) -> Option<&str> {
        match (&self.profile, &self.user) {
            (Some(profile), _) if !profile.display_name.is_empty() => Some(&profile.display_name),
            (_, Some(user)) => Some(user.display_name()),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(ProfileRecord::is_admin)
    }

    /// True when `profile` belongs to `user`, the one invariant every update keeps.
    pub(crate) fn is_consistent(&self) -> bool {
        match (&self.user, &self.profile) {
            (_, None) => true,
            (Some(user), Some(profile)) => user.uid == profile.uid,
            (None, Some(_)) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_phases() {
        assert_eq!(Session::default().phase(), SessionPhase::Initializing);
        assert_eq!(Session::anonymous().phase(), SessionPhase::Anonymous);

        let alice = Identity::new("uid-1", "a@x.com").with_display_name("Alice");
        let mut session = Session {
            user: Some(alice.clone()),
            profile: None,
            loading: false,
        };
        assert_eq!(
            session.phase(),
            SessionPhase::Authenticated {
                profile_pending: true
            }
        );

        session.profile = Some(ProfileRecord::new_user(&alice, "Alice B", None, Utc::now()));
        assert_eq!(
            session.phase(),
            SessionPhase::Authenticated {
                profile_pending: false
            }
        );
        assert_eq!(session.display_name(), Some("Alice B"));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_identity() {
        let session = Session {
            user: Some(Identity::new("uid-1", "a@x.com")),
            profile: None,
            loading: false,
        };
        assert_eq!(session.display_name(), Some("a@x.com"));
        assert_eq!(Session::anonymous().display_name(), None);
    }

    #[test]
    fn test_profile_without_user_is_inconsistent() {
        let alice = Identity::new("uid-1", "a@x.com");
        let session = Session {
            user: None,
            profile: Some(ProfileRecord::new_user(&alice, "Alice", None, Utc::now())),
            loading: false,
        };
        assert!(!session.is_consistent());
    }
}

//! Route guard decisions, independent of any router.
//!
//! | loading | require_auth | signed in | view | redirect |
//! |---|---|---|---|---|
//! | yes | any | any | placeholder | none |
//! | no | yes | no | nothing | `redirect_to` |
//! | no | yes | yes | children | none |
//! | no | no | yes | nothing | `landing` |
//! | no | no | no | children | none |

use crate::state::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Neutral loading indicator.
    Placeholder,
    Children,
    /// A redirect is pending.
    Nothing,
}

/// Whatever performs the navigation.
pub trait Redirector<R> {
    fn push(&mut self, target: R);
}

impl<R, F: FnMut(R)> Redirector<R> for F {
    fn push(&mut self, target: R) {
        self(target)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteGuard<R> {
    require_auth: bool,
    redirect_to: R,
    landing: R,
    /// Target already navigated to for the current state.
    requested: Option<R>,
}

impl<R: Clone + PartialEq> RouteGuard<R> {
    /// Guard for a members-only page. Anonymous visitors go to `redirect_to`;
    /// `landing` is used when the guard is flipped to guest-only.
    pub fn new(redirect_to: R, landing: R) -> Self {
        Self {
            require_auth: true,
            redirect_to,
            landing,
            requested: None,
        }
    }

    pub fn with_require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }

    pub fn view(&self, session: &Session) -> GuardView {
        if session.loading {
            GuardView::Placeholder
        } else if self.target(session).is_some() {
            GuardView::Nothing
        } else {
            GuardView::Children
        }
    }

    /// Where this state should navigate to, if anywhere.
    pub fn target(&self, session: &Session) -> Option<&R> {
        if session.loading {
            return None;
        }
        match (self.require_auth, session.is_authenticated()) {
            (true, false) => Some(&self.redirect_to),
            (false, true) => Some(&self.landing),
            _ => None,
        }
    }

    /// Decide the view for `session` and navigate if needed. A target is pushed
    /// once; observing the same state again does not push it a second time.
    pub fn observe(&mut self, session: &Session, redirector: &mut impl Redirector<R>) -> GuardView {
        match self.target(session).cloned() {
            Some(target) => {
                if self.requested.as_ref() != Some(&target) {
                    redirector.push(target.clone());
                    self.requested = Some(target);
                }
            }
            None if !session.loading => self.requested = None,
            None => {}
        }
        self.view(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Identity;

    #[derive(Default)]
    struct RecordingRedirector {
        pushed: Vec<&'static str>,
    }

    impl Redirector<&'static str> for RecordingRedirector {
        fn push(&mut self, target: &'static str) {
            self.pushed.push(target);
        }
    }

    fn session(loading: bool, signed_in: bool) -> Session {
        Session {
            user: signed_in.then(|| Identity::new("uid-1", "a@x.com")),
            profile: None,
            loading,
        }
    }

    fn guard(require_auth: bool) -> RouteGuard<&'static str> {
        RouteGuard::new("/", "/dashboard").with_require_auth(require_auth)
    }

    #[test]
    fn test_never_redirects_while_loading() {
        for require_auth in [true, false] {
            for signed_in in [true, false] {
                let mut guard = guard(require_auth);
                let mut redirector = RecordingRedirector::default();
                let view = guard.observe(&session(true, signed_in), &mut redirector);
                assert_eq!(view, GuardView::Placeholder);
                assert!(redirector.pushed.is_empty());
            }
        }
    }

    #[test]
    fn test_protected_page_redirects_anonymous_once() {
        let mut guard = guard(true);
        let mut redirector = RecordingRedirector::default();
        let anonymous = session(false, false);

        for _ in 0..3 {
            assert_eq!(guard.observe(&anonymous, &mut redirector), GuardView::Nothing);
        }
        assert_eq!(redirector.pushed, vec!["/"]);
    }

    #[test]
    fn test_protected_page_renders_for_member() {
        let mut guard = guard(true);
        let mut redirector = RecordingRedirector::default();
        assert_eq!(guard.observe(&session(false, true), &mut redirector), GuardView::Children);
        assert!(redirector.pushed.is_empty());
    }

    #[test]
    fn test_guest_page_sends_member_to_landing_once() {
        let mut guard = guard(false);
        let mut redirector = RecordingRedirector::default();
        let member = session(false, true);

        assert_eq!(guard.observe(&member, &mut redirector), GuardView::Nothing);
        assert_eq!(guard.observe(&member, &mut redirector), GuardView::Nothing);
        assert_eq!(redirector.pushed, vec!["/dashboard"]);
    }

    #[test]
    fn test_guest_page_renders_for_anonymous() {
        let mut guard = guard(false);
        let mut redirector = RecordingRedirector::default();
        assert_eq!(guard.observe(&session(false, false), &mut redirector), GuardView::Children);
        assert!(redirector.pushed.is_empty());
    }

    #[test]
    fn test_redirects_again_after_state_changes_back() {
        let mut guard = guard(true);
        let mut pushed = Vec::new();
        let mut redirector = |target: &'static str| pushed.push(target);

        guard.observe(&session(false, false), &mut redirector);
        guard.observe(&session(false, true), &mut redirector);
        guard.observe(&session(false, false), &mut redirector);
        assert_eq!(pushed, vec!["/", "/"]);
    }

    #[test]
    fn test_loading_then_settled_redirects_once() {
        let mut guard = guard(true);
        let mut redirector = RecordingRedirector::default();
        guard.observe(&session(true, false), &mut redirector);
        assert!(redirector.pushed.is_empty());
        guard.observe(&session(false, false), &mut redirector);
        guard.observe(&session(false, false), &mut redirector);
        assert_eq!(redirector.pushed, vec!["/"]);
    }
}

//! # Session hook: the single source of truth for "who is signed in"
//!
//! [`SessionHook::mount`] subscribes to the credential store's auth-state feed
//! exactly once. From then on the only writer of [`Session`] is the notification
//! path ([`SessionHook::listen`] or [`SessionHook::settle`]); the four operations
//! talk to the stores and return advisory results, and the state follows from
//! the notification that the store publishes. Because the two can arrive in
//! either order, every update is keyed by uid:
//!
//! - a notification for a different user drops the old profile in the same update
//! - a profile fetched (or written by sign-up) for a uid that is no longer current
//!   is discarded
//! - "no user" clears user and profile together
//!
//! [`SessionHook::unmount`] detaches the subscription and freezes the state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use store::{
    validate, CredentialStore, Identity, ProfileRecord, ProfileStore, SessionNotice,
    SessionSubscription, StoreError, Unsubscribe,
};
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use crate::context::SessionContext;
use crate::error::SessionError;
use crate::state::Session;

/// The identity provider a session root is built with.
///
/// `Unavailable` is for pages that have no provider configured: the session
/// settles as anonymous and every operation fails with
/// [`SessionError::Unavailable`].
#[derive(Clone, Debug)]
pub enum IdentityProvider<C, P> {
    Ready { credentials: C, profiles: P },
    Unavailable,
}

impl<C, P> IdentityProvider<C, P> {
    pub fn ready(credentials: C, profiles: P) -> Self {
        IdentityProvider::Ready {
            credentials,
            profiles,
        }
    }
}

struct Inner<C, P> {
    provider: IdentityProvider<C, P>,
    state: watch::Sender<Session>,
    subscription: Mutex<Option<SessionSubscription>>,
    unsubscribe: Option<Unsubscribe>,
    disposed: AtomicBool,
}

pub struct SessionHook<C, P> {
    inner: Arc<Inner<C, P>>,
}

impl<C, P> Clone for SessionHook<C, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: CredentialStore, P: ProfileStore> SessionHook<C, P> {
    pub fn mount(provider: IdentityProvider<C, P>) -> Self {
        let (subscription, initial) = match &provider {
            IdentityProvider::Ready { credentials, .. } => {
                (Some(credentials.subscribe()), Session::default())
            }
            IdentityProvider::Unavailable => {
                warn!("no identity provider configured; session stays anonymous");
                (None, Session::anonymous())
            }
        };
        let unsubscribe = subscription.as_ref().map(SessionSubscription::handle);
        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                provider,
                state,
                subscription: Mutex::new(subscription),
                unsubscribe,
                disposed: AtomicBool::new(false),
            }),
        }
    }

    pub fn context(&self) -> SessionContext {
        SessionContext::new(self.inner.state.subscribe())
    }

    pub fn session(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.inner.disposed.load(Ordering::SeqCst)
    }

    /// Apply notifications as they arrive until the subscription ends.
    ///
    /// Meant to run as one long-lived task per mount. A second concurrent call
    /// waits for the first to finish and then returns.
    pub async fn listen(&self) {
        let mut subscription = self.inner.subscription.lock().await;
        let Some(subscription) = subscription.as_mut() else {
            return;
        };
        while let Some(notice) = subscription.next().await {
            if !self.is_mounted() {
                break;
            }
            self.apply(notice).await;
        }
        debug!("session subscription closed");
    }

    /// Apply every notification that is already buffered, without waiting for new
    /// ones. Does nothing while [`listen`](Self::listen) is running.
    pub async fn settle(&self) {
        let Ok(mut subscription) = self.inner.subscription.try_lock() else {
            return;
        };
        let Some(subscription) = subscription.as_mut() else {
            return;
        };
        while let Some(notice) = subscription.try_next() {
            if !self.is_mounted() {
                break;
            }
            self.apply(notice).await;
        }
    }

    /// Detach from the feed. Later notifications and in-flight profile reads no
    /// longer touch the state.
    pub fn unmount(&self) {
        if self.inner.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = &self.inner.unsubscribe {
            handle.unsubscribe();
        }
        debug!("session root unmounted");
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        validate::required(email, "Email is required")?;
        validate::required(password, "Password is required")?;
        let (credentials, _) = self.provider()?;

        let user = credentials
            .verify_credentials(email.trim(), password)
            .await
            .inspect_err(|e| info!(error = %e, "sign-in refused"))?;
        info!(uid = %user.uid, "signed in");
        Ok(user)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        phone: Option<&str>,
    ) -> Result<Identity, SessionError> {
        validate::required(display_name, "Name is required")?;
        validate::required(email, "Email is required")?;
        validate::email(email.trim())?;
        validate::password(password)?;
        let (credentials, profiles) = self.provider()?;
        let display_name = display_name.trim();

        let created = credentials.create_credentials(email.trim(), password).await?;
        info!(uid = %created.uid, "account created");

        let user = credentials
            .set_display_name(&created.uid, display_name)
            .await
            .map_err(|e| partial_write(&created.uid, "display name", e))?;

        let profile = ProfileRecord::new_user(&user, display_name, phone, Utc::now());
        profiles
            .write_profile(&profile)
            .await
            .map_err(|e| partial_write(&user.uid, "profile", e))?;

        // The notification may already have been applied before the write landed.
        let uid = user.uid.clone();
        self.update(move |session| {
            let current = session.user.as_ref().is_some_and(|u| u.uid == uid);
            if current && session.profile.is_none() {
                session.profile = Some(profile);
                true
            } else {
                false
            }
        });
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), SessionError> {
        let (credentials, _) = self.provider()?;
        credentials.end_session().await?;
        info!("signed out");
        Ok(())
    }

    /// Ask the store to send a reset message. Session state is never touched.
    pub async fn reset_password(&self, email: &str) -> Result<(), SessionError> {
        validate::required(email, "Email is required")?;
        validate::email(email.trim())?;
        let (credentials, _) = self.provider()?;
        credentials.request_password_reset(email.trim()).await?;
        info!("password reset requested");
        Ok(())
    }

    fn provider(&self) -> Result<(&C, &P), SessionError> {
        match &self.inner.provider {
            IdentityProvider::Ready {
                credentials,
                profiles,
            } => Ok((credentials, profiles)),
            IdentityProvider::Unavailable => Err(SessionError::Unavailable),
        }
    }

    async fn apply(&self, notice: SessionNotice) {
        let Some(user) = notice else {
            self.replace(Session::anonymous());
            return;
        };

        let kept = self
            .inner
            .state
            .borrow()
            .profile
            .clone()
            .filter(|p| p.uid == user.uid);
        let needs_profile = kept.is_none();
        self.replace(Session {
            user: Some(user.clone()),
            profile: kept,
            loading: false,
        });
        if !needs_profile {
            return;
        }

        let Ok((_, profiles)) = self.provider() else {
            return;
        };
        match profiles.read_profile(&user.uid).await {
            Ok(Some(profile)) => {
                self.update(move |session| {
                    let current = session.user.as_ref().is_some_and(|u| u.uid == profile.uid);
                    if current && session.profile.as_ref() != Some(&profile) {
                        session.profile = Some(profile);
                        true
                    } else {
                        false
                    }
                });
            }
            Ok(None) => debug!(uid = %user.uid, "no profile document yet"),
            Err(e) => warn!(uid = %user.uid, error = %e, "failed to fetch profile"),
        }
    }

    fn replace(&self, next: Session) {
        self.update(move |session| {
            if *session == next {
                false
            } else {
                *session = next;
                true
            }
        });
    }

    fn update(&self, modify: impl FnOnce(&mut Session) -> bool) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.inner.state.send_if_modified(|session| {
            let modified = modify(session);
            debug_assert!(session.is_consistent());
            modified
        })
    }
}

fn partial_write(uid: &str, step: &str, e: StoreError) -> SessionError {
    error!(%uid, %step, error = %e, "identity created but sign-up could not finish");
    let reason = match e {
        StoreError::Rejected(message) => message,
        StoreError::Unreachable(_) => crate::error::NETWORK_MESSAGE.to_string(),
    };
    SessionError::PartialWrite {
        uid: uid.to_string(),
        reason,
    }
}

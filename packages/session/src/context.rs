use tokio::sync::watch;

use crate::state::Session;

/// Read side of a [`SessionHook`](crate::SessionHook), handed to everything that
/// renders from session state. Cloning is cheap; each clone tracks changes on
/// its own.
#[derive(Clone, Debug)]
pub struct SessionContext {
    receiver: watch::Receiver<Session>,
}

impl SessionContext {
    pub(crate) fn new(receiver: watch::Receiver<Session>) -> Self {
        Self { receiver }
    }

    pub fn current(&self) -> Session {
        self.receiver.borrow().clone()
    }

    /// Whether the state changed since this context last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next change. `false` once the hook is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Wait until `predicate` holds and return that state. `None` if the hook
    /// goes away first.
    pub async fn wait_for(&mut self, predicate: impl FnMut(&Session) -> bool) -> Option<Session> {
        self.receiver
            .wait_for(predicate)
            .await
            .ok()
            .map(|session| session.clone())
    }
}

//! # Session feed: the auth-state notification channel
//!
//! A [`SessionFeed`] is owned by a credential store implementation and fans out
//! "who is signed in" changes to every [`SessionSubscription`]. Subscribing
//! delivers the current state straight away when it is known; a feed created with
//! [`SessionFeed::pending`] stays silent until its first [`publish`](SessionFeed::publish),
//! which models a store that is still restoring a persisted session.
//!
//! Dropping a subscription, or calling [`Unsubscribe::unsubscribe`] on its handle,
//! detaches it from the feed. After that the subscription yields whatever was
//! already buffered and then `None`.

use std::sync::{Arc, Mutex, Weak};

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::models::Identity;

/// One auth-state notification: `Some` when a user is signed in, `None` otherwise.
pub type SessionNotice = Option<Identity>;

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, UnboundedSender<SessionNotice>)>,
}

impl Subscribers {
    fn remove(&mut self, id: u64) {
        self.senders.retain(|(sid, _)| *sid != id);
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionFeed {
    /// `None` until the state is known.
    current: Arc<Mutex<Option<SessionNotice>>>,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl SessionFeed {
    /// Feed whose state is already known.
    pub fn new(initial: SessionNotice) -> Self {
        Self {
            current: Arc::new(Mutex::new(Some(initial))),
            subscribers: Arc::default(),
        }
    }

    /// Feed whose state is not known yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Last published state, or `None` while still pending.
    pub fn current(&self) -> Option<SessionNotice> {
        self.current.lock().unwrap().clone()
    }

    /// Currently signed-in identity, if the state is known and someone is signed in.
    pub fn current_user(&self) -> Option<Identity> {
        self.current().flatten()
    }

    pub fn is_known(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }

    /// Record a new state and notify every live subscriber.
    pub fn publish(&self, notice: SessionNotice) {
        // Lock order: subscribers, then current.
        let mut subscribers = self.subscribers.lock().unwrap();
        *self.current.lock().unwrap() = Some(notice.clone());
        subscribers
            .senders
            .retain(|(_, tx)| tx.send(notice.clone()).is_ok());
    }

    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscribers = self.subscribers.lock().unwrap();
        if let Some(notice) = self.current() {
            // The receiver is alive right here, so this cannot fail.
            let _ = tx.send(notice);
        }
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.senders.push((id, tx));
        drop(subscribers);

        SessionSubscription {
            id,
            receiver: rx,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.senders.retain(|(_, tx)| !tx.is_closed());
        subscribers.senders.len()
    }
}

/// Receiving end of a [`SessionFeed`].
#[derive(Debug)]
pub struct SessionSubscription {
    id: u64,
    receiver: UnboundedReceiver<SessionNotice>,
    subscribers: Weak<Mutex<Subscribers>>,
}

impl SessionSubscription {
    /// Wait for the next notification. `None` once the subscription is detached
    /// (or the feed is gone) and the buffer is drained.
    pub async fn next(&mut self) -> Option<SessionNotice> {
        self.receiver.recv().await
    }

    /// Next buffered notification without waiting.
    pub fn try_next(&mut self) -> Option<SessionNotice> {
        match self.receiver.try_recv() {
            Ok(notice) => Some(notice),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Handle that can detach this subscription from elsewhere.
    pub fn handle(&self) -> Unsubscribe {
        Unsubscribe {
            id: self.id,
            subscribers: self.subscribers.clone(),
        }
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.handle().unsubscribe();
    }
}

#[derive(Clone, Debug)]
pub struct Unsubscribe {
    id: u64,
    subscribers: Weak<Mutex<Subscribers>>,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.lock().unwrap().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_delivers_known_state_first() {
        let feed = SessionFeed::new(None);
        let mut sub = feed.subscribe();
        assert_eq!(sub.next().await, Some(None));

        let alice = Identity::new("uid-1", "a@x.com");
        feed.publish(Some(alice.clone()));
        assert_eq!(sub.next().await, Some(Some(alice)));
    }

    #[tokio::test]
    async fn test_pending_feed_stays_silent_until_first_publish() {
        let feed = SessionFeed::pending();
        let mut sub = feed.subscribe();
        assert!(sub.try_next().is_none());
        assert!(!feed.is_known());

        feed.publish(None);
        assert_eq!(sub.next().await, Some(None));
        assert!(feed.is_known());
    }

    #[tokio::test]
    async fn test_unsubscribe_ends_the_stream() {
        let feed = SessionFeed::new(None);
        let mut sub = feed.subscribe();
        let handle = sub.handle();
        assert_eq!(feed.subscriber_count(), 1);

        handle.unsubscribe();
        assert_eq!(feed.subscriber_count(), 0);

        feed.publish(Some(Identity::new("uid-1", "a@x.com")));
        // The initial notice was buffered before detaching; nothing after it.
        assert_eq!(sub.next().await, Some(None));
        assert_eq!(sub.next().await, None);
    }

    #[test]
    fn test_concurrent_publish_reaches_new_subscribers() {
        let feed = SessionFeed::new(None);
        let alice = Identity::new("uid-1", "a@x.com");

        let publisher = {
            let feed = feed.clone();
            let alice = alice.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    feed.publish(Some(alice.clone()));
                    feed.publish(None);
                }
                feed.publish(Some(alice));
            })
        };
        let mut subs: Vec<_> = (0..200).map(|_| feed.subscribe()).collect();
        publisher.join().unwrap();

        // Whatever each subscriber saw first, its last notice is the final state.
        for sub in &mut subs {
            let mut last = None;
            while let Some(notice) = sub.try_next() {
                last = Some(notice);
            }
            assert_eq!(last, Some(Some(alice.clone())));
        }
    }

    #[test]
    fn test_dropping_subscription_detaches_it() {
        let feed = SessionFeed::new(None);
        let sub = feed.subscribe();
        let _other = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 2);
        drop(sub);
        assert_eq!(feed.subscriber_count(), 1);
    }
}

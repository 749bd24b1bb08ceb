use serde::{Deserialize, Serialize};

/// Outcome of a server function that can be refused for a user-facing reason.
///
/// A refusal (wrong password, duplicate email, missing permission) comes back as
/// `Rejected` with the message to show. Transport and server faults stay in the
/// outer `Result` as `ServerFnError`, so callers can tell the two apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Verdict<T> {
    Accepted(T),
    Rejected(String),
}

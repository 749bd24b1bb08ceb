pub mod context;
pub mod error;
pub mod guard;
pub mod hook;
pub mod state;

pub use context::SessionContext;
pub use error::SessionError;
pub use guard::{GuardView, Redirector, RouteGuard};
pub use hook::{IdentityProvider, SessionHook};
pub use state::{Session, SessionPhase};

//! Student session: storage and the shared context

pub mod context;
pub mod storage;

pub use context::{SessionAction, SessionContext, SessionContextData, SessionProvider, use_session};
pub use storage::BrowserSessionStore;

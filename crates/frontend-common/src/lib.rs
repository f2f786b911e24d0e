//! Shared browser pieces for the coursedesk frontend

pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod session;
pub mod state;

pub use client::create_course_client;
pub use components::{CourseCard, EnrollmentList, ErrorBanner, LoadingSpinner, PageShell};
pub use config::FrontendConfig;
pub use hooks::use_view_lifetime;
pub use session::{BrowserSessionStore, SessionAction, SessionContext, SessionProvider, use_session};
pub use state::{ViewState, ViewStateHandle, use_view_state};

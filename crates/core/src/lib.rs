//! Coursedesk core types, validation and view state

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod lifetime;
pub mod session;
pub mod types;
pub mod validation;

pub use api::CourseApi;
pub use auth::{AuthFailure, AuthGateway};
pub use catalog::{CatalogAction, CatalogState, CourseService, ListStatus};
pub use config::{ClientConfig, Messages};
pub use error::{ApiError, ApiResult, CoreError, CoreResult};
pub use forms::{LoginAction, LoginForm, Reduce, SignupAction, SignupField, SignupForm, Submission};
pub use lifetime::ViewLifetime;
pub use session::{MemorySessionStore, SessionStore};
pub use types::{
    ActionResponse, Course, CourseId, LoginRequest, LoginResponse, RegisterRequest, Student,
    StudentId,
};
pub use validation::ValidationError;

//! Course backend client

pub mod courses;
pub mod error;
pub mod typed;

pub use error::ClientError;
pub use typed::{CourseClient, CourseClientBuilder};

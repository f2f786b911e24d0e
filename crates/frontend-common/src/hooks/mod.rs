//! Custom hooks for the application

pub mod use_view_lifetime;

pub use use_view_lifetime::use_view_lifetime;

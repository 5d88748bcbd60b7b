//! API route definitions
//!
//! Health checks live at the root; everything else is nested under /api.

pub mod admin_data;
pub mod error;
pub mod health;
pub mod menu;

pub use error::ApiError;

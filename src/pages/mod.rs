//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not a page
//! concern: `app` wraps every page in the route guard.

pub mod admin;
pub mod login;
pub mod register;
pub mod user;

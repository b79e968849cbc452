//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` holds the plain data model and its storage mapping; `store`
//! wraps it with the async login/register operations and shared access.

pub mod session;
pub mod store;

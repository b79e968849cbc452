//! Reusable UI components shared by the dashboard pages.

pub mod session_bar;

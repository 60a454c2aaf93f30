//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (context lookups, API calls,
//! form submission) and delegates rendering details to `components`.

pub mod boards;
pub mod companies;
pub mod dashboard;
pub mod feedbacks;
pub mod issues;
pub mod login;
pub mod public_board;
pub mod settings;
pub mod signup;
pub mod team;

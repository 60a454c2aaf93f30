//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages depend on small focused models. Each
//! model is a plain struct; `App` wraps them in `RwSignal`s and provides them
//! as context.

pub mod boards;
pub mod session;

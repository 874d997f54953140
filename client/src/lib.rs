//! Client-side core for a user-management screen.
//!
//! The crate keeps the displayed user table consistent with operator actions
//! despite a remote collection endpoint that does not persist writes: the
//! in-memory roster is the authoritative store, and every mutation flows
//! through it. Presentation concerns (rendering, dialogs, routing,
//! pagination widgets) live in the embedding shell, which drives the domain
//! services exposed here and reads their state back.

pub mod domain;
pub mod outbound;

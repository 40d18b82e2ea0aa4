//! Domain logic for the moderation backend.
//!
//! Pure, I/O-free building blocks shared by the DB and API layers: the
//! error taxonomy, common type aliases, flag lifecycle constants and
//! validation, and dashboard trend math.

pub mod error;
pub mod flag;
pub mod stats;
pub mod types;

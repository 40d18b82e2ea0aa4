//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - `Deserialize` request DTOs for the API layer
//!
//! Serialized field names are camelCase: the admin dashboard client
//! consumes the wire format as-is.

pub mod content;
pub mod flag;
pub mod stats;

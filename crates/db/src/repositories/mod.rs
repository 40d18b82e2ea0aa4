//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod content_repo;
pub mod flag_repo;
pub mod stats_repo;

pub use content_repo::ContentRepo;
pub use flag_repo::FlagRepo;
pub use stats_repo::StatsRepo;

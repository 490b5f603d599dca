//! Input records.
//!
//! [`Student`] and [`Supervisor`] are parsed by the caller and read-only to
//! the engine. Tag lookups are trimmed and case-insensitive, matching how
//! tabular sources mix capitalization ("Finance" vs `finance`).

pub mod types;


pub use types::{Student, Supervisor, deserialize_flexible_bool};

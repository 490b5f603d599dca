//! Rule-based subject/methodology scoring.
//!
//! Deterministic and free of I/O; this signal carries the majority weight in
//! the final blend and is the only one available when both external
//! capabilities fail.

pub mod rules;


pub use rules::rule_based_score;

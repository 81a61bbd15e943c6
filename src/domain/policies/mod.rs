//! Domain Policies
//!
//! Business rules applied to the asset list before anything is emitted.

mod duplicate_policy;

pub use duplicate_policy::DuplicatePolicy;

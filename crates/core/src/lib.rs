//! Alps concierge domain core.
//!
//! Booking draft groups and their validation rules, the fixed package
//! catalog, stay policy, price estimation and lead derivation. Nothing in
//! this crate performs I/O.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod lead;
pub mod pricing;
pub mod stay_policy;
pub mod types;
pub mod validation;

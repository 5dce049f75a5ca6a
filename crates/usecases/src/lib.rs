//! Use-case orchestrators for the admin consoles.
//!
//! Each use-case wraps exactly one repository call and applies the
//! failure policy declared at construction time ([`FailurePolicy`]):
//! swallow-and-default, rethrow-raw, or wrap into a fixed user-facing
//! message. The policy is declared, not duplicated per class; each
//! console ships with the defaults its screens historically relied on.
//!
//! Use-cases hold no state between calls and never retry.

pub mod clients;
pub mod policy;
pub mod rooms;
pub mod tables;
pub mod votes;

pub use policy::{FailurePolicy, UseCaseError};

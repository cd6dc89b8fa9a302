//! Config composition: defaults and source precedence.

pub mod policy;
pub mod service;

//! Utility modules for DOM access.

pub mod dom;

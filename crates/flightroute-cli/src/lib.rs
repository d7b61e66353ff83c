//! Flight route CLI library.
//!
//! This crate provides the rendering helpers behind the `flightroute-cli`
//! binary so they can be exercised without spawning a process.

pub mod output;

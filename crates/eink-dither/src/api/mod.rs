//! Public API for the eink-dither crate.
//!
//! This module provides the high-level [`EinkDitherer`] builder.

mod builder;

pub use builder::EinkDitherer;

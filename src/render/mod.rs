//! Overlay rendering module
//!
//! This module contains:
//! - Path geometry constants shared by the stroke builders
//! - Image rendering using tiny-skia (for saving to file)

pub mod geometry;
pub mod image;

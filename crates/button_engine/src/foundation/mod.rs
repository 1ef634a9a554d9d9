//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types for 2D pixel geometry
//! - RGBA color values
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;

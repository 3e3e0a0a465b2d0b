//! Bevy plugins
//!
//! This module contains custom Bevy plugins that extend the engine's
//! functionality for offscreen rendering.

pub mod image_copy;

pub use image_copy::ImageCopyPlugin;

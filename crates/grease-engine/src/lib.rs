#![warn(missing_debug_implementations)]
#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

//! The grease-engine crate holds the grease pencil scene model: data blocks, palettes, layers, frames and strokes.
//!
//! Stroke containers are created and removed through [StrokeLayer], every stroke wraps a [grease_compose::StrokeCurve].
//! The main entry point is the [Document] struct.

// Modules
pub mod config;
pub mod document;
pub mod export;
pub mod gpencil;
pub mod strokelayer;

// Re-exports
pub use config::EngineConfig;
pub use document::Document;
pub use gpencil::{DrawMode, Frame, GreasePencil, Layer, Palette, PaletteColor, Stroke};
pub use strokelayer::StrokeLayer;

// Imports
use grease_compose::CurveError;
use thiserror::Error;

// Renames
extern crate nalgebra as na;

/// Errors of scene model operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("document has no grease pencil data block")]
    NoGreasePencil,
    #[error("layer not found")]
    LayerNotFound,
    #[error("palette not found")]
    PaletteNotFound,
    #[error("palette color not found")]
    ColorNotFound,
    #[error("layer has no frame at frame number {0}")]
    FrameNotFound(i32),
    #[error("layer already has a frame at frame number {0}")]
    FrameExists(i32),
    #[error("stroke not found")]
    StrokeNotFound,
    #[error(transparent)]
    Curve(#[from] CurveError),
}

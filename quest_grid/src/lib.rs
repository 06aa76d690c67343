//! # Quest Grid
//!
//! Bounds-checked 2D tile maps for the Questline toolkit. Grids are
//! rectangular buffers of arbitrary cell values with coordinate probes,
//! value search, and an explicit snapshot/restore save point.

mod grid;

pub use grid::*;

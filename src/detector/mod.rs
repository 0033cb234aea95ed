//! Shape analyzer turning a binary mask into scale-stable salient points.
//!
//! Overview
//! - Traces the outer boundary of the first foreground component by sweeping
//!   the full 8-neighbourhood of each boundary pixel, closing the walk when
//!   the first move out of the start pixel repeats.
//! - Smooths the contour at a geometric sequence of Gaussian scales and scores
//!   every point with a fuzzy saliency (enough curvacity AND locally maximal).
//! - Reduces each scale to alpha-cut centerpoints, maps them to the original
//!   contour through nearest-neighbour trajectories, and keeps the coarsest
//!   points whose arcs fit their chords, descending to finer scales elsewhere.
//! - Drops points whose removal keeps the chord error within threshold.
//!
//! Modules
//! - [`params`] – configuration types used by the analyzer and CLI.
//! - `pipeline` – the [`ShapeAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::ShapeAnalyzer;

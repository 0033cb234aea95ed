use nalgebra::Point2;
use serde::Serialize;

/// Planar point in image coordinates (x to the right, y downward).
pub type Point = Point2<f32>;

/// A scale-stable salient point on the original (unsmoothed) contour.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalientPoint {
    /// Index into the original contour.
    pub index: usize,
    pub point: Point,
    /// Signed curvature at `index`, positive on convex boundary parts.
    pub curvature: f32,
    pub convex: bool,
    /// Coarsest smoothing scale at which the point entered the selection.
    pub sigma: f32,
}

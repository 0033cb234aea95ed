//! Outer boundary tracing on a binary mask with an 8-direction chain code.
//!
//! The tracer scans rows top to bottom for the first foreground pixel `P0`
//! and then follows the boundary through the full 8-neighbourhood. After a
//! move in direction `d` the sweep starts at `d+7` for even `d` and at `d+6`
//! for odd `d` (both are background pixels already seen by the previous
//! sweep) and turns through increasing codes until it meets foreground, so
//! one-pixel spurs and sharp right turns are followed like any other edge.
//!
//! The walk stops when it stands on `P0` and is about to repeat its first
//! move. Returning to `P0` alone is not enough: when `P0` joins two lobes
//! the boundary passes through it more than once.
//!
//! Only the first component in row-major order is traced; masks with several
//! components produce the boundary of that one component.

use super::Contour;
use crate::error::TraceError;
use crate::image::BinaryView;
use log::{debug, warn};

/// Chain code offsets: 0=E, 1=NE, 2=N, 3=NW, 4=W, 5=SW, 6=S, 7=SE (y down).
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Direction assumed for the move into `P0`: the first sweep starts at SW,
/// which is where the boundary continues from a top-left-most pixel.
const INITIAL_DIRECTION: u8 = 7;

/// Trace the outer boundary of the first foreground component.
///
/// Returns an empty contour when the mask has no foreground, and
/// [`TraceError::Stuck`] for isolated pixels or walks that never close.
pub fn trace_boundary<M: BinaryView>(mask: &M) -> Result<Contour, TraceError> {
    let Some(p0) = first_foreground(mask) else {
        warn!("trace_boundary: mask has no foreground pixels");
        return Ok(Contour::default());
    };

    let max_steps = 4 * mask.width().max(1) * mask.height().max(1);
    let mut pixels = vec![p0];
    let mut cur = p0;
    let mut dir = INITIAL_DIRECTION;
    let mut first_move = None;

    for step in 0..max_steps {
        let Some((next_dir, next)) = next_boundary_pixel(mask, cur, dir) else {
            return Err(TraceError::Stuck { at: cur, steps: step });
        };
        if cur == p0 && first_move == Some(next_dir) {
            // the last push was the return to P0
            pixels.pop();
            debug!(
                "trace_boundary: closed contour with {} points from ({}, {})",
                pixels.len(),
                p0.0,
                p0.1
            );
            return Ok(Contour::from_pixels(pixels));
        }
        if first_move.is_none() {
            first_move = Some(next_dir);
        }
        dir = next_dir;
        cur = next;
        pixels.push(cur);
    }

    Err(TraceError::Stuck {
        at: cur,
        steps: max_steps,
    })
}

fn first_foreground<M: BinaryView>(mask: &M) -> Option<(usize, usize)> {
    for y in 0..mask.height() {
        if let Some(x) = mask.row(y).iter().position(|&v| v != 0) {
            return Some((x, y));
        }
    }
    None
}

fn next_boundary_pixel<M: BinaryView>(
    mask: &M,
    cur: (usize, usize),
    dir: u8,
) -> Option<(u8, (usize, usize))> {
    let start = if dir % 2 == 0 { dir + 7 } else { dir + 6 };
    (0..8u8).find_map(|k| {
        let d = (start + k) & 7;
        let nx = cur.0 as isize + DX[d as usize];
        let ny = cur.1 as isize + DY[d as usize];
        mask.is_foreground(nx, ny).then(|| (d, (nx as usize, ny as usize)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Mask;

    fn filled_rect(w: usize, h: usize, x0: usize, y0: usize, rw: usize, rh: usize) -> Mask {
        let mut m = Mask::new(w, h);
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                m.set(x, y, true);
            }
        }
        m
    }

    fn is_8_adjacent(a: (f32, f32), b: (f32, f32)) -> bool {
        let dx = (a.0 - b.0).abs();
        let dy = (a.1 - b.1).abs();
        dx <= 1.0 && dy <= 1.0 && (dx + dy) > 0.0
    }

    #[test]
    fn rectangle_boundary_has_perimeter_length() {
        let m = filled_rect(12, 10, 2, 3, 6, 4);
        let c = trace_boundary(&m).expect("rectangle traces");
        assert_eq!(c.len(), 2 * (6 + 4) - 4);
        assert_eq!((c.at(0).x, c.at(0).y), (2.0, 3.0));
        // first move goes down the left side
        assert_eq!((c.at(1).x, c.at(1).y), (2.0, 4.0));
        assert!(!c.is_clockwise());
    }

    #[test]
    fn boundary_is_closed_and_8_connected() {
        let mut m = Mask::new(16, 16);
        for y in 0..16usize {
            for x in 0..16usize {
                let dx = x as f32 - 7.5;
                let dy = y as f32 - 7.5;
                if dx * dx + dy * dy <= 36.0 || ((7..=8).contains(&x) && y >= 1) {
                    m.set(x, y, true);
                }
            }
        }
        let c = trace_boundary(&m).expect("blob traces");
        assert!(c.len() > 8);
        for i in 0..c.len() {
            let a = c.at(i);
            let b = c.at(i + 1);
            assert!(is_8_adjacent((a.x, a.y), (b.x, b.y)), "gap between {i} and {}", i + 1);
            assert!(m.get(a.x as usize, a.y as usize));
        }
    }

    #[test]
    fn empty_mask_yields_empty_contour() {
        let m = Mask::new(5, 5);
        assert!(trace_boundary(&m).unwrap().is_empty());
    }

    #[test]
    fn isolated_pixel_is_stuck() {
        let m = filled_rect(5, 5, 2, 2, 1, 1);
        assert_eq!(
            trace_boundary(&m),
            Err(TraceError::Stuck { at: (2, 2), steps: 0 })
        );
    }

    #[test]
    fn two_pixel_mask_traces_back_and_forth() {
        let m = filled_rect(5, 5, 1, 1, 2, 1);
        let c = trace_boundary(&m).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn diagonal_spur_tip_as_start_closes() {
        let mut m = filled_rect(40, 40, 5, 10, 20, 15);
        for i in 0..6 {
            m.set(15 + i, 9 - i, true);
        }
        let c = trace_boundary(&m).expect("spur closes");
        assert_eq!((c.at(0).x, c.at(0).y), (20.0, 4.0));
        // the spur is walked down and back up
        assert_eq!((c.at(1).x, c.at(1).y), (19.0, 5.0));
        assert_eq!(c.len(), 76);
    }

    #[test]
    fn pinch_at_start_traces_both_lobes() {
        let mut m = filled_rect(24, 14, 2, 3, 8, 7);
        for y in 3..10 {
            for x in 11..19 {
                m.set(x, y, true);
            }
        }
        m.set(10, 2, true);
        let c = trace_boundary(&m).expect("bridge traces");
        assert_eq!(c.len(), 56);
        let visits = c.iter().filter(|p| (p.x, p.y) == (10.0, 2.0)).count();
        assert_eq!(visits, 2);
        assert!(c.iter().any(|p| p.x >= 18.0));
    }
}

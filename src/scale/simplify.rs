use crate::contour::Contour;
use log::debug;

/// Greedy simplification of a cyclic index selection.
///
/// At each step the index whose removal (merging its two adjacent arcs)
/// gives the smallest chord error is dropped, provided that error does not
/// exceed `threshold`. Stops when no removal qualifies or two indices remain.
/// Selections with fewer than three indices are returned unchanged.
pub fn simplify(contour: &Contour, indices: &[usize], threshold: f32) -> Vec<usize> {
    let mut kept = indices.to_vec();
    while kept.len() > 2 {
        let k = kept.len();
        let best = (0..k)
            .map(|j| {
                let prev = kept[(j + k - 1) % k];
                let next = kept[(j + 1) % k];
                (j, contour.chord_error(prev, next))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match best {
            Some((j, err)) if err <= threshold => {
                debug!(
                    "simplify: drop index {} (merged error {:.2})",
                    kept[j], err
                );
                kept.remove(j);
            }
            _ => break,
        }
    }
    kept
}

use crate::contour::Contour;

/// Index correspondence from a coarser contour to the next finer one.
///
/// `to_finer[j]` is the index of the finer contour point nearest (in the
/// Euclidean sense) to point `j` of the coarser contour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryMap {
    to_finer: Vec<usize>,
}

impl TrajectoryMap {
    /// Naive nearest-neighbour search between the two point sets.
    pub fn between(finer: &Contour, coarser: &Contour) -> Self {
        let to_finer = coarser
            .iter()
            .map(|p| finer.nearest_index(p).unwrap_or(0))
            .collect();
        Self { to_finer }
    }

    pub fn len(&self) -> usize {
        self.to_finer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_finer.is_empty()
    }

    /// Finer index for coarse index `j`; out-of-range indices map to themselves.
    #[inline]
    pub fn map(&self, j: usize) -> usize {
        self.to_finer.get(j).copied().unwrap_or(j)
    }
}

/// Follow `index` down a chain of maps ordered from the finest pair
/// (original ← first scale) upward; `maps[..depth]` are applied coarsest first.
pub fn map_to_original(maps: &[TrajectoryMap], depth: usize, index: usize) -> usize {
    maps[..depth.min(maps.len())]
        .iter()
        .rev()
        .fold(index, |i, m| m.map(i))
}

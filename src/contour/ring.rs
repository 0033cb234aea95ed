//! Circular indexing over a fixed-length closed sequence.
//!
//! All contour-walking code goes through [`Ring`] so that wrap-around at the
//! seam between the last and first element is handled in one place.

/// Index arithmetic modulo a fixed, non-zero length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    len: usize,
}

impl Ring {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps any signed index onto `0..len`. Returns 0 for an empty ring.
    #[inline]
    pub fn wrap(&self, i: isize) -> usize {
        if self.len == 0 {
            return 0;
        }
        i.rem_euclid(self.len as isize) as usize
    }

    /// Index reached by walking `k` steps forward from `i`.
    #[inline]
    pub fn forward(&self, i: usize, k: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (i % self.len + k % self.len) % self.len
    }

    /// Index reached by walking `k` steps backward from `i`.
    #[inline]
    pub fn backward(&self, i: usize, k: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (i % self.len + self.len - k % self.len) % self.len
    }

    /// Index reached by a signed walk of `k` steps from `i`.
    #[inline]
    pub fn offset(&self, i: usize, k: isize) -> usize {
        self.wrap(i as isize + k)
    }

    /// Number of forward steps needed to go from `from` to `to` (0 when equal).
    #[inline]
    pub fn forward_distance(&self, from: usize, to: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (to % self.len + self.len - from % self.len) % self.len
    }

    /// Length in steps of the forward arc `from → to`; equal endpoints denote
    /// the full loop.
    #[inline]
    pub fn arc_steps(&self, from: usize, to: usize) -> usize {
        match self.forward_distance(from, to) {
            0 => self.len,
            d => d,
        }
    }

    /// True when `i` lies on the forward arc `from → to`, endpoints excluded.
    #[inline]
    pub fn strictly_between(&self, from: usize, to: usize, i: usize) -> bool {
        let d = self.forward_distance(from, i);
        d > 0 && d < self.arc_steps(from, to)
    }

    /// Iterates `count` indices forward starting at `start`.
    pub fn walk(&self, start: usize, count: usize) -> Walk {
        Walk {
            ring: *self,
            next: start,
            remaining: if self.len == 0 { 0 } else { count },
        }
    }

    /// Iterates the forward arc `from → to` with both endpoints included.
    /// Equal endpoints yield the full loop, closing back on `from`.
    pub fn arc(&self, from: usize, to: usize) -> Walk {
        self.walk(from, self.arc_steps(from, to) + 1)
    }
}

/// Iterator returned by [`Ring::walk`] and [`Ring::arc`].
#[derive(Clone, Debug)]
pub struct Walk {
    ring: Ring,
    next: usize,
    remaining: usize,
}

impl Iterator for Walk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cur = self.next;
        self.next = self.ring.forward(cur, 1);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Walk {}

#[cfg(test)]
mod tests {
    use super::Ring;

    #[test]
    fn wrap_handles_negative_and_large() {
        let r = Ring::new(5);
        assert_eq!(r.wrap(-1), 4);
        assert_eq!(r.wrap(-6), 4);
        assert_eq!(r.wrap(7), 2);
        assert_eq!(r.forward(4, 3), 2);
        assert_eq!(r.backward(1, 3), 3);
        assert_eq!(r.offset(0, -2), 3);
    }

    #[test]
    fn distances_and_arcs() {
        let r = Ring::new(8);
        assert_eq!(r.forward_distance(6, 1), 3);
        assert_eq!(r.forward_distance(1, 6), 5);
        assert_eq!(r.arc_steps(3, 3), 8);
        assert_eq!(r.arc(6, 1).collect::<Vec<_>>(), vec![6, 7, 0, 1]);
        assert_eq!(r.arc(2, 2).count(), 9);
    }

    #[test]
    fn strictly_between_excludes_endpoints() {
        let r = Ring::new(10);
        assert!(r.strictly_between(8, 2, 9));
        assert!(r.strictly_between(8, 2, 0));
        assert!(!r.strictly_between(8, 2, 8));
        assert!(!r.strictly_between(8, 2, 2));
        assert!(!r.strictly_between(8, 2, 5));
        // full loop: everything except the anchor
        assert!(r.strictly_between(4, 4, 3));
        assert!(!r.strictly_between(4, 4, 4));
    }

    #[test]
    fn empty_ring_is_inert() {
        let r = Ring::new(0);
        assert!(r.is_empty());
        assert_eq!(r.wrap(-3), 0);
        assert_eq!(r.walk(0, 4).count(), 0);
    }
}

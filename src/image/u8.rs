//! Borrowed 8-bit mask view over caller-owned memory.
//!
//! Any nonzero byte is foreground. Rows may be padded: `stride` counts the
//! bytes between row starts and only the first `w` bytes of each row are read.
use super::ImageView;

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Checked constructor: `None` when `stride < w` or `data` is too short
    /// to hold `h` rows.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Option<Self> {
        if stride < w {
            return None;
        }
        let needed = match h {
            0 => 0,
            _ => (h - 1).checked_mul(stride)?.checked_add(w)?,
        };
        (data.len() >= needed).then_some(Self { w, h, stride, data })
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.stride + x] != 0
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BinaryView;

    #[test]
    fn new_rejects_short_buffers_and_narrow_strides() {
        let data = [0u8; 11];
        assert!(ImageU8::new(3, 3, 4, &data).is_some());
        assert!(ImageU8::new(3, 3, 5, &data).is_none());
        assert!(ImageU8::new(4, 2, 3, &data).is_none());
        assert!(ImageU8::new(5, 0, 5, &[]).is_some());
    }

    #[test]
    fn padding_bytes_are_ignored() {
        // 2x2 foreground block in a 3-wide view with one padding byte per row
        let data = [255, 255, 0, 9, 7, 1, 0, 9];
        let view = ImageU8::new(3, 2, 4, &data).unwrap();
        assert!(view.is_set(0, 0));
        assert!(!view.is_set(2, 0));
        assert!(view.is_set(0, 1));
        assert_eq!(view.foreground_count(), 4);
        assert!(!view.is_foreground(3, 0));
    }
}

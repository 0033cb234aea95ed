//! Owned binary mask in row-major layout (stride == width).
//!
//! Foreground pixels hold 1, background pixels 0. Masks are produced by
//! rasterizing contours and consumed by the boundary tracer through
//! [`BinaryView`](super::BinaryView).
use super::{ImageU8, ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl Mask {
    /// Construct an all-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Wrap existing row-major data; returns `None` when the length is off.
    pub fn from_vec(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (w.checked_mul(h)? == data.len()).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.w + x] = u8::from(on);
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

impl ImageView for Mask {
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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for Mask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

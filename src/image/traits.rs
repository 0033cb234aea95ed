/// Read-only access to a row-major single-channel raster.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

/// Binary interpretation of a raster: nonzero pixels are foreground.
pub trait BinaryView: ImageView<Pixel = u8> {
    /// Foreground test with out-of-bounds coordinates treated as background.
    #[inline]
    fn is_foreground(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (xu, yu) = (x as usize, y as usize);
        if xu >= self.width() || yu >= self.height() {
            return false;
        }
        self.row(yu)[xu] != 0
    }

    /// Number of foreground pixels.
    fn foreground_count(&self) -> usize
    where
        Self: Sized,
    {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }
}

impl<T: ImageView<Pixel = u8>> BinaryView for T {}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

/// Generates a row-major mask buffer with a filled axis-aligned rectangle.
///
/// Foreground pixels are 255, background 0.
pub fn rectangle_u8(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    rect_w: usize,
    rect_h: usize,
) -> Vec<u8> {
    assert!(x0 + rect_w <= width && y0 + rect_h <= height, "rectangle out of bounds");
    let mut img = vec![0u8; width * height];
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            img[y * width + x] = 255;
        }
    }
    img
}

/// Generates a filled digital disc: pixels whose centre lies within `radius`.
pub fn disk_u8(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> Vec<u8> {
    assert!(radius > 0.0, "radius must be positive");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img[y * width + x] = 255;
            }
        }
    }
    img
}

/// Generates an L-shaped mask: a `size`×`size` square at (`x0`, `y0`) with
/// its top-right `size/2`×`size/2` quadrant removed.
pub fn l_shape_u8(width: usize, height: usize, x0: usize, y0: usize, size: usize) -> Vec<u8> {
    let mut img = rectangle_u8(width, height, x0, y0, size, size);
    let half = size / 2;
    for y in y0..y0 + half {
        for x in x0 + half..x0 + size {
            img[y * width + x] = 0;
        }
    }
    img
}

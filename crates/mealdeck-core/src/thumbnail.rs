//! Decoded image pixels sized for terminal display

/// Longest edge, in pixels, a decoded thumbnail is reduced to.
///
/// A terminal cell shows two vertical pixels (upper half block), so 48px
/// covers 48 columns by 24 rows, larger than any pane we draw.
pub const MAX_THUMBNAIL_EDGE: u32 = 48;

/// A decoded RGB image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Build a thumbnail from row-major RGB pixels.
    ///
    /// Returns `None` if the dimensions are zero or don't match the pixel count.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), clamped to the image bounds
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Nearest-neighbour sample for a target grid of `target_w` x `target_h`
    pub fn sample(&self, tx: u32, ty: u32, target_w: u32, target_h: u32) -> [u8; 3] {
        let x = (tx as u64 * self.width as u64 / target_w.max(1) as u64) as u32;
        let y = (ty as u64 * self.height as u64 / target_h.max(1) as u64) as u32;
        self.pixel(x, y)
    }

    /// Largest pixel grid with this image's aspect ratio that fits in
    /// `max_w` x `max_h`
    pub fn fit_within(&self, max_w: u32, max_h: u32) -> (u32, u32) {
        if max_w == 0 || max_h == 0 {
            return (0, 0);
        }
        let scale_w = max_w as f64 / self.width as f64;
        let scale_h = max_h as f64 / self.height as f64;
        let scale = scale_w.min(scale_h);
        let w = ((self.width as f64 * scale).floor() as u32).clamp(1, max_w);
        let h = ((self.height as f64 * scale).floor() as u32).clamp(1, max_h);
        (w, h)
    }
}

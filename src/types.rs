// Core types shared by the point builder, the animator and the renderer.

/// A position on the canvas in pixels. Fractional while we compute,
/// truncated when it becomes a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer key (truncated toward zero), used to dedupe curve samples.
    #[inline]
    pub fn pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Exact key for fractional points; two points share it only if bit-identical.
    /// Adding 0.0 folds -0.0 into 0.0 so they share a key.
    #[inline]
    pub fn exact_key(self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

/// One square to draw this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub size: u8, // edge length in pixels, 1..=3
}

impl Particle {
    #[inline]
    pub fn at(p: Point, size: u8) -> Self {
        let (x, y) = p.pixel();
        Self { x, y, size }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

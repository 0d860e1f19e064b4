// Composes one frame's particles into an RGB image, then packs it for the window.
// Visual expectation: a black canvas with every particle drawn as a small
// solid square in the heart color.

use crate::types::{FrameBuffer, Particle};
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

pub struct Canvas {
    img: RgbImage,
    color: Rgb<u8>,
}

impl Canvas {
    /// `color` is 0x00RRGGBB, same as the window buffer.
    pub fn new(width: u32, height: u32, color: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, BACKGROUND),
            color: Rgb([(color >> 16) as u8, (color >> 8) as u8, color as u8]),
        }
    }

    pub fn clear(&mut self) {
        for px in self.img.pixels_mut() {
            *px = BACKGROUND;
        }
    }

    /// Fill a `size` x `size` square with its top-left corner at the particle.
    /// Whatever falls off the canvas is dropped.
    pub fn draw_particle(&mut self, p: &Particle) {
        let (w, h) = (self.img.width() as i64, self.img.height() as i64);
        let size = p.size as i64;
        let x0 = (p.x as i64).max(0);
        let y0 = (p.y as i64).max(0);
        let x1 = (p.x as i64 + size).min(w);
        let y1 = (p.y as i64 + size).min(h);
        for y in y0..y1 {
            for x in x0..x1 {
                self.img.put_pixel(x as u32, y as u32, self.color);
            }
        }
    }

    /// Clear, then draw every particle of a frame.
    pub fn render(&mut self, particles: &[Particle]) {
        self.clear();
        for p in particles {
            self.draw_particle(p);
        }
    }

    /// Pack RGB into 0x00RRGGBB pixels for minifb.
    /// `fb` must be the same size as the canvas.
    pub fn pack_into(&self, fb: &mut FrameBuffer) {
        debug_assert_eq!(fb.pixels.len(), (self.img.width() * self.img.height()) as usize);
        for (dst, px) in fb.pixels.iter_mut().zip(self.img.pixels()) {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            *dst = (r << 16) | (g << 8) | b;
        }
    }
}

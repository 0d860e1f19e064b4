// Fixed canvas and generation constants.
// Visual: these decide how big the heart is, how dense, and how fast it beats.

use crate::error::Error;
use crate::types::Point;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct HeartConfig {
    pub width: usize,
    pub height: usize,
    pub enlarge: f64,                 // body size multiplier for the unit curve
    pub halo_enlarge: f64,            // halo sits slightly outside the body
    pub frame_count: usize,           // frames in one precomputed loop
    pub curve_samples: usize,         // parameter draws on the outline
    pub edge_scatter_per_point: usize,
    pub inner_samples: usize,
    pub edge_beta: f64,               // small = edge stays tight to the outline
    pub inner_beta: f64,              // larger = fill reaches deeper inside
    pub color: u32,                   // 0x00RRGGBB
    pub frame_interval: Duration,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            enlarge: 11.0,
            halo_enlarge: 11.6,
            frame_count: 10,
            curve_samples: 1000,
            edge_scatter_per_point: 3,
            inner_samples: 2000,
            edge_beta: 0.05,
            inner_beta: 0.15,
            color: 0x00_FF_71_71,
            frame_interval: Duration::from_millis(30),
        }
    }
}

impl HeartConfig {
    /// Canvas center; everything radial is measured from here.
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Refuse configs the animator can't index into.
    pub fn validate(&self) -> Result<(), Error> {
        if self.frame_count == 0 {
            return Err(Error::Config("frame_count must be at least 1".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "canvas must not be empty (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Window refresh rate for `frame_interval`, never below 1 fps.
    pub fn target_fps(&self) -> usize {
        let ms = self.frame_interval.as_millis().max(1);
        ((1000 / ms) as usize).max(1)
    }
}

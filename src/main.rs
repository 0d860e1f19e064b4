// What you SEE:
// • A particle heart that beats, with a glow that swells and fades around it.
// • Every frame is computed up front; the window just replays them in a loop.
// • Pass a number as the first argument to replay the exact same heart (seed).
// • ESC quits.

mod canvas;
mod config;
mod draw;
mod error;
mod heart;
mod logger;
mod shape;
mod types;

use canvas::Canvas;
use config::HeartConfig;
use draw::Drawer;
use error::Error;
use heart::Heart;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::time::{Duration, Instant};
use types::FrameBuffer;

/// First CLI argument as a seed, if any.
fn parse_seed(arg: Option<&str>) -> Result<Option<u64>, Error> {
    match arg {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| Error::Config(format!("seed {s:?} is not a u64: {e}"))),
    }
}

fn main() -> Result<(), Error> {
    logger::init();

    let arg = std::env::args().nth(1);
    let seed = match parse_seed(arg.as_deref())? {
        Some(seed) => seed,
        None => SmallRng::from_entropy().next_u64(),
    };
    info!("seed {seed} (pass it as the first argument to replay this heart)");
    let mut rng = SmallRng::seed_from_u64(seed);

    /* --- Precompute every frame ---
       Visual: nothing yet; the window opens once the heart is ready. */
    let cfg = HeartConfig::default();
    info!("precomputing {} frames...", cfg.frame_count);
    let started = Instant::now();
    let heart = Heart::build(cfg, &mut rng)?;
    info!(
        "precompute done in {:.2}s ({} outline points)",
        started.elapsed().as_secs_f64(),
        heart.points().curve.len()
    );

    /* --- Window + reusable buffers --- */
    let cfg = heart.config();
    let mut drawer = Drawer::new("Heartbeat", cfg.width, cfg.height, cfg.target_fps())?;
    let mut canvas = Canvas::new(cfg.width as u32, cfg.height as u32, cfg.color);
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    let mut frame: i64 = 0;
    while drawer.is_open() && !drawer.esc_pressed() {
        canvas.render(heart.frame_particles(frame));
        canvas.pack_into(&mut screen);
        drawer.present(&screen)?;
        frame = frame.wrapping_add(1);

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}

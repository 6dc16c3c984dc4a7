//! In-place RGBA buffer filling for the CPU render path.

use crate::fractals::{evaluate, MAX_ITERATIONS};
use crate::palette::shade;
use fractalview_core::{pixel_to_plane, Fractal, RenderMode, ViewportState};
use xorshift::{Rand, Rng, SeedableRng, SplitMix64, Xoroshiro128};

/// Fraction of the pixel count sampled per frame in `Pixels` mode.
const PIXEL_SAMPLE_DIVISOR: u32 = 45;
/// One row (column) per this many rows (columns) of the viewport, per
/// frame, in the sweep modes.
const SWEEP_DIVISOR: u32 = 90;

/// One fill call's inputs. The buffer may be fresh black or carry colors
/// from earlier progressive frames; both are fine, the fill only writes
/// the pixels its mode selects.
pub struct FillRequest<'a> {
    pub pixels: &'a mut [u8],
    pub fractal: Fractal,
    pub mode: RenderMode,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
    pub noise: bool,
    pub scale: f64,
    pub offset: (f64, f64),
    /// Monotonic time in milliseconds; seeds the sampling RNG so each
    /// frame scatters differently.
    pub time_ms: f64,
    /// Frame counter driving the deterministic row/column sweeps.
    pub frame: u32,
}

/// Fill the selected subset of `pixels` for one frame.
///
/// Zero-sized viewports and undersized buffers are skipped whole; a frame
/// is either fully applied or not at all.
pub fn fill(req: FillRequest) {
    let FillRequest {
        pixels,
        fractal,
        mode,
        width,
        height,
        grid,
        noise,
        scale,
        offset,
        time_ms,
        frame,
    } = req;

    if width == 0 || height == 0 || scale <= 0.0 {
        return;
    }
    if pixels.len() < (width * height * 4) as usize {
        return;
    }

    let mut state = ViewportState::new();
    state.resize(width, height);
    state.offset = offset;
    state.scale = scale;

    let mut seeder: SplitMix64 = SeedableRng::from_seed(time_ms as u64);
    let mut rng: Xoroshiro128 = Rand::rand(&mut seeder);

    let mut paint = |pixels: &mut [u8], rng: &mut Xoroshiro128, x: u32, y: u32| {
        let index = ((x + y * width) * 4) as usize;
        let color = if grid && (x % 3 == 0 || y % 3 == 0) {
            [0, 0, 0]
        } else if noise && rng.next_u32() % 128 < 24 {
            [0, 0, 0]
        } else {
            let (re, im) = pixel_to_plane(x as f64, y as f64, &state);
            shade(evaluate(fractal, re, im, MAX_ITERATIONS))
        };
        pixels[index] = color[0];
        pixels[index + 1] = color[1];
        pixels[index + 2] = color[2];
        pixels[index + 3] = 255;
    };

    match mode {
        RenderMode::None => reset(pixels),
        RenderMode::Frame => {
            for y in 0..height {
                for x in 0..width {
                    paint(pixels, &mut rng, x, y);
                }
            }
        }
        RenderMode::Pixels => {
            for _ in 0..(width * height / PIXEL_SAMPLE_DIVISOR) {
                let x = rng.next_u32() % width;
                let y = rng.next_u32() % height;
                paint(pixels, &mut rng, x, y);
            }
        }
        RenderMode::Rows => {
            let per_frame = (height / SWEEP_DIVISOR).max(1);
            let start = frame.wrapping_mul(per_frame) % height;
            for r in 0..per_frame {
                let y = (start + r) % height;
                for x in 0..width {
                    paint(pixels, &mut rng, x, y);
                }
            }
        }
        RenderMode::Columns => {
            let per_frame = (width / SWEEP_DIVISOR).max(1);
            let start = frame.wrapping_mul(per_frame) % width;
            for c in 0..per_frame {
                let x = (start + c) % width;
                for y in 0..height {
                    paint(pixels, &mut rng, x, y);
                }
            }
        }
    }
}

/// Reset every pixel to opaque black, the state a fresh buffer starts in.
pub fn reset(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        px[0] = 0;
        px[1] = 0;
        px[2] = 0;
        px[3] = 255;
    }
}

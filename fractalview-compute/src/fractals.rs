//! Escape-time iteration for the supported fractal families.
//!
//! Each function evaluates one plane point and returns a normalized
//! iteration count `k` in `[0, 1]`: the fraction of the iteration budget
//! spent before escape (or convergence, for Newton). `k == 1.0` means the
//! point never escaped.

use fractalview_core::Fractal;

/// Iteration budget per pixel. Bounds the per-frame cost of progressive
/// sampling.
pub const MAX_ITERATIONS: u32 = 100;

const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Seed constant for the Julia set's quadratic map.
const JULIA_C: (f64, f64) = (-0.8, 0.156);

/// Convergence threshold for Newton's method on z^3 - 1.
const NEWTON_EPSILON_SQ: f64 = 1.0e-12;

/// Evaluate `fractal` at the plane point `(re, im)`.
pub fn evaluate(fractal: Fractal, re: f64, im: f64, max: u32) -> f64 {
    match fractal {
        Fractal::Mandelbrot => mandelbrot(re, im, max),
        Fractal::Julia => julia(re, im, max),
        Fractal::BurningShip => burning_ship(re, im, max),
        Fractal::Newton => newton(re, im, max),
    }
}

pub fn mandelbrot(re: f64, im: f64, max: u32) -> f64 {
    let mut z_re = 0.0;
    let mut z_im = 0.0;
    for iters in 0..max {
        let z_re_new = z_re * z_re - z_im * z_im + re;
        let z_im_new = 2.0 * z_re * z_im + im;
        z_re = z_re_new;
        z_im = z_im_new;
        if z_re * z_re + z_im * z_im > ESCAPE_RADIUS_SQ {
            return iters as f64 / max as f64;
        }
    }
    1.0
}

pub fn julia(re: f64, im: f64, max: u32) -> f64 {
    let mut z_re = re;
    let mut z_im = im;
    for iters in 0..max {
        let z_re_new = z_re * z_re - z_im * z_im + JULIA_C.0;
        let z_im_new = 2.0 * z_re * z_im + JULIA_C.1;
        z_re = z_re_new;
        z_im = z_im_new;
        if z_re * z_re + z_im * z_im > ESCAPE_RADIUS_SQ {
            return iters as f64 / max as f64;
        }
    }
    1.0
}

/// Like the Mandelbrot map but folding z into the first quadrant before
/// squaring.
pub fn burning_ship(re: f64, im: f64, max: u32) -> f64 {
    let mut z_re: f64 = 0.0;
    let mut z_im: f64 = 0.0;
    for iters in 0..max {
        let abs_re = z_re.abs();
        let abs_im = z_im.abs();
        z_re = abs_re * abs_re - abs_im * abs_im + re;
        z_im = 2.0 * abs_re * abs_im + im;
        if z_re * z_re + z_im * z_im > ESCAPE_RADIUS_SQ {
            return iters as f64 / max as f64;
        }
    }
    1.0
}

/// Newton's method on z^3 - 1; `k` reflects convergence speed toward any
/// of the three roots.
pub fn newton(re: f64, im: f64, max: u32) -> f64 {
    let mut z_re = re;
    let mut z_im = im;
    for iters in 0..max {
        let norm_sq = z_re * z_re + z_im * z_im;
        if norm_sq < 1.0e-12 {
            // The origin is a critical point of the map; treat as
            // non-converging.
            return 1.0;
        }

        // z^2 and z^3
        let z2_re = z_re * z_re - z_im * z_im;
        let z2_im = 2.0 * z_re * z_im;
        let z3_re = z2_re * z_re - z2_im * z_im;
        let z3_im = z2_re * z_im + z2_im * z_re;

        let f_re = z3_re - 1.0;
        let f_im = z3_im;
        if f_re * f_re + f_im * f_im < NEWTON_EPSILON_SQ {
            return iters as f64 / max as f64;
        }

        // z - (z^3 - 1) / (3 z^2)
        let denom_re = 3.0 * z2_re;
        let denom_im = 3.0 * z2_im;
        let denom_norm_sq = denom_re * denom_re + denom_im * denom_im;
        z_re -= (f_re * denom_re + f_im * denom_im) / denom_norm_sq;
        z_im -= (f_im * denom_re - f_re * denom_im) / denom_norm_sq;
    }
    1.0
}

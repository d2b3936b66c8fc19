//! Texture samplers
//!
//! Stateless reads out of a [Texture] at normalized coordinates. A
//! `u` or `v` outside [0,1] returns the opaque magenta sentinel so a
//! caller can spot sampling defects without a fault.

use crate::color::Rgba;
use crate::texture::{MipLevel, Texture};

fn out_of_range(u: f64, v: f64) -> bool {
    u < 0.0 || u > 1.0 || v < 0.0 || v > 1.0
}

fn texel(level: &MipLevel, x: usize, y: usize) -> Rgba {
    let t = level.texel(x, y);
    Rgba::from(crate::color::Rgba8::from_slice(t))
}

/// Nearest neighbor sampling of `tex` at level `level`
///
/// `u * width` and `v * height` are rounded to the nearest texel
/// index, clamped to the level extents (rounding can land one past the
/// last texel at u = 1.0).
pub fn sample_nearest(tex: &Texture, u: f64, v: f64, level: usize) -> Rgba {
    if out_of_range(u, v) {
        return Rgba::sample_error();
    }
    let lvl = tex.level(level);
    let x = ((u * lvl.width as f64).round() as usize).min(lvl.width - 1);
    let y = ((v * lvl.height as f64).round() as usize).min(lvl.height - 1);
    texel(lvl, x, y)
}

/// Bilinear sampling of `tex` at level `level`
///
/// Interpolates the 2x2 texel neighborhood around `(u*width, v*height)`
/// in both axes by the fractional offsets; neighbors clamp at the
/// texture edge.
pub fn sample_bilinear(tex: &Texture, u: f64, v: f64, level: usize) -> Rgba {
    if out_of_range(u, v) {
        return Rgba::sample_error();
    }
    let lvl = tex.level(level);
    let x = u * lvl.width as f64;
    let y = v * lvl.height as f64;

    let x0 = (x.floor() as usize).min(lvl.width - 1);
    let y0 = (y.floor() as usize).min(lvl.height - 1);
    let x1 = (x0 + 1).min(lvl.width - 1);
    let y1 = (y0 + 1).min(lvl.height - 1);
    let tx = (x - x0 as f64).min(1.0);
    let ty = (y - y0 as f64).min(1.0);

    let c00 = texel(lvl, x0, y0);
    let c10 = texel(lvl, x1, y0);
    let c01 = texel(lvl, x0, y1);
    let c11 = texel(lvl, x1, y1);

    let top = c00 * (1.0 - tx) + c10 * tx;
    let bot = c01 * (1.0 - tx) + c11 * tx;
    top * (1.0 - ty) + bot * ty
}

/// Trilinear sampling of `tex`
///
/// `u_scale` and `v_scale` approximate how many texels one destination
/// pixel covers per axis. Magnification (`l <= 1`) reads level 0 with
/// nearest filtering; minification blends bilinear samples of the two
/// nearest mip levels by the fractional level of detail, which keeps
/// transitions continuous across level boundaries.
pub fn sample_trilinear(tex: &Texture, u: f64, v: f64,
                        u_scale: f64, v_scale: f64) -> Rgba {
    let l = u_scale.max(v_scale);
    if l <= 1.0 {
        return sample_nearest(tex, u, v, 0);
    }
    let d = l.log2();
    let last = tex.levels.len() - 1;
    let d0 = (d.floor() as usize).min(last);
    let d1 = (d.ceil() as usize).min(last);
    let t = d - d.floor();

    let c0 = sample_bilinear(tex, u, v, d0);
    let c1 = sample_bilinear(tex, u, v, d1);
    c0 * (1.0 - t) + c1 * t
}

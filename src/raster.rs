//! Primitive rasterization
//!
//! Converts screen-space primitives into pixel writes. All writes are
//! straight overwrites; overlap resolution is paint order, decided by
//! the traversal. When a sample rate above 1 is active the rasterizer
//! is handed the oversized buffer and scales coordinates by the rate
//! at the point of writing.

use crate::color::{Rgba, Rgba8};
use crate::math::{max3, min3};
use crate::pixfmt::Pixfmt;
use crate::sampler;
use crate::texture::Texture;

/// Rasterizes points, lines, triangles, and image blits into a
/// [Pixfmt]
pub struct Rasterizer<'a> {
    pixf: &'a mut Pixfmt,
    sample_rate: usize,
}

impl<'a> Rasterizer<'a> {
    /// Create a rasterizer over a buffer
    ///
    /// When `sample_rate > 1` the buffer is the oversized one and
    /// logical coordinates are scaled by the rate on write.
    pub fn new(pixf: &'a mut Pixfmt, sample_rate: usize) -> Self {
        let sample_rate = if sample_rate == 0 { 1 } else { sample_rate };
        Self { pixf, sample_rate }
    }

    fn oversampled(&self) -> bool {
        self.sample_rate > 1
    }
    /// Width of the buffer in logical (pre-supersample) pixels
    fn logical_width(&self) -> i64 {
        (self.pixf.width() / self.sample_rate) as i64
    }
    /// Height of the buffer in logical pixels
    fn logical_height(&self) -> i64 {
        (self.pixf.height() / self.sample_rate) as i64
    }

    /// Fill the nearest pixel to (`x`,`y`)
    ///
    /// Out of bounds locations are dropped. Under supersampling a
    /// single logical point covers a `rate x rate` block of physical
    /// pixels.
    pub fn point(&mut self, x: f64, y: f64, color: Rgba) {
        let mut sx = x.round() as i64;
        let mut sy = y.round() as i64;
        if self.oversampled() {
            sx *= self.sample_rate as i64;
            sy *= self.sample_rate as i64;
        }
        if sx < 0 || sx >= self.pixf.width() as i64 {
            return;
        }
        if sy < 0 || sy >= self.pixf.height() as i64 {
            return;
        }
        let c = Rgba8::from(color);
        if self.oversampled() {
            // the block stays in bounds: sx <= (width/rate - 1) * rate
            for i in sy .. sy + self.sample_rate as i64 {
                for j in sx .. sx + self.sample_rate as i64 {
                    self.pixf.set((j as usize, i as usize), c);
                }
            }
        } else {
            self.pixf.set((sx as usize, sy as usize), c);
        }
    }

    /// Fill a single physical pixel, with no sample rate expansion
    ///
    /// Used by the triangle and image fills, whose coordinates are
    /// already scaled into oversample space.
    pub fn point_raw(&mut self, x: f64, y: f64, color: Rgba) {
        let sx = x.round() as i64;
        let sy = y.round() as i64;
        if sx < 0 || sx >= self.pixf.width() as i64 {
            return;
        }
        if sy < 0 || sy >= self.pixf.height() as i64 {
            return;
        }
        self.pixf.set((sx as usize, sy as usize), Rgba8::from(color));
    }

    /// Draw a line from (`x0`,`y0`) to (`x1`,`y1`)
    ///
    /// Endpoints are floored to the pixel grid. Both endpoints must lie
    /// within the logical buffer bounds or the whole line is skipped:
    /// the policy is reject, not clip. Steps along the dominant axis
    /// with a fractional error term on the other axis that triggers a
    /// unit step when it crosses 0.5, which yields an 8-connected line
    /// that always plots both endpoints. The stepping recurrence is not
    /// symmetric under endpoint swap.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba) {
        let sx0 = x0.floor() as i64;
        let sy0 = y0.floor() as i64;
        let sx1 = x1.floor() as i64;
        let sy1 = y1.floor() as i64;

        // check bounds
        if sx0 < 0 || sx0 >= self.logical_width() { return; }
        if sy0 < 0 || sy0 >= self.logical_height() { return; }
        if sx1 < 0 || sx1 >= self.logical_width() { return; }
        if sy1 < 0 || sy1 >= self.logical_height() { return; }

        let dx = (sx1 - sx0).abs();
        let dy = (sy1 - sy0).abs();
        let step_x: i64 = if sx1 >= sx0 { 1 } else { -1 };
        let step_y: i64 = if sy1 >= sy0 { 1 } else { -1 };

        self.point(sx0 as f64, sy0 as f64, color);

        let mut x = sx0;
        let mut y = sy0;
        let mut epsilon = 0.0;
        if dx >= dy {
            let slope = if dx == 0 { 0.0 } else { dy as f64 / dx as f64 };
            for _ in 0 .. dx {
                x += step_x;
                epsilon += slope;
                if epsilon >= 0.5 {
                    y += step_y;
                    epsilon -= 1.0;
                }
                self.point(x as f64, y as f64, color);
            }
        } else {
            let slope = dx as f64 / dy as f64;
            for _ in 0 .. dy {
                y += step_y;
                epsilon += slope;
                if epsilon >= 0.5 {
                    x += step_x;
                    epsilon -= 1.0;
                }
                self.point(x as f64, y as f64, color);
            }
        }
    }

    /// Fill the triangle (`x0`,`y0`), (`x1`,`y1`), (`x2`,`y2`)
    ///
    /// Vertices are rounded to integer coordinates, then every pixel in
    /// the integer bounding box is tested with three edge functions
    /// signed against the opposite vertex. The inclusive `>= 0` rule is
    /// used on all three edges, so a pixel exactly on an edge shared by
    /// two adjacent triangles is painted by both; tiling coverage has
    /// no gaps. Under supersampling the vertices and bounding box are
    /// pre-scaled by the rate and the fill runs in oversample space.
    pub fn triangle(&mut self, x0: f64, y0: f64,
                    x1: f64, y1: f64,
                    x2: f64, y2: f64, color: Rgba) {
        let mut x0 = x0.round();
        let mut y0 = y0.round();
        let mut x1 = x1.round();
        let mut y1 = y1.round();
        let mut x2 = x2.round();
        let mut y2 = y2.round();

        let mut min_x = min3(x0, x1, x2);
        let mut max_x = max3(x0, x1, x2);
        let mut min_y = min3(y0, y1, y2);
        let mut max_y = max3(y0, y1, y2);

        if self.oversampled() {
            let r = self.sample_rate as f64;
            min_x *= r; max_x *= r;
            min_y *= r; max_y *= r;
            x0 *= r; y0 *= r;
            x1 *= r; y1 *= r;
            x2 *= r; y2 *= r;
        }

        // reference sign of each edge function at the opposite vertex
        let c_ab = (x2 - x1) * (y0 - y1) - (y2 - y1) * (x0 - x1);
        let a_bc = (x0 - x2) * (y1 - y2) - (y0 - y2) * (x1 - x2);
        let b_ac = (x1 - x2) * (y0 - y2) - (y1 - y2) * (x0 - x2);

        for x in min_x as i64 .. max_x as i64 {
            for y in min_y as i64 .. max_y as i64 {
                let px = x as f64;
                let py = y as f64;
                let p_ab = (px - x1) * (y0 - y1) - (py - y1) * (x0 - x1);
                let p_bc = (px - x2) * (y1 - y2) - (py - y2) * (x1 - x2);
                let p_ac = (px - x2) * (y0 - y2) - (py - y2) * (x0 - x2);
                if p_ab * c_ab >= 0.0 && p_bc * a_bc >= 0.0 && p_ac * b_ac >= 0.0 {
                    self.point_raw(px, py, color);
                }
            }
        }
    }

    /// Blit `tex` into the destination rectangle (`x0`,`y0`)-(`x1`,`y1`)
    ///
    /// Destination pixels are visited in row-major order; each pixel
    /// center is mapped to normalized (u,v) across the rectangle and
    /// sampled trilinearly with per-axis scale factors of texture
    /// extent over destination extent. Under supersampling the
    /// rectangle is pre-scaled by the rate, so minification is judged
    /// against the oversampled pixel grid.
    pub fn image(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, tex: &Texture) {
        let r = self.sample_rate as f64;
        let x0 = x0.floor() * r;
        let y0 = y0.floor() * r;
        let x1 = x1.floor() * r;
        let y1 = y1.floor() * r;

        let width = x1 - x0;
        let height = y1 - y0;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let u_scale = tex.width() as f64 / width;
        let v_scale = tex.height() as f64 / height;

        let mut y = y0;
        while y < y1 {
            let v = (y + 0.5 - y0) / height;
            let mut x = x0;
            while x < x1 {
                let u = (x + 0.5 - x0) / width;
                let color = sampler::sample_trilinear(tex, u, v, u_scale, v_scale);
                self.point_raw(x, y, color);
                x += 1.0;
            }
            y += 1.0;
        }
    }
}

//! Colors
//!
//! [Rgba] is the working representation: four f64 channels, each
//! semantically in [0,1]. Quantization to 8 bits happens only at the
//! buffer write and texel read boundaries, clamp first then round.

use std::ops::{Add, Mul};

use crate::math::clamp01;

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside [0,1] are clamped before rounding.
pub fn cu8(v: f64) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as floating point Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Transparent black (0,0,0,0)
    pub fn clear() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Opaque magenta, the sentinel returned by the samplers for
    /// out-of-range texture coordinates
    pub fn sample_error() -> Self {
        Self::new(1.0, 0.0, 1.0, 1.0)
    }
}

impl Mul<f64> for Rgba {
    type Output = Rgba;
    fn mul(self, t: f64) -> Rgba {
        Rgba::new(self.r * t, self.g * t, self.b * t, self.a * t)
    }
}

impl Add for Rgba {
    type Output = Rgba;
    fn add(self, c: Rgba) -> Rgba {
        Rgba::new(self.r + c.r, self.g + c.g, self.b + c.b, self.a + c.a)
    }
}

/// Color as 8-bit Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Read a color from the first 4 components of a slice
    pub fn from_slice(v: &[u8]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba> for Rgba8 {
    fn from(c: Rgba) -> Rgba8 {
        Rgba8::new(cu8(c.r), cu8(c.g), cu8(c.b), cu8(c.a))
    }
}

impl From<Rgba8> for Rgba {
    fn from(c: Rgba8) -> Rgba {
        Rgba::new(color_u8_to_f64(c.r),
                  color_u8_to_f64(c.g),
                  color_u8_to_f64(c.b),
                  color_u8_to_f64(c.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn quantize_clamp_then_round() {
        assert_eq!(cu8(0.0), 0);
        assert_eq!(cu8(1.0), 255);
        assert_eq!(cu8(0.5), 128); // 127.5 rounds away from zero
        assert_eq!(cu8(-1.0), 0);
        assert_eq!(cu8(2.0), 255);
    }
    #[test]
    fn rgba_roundtrip() {
        let c = Rgba8::new(10, 20, 30, 255);
        let f = Rgba::from(c);
        assert_eq!(Rgba8::from(f), c);
    }
    #[test]
    fn channel_arithmetic() {
        let c = Rgba::new(0.2, 0.4, 0.6, 1.0) * 0.5
              + Rgba::new(0.1, 0.1, 0.1, 0.0);
        assert!((c.r - 0.2).abs() < 1e-12);
        assert!((c.g - 0.3).abs() < 1e-12);
        assert!((c.b - 0.4).abs() < 1e-12);
        assert!((c.a - 0.5).abs() < 1e-12);
    }
    #[test]
    fn sentinel_is_opaque_magenta() {
        assert_eq!(Rgba8::from(Rgba::sample_error()), Rgba8::new(255,0,255,255));
    }
}

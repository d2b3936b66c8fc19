//! Transformations
//!
//! 2D affine transforms used while traversing the scene tree. Only the
//! six free entries of the 3x3 homogeneous matrix are stored; the
//! bottom row is always (0,0,1), so the invariant required of valid
//! scene transforms holds by construction.

use std::ops::Mul;

/// 2D Affine Transformation
///
/// The matrix is
///
/// ```text
///   [ sx  shx  tx ]
///   [ shy  sy  ty ]
///   [  0    0   1 ]
/// ```
///
/// applied to column vectors, so `(a * b).apply(p)` equals
/// `a.apply(b.apply(p))`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub shx: f64,
    pub tx: f64,
    pub shy: f64,
    pub sy: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn new() -> Self {
        Self { sx: 1.0,  shx: 0.0, tx: 0.0,
               shy: 0.0, sy: 1.0,  ty: 0.0,
        }
    }
    /// Create a translation by (`tx`,`ty`)
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, .. Self::new() }
    }
    /// Create a scaling by (`sx`,`sy`)
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self { sx, sy, .. Self::new() }
    }
    /// Create a rotation around the origin
    ///
    /// angle is in radians
    pub fn new_rotate(angle: f64) -> Self {
        let ca = angle.cos();
        let sa = angle.sin();
        Self { sx: ca, shx: -sa, tx: 0.0,
               shy: sa, sy: ca,  ty: 0.0,
        }
    }
    /// Map a point through the transform
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shx * self.shy
    }
    /// Compute the inverse transform
    ///
    /// The transform must not be singular
    pub fn invert(&self) -> Self {
        let d = 1.0 / self.determinant();
        Self {
            sx:   self.sy * d,
            shx: -self.shx * d,
            tx:  (self.shx * self.ty - self.sy * self.tx) * d,
            shy: -self.shy * d,
            sy:   self.sx * d,
            ty:  (self.shy * self.tx - self.sx * self.ty) * d,
        }
    }
    /// Compose two transforms: the result applies `m` first, then self
    pub fn mul_transform(&self, m: &Transform) -> Self {
        Self {
            sx:  self.sx * m.sx  + self.shx * m.shy,
            shx: self.sx * m.shx + self.shx * m.sy,
            tx:  self.sx * m.tx  + self.shx * m.ty + self.tx,
            shy: self.shy * m.sx + self.sy * m.shy,
            sy:  self.shy * m.shx + self.sy * m.sy,
            ty:  self.shy * m.tx  + self.sy * m.ty + self.ty,
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.mul_transform(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64,f64), b: (f64,f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let t = Transform::new();
        assert_eq!(t.apply(3.5, -2.0), (3.5, -2.0));
    }
    #[test]
    fn translate_scale_rotate() {
        let t = Transform::new_translate(2.0, 3.0);
        assert_eq!(t.apply(1.0, 1.0), (3.0, 4.0));

        let s = Transform::new_scale(2.0, 0.5);
        assert_eq!(s.apply(4.0, 4.0), (8.0, 2.0));

        let r = Transform::new_rotate(std::f64::consts::FRAC_PI_2);
        assert!(close(r.apply(1.0, 0.0), (0.0, 1.0)));
    }
    #[test]
    fn composition_applies_rhs_first() {
        let t = Transform::new_translate(1.0, 0.0);
        let s = Transform::new_scale(2.0, 2.0);
        // scale then translate
        assert!(close((t * s).apply(1.0, 1.0), (3.0, 2.0)));
        // translate then scale
        assert!(close((s * t).apply(1.0, 1.0), (4.0, 2.0)));
    }
    #[test]
    fn inverse_round_trip() {
        let t = Transform::new_translate(5.0, -2.0)
              * Transform::new_rotate(0.3)
              * Transform::new_scale(1.5, 0.25);
        let p = (7.0, 11.0);
        let q = t.apply(p.0, p.1);
        assert!(close(t.invert().apply(q.0, q.1), p));
        let id = t * t.invert();
        assert!(close(id.apply(1.0, 2.0), (1.0, 2.0)));
    }
}

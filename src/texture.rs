//! Textures and the mip pyramid
//!
//! A [Texture] owns a base texel buffer decoded upstream, plus a chain
//! of derived half-resolution levels generated with a strict 2x2 box
//! filter. Levels above the starting level are never authored; they
//! are dropped and regenerated on every [Texture::generate_mips] call.

use log::error;

use crate::error::{Error, Result};

/// Maximum number of mip levels a texture may hold
pub const MAX_MIP_LEVELS: usize = 14;

/// A single level of the mip pyramid
///
/// Texels are stored row-major, 4 interleaved 8-bit components
#[derive(Debug,Default,Clone)]
pub struct MipLevel {
    /// Level width in texels
    pub width: usize,
    /// Level height in texels
    pub height: usize,
    /// Component data, `4 * width * height` bytes
    pub texels: Vec<u8>,
}

impl MipLevel {
    /// Create a zeroed level of width * height
    ///
    /// Both dimensions must be nonzero
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create mip level with 0 width or height");
        }
        Self { width, height, texels: vec![0u8; 4 * width * height] }
    }
    /// Create a level from already decoded pixel data
    ///
    /// The data length must be `4 * width * height` and both
    /// dimensions nonzero
    pub fn from_texels(texels: Vec<u8>, width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create mip level with 0 width or height");
        }
        assert_eq!(texels.len(), 4 * width * height);
        Self { width, height, texels }
    }
    /// The 4 components of the texel at (`x`,`y`)
    pub fn texel(&self, x: usize, y: usize) -> &[u8] {
        let i = 4 * (y * self.width + x);
        &self.texels[i .. i + 4]
    }
}

/// An ordered mip pyramid, index 0 = full resolution
#[derive(Debug,Default,Clone)]
pub struct Texture {
    /// Mip levels, base first
    pub levels: Vec<MipLevel>,
}

impl Texture {
    /// Create a texture from a decoded base texel buffer
    pub fn from_base(texels: Vec<u8>, width: usize, height: usize) -> Self {
        Self { levels: vec![MipLevel::from_texels(texels, width, height)] }
    }
    /// Access a mip level
    pub fn level(&self, level: usize) -> &MipLevel {
        &self.levels[level]
    }
    /// Width of the base level in texels
    pub fn width(&self) -> usize {
        self.levels[0].width
    }
    /// Height of the base level in texels
    pub fn height(&self) -> usize {
        self.levels[0].height
    }

    /// Generate the mip pyramid below `start_level`
    ///
    /// Any existing levels above `start_level` are replaced. Each texel
    /// of a derived level is the per-channel average of the 2x2 block
    /// it covers in the level above, with truncating division. Level
    /// k+1 is `max(1, k/2)` in each dimension; odd sizes round down and
    /// the trailing row/column is not mirrored.
    ///
    /// An out-of-range `start_level` is reported and the call aborts
    /// without touching the pyramid.
    pub fn generate_mips(&mut self, start_level: usize) -> Result<()> {
        if start_level >= self.levels.len() {
            error!("invalid mip start level {}, texture has {} levels",
                   start_level, self.levels.len());
            return Err(Error::InvalidMipLevel {
                level: start_level,
                levels: self.levels.len(),
            });
        }

        let base_w = self.levels[start_level].width;
        let base_h = self.levels[start_level].height;
        let num_sub_levels = std::cmp::min(
            floor_log2(std::cmp::max(base_w, base_h)),
            MAX_MIP_LEVELS - start_level - 1,
        );

        // allocate sublevels
        self.levels.truncate(start_level + 1);
        let (mut width, mut height) = (base_w, base_h);
        for _ in 0 .. num_sub_levels {
            width  = std::cmp::max(1, width / 2);
            height = std::cmp::max(1, height / 2);
            self.levels.push(MipLevel::new(width, height));
        }

        // box filter each level from the one above it
        for level in start_level + 1 ..= start_level + num_sub_levels {
            let (head, tail) = self.levels.split_at_mut(level);
            let prev = &head[level - 1];
            let cur = &mut tail[0];
            for y in 0 .. cur.height {
                for x in 0 .. cur.width {
                    // a dimension pinned at 1 has no second sample
                    let x1 = std::cmp::min(2 * x + 1, prev.width - 1);
                    let y1 = std::cmp::min(2 * y + 1, prev.height - 1);
                    for c in 0 .. 4 {
                        let mut sum = u32::from(prev.texel(2 * x, 2 * y)[c]);
                        sum += u32::from(prev.texel(x1, 2 * y)[c]);
                        sum += u32::from(prev.texel(2 * x, y1)[c]);
                        sum += u32::from(prev.texel(x1, y1)[c]);
                        cur.texels[4 * (y * cur.width + x) + c] = (sum / 4) as u8;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Floor of log2(n); 0 for n <= 1
fn floor_log2(n: usize) -> usize {
    let mut n = n;
    let mut k = 0;
    while n > 1 {
        n /= 2;
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(r: u8, g: u8, b: u8, a: u8, w: usize, h: usize) -> Texture {
        let mut texels = Vec::with_capacity(4 * w * h);
        for _ in 0 .. w * h {
            texels.extend_from_slice(&[r, g, b, a]);
        }
        Texture::from_base(texels, w, h)
    }

    #[test]
    fn level_count_and_sizes() {
        let mut tex = solid(0, 0, 0, 255, 16, 8);
        tex.generate_mips(0).unwrap();
        // floor(log2(16)) = 4 sublevels
        assert_eq!(tex.levels.len(), 5);
        let dims: Vec<_> = tex.levels.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(dims, vec![(16,8), (8,4), (4,2), (2,1), (1,1)]);
    }

    #[test]
    fn solid_color_is_exact_at_every_level() {
        let mut tex = solid(10, 200, 30, 255, 8, 8);
        tex.generate_mips(0).unwrap();
        for level in &tex.levels {
            for y in 0 .. level.height {
                for x in 0 .. level.width {
                    assert_eq!(level.texel(x, y), &[10, 200, 30, 255]);
                }
            }
        }
    }

    #[test]
    fn box_filter_truncates() {
        // 2x2 base: three black texels and one with value 2 -> 2/4 = 0
        let texels = vec![
            2,2,2,2,  0,0,0,0,
            0,0,0,0,  0,0,0,0,
        ];
        let mut tex = Texture::from_base(texels, 2, 2);
        tex.generate_mips(0).unwrap();
        assert_eq!(tex.levels.len(), 2);
        assert_eq!(tex.level(1).texel(0, 0), &[0, 0, 0, 0]);

        // averages of 4,4,4,0 truncate to 3
        let texels = vec![
            4,4,4,4,  4,4,4,4,
            4,4,4,4,  0,0,0,0,
        ];
        let mut tex = Texture::from_base(texels, 2, 2);
        tex.generate_mips(0).unwrap();
        assert_eq!(tex.level(1).texel(0, 0), &[3, 3, 3, 3]);
    }

    #[test]
    fn odd_sizes_round_down() {
        let mut tex = solid(1, 2, 3, 4, 5, 3);
        tex.generate_mips(0).unwrap();
        let dims: Vec<_> = tex.levels.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(dims, vec![(5,3), (2,1), (1,1)]);
    }

    #[test]
    fn invalid_start_level_reports_and_aborts() {
        let mut tex = solid(0, 0, 0, 0, 4, 4);
        let err = tex.generate_mips(3).unwrap_err();
        assert_eq!(err, Error::InvalidMipLevel { level: 3, levels: 1 });
        // the pyramid was not touched
        assert_eq!(tex.levels.len(), 1);
    }

    #[test]
    fn regeneration_replaces_derived_levels() {
        let mut tex = solid(100, 100, 100, 255, 4, 4);
        tex.generate_mips(0).unwrap();
        assert_eq!(tex.levels.len(), 3);
        // author a new base and regenerate; stale levels must not leak
        for v in tex.levels[0].texels.iter_mut() {
            *v = 50;
        }
        tex.generate_mips(0).unwrap();
        assert_eq!(tex.levels.len(), 3);
        assert_eq!(tex.level(2).texel(0, 0), &[50, 50, 50, 50]);
    }

    #[test]
    #[should_panic]
    fn zero_size_level() {
        let _ = MipLevel::from_texels(vec![], 0, 4);
    }

    #[test]
    fn level_cap() {
        let mut tex = solid(0, 0, 0, 0, 1 << 15, 1);
        tex.generate_mips(0).unwrap();
        assert_eq!(tex.levels.len(), MAX_MIP_LEVELS);
    }
}

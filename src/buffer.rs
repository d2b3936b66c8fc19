//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), 4 interleaved
/// components per pixel
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of the image
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the image is allocated and zeroed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of the underlying data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True when the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Clear the image to transparent black
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i .. i + self.bpp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn allocation_and_indexing() {
        let mut rbuf = RenderingBuffer::new(3, 2, 4);
        assert_eq!(rbuf.len(), 24);
        rbuf[(2,1)][0] = 7;
        assert_eq!(rbuf.data[(1 * 3 + 2) * 4], 7);
        assert_eq!(&rbuf[(2,1)], &[7u8,0,0,0][..]);
    }
    #[test]
    fn clear_is_transparent_black() {
        let mut rbuf = RenderingBuffer::new(2, 2, 4);
        rbuf.data.iter_mut().for_each(|v| *v = 255);
        rbuf.clear();
        assert!(rbuf.data.iter().all(|&v| v == 0));
    }
}

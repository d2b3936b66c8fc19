//! Pixel Format
//!
//! Typed RGBA access on top of a raw [RenderingBuffer].

use crate::buffer::RenderingBuffer;
use crate::color::{Rgba, Rgba8};

use crate::PixelData;
use crate::Source;

/// RGBA Pixel Format wrapper around raw pixel component data
#[derive(Debug,Default)]
pub struct Pixfmt {
    pub rbuf: RenderingBuffer,
}

impl Pixfmt {
    /// Bytes per pixel: 4 interleaved 8-bit components
    pub fn bpp() -> usize { 4 }

    /// Create a new Pixel Format of width * height
    ///
    /// Allocates memory of width * height * 4
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()) }
    }
    /// Width of the buffer in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of the buffer in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Size of the buffer in bytes
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the image to transparent black
    ///
    ///     use softraster::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::new(2,2);
    ///     pix.clear();
    ///     let empty = Rgba8 { r:0, g:0, b:0, a:0 };
    ///     assert_eq!(pix.get((0,0)), empty);
    ///     assert_eq!(pix.get((1,1)), empty);
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Quantize and write the [Rgba] color `c` at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored; the existing pixel
    /// is overwritten, not blended
    ///
    ///     use softraster::{Source,Pixfmt,Rgba,Rgba8};
    ///
    ///     let mut pix = Pixfmt::new(1,2);
    ///     pix.copy_pixel(0,1, Rgba::black());
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), Rgba8::black());
    ///
    ///     pix.copy_pixel(10,10, Rgba::black()); // Ignored, outside of range
    ///
    pub fn copy_pixel(&mut self, x: usize, y: usize, c: Rgba) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), Rgba8::from(c));
    }
    /// Write an already quantized color at (`x`,`y`)
    ///
    /// The location must be inside the buffer
    pub fn set(&mut self, id: (usize, usize), c: Rgba8) {
        self.rbuf[id][0] = c.r;
        self.rbuf[id][1] = c.g;
        self.rbuf[id][2] = c.b;
        self.rbuf[id][3] = c.a;
    }
}

impl Source for Pixfmt {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgba8::from_slice(&self.rbuf[id])
    }
}

impl<'a> PixelData<'a> for Pixfmt {
    fn pixeldata(&'a self) -> &'a [u8] {
        &self.rbuf.data
    }
}

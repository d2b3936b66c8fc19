
/// How does this work
///    ren = Renderer::new()
///    ren.set_target( Pixfmt::new( width, height ) )
///    ren.set_sample_rate( rate )
///    ren.set_canvas_to_screen( canvas_to_screen )
///    ren.render( &scene )
///  Render Pipeline
///    clear target (transparent black)
///    walk the scene tree, composing transforms on an explicit stack
///      dispatch node -> Rasterizer
///        point()    -- nearest pixel, rate x rate block when oversampled
///        line()     -- error accumulator stepping on the dominant axis
///        triangle() -- edge functions over the integer bounding box
///        image()    -- trilinear sampling of the mip pyramid
///    draw canvas outline
///    resolve()      -- box filter the oversized buffer into the target

pub mod math;
pub mod color;
pub mod buffer;
pub mod pixfmt;
pub mod transform;
pub mod scene;
pub mod texture;
pub mod sampler;
pub mod raster;
pub mod render;
pub mod viewport;
pub mod error;
pub mod ppm;

pub use crate::math::*;
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::transform::*;
pub use crate::scene::*;
pub use crate::texture::*;
pub use crate::sampler::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::viewport::*;
pub use crate::error::*;

/// Access raw interleaved RGBA component data
pub trait PixelData<'a> {
    fn pixeldata(&'a self) -> &'a [u8];
}

/// Read a color out of a pixel source at `(x,y)`
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

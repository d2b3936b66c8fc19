//! Renderer
//!
//! Owns the render target, walks the scene tree with an explicit
//! transform stack, dispatches nodes to the [Rasterizer], and drives
//! the supersample resolve.

use log::debug;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::pixfmt::Pixfmt;
use crate::raster::Rasterizer;
use crate::scene::{Scene, SceneNode, Shape, Style};
use crate::transform::Transform;
use crate::PixelData;

/// Scene renderer
///
/// Lifecycle: construct, bind a target with [set_target], optionally
/// configure a sample rate and the canvas-to-screen transform, then
/// [render]. A full render is one synchronous call: clear, traverse,
/// rasterize, resolve. The target and the temporary oversized buffer
/// are exclusively owned by the renderer; no aliasing.
///
/// [set_target]: Renderer::set_target
/// [render]: Renderer::render
#[derive(Debug)]
pub struct Renderer {
    target: Option<Pixfmt>,
    oversample: Option<Pixfmt>,
    sample_rate: usize,
    canvas_to_screen: Transform,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with no target and a sample rate of 1
    pub fn new() -> Self {
        Self { target: None,
               oversample: None,
               sample_rate: 1,
               canvas_to_screen: Transform::new(),
        }
    }
    /// Bind the destination buffer
    ///
    /// Replaces any previous target and invalidates a leftover
    /// oversized buffer.
    pub fn set_target(&mut self, target: Pixfmt) {
        self.target = Some(target);
        self.oversample = None;
    }
    /// The currently bound target, if any
    pub fn target(&self) -> Option<&Pixfmt> {
        self.target.as_ref()
    }
    /// Unbind and return the target
    pub fn take_target(&mut self) -> Option<Pixfmt> {
        self.oversample = None;
        self.target.take()
    }
    /// Set the supersampling rate
    ///
    /// A rate of 1 disables supersampling; above 1, subsequent renders
    /// rasterize into an oversized buffer of `width*rate x height*rate`
    /// and box-filter it down on resolve.
    pub fn set_sample_rate(&mut self, rate: usize) {
        self.sample_rate = if rate == 0 { 1 } else { rate };
        self.oversample = None;
    }
    /// The active supersampling rate
    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }
    /// Set the transform mapping canvas coordinates to screen pixels
    pub fn set_canvas_to_screen(&mut self, t: Transform) {
        self.canvas_to_screen = t;
    }

    /// Render a scene into the bound target
    ///
    /// Clears to transparent black, paints all elements in document
    /// order, draws a one-pixel black outline of the logical canvas
    /// bounds, and resolves supersampled output. Fails only when no
    /// target is bound.
    pub fn render(&mut self, scene: &Scene) -> Result<()> {
        let (width, height) = match &self.target {
            Some(t) => (t.width(), t.height()),
            None => return Err(Error::NoTarget),
        };
        let rate = self.sample_rate;
        if rate > 1 {
            self.oversample = Some(Pixfmt::new(width * rate, height * rate));
        } else {
            self.oversample = None;
        }

        {
            let frame = match self.oversample.as_mut() {
                Some(big) => big,
                None => match self.target.as_mut() {
                    Some(t) => t,
                    None => return Err(Error::NoTarget),
                },
            };
            debug!("render: clear {}x{}", frame.width(), frame.height());
            frame.clear();

            let mut walk = Traversal {
                ras: Rasterizer::new(frame, rate),
                transform: self.canvas_to_screen,
                saved: vec![],
            };
            debug!("render: traverse {} elements", scene.elements.len());
            for element in &scene.elements {
                walk.node(element);
            }
            walk.canvas_outline(scene.width, scene.height);
        }

        debug!("render: resolve");
        self.resolve();
        Ok(())
    }

    /// Box filter the oversized buffer into the target
    ///
    /// Every `rate x rate` block of source pixels is averaged per
    /// channel with truncating division. A no-op when no oversized
    /// buffer exists, so calling it again without an intervening
    /// oversized render is safe.
    pub fn resolve(&mut self) {
        let big = match self.oversample.take() {
            Some(big) => big,
            None => return,
        };
        let target = match self.target.as_mut() {
            Some(t) => t,
            None => return,
        };
        let rate = self.sample_rate;
        let big_w = big.rbuf.width;
        for m in 0 .. target.height() {
            for n in 0 .. target.width() {
                for k in 0 .. 4 {
                    let mut sum: u32 = 0;
                    for y in 0 .. rate {
                        for x in 0 .. rate {
                            let i = 4 * ((m * rate + y) * big_w + n * rate + x) + k;
                            sum += u32::from(big.rbuf.data[i]);
                        }
                    }
                    let i = 4 * (m * target.rbuf.width + n) + k;
                    target.rbuf.data[i] = (sum / (rate * rate) as u32) as u8;
                }
            }
        }
        // big is dropped here; the target holds the resolved image
    }
}

impl<'a> PixelData<'a> for Renderer {
    fn pixeldata(&'a self) -> &'a [u8] {
        match &self.target {
            Some(t) => t.pixeldata(),
            None => &[],
        }
    }
}

/// One scene walk: the current composed transform, the stack of saved
/// transforms, and the rasterizer being driven
struct Traversal<'a> {
    ras: Rasterizer<'a>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl<'a> Traversal<'a> {
    fn node(&mut self, node: &SceneNode) {
        self.saved.push(self.transform);
        self.transform = self.transform * node.transform;

        match &node.shape {
            Shape::Point { position } => {
                self.point(*position, &node.style);
            },
            Shape::Line { from, to } => {
                self.line(*from, *to, &node.style);
            },
            Shape::Polyline { points } => {
                self.polyline(points, &node.style);
            },
            Shape::Rect { position, dimension } => {
                self.rect(*position, *dimension, &node.style);
            },
            Shape::Polygon { points, triangles } => {
                self.polygon(points, triangles, &node.style);
            },
            Shape::Ellipse { .. } => {
                // ellipse rasterization is out of scope
            },
            Shape::Image { position, dimension, texture } => {
                self.image(*position, *dimension, texture);
            },
            Shape::Group { children } => {
                for child in children {
                    self.node(child);
                }
            },
        }

        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    fn point(&mut self, position: (f64, f64), style: &Style) {
        if style.fill.a == 0.0 {
            return;
        }
        let (x, y) = self.transform.apply(position.0, position.1);
        self.ras.point(x, y, style.fill);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), style: &Style) {
        if style.stroke.a == 0.0 {
            return;
        }
        let (x0, y0) = self.transform.apply(from.0, from.1);
        let (x1, y1) = self.transform.apply(to.0, to.1);
        self.ras.line(x0, y0, x1, y1, style.stroke);
    }

    fn polyline(&mut self, points: &[(f64, f64)], style: &Style) {
        if style.stroke.a == 0.0 {
            return;
        }
        for pair in points.windows(2) {
            let (x0, y0) = self.transform.apply(pair[0].0, pair[0].1);
            let (x1, y1) = self.transform.apply(pair[1].0, pair[1].1);
            self.ras.line(x0, y0, x1, y1, style.stroke);
        }
    }

    fn rect(&mut self, position: (f64, f64), dimension: (f64, f64), style: &Style) {
        let (x, y) = position;
        let (w, h) = dimension;

        let p0 = self.transform.apply(x, y);
        let p1 = self.transform.apply(x + w, y);
        let p2 = self.transform.apply(x, y + h);
        let p3 = self.transform.apply(x + w, y + h);

        // draw fill as two triangles
        if style.fill.a != 0.0 {
            self.ras.triangle(p0.0, p0.1, p1.0, p1.1, p2.0, p2.1, style.fill);
            self.ras.triangle(p2.0, p2.1, p1.0, p1.1, p3.0, p3.1, style.fill);
        }

        // draw outline
        if style.stroke.a != 0.0 {
            self.ras.line(p0.0, p0.1, p1.0, p1.1, style.stroke);
            self.ras.line(p1.0, p1.1, p3.0, p3.1, style.stroke);
            self.ras.line(p3.0, p3.1, p2.0, p2.1, style.stroke);
            self.ras.line(p2.0, p2.1, p0.0, p0.1, style.stroke);
        }
    }

    fn polygon(&mut self, points: &[(f64, f64)],
               triangles: &[(f64, f64)], style: &Style) {
        // fill from the pre-triangulated triples
        if style.fill.a != 0.0 {
            for tri in triangles.chunks(3) {
                if tri.len() < 3 {
                    break;
                }
                let p0 = self.transform.apply(tri[0].0, tri[0].1);
                let p1 = self.transform.apply(tri[1].0, tri[1].1);
                let p2 = self.transform.apply(tri[2].0, tri[2].1);
                self.ras.triangle(p0.0, p0.1, p1.0, p1.1, p2.0, p2.1, style.fill);
            }
        }

        // closed outline
        if style.stroke.a != 0.0 {
            let n = points.len();
            for i in 0 .. n {
                let a = points[i];
                let b = points[(i + 1) % n];
                let (x0, y0) = self.transform.apply(a.0, a.1);
                let (x1, y1) = self.transform.apply(b.0, b.1);
                self.ras.line(x0, y0, x1, y1, style.stroke);
            }
        }
    }

    fn image(&mut self, position: (f64, f64), dimension: (f64, f64),
             texture: &crate::texture::Texture) {
        let (x0, y0) = self.transform.apply(position.0, position.1);
        let (x1, y1) = self.transform.apply(position.0 + dimension.0,
                                            position.1 + dimension.1);
        self.ras.image(x0, y0, x1, y1, texture);
    }

    /// One-pixel debug outline of the logical canvas bounds, nudged one
    /// pixel outward horizontally and inward vertically from the
    /// transformed corners; a canvas that exactly fills the buffer puts
    /// the outline endpoints out of bounds, where the line rejection
    /// policy drops them
    fn canvas_outline(&mut self, width: f64, height: f64) {
        let black = Rgba::black();
        let a = self.transform.apply(0.0, 0.0);
        let b = self.transform.apply(width, 0.0);
        let c = self.transform.apply(0.0, height);
        let d = self.transform.apply(width, height);
        let a = (a.0 - 1.0, a.1 + 1.0);
        let b = (b.0 + 1.0, b.1 + 1.0);
        let c = (c.0 - 1.0, c.1 - 1.0);
        let d = (d.0 + 1.0, d.1 - 1.0);

        self.ras.line(a.0, a.1, b.0, b.1, black);
        self.ras.line(a.0, a.1, c.0, c.1, black);
        self.ras.line(d.0, d.1, b.0, b.1, black);
        self.ras.line(d.0, d.1, c.0, c.1, black);
    }
}

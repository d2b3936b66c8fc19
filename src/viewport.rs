//! Viewport
//!
//! Pan/zoom state in canvas units, from which the canvas to normalized
//! device transform is derived. Pure state transitions: neither call
//! rasterizes anything.

use crate::transform::Transform;

/// A view center and half-extent over the canvas
#[derive(Debug,Copy,Clone)]
pub struct Viewport {
    x: f64,
    y: f64,
    span: f64,
    canvas_to_norm: Transform,
}

impl Viewport {
    /// Create a viewport centered at (`x`,`y`) with half-extent `span`
    pub fn new(x: f64, y: f64, span: f64) -> Self {
        let mut view = Self { x, y, span, canvas_to_norm: Transform::new() };
        view.set_viewbox(x, y, span);
        view
    }
    /// Set the view box and re-derive the canvas to NDC transform
    ///
    /// The transform translates by (span-x, span-y), then scales
    /// uniformly by 1/(2*span).
    pub fn set_viewbox(&mut self, x: f64, y: f64, span: f64) {
        let trans = Transform::new_translate(span - x, span - y);
        let scale = Transform::new_scale(1.0 / (2.0 * span), 1.0 / (2.0 * span));
        self.canvas_to_norm = scale * trans;
        self.x = x;
        self.y = y;
        self.span = span;
    }
    /// Pan by (`-dx`,`-dy`) and zoom by `scale`, then re-derive
    pub fn update_viewbox(&mut self, dx: f64, dy: f64, scale: f64) {
        let x = self.x - dx;
        let y = self.y - dy;
        let span = self.span * scale;
        self.set_viewbox(x, y, span);
    }
    /// The canvas to normalized device transform
    pub fn canvas_to_norm(&self) -> Transform {
        self.canvas_to_norm
    }
    /// View center x in canvas units
    pub fn x(&self) -> f64 {
        self.x
    }
    /// View center y in canvas units
    pub fn y(&self) -> f64 {
        self.y
    }
    /// View half-extent in canvas units
    pub fn span(&self) -> f64 {
        self.span
    }
}

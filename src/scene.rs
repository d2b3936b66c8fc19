//! Scene model
//!
//! The renderer consumes an ordered tree of drawable nodes. Parsing a
//! scene description into this tree, triangulating polygons, and
//! decoding image files all happen upstream; a [Polygon](Shape::Polygon)
//! arrives with its fill already triangulated and an
//! [Image](Shape::Image) with its base texels already decoded.

use crate::color::Rgba;
use crate::texture::Texture;
use crate::transform::Transform;

/// Fill and stroke colors of a node
///
/// A fill or stroke with alpha 0 is skipped entirely.
#[derive(Debug,Copy,Clone)]
pub struct Style {
    /// Interior color
    pub fill: Rgba,
    /// Outline color
    pub stroke: Rgba,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: Rgba::black(), stroke: Rgba::clear() }
    }
}

impl Style {
    /// Style with only a fill color
    pub fn filled(fill: Rgba) -> Self {
        Self { fill, stroke: Rgba::clear() }
    }
    /// Style with only a stroke color
    pub fn stroked(stroke: Rgba) -> Self {
        Self { fill: Rgba::clear(), stroke }
    }
}

/// Geometry payload of a scene node, in the node's local space
#[derive(Debug)]
pub enum Shape {
    /// A single point, drawn with the fill color
    Point { position: (f64, f64) },
    /// A line segment, drawn with the stroke color
    Line { from: (f64, f64), to: (f64, f64) },
    /// An open run of line segments
    Polyline { points: Vec<(f64, f64)> },
    /// An axis-aligned rectangle: filled as two triangles, stroked as
    /// four lines
    Rect { position: (f64, f64), dimension: (f64, f64) },
    /// A closed polygon
    ///
    /// `points` is the outline; `triangles` is the pre-triangulated
    /// fill, consumed in triples
    Polygon { points: Vec<(f64, f64)>, triangles: Vec<(f64, f64)> },
    /// An ellipse; rasterization is currently a no-op
    Ellipse { center: (f64, f64), radius: (f64, f64) },
    /// A textured axis-aligned rectangle
    Image { position: (f64, f64), dimension: (f64, f64), texture: Texture },
    /// An ordered sequence of child nodes
    Group { children: Vec<SceneNode> },
}

/// A drawable node: geometry plus its local transform and style
#[derive(Debug)]
pub struct SceneNode {
    /// Local affine transform, composed onto the current transform
    /// while this node and its children are drawn
    pub transform: Transform,
    /// Fill and stroke colors
    pub style: Style,
    /// Type specific geometry
    pub shape: Shape,
}

impl SceneNode {
    /// Create a node with an identity transform and default style
    pub fn new(shape: Shape) -> Self {
        Self { transform: Transform::new(), style: Style::default(), shape }
    }
    /// Create a node with a style
    pub fn with_style(shape: Shape, style: Style) -> Self {
        Self { transform: Transform::new(), style, shape }
    }
}

/// An ordered tree of drawable nodes plus the logical canvas size
///
/// Elements are painted in document order: later siblings paint over
/// earlier ones.
#[derive(Debug,Default)]
pub struct Scene {
    /// Canvas width in scene units
    pub width: f64,
    /// Canvas height in scene units
    pub height: f64,
    /// Top level drawables, in paint order
    pub elements: Vec<SceneNode>,
}

impl Scene {
    /// Create an empty scene with a canvas size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, elements: vec![] }
    }
}

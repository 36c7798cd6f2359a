use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// One draw batch: a path and the single color it is painted with.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        path: BezPath,
        color: Rgba8,
    },
    Stroke {
        path: BezPath,
        color: Rgba8,
        width: f64,
        /// Round caps and joins instead of butt/miter.
        round: bool,
    },
}

impl DrawOp {
    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Fill { color, .. } | Self::Stroke { color, .. } => *color,
        }
    }

    pub fn path(&self) -> &BezPath {
        match self {
            Self::Fill { path, .. } | Self::Stroke { path, .. } => path,
        }
    }
}

/// Everything needed to rasterize a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
        }
    }
}

/// Polyline through `points`, optionally closed. Empty input gives an empty path.
pub fn polyline(points: &[Vec2], close: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return path;
    };
    path.move_to(first.to_point());
    for p in iter {
        path.line_to(p.to_point());
    }
    if close {
        path.close_path();
    }
    path
}

pub fn circle(center: Vec2, radius: f64) -> BezPath {
    kurbo::Circle::new(center.to_point(), radius.max(0.0)).to_path(CIRCLE_TOLERANCE)
}

/// Axis-aligned rectangle; negative extents are normalized.
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    Rect::from_points(Point::new(x, y), Point::new(x + w, y + h)).to_path(CIRCLE_TOLERANCE)
}

/// Closed Catmull-Rom spline through `points`, as cubic segments.
///
/// Fewer than three points degrade to a closed polyline.
pub fn closed_spline(points: &[Vec2]) -> BezPath {
    let n = points.len();
    if n < 3 {
        return polyline(points, true);
    }
    let mut path = BezPath::new();
    path.move_to(points[0].to_point());
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        path.curve_to(c1.to_point(), c2.to_point(), p2.to_point());
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;

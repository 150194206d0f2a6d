//! Geometry value types: the canonical rectangle and alignment choices.
//!
//! `Rect` is the crate's single rectangle representation: four edges in one
//! y-down coordinate space, matching the geometric-bounds arrays of
//! page-layout hosts. Origin/size and center/size views are conversions at
//! the boundary, never a second stored representation.

use glam::{DVec2, dvec2};

use crate::errors::RectError;

/// Horizontal placement of a rect within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement of a rect within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Axis-aligned rectangle stored as edges, in points, y growing downward.
///
/// Invariant: `bottom >= top` and `right >= left`. Zero-area rects are
/// legal. The arithmetic here is total: an inverted rect produced by caller
/// error yields negative width/height rather than a panic. Use
/// [`Rect::try_new`] to reject such values at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create a Rect from edges (unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Rect {
        Rect {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create a Rect with validation (rejects NaN, infinite and inverted
    /// edges).
    pub fn try_new(top: f64, left: f64, bottom: f64, right: f64) -> Result<Rect, RectError> {
        let edges = [top, left, bottom, right];
        if edges.iter().any(|e| e.is_nan()) {
            Err(RectError::NaN)
        } else if edges.iter().any(|e| e.is_infinite()) {
            Err(RectError::Infinite)
        } else if bottom < top || right < left {
            Err(RectError::Inverted)
        } else {
            Ok(Rect::new(top, left, bottom, right))
        }
    }

    /// Rect from a top-left origin and a size.
    #[inline]
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Rect {
        Rect {
            top: origin.y,
            left: origin.x,
            bottom: origin.y + size.y,
            right: origin.x + size.x,
        }
    }

    /// Rect of the given size centered on `center`.
    #[inline]
    pub fn from_center_size(center: DVec2, size: DVec2) -> Rect {
        Rect::from_origin_size(center - size / 2.0, size)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> DVec2 {
        dvec2(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        dvec2(self.width(), self.height())
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        dvec2(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// This rect moved by `delta`.
    pub fn translated(&self, delta: DVec2) -> Rect {
        Rect {
            top: self.top + delta.y,
            left: self.left + delta.x,
            bottom: self.bottom + delta.y,
            right: self.right + delta.x,
        }
    }

    /// This rect shrunk by `amount` on all four edges. A negative amount
    /// grows it. Over-insetting past the center yields an inverted rect,
    /// same contract as `width`/`height`.
    pub fn inset(&self, amount: f64) -> Rect {
        Rect {
            top: self.top + amount,
            left: self.left + amount,
            bottom: self.bottom - amount,
            right: self.right - amount,
        }
    }

    /// Edge-inclusive containment of `other` in `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// A rect with this one's size, repositioned so its center coincides
    /// with the center of `outer`.
    ///
    /// When `self` fits inside `outer` the result is fully contained. A
    /// larger rect extends past `outer` without clamping, which is what
    /// "center on page" means for an oversized frame.
    pub fn centered_in(&self, outer: &Rect) -> Rect {
        self.aligned_in(outer, HAlign::Center, VAlign::Center)
    }

    /// A rect with this one's size, snapped flush to the named edges of
    /// `outer` (or centered per axis).
    pub fn aligned_in(&self, outer: &Rect, h: HAlign, v: VAlign) -> Rect {
        let size = self.size();
        let left = match h {
            HAlign::Left => outer.left,
            HAlign::Center => outer.left + (outer.width() - size.x) / 2.0,
            HAlign::Right => outer.right - size.x,
        };
        let top = match v {
            VAlign::Top => outer.top,
            VAlign::Center => outer.top + (outer.height() - size.y) / 2.0,
            VAlign::Bottom => outer.bottom - size.y,
        };
        Rect::from_origin_size(dvec2(left, top), size)
    }
}

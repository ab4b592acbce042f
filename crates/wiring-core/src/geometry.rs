//! Geometric primitives for placing diagram elements.
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Drawables in [`crate::draw`] work in SVG pixel space:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Diagram descriptors are authored in drawing units with Y pointing up; the
//! renderer maps them into this space before anything is drawn.

/// A 2D point.
///
/// `new` is a `const fn` so literal layouts can be written as constants.
///
/// # Examples
///
/// ```
/// # use wiring_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Converts a point and size into bounds centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// In drawing units (Y up) `min_y` is the bottom edge; in pixel space (Y
/// down) it is the top edge. `Bounds` itself does not care which.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds spanning the two given corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from its minimum corner and a size
    pub fn new_from_min_point(min: Point, size: Size) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: min.x + size.width,
            max_y: min.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the minimum corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wiring_core::geometry::{Bounds, Point, Size};
    /// let header = Bounds::new_from_min_point(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let content = Bounds::new_from_min_point(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = header.merge(&content);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.min_y(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds outward by the given insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Spacing around an element with potentially different values per side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

//! Cell grid and model space, and the projection between them.
//!
//! The origin of the cell grid is in the top-left corner, `x` grows to the right and `y` grows
//! downwards. Models live in their own unit-less space, centered in the origin, and reach the
//! grid only through a [`Projection`].

use {
  euclid::{Box2D, Point2D, Point3D},
  num_traits::Float
};

pub mod shapes;
pub use shapes::*;

/// Cell coordinate basis: native pixels or 8×8 character blocks, depending on the frame.
#[derive(Debug, Copy, Clone)]
pub struct CellSpace;
/// Model coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct ModelSpace;

pub type Cell = Point2D<i32, CellSpace>;
pub type P3<T> = Point3D<T, ModelSpace>;

/// Substituted for `z` when a point sits exactly on the camera plane.
pub const EPSILON: f32 = 0.01;

pub fn rotate_x<T: Float>(p: P3<T>, angle: T) -> P3<T> {
  let (sin, cos) = angle.sin_cos();
  P3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

pub fn rotate_y<T: Float>(p: P3<T>, angle: T) -> P3<T> {
  let (sin, cos) = angle.sin_cos();
  P3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

pub fn rotate_z<T: Float>(p: P3<T>, angle: T) -> P3<T> {
  let (sin, cos) = angle.sin_cos();
  P3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Euler angles, applied in X, Y, Z order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Spin {
  pub x: f32,
  pub y: f32,
  pub z: f32
}

impl Spin {
  pub fn apply(&self, p: P3<f32>) -> P3<f32> {
    rotate_z(rotate_y(rotate_x(p, self.x), self.y), self.z)
  }
}

/// Perspective projection onto the cell grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
  /// Camera distance from the model origin.
  pub distance: f32,
  pub scale: f32,
  pub offset: euclid::Vector2D<f32, CellSpace>,
  /// Projected cells are clamped into this box (inclusive).
  pub window: Option<Box2D<i32, CellSpace>>
}

impl Default for Projection {
  fn default() -> Self {
    Self {
      distance: 4.0,
      scale: 1.0,
      offset: euclid::Vector2D::zero(),
      window: None
    }
  }
}

impl Projection {
  /// Continuous screen position of a model point.
  pub fn project_f32(&self, p: P3<f32>) -> Point2D<f32, CellSpace> {
    let z = if p.z + self.distance == 0.0 { EPSILON } else { p.z };
    let factor = self.distance / (self.distance + z);
    Point2D::new(
      p.x * factor * self.scale + self.offset.x,
      p.y * factor * self.scale + self.offset.y
    )
  }

  /// Truncates toward zero, then clamps into `window`.
  pub fn project(&self, p: P3<f32>) -> Cell {
    let p = self.project_f32(p);
    let cell = Cell::new(p.x as i32, p.y as i32);
    match self.window {
      Some(window) => clamp_cell(cell, window),
      None => cell
    }
  }
}

pub fn clamp_cell(cell: Cell, window: Box2D<i32, CellSpace>) -> Cell {
  Cell::new(
    cell.x.clamp(window.min.x, window.max.x),
    cell.y.clamp(window.min.y, window.max.y)
  )
}

// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use epiphyte_view_state::LonLat;
use kurbo::{Point, Rect};

/// Parameters for picking the topmost object at a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickParams {
    /// Screen position in pixels, relative to the overlay surface.
    pub position: Point,
    /// Tolerance radius in pixels around `position`.
    pub radius: f64,
}

impl PickParams {
    /// A zero-radius pick at `position`.
    #[inline]
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position,
            radius: 0.0,
        }
    }
}

/// Parameters for picking every visible object inside a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickAreaParams {
    /// Screen rectangle in pixels, relative to the overlay surface.
    pub rect: Rect,
}

/// Parameters for picking multiple stacked objects at a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickMultiParams {
    /// Screen position in pixels, relative to the overlay surface.
    pub position: Point,
    /// Tolerance radius in pixels around `position`.
    pub radius: f64,
    /// Maximum number of stacked objects to return.
    pub depth: usize,
}

impl Default for PickMultiParams {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            radius: 0.0,
            depth: 10,
        }
    }
}

/// One picked object.
#[derive(Clone, Debug, PartialEq)]
pub struct PickInfo {
    /// Identifier of the layer the object belongs to.
    pub layer_id: String,
    /// Index of the object within its layer.
    pub index: usize,
    /// Screen position the pick resolved to, in pixels.
    pub position: Point,
    /// Geographic position, when the layer can invert the projection.
    pub coordinate: Option<LonLat>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::{PickMultiParams, PickParams};

    #[test]
    fn point_pick_defaults_to_zero_radius() {
        let params = PickParams::at(Point::new(10.0, 20.0));
        assert_eq!(params.radius, 0.0);
        assert_eq!(params.position, Point::new(10.0, 20.0));
    }

    #[test]
    fn multi_pick_defaults_to_depth_ten() {
        assert_eq!(PickMultiParams::default().depth, 10);
    }
}

// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::projection;

/// A geographic position in degrees.
///
/// Longitude first, matching the `[lng, lat]` coordinate order renderers
/// use for world positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LonLat {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl LonLat {
    /// Creates a position from longitude and latitude in degrees.
    #[inline]
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Camera parameters as reported by a host map.
///
/// This is the host's own vocabulary: `heading` and `tilt` rather than the
/// renderer's `bearing` and `pitch`, and zoom on the host's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostCameraParams {
    /// Latitude of the camera target, in degrees.
    pub latitude: f64,
    /// Longitude of the camera target, in degrees.
    pub longitude: f64,
    /// Compass direction the camera faces, in degrees clockwise from north.
    pub heading: f64,
    /// Camera angle away from straight down, in degrees.
    pub tilt: f64,
    /// Zoom level on the host's scale.
    pub zoom: f64,
}

/// Normalized camera state consumed by a renderer for one frame.
///
/// Derived fresh on every draw tick by [`extract_view_state`]; it carries no
/// identity beyond the frame it was extracted for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Latitude of the camera target, in degrees.
    pub latitude: f64,
    /// Longitude of the camera target, in degrees.
    pub longitude: f64,
    /// Zoom level on the renderer's scale.
    pub zoom: f64,
    /// Rotation in degrees clockwise from north.
    pub bearing: f64,
    /// Camera angle away from straight down, in degrees.
    pub pitch: f64,
    /// Camera altitude in screen heights.
    pub altitude: f64,
    /// Vertical field of view in degrees, where the host fixes one.
    pub field_of_view: Option<f64>,
    /// Near clip plane distance as a multiple of the viewport height.
    pub near_clip_multiplier: f64,
    /// Far clip plane distance as a multiple of the viewport height.
    pub far_clip_multiplier: f64,
}

impl CameraState {
    /// Placeholder camera for a renderer that has not yet seen a draw tick.
    ///
    /// World origin at the renderer's base zoom, with a zero-sized viewport.
    /// The first extracted frame overwrites all of it.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            width: 0,
            height: 0,
            latitude: 0.0,
            longitude: 0.0,
            zoom: 1.0,
            bearing: 0.0,
            pitch: 0.0,
            altitude: projection::focal_altitude(),
            field_of_view: Some(projection::FIELD_OF_VIEW_DEGREES),
            near_clip_multiplier: projection::NEAR_CLIP_MULTIPLIER,
            far_clip_multiplier: projection::FAR_CLIP_MULTIPLIER,
        }
    }

    /// Whether the viewport covers any pixels.
    ///
    /// A zero-sized camera is valid and occurs while host layout is still
    /// settling; renderers skip drawing for such frames.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Derives the renderer camera for one frame.
///
/// `surface` is the pixel size of the host's *rendering container*: the
/// promoted child surface the host composites into, not the outer widget
/// element. The two differ in fullscreen, and measuring the outer element
/// there misaligns every layer. A zero `surface` passes through unchanged;
/// see [`CameraState::has_area`].
///
/// The zoom offset and projection constants applied here are documented in
/// [`projection`].
#[must_use]
pub fn extract_view_state(params: HostCameraParams, surface: Size) -> CameraState {
    CameraState {
        width: pixel_extent(surface.width),
        height: pixel_extent(surface.height),
        latitude: params.latitude,
        longitude: params.longitude,
        zoom: params.zoom - projection::ZOOM_OFFSET,
        bearing: params.heading,
        pitch: params.tilt,
        altitude: projection::focal_altitude(),
        field_of_view: Some(projection::FIELD_OF_VIEW_DEGREES),
        near_clip_multiplier: projection::NEAR_CLIP_MULTIPLIER,
        far_clip_multiplier: projection::FAR_CLIP_MULTIPLIER,
    }
}

#[expect(clippy::cast_possible_truncation, reason = "clamped to u32 range first")]
fn pixel_extent(extent: f64) -> u32 {
    extent.clamp(0.0, f64::from(u32::MAX)).round() as u32
}

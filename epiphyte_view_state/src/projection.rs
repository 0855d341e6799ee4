// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constants matching the host map compositor's projection.
//!
//! The host composes its base map with a fixed vertical field of view and
//! near/far clip planes expressed as multiples of the viewport height. A
//! renderer drawing into the same frame must build its projection from the
//! same values or geometry drifts off the base map with tilt and zoom.
//!
//! These values are empirical properties of the host, observed across its
//! API revisions. They are matched exactly, including where the host rounds
//! through single precision.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Offset subtracted from the host zoom level to obtain the renderer zoom
/// level.
///
/// The host's level 0 shows the world in 512 logical pixels where the
/// renderer's level 0 uses 256, so host level `N` corresponds to renderer
/// level `N - 1` for every finite `N`. This is a fixed property of the two
/// scales, not a tunable.
pub const ZOOM_OFFSET: f64 = 1.0;

/// Vertical field of view of the host compositor's projection, in degrees.
///
/// The host uses this fixed angle regardless of the nominal camera
/// altitude. [`focal_altitude`] derives the matching focal distance.
pub const FIELD_OF_VIEW_DEGREES: f64 = 25.0;

/// Near clip plane distance as a multiple of the viewport height.
///
/// The host computes one third in single precision and widens it, so the
/// matching value is `f64::from(1.0_f32 / 3.0_f32)`, not the closest f64 to
/// the rational 1/3. Using the exact rational shifts the near plane by
/// roughly one part in 10^8, enough to open a sub-pixel seam against the
/// base map at high tilt.
pub const NEAR_CLIP_MULTIPLIER: f64 = 0.333_333_343_267_440_8;

/// Far clip plane distance as a multiple of the viewport height.
///
/// The largest value that still leaves a 32-bit depth buffer enough
/// precision for stable z-sorting at street-level zoom.
pub const FAR_CLIP_MULTIPLIER: f64 = 3.0e14;

/// Camera altitude, in screen heights, matching [`FIELD_OF_VIEW_DEGREES`].
///
/// This is the focal distance of the host's projection: the altitude at
/// which a plane of one screen height exactly fills the viewport under the
/// fixed field of view, so `2 * tan(fov / 2) * altitude == 1`.
#[must_use]
pub fn focal_altitude() -> f64 {
    1.0 / (2.0 * (0.5 * FIELD_OF_VIEW_DEGREES.to_radians()).tan())
}

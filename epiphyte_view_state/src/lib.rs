// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_view_state --heading-base-level=0

//! Epiphyte View State: camera normalization between a host map and a renderer.
//!
//! This crate provides the pure, per-frame translation from a host map's
//! camera representation into the [`CameraState`] a visualization renderer
//! consumes. It focuses on:
//! - Field mapping (`heading` → `bearing`, `tilt` → `pitch`).
//! - The fixed zoom offset between host and renderer zoom scales.
//! - The projection-matching constants (field of view, focal altitude,
//!   near/far clip multipliers) that keep renderer output pixel-aligned
//!   with the host's own projection.
//!
//! It does **not** own any renderer or host handle. Callers are expected to:
//! - Query the host for its camera parameters each draw tick.
//! - Measure the host's *rendering container* (the promoted child surface,
//!   not the outer widget element, so fullscreen is handled correctly).
//! - Call [`extract_view_state`] and push the result into the renderer.
//!
//! ## Example
//!
//! ```rust
//! use epiphyte_view_state::{HostCameraParams, extract_view_state};
//! use kurbo::Size;
//!
//! let host = HostCameraParams {
//!     latitude: 40.72,
//!     longitude: -74.0,
//!     heading: 0.0,
//!     tilt: 45.0,
//!     zoom: 14.0,
//! };
//! let camera = extract_view_state(host, Size::new(800.0, 600.0));
//! assert_eq!(camera.zoom, 13.0);
//! assert_eq!(camera.bearing, 0.0);
//! assert_eq!(camera.pitch, 45.0);
//! ```
//!
//! ## Design notes
//!
//! - Extraction is a pure function with no state; a fresh [`CameraState`]
//!   is derived every frame and nothing is cached between frames.
//! - A zero-sized container is passed through as a zero-sized camera. Host
//!   layout may not have finished on early frames and that is not an error.
//! - The constants in [`projection`] are empirical properties of the host's
//!   compositor and are matched bit-for-bit where the host rounds through
//!   single precision. They are not derived from first principles here.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
pub mod projection;

pub use camera::{CameraState, HostCameraParams, LonLat, extract_view_state};

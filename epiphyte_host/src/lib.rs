// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_host --heading-base-level=0

//! Epiphyte Host: the boundary between the overlay adapter and a host map.
//!
//! The host map is a foreign widget: it owns the camera, the input stream,
//! the GL context, and the compositor schedule. This crate defines the
//! narrow services the overlay machinery needs from it, as traits and plain
//! data:
//!
//! - **[`HostMap`]**: container measurement, input listener registration
//!   ([`ListenerToken`]), overlay surface management ([`SurfaceId`],
//!   [`SurfaceStyle`]), and redraw requests.
//! - **[`CameraQuery`]**: the per-frame coordinate transformer a host hands
//!   to draw callbacks, exposing camera parameters and geographic
//!   projection.
//! - **[`HostEvent`]**: the four input events the overlay bridges to a
//!   renderer, with the pixel position optional because some host event
//!   sources (point-of-interest clicks) report only a geographic position.
//! - **[`DrawPayload`]** and **[`OverlayContract`]**: host API generations
//!   differ in what a draw callback delivers (a transformer vs raw
//!   matrices); one payload enum covers both so a single adapter serves
//!   every generation.
//!
//! Embedders implement these traits over the real widget and route its
//! overlay lifecycle callbacks into `epiphyte_overlay`. `epiphyte_ref`
//! provides recording implementations for tests.
//!
//! This crate is `no_std`.

#![no_std]

mod contract;
mod events;
mod map;
mod surface;

pub use epiphyte_view_state::{HostCameraParams, LonLat};

pub use contract::{CameraQuery, DrawPayload, OverlayContract};
pub use events::{HostEvent, HostEventKind};
pub use map::{HostMap, ListenerToken, SurfaceId};
pub use surface::SurfaceStyle;

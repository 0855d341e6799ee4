// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_scene --heading-base-level=0

//! Epiphyte Scene: the boundary between the overlay adapter and a renderer.
//!
//! This crate defines what the overlay machinery in `epiphyte_overlay`
//! needs from a visualization renderer, as plain data plus one trait:
//!
//! - **[`SceneRenderer`]**: props, redraw, picking, pointer events,
//!   geographic projection, and teardown. Implementations wrap a real
//!   renderer; `epiphyte_ref` provides a recording one for tests.
//! - **[`ScenePatch`]**: a partial prop update. Only the props the overlay
//!   core itself drives are modeled; layer definitions and data loading
//!   belong to the embedder and never pass through this crate.
//! - **[`SceneDescriptor`]**: creation-time configuration for a renderer
//!   bound to a host map (controller off, placeholder camera, clean-room
//!   GL parameters, external-context markers).
//! - **Picking** ([`PickParams`], [`PickAreaParams`], [`PickMultiParams`],
//!   [`PickInfo`]) and **pointer events** ([`SceneEvent`]) in the shapes
//!   the host event bridges produce.
//!
//! # Position in the stack
//!
//! `epiphyte_overlay` drives this trait on every host callback. The
//! renderer draws into a GL context it does not own, which is why
//! [`SceneRenderer::redraw`] receives the context for the frame and a
//! [`RedrawRequest`] stating what it may clear.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod event;
mod pick;
mod props;
mod renderer;

pub use event::{SceneEvent, SceneEventKind};
pub use pick::{PickAreaParams, PickInfo, PickMultiParams, PickParams};
pub use props::{LayerFilter, RedrawReason, RedrawRequest, SceneDescriptor, ScenePatch};
pub use renderer::SceneRenderer;

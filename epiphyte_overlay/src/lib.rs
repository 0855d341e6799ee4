// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_overlay --heading-base-level=0

//! Epiphyte Overlay: keep a GPU visualization renderer aligned with a host
//! map widget.
//!
//! The host map owns the camera, the input stream, and the GL context; the
//! renderer just wants a viewport and a draw call. [`OverlayAdapter`] sits
//! between them and, on every host-triggered frame:
//!
//! 1. extracts the host camera into renderer view state
//!    (`epiphyte_view_state`),
//! 2. pushes it and the container size into the renderer
//!    (`epiphyte_scene`),
//! 3. runs the renderer's draw inside a GL reconciliation scope
//!    (`epiphyte_gl_state`) so two renderers sharing one context cannot
//!    corrupt each other,
//! 4. requests one host recomposite when the camera changed, refreshing
//!    hosts that cache the previous frame's transform.
//!
//! [`RendererInstance`] carries the bookkeeping that binds a renderer to
//! one map: the overlay surface, the four input listeners, and the event
//! bridges that translate host mouse events into renderer pointer events
//! (including the pick a click needs because the renderer never saw the
//! pointer go down).
//!
//! # Example
//!
//! ```ignore
//! let mut adapter = OverlayAdapter::with_props(OverlayProps::default());
//! adapter.set_map(Some(Rc::clone(&map)));
//! // Route the host's overlay callbacks:
//! adapter.on_context_available(&mut gl, |gl, descriptor| MyRenderer::new(gl, descriptor));
//! adapter.on_draw(&mut gl, &DrawPayload::Transformer(&transformer));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod adapter;
mod instance;
mod props;
mod trace;

pub use adapter::{OverlayAdapter, OverlayState};
pub use instance::RendererInstance;
pub use props::OverlayProps;
pub use trace::{FrameRecorder, OverlayTrace};

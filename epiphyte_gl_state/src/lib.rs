// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_gl_state --heading-base-level=0

//! Epiphyte GL State: parameter reconciliation between renderers sharing a GL context.
//!
//! When an overlay renderer draws interleaved with a host compositor, both
//! sides mutate the same GL context. Neither can assume anything about the
//! parameter state it inherits, and neither may leak its own state to the
//! other. This crate provides the scoping and diagnostics for that contract:
//!
//! - **Parameter model**: [`GlParameter`] names a fixed set of state keys
//!   (blend, depth, scissor, stencil, cull, framebuffer bindings) and
//!   [`GlValue`] their tagged values, with symbolic GL names resolved
//!   through static tables rather than per-frame lookups.
//! - **Snapshots**: [`GlStateSnapshot`] captures all keys from a
//!   [`GlContext`] at once and supports key-wise comparison.
//! - **Clean-room scoping**: [`reconcile`] applies the fixed
//!   [`DrawParameters`] a compositing overlay needs (depth on, premultiplied
//!   alpha blending, default framebuffer), runs the wrapped draw, then
//!   restores every key it touched to its prior value.
//! - **Drift diagnostics**: [`reconcile_with_trace`] feeds a [`DriftRow`]
//!   per disagreeing key (old / pre / post / reset) to a [`DriftSink`];
//!   [`DriftTable`] collects rows and renders an aligned text table.
//!
//! Diagnostics never affect control flow: a drifting context still draws,
//! and the report is the only place the drift is visible.
//!
//! # Position in the stack
//!
//! This crate knows nothing about cameras, maps, or renderers. The overlay
//! adapter in `epiphyte_overlay` wraps each host draw tick in [`reconcile`];
//! renderer backends implement [`GlContext`] over their real context, and
//! `epiphyte_ref` provides a recording implementation for tests.
//!
//! # Example
//!
//! A minimal sketch of wrapping a foreign draw looks like:
//!
//! ```ignore
//! # use epiphyte_gl_state::*;
//! # struct MyContext { /* implements GlContext */ }
//! let mut gl = MyContext { /* ... */ };
//!
//! let params = DrawParameters::default();
//! let mut table = DriftTable::new();
//! let report = reconcile_with_trace(&mut gl, &params, |gl| renderer.redraw(gl), &mut table);
//!
//! if !table.is_empty() {
//!     println!("{table}");
//! }
//! assert!(report.leaked().next().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod parameters;
mod reconcile;
mod snapshot;
pub mod trace;

pub use parameters::{
    BlendEquation, BlendFactor, ClearMask, CompareFunc, FramebufferId, GlParameter, GlValue,
};
pub use reconcile::{DrawParameters, DriftRow, FrameReport, reconcile, reconcile_with_trace};
pub use snapshot::{GlContext, GlStateSnapshot};
pub use trace::{DriftSink, DriftTable};

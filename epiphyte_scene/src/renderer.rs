// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use epiphyte_gl_state::GlContext;
use epiphyte_view_state::LonLat;
use kurbo::Point;

use crate::event::SceneEvent;
use crate::pick::{PickAreaParams, PickInfo, PickMultiParams, PickParams};
use crate::props::{RedrawRequest, ScenePatch};

/// A visualization renderer driven by the overlay adapter.
///
/// Implementations wrap a concrete renderer. The adapter calls every method
/// synchronously from host callbacks; nothing here may block or defer.
///
/// Picking on a renderer that has nothing loaded yet must return
/// `None`/empty rather than fail; the adapter relies on picks being benign
/// in every state.
pub trait SceneRenderer {
    /// Applies a partial prop update.
    fn set_props(&mut self, patch: ScenePatch);

    /// Draws a frame into `gl`.
    ///
    /// `gl` is the shared context for this frame; the caller has already
    /// scoped its parameter state. `request.clear` says which buffers the
    /// renderer may clear, and is empty for draws interleaved with the
    /// host's own frame.
    fn redraw(&mut self, gl: &mut dyn GlContext, request: RedrawRequest);

    /// Picks the topmost object at a point, if any.
    fn pick_object(&mut self, params: &PickParams) -> Option<PickInfo>;

    /// Picks every visible object inside a rectangle.
    fn pick_objects(&mut self, params: &PickAreaParams) -> Vec<PickInfo>;

    /// Picks up to `params.depth` stacked objects at a point.
    fn pick_multiple_objects(&mut self, params: &PickMultiParams) -> Vec<PickInfo>;

    /// Delivers a pointer event.
    fn dispatch_event(&mut self, event: SceneEvent);

    /// Projects a geographic position to overlay-surface pixels.
    ///
    /// Returns `None` before the renderer has a viewport, which the event
    /// bridges treat as "drop the event".
    fn project(&self, position: LonLat) -> Option<Point>;

    /// Releases every resource. The renderer is unusable afterwards.
    fn finalize(&mut self);
}

// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay adapter: one value implementing the host's overlay
//! lifecycle over one renderer.
//!
//! The embedder routes the host's callbacks into [`OverlayAdapter::on_add`],
//! [`OverlayAdapter::on_context_available`], [`OverlayAdapter::on_remove`],
//! [`OverlayAdapter::on_draw`], and [`OverlayAdapter::handle_event`], and
//! drives binding through [`OverlayAdapter::set_map`]. Host API generations
//! that deliver camera data differently are served by the same adapter: the
//! draw callback's [`DrawPayload`] says what arrived, and the adapter reads
//! whichever form it is.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use epiphyte_gl_state::{FrameReport, GlContext, reconcile};
use epiphyte_host::{DrawPayload, HostEvent, HostMap};
use epiphyte_scene::{
    LayerFilter, PickAreaParams, PickInfo, PickMultiParams, PickParams, RedrawRequest,
    SceneDescriptor, ScenePatch, SceneRenderer,
};
use epiphyte_view_state::{CameraState, extract_view_state};

use crate::instance::RendererInstance;
use crate::props::OverlayProps;
use crate::trace::{OverlayTrace, SilentTrace};

/// Where an adapter is in the overlay lifecycle.
///
/// ```text
/// Unbound --set_map(Some)--> Bound --on_context_available--> Active
///   Active --on_remove--> Suspended --on_add--> Active
///   any but Finalized --set_map--> Unbound | Bound
///   any --finalize--> Finalized
/// ```
///
/// `Suspended` means the host removed the overlay but may re-add it: the
/// renderer is retained with every layer hidden, so GPU resources survive
/// the round trip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayState {
    /// No host map is bound.
    Unbound,
    /// A map is bound; the host has not delivered a GL context yet.
    Bound,
    /// A renderer instance is live and drawing.
    Active,
    /// The host removed the overlay; the renderer is retained, hidden.
    Suspended,
    /// Terminal. Everything is released; picks return empty.
    Finalized,
}

/// Keeps one renderer pixel-aligned with one host map.
///
/// On every draw tick the adapter extracts the host camera into renderer
/// view state, pushes it with the container size into the renderer, runs
/// the renderer's draw inside a GL reconciliation scope, and nudges the
/// host to recomposite once whenever the camera actually changed, which
/// refreshes hosts that cache the previous frame's transform.
#[derive(Debug)]
pub struct OverlayAdapter<R, H> {
    state: OverlayState,
    map: Option<Rc<RefCell<H>>>,
    instance: Option<RendererInstance<R, H>>,
    props: OverlayProps,
    last_camera: Option<CameraState>,
    last_view_projection: Option<[f64; 16]>,
}

impl<R, H> OverlayAdapter<R, H>
where
    R: SceneRenderer,
    H: HostMap,
{
    /// An unbound adapter with empty props.
    #[must_use]
    pub fn new() -> Self {
        Self::with_props(OverlayProps::empty())
    }

    /// An unbound adapter that will create its renderer with `props`.
    #[must_use]
    pub fn with_props(props: OverlayProps) -> Self {
        Self {
            state: OverlayState::Unbound,
            map: None,
            instance: None,
            props,
            last_camera: None,
            last_view_projection: None,
        }
    }

    /// The adapter's position in the lifecycle.
    #[must_use]
    pub const fn state(&self) -> OverlayState {
        self.state
    }

    /// The retained props, as merged so far.
    #[must_use]
    pub fn props(&self) -> &OverlayProps {
        &self.props
    }

    /// The bound host map, if any.
    #[must_use]
    pub fn map(&self) -> Option<&Rc<RefCell<H>>> {
        self.map.as_ref()
    }

    /// Binds the adapter to a map, to a different map, or to none.
    ///
    /// Rebinding to the pointer-identical map is a no-op. Any other change
    /// releases the live instance first (listeners, surface, renderer),
    /// then records the new binding; with a live instance on map A,
    /// `set_map(None)` is the synchronous full teardown. A finalized
    /// adapter stays finalized.
    pub fn set_map(&mut self, map: Option<Rc<RefCell<H>>>) {
        if self.state == OverlayState::Finalized {
            debug_assert!(map.is_none(), "a finalized adapter cannot be rebound");
            return;
        }
        if let (Some(current), Some(next)) = (&self.map, &map) {
            if Rc::ptr_eq(current, next) {
                return;
            }
        }

        if let Some(instance) = self.instance.take() {
            instance.release();
        }
        self.last_camera = None;
        self.last_view_projection = None;
        self.map = map;
        self.state = if self.map.is_some() {
            OverlayState::Bound
        } else {
            OverlayState::Unbound
        };
    }

    /// Merges `props` into the retained props and applies them.
    ///
    /// The `style` member addresses the overlay's host surface and is
    /// applied there; the renderer receives only the scene patch. With no
    /// live instance the props are buffered and applied at creation.
    pub fn set_props(&mut self, props: OverlayProps) {
        let OverlayProps { scene, style } = props;
        self.props.scene.merge(scene.clone());

        if let Some(style) = style {
            self.props.style = Some(match self.props.style {
                Some(current) => current.merge(style),
                None => style,
            });
            if let Some(instance) = &self.instance {
                instance
                    .map()
                    .borrow_mut()
                    .style_surface(instance.surface(), &style);
            }
        }

        if let Some(instance) = &mut self.instance {
            instance.renderer_mut().set_props(scene);
        }
    }

    /// Host callback: the overlay was added to the map.
    ///
    /// A suspended adapter becomes active again, restoring the layer
    /// filter from the retained props.
    pub fn on_add(&mut self) {
        match self.state {
            OverlayState::Bound | OverlayState::Active => {}
            OverlayState::Suspended => self.resume(),
            OverlayState::Unbound | OverlayState::Finalized => {
                debug_assert!(false, "on_add delivered without a bound map");
            }
        }
    }

    /// Host callback: a GL context is available for the overlay.
    ///
    /// Acquires the renderer instance (idempotently when one is already
    /// bound to this map) and makes the adapter active. `create` builds
    /// the renderer from the host-bound [`SceneDescriptor`] contract; it
    /// runs only when a new instance is actually needed.
    pub fn on_context_available<F>(&mut self, gl: &mut dyn GlContext, create: F)
    where
        F: FnOnce(&mut dyn GlContext, SceneDescriptor) -> R,
    {
        let Some(map) = &self.map else {
            debug_assert!(false, "a GL context arrived without a bound map");
            return;
        };
        let existing = self.instance.take();
        let instance = RendererInstance::acquire(map, gl, existing, &self.props, create);
        self.instance = Some(instance);
        if self.state == OverlayState::Suspended {
            self.resume();
        } else {
            self.state = OverlayState::Active;
        }
    }

    /// Host callback: the overlay was removed from the map.
    ///
    /// The renderer and its resources are retained so the host can re-add
    /// the overlay cheaply; its layers are hidden until then.
    pub fn on_remove(&mut self) {
        if let Some(instance) = &mut self.instance {
            instance.renderer_mut().set_props(ScenePatch {
                layer_filter: Some(LayerFilter::HideAll),
                ..ScenePatch::default()
            });
            self.state = OverlayState::Suspended;
        }
    }

    /// Host callback: draw one frame.
    ///
    /// Extracts the camera from `payload`, pushes it and the container
    /// size into the renderer, and redraws inside a reconciliation scope
    /// so renderer and host cannot corrupt each other's GL state. When the
    /// camera changed since the previous frame, exactly one host redraw is
    /// requested.
    ///
    /// Returns the GL drift report for the frame, or `None` when no
    /// renderer instance is live.
    pub fn on_draw(
        &mut self,
        gl: &mut dyn GlContext,
        payload: &DrawPayload<'_>,
    ) -> Option<FrameReport> {
        self.on_draw_with_trace(gl, payload, &mut SilentTrace)
    }

    /// [`Self::on_draw`], reporting camera and matrix changes to `trace`.
    pub fn on_draw_with_trace<T>(
        &mut self,
        gl: &mut dyn GlContext,
        payload: &DrawPayload<'_>,
        trace: &mut T,
    ) -> Option<FrameReport>
    where
        T: OverlayTrace + ?Sized,
    {
        let map = Rc::clone(self.map.as_ref()?);
        let instance = self.instance.as_mut()?;

        if let Some(matrix) = payload.view_projection() {
            if self.last_view_projection != Some(matrix) {
                trace.view_projection_changed(self.last_view_projection.as_ref(), &matrix);
                self.last_view_projection = Some(matrix);
            }
        }

        let surface = map.borrow().content_size();
        let camera = extract_view_state(payload.camera_params(), surface);
        let camera_changed = self.last_camera != Some(camera);

        let renderer = instance.renderer_mut();
        renderer.set_props(ScenePatch {
            width: Some(camera.width),
            height: Some(camera.height),
            view_state: Some(camera),
            ..ScenePatch::default()
        });

        let parameters = self.props.scene.parameters.clone().unwrap_or_default();
        let report = reconcile(gl, &parameters, |gl| {
            renderer.redraw(gl, RedrawRequest::interleaved());
        });

        trace.camera_pushed(&camera, camera_changed);
        if camera_changed {
            self.last_camera = Some(camera);
            map.borrow_mut().request_redraw();
        }

        Some(report)
    }

    /// Routes a host input event to the live renderer, if any.
    pub fn handle_event(&mut self, event: &HostEvent) {
        if let Some(instance) = &mut self.instance {
            instance.handle_event(event);
        }
    }

    /// Picks the topmost object at a point. `None` with no live renderer.
    #[must_use]
    pub fn pick_object(&mut self, params: &PickParams) -> Option<PickInfo> {
        self.instance.as_mut()?.renderer_mut().pick_object(params)
    }

    /// Picks every visible object in a rectangle. Empty with no live
    /// renderer.
    #[must_use]
    pub fn pick_objects(&mut self, params: &PickAreaParams) -> Vec<PickInfo> {
        match &mut self.instance {
            Some(instance) => instance.renderer_mut().pick_objects(params),
            None => Vec::new(),
        }
    }

    /// Picks stacked objects at a point. Empty with no live renderer.
    #[must_use]
    pub fn pick_multiple_objects(&mut self, params: &PickMultiParams) -> Vec<PickInfo> {
        match &mut self.instance {
            Some(instance) => instance.renderer_mut().pick_multiple_objects(params),
            None => Vec::new(),
        }
    }

    /// Releases everything and makes the adapter terminal.
    ///
    /// The four listeners come off the map exactly once; calling this
    /// again is a no-op because the instance slot is already empty.
    pub fn finalize(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.release();
        }
        self.map = None;
        self.last_camera = None;
        self.last_view_projection = None;
        self.state = OverlayState::Finalized;
    }

    /// Makes a retained renderer visible again and the adapter active.
    fn resume(&mut self) {
        if let Some(instance) = &mut self.instance {
            let filter = self.props.scene.layer_filter.unwrap_or_default();
            instance.renderer_mut().set_props(ScenePatch {
                layer_filter: Some(filter),
                ..ScenePatch::default()
            });
        }
        self.state = OverlayState::Active;
    }
}

impl<R, H> Default for OverlayAdapter<R, H>
where
    R: SceneRenderer,
    H: HostMap,
{
    fn default() -> Self {
        Self::new()
    }
}

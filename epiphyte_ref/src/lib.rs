// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=epiphyte_ref --heading-base-level=0

//! Epiphyte Reference Implementations.
//!
//! This crate provides small, stateful implementations of the Epiphyte
//! boundary traits for **call recording and state tracing**:
//!
//! - [`RefScene`] implements [`SceneRenderer`],
//! - [`SharedScene`] is a cloneable handle to a [`RefScene`], for tests
//!   that must keep inspecting a renderer the overlay has taken ownership
//!   of,
//! - [`RefHost`] implements [`HostMap`],
//! - [`RefCamera`] implements [`CameraQuery`],
//! - [`RefGl`] implements [`GlContext`].
//!
//! It is intentionally *not* a working renderer or map:
//! - Nothing rasterizes and no widget exists.
//! - Picks and projections return whatever a test scripted.
//! - Every call is logged, so tests can assert on what the overlay
//!   machinery did and on the state it left behind.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};

use hashbrown::HashMap;
use kurbo::{Point, Size};

use epiphyte_gl_state::{
    BlendEquation, BlendFactor, CompareFunc, GlContext, GlParameter, GlValue,
};
use epiphyte_host::{
    CameraQuery, HostCameraParams, HostEventKind, HostMap, ListenerToken, LonLat, SurfaceId,
    SurfaceStyle,
};
use epiphyte_scene::{
    PickAreaParams, PickInfo, PickMultiParams, PickParams, RedrawRequest, SceneEvent, ScenePatch,
    SceneRenderer,
};

/// A GL context as a value: parameter storage plus a mutation log.
///
/// Parameters that were never set read back as the boot state of a fresh
/// GL context (blending off, depth test off but depth writes on, default
/// framebuffer bound).
#[derive(Clone, Debug, Default)]
pub struct RefGl {
    values: HashMap<GlParameter, GlValue>,
    sets: Vec<(GlParameter, GlValue)>,
}

impl RefGl {
    /// A context in the boot state with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value `parameter` has in a fresh context.
    #[must_use]
    pub fn boot_value(parameter: GlParameter) -> GlValue {
        match parameter {
            GlParameter::Blend
            | GlParameter::DepthTest
            | GlParameter::StencilTest
            | GlParameter::ScissorTest
            | GlParameter::CullFace => GlValue::Toggle(false),
            GlParameter::DepthWritemask => GlValue::Toggle(true),
            GlParameter::BlendSrcRgb | GlParameter::BlendSrcAlpha => {
                GlValue::Factor(BlendFactor::One)
            }
            GlParameter::BlendDstRgb | GlParameter::BlendDstAlpha => {
                GlValue::Factor(BlendFactor::Zero)
            }
            GlParameter::BlendEquationRgb | GlParameter::BlendEquationAlpha => {
                GlValue::Equation(BlendEquation::Add)
            }
            GlParameter::DepthFunc => GlValue::Compare(CompareFunc::Less),
            GlParameter::DrawFramebufferBinding | GlParameter::ReadFramebufferBinding => {
                GlValue::Framebuffer(None)
            }
        }
    }

    /// Every `set` call in order.
    #[must_use]
    pub fn set_log(&self) -> &[(GlParameter, GlValue)] {
        &self.sets
    }

    /// Clears the mutation log but keeps the parameter state.
    pub fn clear_log(&mut self) {
        self.sets.clear();
    }
}

impl GlContext for RefGl {
    fn get(&self, parameter: GlParameter) -> GlValue {
        self.values
            .get(&parameter)
            .copied()
            .unwrap_or_else(|| Self::boot_value(parameter))
    }

    fn set(&mut self, parameter: GlParameter, value: GlValue) {
        self.values.insert(parameter, value);
        self.sets.push((parameter, value));
    }
}

/// A renderer that records every call and answers with scripted data.
#[derive(Debug, Default)]
pub struct RefScene {
    props: ScenePatch,
    patches: Vec<ScenePatch>,
    redraws: Vec<RedrawRequest>,
    events: Vec<SceneEvent>,
    point_picks: Vec<PickParams>,
    area_picks: Vec<PickAreaParams>,
    multi_picks: Vec<PickMultiParams>,
    scripted_pick: Option<PickInfo>,
    scripted_picks: Vec<PickInfo>,
    draw_effects: Vec<(GlParameter, GlValue)>,
    projection_scale: Option<f64>,
    finalized: bool,
}

impl RefScene {
    /// A renderer with nothing scripted and nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `pick_object` answer `info` from now on.
    pub fn script_pick(&mut self, info: PickInfo) {
        self.scripted_pick = Some(info);
    }

    /// Makes the area and multi picks answer `picks` from now on.
    pub fn script_picks(&mut self, picks: Vec<PickInfo>) {
        self.scripted_picks = picks;
    }

    /// Makes every `redraw` set `parameter` to `value` on the frame's
    /// context, like a renderer that configures state as it draws.
    pub fn script_draw_effect(&mut self, parameter: GlParameter, value: GlValue) {
        self.draw_effects.push((parameter, value));
    }

    /// Gives the renderer a viewport: `project` maps a position to
    /// `(longitude, latitude) * scale`. Without this, `project` returns
    /// `None` like a renderer that has not drawn yet.
    pub fn enable_projection(&mut self, scale: f64) {
        self.projection_scale = Some(scale);
    }

    /// The merged result of every patch applied so far.
    #[must_use]
    pub fn props(&self) -> &ScenePatch {
        &self.props
    }

    /// Every patch in application order.
    #[must_use]
    pub fn patches(&self) -> &[ScenePatch] {
        &self.patches
    }

    /// Every redraw request in order.
    #[must_use]
    pub fn redraws(&self) -> &[RedrawRequest] {
        &self.redraws
    }

    /// Every dispatched pointer event in order.
    #[must_use]
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Every `pick_object` call in order.
    #[must_use]
    pub fn point_picks(&self) -> &[PickParams] {
        &self.point_picks
    }

    /// Whether `finalize` has been called.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl SceneRenderer for RefScene {
    fn set_props(&mut self, patch: ScenePatch) {
        self.props.merge(patch.clone());
        self.patches.push(patch);
    }

    fn redraw(&mut self, gl: &mut dyn GlContext, request: RedrawRequest) {
        self.redraws.push(request);
        for (parameter, value) in &self.draw_effects {
            gl.set(*parameter, *value);
        }
    }

    fn pick_object(&mut self, params: &PickParams) -> Option<PickInfo> {
        self.point_picks.push(*params);
        self.scripted_pick.clone()
    }

    fn pick_objects(&mut self, params: &PickAreaParams) -> Vec<PickInfo> {
        self.area_picks.push(*params);
        self.scripted_picks.clone()
    }

    fn pick_multiple_objects(&mut self, params: &PickMultiParams) -> Vec<PickInfo> {
        self.multi_picks.push(*params);
        self.scripted_picks.clone()
    }

    fn dispatch_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    fn project(&self, position: LonLat) -> Option<Point> {
        let scale = self.projection_scale?;
        Some(Point::new(
            position.longitude * scale,
            position.latitude * scale,
        ))
    }

    fn finalize(&mut self) {
        self.finalized = true;
    }
}

/// A cloneable handle to one shared [`RefScene`].
///
/// The overlay machinery takes ownership of the renderer it manages, and
/// releases it by value during teardown. A test that hands over a plain
/// [`RefScene`] loses its view of the recording at that moment; handing
/// over a clone of a `SharedScene` keeps the recording inspectable through
/// the other clone for the whole lifecycle, teardown included.
#[derive(Clone, Debug, Default)]
pub struct SharedScene(Rc<RefCell<RefScene>>);

impl SharedScene {
    /// A fresh scene with one handle on it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the shared scene.
    #[must_use]
    pub fn scene(&self) -> Ref<'_, RefScene> {
        self.0.borrow()
    }

    /// Write access to the shared scene, for scripting.
    #[must_use]
    pub fn scene_mut(&self) -> RefMut<'_, RefScene> {
        self.0.borrow_mut()
    }
}

impl SceneRenderer for SharedScene {
    fn set_props(&mut self, patch: ScenePatch) {
        self.0.borrow_mut().set_props(patch);
    }

    fn redraw(&mut self, gl: &mut dyn GlContext, request: RedrawRequest) {
        self.0.borrow_mut().redraw(gl, request);
    }

    fn pick_object(&mut self, params: &PickParams) -> Option<PickInfo> {
        self.0.borrow_mut().pick_object(params)
    }

    fn pick_objects(&mut self, params: &PickAreaParams) -> Vec<PickInfo> {
        self.0.borrow_mut().pick_objects(params)
    }

    fn pick_multiple_objects(&mut self, params: &PickMultiParams) -> Vec<PickInfo> {
        self.0.borrow_mut().pick_multiple_objects(params)
    }

    fn dispatch_event(&mut self, event: SceneEvent) {
        self.0.borrow_mut().dispatch_event(event);
    }

    fn project(&self, position: LonLat) -> Option<Point> {
        self.0.borrow().project(position)
    }

    fn finalize(&mut self) {
        self.0.borrow_mut().finalize();
    }
}

/// A host map that hands out tokens and records the bookkeeping.
///
/// Listener tokens and surface ids are live while registered; the add and
/// remove logs survive removal, so tests can assert both on the current
/// registration state and on the full history.
#[derive(Debug, Default)]
pub struct RefHost {
    size: Size,
    next_listener: u32,
    next_surface: u32,
    live_listeners: HashMap<u32, HostEventKind>,
    live_surfaces: HashMap<u32, SurfaceStyle>,
    added_listeners: Vec<(ListenerToken, HostEventKind)>,
    removed_listeners: Vec<ListenerToken>,
    attached_surfaces: Vec<SurfaceId>,
    detached_surfaces: Vec<SurfaceId>,
    redraw_requests: usize,
}

impl RefHost {
    /// A host whose rendering container measures `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Resizes the rendering container.
    pub fn set_content_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn live_listener_count(&self) -> usize {
        self.live_listeners.len()
    }

    /// Number of currently attached surfaces.
    #[must_use]
    pub fn live_surface_count(&self) -> usize {
        self.live_surfaces.len()
    }

    /// Every registration in order, including since-removed ones.
    #[must_use]
    pub fn added_listeners(&self) -> &[(ListenerToken, HostEventKind)] {
        &self.added_listeners
    }

    /// Every removal in order.
    #[must_use]
    pub fn removed_listeners(&self) -> &[ListenerToken] {
        &self.removed_listeners
    }

    /// Every surface attachment in order, including since-detached ones.
    #[must_use]
    pub fn attached_surfaces(&self) -> &[SurfaceId] {
        &self.attached_surfaces
    }

    /// Every surface detachment in order.
    #[must_use]
    pub fn detached_surfaces(&self) -> &[SurfaceId] {
        &self.detached_surfaces
    }

    /// The merged style of a currently attached surface.
    #[must_use]
    pub fn surface_style(&self, surface: SurfaceId) -> Option<&SurfaceStyle> {
        self.live_surfaces.get(&surface.0)
    }

    /// Number of redraws the overlay asked for.
    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }
}

impl HostMap for RefHost {
    fn content_size(&self) -> Size {
        self.size
    }

    fn add_listener(&mut self, kind: HostEventKind) -> ListenerToken {
        let token = ListenerToken(self.next_listener);
        self.next_listener += 1;
        self.live_listeners.insert(token.0, kind);
        self.added_listeners.push((token, kind));
        token
    }

    fn remove_listener(&mut self, token: ListenerToken) {
        self.live_listeners.remove(&token.0);
        self.removed_listeners.push(token);
    }

    fn attach_surface(&mut self, style: &SurfaceStyle) -> SurfaceId {
        let surface = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.live_surfaces.insert(surface.0, *style);
        self.attached_surfaces.push(surface);
        surface
    }

    fn style_surface(&mut self, surface: SurfaceId, style: &SurfaceStyle) {
        if let Some(current) = self.live_surfaces.get_mut(&surface.0) {
            *current = current.merge(*style);
        }
    }

    fn detach_surface(&mut self, surface: SurfaceId) {
        self.live_surfaces.remove(&surface.0);
        self.detached_surfaces.push(surface);
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}

/// A coordinate transformer that answers with settable camera data.
#[derive(Clone, Debug)]
pub struct RefCamera {
    params: HostCameraParams,
    matrix: Option<[f64; 16]>,
    projection_scale: Option<f64>,
}

impl RefCamera {
    /// A transformer reporting `params`, no matrix, no projection.
    #[must_use]
    pub fn new(params: HostCameraParams) -> Self {
        Self {
            params,
            matrix: None,
            projection_scale: None,
        }
    }

    /// The camera parameters currently reported.
    #[must_use]
    pub fn params(&self) -> HostCameraParams {
        self.params
    }

    /// Changes the reported camera parameters.
    pub fn set_params(&mut self, params: HostCameraParams) {
        self.params = params;
    }

    /// Sets or clears the reported view-projection matrix.
    pub fn set_matrix(&mut self, matrix: Option<[f64; 16]>) {
        self.matrix = matrix;
    }

    /// Makes `project` map a position to `(longitude, latitude) * scale`.
    pub fn enable_projection(&mut self, scale: f64) {
        self.projection_scale = Some(scale);
    }
}

impl CameraQuery for RefCamera {
    fn camera_params(&self) -> HostCameraParams {
        self.params
    }

    fn project(&self, position: LonLat) -> Option<Point> {
        let scale = self.projection_scale?;
        Some(Point::new(
            position.longitude * scale,
            position.latitude * scale,
        ))
    }

    fn view_projection_matrix(&self) -> Option<[f64; 16]> {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Size;

    use epiphyte_gl_state::{GlContext, GlParameter, GlValue};
    use epiphyte_host::{HostEventKind, HostMap, SurfaceStyle};
    use epiphyte_scene::{LayerFilter, ScenePatch, SceneRenderer};

    use super::{RefGl, RefHost, RefScene};

    #[test]
    fn gl_boot_state_matches_a_fresh_context() {
        let gl = RefGl::new();
        assert_eq!(gl.get(GlParameter::Blend), GlValue::Toggle(false));
        assert_eq!(gl.get(GlParameter::DepthWritemask), GlValue::Toggle(true));
        assert_eq!(
            gl.get(GlParameter::DrawFramebufferBinding),
            GlValue::Framebuffer(None)
        );
    }

    #[test]
    fn gl_logs_mutations_and_retains_state() {
        let mut gl = RefGl::new();
        gl.set(GlParameter::Blend, GlValue::Toggle(true));
        assert_eq!(gl.get(GlParameter::Blend), GlValue::Toggle(true));
        assert_eq!(gl.set_log(), [(GlParameter::Blend, GlValue::Toggle(true))]);

        gl.clear_log();
        assert!(gl.set_log().is_empty());
        assert_eq!(gl.get(GlParameter::Blend), GlValue::Toggle(true));
    }

    #[test]
    fn host_tracks_live_listeners_and_history() {
        let mut host = RefHost::new(Size::new(640.0, 480.0));
        let token = host.add_listener(HostEventKind::Click);
        assert_eq!(host.live_listener_count(), 1);

        host.remove_listener(token);
        assert_eq!(host.live_listener_count(), 0);
        assert_eq!(host.added_listeners().len(), 1);
        assert_eq!(host.removed_listeners(), [token]);
    }

    #[test]
    fn host_merges_surface_styles() {
        let mut host = RefHost::new(Size::ZERO);
        let surface = host.attach_surface(&SurfaceStyle::overlay());
        host.style_surface(
            surface,
            &SurfaceStyle {
                opacity: Some(0.25),
                ..SurfaceStyle::default()
            },
        );

        let style = host.surface_style(surface).copied();
        assert_eq!(
            style,
            Some(SurfaceStyle {
                opacity: Some(0.25),
                ..SurfaceStyle::overlay()
            })
        );
    }

    #[test]
    fn scene_merges_patches_and_keeps_the_log() {
        let mut scene = RefScene::new();
        scene.set_props(ScenePatch {
            width: Some(64),
            ..ScenePatch::default()
        });
        scene.set_props(ScenePatch {
            layer_filter: Some(LayerFilter::HideAll),
            ..ScenePatch::default()
        });

        assert_eq!(scene.props().width, Some(64));
        assert_eq!(scene.props().layer_filter, Some(LayerFilter::HideAll));
        assert_eq!(scene.patches().len(), 2);
        assert_eq!(
            scene.patches()[1],
            ScenePatch {
                layer_filter: Some(LayerFilter::HideAll),
                ..ScenePatch::default()
            }
        );
    }
}

// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership and event wiring for one renderer bound to one host map.
//!
//! A [`RendererInstance`] couples a renderer to the host map it draws over:
//! the overlay surface it was given, the four input listeners it registered,
//! and a shared handle to the map itself. [`RendererInstance::acquire`] is
//! the only way to obtain one and [`RendererInstance::release`] the only way
//! to let one go, so listener and surface bookkeeping cannot drift.

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;

use epiphyte_gl_state::GlContext;
use epiphyte_host::{HostEvent, HostEventKind, HostMap, ListenerToken, SurfaceId, SurfaceStyle};
use epiphyte_scene::{PickParams, SceneDescriptor, SceneEvent, SceneRenderer};

use crate::props::OverlayProps;

/// A renderer bound to a host map, with its surface and listeners.
///
/// At most one instance exists per adapter. The bound map is held through
/// `Rc<RefCell<_>>`; whether an instance may be reused for a map is decided
/// by pointer identity, never by comparing map contents.
#[derive(Debug)]
pub struct RendererInstance<R, H> {
    renderer: R,
    map: Rc<RefCell<H>>,
    surface: SurfaceId,
    listeners: [ListenerToken; 4],
}

impl<R, H> RendererInstance<R, H>
where
    R: SceneRenderer,
    H: HostMap,
{
    /// Returns an instance bound to `map`, reusing `existing` when it is
    /// already bound to the same map.
    ///
    /// Reuse is idempotent: no listeners are re-registered and no surface
    /// is re-attached. An `existing` instance bound to a *different* map is
    /// fully released first, then a fresh instance is built: an overlay
    /// surface is attached (covering the host, pointer events off, with
    /// `props.style` folded in), the renderer is created through `create`
    /// from the host-bound [`SceneDescriptor`] contract, buffered scene
    /// props are applied, and one listener per [`HostEventKind`] is
    /// registered.
    pub fn acquire<F>(
        map: &Rc<RefCell<H>>,
        gl: &mut dyn GlContext,
        existing: Option<Self>,
        props: &OverlayProps,
        create: F,
    ) -> Self
    where
        F: FnOnce(&mut dyn GlContext, SceneDescriptor) -> R,
    {
        if let Some(existing) = existing {
            if existing.is_bound_to(map) {
                return existing;
            }
            // Bound to a different map; its listeners and surface belong to
            // that map and must go before the new registration.
            existing.release();
        }

        let style = SurfaceStyle::overlay().merge(props.style.unwrap_or_default());
        let surface = map.borrow_mut().attach_surface(&style);

        let mut renderer = create(gl, SceneDescriptor::default());
        if !props.scene.is_empty() {
            renderer.set_props(props.scene.clone());
        }

        let listeners = HostEventKind::ALL.map(|kind| map.borrow_mut().add_listener(kind));

        Self {
            renderer,
            map: Rc::clone(map),
            surface,
            listeners,
        }
    }

    /// Whether this instance is bound to exactly `map`.
    #[must_use]
    pub fn is_bound_to(&self, map: &Rc<RefCell<H>>) -> bool {
        Rc::ptr_eq(&self.map, map)
    }

    /// The bound host map.
    #[must_use]
    pub fn map(&self) -> &Rc<RefCell<H>> {
        &self.map
    }

    /// The overlay surface this instance draws into.
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The bound renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The bound renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Routes a host input event to the renderer.
    ///
    /// Dispatch is keyed on the event kind; each kind has its own bridge
    /// method. An event that resolves to no overlay-surface pixel is
    /// dropped.
    pub fn handle_event(&mut self, event: &HostEvent) {
        let Some(pixel) = self.event_pixel(event) else {
            return;
        };
        match event.kind {
            HostEventKind::Click => self.bridge_click(pixel),
            HostEventKind::DoubleClick => self.bridge_double_click(pixel),
            HostEventKind::MouseMove => self.bridge_pointer_move(pixel),
            HostEventKind::MouseOut => self.bridge_pointer_leave(pixel),
        }
    }

    /// Resolves the pixel an event happened at.
    ///
    /// Hosts omit the pixel for some targets (clicks on points of
    /// interest); those still carry a geographic position, which the
    /// renderer can project once it has a viewport.
    fn event_pixel(&self, event: &HostEvent) -> Option<Point> {
        if let Some(pixel) = event.pixel {
            return Some(pixel);
        }
        self.renderer.project(event.position?)
    }

    /// Click bridge. The renderer never observes the host's pointer-down,
    /// so the pick that pointer-down would have primed is made here, right
    /// before the click is dispatched.
    fn bridge_click(&mut self, pixel: Point) {
        let pointer_down = self.renderer.pick_object(&PickParams::at(pixel));
        self.renderer
            .dispatch_event(SceneEvent::click(pixel).with_pointer_down(pointer_down));
    }

    /// Double-click bridge: a click with tap count 2, no extra pick.
    fn bridge_double_click(&mut self, pixel: Point) {
        self.renderer.dispatch_event(SceneEvent::double_click(pixel));
    }

    fn bridge_pointer_move(&mut self, pixel: Point) {
        self.renderer.dispatch_event(SceneEvent::pointer_move(pixel));
    }

    fn bridge_pointer_leave(&mut self, pixel: Point) {
        self.renderer.dispatch_event(SceneEvent::pointer_leave(pixel));
    }

    /// Tears the instance down: all four listeners removed, the overlay
    /// surface detached, the renderer finalized.
    ///
    /// Consumes the instance, so a second release of the same listeners
    /// cannot be written.
    pub fn release(mut self) {
        {
            let mut map = self.map.borrow_mut();
            for token in self.listeners {
                map.remove_listener(token);
            }
            map.detach_surface(self.surface);
        }
        self.renderer.finalize();
    }
}

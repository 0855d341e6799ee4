// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::events::HostEventKind;
use crate::surface::SurfaceStyle;

/// Proof of an input listener registration on a host map.
///
/// Tokens are issued by [`HostMap::add_listener`] and must be returned to
/// [`HostMap::remove_listener`] exactly once. The overlay's instance
/// teardown owns that bookkeeping; leaking a token means the host keeps
/// delivering events for a renderer that no longer exists.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u32);

/// Identifier for an overlay surface attached to a host map.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Services the overlay machinery needs from a host map widget.
///
/// Implementations wrap the real widget. All methods are synchronous and
/// are called from the host's own callback context, so they must not
/// re-enter the host's event loop.
pub trait HostMap {
    /// Pixel size of the host's *rendering container*.
    ///
    /// This is the promoted child surface the host composites into, not
    /// the outer widget element; the two differ in fullscreen. Zero size
    /// while layout settles is normal and must be returned as-is.
    fn content_size(&self) -> Size;

    /// Registers interest in an input event kind. The host delivers
    /// matching events until the returned token is removed.
    fn add_listener(&mut self, kind: HostEventKind) -> ListenerToken;

    /// Removes a listener registration. Each token is removed at most
    /// once.
    fn remove_listener(&mut self, token: ListenerToken);

    /// Attaches a new overlay surface above the host's rendering surface.
    fn attach_surface(&mut self, style: &SurfaceStyle) -> SurfaceId;

    /// Applies the set fields of `style` to an attached surface.
    fn style_surface(&mut self, surface: SurfaceId, style: &SurfaceStyle);

    /// Detaches an overlay surface.
    fn detach_surface(&mut self, surface: SurfaceId);

    /// Asks the host to schedule an immediate recomposite.
    ///
    /// Hosts that cache a transform from the previous frame need this
    /// nudge after the overlay pushes a changed camera.
    fn request_redraw(&mut self);
}

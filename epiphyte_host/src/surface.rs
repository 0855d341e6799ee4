// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Presentation style for an overlay surface.
///
/// Every field is optional; an unset field leaves the host's current
/// value untouched when the style is applied. This is the only channel
/// through which surface presentation reaches the host, so renderer
/// property patches never carry style information.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    /// Whether the surface stretches to cover the host's container.
    pub cover_host: Option<bool>,
    /// Whether the surface intercepts pointer input before the host.
    pub pointer_events: Option<bool>,
    /// Surface opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Stacking order relative to sibling surfaces.
    pub z_index: Option<i32>,
}

impl SurfaceStyle {
    /// The style a freshly attached overlay surface starts with: covering
    /// the host and passing pointer input through to it.
    #[inline]
    #[must_use]
    pub const fn overlay() -> Self {
        Self {
            cover_host: Some(true),
            pointer_events: Some(false),
            opacity: None,
            z_index: None,
        }
    }

    /// `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cover_host.is_none()
            && self.pointer_events.is_none()
            && self.opacity.is_none()
            && self.z_index.is_none()
    }

    /// Overlays the set fields of `other` onto `self`.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.cover_host.is_some() {
            self.cover_host = other.cover_host;
        }
        if other.pointer_events.is_some() {
            self.pointer_events = other.pointer_events;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.z_index.is_some() {
            self.z_index = other.z_index;
        }
        self
    }
}

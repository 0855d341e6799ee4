// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use epiphyte_gl_state::{ClearMask, DrawParameters};
use epiphyte_view_state::CameraState;

/// Per-layer visibility control.
///
/// The overlay core only ever needs the two extremes: everything visible
/// (normal operation) and everything hidden (the renderer is suspended
/// while its host surface is detached but its GPU resources are kept).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerFilter {
    /// All layers render.
    #[default]
    ShowAll,
    /// No layer renders; resources stay resident.
    HideAll,
}

/// Why a redraw is being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawReason {
    /// Interleaved draw inside the host's frame.
    HostFrame,
    /// Explicit redraw outside the host's draw loop.
    External,
}

/// A redraw instruction: the reason and what the renderer may clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawRequest {
    /// Why the redraw is happening.
    pub reason: RedrawReason,
    /// Buffers the renderer is allowed to clear before drawing.
    pub clear: ClearMask,
}

impl RedrawRequest {
    /// A draw interleaved with the host's own frame.
    ///
    /// Clears nothing: the host owns the color buffer it just drew, and it
    /// shares its depth buffer so host geometry keeps occluding overlay
    /// geometry.
    #[inline]
    #[must_use]
    pub const fn interleaved() -> Self {
        Self {
            reason: RedrawReason::HostFrame,
            clear: ClearMask::empty(),
        }
    }

    /// A standalone draw into a target the renderer owns outright.
    #[inline]
    #[must_use]
    pub const fn standalone() -> Self {
        Self {
            reason: RedrawReason::External,
            clear: ClearMask::COLOR.union(ClearMask::DEPTH),
        }
    }
}

/// A partial update of the renderer props the overlay core drives.
///
/// `None` fields are left untouched. [`ScenePatch::merge`] folds one patch
/// over another, which is how the overlay buffers props while no renderer
/// instance exists yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenePatch {
    /// Viewport width in pixels.
    pub width: Option<u32>,
    /// Viewport height in pixels.
    pub height: Option<u32>,
    /// Camera for the next frame.
    pub view_state: Option<CameraState>,
    /// Per-layer visibility.
    pub layer_filter: Option<LayerFilter>,
    /// GL parameters for the renderer's own draws.
    pub parameters: Option<DrawParameters>,
}

impl ScenePatch {
    /// A patch that changes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites the fields of `self` that `patch` sets.
    pub fn merge(&mut self, patch: Self) {
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.height.is_some() {
            self.height = patch.height;
        }
        if patch.view_state.is_some() {
            self.view_state = patch.view_state;
        }
        if patch.layer_filter.is_some() {
            self.layer_filter = patch.layer_filter;
        }
        if patch.parameters.is_some() {
            self.parameters = patch.parameters;
        }
    }
}

/// Creation-time configuration for a renderer bound to a host map.
///
/// The `Default` value is the contract for host-bound renderers: the host
/// is the sole camera authority, so the internal controller is off; the
/// camera starts as a placeholder that the first draw tick overwrites; and
/// the renderer is told it draws into a context and surface it does not
/// own.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescriptor {
    /// Whether the renderer interprets input to move its own camera.
    pub controller_enabled: bool,
    /// Camera used until the first extracted frame arrives.
    pub initial_view_state: CameraState,
    /// Clean-room GL parameters baked into the renderer's draws.
    pub parameters: DrawParameters,
    /// Size the render target in physical device pixels.
    pub use_device_pixels: bool,
    /// The GL context belongs to the host; the renderer must not resize
    /// the surface or clear buffers on its own schedule.
    pub external_context: bool,
}

impl Default for SceneDescriptor {
    fn default() -> Self {
        Self {
            controller_enabled: false,
            initial_view_state: CameraState::initial(),
            parameters: DrawParameters::default(),
            use_device_pixels: true,
            external_context: true,
        }
    }
}

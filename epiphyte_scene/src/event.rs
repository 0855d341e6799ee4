// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::pick::PickInfo;

/// The kind of a pointer event delivered to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEventKind {
    /// A tap or click. `tap_count` is `1` for a single click and `2` for a
    /// double click delivered as one event.
    Click {
        /// Number of consecutive taps this event represents.
        tap_count: u8,
    },
    /// The pointer moved over the overlay.
    PointerMove,
    /// The pointer left the overlay.
    PointerLeave,
}

/// A pointer event in the renderer's vocabulary.
///
/// Host mouse events are translated into these by the overlay's event
/// bridges; renderers never see the host's own event types.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEvent {
    /// What happened.
    pub kind: SceneEventKind,
    /// Screen position in pixels, relative to the overlay surface.
    pub position: Point,
    /// For clicks: the pick made just before dispatch, standing in for the
    /// pointer-down observation the renderer never had a chance to make
    /// itself.
    pub pointer_down: Option<PickInfo>,
}

impl SceneEvent {
    /// A single click at `position`.
    #[must_use]
    pub fn click(position: Point) -> Self {
        Self {
            kind: SceneEventKind::Click { tap_count: 1 },
            position,
            pointer_down: None,
        }
    }

    /// A double click at `position`.
    #[must_use]
    pub fn double_click(position: Point) -> Self {
        Self {
            kind: SceneEventKind::Click { tap_count: 2 },
            position,
            pointer_down: None,
        }
    }

    /// A pointer move to `position`.
    #[must_use]
    pub fn pointer_move(position: Point) -> Self {
        Self {
            kind: SceneEventKind::PointerMove,
            position,
            pointer_down: None,
        }
    }

    /// A pointer leave at `position`.
    #[must_use]
    pub fn pointer_leave(position: Point) -> Self {
        Self {
            kind: SceneEventKind::PointerLeave,
            position,
            pointer_down: None,
        }
    }

    /// Attaches a primed pointer-down pick to this event.
    #[must_use]
    pub fn with_pointer_down(mut self, info: Option<PickInfo>) -> Self {
        self.pointer_down = info;
        self
    }
}

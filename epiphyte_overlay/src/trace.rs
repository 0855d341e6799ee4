// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for the per-frame camera path.
//!
//! The adapter does not store per-frame history beyond the one camera and
//! matrix it needs for change detection. Embedders that want to watch the
//! camera path (how often the host's matrix really changes, whether a
//! stable camera is being re-pushed) pass an [`OverlayTrace`] sink to
//! [`OverlayAdapter::on_draw_with_trace`](crate::OverlayAdapter::on_draw_with_trace).
//! Sinks observe; they cannot alter what the adapter does.

use epiphyte_view_state::CameraState;

/// A callback sink for per-frame adapter tracing.
pub trait OverlayTrace {
    /// Called when the frame's view-projection matrix differs from the
    /// previous frame's, before the cache is updated.
    ///
    /// `previous` is `None` on the first frame that carries a matrix.
    fn view_projection_changed(&mut self, previous: Option<&[f64; 16]>, current: &[f64; 16]);

    /// Called once per drawn frame, after the camera has been pushed to
    /// the renderer. `changed` is whether it differed from the previous
    /// frame's camera.
    fn camera_pushed(&mut self, camera: &CameraState, changed: bool);
}

/// Records the camera path of an adapter: frame and change counts plus the
/// most recent camera and matrix.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    /// Number of drawn frames observed.
    pub frames: usize,
    /// Frames whose camera differed from the previous frame's.
    pub camera_changes: usize,
    /// Frames whose view-projection matrix differed from the previous
    /// frame's.
    pub matrix_changes: usize,
    /// The camera most recently pushed to the renderer.
    pub last_camera: Option<CameraState>,
    /// The most recent view-projection matrix.
    pub last_matrix: Option<[f64; 16]>,
}

impl FrameRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything recorded.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl OverlayTrace for FrameRecorder {
    fn view_projection_changed(&mut self, _previous: Option<&[f64; 16]>, current: &[f64; 16]) {
        self.matrix_changes += 1;
        self.last_matrix = Some(*current);
    }

    fn camera_pushed(&mut self, camera: &CameraState, changed: bool) {
        self.frames += 1;
        if changed {
            self.camera_changes += 1;
        }
        self.last_camera = Some(*camera);
    }
}

/// Discards everything. Used by the untraced draw path.
pub(crate) struct SilentTrace;

impl OverlayTrace for SilentTrace {
    fn view_projection_changed(&mut self, _previous: Option<&[f64; 16]>, _current: &[f64; 16]) {}

    fn camera_pushed(&mut self, _camera: &CameraState, _changed: bool) {}
}

// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

use epiphyte_view_state::{HostCameraParams, LonLat};

/// Camera access offered by hosts that pass a transformer into the draw
/// callback.
pub trait CameraQuery {
    /// The camera parameters for the frame being drawn.
    fn camera_params(&self) -> HostCameraParams;

    /// Projects a geographic coordinate to a container-relative pixel.
    ///
    /// Returns `None` when the host cannot project yet, for example
    /// before the first layout.
    fn project(&self, position: LonLat) -> Option<Point>;

    /// The column-major view-projection matrix for the frame, when the
    /// host exposes one through the transformer.
    fn view_projection_matrix(&self) -> Option<[f64; 16]> {
        None
    }
}

/// Which flavor of host draw contract an adapter is speaking.
///
/// Host releases have shipped three contract generations. They differ
/// only in how camera data reaches [`DrawPayload`] and in whether the
/// host restores its own GL state afterwards; everything else the
/// adapter does is shared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayContract {
    /// The draw callback receives a raw view-projection matrix plus
    /// camera parameters.
    MatrixDraw,
    /// The draw callback receives a transformer object to query.
    TransformerDraw,
    /// Like [`Self::TransformerDraw`], but the host also restores GL
    /// state it recognizes after the callback returns.
    ContextRestore,
}

/// Camera data handed to the overlay for one host frame.
///
/// The two variants correspond to the host contract generations: older
/// hosts push a matrix, newer ones lend a [`CameraQuery`] for the
/// duration of the callback.
pub enum DrawPayload<'a> {
    /// A transformer the overlay may query during the draw.
    Transformer(&'a dyn CameraQuery),
    /// A raw matrix with the camera parameters it was built from.
    Matrix {
        /// Column-major view-projection matrix for the frame.
        view_projection: [f64; 16],
        /// Camera parameters the host used to build the matrix.
        camera: HostCameraParams,
    },
}

impl DrawPayload<'_> {
    /// The camera parameters for this frame, whichever way they arrived.
    #[must_use]
    pub fn camera_params(&self) -> HostCameraParams {
        match self {
            Self::Transformer(query) => query.camera_params(),
            Self::Matrix { camera, .. } => *camera,
        }
    }

    /// The view-projection matrix for this frame, when one is available.
    #[must_use]
    pub fn view_projection(&self) -> Option<[f64; 16]> {
        match self {
            Self::Transformer(query) => query.view_projection_matrix(),
            Self::Matrix {
                view_projection, ..
            } => Some(*view_projection),
        }
    }

    /// The contract generation this payload belongs to.
    ///
    /// Transformer payloads report [`OverlayContract::TransformerDraw`];
    /// whether the host also restores state is not observable from the
    /// payload itself.
    #[must_use]
    pub const fn contract(&self) -> OverlayContract {
        match self {
            Self::Transformer(_) => OverlayContract::TransformerDraw,
            Self::Matrix { .. } => OverlayContract::MatrixDraw,
        }
    }
}

impl fmt::Debug for DrawPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transformer(_) => f.debug_tuple("Transformer").finish(),
            Self::Matrix {
                view_projection,
                camera,
            } => f
                .debug_struct("Matrix")
                .field("view_projection", view_projection)
                .field("camera", camera)
                .finish(),
        }
    }
}

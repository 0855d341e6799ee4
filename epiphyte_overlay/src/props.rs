// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use epiphyte_host::SurfaceStyle;
use epiphyte_scene::ScenePatch;

/// A partial update of everything an overlay adapter manages.
///
/// Renderer-facing fields travel in `scene`; `style` addresses the host
/// surface the renderer draws into and never reaches the renderer itself.
/// The split is load-bearing: a [`ScenePatch`] has no style field, so a
/// forwarded patch cannot smuggle surface styling into the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayProps {
    /// Props forwarded to the renderer.
    pub scene: ScenePatch,
    /// Presentation of the overlay's host surface.
    pub style: Option<SurfaceStyle>,
}

impl OverlayProps {
    /// Props that change nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether these props change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scene.is_empty() && self.style.is_none()
    }

    /// Overwrites the fields of `self` that `other` sets.
    pub fn merge(&mut self, other: Self) {
        self.scene.merge(other.scene);
        if let Some(style) = other.style {
            self.style = Some(match self.style {
                Some(current) => current.merge(style),
                None => style,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use epiphyte_host::SurfaceStyle;
    use epiphyte_scene::{LayerFilter, ScenePatch};

    use super::OverlayProps;

    #[test]
    fn merge_folds_scene_and_style_independently() {
        let mut props = OverlayProps {
            scene: ScenePatch {
                width: Some(640),
                ..ScenePatch::default()
            },
            style: Some(SurfaceStyle {
                opacity: Some(1.0),
                ..SurfaceStyle::default()
            }),
        };

        props.merge(OverlayProps {
            scene: ScenePatch {
                layer_filter: Some(LayerFilter::HideAll),
                ..ScenePatch::default()
            },
            style: Some(SurfaceStyle {
                z_index: Some(3),
                ..SurfaceStyle::default()
            }),
        });

        assert_eq!(props.scene.width, Some(640));
        assert_eq!(props.scene.layer_filter, Some(LayerFilter::HideAll));
        let style = props.style.unwrap();
        assert_eq!(style.opacity, Some(1.0));
        assert_eq!(style.z_index, Some(3));
    }

    #[test]
    fn empty_props_report_empty() {
        assert!(OverlayProps::empty().is_empty());
        let props = OverlayProps {
            style: Some(SurfaceStyle::overlay()),
            ..OverlayProps::default()
        };
        assert!(!props.is_empty());
    }
}

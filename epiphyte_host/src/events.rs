// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use epiphyte_view_state::LonLat;

/// Input event kinds the overlay subscribes to on the host map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    /// A primary-button press and release on the map.
    Click,
    /// Two clicks in rapid succession.
    DoubleClick,
    /// Pointer motion over the map.
    MouseMove,
    /// The pointer left the map.
    MouseOut,
}

impl HostEventKind {
    /// Every event kind the overlay bridges, in registration order.
    pub const ALL: [Self; 4] = [
        Self::Click,
        Self::DoubleClick,
        Self::MouseMove,
        Self::MouseOut,
    ];

    /// The host-side event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
            Self::MouseMove => "mousemove",
            Self::MouseOut => "mouseout",
        }
    }
}

/// An input event as delivered by the host map.
///
/// Hosts report positions inconsistently across event kinds: some carry a
/// container-relative pixel, some only a geographic coordinate, and some
/// carry neither. Both fields are therefore optional and the bridge
/// decides what to do when one is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct HostEvent {
    /// What happened.
    pub kind: HostEventKind,
    /// Container-relative pixel position, when the host supplied one.
    pub pixel: Option<Point>,
    /// Geographic position under the pointer, when the host supplied one.
    pub position: Option<LonLat>,
}

impl HostEvent {
    /// An event carrying a container-relative pixel position.
    #[inline]
    #[must_use]
    pub const fn at_pixel(kind: HostEventKind, pixel: Point) -> Self {
        Self {
            kind,
            pixel: Some(pixel),
            position: None,
        }
    }

    /// An event carrying only a geographic position.
    #[inline]
    #[must_use]
    pub const fn at_position(kind: HostEventKind, position: LonLat) -> Self {
        Self {
            kind,
            pixel: None,
            position: Some(position),
        }
    }

    /// An event with no position information at all.
    #[inline]
    #[must_use]
    pub const fn bare(kind: HostEventKind) -> Self {
        Self {
            kind,
            pixel: None,
            position: None,
        }
    }

    /// Adds a geographic position to the event.
    #[inline]
    #[must_use]
    pub const fn with_position(mut self, position: LonLat) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::{HostEvent, HostEventKind};
    use epiphyte_view_state::LonLat;

    #[test]
    fn registration_order_is_stable() {
        let names: std::vec::Vec<_> =
            HostEventKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names, ["click", "dblclick", "mousemove", "mouseout"]);
    }

    #[test]
    fn constructors_fill_the_expected_fields() {
        let pixel = HostEvent::at_pixel(HostEventKind::Click, Point::new(4.0, 8.0));
        assert_eq!(pixel.pixel, Some(Point::new(4.0, 8.0)));
        assert_eq!(pixel.position, None);

        let geo = HostEvent::at_position(HostEventKind::MouseMove, LonLat::new(-122.4, 37.8));
        assert_eq!(geo.pixel, None);
        assert_eq!(geo.position, Some(LonLat::new(-122.4, 37.8)));

        let bare = HostEvent::bare(HostEventKind::MouseOut);
        assert_eq!(bare.pixel, None);
        assert_eq!(bare.position, None);
    }
}

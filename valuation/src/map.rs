/// Zoom level of the location map.
pub const MAP_ZOOM: f64 = 14.0;
/// Camera pitch of the location map, in degrees.
pub const MAP_PITCH: f64 = 50.0;
/// Radius of the location marker, in meters.
pub const MARKER_RADIUS_M: f64 = 200.0;
/// Marker fill as RGB.
pub const MARKER_RGB: (u8, u8, u8) = (50, 205, 50);

/// Map tiles visible across the viewport.
const TILES_ACROSS: f64 = 4.0;
const METERS_PER_DEGREE: f64 = 111_320.0;

/// View state of a single-marker map centred on a property location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub marker_radius_m: f64,
}

impl MapView {
    /// A view at the fixed zoom and pitch with the marker at the centre.
    pub fn centered(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: MAP_ZOOM,
            pitch: MAP_PITCH,
            marker_radius_m: MARKER_RADIUS_M,
        }
    }

    /// Longitude span covered by the viewport at the current zoom.
    pub fn lon_span(&self) -> f64 {
        TILES_ACROSS * 360.0 / 2f64.powf(self.zoom)
    }

    /// Latitude span, shrunk by the Mercator scale at the centre latitude.
    pub fn lat_span(&self) -> f64 {
        self.lon_span() * self.latitude.to_radians().cos().abs()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.longitude - half, self.longitude + half]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [
            (self.latitude - half).max(-90.0),
            (self.latitude + half).min(90.0),
        ]
    }

    /// Marker radius converted to degrees of latitude.
    pub fn marker_radius_deg(&self) -> f64 {
        self.marker_radius_m / METERS_PER_DEGREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_is_centred_on_marker() {
        let view = MapView::centered(25.0805, 55.1403);
        let [west, east] = view.x_bounds();
        let [south, north] = view.y_bounds();

        assert!((((west + east) / 2.0) - 55.1403).abs() < 1e-9);
        assert!((((south + north) / 2.0) - 25.0805).abs() < 1e-9);
        assert!(west < view.longitude && view.longitude < east);
        assert!(south < view.latitude && view.latitude < north);
        assert_eq!(view.zoom, 14.0);
        assert_eq!(view.pitch, 50.0);
    }

    #[test]
    fn marker_fits_in_viewport() {
        let view = MapView::centered(25.0805, 55.1403);
        assert!(view.marker_radius_deg() * 2.0 < view.lat_span());
        assert!(view.lat_span() < view.lon_span());
    }
}

//! Geographic bounding box

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Axis-aligned box in degrees: `top`/`bottom` are latitudes,
/// `left`/`right` are longitudes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Northern edge (max latitude)
    pub top: f64,
    /// Western edge (min longitude)
    pub left: f64,
    /// Southern edge (min latitude)
    pub bottom: f64,
    /// Eastern edge (max longitude)
    pub right: f64,
}

impl BoundingBox {
    /// A degenerate box covering exactly one point
    #[must_use]
    pub const fn around(point: GeoPoint) -> Self {
        Self {
            top: point.latitude(),
            left: point.longitude(),
            bottom: point.latitude(),
            right: point.longitude(),
        }
    }

    /// Smallest box containing every point, `None` for an empty input
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::around(*first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grow the box so it contains `point`
    pub fn extend(&mut self, point: &GeoPoint) {
        self.top = self.top.max(point.latitude());
        self.bottom = self.bottom.min(point.latitude());
        self.left = self.left.min(point.longitude());
        self.right = self.right.max(point.longitude());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_empty() {
        let points: Vec<GeoPoint> = Vec::new();
        assert!(BoundingBox::from_points(&points).is_none());
    }

    #[test]
    fn test_from_points() {
        let points = [
            GeoPoint::new_unchecked(37.55, 126.97),
            GeoPoint::new_unchecked(37.58, 126.99),
            GeoPoint::new_unchecked(37.51, 127.10),
        ];
        let bounds = BoundingBox::from_points(&points).expect("non-empty");
        assert!((bounds.top - 37.58).abs() < f64::EPSILON);
        assert!((bounds.bottom - 37.51).abs() < f64::EPSILON);
        assert!((bounds.left - 126.97).abs() < f64::EPSILON);
        assert!((bounds.right - 127.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extend_grows_box() {
        let mut bounds = BoundingBox::around(GeoPoint::new_unchecked(37.0, 126.0));
        bounds.extend(&GeoPoint::new_unchecked(38.0, 128.0));
        assert!((bounds.top - 38.0).abs() < f64::EPSILON);
        assert!((bounds.bottom - 37.0).abs() < f64::EPSILON);
        assert!((bounds.left - 126.0).abs() < f64::EPSILON);
        assert!((bounds.right - 128.0).abs() < f64::EPSILON);
    }
}

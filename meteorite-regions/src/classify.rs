use crate::models::{BoundingBox, Region, Regions};
use meteorite_feed::Coordinates;

impl BoundingBox {
    /// Returns true if the point lies within the box. Both bounds are
    /// inclusive on both axes.
    pub fn contains(&self, point: Coordinates) -> bool {
        self.min_long <= point.long
            && point.long <= self.max_long
            && self.min_lat <= point.lat
            && point.lat <= self.max_lat
    }
}

impl Regions {
    /// Yields every region containing the point, in region order.
    pub fn matching(&self, point: Coordinates) -> impl Iterator<Item = &Region> {
        self.iter().filter(move |r| r.bounds.contains(point))
    }
}

/// Returns the names of all regions containing the point.
///
/// Regions may overlap, so a point can belong to several of them.
pub fn regions_for(point: Coordinates, regions: &Regions) -> Vec<&str> {
    regions
        .matching(point)
        .map(|r| r.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, long: f64) -> Coordinates {
        Coordinates { lat, long }
    }

    fn asia() -> Regions {
        Regions::new(vec![
            Region::new("Upper_Asia", BoundingBox::new(32.2, 35.8, 190.4, 72.7)),
            Region::new("Lower_Asia", BoundingBox::new(58.2, -9.9, 154.0, 38.6)),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = BoundingBox::new(-10.0, -10.0, 10.0, 10.0);
        assert!(b.contains(point(10.0, -10.0)));
        assert!(b.contains(point(-10.0, 10.0)));
        assert!(b.contains(point(10.0, 10.0)));
        assert!(b.contains(point(-10.0, -10.0)));
        assert!(b.contains(point(0.0, 0.0)));
    }

    #[test]
    fn test_contains_outside() {
        let b = BoundingBox::new(-10.0, -10.0, 10.0, 10.0);
        assert!(!b.contains(point(10.0001, 0.0)));
        assert!(!b.contains(point(0.0, -10.0001)));
        assert!(!b.contains(point(20.0, 20.0)));
        assert!(!b.contains(point(f64::NAN, 0.0)));
        assert!(!b.contains(point(0.0, f64::NAN)));
    }

    #[test]
    fn test_regions_for_overlap() {
        let regions = asia();
        assert_eq!(
            regions_for(point(36.0, 100.0), &regions),
            vec!["Upper_Asia", "Lower_Asia"]
        );
        assert_eq!(regions_for(point(60.0, 100.0), &regions), vec!["Upper_Asia"]);
        assert_eq!(regions_for(point(0.0, 100.0), &regions), vec!["Lower_Asia"]);
        assert!(regions_for(point(0.0, 0.0), &regions).is_empty());
    }

    #[test]
    fn test_regions_for_follows_region_order() {
        let regions = Regions::new(vec![
            Region::new("Lower_Asia", BoundingBox::new(58.2, -9.9, 154.0, 38.6)),
            Region::new("Upper_Asia", BoundingBox::new(32.2, 35.8, 190.4, 72.7)),
        ])
        .unwrap();
        assert_eq!(
            regions_for(point(36.0, 100.0), &regions),
            vec!["Lower_Asia", "Upper_Asia"]
        );
    }

    #[test]
    fn test_continents() {
        let regions = Regions::continents();
        // Aachen
        assert_eq!(regions_for(point(50.775, 6.08333), &regions), vec!["Europe"]);
        // Mediterranean coast belongs to both Europe and Africa/Middle East
        assert_eq!(
            regions_for(point(36.5, 10.0), &regions),
            vec!["Africa_MiddleEast", "Europe"]
        );
        assert_eq!(
            regions_for(point(40.0, -100.0), &regions),
            vec!["North_America"]
        );
        assert!(regions_for(point(-80.0, 0.0), &regions).is_empty());
    }

    #[test]
    fn test_matching() {
        let regions = asia();
        let matched: Vec<_> = regions.matching(point(0.0, 100.0)).collect();
        let lower = Region::new("Lower_Asia", BoundingBox::new(58.2, -9.9, 154.0, 38.6));
        assert_eq!(matched, vec![&lower]);
    }
}

//! Fixed, ordered list of destinations shown on the globe.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub name: String,
    /// Degrees, in `[-90, 90]`.
    pub lat: f64,
    /// Degrees, in `[-180, 180]`.
    pub lon: f64,
    pub image: String,
    pub summary: String,
    pub facts: Vec<String>,
}

impl Destination {
    pub fn new(
        name: &str,
        lat: f64,
        lon: f64,
        image: &str,
        summary: &str,
        facts: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
            image: image.to_string(),
            summary: summary.to_string(),
            facts: facts.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("destination catalog is empty")]
    Empty,
    #[error("destination {index} is missing a name, summary or facts")]
    IncompleteRecord { index: usize },
    #[error("destination {index} has coordinates outside lat [-90, 90] / lon [-180, 180]")]
    CoordinateOutOfRange { index: usize },
}

/// Non-empty, read-only sequence of destinations.
///
/// Selection indices into a catalog are always produced by [`Catalog::wrap_index`],
/// so indexing never goes out of range.
#[derive(Clone, Debug)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        if destinations.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, d) in destinations.iter().enumerate() {
            if d.name.is_empty() || d.summary.is_empty() || d.facts.is_empty() {
                return Err(CatalogError::IncompleteRecord { index });
            }
            if !(-90.0..=90.0).contains(&d.lat) || !(-180.0..=180.0).contains(&d.lon) {
                return Err(CatalogError::CoordinateOutOfRange { index });
            }
        }
        Ok(Self { destinations })
    }

    /// The travel destinations the widget ships with.
    pub fn builtin() -> Self {
        Self {
            destinations: vec![
                Destination::new(
                    "Tokyo, Japan",
                    35.6764,
                    139.65,
                    "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?auto=format&fit=crop&w=1200&q=80",
                    "Tokyo balances futuristic neighborhoods with serene shrines and incredible food culture.",
                    &[
                        "Best in spring for cherry blossoms",
                        "Efficient transit with iconic skyline views",
                        "Try local sushi counters and izakaya alleys",
                    ],
                ),
                Destination::new(
                    "Cape Town, South Africa",
                    -33.9249,
                    18.4241,
                    "https://images.unsplash.com/photo-1576485290814-1c72aa4bbb8e?auto=format&fit=crop&w=1200&q=80",
                    "Framed by Table Mountain, Cape Town offers dramatic coasts, vineyards, and colorful neighborhoods.",
                    &[
                        "Take the cableway up Table Mountain",
                        "Explore Cape Peninsula scenic drives",
                        "Excellent local seafood and markets",
                    ],
                ),
                Destination::new(
                    "Lima, Peru",
                    -12.0464,
                    -77.0428,
                    "https://images.unsplash.com/photo-1600298882421-8f6b68db2f40?auto=format&fit=crop&w=1200&q=80",
                    "Lima combines Pacific cliffside vistas with one of the world’s most exciting culinary scenes.",
                    &[
                        "Historic center is a UNESCO site",
                        "Popular for surf and coastal parks",
                        "Known globally for ceviche and Nikkei cuisine",
                    ],
                ),
                Destination::new(
                    "Reykjavík, Iceland",
                    64.1466,
                    -21.9426,
                    "https://images.unsplash.com/photo-1476610182048-b716b8518aae?auto=format&fit=crop&w=1200&q=80",
                    "A cozy capital and launch point for waterfalls, glaciers, and northern lights adventures.",
                    &[
                        "Great base for Golden Circle trips",
                        "Blue Lagoon and geothermal spas nearby",
                        "Late summer has long daylight hours",
                    ],
                ),
                Destination::new(
                    "Sydney, Australia",
                    -33.8688,
                    151.2093,
                    "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9?auto=format&fit=crop&w=1200&q=80",
                    "Sydney is famous for harbor views, beach culture, and a lively arts scene.",
                    &[
                        "Visit the Opera House and Circular Quay",
                        "Bondi to Coogee coastal walk",
                        "Vibrant neighborhoods for cafés and nightlife",
                    ],
                ),
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Map any integer onto `0..len()`, wrapping negatives from the end.
    #[inline]
    pub fn wrap_index(&self, index: i64) -> usize {
        index.rem_euclid(self.destinations.len() as i64) as usize
    }

    /// Panics if `index` is out of range; callers pass wrapped indices.
    #[inline]
    pub fn get(&self, index: usize) -> &Destination {
        &self.destinations[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.iter().cloned().collect());
        assert!(validated.is_ok());
        assert_eq!(builtin.len(), 5);
        assert_eq!(builtin.get(0).name, "Tokyo, Japan");
        assert_eq!(builtin.get(4).name, "Sydney, Australia");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn records_without_facts_are_rejected() {
        let d = Destination::new("Nowhere", 0.0, 0.0, "", "Empty", &[]);
        assert_eq!(
            Catalog::new(vec![d]).unwrap_err(),
            CatalogError::IncompleteRecord { index: 0 }
        );
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let ok = Destination::new("A", 10.0, 10.0, "", "a", &["x"]);
        let bad = Destination::new("B", 95.0, 10.0, "", "b", &["y"]);
        assert_eq!(
            Catalog::new(vec![ok, bad]).unwrap_err(),
            CatalogError::CoordinateOutOfRange { index: 1 }
        );
    }

    #[test]
    fn wrap_index_matches_positive_modulo() {
        let c = Catalog::builtin();
        let n = c.len() as i64;
        for i in [-1_000_003_i64, -11, -5, -1, 0, 1, 4, 5, 6, 99, 1_000_000_007] {
            assert_eq!(c.wrap_index(i) as i64, ((i % n) + n) % n, "index {}", i);
        }
    }
}

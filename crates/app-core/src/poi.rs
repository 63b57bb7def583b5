//! Points of interest and the immutable repository that serves them.

use crate::geo::GeoPoint;
use fnv::FnvHashMap;
use thiserror::Error;

pub type PointId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct PointOfInterest {
    pub id: PointId,
    pub name: String,
    pub position: GeoPoint,
    pub description: String,
    /// Ordered image references, first is the preview thumbnail. `None` means
    /// the gallery collaborator synthesizes a sequence at display time.
    pub images: Option<Vec<String>>,
    /// Display-only categories.
    pub tags: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("duplicate point id {0}")]
    DuplicateId(PointId),
    #[error("point {id} has an invalid position ({latitude}, {longitude})")]
    InvalidPosition {
        id: PointId,
        latitude: f64,
        longitude: f64,
    },
    #[error("point {0} lists an empty image sequence")]
    EmptyImages(PointId),
}

/// Ordered, immutable set of points loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct PointRepository {
    points: Vec<PointOfInterest>,
    index: FnvHashMap<PointId, usize>,
}

impl PointRepository {
    pub fn new(points: Vec<PointOfInterest>) -> Result<Self, RepositoryError> {
        let mut index = FnvHashMap::default();
        for (i, p) in points.iter().enumerate() {
            if !p.position.is_well_formed() {
                return Err(RepositoryError::InvalidPosition {
                    id: p.id,
                    latitude: p.position.latitude,
                    longitude: p.position.longitude,
                });
            }
            if matches!(&p.images, Some(images) if images.is_empty()) {
                return Err(RepositoryError::EmptyImages(p.id));
            }
            if index.insert(p.id, i).is_some() {
                return Err(RepositoryError::DuplicateId(p.id));
            }
        }
        log::info!("[points] loaded {} points of interest", points.len());
        Ok(Self { points, index })
    }

    pub fn all(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn get(&self, id: PointId) -> Option<&PointOfInterest> {
        self.index.get(&id).map(|&i| &self.points[i])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

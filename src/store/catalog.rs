use serde::{Deserialize, Serialize};

use crate::store::models::{Service, Statistics, Testimonial};

const SEED: &str = include_str!("seed.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reference data rendered by the landing page. Loaded once at startup and
/// never written back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub statistics: Statistics,
}

impl Catalog {
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        log::debug!(
            "Loaded catalog: {} services, {} testimonials",
            catalog.services.len(),
            catalog.testimonials.len()
        );
        Ok(catalog)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Distinct service categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for service in &self.services {
            if !categories.contains(&service.category.as_str()) {
                categories.push(&service.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.services.len(), 6);
        assert_eq!(catalog.testimonials.len(), 5);
        assert_eq!(catalog.statistics.students, 5847);
        assert!(catalog.service("4").unwrap().is_free());
        assert_eq!(
            catalog.testimonials[0].video.as_deref(),
            Some("/testimonial-video-1.mp4")
        );
        assert!(catalog.testimonials[1].video.is_none());
    }

    #[test]
    fn unknown_service_is_none() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.service("42").is_none());
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let catalog = Catalog::seed().unwrap();
        let categories = catalog.categories();
        assert_eq!(categories.first(), Some(&"Tecnología"));
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn malformed_seed_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{\"services\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}

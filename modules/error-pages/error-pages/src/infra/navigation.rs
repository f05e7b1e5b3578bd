use error_pages_sdk::{Navigation, NavigationEntry};

use crate::config::NavigationPointConfig;

/// Fixed list of top-level navigation points.
///
/// Nothing is mutated when a point is highlighted; each call builds its own
/// entries for the requested active point.
#[derive(Debug, Clone)]
pub struct StaticNavigation {
    points: Vec<(String, String)>,
}

impl StaticNavigation {
    /// `site_url` must end in `/`.
    #[must_use]
    pub fn new(site_url: &str, points: &[NavigationPointConfig]) -> Self {
        Self {
            points: points
                .iter()
                .map(|p| (p.name.clone(), format!("{site_url}{}", p.path)))
                .collect(),
        }
    }
}

impl Navigation for StaticNavigation {
    fn entries(&self, active: &str) -> Vec<NavigationEntry> {
        self.points
            .iter()
            .map(|(name, url)| NavigationEntry {
                name: name.clone(),
                url: url.clone(),
                active: name == active,
            })
            .collect()
    }
}

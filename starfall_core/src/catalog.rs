//! Launchable entries and the layout seam that places them on screen.

use crate::config::AppEntryConfig;
use crate::constants::SAMPLE_APP_COUNT;
use crate::error::PlatformError;
use crate::geometry::{Point, Rect};
use crate::platform::LaunchTarget;

/// One row of the launcher list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEntry {
    pub label: String,
    /// `None` for placeholder rows that only glow when touched.
    pub target: Option<LaunchTarget>,
}

impl LaunchEntry {
    pub fn new(label: impl Into<String>, target: Option<LaunchTarget>) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// Source of launchable entries (installed apps, a config file, ...).
pub trait AppCatalog {
    fn entries(&self) -> Result<Vec<LaunchEntry>, PlatformError>;
}

/// Sorts entries by label, ignoring case.
pub fn sort_entries(entries: &mut [LaunchEntry]) {
    entries.sort_by_cached_key(|entry| entry.label.to_lowercase());
}

/// Loads a catalogue; a failing catalogue yields the sample list.
pub fn load_entries(catalog: &dyn AppCatalog) -> Vec<LaunchEntry> {
    catalog.entries().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "app catalogue unavailable, showing samples");
        SampleCatalog::default().placeholder_entries()
    })
}

/// Placeholder rows for hosts without an app catalogue.
#[derive(Debug, Clone, Copy)]
pub struct SampleCatalog {
    pub count: usize,
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self {
            count: SAMPLE_APP_COUNT,
        }
    }
}

impl SampleCatalog {
    fn placeholder_entries(&self) -> Vec<LaunchEntry> {
        (1..=self.count)
            .map(|i| LaunchEntry::new(format!("Sample App {}", i), None))
            .collect()
    }
}

impl AppCatalog for SampleCatalog {
    fn entries(&self) -> Result<Vec<LaunchEntry>, PlatformError> {
        Ok(self.placeholder_entries())
    }
}

/// Entries listed in the `[[apps]]` config table, sorted by label.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCatalog {
    apps: Vec<AppEntryConfig>,
}

impl ConfiguredCatalog {
    pub fn new(apps: Vec<AppEntryConfig>) -> Self {
        Self { apps }
    }
}

impl AppCatalog for ConfiguredCatalog {
    fn entries(&self) -> Result<Vec<LaunchEntry>, PlatformError> {
        if self.apps.is_empty() {
            return SampleCatalog::default().entries();
        }
        let mut entries: Vec<LaunchEntry> = self
            .apps
            .iter()
            .map(|app| LaunchEntry::new(app.label.clone(), app.target.clone().map(LaunchTarget)))
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }
}

/// Index of a row in the launcher list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Supplied by the host layout: where each row currently sits on screen.
///
/// Bounds are window-space with the scroll offset already applied, so the
/// core never converts between local and global coordinates itself.
pub trait ItemBounds {
    fn item_count(&self) -> usize;

    fn bounds_of(&self, item: ItemId) -> Option<Rect>;

    /// First item whose bounds contain `point`.
    fn hit_test(&self, point: Point) -> Option<ItemId> {
        (0..self.item_count())
            .map(ItemId)
            .find(|&item| self.bounds_of(item).is_some_and(|rect| rect.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Rows(Vec<Rect>);

    impl ItemBounds for Rows {
        fn item_count(&self) -> usize {
            self.0.len()
        }

        fn bounds_of(&self, item: ItemId) -> Option<Rect> {
            self.0.get(item.0).copied()
        }
    }

    struct Broken;

    impl AppCatalog for Broken {
        fn entries(&self) -> Result<Vec<LaunchEntry>, PlatformError> {
            Err(PlatformError::Unavailable("app catalogue"))
        }
    }

    #[test]
    fn test_sample_catalog() {
        let entries = SampleCatalog::default().entries().unwrap();
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0].label, "Sample App 1");
        assert!(entries.iter().all(|e| e.target.is_none()));
    }

    #[test]
    fn test_sort_ignores_case() {
        let mut entries = vec![
            LaunchEntry::new("camera", None),
            LaunchEntry::new("Browser", None),
            LaunchEntry::new("alarm", None),
        ];
        sort_entries(&mut entries);
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["alarm", "Browser", "camera"]);
    }

    #[test]
    fn test_configured_catalog_maps_targets() {
        let catalog = ConfiguredCatalog::new(vec![AppEntryConfig {
            label: "Terminal".into(),
            target: Some("alacritty".into()),
        }]);
        let entries = catalog.entries().unwrap();
        assert_eq!(entries, vec![LaunchEntry::new("Terminal", Some(LaunchTarget::new("alacritty")))]);
    }

    #[test]
    fn test_configured_catalog_is_sorted() {
        let catalog = ConfiguredCatalog::new(vec![
            AppEntryConfig { label: "zsh".into(), target: None },
            AppEntryConfig { label: "Files".into(), target: None },
        ]);
        let labels: Vec<_> = catalog.entries().unwrap().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Files".to_string(), "zsh".to_string()]);
    }

    #[test]
    fn test_empty_configured_catalog_falls_back_to_samples() {
        let entries = ConfiguredCatalog::default().entries().unwrap();
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[1].label, "Sample App 2");
    }

    #[test]
    fn test_failing_catalog_falls_back_to_samples() {
        let entries = load_entries(&Broken);
        assert_eq!(entries.len(), 18);
    }

    #[test]
    fn test_hit_test() {
        let rows = Rows(vec![Rect::new(0.0, 0.0, 40.0, 20.0), Rect::new(0.0, 30.0, 40.0, 20.0)]);
        assert_eq!(rows.hit_test(Point::new(10.0, 10.0)), Some(ItemId(0)));
        assert_eq!(rows.hit_test(Point::new(10.0, 35.0)), Some(ItemId(1)));
        assert_eq!(rows.hit_test(Point::new(10.0, 25.0)), None);
    }
}

//! Home feature state.

/// Placeholder filters shown when a profile has no category subscriptions.
pub const PLACEHOLDER_CATEGORIES: &[&str] = &["Category 1", "Category 2"];

/// One entry in the category side menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub name: String,
    pub enabled: bool,
}

/// State of the home screen.
#[derive(Debug, Default)]
pub struct HomeState {
    pub categories: Vec<CategoryFilter>,
    pub selected: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category list from a fresh profile snapshot.
    ///
    /// Toggle state is preserved for categories that survive the refresh.
    pub fn sync_categories(&mut self, names: &[String]) {
        let names: Vec<String> = if names.is_empty() {
            PLACEHOLDER_CATEGORIES
                .iter()
                .map(|n| (*n).to_string())
                .collect()
        } else {
            names.to_vec()
        };

        self.categories = names
            .into_iter()
            .map(|name| {
                let enabled = self
                    .categories
                    .iter()
                    .any(|c| c.name == name && c.enabled);
                CategoryFilter { name, enabled }
            })
            .collect();

        if self.selected >= self.categories.len() {
            self.selected = self.categories.len().saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if !self.categories.is_empty() {
            self.selected = (self.selected + 1) % self.categories.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.categories.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.categories.len() - 1);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(category) = self.categories.get_mut(self.selected) {
            category.enabled = !category.enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_sync_falls_back_to_placeholders() {
        let mut home = HomeState::new();
        home.sync_categories(&[]);
        assert_eq!(home.categories.len(), 2);
        assert_eq!(home.categories[0].name, "Category 1");
    }

    #[test]
    fn test_sync_preserves_toggle_state() {
        let mut home = HomeState::new();
        home.sync_categories(&names(&["Surf", "Music"]));
        home.toggle_selected();
        assert!(home.categories[0].enabled);

        home.sync_categories(&names(&["Surf", "Music", "Hiking"]));
        assert!(home.categories[0].enabled);
        assert!(!home.categories[2].enabled);
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut home = HomeState::new();
        home.sync_categories(&names(&["A", "B", "C"]));
        home.selected = 2;
        home.sync_categories(&names(&["A"]));
        assert_eq!(home.selected, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut home = HomeState::new();
        home.sync_categories(&names(&["A", "B"]));
        home.select_previous();
        assert_eq!(home.selected, 1);
        home.select_next();
        assert_eq!(home.selected, 0);
    }
}

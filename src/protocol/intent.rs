//! Intents and intent filters.

use crate::protocol::bundle::{Bundle, Value};

/// A broadcast message: an action name, categories and an extras bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    /// Action name.
    pub action: Option<String>,
    /// Categories attached to the intent.
    pub categories: Vec<String>,
    /// Key-value payload.
    pub extras: Bundle,
}

impl Intent {
    /// Creates an intent with the given action.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            categories: Vec::new(),
            extras: Bundle::new(),
        }
    }

    /// Adds a category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Adds an extra.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key, value);
        self
    }

    /// Returns the action, if set.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the string extra under `key`.
    #[must_use]
    pub fn string_extra(&self, key: &str) -> Option<&str> {
        self.extras.get_str(key)
    }

    /// Returns true if an extra is stored under `key`.
    #[must_use]
    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }
}

/// Selects which broadcast intents a receiver gets.
///
/// Matching follows broadcast filter rules: the intent's action must be one
/// of the filter's actions, and every category on the intent must also be
/// listed by the filter. An intent without categories passes the category
/// test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentFilter {
    /// Accepted actions.
    pub actions: Vec<String>,
    /// Accepted categories.
    pub categories: Vec<String>,
}

impl IntentFilter {
    /// Creates a filter for a single action.
    #[must_use]
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            actions: vec![action.into()],
            categories: Vec::new(),
        }
    }

    /// Adds an accepted action.
    #[must_use]
    pub fn add_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Adds an accepted category.
    #[must_use]
    pub fn add_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Checks if an intent matches this filter.
    #[must_use]
    pub fn matches(&self, intent: &Intent) -> bool {
        let Some(action) = intent.action() else {
            return false;
        };
        if !self.actions.iter().any(|a| a == action) {
            return false;
        }

        intent
            .categories
            .iter()
            .all(|c| self.categories.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_action() {
        let filter = IntentFilter::action("a.RESULT");

        assert!(filter.matches(&Intent::new("a.RESULT")));
        assert!(!filter.matches(&Intent::new("a.OTHER")));
        assert!(!filter.matches(&Intent::default()));
    }

    #[test]
    fn test_filter_categories() {
        let filter = IntentFilter::action("a.RESULT").add_category("cat.DEFAULT");

        assert!(filter.matches(&Intent::new("a.RESULT").category("cat.DEFAULT")));
        assert!(!filter.matches(&Intent::new("a.RESULT").category("cat.OTHER")));

        let bare = IntentFilter::action("a.RESULT");
        assert!(!bare.matches(&Intent::new("a.RESULT").category("cat.DEFAULT")));
    }

    #[test]
    fn test_intent_extras() {
        let intent = Intent::new("a.ACTION")
            .extra("COMMAND", "SET_CONFIG")
            .extra("INFO", Bundle::new());

        assert_eq!(intent.action(), Some("a.ACTION"));
        assert_eq!(intent.string_extra("COMMAND"), Some("SET_CONFIG"));
        assert_eq!(intent.string_extra("INFO"), None);
        assert!(intent.has_extra("INFO"));
    }
}

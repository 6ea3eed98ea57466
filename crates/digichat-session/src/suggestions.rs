//! Quick-reply suggestion controller.

/// At-most-one active set of ephemeral quick-reply options.
///
/// A later set replaces the earlier one (retire-then-show); selecting an
/// option retires the set. Stale interactions, such as selecting from a
/// set that has already been retired, are no-ops.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    active: Option<Vec<String>>,
}

impl Suggestions {
    /// Create a controller with no active set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a new option set, replacing any currently active set.
    ///
    /// Returns `false` on an empty sequence, which leaves any active set
    /// untouched.
    pub fn present(&mut self, options: Vec<String>) -> bool {
        if options.is_empty() {
            return false;
        }
        self.active = Some(options);
        true
    }

    /// Select an option from the active set, retiring the set.
    ///
    /// Returns `true` if `option` was one of the active options. With no
    /// active set, or an option outside it, the call is a no-op and the
    /// set (if any) stays active.
    pub fn select(&mut self, option: &str) -> bool {
        let known = self
            .active
            .as_ref()
            .is_some_and(|options| options.iter().any(|o| o == option));
        if known {
            self.active = None;
        }
        known
    }

    /// Currently active options. `None` if no set is active.
    pub fn active(&self) -> Option<&[String]> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn present_rejects_empty() {
        let mut suggestions = Suggestions::new();
        assert!(!suggestions.present(Vec::new()));
        assert_eq!(suggestions.active(), None);

        assert!(suggestions.present(options(&["a"])));
        assert!(!suggestions.present(Vec::new()));
        assert_eq!(suggestions.active(), Some(options(&["a"]).as_slice()));
    }

    #[test]
    fn later_set_replaces_earlier() {
        let mut suggestions = Suggestions::new();
        assert!(suggestions.present(options(&["a", "b"])));
        assert!(suggestions.present(options(&["c"])));
        assert_eq!(suggestions.active(), Some(options(&["c"]).as_slice()));

        // Options from the retired set are no longer selectable
        assert!(!suggestions.select("a"));
        assert_eq!(suggestions.active(), Some(options(&["c"]).as_slice()));
    }

    #[test]
    fn select_retires_the_set() {
        let mut suggestions = Suggestions::new();
        suggestions.present(options(&["a", "b"]));
        assert!(suggestions.select("b"));
        assert_eq!(suggestions.active(), None);

        // Second activation of the same control is stale
        assert!(!suggestions.select("b"));
    }

    #[test]
    fn select_with_no_active_set_is_noop() {
        let mut suggestions = Suggestions::new();
        assert!(!suggestions.select("a"));
    }
}

//! Ordered rule table.

use super::rules::default_rules;
use super::{DirectorySnapshot, Rule};

/// Ordered set of rules used to classify directories.
///
/// Position is priority: when several rules match a directory, the one
/// that comes first wins. The table is fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create a table with all built-in rules.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a table from custom rules, keeping their order.
    ///
    /// # Example
    /// ```
    /// use project_scanner::detector::{Rule, RuleTable};
    ///
    /// const ZIG: Rule = Rule::named("Zig").with_files(&["build.zig"]);
    /// let table = RuleTable::from_rules(vec![ZIG]);
    /// assert_eq!(table.names(), vec!["Zig"]);
    /// ```
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Name of the first rule matching `snapshot`, if any.
    pub fn classify(&self, snapshot: &DirectorySnapshot) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(snapshot))
            .map(|rule| rule.name)
    }

    /// All rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// List rule names in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Get the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

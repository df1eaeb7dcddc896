use std::collections::BTreeMap;

use eyre::{Context, Result};
use regex::Regex;

/// A named extraction rule. The first capture group of `regex` is the value.
#[derive(Debug, Clone)]
pub struct MetricRule {
    pub name: &'static str,
    regex: Regex,
}

impl MetricRule {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).context(format!("Compile pattern for '{name}'"))?;
        Ok(Self { name, regex })
    }

    /// First captured value in `text`, if the rule matches at all
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }
}

/// Fixed set of metric rules, each applied once against the whole text.
///
/// Keys whose rule does not match are absent from [`PatternTable::extract`],
/// never filled with a placeholder.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<MetricRule>,
}

impl PatternTable {
    pub fn new(rules: &[(&'static str, &str)]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|(name, pattern)| MetricRule::new(name, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn get(&self, name: &str) -> Option<&MetricRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn extract(&self, text: &str) -> BTreeMap<String, String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.find(text).map(|v| (rule.name.to_owned(), v.to_owned())))
            .collect()
    }
}

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::family::MetricFamily;
use crate::error::{Error, Result};

const RESERVED_LABEL_PREFIX: &str = "__";

lazy_static! {
    static ref METRIC_NAME_RE: Regex = Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").unwrap();
    static ref LABEL_NAME_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub fn is_valid_metric_name(name: &str) -> bool {
    METRIC_NAME_RE.is_match(name)
}

/// Label names starting with `__` are reserved for internal use.
pub fn is_valid_label_name(name: &str) -> bool {
    LABEL_NAME_RE.is_match(name) && !name.starts_with(RESERVED_LABEL_PREFIX)
}

impl MetricFamily {
    /// Checks the invariants the encoder takes for granted.
    ///
    /// Encoding never calls this; it is for callers that cannot vouch for
    /// their input.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_metric_name(self.name()) {
            return Err(Error::invalid(format!(
                "invalid metric name '{}'",
                self.name()
            )));
        }

        for sample in self.samples() {
            if !is_valid_metric_name(sample.name()) {
                return Err(Error::invalid(format!(
                    "{}: invalid sample name '{}'",
                    self.name(),
                    sample.name()
                )));
            }

            if sample.label_names().len() != sample.label_values().len() {
                return Err(Error::invalid(format!(
                    "{}: {} label names but {} label values",
                    sample.name(),
                    sample.label_names().len(),
                    sample.label_values().len()
                )));
            }

            let mut seen = HashSet::with_capacity(sample.label_names().len());
            for label in sample.label_names() {
                if !is_valid_label_name(label) {
                    return Err(Error::invalid(format!(
                        "{}: invalid label name '{}'",
                        sample.name(),
                        label
                    )));
                }
                if !seen.insert(label.as_str()) {
                    return Err(Error::invalid(format!(
                        "{}: duplicate label '{}'",
                        sample.name(),
                        label
                    )));
                }
            }
        }

        Ok(())
    }
}

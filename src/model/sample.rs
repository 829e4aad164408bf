use serde::{Deserialize, Serialize};

use super::types::{LabelName, LabelValue, MetricName, SampleValue, Timestamp};

/// One series of a metric family: a name, a positionally paired label set
/// and a value.
///
/// `label_names` and `label_values` must have the same length and the names
/// must be unique. The encoder trusts this; see `MetricFamily::validate()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    name: MetricName,
    #[serde(default)]
    label_names: Vec<LabelName>,
    #[serde(default)]
    label_values: Vec<LabelValue>,
    #[serde(with = "super::value")]
    value: SampleValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<Timestamp>,
}

impl Sample {
    pub fn new<N: Into<MetricName>>(
        name: N,
        label_names: Vec<LabelName>,
        label_values: Vec<LabelValue>,
        value: SampleValue,
    ) -> Self {
        Self {
            name: name.into(),
            label_names,
            label_values,
            value,
            timestamp: None,
        }
    }

    /// A sample without labels.
    pub fn plain<N: Into<MetricName>>(name: N, value: SampleValue) -> Self {
        Self::new(name, Vec::new(), Vec::new(), value)
    }

    /// Builds the label set from `(name, value)` pairs.
    pub fn labeled<N, I, K, V>(name: N, labels: I, value: SampleValue) -> Self
    where
        N: Into<MetricName>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<LabelName>,
        V: Into<LabelValue>,
    {
        let (label_names, label_values) = labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self::new(name, label_names, label_values, value)
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn label_names(&self) -> &[LabelName] {
        &self.label_names
    }

    #[inline]
    pub fn label_values(&self) -> &[LabelValue] {
        &self.label_values
    }

    /// Label pairs in their original order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.label_names
            .iter()
            .zip(self.label_values.iter())
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[inline]
    pub fn has_labels(&self) -> bool {
        !self.label_names.is_empty()
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    pub(crate) fn stamp(&mut self, timestamp: Timestamp) {
        if self.timestamp.is_none() {
            self.timestamp = Some(timestamp);
        }
    }
}

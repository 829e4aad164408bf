use std::fmt;

use serde::{Deserialize, Serialize};

use super::sample::Sample;
use super::types::{MetricName, Timestamp};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricType {
    Counter,
    Gauge,
    Summary,
    Histogram,
    Untyped,
}

impl MetricType {
    /// The spelling used on the `# TYPE` line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Gauge => "gauge",
            MetricType::Counter => "counter",
            MetricType::Summary => "summary",
            MetricType::Histogram => "histogram",
            MetricType::Untyped => "untyped",
        }
    }
}

impl Default for MetricType {
    fn default() -> Self {
        MetricType::Untyped
    }
}

// Total: anything unknown is untyped.
impl From<&str> for MetricType {
    fn from(s: &str) -> Self {
        match s {
            "counter" => MetricType::Counter,
            "gauge" => MetricType::Gauge,
            "summary" => MetricType::Summary,
            "histogram" => MetricType::Histogram,
            _ => MetricType::Untyped,
        }
    }
}

impl From<String> for MetricType {
    fn from(s: String) -> Self {
        MetricType::from(s.as_str())
    }
}

impl From<MetricType> for String {
    fn from(t: MetricType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed group of samples. Sample order is significant and is
/// preserved by the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFamily {
    name: MetricName,
    #[serde(default)]
    help: String,
    #[serde(rename = "type", default)]
    metric_type: MetricType,
    #[serde(default)]
    samples: Vec<Sample>,
}

impl MetricFamily {
    pub fn new<N, H>(name: N, metric_type: MetricType, help: H, samples: Vec<Sample>) -> Self
    where
        N: Into<MetricName>,
        H: Into<String>,
    {
        Self {
            name: name.into(),
            help: help.into(),
            metric_type,
            samples,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[inline]
    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sets `timestamp` on every sample that doesn't carry one yet.
    pub fn stamp(&mut self, timestamp: Timestamp) {
        for sample in self.samples.iter_mut() {
            sample.stamp(timestamp);
        }
    }
}

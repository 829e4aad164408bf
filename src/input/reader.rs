use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::model::MetricFamily;

/// Decodes a JSON array of metric families, standing in for a live metric
/// store.
///
/// ```json
/// [{"name": "up", "type": "gauge", "help": "Is it up.",
///   "samples": [{"name": "up", "label_names": ["job"], "label_values": ["api"], "value": 1}]}]
/// ```
pub struct SnapshotReader<R> {
    inner: R,
}

impl<R: Read> SnapshotReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read(self) -> Result<Vec<MetricFamily>> {
        let families: Vec<MetricFamily> = serde_json::from_reader(self.inner)
            .map_err(|e| ("decoding metric snapshot failed", e))?;

        debug!(
            families = families.len(),
            samples = families.iter().map(|f| f.samples().len()).sum::<usize>(),
            "metric snapshot decoded"
        );
        Ok(families)
    }
}

pub fn read_families<R: Read>(reader: R) -> Result<Vec<MetricFamily>> {
    SnapshotReader::new(reader).read()
}

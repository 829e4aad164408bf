use std::io::{Read, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::cliopt::CliOpt;
use crate::error::Result;
use crate::input::SnapshotReader;
use crate::model::{MetricFamily, MetricType, Sample, Timestamp};
use crate::output::{Output, TextEncoder};

// Reader -> SnapshotReader -> [validate] -> [stamp] -> [bench] -> TextEncoder -> Writer
//
// The runner is the only place that plays the metric store (a decoded JSON
// snapshot) and the transport (any io::Write). The encoder sees neither.

pub struct Runner {
    strict: bool,
    timestamp: Option<Timestamp>,
    bench: Option<u32>,
    content_type: bool,
}

impl Runner {
    pub fn new(opt: &CliOpt) -> Self {
        Self {
            strict: opt.strict,
            timestamp: opt.timestamp,
            bench: opt.bench,
            content_type: opt.content_type,
        }
    }

    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<W> {
        let mut output = Output::new(writer, Box::new(TextEncoder::new()));

        if self.content_type {
            let content_type = output.content_type();
            output.write_line(content_type)?;
            return output.into_inner();
        }

        let mut families = SnapshotReader::new(reader).read()?;

        if self.strict {
            for family in &families {
                family.validate()?;
            }
        }

        if let Some(ts) = self.timestamp {
            debug!(timestamp = ts, "stamping samples");
            for family in families.iter_mut() {
                family.stamp(ts);
            }
        }

        match self.bench {
            Some(iterations) => output.write(&bench(&families, iterations)?)?,
            None => output.write(&families)?,
        }

        output.into_inner()
    }
}

// Mirrors a scrape: every pass renders into a fresh-looking buffer of the
// usual size. The report is itself an exposition.
fn bench(families: &[MetricFamily], iterations: u32) -> Result<Vec<MetricFamily>> {
    let encoder = TextEncoder::new();
    let mut buf = Vec::with_capacity(10240);

    encoder
        .encode(families, &mut buf)
        .map_err(|e| ("warm-up encoding failed", e))?;
    let encoded_bytes = buf.len();

    let started = Instant::now();
    for _ in 0..iterations {
        buf.clear();
        encoder
            .encode(families, &mut buf)
            .map_err(|e| ("benchmark encoding failed", e))?;
    }
    let elapsed = started.elapsed();

    info!(
        iterations,
        elapsed_ms = elapsed.as_millis() as u64,
        encoded_bytes,
        "benchmark finished"
    );

    Ok(vec![
        MetricFamily::new(
            "promtext_encode_duration_seconds",
            MetricType::Gauge,
            "Wall time spent encoding the snapshot repeatedly.",
            vec![Sample::labeled(
                "promtext_encode_duration_seconds",
                vec![("iterations", iterations.to_string())],
                elapsed.as_secs_f64(),
            )],
        ),
        MetricFamily::new(
            "promtext_encoded_bytes",
            MetricType::Gauge,
            "Size of one encoded snapshot.",
            vec![Sample::plain("promtext_encoded_bytes", encoded_bytes as f64)],
        ),
    ])
}

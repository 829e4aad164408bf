//! Prometheus text exposition format, version 0.0.4.
//!
//! ```text
//! # HELP http_requests_total The total number of HTTP requests.
//! # TYPE http_requests_total counter
//! http_requests_total{method="post",code="200",} 1027 1395066363000
//! http_requests_total{method="post",code="400",} 3 1395066363000
//! ```

use std::io::{self, Write};

use super::encoder::Encoder;
use super::escape::{write_escaped_help, write_escaped_label_value};
use super::number::{write_timestamp, write_value};
use crate::model::{MetricFamily, Sample};

/// Content-type for text version 0.0.4.
pub const CONTENT_TYPE_004: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Writes families in the order given, samples in the order given.
///
/// Nothing is validated. If a sample has more label names than values (or
/// the other way round) the unpaired entries are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextEncoder {}

impl TextEncoder {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode<'a, I, W>(&self, families: I, w: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a MetricFamily>,
        W: Write + ?Sized,
    {
        for family in families {
            self.write_family(family, w)?;
        }
        Ok(())
    }

    fn write_family<W: Write + ?Sized>(&self, family: &MetricFamily, w: &mut W) -> io::Result<()> {
        w.write_all(b"# HELP ")?;
        w.write_all(family.name().as_bytes())?;
        w.write_all(b" ")?;
        write_escaped_help(w, family.help())?;
        w.write_all(b"\n# TYPE ")?;
        w.write_all(family.name().as_bytes())?;
        w.write_all(b" ")?;
        w.write_all(family.metric_type().as_str().as_bytes())?;
        w.write_all(b"\n")?;

        for sample in family.samples() {
            self.write_sample(sample, w)?;
        }
        Ok(())
    }

    fn write_sample<W: Write + ?Sized>(&self, sample: &Sample, w: &mut W) -> io::Result<()> {
        w.write_all(sample.name().as_bytes())?;

        if sample.has_labels() {
            w.write_all(b"{")?;
            for (name, value) in sample.labels() {
                w.write_all(name.as_bytes())?;
                w.write_all(b"=\"")?;
                write_escaped_label_value(w, value)?;
                w.write_all(b"\",")?;
            }
            w.write_all(b"}")?;
        }

        w.write_all(b" ")?;
        write_value(w, sample.value())?;

        if let Some(ts) = sample.timestamp() {
            w.write_all(b" ")?;
            write_timestamp(w, ts)?;
        }

        w.write_all(b"\n")
    }
}

impl Encoder for TextEncoder {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE_004
    }

    fn encode_family(&self, family: &MetricFamily, w: &mut dyn Write) -> io::Result<()> {
        self.write_family(family, w)
    }
}

/// Writes `families` to `w` in text format 0.0.4.
///
/// Output goes to the sink piece by piece; wrap unbuffered sinks in a
/// `BufWriter`.
pub fn encode<'a, I, W>(families: I, w: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a MetricFamily>,
    W: Write + ?Sized,
{
    TextEncoder::new().encode(families, w)
}

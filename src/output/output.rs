use std::io::{BufWriter, Write};

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::MetricFamily;

/// Pairs an encoder with a buffered sink. One `write()` is one scrape.
pub struct Output<W: Write> {
    writer: BufWriter<W>,
    encoder: Box<dyn Encoder>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, encoder: Box<dyn Encoder>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            encoder,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.encoder.content_type()
    }

    pub fn write<'a, I>(&mut self, families: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a MetricFamily>,
    {
        for family in families {
            self.encoder
                .encode_family(family, &mut self.writer)
                .map_err(|e| ("writing exposition failed", e))?;
        }

        self.writer
            .flush()
            .map_err(|e| ("flushing exposition failed", e))?;

        Ok(())
    }

    /// Writes a line that bypasses the encoder.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| ("writing output failed", e))?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ("flushing exposition failed", e.into_error()).into())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{MetricType, Sample};
    use crate::output::TextEncoder;

    #[test]
    fn test_write_and_take_back() -> Result<()> {
        let families = vec![
            MetricFamily::new("a", MetricType::Counter, "A.", vec![Sample::plain("a_total", 1.0)]),
            MetricFamily::new("b", MetricType::Gauge, "B.", vec![Sample::plain("b", 0.5)]),
        ];

        let mut output = Output::new(Vec::new(), Box::new(TextEncoder::new()));
        output.write(&families)?;
        output.write(&families[..1])?;
        assert_eq!("text/plain; version=0.0.4; charset=utf-8", output.content_type());

        let buf = output.into_inner()?;
        assert_eq!(
            "# HELP a A.\n# TYPE a counter\na_total 1\n\
             # HELP b B.\n# TYPE b gauge\nb 0.5\n\
             # HELP a A.\n# TYPE a counter\na_total 1\n",
            String::from_utf8_lossy(&buf)
        );
        Ok(())
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_sink_failure_is_an_io_error() {
        let families = vec![MetricFamily::new("a", MetricType::Gauge, "", vec![Sample::plain("a", 1.0)])];

        let mut output = Output::new(ClosedSink, Box::new(TextEncoder::new()));
        let err = output.write(&families).unwrap_err();
        assert_eq!(ErrorKind::Io, err.kind());
        assert!(err.to_string().starts_with("flushing exposition failed"), "{}", err);
    }
}

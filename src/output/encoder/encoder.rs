use std::io::{self, Write};

use crate::model::MetricFamily;

/// Renders metric families into some exposition format.
///
/// Implementations keep no state between calls, so one encoder can serve
/// concurrent scrapes as long as each has its own sink.
pub trait Encoder {
    /// The value for the `Content-Type` header of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Writes one family. A failed write is returned as is and nothing
    /// more is written.
    fn encode_family(&self, family: &MetricFamily, w: &mut dyn Write) -> io::Result<()>;
}

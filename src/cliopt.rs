use std::path::PathBuf;

use chrono::prelude::*;
use structopt::StructOpt;

use crate::error::Result;
use crate::model::Timestamp;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "promtext",
    about = "Render a JSON metric snapshot in the Prometheus text exposition format"
)]
pub struct CliOpt {
    /// Snapshot file; stdin when omitted.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Reject families with invalid names, labels or label arity.
    #[structopt(long = "strict")]
    pub strict: bool,

    /// Stamp samples that carry no timestamp (RFC 3339).
    #[structopt(long = "timestamp", short = "t", parse(try_from_str = parse_iso_time))]
    pub timestamp: Option<Timestamp>,

    /// Encode the snapshot N times and report the timing instead.
    #[structopt(long = "bench", short = "b")]
    pub bench: Option<u32>,

    /// Print the content type of the output and exit.
    #[structopt(long = "content-type")]
    pub content_type: bool,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

fn parse_iso_time(s: &str) -> Result<Timestamp> {
    s.parse::<DateTime<Utc>>()
        .map(|t| t.timestamp_millis())
        .map_err(|e| ("timestamp parsing failed", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_time() {
        #[rustfmt::skip]
        let tests = [
            ("2021-01-01T00:00:00Z",          1609459200000),
            ("2021-01-01T00:00:00.250Z",      1609459200250),
            ("2021-01-01T01:00:00+01:00",     1609459200000),
        ];

        for (input, expected) in &tests {
            let actual = parse_iso_time(input).unwrap_or_else(|e| panic!("failed to parse {}: {}", input, e));
            assert_eq!(*expected, actual);
        }
        assert!(parse_iso_time("yesterday").is_err());
    }

    #[test]
    fn test_flags() {
        let opt = CliOpt::from_iter(&["promtext", "--strict", "-t", "2021-01-01T00:00:00Z", "snap.json"]);
        assert!(opt.strict);
        assert_eq!(Some(1609459200000), opt.timestamp);
        assert_eq!(Some(PathBuf::from("snap.json")), opt.input);
        assert_eq!(None, opt.bench);
        assert!(!opt.content_type);
    }
}

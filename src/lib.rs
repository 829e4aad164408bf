//! Prometheus text exposition (format 0.0.4) for in-memory metric families.
//!
//! ```
//! use promtext::model::{MetricFamily, MetricType, Sample};
//!
//! let families = vec![MetricFamily::new(
//!     "requests_total",
//!     MetricType::Counter,
//!     "count\nof requests",
//!     vec![Sample::plain("requests_total", 42.0)],
//! )];
//!
//! let mut buf = Vec::new();
//! promtext::encode(&families, &mut buf).unwrap();
//! assert_eq!(
//!     "# HELP requests_total count\\nof requests\n# TYPE requests_total counter\nrequests_total 42\n",
//!     String::from_utf8(buf).unwrap(),
//! );
//! ```

pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod runner;

pub use output::encoder::encode;
pub use output::CONTENT_TYPE_004;

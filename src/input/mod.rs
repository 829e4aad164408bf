mod reader;

pub use reader::{read_families, SnapshotReader};

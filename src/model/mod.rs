mod family;
mod sample;
mod types;
mod validate;
mod value;

pub use family::*;
pub use sample::*;
pub use types::*;
pub use validate::{is_valid_label_name, is_valid_metric_name};

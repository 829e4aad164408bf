mod encoder;
mod escape;
mod number;
mod text;

pub use encoder::Encoder;
pub use escape::{write_escaped_help, write_escaped_label_value};
pub use number::{write_timestamp, write_value};
pub use text::{encode, TextEncoder, CONTENT_TYPE_004};

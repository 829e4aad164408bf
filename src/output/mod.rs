pub mod encoder;
mod output;

pub use encoder::{Encoder, TextEncoder, CONTENT_TYPE_004};
pub use output::Output;

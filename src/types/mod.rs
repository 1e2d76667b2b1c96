//! Base nullable scalar types.

mod int;
mod text;

pub use int::{scan_int, unmarshal_int, Int, NULL_INT};
pub use text::{scan_text, unmarshal_text, Text, NULL_TEXT};

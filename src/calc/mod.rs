//! Calculator domain primitives: operators, entry keys and the number
//! text conventions digit entry is built on.

mod entry;
pub mod number;
mod operator;

pub use entry::EntryKey;
pub use number::{parse_float, same_value, to_js_string};
pub use operator::Operator;

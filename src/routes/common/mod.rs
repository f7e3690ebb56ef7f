mod numeric;

pub use numeric::{to_decimal, to_float};

pub mod field_value;
pub mod price;
pub mod price_range;

pub use field_value::{FieldValue, UNAVAILABLE};
pub use price::Price;
pub use price_range::PriceRange;

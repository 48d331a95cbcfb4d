pub mod cart;
pub mod email;
pub mod nav;
pub mod pricing;

pub use cart::CartCounter;
pub use email::{
    EmailShape, classify_email, is_form_whitespace, trim_form_value, validate_email,
};
pub use nav::NavState;
pub use pricing::{
    ComputedTotal, DEFAULT_TOPPING_UNIT_PRICE, PriceTable, format_currency, format_price_value,
    parse_price_metadata,
};

use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed add-on price charged per checked topping.
pub const DEFAULT_TOPPING_UNIT_PRICE: Decimal = Decimal::from_parts(99, 0, 0, false, 2);

const CURRENCY_DECIMALS: u32 = 2;

/// Parses a price attached to page metadata (`data-price`).
///
/// Missing, blank, or malformed input yields zero instead of an error.
#[must_use]
pub fn parse_price_metadata(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Decimal::ZERO;
    };
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

fn saturated(direction: Decimal) -> Decimal {
    if direction.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly two decimals, e.g. `12.97`.
#[must_use]
pub fn format_price_value(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

/// Renders `value` as a currency string, e.g. `$12.97`.
#[must_use]
pub fn format_currency(symbol: &str, value: Decimal) -> String {
    format!("{symbol}{}", format_price_value(value))
}

/// Explicit option-value to price lookup.
///
/// Insertion order is kept so tables round-trip through config files
/// in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    entries: IndexMap<String, Decimal>,
}

impl PriceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_price(mut self, option: impl Into<String>, price: Decimal) -> Self {
        self.insert(option, price);
        self
    }

    pub fn insert(&mut self, option: impl Into<String>, price: Decimal) {
        self.entries.insert(option.into(), price);
    }

    /// Builds a table from `(option value, raw price metadata)` pairs.
    ///
    /// Unparseable metadata is stored as zero.
    #[must_use]
    pub fn from_metadata<I, K>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        let entries = options
            .into_iter()
            .map(|(option, raw)| (option.into(), parse_price_metadata(raw.as_deref())))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, option: &str) -> Option<Decimal> {
        self.entries.get(option).copied()
    }

    /// Price of `option`, or zero when it is unknown or absent.
    #[must_use]
    pub fn price_of(&self, option: Option<&str>) -> Decimal {
        option
            .and_then(|option| self.get(option))
            .unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries
            .iter()
            .map(|(option, price)| (option.as_str(), *price))
    }
}

/// Builder total derived from one selection pass.
///
/// The stored value is already rounded to cents so the displayed text and
/// the attached numeric attribute can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComputedTotal {
    value: Decimal,
}

impl ComputedTotal {
    /// `size + crust + topping_count * topping_unit_price`.
    ///
    /// Overflow saturates to `Decimal::MAX` (or `Decimal::MIN`) instead of
    /// failing, so extreme price metadata still yields a renderable total.
    #[must_use]
    pub fn from_parts(
        size_price: Decimal,
        crust_price: Decimal,
        topping_count: usize,
        topping_unit_price: Decimal,
    ) -> Self {
        let toppings = Decimal::from(topping_count as u64)
            .checked_mul(topping_unit_price)
            .unwrap_or_else(|| saturated(topping_unit_price));
        let total = [crust_price, toppings]
            .into_iter()
            .try_fold(size_price, |sum, term| {
                sum.checked_add(term).ok_or_else(|| saturated(term))
            })
            .unwrap_or_else(|bound| {
                warn!(%size_price, %crust_price, topping_count, "builder total overflowed, saturating");
                bound
            });
        Self::from_value(total)
    }

    #[must_use]
    pub fn from_value(value: Decimal) -> Self {
        Self {
            value: round_currency(value),
        }
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.value
    }

    /// Text for the total display element.
    #[must_use]
    pub fn display_text(self, currency_symbol: &str) -> String {
        format_currency(currency_symbol, self.value)
    }

    /// Raw numeric value attached to the total display element.
    #[must_use]
    pub fn attribute_value(self) -> String {
        format_price_value(self.value)
    }
}

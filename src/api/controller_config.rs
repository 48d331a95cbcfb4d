use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TOPPING_UNIT_PRICE, PriceTable};
use crate::error::{StorefrontError, StorefrontResult};

fn id(value: &str) -> String {
    value.to_owned()
}

/// Ids of the page elements the controller binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageElementIds {
    pub menu_toggle: String,
    pub nav: String,
    pub cart_count: String,
    pub newsletter_form: String,
    pub newsletter_email: String,
    pub newsletter_message: String,
    pub builder_modal: String,
    pub open_builder: String,
    pub close_builder: String,
    pub builder_form: String,
    pub size_select: String,
    pub crust_select: String,
    pub builder_total: String,
}

impl Default for PageElementIds {
    fn default() -> Self {
        Self {
            menu_toggle: id("menu-toggle"),
            nav: id("main-nav"),
            cart_count: id("cart-count"),
            newsletter_form: id("newsletter-form"),
            newsletter_email: id("newsletter-email"),
            newsletter_message: id("newsletter-msg"),
            builder_modal: id("builder-modal"),
            open_builder: id("open-builder"),
            close_builder: id("close-builder"),
            builder_form: id("builder-form"),
            size_select: id("size"),
            crust_select: id("crust"),
            builder_total: id("builder-total"),
        }
    }
}

impl PageElementIds {
    /// Every id paired with its field name, in declaration order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, &str); 13] {
        [
            ("menu_toggle", self.menu_toggle.as_str()),
            ("nav", self.nav.as_str()),
            ("cart_count", self.cart_count.as_str()),
            ("newsletter_form", self.newsletter_form.as_str()),
            ("newsletter_email", self.newsletter_email.as_str()),
            ("newsletter_message", self.newsletter_message.as_str()),
            ("builder_modal", self.builder_modal.as_str()),
            ("open_builder", self.open_builder.as_str()),
            ("close_builder", self.close_builder.as_str()),
            ("builder_form", self.builder_form.as_str()),
            ("size_select", self.size_select.as_str()),
            ("crust_select", self.crust_select.as_str()),
            ("builder_total", self.builder_total.as_str()),
        ]
    }
}

/// Mobile navigation presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub open_class: String,
    /// Inline `display` value forced while the panel is open.
    pub open_display: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            open_class: id("open"),
            open_display: id("block"),
        }
    }
}

/// Add-to-cart buttons and their transient acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartFeedbackConfig {
    pub add_button_class: String,
    pub added_label: String,
    pub revert_delay_ms: u64,
    pub default_item_name: String,
    pub currency_symbol: String,
}

impl Default for CartFeedbackConfig {
    fn default() -> Self {
        Self {
            add_button_class: id("btn-add"),
            added_label: id("Added ✓"),
            revert_delay_ms: 1_400,
            default_item_name: id("Item"),
            currency_symbol: id("$"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub invalid_message: String,
    pub success_message: String,
    pub failure_message: String,
    pub error_color: String,
    pub success_color: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            invalid_message: id("Please enter a valid email address."),
            success_message: id("Thanks for subscribing! Check your inbox."),
            failure_message: id("We couldn't subscribe you right now. Please try again later."),
            error_color: id("crimson"),
            success_color: id("green"),
        }
    }
}

/// Product builder pricing and wording.
///
/// When a price table is `None` it is harvested from the select options'
/// `data-price` metadata at controller initialization. Options added or
/// repriced afterwards are not seen; hosts that re-render the selects must
/// build a new controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub product_name: String,
    pub currency_symbol: String,
    pub topping_unit_price: Decimal,
    pub size_prices: Option<PriceTable>,
    pub crust_prices: Option<PriceTable>,
    pub order_failure_message: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            product_name: id("custom pizza"),
            currency_symbol: id("$"),
            topping_unit_price: DEFAULT_TOPPING_UNIT_PRICE,
            size_prices: None,
            crust_prices: None,
            order_failure_message: id("Sorry, we couldn't place your order. Please try again."),
        }
    }
}

/// Public controller bootstrap configuration.
///
/// This type is serializable so hosts can ship page wiring as data instead of
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageControllerConfig {
    #[serde(default)]
    pub elements: PageElementIds,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub cart: CartFeedbackConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
}

impl PageControllerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_elements(mut self, elements: PageElementIds) -> Self {
        self.elements = elements;
        self
    }

    /// Sets the label-revert delay for add-to-cart feedback.
    #[must_use]
    pub fn with_revert_delay_ms(mut self, delay_ms: u64) -> Self {
        self.cart.revert_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_topping_unit_price(mut self, price: Decimal) -> Self {
        self.builder.topping_unit_price = price;
        self
    }

    /// Replaces harvested size prices with an explicit table.
    #[must_use]
    pub fn with_size_prices(mut self, table: PriceTable) -> Self {
        self.builder.size_prices = Some(table);
        self
    }

    /// Replaces harvested crust prices with an explicit table.
    #[must_use]
    pub fn with_crust_prices(mut self, table: PriceTable) -> Self {
        self.builder.crust_prices = Some(table);
        self
    }

    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.builder.product_name = name.into();
        self
    }

    pub fn from_json_str(input: &str) -> StorefrontResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StorefrontError::InvalidConfig(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> StorefrontResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StorefrontError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

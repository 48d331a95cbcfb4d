use crate::error::{StorefrontError, StorefrontResult};

use super::{BuilderConfig, CartFeedbackConfig, NavConfig, NewsletterConfig, PageControllerConfig};

fn require_non_blank(field: &str, value: &str) -> StorefrontResult<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::InvalidConfig(format!(
            "`{field}` must not be blank"
        )));
    }
    Ok(())
}

fn require_plain_token(field: &str, value: &str) -> StorefrontResult<()> {
    require_non_blank(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(StorefrontError::InvalidConfig(format!(
            "`{field}` must not contain whitespace"
        )));
    }
    Ok(())
}

pub(super) fn validate_page_controller_config(
    config: &PageControllerConfig,
) -> StorefrontResult<()> {
    for (name, value) in config.elements.named() {
        require_plain_token(&format!("elements.{name}"), value)?;
    }
    validate_nav_config(&config.nav)?;
    validate_cart_feedback_config(&config.cart)?;
    validate_newsletter_config(&config.newsletter)?;
    validate_builder_config(&config.builder)?;
    Ok(())
}

fn validate_nav_config(config: &NavConfig) -> StorefrontResult<()> {
    require_plain_token("nav.open_class", &config.open_class)?;
    require_non_blank("nav.open_display", &config.open_display)
}

fn validate_cart_feedback_config(config: &CartFeedbackConfig) -> StorefrontResult<()> {
    require_plain_token("cart.add_button_class", &config.add_button_class)?;
    require_non_blank("cart.added_label", &config.added_label)?;
    require_non_blank("cart.default_item_name", &config.default_item_name)?;
    if config.revert_delay_ms == 0 {
        return Err(StorefrontError::InvalidConfig(
            "`cart.revert_delay_ms` must be > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_newsletter_config(config: &NewsletterConfig) -> StorefrontResult<()> {
    for (name, value) in [
        ("newsletter.invalid_message", &config.invalid_message),
        ("newsletter.success_message", &config.success_message),
        ("newsletter.failure_message", &config.failure_message),
        ("newsletter.error_color", &config.error_color),
        ("newsletter.success_color", &config.success_color),
    ] {
        require_non_blank(name, value)?;
    }
    Ok(())
}

fn validate_builder_config(config: &BuilderConfig) -> StorefrontResult<()> {
    require_non_blank("builder.product_name", &config.product_name)?;
    require_non_blank("builder.order_failure_message", &config.order_failure_message)?;
    if config.topping_unit_price.is_sign_negative() {
        return Err(StorefrontError::InvalidConfig(
            "`builder.topping_unit_price` must be >= 0".to_owned(),
        ));
    }
    for (name, table) in [
        ("builder.size_prices", &config.size_prices),
        ("builder.crust_prices", &config.crust_prices),
    ] {
        let Some(table) = table else {
            continue;
        };
        if let Some((option, _)) = table.iter().find(|(_, price)| price.is_sign_negative()) {
            return Err(StorefrontError::InvalidConfig(format!(
                "`{name}` price for `{option}` must be >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::core::PriceTable;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_page_controller_config(&PageControllerConfig::default()).is_ok());
    }

    #[test]
    fn rejects_blank_ids_and_zero_delay() {
        let mut config = PageControllerConfig::default();
        config.elements.nav = "  ".to_owned();
        assert!(matches!(
            validate_page_controller_config(&config),
            Err(StorefrontError::InvalidConfig(_))
        ));

        let config = PageControllerConfig::default().with_revert_delay_ms(0);
        assert!(validate_page_controller_config(&config).is_err());
    }

    #[test]
    fn rejects_negative_prices() {
        let config = PageControllerConfig::default().with_topping_unit_price(Decimal::new(-1, 2));
        assert!(validate_page_controller_config(&config).is_err());

        let config = PageControllerConfig::default()
            .with_size_prices(PriceTable::new().with_price("Small", Decimal::new(-600, 2)));
        assert!(validate_page_controller_config(&config).is_err());
    }
}

use super::{ElementKind, MemoryDocument, MemoryElement, SelectOption};

fn element(kind: ElementKind) -> MemoryElement {
    MemoryElement::new(kind)
}

fn add_button(name: &str, price: Option<&str>, label: &str) -> MemoryElement {
    let button = element(ElementKind::Button)
        .with_parent("menu")
        .with_class("btn")
        .with_class("btn-add")
        .with_attribute("data-name", name)
        .with_text(label);
    match price {
        Some(price) => button.with_attribute("data-price", price),
        None => button,
    }
}

fn topping(value: &str) -> MemoryElement {
    element(ElementKind::Checkbox)
        .with_parent("toppings")
        .with_attribute("type", "checkbox")
        .with_value(value)
}

/// Storefront page wired with the element ids used by the default config.
///
/// Defaults: medium size (8.00), classic crust (2.00), no toppings.
#[must_use]
pub fn sample_storefront_document() -> MemoryDocument {
    MemoryDocument::new()
        .with_element("site-header", element(ElementKind::Generic))
        .with_element(
            "menu-toggle",
            element(ElementKind::Button)
                .with_parent("site-header")
                .with_text("☰"),
        )
        .with_element(
            "cart-count",
            element(ElementKind::Generic)
                .with_parent("site-header")
                .with_text("0"),
        )
        .with_element(
            "main-nav",
            element(ElementKind::Generic).with_parent("site-header"),
        )
        .with_element(
            "nav-link-menu",
            element(ElementKind::Anchor)
                .with_parent("main-nav")
                .with_attribute("href", "#menu")
                .with_text("Menu"),
        )
        .with_element(
            "nav-link-contact",
            element(ElementKind::Anchor)
                .with_parent("main-nav")
                .with_attribute("href", "#contact")
                .with_text("Contact"),
        )
        .with_element(
            "nav-link-deals",
            element(ElementKind::Anchor)
                .with_parent("main-nav")
                .with_attribute("href", "#deals")
                .with_text("Deals"),
        )
        .with_element(
            "nav-link-top",
            element(ElementKind::Anchor)
                .with_parent("main-nav")
                .with_attribute("href", "#")
                .with_text("Top"),
        )
        .with_element(
            "nav-link-external",
            element(ElementKind::Anchor)
                .with_parent("main-nav")
                .with_attribute("href", "https://example.com/#menu")
                .with_text("Partner"),
        )
        .with_element("menu", element(ElementKind::Generic))
        .with_element(
            "add-margherita",
            add_button("Margherita", Some("9.50"), "Add to Cart"),
        )
        .with_element(
            "add-pepperoni",
            add_button("Pepperoni", Some("10.25"), "Add to Cart"),
        )
        .with_element("add-veggie", add_button("Veggie", Some("n/a"), "Order Now"))
        .with_element(
            "add-mystery",
            element(ElementKind::Button)
                .with_parent("menu")
                .with_class("btn-add")
                .with_text("Add to Cart"),
        )
        .with_element(
            "open-builder",
            element(ElementKind::Button)
                .with_parent("menu")
                .with_text("Build your own"),
        )
        .with_element("contact", element(ElementKind::Generic))
        .with_element(
            "newsletter-form",
            element(ElementKind::Form).with_parent("contact"),
        )
        .with_element(
            "newsletter-email",
            element(ElementKind::Input)
                .with_parent("newsletter-form")
                .with_attribute("type", "email"),
        )
        .with_element(
            "newsletter-submit",
            element(ElementKind::Button)
                .with_parent("newsletter-form")
                .with_text("Subscribe"),
        )
        .with_element(
            "newsletter-msg",
            element(ElementKind::Generic).with_parent("contact"),
        )
        .with_element(
            "builder-modal",
            element(ElementKind::Dialog).with_attribute("aria-hidden", "true"),
        )
        .with_element(
            "builder-content",
            element(ElementKind::Generic).with_parent("builder-modal"),
        )
        .with_element(
            "builder-title",
            element(ElementKind::Generic)
                .with_parent("builder-content")
                .with_text("Build your pizza"),
        )
        .with_element(
            "close-builder",
            element(ElementKind::Button)
                .with_parent("builder-content")
                .with_text("×"),
        )
        .with_element(
            "builder-form",
            element(ElementKind::Form).with_parent("builder-content"),
        )
        .with_element(
            "size",
            element(ElementKind::Select)
                .with_parent("builder-form")
                .with_option(SelectOption::new("Small", "Small 10\"").with_price("6.00"))
                .with_option(
                    SelectOption::new("Medium", "Medium 12\"")
                        .with_price("8.00")
                        .selected(),
                )
                .with_option(SelectOption::new("Large", "Large 14\"").with_price("10.00")),
        )
        .with_element(
            "crust",
            element(ElementKind::Select)
                .with_parent("builder-form")
                .with_option(SelectOption::new("Thin", "Thin").with_price("1.00"))
                .with_option(
                    SelectOption::new("Classic", "Classic")
                        .with_price("2.00")
                        .selected(),
                )
                .with_option(SelectOption::new("Stuffed", "Stuffed").with_price("3.50")),
        )
        .with_element(
            "toppings",
            element(ElementKind::Generic).with_parent("builder-form"),
        )
        .with_element("topping-cheese", topping("Extra cheese"))
        .with_element("topping-olives", topping("Olives"))
        .with_element("topping-basil", topping("Basil"))
        .with_element("topping-mushroom", topping("Mushroom"))
        .with_element(
            "builder-submit",
            element(ElementKind::Button)
                .with_parent("builder-form")
                .with_text("Add to order"),
        )
        .with_element(
            "builder-total",
            element(ElementKind::Generic)
                .with_parent("builder-content")
                .with_text("$0.00"),
        )
}

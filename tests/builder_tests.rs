use rust_decimal::Decimal;
use storefront_rs::api::{OrderOutcome, PageController, PageControllerConfig};
use storefront_rs::core::PriceTable;
use storefront_rs::document::{Document, MemoryDocument, sample_storefront_document};
use storefront_rs::interaction::PageEvent;
use storefront_rs::submission::{OrderSummary, SubmissionBackend, SubmissionError};

fn controller() -> PageController<MemoryDocument> {
    PageController::new(sample_storefront_document(), PageControllerConfig::default())
        .expect("controller init")
}

fn total_text(controller: &PageController<MemoryDocument>) -> String {
    controller
        .document()
        .text("builder-total")
        .expect("total element")
}

fn check(controller: &mut PageController<MemoryDocument>, id: &str, checked: bool) {
    controller.document_mut().set_checked(id, checked);
    controller
        .dispatch(&PageEvent::change(id))
        .expect("topping change");
}

#[test]
fn opening_renders_total_from_default_selections() {
    let mut controller = controller();
    assert_eq!(total_text(&controller), "$0.00");

    controller
        .dispatch(&PageEvent::click("open-builder"))
        .expect("open");
    assert!(controller.is_builder_open());
    assert_eq!(
        controller
            .document()
            .attribute("builder-modal", "aria-hidden")
            .as_deref(),
        Some("false")
    );
    assert_eq!(total_text(&controller), "$10.00");
    assert_eq!(
        controller
            .document()
            .attribute("builder-total", "data-price")
            .as_deref(),
        Some("10.00")
    );
}

#[test]
fn reference_total_with_three_toppings() {
    let mut controller = controller();
    controller.open_builder().expect("open");
    for topping in ["topping-cheese", "topping-olives", "topping-basil"] {
        check(&mut controller, topping, true);
    }
    assert_eq!(total_text(&controller), "$12.97");
    assert_eq!(
        controller.last_builder_total().map(|total| total.value()),
        Some(Decimal::new(1297, 2))
    );
}

#[test]
fn select_changes_recompute_total() {
    let mut controller = controller();
    controller.open_builder().expect("open");

    controller.document_mut().select_option("size", "Large");
    controller
        .dispatch(&PageEvent::change("size"))
        .expect("size change");
    assert_eq!(total_text(&controller), "$12.00");

    controller.document_mut().select_option("crust", "Stuffed");
    controller
        .dispatch(&PageEvent::change("crust"))
        .expect("crust change");
    assert_eq!(total_text(&controller), "$13.50");

    check(&mut controller, "topping-mushroom", true);
    check(&mut controller, "topping-mushroom", false);
    assert_eq!(total_text(&controller), "$13.50");
}

#[test]
fn reopening_reflects_previous_selections() {
    let mut controller = controller();
    controller.open_builder().expect("open");
    controller.document_mut().select_option("size", "Small");
    controller
        .dispatch(&PageEvent::change("size"))
        .expect("size change");
    controller.close_builder().expect("close");

    controller.document_mut().set_checked("topping-olives", true);
    controller.open_builder().expect("reopen");
    assert_eq!(total_text(&controller), "$8.99");
}

#[test]
fn confirm_uses_last_displayed_price_not_a_fresh_computation() {
    let mut controller = controller();
    controller.open_builder().expect("open");
    for topping in ["topping-cheese", "topping-olives", "topping-basil"] {
        check(&mut controller, topping, true);
    }

    // Unchecked without a change event: the display is stale on purpose.
    controller.document_mut().set_checked("topping-basil", false);
    let outcome = controller
        .dispatch(&PageEvent::submit("builder-form"))
        .expect("confirm");
    assert!(outcome.default_prevented);

    assert_eq!(
        controller.document().alerts(),
        ["Added custom pizza (Medium, Classic, Extra cheese, Olives) — $12.97"]
    );
    assert_eq!(controller.cart_count(), 1);
    assert!(!controller.is_builder_open());
}

#[test]
fn confirm_without_toppings_omits_topping_list() {
    let mut controller = controller();
    controller.open_builder().expect("open");
    let outcome = controller.confirm_order().expect("confirm");

    let OrderOutcome::Confirmed {
        summary,
        cart_count,
    } = outcome
    else {
        panic!("expected a confirmed order");
    };
    assert_eq!(cart_count, 1);
    assert!(summary.toppings.is_empty());
    assert_eq!(
        controller.document().alerts(),
        ["Added custom pizza (Medium, Classic) — $10.00"]
    );
}

#[test]
fn confirm_before_any_recompute_reads_zero_price() {
    let mut controller = controller();
    controller.confirm_order().expect("confirm");
    assert_eq!(
        controller.document().alerts(),
        ["Added custom pizza (Medium, Classic) — $0.00"]
    );
}

#[test]
fn builder_and_plain_adds_share_the_cart() {
    let mut controller = controller();
    controller.add_to_cart("add-margherita").expect("add");
    controller.open_builder().expect("open");
    controller.confirm_order().expect("confirm");
    controller.add_to_cart("add-pepperoni").expect("add");
    assert_eq!(controller.cart_count(), 3);
    assert_eq!(
        controller.document().text("cart-count").as_deref(),
        Some("3")
    );
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let mut controller = controller();
    controller.open_builder().expect("open");

    controller
        .dispatch(&PageEvent::click("builder-title"))
        .expect("content click");
    assert!(controller.is_builder_open());

    controller
        .dispatch(&PageEvent::click("builder-content"))
        .expect("content click");
    assert!(controller.is_builder_open());

    controller
        .dispatch(&PageEvent::click("builder-modal"))
        .expect("backdrop click");
    assert!(!controller.is_builder_open());
    assert_eq!(
        controller
            .document()
            .attribute("builder-modal", "aria-hidden")
            .as_deref(),
        Some("true")
    );
}

#[test]
fn close_control_closes_dialog() {
    let mut controller = controller();
    controller.open_builder().expect("open");
    let outcome = controller
        .dispatch(&PageEvent::click("close-builder"))
        .expect("close click");
    assert!(!controller.is_builder_open());
    assert_eq!(outcome.handlers_invoked, 2);
}

#[test]
fn malformed_option_metadata_prices_as_zero() {
    let mut document = sample_storefront_document();
    document.insert(
        "size",
        storefront_rs::document::MemoryElement::new(storefront_rs::document::ElementKind::Select)
            .with_parent("builder-form")
            .with_option(
                storefront_rs::document::SelectOption::new("Huge", "Huge")
                    .with_price("twelve")
                    .selected(),
            ),
    );
    let mut controller =
        PageController::new(document, PageControllerConfig::default()).expect("controller init");
    assert_eq!(controller.open_builder().expect("open").value(), Decimal::new(200, 2));
    assert_eq!(total_text(&controller), "$2.00");
}

fn document_with_size_price(raw_price: &str) -> MemoryDocument {
    let mut document = sample_storefront_document();
    document.insert(
        "size",
        storefront_rs::document::MemoryElement::new(storefront_rs::document::ElementKind::Select)
            .with_parent("builder-form")
            .with_option(
                storefront_rs::document::SelectOption::new("Huge", "Huge")
                    .with_price(raw_price)
                    .selected(),
            ),
    );
    document
}

#[test]
fn extreme_option_metadata_saturates_total() {
    let document = document_with_size_price("79228162514264337593543950335");
    let mut controller =
        PageController::new(document, PageControllerConfig::default()).expect("controller init");

    let total = controller.open_builder().expect("open");
    assert_eq!(total.value(), Decimal::MAX);
    assert_eq!(total_text(&controller), "$79228162514264337593543950335.00");

    check(&mut controller, "topping-olives", true);
    controller
        .dispatch(&PageEvent::change("crust"))
        .expect("crust change");
    assert_eq!(
        controller.last_builder_total().map(|total| total.value()),
        Some(Decimal::MAX)
    );
    assert!(total_text(&controller).starts_with('$'));
}

#[test]
fn large_scientific_metadata_still_renders_a_total() {
    let document = document_with_size_price("7.9e28");
    let mut controller =
        PageController::new(document, PageControllerConfig::default()).expect("controller init");

    let total = controller.open_builder().expect("open");
    let size_price = Decimal::from_scientific("7.9e28").expect("scientific literal");
    assert!(total.value() >= size_price);
    assert!(total_text(&controller).starts_with('$'));
    assert!(total_text(&controller).ends_with(".00"));
}

#[test]
fn extreme_topping_price_from_json_config_saturates_total() {
    let json = PageControllerConfig::default()
        .with_topping_unit_price(Decimal::MAX)
        .to_json_pretty()
        .expect("serialize config");
    let config = PageControllerConfig::from_json_str(&json).expect("parse config");
    let mut controller =
        PageController::new(sample_storefront_document(), config).expect("controller init");

    controller.open_builder().expect("open");
    check(&mut controller, "topping-cheese", true);
    check(&mut controller, "topping-basil", true);

    assert_eq!(
        controller.last_builder_total().map(|total| total.value()),
        Some(Decimal::MAX)
    );
    assert_eq!(total_text(&controller), "$79228162514264337593543950335.00");
}

#[test]
fn explicit_price_tables_override_option_metadata() {
    let config = PageControllerConfig::default()
        .with_size_prices(
            PriceTable::new()
                .with_price("Small", Decimal::new(500, 2))
                .with_price("Medium", Decimal::new(700, 2)),
        )
        .with_crust_prices(PriceTable::new().with_price("Classic", Decimal::ZERO))
        .with_topping_unit_price(Decimal::new(150, 2));
    let mut controller =
        PageController::new(sample_storefront_document(), config).expect("controller init");

    controller.open_builder().expect("open");
    check(&mut controller, "topping-cheese", true);
    assert_eq!(total_text(&controller), "$8.50");
    assert_eq!(controller.crust_prices().len(), 1);
}

struct RejectingBackend;

impl SubmissionBackend for RejectingBackend {
    fn subscribe(&mut self, _email: &str) -> Result<(), SubmissionError> {
        Ok(())
    }

    fn place_order(&mut self, _order: &OrderSummary) -> Result<(), SubmissionError> {
        Err(SubmissionError::Rejected("kitchen closed".to_owned()))
    }
}

#[test]
fn order_failure_leaves_cart_and_dialog_untouched() {
    let mut controller = controller();
    controller.set_submission_backend(Box::new(RejectingBackend));
    controller.open_builder().expect("open");

    let outcome = controller.confirm_order().expect("confirm");
    assert_eq!(
        outcome,
        OrderOutcome::Failed {
            reason: "submission rejected: kitchen closed".to_owned()
        }
    );
    assert_eq!(controller.cart_count(), 0);
    assert!(controller.is_builder_open());
    assert_eq!(
        controller.document().alerts(),
        ["Sorry, we couldn't place your order. Please try again."]
    );
}

#[test]
fn option_prices_are_captured_at_init_and_refreshed_by_rebuilding() {
    let mut controller = controller();
    controller.document_mut().insert(
        "size",
        storefront_rs::document::MemoryElement::new(storefront_rs::document::ElementKind::Select)
            .with_parent("builder-form")
            .with_option(
                storefront_rs::document::SelectOption::new("Medium", "Medium")
                    .with_price("20.00")
                    .selected(),
            ),
    );
    assert_eq!(
        controller.open_builder().expect("open").value(),
        Decimal::new(1000, 2)
    );

    let mut rebuilt = PageController::new(controller.into_document(), PageControllerConfig::default())
        .expect("controller init");
    assert_eq!(
        rebuilt.open_builder().expect("open").value(),
        Decimal::new(2200, 2)
    );
}

use std::time::Duration;

use storefront_rs::api::{PageController, PageControllerConfig};
use storefront_rs::document::{Document, MemoryDocument, sample_storefront_document};
use storefront_rs::interaction::PageEvent;

fn controller() -> PageController<MemoryDocument> {
    PageController::new(sample_storefront_document(), PageControllerConfig::default())
        .expect("controller init")
}

fn label(controller: &PageController<MemoryDocument>, id: &str) -> String {
    controller.document().text(id).expect("element exists")
}

#[test]
fn add_buttons_share_one_counter_and_render_it() {
    let mut controller = controller();
    for (index, button) in ["add-margherita", "add-pepperoni", "add-margherita", "add-veggie"]
        .into_iter()
        .enumerate()
    {
        controller
            .dispatch(&PageEvent::click(button))
            .expect("add click");
        let expected = (index + 1) as u64;
        assert_eq!(controller.cart_count(), expected);
        assert_eq!(label(&controller, "cart-count"), expected.to_string());
    }
}

#[test]
fn add_to_cart_shows_ack_then_reverts_after_delay() {
    let mut controller = controller();
    controller
        .dispatch(&PageEvent::click("add-veggie"))
        .expect("add click");
    assert_eq!(label(&controller, "add-veggie"), "Added ✓");
    assert_eq!(controller.pending_task_count(), 1);

    assert_eq!(
        controller
            .advance_time(Duration::from_millis(1_399))
            .expect("advance"),
        0
    );
    assert_eq!(label(&controller, "add-veggie"), "Added ✓");

    assert_eq!(
        controller
            .advance_time(Duration::from_millis(1))
            .expect("advance"),
        1
    );
    assert_eq!(label(&controller, "add-veggie"), "Order Now");
    assert_eq!(controller.pending_task_count(), 0);
}

#[test]
fn repeated_click_keeps_original_label_and_restarts_delay() {
    let mut controller = controller();
    controller
        .dispatch(&PageEvent::click("add-margherita"))
        .expect("first click");
    controller
        .advance_time(Duration::from_millis(1_000))
        .expect("advance");
    controller
        .dispatch(&PageEvent::click("add-margherita"))
        .expect("second click");
    assert_eq!(controller.pending_task_count(), 1);

    controller
        .advance_time(Duration::from_millis(1_000))
        .expect("advance");
    assert_eq!(label(&controller, "add-margherita"), "Added ✓");

    controller
        .advance_time(Duration::from_millis(400))
        .expect("advance");
    assert_eq!(label(&controller, "add-margherita"), "Add to Cart");
    assert_eq!(controller.cart_count(), 2);
}

#[test]
fn revert_on_removed_button_is_a_noop() {
    let mut controller = controller();
    controller
        .dispatch(&PageEvent::click("add-pepperoni"))
        .expect("add click");
    controller.document_mut().remove("add-pepperoni");

    let executed = controller
        .advance_time(Duration::from_secs(2))
        .expect("advance");
    assert_eq!(executed, 0);
    assert_eq!(controller.document().skipped_mutations(), 0);
    assert_eq!(controller.pending_task_count(), 0);
}

#[test]
fn notify_removal_and_teardown_cancel_pending_reverts() {
    let mut controller = controller();
    controller.add_to_cart("add-margherita").expect("add");
    controller.add_to_cart("add-pepperoni").expect("add");
    controller.add_to_cart("add-veggie").expect("add");
    assert_eq!(controller.pending_task_count(), 3);

    assert_eq!(controller.notify_element_removed("add-margherita"), 1);
    assert_eq!(controller.teardown(), 2);
    assert_eq!(
        controller
            .advance_time(Duration::from_secs(5))
            .expect("advance"),
        0
    );
    assert_eq!(label(&controller, "add-pepperoni"), "Added ✓");
}

#[test]
fn missing_metadata_falls_back_to_defaults() {
    let mut controller = controller();
    assert_eq!(controller.add_to_cart("add-mystery").expect("add"), 1);
    assert_eq!(controller.add_to_cart("add-veggie").expect("add"), 2);
    assert_eq!(label(&controller, "cart-count"), "2");
}

#[test]
fn custom_revert_delay_is_honored() {
    let config = PageControllerConfig::default().with_revert_delay_ms(250);
    let mut controller =
        PageController::new(sample_storefront_document(), config).expect("controller init");
    controller.add_to_cart("add-margherita").expect("add");
    controller
        .advance_time(Duration::from_millis(250))
        .expect("advance");
    assert_eq!(label(&controller, "add-margherita"), "Add to Cart");
}

#[test]
fn direct_add_for_unknown_button_leaves_cart_untouched() {
    let mut controller = controller();
    controller.add_to_cart("add-margherita").expect("add");
    assert_eq!(controller.add_to_cart("no-such-button").expect("add"), 1);
    assert_eq!(controller.cart_count(), 1);
    assert_eq!(label(&controller, "cart-count"), "1");
    assert_eq!(controller.pending_task_count(), 1);
}

use storefront_rs::api::{PageController, PageControllerConfig};
use storefront_rs::document::{
    MemoryDocument, ScrollBehavior, ScrollBlock, ScrollRecord, sample_storefront_document,
};
use storefront_rs::interaction::PageEvent;

fn controller() -> PageController<MemoryDocument> {
    PageController::new(sample_storefront_document(), PageControllerConfig::default())
        .expect("controller init")
}

#[test]
fn known_fragment_scrolls_smoothly_to_top_and_prevents_default() {
    let mut controller = controller();
    let outcome = controller
        .dispatch(&PageEvent::click("nav-link-contact"))
        .expect("anchor click");

    assert!(outcome.default_prevented);
    assert_eq!(
        controller.document().scroll_history(),
        [ScrollRecord {
            id: "contact".to_owned(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }]
    );
}

#[test]
fn anchor_click_closes_open_nav() {
    let mut controller = controller();
    controller.toggle_nav().expect("open nav");

    controller
        .dispatch(&PageEvent::click("nav-link-menu"))
        .expect("anchor click");
    assert!(!controller.is_nav_open());
    assert_eq!(controller.document().style("main-nav", "display"), None);
}

#[test]
fn missing_fragment_target_keeps_default_navigation() {
    let mut controller = controller();
    controller.toggle_nav().expect("open nav");

    let outcome = controller
        .dispatch(&PageEvent::click("nav-link-deals"))
        .expect("anchor click");
    assert!(!outcome.default_prevented);
    assert_eq!(outcome.handlers_invoked, 1);
    assert!(controller.document().scroll_history().is_empty());
    assert!(controller.is_nav_open());
}

#[test]
fn bare_hash_and_external_links_are_not_intercepted() {
    let mut controller = controller();

    let bare = controller
        .dispatch(&PageEvent::click("nav-link-top"))
        .expect("bare hash");
    assert!(!bare.default_prevented);

    let external = controller
        .dispatch(&PageEvent::click("nav-link-external"))
        .expect("external link");
    assert_eq!(external.handlers_invoked, 0);
    assert!(controller.document().scroll_history().is_empty());
}

#[test]
fn scroll_to_fragment_can_be_called_directly() {
    let mut controller = controller();
    assert!(controller.scroll_to_fragment("#menu").expect("scroll"));
    assert!(!controller.scroll_to_fragment("menu").expect("no hash"));
    assert!(!controller.scroll_to_fragment("#").expect("empty"));
    assert_eq!(controller.document().scroll_history().len(), 1);
}

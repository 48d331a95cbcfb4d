use tracing::debug;

use crate::core::{CartCounter, NavState, PriceTable};
use crate::document::Document;
use crate::error::{StorefrontError, StorefrontResult};
use crate::interaction::{BindingTable, EventKind, HandlerBinding, HandlerId, Selector, TaskScheduler};
use crate::submission::SimulatedBackend;

use super::page_controller::BuilderState;
use super::validation::validate_page_controller_config;
use super::{PageController, PageControllerConfig};

fn harvest_price_table<D: Document>(document: &D, select_id: &str) -> PriceTable {
    PriceTable::from_metadata(
        document
            .select_options(select_id)
            .into_iter()
            .map(|option| (option.value, option.price)),
    )
}

fn by_id(id: &str) -> Selector {
    Selector::Id(id.to_owned())
}

fn default_bindings(config: &PageControllerConfig) -> BindingTable {
    let ids = &config.elements;

    let mut table = BindingTable::new();
    for (kind, selector, handler) in [
        (EventKind::Click, by_id(&ids.menu_toggle), HandlerId::ToggleNav),
        (EventKind::Click, Selector::FragmentLink, HandlerId::ScrollToAnchor),
        (
            EventKind::Click,
            Selector::Class(config.cart.add_button_class.clone()),
            HandlerId::AddToCart,
        ),
        (EventKind::Submit, by_id(&ids.newsletter_form), HandlerId::SubmitNewsletter),
        (EventKind::Click, by_id(&ids.open_builder), HandlerId::OpenBuilder),
        (EventKind::Click, by_id(&ids.close_builder), HandlerId::CloseBuilder),
        (EventKind::Click, by_id(&ids.builder_modal), HandlerId::BuilderBackdropClick),
        (EventKind::Change, by_id(&ids.size_select), HandlerId::RecomputeBuilderTotal),
        (EventKind::Change, by_id(&ids.crust_select), HandlerId::RecomputeBuilderTotal),
        (
            EventKind::Change,
            Selector::CheckboxWithin(ids.builder_form.clone()),
            HandlerId::RecomputeBuilderTotal,
        ),
        (EventKind::Submit, by_id(&ids.builder_form), HandlerId::ConfirmOrder),
    ] {
        table.register(HandlerBinding::new(kind, selector, handler));
    }
    table
}

impl<D: Document> PageController<D> {
    /// Wires the controller onto a ready page.
    ///
    /// Fails when the config is invalid or a required element is missing;
    /// nothing on the page is mutated during initialization.
    pub fn new(document: D, config: PageControllerConfig) -> StorefrontResult<Self> {
        validate_page_controller_config(&config)?;
        for (_, id) in config.elements.named() {
            if !document.contains(id) {
                return Err(StorefrontError::MissingElement { id: id.to_owned() });
            }
        }

        let size_prices = config
            .builder
            .size_prices
            .clone()
            .unwrap_or_else(|| harvest_price_table(&document, &config.elements.size_select));
        let crust_prices = config
            .builder
            .crust_prices
            .clone()
            .unwrap_or_else(|| harvest_price_table(&document, &config.elements.crust_select));
        let bindings = default_bindings(&config);
        debug!(
            bindings = bindings.len(),
            sizes = size_prices.len(),
            crusts = crust_prices.len(),
            "page controller initialized"
        );

        Ok(Self {
            document,
            nav: NavState::default(),
            cart: CartCounter::default(),
            builder: BuilderState {
                open: false,
                size_prices,
                crust_prices,
                last_total: None,
            },
            bindings,
            scheduler: TaskScheduler::new(),
            plugins: Vec::new(),
            backend: Box::new(SimulatedBackend::default()),
            config,
        })
    }
}

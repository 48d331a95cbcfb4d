mod builder_controller;
mod cart_controller;
mod controller_config;
mod controller_init;
mod dispatch;
mod json_contract;
mod nav_controller;
mod newsletter_controller;
mod page_controller;
mod page_snapshot;
mod plugin_dispatch;
mod plugin_registry;
mod scheduler_controller;
mod validation;

pub use builder_controller::OrderOutcome;
pub use controller_config::{
    BuilderConfig, CartFeedbackConfig, NavConfig, NewsletterConfig, PageControllerConfig,
    PageElementIds,
};
pub use json_contract::{PAGE_SNAPSHOT_JSON_SCHEMA_V1, PageSnapshotJsonContractV1};
pub use newsletter_controller::NewsletterOutcome;
pub use page_controller::PageController;
pub use page_snapshot::PageSnapshot;

//! One client per Box Office service.
//!
//! Each client validates its arguments, builds [`RequestParameters`](crate::api::RequestParameters)
//! for its URL templates and runs them through the shared
//! [`ServiceCore`](crate::client::ServiceCore).

pub mod basket;
pub mod checkout;
pub mod content;
pub mod inventory;
pub mod payment;
pub mod pricing;
pub mod venue;

pub use basket::BasketServiceClient;
pub use checkout::CheckoutServiceClient;
pub use content::ContentServiceClient;
pub use inventory::InventoryServiceClient;
pub use payment::PaymentServiceClient;
pub use pricing::PricingServiceClient;
pub use venue::VenueServiceClient;

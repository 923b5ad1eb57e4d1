//! Remote collaborators: the backend API client, the logistics
//! pass-through, and the hosted checkout gateway.
//!
//! None of these carry business logic; the stores decide, these forward.

pub mod api;
pub mod checkout;
pub mod logistics;

pub use api::{ApiClient, ApiError};
pub use checkout::{CheckoutGateway, CheckoutOrder, CheckoutSession};
pub use logistics::{LogisticsClient, ShipmentRequest};

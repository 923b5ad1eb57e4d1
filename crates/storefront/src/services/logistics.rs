//! Logistics pass-through for the Pickrr courier integration.
//!
//! This layer performs no business logic: it forwards the order payload
//! to the backend and hands responses back verbatim as JSON. Tracking
//! lookups are read-only and get a short-lived cache in front of them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

use panther_core::{Amount, ProductId, ShipmentId};

use crate::services::api::{ApiClient, ApiError};

/// Delivery address for a shipment.
#[derive(Debug, Clone, Serialize)]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
}

/// One shipped line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Amount,
}

/// Order payload forwarded to the courier backend.
///
/// Field names are camelCase on the wire. `extra` lets callers forward
/// fields this layer does not interpret.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    /// Client-generated order reference.
    pub reference: Uuid,
    pub order_date: DateTime<Utc>,
    pub address: ShippingAddress,
    pub items: Vec<ShipmentItem>,
    /// Amount still to collect on delivery (whole rupees).
    pub cod_amount: Amount,
    /// Whether the shipping fee was prepaid.
    pub shipping_paid: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Client for shipment creation and tracking.
#[derive(Clone)]
pub struct LogisticsClient {
    api: ApiClient,
    tracking_cache: Cache<String, Value>,
}

impl LogisticsClient {
    /// Create a new logistics client sharing `api`'s connection pool and
    /// session header.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let tracking_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            api,
            tracking_cache,
        }
    }

    /// Forward an order payload for shipment creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, request), fields(reference = %request.reference))]
    pub async fn create_shipment(&self, request: &ShipmentRequest) -> Result<Value, ApiError> {
        self.api
            .post_json("logistics/pickrr/create-shipment/", request)
            .await
    }

    /// Fetch the tracking record for a shipment.
    ///
    /// Responses are cached for five minutes; tracking state changes
    /// slowly and the lookup is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn track_shipment(&self, shipment_id: &ShipmentId) -> Result<Value, ApiError> {
        if let Some(record) = self.tracking_cache.get(shipment_id.as_str()).await {
            debug!("cache hit for tracking record");
            return Ok(record);
        }

        let record: Value = self
            .api
            .get_json(&format!("logistics/pickrr/track/{shipment_id}/"))
            .await?;

        self.tracking_cache
            .insert(shipment_id.as_str().to_owned(), record.clone())
            .await;

        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> ShipmentRequest {
        ShipmentRequest {
            reference: Uuid::new_v4(),
            order_date: Utc::now(),
            address: ShippingAddress {
                name: "Arjun Mehta".to_owned(),
                line1: "14 MG Road".to_owned(),
                line2: None,
                city: "Bengaluru".to_owned(),
                state: "Karnataka".to_owned(),
                pincode: "560001".to_owned(),
                phone: "+919900112233".to_owned(),
            },
            items: vec![ShipmentItem {
                product_id: ProductId::new("panther-core"),
                name: "Panther Core".to_owned(),
                quantity: 2,
                price: Amount::new(1999),
            }],
            cod_amount: Amount::new(3998),
            shipping_paid: true,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let value = serde_json::to_value(request()).unwrap();

        assert!(value.get("codAmount").is_some());
        assert!(value.get("shippingPaid").is_some());
        assert!(value.get("orderDate").is_some());
        assert_eq!(
            value["items"][0]["productId"],
            serde_json::json!("panther-core")
        );
        // line2 is omitted when absent.
        assert!(value["address"].get("line2").is_none());
    }

    #[test]
    fn test_extra_fields_are_flattened() {
        let mut req = request();
        req.extra.insert(
            "warehouseHint".to_owned(),
            serde_json::json!("blr-south"),
        );

        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value["warehouseHint"], serde_json::json!("blr-south"));
    }
}

//! Shipment commands.

use chrono::Utc;
use clap::Args;
use uuid::Uuid;

use panther_core::ShipmentId;
use panther_storefront::error::{AppError, Result};
use panther_storefront::services::logistics::{ShipmentItem, ShipmentRequest, ShippingAddress};

use super::Session;

/// Delivery address flags for `shipment create`.
#[derive(Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub line1: String,
    #[arg(long)]
    pub line2: Option<String>,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub pincode: String,
    #[arg(long)]
    pub phone: String,
}

/// Forward the current cart as a shipment order.
///
/// Panther ships partial-COD: the flat shipping fee is prepaid, the goods
/// amount is collected on delivery.
pub async fn create(session: &Session, address: AddressArgs) -> Result<()> {
    if session.cart.count() == 0 {
        return Err(AppError::BadRequest("cart is empty".to_owned()));
    }

    let items = session
        .cart
        .items()
        .iter()
        .map(|line| ShipmentItem {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price,
        })
        .collect();

    let request = ShipmentRequest {
        reference: Uuid::new_v4(),
        order_date: Utc::now(),
        address: ShippingAddress {
            name: address.name,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            pincode: address.pincode,
            phone: address.phone,
        },
        items,
        cod_amount: session.cart.subtotal(),
        shipping_paid: true,
        extra: serde_json::Map::new(),
    };

    let record = session.logistics.create_shipment(&request).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string())
    );
    Ok(())
}

/// Fetch and print the tracking record for a shipment.
pub async fn track(session: &Session, id: &str) -> Result<()> {
    let record = session
        .logistics
        .track_shipment(&ShipmentId::new(id))
        .await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string())
    );
    Ok(())
}

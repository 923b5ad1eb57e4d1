//! Hosted checkout command.

use panther_storefront::error::{AppError, Result};
use panther_storefront::services::checkout::CheckoutOrder;

use super::Session;

/// Open a checkout dialog for the current cart total.
///
/// Requires a logged-in session (the dialog prefills the customer's
/// contact details) and a non-empty cart. The printed options are what
/// the SDK renders; payment outcomes arrive through the session's
/// callbacks.
pub async fn open(session: &Session, order_id: &str) -> Result<()> {
    if !session.auth.is_logged_in() {
        return Err(AppError::Unauthorized(
            "checkout requires a logged-in session".to_owned(),
        ));
    }
    if session.cart.count() == 0 {
        return Err(AppError::BadRequest("cart is empty".to_owned()));
    }

    let user = session.auth.user();
    let customer_name = user
        .and_then(|u| u.first_name.clone())
        .unwrap_or_default();
    let customer_phone = user.and_then(|u| u.phone.clone()).unwrap_or_default();

    let order = CheckoutOrder {
        amount: session.cart.total(),
        description: Some(format!(
            "{} item(s) from the Panther shop",
            session.cart.count()
        )),
        gateway_order_id: order_id.to_owned(),
        customer_name,
        customer_email: session.auth.user_email().unwrap_or_default().to_owned(),
        customer_phone,
    };

    let checkout_session = session
        .checkout
        .open(
            &order,
            |confirmation| {
                tracing::info!(payment_id = %confirmation.payment_id, "payment confirmed");
            },
            |failure| {
                tracing::warn!(description = %failure.description, "payment failed");
            },
        )
        .await?;

    println!("Checkout dialog configured:");
    println!(
        "{}",
        serde_json::to_string_pretty(checkout_session.options())
            .unwrap_or_else(|_| "(unprintable options)".to_owned())
    );
    Ok(())
}

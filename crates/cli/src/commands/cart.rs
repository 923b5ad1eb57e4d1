//! Cart commands.

use panther_core::ProductId;
use panther_storefront::error::{AppError, Result};

use super::Session;

/// Print line items and derived totals.
pub fn show(session: &Session) {
    if session.cart.count() == 0 {
        println!("Cart is empty.");
        return;
    }

    for line in session.cart.items() {
        println!(
            "  {} {:<18} x{:<3} {:>8} each  {:>8}",
            line.image,
            line.name,
            line.quantity,
            line.price,
            line.price * line.quantity
        );
    }
    println!("  {:>42} {}", "subtotal:", session.cart.subtotal());
    println!("  {:>42} {}", "shipping:", session.cart.shipping_fee());
    println!("  {:>42} {}", "total:", session.cart.total());
}

/// Add a product from the catalog. The argument parser guarantees
/// `quantity >= 1`.
pub fn add(session: &mut Session, id: &str, quantity: u32) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = session
        .catalog
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?
        .clone();

    session.cart.add_to_cart(&product, quantity)?;
    println!("Added {quantity} x {} to cart.", product.name);
    show(session);
    Ok(())
}

/// Remove a line item; silently succeeds when the item is absent.
pub fn remove(session: &mut Session, id: &str) -> Result<()> {
    session.cart.remove_from_cart(&ProductId::new(id))?;
    show(session);
    Ok(())
}

/// Set a line item's quantity (zero is ignored by the store).
pub fn update(session: &mut Session, id: &str, quantity: u32) -> Result<()> {
    session.cart.update_quantity(&ProductId::new(id), quantity)?;
    show(session);
    Ok(())
}

/// Empty the cart.
pub fn clear(session: &mut Session) -> Result<()> {
    session.cart.clear()?;
    println!("Cart cleared.");
    Ok(())
}

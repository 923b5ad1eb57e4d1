//! Catalog browsing commands.

use panther_core::ProductId;
use panther_storefront::error::{AppError, Result};
use panther_storefront::stores::products::ingredient_info;

use super::Session;

/// List the catalog, available products first.
pub fn list(session: &Session) {
    println!("Available now:");
    for product in session.catalog.available() {
        println!(
            "  {} {:<18} {:>8}  {:.1}★ ({} reviews)",
            product.image, product.name, product.price, product.rating, product.review_count
        );
    }

    let coming_soon = session.catalog.coming_soon();
    if !coming_soon.is_empty() {
        println!("Coming soon:");
        for product in coming_soon {
            println!("  {} {:<18} {:>8}", product.image, product.name, product.price);
        }
    }
}

/// Show one product in detail, with glossary copy where available.
pub fn show(session: &Session, id: &str) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = session
        .catalog
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!("{} {} - {}", product.image, product.name, product.price);
    println!("{}", product.description);
    println!(
        "{} servings | {:.1}★ ({} reviews) | {}",
        product.servings,
        product.rating,
        product.review_count,
        if product.in_stock {
            "in stock"
        } else {
            "out of stock"
        }
    );

    println!("Formula:");
    for ingredient in &product.ingredients {
        println!(
            "  {:<22} {:>6}  {}",
            ingredient.name, ingredient.amount, ingredient.benefit
        );
        if let Some(info) = ingredient_info(&ingredient.name) {
            println!("      {}", info.description);
        }
    }

    Ok(())
}

//! Cart store.
//!
//! Owns the ordered list of cart line items and the fixed shipping fee.
//! Every mutating operation persists the items list (never the derived
//! totals) through the bridge; count, subtotal, and total are recomputed
//! from current state on every read so a cached total can never drift.

use serde::{Deserialize, Serialize};

use panther_core::{Amount, ProductId};

use crate::storage::{StorageBridge, StorageError, keys};
use crate::stores::products::Product;

/// Flat prepaid shipping fee applied to every order.
pub const SHIPPING_FEE: Amount = Amount::new(100);

/// One product-id-keyed cart entry.
///
/// Name, price, and image are snapshotted from the catalog when the item
/// is first added; a later catalog change does not retroactively reprice
/// a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Amount,
    /// Always >= 1; line items at quantity zero are removed, not kept.
    pub quantity: u32,
    pub image: String,
}

/// The shopping cart: an ordered sequence of line items, at most one per
/// product id.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    shipping_fee: Amount,
    storage: StorageBridge,
}

impl CartStore {
    /// Restore the cart from the persistence bridge.
    ///
    /// An absent or unreadable persisted cart yields an empty one.
    #[must_use]
    pub fn load(storage: StorageBridge) -> Self {
        let items = storage.load(keys::CART).unwrap_or_default();
        Self {
            items,
            shipping_fee: SHIPPING_FEE,
            storage,
        }
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new line item is appended, snapshotting
    /// the product's id, name, price, and image. Callers are responsible
    /// for passing `quantity >= 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.items.push(CartLineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
                image: product.image.clone(),
            });
        }
        self.persist()
    }

    /// Remove the line item for `product_id`, if present.
    ///
    /// A missing line item is a silent no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), StorageError> {
        self.items.retain(|line| &line.product_id != product_id);
        self.persist()
    }

    /// Set the quantity of an existing line item.
    ///
    /// Silently ignored when no line item matches or `quantity` is zero;
    /// deleting a line goes through [`Self::remove_from_cart`], never
    /// through a zero quantity. Nothing is persisted on the ignored paths.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if quantity == 0 {
            return Ok(());
        }
        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        else {
            return Ok(());
        };
        line.quantity = quantity;
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the emptied cart fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()
    }

    // =========================================================================
    // Derived getters - pure functions of current state
    // =========================================================================

    /// Number of line items (not total units).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of price x quantity over all line items.
    #[must_use]
    pub fn subtotal(&self) -> Amount {
        self.items.iter().map(|line| line.price * line.quantity).sum()
    }

    /// Subtotal plus the shipping fee.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.subtotal() + self.shipping_fee
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The flat shipping fee.
    #[must_use]
    pub const fn shipping_fee(&self) -> Amount {
        self.shipping_fee
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(keys::CART, &self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::stores::products::ProductCatalog;

    fn setup() -> (tempfile::TempDir, ProductCatalog, CartStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageBridge::open(dir.path()).unwrap();
        let cart = CartStore::load(storage);
        (dir, ProductCatalog::seed(), cart)
    }

    fn core(catalog: &ProductCatalog) -> &Product {
        catalog.get(&ProductId::new("panther-core")).unwrap()
    }

    #[test]
    fn test_add_same_product_accumulates_quantity() {
        let (_dir, catalog, mut cart) = setup();
        let product = core(&catalog);

        cart.add_to_cart(product, 1).unwrap();
        cart.add_to_cart(product, 2).unwrap();
        cart.add_to_cart(product, 4).unwrap();

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_totals_scenario() {
        let (_dir, catalog, mut cart) = setup();
        let product = core(&catalog);

        cart.add_to_cart(product, 1).unwrap();
        assert_eq!(cart.subtotal(), Amount::new(1999));
        assert_eq!(cart.total(), Amount::new(2099));

        cart.add_to_cart(product, 2).unwrap();
        assert_eq!(cart.items().first().unwrap().quantity, 3);
        assert_eq!(cart.subtotal(), Amount::new(5997));
        assert_eq!(cart.total(), Amount::new(6097));

        cart.remove_from_cart(&product.id).unwrap();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Amount::new(100));
    }

    #[test]
    fn test_totals_mix_products() {
        let (_dir, catalog, mut cart) = setup();
        cart.add_to_cart(core(&catalog), 2).unwrap();
        cart.add_to_cart(catalog.get(&ProductId::new("panther-elite")).unwrap(), 1)
            .unwrap();

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.subtotal(), Amount::new(2 * 1999 + 2999));
        assert_eq!(cart.total(), cart.subtotal() + SHIPPING_FEE);
    }

    #[test]
    fn test_update_quantity_zero_is_silent_noop() {
        let (dir, catalog, mut cart) = setup();
        let product = core(&catalog);
        cart.add_to_cart(product, 2).unwrap();

        let persisted_before =
            std::fs::read(dir.path().join("panther_cart.json")).unwrap();
        let items_before = cart.items().to_vec();

        cart.update_quantity(&product.id, 0).unwrap();

        assert_eq!(cart.items(), items_before.as_slice());
        let persisted_after = std::fs::read(dir.path().join("panther_cart.json")).unwrap();
        assert_eq!(persisted_before, persisted_after);
    }

    #[test]
    fn test_update_quantity_missing_item_is_noop() {
        let (_dir, catalog, mut cart) = setup();
        cart.add_to_cart(core(&catalog), 1).unwrap();

        cart.update_quantity(&ProductId::new("panther-unknown"), 5)
            .unwrap();

        assert_eq!(cart.items().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_update_quantity_applies() {
        let (_dir, catalog, mut cart) = setup();
        let product = core(&catalog);
        cart.add_to_cart(product, 1).unwrap();

        cart.update_quantity(&product.id, 5).unwrap();

        assert_eq!(cart.items().first().unwrap().quantity, 5);
        assert_eq!(cart.subtotal(), Amount::new(5 * 1999));
    }

    #[test]
    fn test_remove_missing_item_leaves_cart_unchanged() {
        let (_dir, catalog, mut cart) = setup();
        cart.add_to_cart(core(&catalog), 2).unwrap();
        let before = cart.items().to_vec();

        cart.remove_from_cart(&ProductId::new("panther-unknown"))
            .unwrap();

        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_clear_resets_totals_to_shipping_fee() {
        let (_dir, catalog, mut cart) = setup();
        cart.add_to_cart(core(&catalog), 3).unwrap();

        cart.clear().unwrap();

        assert_eq!(cart.count(), 0);
        assert_eq!(cart.subtotal(), Amount::ZERO);
        assert_eq!(cart.total(), SHIPPING_FEE);
    }

    #[test]
    fn test_reload_preserves_items_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageBridge::open(dir.path()).unwrap();
        let catalog = ProductCatalog::seed();

        let mut cart = CartStore::load(storage.clone());
        cart.add_to_cart(catalog.get(&ProductId::new("panther-extreme")).unwrap(), 1)
            .unwrap();
        cart.add_to_cart(core(&catalog), 2).unwrap();

        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(
            reloaded.items().first().unwrap().product_id,
            ProductId::new("panther-extreme")
        );
    }

    #[test]
    fn test_price_snapshot_is_kept() {
        let (_dir, catalog, mut cart) = setup();
        let product = core(&catalog);
        cart.add_to_cart(product, 1).unwrap();

        // The line item carries its own price, decoupled from the catalog.
        assert_eq!(cart.items().first().unwrap().price, product.price);
        assert_eq!(cart.items().first().unwrap().name, product.name);
    }
}

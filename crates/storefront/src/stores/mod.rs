//! State containers for the storefront.
//!
//! Each store exclusively owns its slice of state, is constructed once
//! per session, and exposes mutation only through its named operations.
//! Views read through derived getters and never touch fields directly.

pub mod auth;
pub mod cart;
pub mod products;
pub mod theme;

pub use auth::{AuthStore, RegisterRequest, UserProfile};
pub use cart::{CartLineItem, CartStore, SHIPPING_FEE};
pub use products::{Ingredient, IngredientInfo, Product, ProductCatalog, ingredient_info};
pub use theme::{ThemeMode, ThemeStore, ThemeVariables};

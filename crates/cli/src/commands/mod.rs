//! Command implementations, one module per store area.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod shipping;
pub mod theme;

use panther_storefront::config::StorefrontConfig;
use panther_storefront::error::Result;
use panther_storefront::services::api::ApiClient;
use panther_storefront::services::checkout::CheckoutGateway;
use panther_storefront::services::logistics::LogisticsClient;
use panther_storefront::storage::StorageBridge;
use panther_storefront::stores::auth::AuthStore;
use panther_storefront::stores::cart::CartStore;
use panther_storefront::stores::products::ProductCatalog;
use panther_storefront::stores::theme::ThemeStore;

/// Everything a command needs: the stores and services, constructed once
/// per invocation from the configured data directory.
pub struct Session {
    pub catalog: ProductCatalog,
    pub cart: CartStore,
    pub auth: AuthStore,
    pub theme: ThemeStore,
    pub logistics: LogisticsClient,
    pub checkout: CheckoutGateway,
}

impl Session {
    /// Build config, bridge, and stores; applies the persisted theme so
    /// later reads see the startup state.
    pub fn bootstrap() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        let storage = StorageBridge::open(&config.data_dir)?;
        let api = ApiClient::new(&config)?;

        let catalog = ProductCatalog::seed();
        let cart = CartStore::load(storage.clone());
        let auth = AuthStore::load(api.clone(), storage.clone());
        let mut theme = ThemeStore::load(storage);
        theme.init();

        let logistics = LogisticsClient::new(api);
        let checkout = CheckoutGateway::new(&config)?;

        Ok(Self {
            catalog,
            cart,
            auth,
            theme,
            logistics,
            checkout,
        })
    }
}

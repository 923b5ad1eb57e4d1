//! Hosted checkout gateway.
//!
//! Wraps the third-party checkout SDK: the SDK source is fetched at most
//! once per gateway, a dialog is described by [`CheckoutOptions`] built
//! from the order, and the outcome comes back through callbacks rather
//! than an awaited result.
//!
//! This is the only place amounts leave whole rupees: the SDK wants minor
//! currency units, so the x100 conversion lives inside option building
//! and nowhere else.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::instrument;

use panther_core::Amount;

use crate::BRAND_NAME;
use crate::config::StorefrontConfig;

/// Where the checkout SDK is served from.
pub const CHECKOUT_SDK_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

const CHECKOUT_CURRENCY: &str = "INR";
const CHECKOUT_THEME_COLOR: &str = "#ffd700";
const DEFAULT_DESCRIPTION: &str = "Panther Order";

/// Errors from the checkout gateway.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Fetching the SDK failed at the transport level.
    #[error("checkout SDK failed to load: {0}")]
    Http(#[from] reqwest::Error),

    /// The SDK endpoint answered with a non-success status.
    #[error("checkout SDK endpoint returned status {status}")]
    SdkUnavailable { status: u16 },
}

/// Order details the dialog is configured with. Amounts are whole rupees.
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub amount: Amount,
    pub description: Option<String>,
    /// Order identifier issued by the payment backend.
    pub gateway_order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// Prefilled customer contact fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Fully-built dialog configuration handed to the SDK.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutOptions {
    pub key: String,
    /// Minor currency units (paise).
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: CheckoutPrefill,
    pub theme_color: String,
}

/// Successful payment details delivered to the success callback.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfirmation {
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: String,
    #[serde(rename = "razorpay_order_id")]
    pub order_id: String,
    #[serde(rename = "razorpay_signature")]
    pub signature: String,
}

/// Failure details delivered to the failure callback.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentFailure {
    #[serde(default)]
    pub code: Option<String>,
    pub description: String,
}

type SuccessHandler = Box<dyn FnOnce(PaymentConfirmation) + Send>;
type FailureHandler = Box<dyn FnOnce(PaymentFailure) + Send>;

/// An open checkout dialog: the options the SDK renders plus the two
/// callbacks the embedding layer fires when the SDK reports an outcome.
pub struct CheckoutSession {
    options: CheckoutOptions,
    on_success: Option<SuccessHandler>,
    on_failure: Option<FailureHandler>,
}

impl CheckoutSession {
    /// The dialog configuration.
    #[must_use]
    pub const fn options(&self) -> &CheckoutOptions {
        &self.options
    }

    /// Deliver a successful payment to the success callback.
    pub fn confirm(mut self, confirmation: PaymentConfirmation) {
        if let Some(handler) = self.on_success.take() {
            handler(confirmation);
        }
    }

    /// Deliver a failed payment to the failure callback.
    pub fn fail(mut self, failure: PaymentFailure) {
        if let Some(handler) = self.on_failure.take() {
            handler(failure);
        }
    }
}

/// Gateway to the hosted checkout SDK.
#[derive(Clone)]
pub struct CheckoutGateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    key_id: String,
    sdk: OnceCell<()>,
}

impl CheckoutGateway {
    /// Create a gateway using the configured public key id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(GatewayInner {
                client,
                key_id: config.checkout_key_id.clone(),
                sdk: OnceCell::new(),
            }),
        })
    }

    /// Fetch the checkout SDK once; later calls return immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK cannot be fetched. The failure is the
    /// caller's to surface; it is not retried here.
    #[instrument(skip(self))]
    pub async fn ensure_sdk_loaded(&self) -> Result<(), CheckoutError> {
        self.inner
            .sdk
            .get_or_try_init(|| async {
                let response = self.inner.client.get(CHECKOUT_SDK_URL).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CheckoutError::SdkUnavailable {
                        status: status.as_u16(),
                    });
                }
                tracing::debug!("checkout SDK loaded");
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Build the dialog configuration for an order.
    #[must_use]
    pub fn build_options(&self, order: &CheckoutOrder) -> CheckoutOptions {
        CheckoutOptions {
            key: self.inner.key_id.clone(),
            amount: order.amount.to_minor_units(),
            currency: CHECKOUT_CURRENCY.to_owned(),
            name: BRAND_NAME.to_owned(),
            description: order
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            order_id: order.gateway_order_id.clone(),
            prefill: CheckoutPrefill {
                name: order.customer_name.clone(),
                email: order.customer_email.clone(),
                contact: order.customer_phone.clone(),
            },
            theme_color: CHECKOUT_THEME_COLOR.to_owned(),
        }
    }

    /// Open a checkout dialog for `order`.
    ///
    /// Ensures the SDK is loaded, then returns the session whose callbacks
    /// the embedding layer fires on the SDK's outcome events. Success and
    /// failure are delivered via callback, never awaited here.
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK cannot be loaded.
    pub async fn open(
        &self,
        order: &CheckoutOrder,
        on_success: impl FnOnce(PaymentConfirmation) + Send + 'static,
        on_failure: impl FnOnce(PaymentFailure) + Send + 'static,
    ) -> Result<CheckoutSession, CheckoutError> {
        self.ensure_sdk_loaded().await?;

        Ok(CheckoutSession {
            options: self.build_options(order),
            on_success: Some(Box::new(on_success)),
            on_failure: Some(Box::new(on_failure)),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use url::Url;

    fn gateway() -> CheckoutGateway {
        let config = StorefrontConfig {
            api_url: Url::parse("http://localhost:8000/api/").unwrap(),
            data_dir: PathBuf::from(".panther"),
            api_timeout: Duration::from_secs(10),
            checkout_key_id: "rzp_test_abc123".to_owned(),
        };
        CheckoutGateway::new(&config).unwrap()
    }

    fn order() -> CheckoutOrder {
        CheckoutOrder {
            amount: Amount::new(2099),
            description: None,
            gateway_order_id: "order_9A33XWu170gUtm".to_owned(),
            customer_name: "Arjun Mehta".to_owned(),
            customer_email: "arjun@thepanther.in".to_owned(),
            customer_phone: "+919900112233".to_owned(),
        }
    }

    #[test]
    fn test_amount_converted_to_minor_units_once() {
        let options = gateway().build_options(&order());

        // 2099 rupees -> 209900 paise at this boundary only.
        assert_eq!(options.amount, 209_900);
        assert_eq!(options.currency, "INR");
    }

    #[test]
    fn test_options_carry_brand_and_prefill() {
        let options = gateway().build_options(&order());

        assert_eq!(options.key, "rzp_test_abc123");
        assert_eq!(options.name, "The Panther");
        assert_eq!(options.description, "Panther Order");
        assert_eq!(options.order_id, "order_9A33XWu170gUtm");
        assert_eq!(options.prefill.email, "arjun@thepanther.in");
        assert_eq!(options.theme_color, "#ffd700");
    }

    #[test]
    fn test_explicit_description_wins() {
        let mut order = order();
        order.description = Some("Panther Core x2".to_owned());

        let options = gateway().build_options(&order);
        assert_eq!(options.description, "Panther Core x2");
    }

    #[test]
    fn test_confirmation_parses_sdk_payload() {
        let confirmation: PaymentConfirmation = serde_json::from_str(
            r#"{
                "razorpay_payment_id": "pay_29QQoUBi66xm2f",
                "razorpay_order_id": "order_9A33XWu170gUtm",
                "razorpay_signature": "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d"
            }"#,
        )
        .unwrap();

        assert_eq!(confirmation.payment_id, "pay_29QQoUBi66xm2f");
    }

    #[tokio::test]
    async fn test_session_delivers_outcome_to_callback() {
        use std::sync::atomic::{AtomicBool, Ordering};

        // Bypass the network by constructing the session directly.
        let delivered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&delivered);
        let session = CheckoutSession {
            options: gateway().build_options(&order()),
            on_success: Some(Box::new(move |confirmation| {
                assert_eq!(confirmation.order_id, "order_9A33XWu170gUtm");
                flag.store(true, Ordering::SeqCst);
            })),
            on_failure: Some(Box::new(|_| panic!("failure callback must not fire"))),
        };

        session.confirm(PaymentConfirmation {
            payment_id: "pay_29QQoUBi66xm2f".to_owned(),
            order_id: "order_9A33XWu170gUtm".to_owned(),
            signature: "sig".to_owned(),
        });

        assert!(delivered.load(Ordering::SeqCst));
    }
}

//! # checkout-core
//!
//! Platform-independent logic for the AiVRIC checkout frontend.
//!
//! The WASM crate (`checkout-web`) owns everything that touches the browser:
//! the DOM, `localStorage`, Stripe.js, and the HTTP client. Everything that
//! can be expressed without a browser lives here so it can be tested natively:
//!
//! - the product catalog and its Stripe price IDs
//! - checkout/portal request bodies and session response parsing
//! - the error taxonomy and user-facing messages
//! - the frontend configuration (API base, redirect targets)
//! - subscription status and the pricing-page control-state rules

pub mod config;
pub mod error;
pub mod product;
pub mod session;
pub mod status;

pub use config::CheckoutConfig;
pub use error::{CheckoutError, Result};
pub use product::Product;
pub use session::{CheckoutRequest, CheckoutSession, PortalRequest, PortalSession};
pub use status::{ControlState, SubscriptionStatus, ACTIVE_LABEL};

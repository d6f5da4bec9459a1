//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// No credential present; caller must navigate to login
    #[error("authentication required")]
    AuthRequired,

    /// Backend returned a non-success status; message extracted from the body
    #[error("backend error: {0}")]
    Backend(String),

    /// Transport-level failure reaching the backend
    #[error("network error: {0}")]
    Network(String),

    /// Stripe.js reported a redirect failure
    #[error("checkout redirect failed: {0}")]
    ProviderRedirect(String),
}

impl CheckoutError {
    /// Message suitable for a user-facing notification.
    ///
    /// `AuthRequired` is handled by navigating to the login page and is never
    /// shown as a banner; the message here is a fallback only.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::AuthRequired => "Please log in to continue.".into(),
            CheckoutError::Backend(msg) | CheckoutError::ProviderRedirect(msg) => msg.clone(),
            CheckoutError::Network(_) => {
                "An error occurred. Please check your connection and try again.".into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_surfaces_verbatim() {
        let err = CheckoutError::Backend("Price not found".into());
        assert_eq!(err.user_message(), "Price not found");
    }

    #[test]
    fn network_message_is_generic() {
        let err = CheckoutError::Network("dns failure".into());
        assert!(!err.user_message().contains("dns"));
    }
}

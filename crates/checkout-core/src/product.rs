//! Product Catalog
//!
//! Products sold through the pricing page, with their Stripe price IDs.

use serde::{Deserialize, Serialize};

/// Subscription products offered on the pricing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Defense,
    Offense,
    Vision,
    BundleDefenseOffense,
    BundleAll,
}

impl Product {
    /// Wire tag used in checkout request bodies and entitlement flags
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Defense => "defense",
            Product::Offense => "offense",
            Product::Vision => "vision",
            Product::BundleDefenseOffense => "bundle_defense_offense",
            Product::BundleAll => "bundle_all",
        }
    }

    /// Parse a wire tag back into a product
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "defense" => Some(Product::Defense),
            "offense" => Some(Product::Offense),
            "vision" => Some(Product::Vision),
            "bundle_defense_offense" => Some(Product::BundleDefenseOffense),
            "bundle_all" => Some(Product::BundleAll),
            _ => None,
        }
    }

    /// Stripe price ID for this product.
    ///
    /// Placeholders until the products exist in the Stripe Dashboard; must
    /// match the Dashboard exactly once created.
    pub fn price_id(self) -> &'static str {
        match self {
            Product::Defense => "price_XXXXXXXXXX",
            Product::Offense => "price_XXXXXXXXXX",
            Product::Vision => "price_XXXXXXXXXX",
            Product::BundleDefenseOffense => "price_XXXXXXXXXX",
            Product::BundleAll => "price_XXXXXXXXXX",
        }
    }

    /// Display name for the pricing page
    pub fn display_name(self) -> &'static str {
        match self {
            Product::Defense => "Defense",
            Product::Offense => "Offense",
            Product::Vision => "Vision",
            Product::BundleDefenseOffense => "Defense + Offense Bundle",
            Product::BundleAll => "Complete Bundle",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_round_trip() {
        for product in [
            Product::Defense,
            Product::Offense,
            Product::Vision,
            Product::BundleDefenseOffense,
            Product::BundleAll,
        ] {
            assert_eq!(Product::parse(product.as_str()), Some(product));
        }
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(Product::parse("premium"), None);
    }
}

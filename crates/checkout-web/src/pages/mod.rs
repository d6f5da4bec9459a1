//! Page Components

mod account;
mod home;
mod pricing;
mod success;

pub use account::AccountPage;
pub use home::HomePage;
pub use pricing::PricingPage;
pub use success::SuccessPage;

mod marketplace;
mod profile;

pub use marketplace::MarketplacePage;
pub use profile::ProfilePage;

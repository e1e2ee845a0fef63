mod bottom_nav;
mod owned_products;
mod product_form;
mod wallet_editor;

pub use bottom_nav::BottomNav;
pub use owned_products::OwnedProducts;
pub use product_form::ProductForm;
pub use wallet_editor::WalletEditor;

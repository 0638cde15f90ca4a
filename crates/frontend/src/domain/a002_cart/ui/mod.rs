pub mod cart_icon;
pub mod cart_item;
pub mod sidebar;

pub use cart_icon::CartIcon;
pub use sidebar::CartSidebar;

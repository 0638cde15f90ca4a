pub mod pending;
pub mod state;
pub mod store;

pub use pending::PendingAdds;
pub use state::{reduce, CartAction, CartLine, CartState};
pub use store::{CartStore, SubscriptionId};

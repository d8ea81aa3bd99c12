mod errors;
mod store;
mod types;

pub use errors::AccountError;
pub use store::AccountStore;
pub use types::Account;

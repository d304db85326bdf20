pub use error::AllowanceError;
pub use oracle::AllowanceOracle;
pub use query::{ChainQuery, ProviderChainQuery};
pub use store::{ApprovalStore, InMemoryApprovalStore};

mod error;
pub mod keys;
mod oracle;
mod query;
mod store;

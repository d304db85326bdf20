pub use erc20::IERC20;
pub use router::IApproveHelper;

pub mod address_book;
mod erc20;
mod router;

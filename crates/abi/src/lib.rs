pub mod dutch_auction;
pub mod erc20;
pub mod minted_capped;
pub mod registry;

pub use dutch_auction::IDutchAuctionManager;
pub use minted_capped::IMintedCappedManager;
pub use registry::IRegistryExec;

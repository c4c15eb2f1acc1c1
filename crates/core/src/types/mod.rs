pub mod amount;
pub mod family;
pub mod snapshot;
pub mod tier;
pub mod update;

pub use amount::*;
pub use family::*;
pub use snapshot::*;
pub use tier::*;
pub use update::*;

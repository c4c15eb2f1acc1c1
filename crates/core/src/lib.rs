pub mod builder;
pub mod client;
pub mod environment;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod planner;
pub mod presenter;
pub mod reader;
pub mod readiness;
pub mod types;
pub mod validation;
pub mod writer;

pub use builder::*;
pub use client::*;
pub use environment::*;
pub use error::*;
pub use normalize::*;
pub use planner::*;
pub use presenter::*;
pub use reader::*;
pub use readiness::*;
pub use types::*;
pub use validation::*;
pub use writer::*;

pub mod noop;
pub mod traits;

pub use noop::NoOpPresenter;
pub use traits::{Notice, Presenter};

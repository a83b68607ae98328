pub mod context;
pub mod edition;
pub mod error;

pub use context::AppContext;
pub use edition::{Edition, EditionBoard, PassToken};
pub use error::{BroadsheetError, Result};

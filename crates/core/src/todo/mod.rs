mod error;
mod types;
mod validation;

pub use error::ShapeError;
pub use types::{Row, Todo};
pub use validation::as_todo;

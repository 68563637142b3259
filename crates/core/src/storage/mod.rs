mod error;
mod http_mapping;
mod model;
pub mod queries;
mod traits;

pub use error::{DatabaseError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use model::TodoModel;
pub use traits::{RowSource, TodoRepository};

//! Request and response types shared by the handlers.

mod pagination;
mod response;

pub use pagination::PageParams;
pub use response::Created;

mod delete;
mod get;
mod post;

pub use delete::delete_lawn;
pub use get::select_lawns;
pub use post::insert_lawn;

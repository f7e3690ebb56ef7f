mod delete;
mod get;
mod post;

pub use delete::delete_plant;
pub use get::select_plants;
pub use post::insert_plant;

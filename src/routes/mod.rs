mod common;
mod lawns;
mod plants;

pub use lawns::{delete_lawn, insert_lawn, select_lawns};
pub use plants::{delete_plant, insert_plant, select_plants};

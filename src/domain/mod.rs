mod lawn;
mod new_record;
mod plant;

pub use lawn::Lawn;
pub use new_record::NewRecord;
pub use plant::{Coordinates, Plant};

mod ants;
mod colony;

pub use ants::{select_location, Ant};
pub use colony::{AntColony, ColonyReport, Record};

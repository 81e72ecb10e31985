pub mod algorithm;
pub mod component;
pub mod utils;

pub use algorithm::{AntColony, ColonyReport, Record};
pub use component::{CostModel, Tour};
pub use utils::config::{Config, Parameters};
pub use utils::error::{Error, FormatError};

mod cost;
mod desirability;
mod pheromone;
mod solution;

pub use cost::CostModel;
pub use desirability::{DesirabilityTable, EPSILON};
pub use pheromone::PheromoneField;
pub use solution::{check_permutation, Tour};

use rand::Rng;
use crate::component::{DesirabilityTable, PheromoneField};
use crate::utils::error::Error;


/// One construction pass over a frozen pheromone field.
pub struct Ant<'a> {
    pheromone: &'a PheromoneField,
    desirability: &'a DesirabilityTable,
    alpha: f64,
    beta: f64,
}


impl<'a> Ant<'a> {
    pub fn new(pheromone: &'a PheromoneField, desirability: &'a DesirabilityTable,
               alpha: f64, beta: f64) -> Self {
        debug_assert_eq!(pheromone.size(), desirability.size());
        Ant { pheromone, desirability, alpha, beta }
    }
    /// 依總流量由大到小，逐一替設施抽一個尚未被佔用的位置
    pub fn construct<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>, Error> {
        let n = self.desirability.size();
        let mut available: Vec<usize> = (0..n).collect();
        let mut assignment = vec![usize::MAX; n];
        let mut weights = Vec::with_capacity(n);

        for &facility in self.desirability.facility_order() {
            if available.is_empty() {
                return Err(Error::Exhausted { facility });
            }
            let tau = self.pheromone.row(facility);
            let eta = self.desirability.row(facility);
            weights.clear();
            weights.extend(available.iter()
                .map(|&j| tau[j].powf(self.alpha) * eta[j].powf(self.beta)));

            let pick = select_location(&weights, rng);
            assignment[facility] = available.remove(pick);
        }
        Ok(assignment)
    }
}

/// Roulette walk over `weights`, returning an index into it. An all-zero
/// slice falls back to a uniform pick.
pub fn select_location<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    let sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        return rng.gen_range(0..weights.len());
    }
    let rand_f = rng.gen_range(0.0..sum);
    let mut accumulation = 0.0;
    for (i, w) in weights.iter().enumerate() {
        accumulation += w;
        if accumulation > rand_f {
            return i;
        }
    }
    // rounding left the draw just past the running sum
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1)
}

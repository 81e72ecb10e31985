use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use serde::Serialize;
use crate::component::{CostModel, DesirabilityTable, PheromoneField, Tour};
use crate::utils::config::Parameters;
use crate::utils::error::Error;
use super::ants::Ant;


/// Convergence snapshot taken at the end of an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Record {
    pub iteration: usize,
    pub best_cost: f64,
    pub average_cost: f64,
}

/// 跑完之後交給外部報表（或繪圖）的結果
#[derive(Clone, Debug, Serialize)]
pub struct ColonyReport {
    pub best_assignment: Vec<usize>,
    pub best_cost: f64,
    pub history: Vec<Record>,
}

pub struct AntColony {
    model: CostModel,
    desirability: DesirabilityTable,
    pheromone: PheromoneField,
    params: Parameters,
    rng: ChaChaRng,
    best: Tour,
    history: Vec<Record>,
}


impl AntColony {
    pub fn new(model: CostModel, params: Parameters, seed: u64) -> Result<Self, Error> {
        params.validate()?;
        let desirability = DesirabilityTable::new(&model);
        check_weight_range(&desirability, &params)?;
        let pheromone = PheromoneField::new(model.size(), params.initial_pheromone);
        let rng = ChaChaRng::seed_from_u64(seed);
        Ok(AntColony {
            model, desirability, pheromone, params, rng,
            best: Tour::empty(),
            history: vec![],
        })
    }
    pub fn model(&self) -> &CostModel {
        &self.model
    }
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }
    /// Best tour so far; its cost is +∞ before the first iteration.
    pub fn best(&self) -> &Tour {
        &self.best
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn run(&mut self) -> Result<(), Error> {
        self.run_with(|_| {})
    }
    /// Run the configured number of iterations, reporting each new record.
    pub fn run_with<F>(&mut self, mut on_update: F) -> Result<(), Error>
    where
        F: FnMut(&Record),
    {
        for _ in 0..self.params.iterations {
            self.step()?;
            if let Some(record) = self.history.last() {
                on_update(record);
            }
        }
        Ok(())
    }
    /// One iteration: build every ant, record progress, then update trails.
    /// Returns the tours built in this iteration in ant order.
    pub fn step(&mut self) -> Result<Vec<Tour>, Error> {
        let tours = self.construct_tours()?;

        for tour in tours.iter() {
            if tour.cost < self.best.cost {
                self.best = tour.clone();
            }
        }
        let average_cost = tours.iter().map(|t| t.cost).sum::<f64>() / tours.len() as f64;
        self.history.push(Record {
            iteration: self.history.len() + 1,
            best_cost: self.best.cost,
            average_cost,
        });

        self.update_pheromone(&tours);
        Ok(tours)
    }
    pub fn report(&self) -> ColonyReport {
        ColonyReport {
            best_assignment: self.best.assignment.clone(),
            best_cost: self.best.cost,
            history: self.history.clone(),
        }
    }
    /// 每隻螞蟻各拿一個種子，平行建構但結果與執行緒數量無關
    fn construct_tours(&mut self) -> Result<Vec<Tour>, Error> {
        let seeds: Vec<u64> = (0..self.params.num_ants)
            .map(|_| self.rng.gen())
            .collect();
        let ant = Ant::new(&self.pheromone, &self.desirability, self.params.alpha, self.params.beta);
        let model = &self.model;
        seeds.into_par_iter()
            .map(|seed| -> Result<Tour, Error> {
                let mut rng = ChaChaRng::seed_from_u64(seed);
                let assignment = ant.construct(&mut rng)?;
                let cost = model.evaluate(&assignment)?;
                Ok(Tour::new(assignment, cost))
            })
            .collect()
    }
    /// Evaporate, deposit `q / cost` along every tour, then bound the field.
    fn update_pheromone(&mut self, tours: &[Tour]) {
        let params = &self.params;
        self.pheromone.evaporate(params.evaporation_rate);
        for tour in tours.iter() {
            // a zero-cost tour deposits +∞, which the clamp turns into tau_max
            let amount = params.q / tour.cost;
            for (facility, location) in tour.edges() {
                self.pheromone.deposit(facility, location, amount);
            }
        }
        self.pheromone.clamp(params.tau_min, params.tau_max);
    }
}

/// The largest sampling weight must stay finite or roulette selection breaks down.
fn check_weight_range(desirability: &DesirabilityTable, params: &Parameters) -> Result<(), Error> {
    let tau = f64::max(params.initial_pheromone, params.tau_max);
    let eta = desirability.max();
    let bound = tau.powf(params.alpha) * eta.powf(params.beta) * desirability.size() as f64;
    if !bound.is_finite() {
        return Err(Error::invalid_parameter("beta", format!(
            "weights overflow: tau {}^{} * desirability {}^{} is not finite",
            tau, params.alpha, eta, params.beta
        )));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> CostModel {
        let distance = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ];
        let flow = vec![
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ];
        CostModel::new(flow, distance).unwrap()
    }

    fn params(num_ants: usize, iterations: usize) -> Parameters {
        Parameters { num_ants, iterations, ..Default::default() }
    }

    #[test]
    fn it_records_a_single_ant() {
        let mut colony = AntColony::new(setup(), params(1, 1), 0).unwrap();
        assert_eq!(colony.parameters().iterations, 1);
        let tour = colony.step().unwrap().remove(0);
        assert_eq!(colony.best(), &tour);
        assert_eq!(colony.model().evaluate(&tour.assignment).unwrap(), tour.cost);
        assert_eq!(colony.history().len(), 1);
        assert_eq!(colony.history()[0], Record { iteration: 1, best_cost: tour.cost, average_cost: tour.cost });
    }

    #[test]
    fn it_averages_ant_costs() {
        let mut colony = AntColony::new(setup(), params(6, 3), 1).unwrap();
        for _ in 0..3 {
            let tours = colony.step().unwrap();
            assert_eq!(tours.len(), 6);
            let mean = tours.iter().map(|t| t.cost).sum::<f64>() / 6.0;
            let record = colony.history().last().unwrap();
            assert!((record.average_cost - mean).abs() < 1e-9);
            assert!(tours.iter().all(|t| t.cost >= record.best_cost));
        }
    }

    #[test]
    fn it_keeps_best_non_increasing() {
        let mut colony = AntColony::new(setup(), params(4, 25), 9).unwrap();
        colony.run().unwrap();
        let history = colony.history();
        assert_eq!(history.len(), 25);
        for pair in history.windows(2) {
            assert!(pair[1].best_cost <= pair[0].best_cost);
        }
        assert_eq!(history.last().unwrap().best_cost, colony.best().cost);
    }

    #[test]
    fn it_bounds_the_field() {
        let mut p = params(5, 1);
        p.tau_min = 0.5;
        p.tau_max = 0.8;
        p.evaporation_rate = 0.1;
        let mut colony = AntColony::new(setup(), p, 4).unwrap();
        for _ in 0..10 {
            colony.step().unwrap();
            assert!(colony.pheromone().min() >= 0.5);
            assert!(colony.pheromone().max() <= 0.8);
        }
    }

    #[test]
    fn it_updates_in_order() {
        // one ant, no exponents: field = clamp((1 - rate) * tau0 + q / cost on its edges)
        let mut p = params(1, 1);
        p.alpha = 0.0;
        p.beta = 0.0;
        p.evaporation_rate = 0.5;
        p.q = 6.0;
        p.initial_pheromone = 2.0;
        let mut colony = AntColony::new(setup(), p, 2).unwrap();
        let tour = colony.step().unwrap().remove(0);
        let field = colony.pheromone();
        for facility in 0..3 {
            for location in 0..3 {
                let expected = if tour.assignment[facility] == location {
                    f64::min(1.0 + 6.0 / tour.cost, 10.0)
                } else {
                    1.0
                };
                assert!((field.get(facility, location) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn it_is_reproducible() {
        let mut a = AntColony::new(setup(), params(8, 5), 123).unwrap();
        let mut b = AntColony::new(setup(), params(8, 5), 123).unwrap();
        a.run().unwrap();
        b.run().unwrap();
        assert_eq!(a.history(), b.history());
        assert_eq!(a.best(), b.best());
        assert_eq!(a.pheromone(), b.pheromone());
    }

    #[test]
    fn it_rejects_overflowing_weights() {
        let mut p = params(1, 1);
        p.beta = 2000.0;
        let err = AntColony::new(setup(), p, 0).err();
        assert!(matches!(err, Some(Error::InvalidParameter { name: "beta", .. })));
    }

    #[test]
    fn it_rejects_invalid_parameters() {
        let mut p = params(1, 1);
        p.evaporation_rate = 2.0;
        assert!(matches!(AntColony::new(setup(), p, 0), Err(Error::InvalidParameter { .. })));
    }
}

/// 費洛蒙矩陣：`tau[facility][location]`
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneField {
    n: usize,
    tau: Vec<f64>,
}


impl PheromoneField {
    pub fn new(n: usize, initial: f64) -> Self {
        PheromoneField { n, tau: vec![initial; n * n] }
    }
    pub fn size(&self) -> usize {
        self.n
    }
    pub fn get(&self, facility: usize, location: usize) -> f64 {
        self.tau[facility * self.n + location]
    }
    pub fn row(&self, facility: usize) -> &[f64] {
        &self.tau[facility * self.n..(facility + 1) * self.n]
    }
    pub fn min(&self) -> f64 {
        self.tau.iter().copied().fold(f64::INFINITY, f64::min)
    }
    pub fn max(&self) -> f64 {
        self.tau.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        let remain = 1.0 - rate;
        self.tau.iter_mut().for_each(|tau| *tau *= remain);
    }
    pub fn deposit(&mut self, facility: usize, location: usize, amount: f64) {
        self.tau[facility * self.n + location] += amount;
    }
    pub fn clamp(&mut self, min: f64, max: f64) {
        debug_assert!(min <= max);
        self.tau.iter_mut().for_each(|tau| *tau = num::clamp(*tau, min, max));
    }
}

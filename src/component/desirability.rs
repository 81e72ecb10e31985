use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use super::CostModel;

/// Keeps the quotient finite when a location has zero total distance.
pub const EPSILON: f64 = 1e-10;


/// 能見度：總流量高的設施偏好總距離低的位置，與費洛蒙無關
#[derive(Clone, Debug)]
pub struct DesirabilityTable {
    n: usize,
    flow_sums: Vec<f64>,
    dist_sums: Vec<f64>,
    table: Vec<f64>,
    order: Vec<usize>,
}


impl DesirabilityTable {
    pub fn new(model: &CostModel) -> Self {
        let n = model.size();
        let flow_sums: Vec<f64> = (0..n)
            .map(|i| model.flow_row(i).iter().sum())
            .collect();
        let dist_sums: Vec<f64> = (0..n)
            .map(|l| model.distance_row(l).iter().sum())
            .collect();
        let mut table = Vec::with_capacity(n * n);
        for &flow in flow_sums.iter() {
            table.extend(dist_sums.iter().map(|dist| flow / (dist + EPSILON)));
        }
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| Reverse(OrderedFloat(flow_sums[i])));
        DesirabilityTable { n, flow_sums, dist_sums, table, order }
    }
    pub fn size(&self) -> usize {
        self.n
    }
    pub fn flow_sum(&self, facility: usize) -> f64 {
        self.flow_sums[facility]
    }
    pub fn dist_sum(&self, location: usize) -> f64 {
        self.dist_sums[location]
    }
    pub fn get(&self, facility: usize, location: usize) -> f64 {
        self.table[facility * self.n + location]
    }
    pub fn row(&self, facility: usize) -> &[f64] {
        &self.table[facility * self.n..(facility + 1) * self.n]
    }
    pub fn max(&self) -> f64 {
        self.table.iter().copied().fold(0.0, f64::max)
    }
    /// Facilities by descending flow sum; equal sums keep index order.
    pub fn facility_order(&self) -> &[usize] {
        &self.order
    }
}

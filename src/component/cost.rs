use crate::utils::error::Error;
use super::solution::check_permutation;


/// Flow between facilities and distance between locations, both n×n and row-major.
#[derive(Clone, Debug)]
pub struct CostModel {
    n: usize,
    flow: Vec<f64>,
    distance: Vec<f64>,
}


impl CostModel {
    pub fn new(flow: Vec<Vec<f64>>, distance: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = flow.len();
        if n == 0 {
            return Err(Error::invalid_parameter("flow", "instance must have at least one facility"));
        }
        if distance.len() != n {
            return Err(Error::invalid_parameter("distance", format!(
                "expected {} rows to match the flow matrix, got {}", n, distance.len()
            )));
        }
        let flow = flatten("flow", flow, n)?;
        let distance = flatten("distance", distance, n)?;
        Ok(CostModel { n, flow, distance })
    }
    pub fn size(&self) -> usize {
        self.n
    }
    pub fn flow(&self, i: usize, j: usize) -> f64 {
        self.flow[i * self.n + j]
    }
    pub fn distance(&self, k: usize, l: usize) -> f64 {
        self.distance[k * self.n + l]
    }
    pub fn flow_row(&self, i: usize) -> &[f64] {
        &self.flow[i * self.n..(i + 1) * self.n]
    }
    pub fn distance_row(&self, k: usize) -> &[f64] {
        &self.distance[k * self.n..(k + 1) * self.n]
    }
    /// Σ_i Σ_j F[i][j] · D[π(i)][π(j)], after checking π is a permutation
    pub fn evaluate(&self, assignment: &[usize]) -> Result<f64, Error> {
        check_permutation(assignment, self.n)?;
        let mut cost = 0.0;
        for (i, &li) in assignment.iter().enumerate() {
            let dist = self.distance_row(li);
            cost += self.flow_row(i).iter()
                .zip(assignment.iter())
                .map(|(f, &lj)| f * dist[lj])
                .sum::<f64>();
        }
        Ok(cost)
    }
}

fn flatten(name: &'static str, rows: Vec<Vec<f64>>, n: usize) -> Result<Vec<f64>, Error> {
    let mut flat = Vec::with_capacity(n * n);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != n {
            return Err(Error::invalid_parameter(name, format!(
                "row {} has {} columns, expected {}", i, row.len(), n
            )));
        }
        if let Some(x) = row.iter().find(|x| !x.is_finite() || **x < 0.0) {
            return Err(Error::invalid_parameter(name, format!(
                "row {} holds {}, entries must be finite and non-negative", i, x
            )));
        }
        flat.extend(row);
    }
    Ok(flat)
}

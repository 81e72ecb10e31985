use serde::Serialize;
use crate::utils::error::Error;


/// 一隻螞蟻走完後的結果：`assignment[i]` 為設施 i 所在的位置
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tour {
    pub assignment: Vec<usize>,
    pub cost: f64,
}

impl Tour {
    pub fn new(assignment: Vec<usize>, cost: f64) -> Self {
        Tour { assignment, cost }
    }
    pub fn empty() -> Self {
        Tour { assignment: vec![], cost: f64::INFINITY }
    }
    /// (facility, location) pairs traversed by this tour
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment.iter().copied().enumerate()
    }
}

/// Every location in 0..n must appear exactly once.
pub fn check_permutation(assignment: &[usize], n: usize) -> Result<(), Error> {
    if assignment.len() != n {
        return Err(Error::invalid_assignment(format!(
            "expected {} facilities, got {}", n, assignment.len()
        )));
    }
    let mut seen = vec![false; n];
    for (facility, &location) in assignment.iter().enumerate() {
        if location >= n {
            return Err(Error::invalid_assignment(format!(
                "facility #{:02} assigned to location {} out of 0..{}", facility, location, n
            )));
        }
        if seen[location] {
            return Err(Error::invalid_assignment(format!(
                "location {} assigned twice (again to facility #{:02})", location, facility
            )));
        }
        seen[location] = true;
    }
    Ok(())
}

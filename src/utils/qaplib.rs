use std::fs;
use std::path::Path;
use crate::component::CostModel;
use super::error::{Error, FormatError};


/// Read an instance laid out as: size, then distance rows, then flow rows.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<CostModel, Error> {
    let text = fs::read_to_string(path)?;
    parse_instance(&text)
}

pub fn parse_instance(text: &str) -> Result<CostModel, Error> {
    // 空白行不計入行數
    let mut lines = text.lines()
        .enumerate()
        .map(|(nth, line)| (nth + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, first) = lines.next().ok_or(FormatError::MissingSize)?;
    let n = match first.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => return Err(FormatError::BadSize { token: first.to_owned() }.into()),
    };

    let distance = read_matrix(&mut lines, "distance", n)?;
    let flow = read_matrix(&mut lines, "flow", n)?;
    CostModel::new(flow, distance)
}

fn read_matrix<'a, I>(lines: &mut I, matrix: &'static str, n: usize) -> Result<Vec<Vec<f64>>, FormatError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    // n comes from the header, rows may never arrive
    let mut rows = Vec::new();
    for row in 1..=n {
        let (nth, line) = lines.next()
            .ok_or(FormatError::MissingRows { matrix, expected: n, found: row - 1 })?;
        let values = line.split_whitespace()
            .map(|token| token.parse::<f64>().ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| FormatError::BadToken { line: nth, token: token.to_owned() }))
            .collect::<Result<Vec<f64>, FormatError>>()?;
        if values.len() != n {
            return Err(FormatError::RowWidth { matrix, row, expected: n, found: values.len() });
        }
        rows.push(values);
    }
    Ok(rows)
}

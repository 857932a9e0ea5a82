//! Line-oriented point input: one `"<lat>,<lon>"` per line

use crate::{
    error::{KMeansError, Result},
    types::Point,
};

/// Parse every line of `contents` into a [`Point`]
///
/// `original_index` is the 0-based line position. `source_name` only labels
/// errors. The first bad line (a blank one included) aborts the whole load.
pub fn parse_points(contents: &str, source_name: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let (x, y) = parse_line(line).map_err(|reason| KMeansError::Parse {
            source_name: source_name.to_string(),
            line: line_no + 1,
            content: line.to_string(),
            reason,
        })?;
        points.push(Point::new(x, y, line_no));
    }
    Ok(points)
}

fn parse_line(line: &str) -> std::result::Result<(f64, f64), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(format!("expected 2 comma-separated fields, found {}", fields.len()));
    }
    let x = parse_number(fields[0])?;
    let y = parse_number(fields[1])?;
    Ok((x, y))
}

fn parse_number(field: &str) -> std::result::Result<f64, String> {
    let value: f64 = field.parse().map_err(|_| format!("{:?} is not a decimal number", field))?;
    if !value.is_finite() {
        return Err(format!("{:?} is not a finite number", field));
    }
    Ok(value)
}

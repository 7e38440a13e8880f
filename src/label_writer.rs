use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cluster_labels::{ClusterLabels, NO_CLUSTER};
use crate::error::{PercolationError, PercolationResult};

/// How an empty site appears in label files.
pub const EMPTY_SITE_TOKEN: &str = "-1";

/// Writes one row per line, labels separated by single spaces.
pub fn write_labels<W: Write>(writer: &mut W, labels: &ClusterLabels) -> std::io::Result<()>
{
    for row in labels.rows_iter()
    {
        let line = row.iter()
            .map(|&label| if label == NO_CLUSTER {EMPTY_SITE_TOKEN.to_owned()} else {label.to_string()})
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

pub fn write_labels_to_file<P: AsRef<Path>>(file_name: P, labels: &ClusterLabels) -> PercolationResult<()>
{
    let mut file = BufWriter::new(fs::File::create(file_name)?);
    write_labels(&mut file, labels)?;
    file.flush()?;
    Ok(())
}

/// Parses the output of [`write_labels`]; rows must all have the same length.
pub fn parse_labels(content: &str) -> PercolationResult<ClusterLabels>
{
    let mut grid: Vec<Vec<usize>> = Vec::new();
    for (line_number, line) in content.lines().enumerate().filter(|(_, line)| !line.trim().is_empty())
    {
        let row = line.split_whitespace().map(|token| match token
        {
            EMPTY_SITE_TOKEN => Ok(NO_CLUSTER),
            token => token.parse::<usize>()
                .ok()
                .filter(|&label| label != NO_CLUSTER)
                .ok_or_else(|| PercolationError::InvalidInput(format!("line {}: bad label {token:?}", line_number + 1))),
        }).collect::<PercolationResult<Vec<_>>>()?;
        grid.push(row);
    }

    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0
    {
        return Err(PercolationError::InvalidInput(String::from("label file is empty")));
    }
    let mut labels = ClusterLabels::new(rows, cols);
    for (i, row) in grid.iter().enumerate()
    {
        if row.len() != cols
        {
            return Err(PercolationError::InvalidInput(format!("jagged label file: row {i} has {} columns, expected {cols}", row.len())));
        }
        for (j, &label) in row.iter().enumerate()
        {
            labels.set((i, j), label);
        }
    }
    Ok(labels)
}

pub fn read_labels_from_file<P: AsRef<Path>>(file_name: P) -> PercolationResult<ClusterLabels>
{
    let content = fs::read_to_string(file_name)?;
    parse_labels(&content)
}

use num_traits::Float;
use std::io::{BufWriter, Write};
use std::iter::zip;

use crate::error::{PercolationError, PercolationResult};

/// Sample averages for one occupation probability.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PercolationResults<T> where T: Float
{
    pub percolation_probability: T,  // fraction of samples with a spanning cluster
    pub clusters_per_site: T,
    pub largest_cluster_fraction: T, // largest cluster size / number of sites
    pub mean_cluster_size: T,
}


impl<T> PercolationResults<T> where T: Float + std::fmt::Display
{
    pub fn write<W: Write>(writer: &mut W, probabilities: &[T], results: &[PercolationResults<T>], rows: usize, cols: usize, elapsed_time: std::time::Duration) -> PercolationResult<()>
    {
        if probabilities.len() != results.len()
        {
            return Err(PercolationError::InvalidInput(String::from("Results length should match probabilities length")));
        }

        writeln!(writer, "p, percolation_probability, clusters_per_site, largest_cluster_fraction, mean_cluster_size, lattice: {rows}x{cols}, elapsed_time: {:.4}", elapsed_time.as_secs_f64())?;
        for (&p, res) in zip(probabilities, results)
        {
            writeln!(writer, "{p}, {}, {}, {}, {}", res.percolation_probability, res.clusters_per_site, res.largest_cluster_fraction, res.mean_cluster_size)?;
        }
        Ok(())
    }
    pub fn write_to_file(file_name: &str, probabilities: &[T], results: &[PercolationResults<T>], rows: usize, cols: usize, elapsed_time: std::time::Duration) -> PercolationResult<()>
    {
        let mut file = BufWriter::new(std::fs::File::create(file_name)?);
        Self::write(&mut file, probabilities, results, rows, cols, elapsed_time)?;
        file.flush()?;
        Ok(())
    }
}


/// Upper bound on the number of values `arange` will produce.
pub const MAX_ARANGE_VALUES: usize = 1 << 20;

/// `start, start + step, ...` up to (excluding) `stop`, at most `MAX_ARANGE_VALUES` values.
pub fn arange<T>(start: T, stop: T, step: T) -> PercolationResult<Vec<T>> where T: Float
{
    if step == T::zero()
    {
        return Err(PercolationError::Parameter(String::from("Arange Error: Step must be non zero")));
    }

    let direction_sign = (stop - start).signum();
    if step.signum() != direction_sign
    {
        return Err(PercolationError::Parameter(String::from("Arange Error: if stop > (<) start then step must be positive (negative).")));
    }
    let num_of_values = ((stop - start) / step).round().to_usize()
        .ok_or_else(|| PercolationError::Parameter(String::from("Arange Error: range is not finite")))?;
    if num_of_values > MAX_ARANGE_VALUES
    {
        return Err(PercolationError::Parameter(format!("Arange Error: {num_of_values} values requested, at most {MAX_ARANGE_VALUES} allowed")));
    }
    let my_arange = (0..num_of_values).map(|val| T::from(val).map(|val| start + step * val)).collect::<Option<Vec<_>>>()
        .ok_or_else(|| PercolationError::Parameter(String::from("Arange Error: could not convert index")))?;
    Ok(my_arange)
}

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::cluster_labels::ClusterLabels;
use crate::cluster_statistics::ClusterStatistics;
use crate::error::{PercolationError, PercolationResult};
use crate::hoshen_kopelman::label_clusters;
use crate::lattice::Lattice;
use crate::percolation_results::PercolationResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig
{
    pub rows: usize,
    pub cols: usize,
    pub samples: usize,
    pub seed: Option<u64>, // None draws every RNG from the OS
}

impl SweepConfig
{
    pub fn validate(&self) -> PercolationResult<()>
    {
        if self.rows == 0 || self.cols == 0
        {
            return Err(PercolationError::InvalidInput(format!("lattice must have non-zero dimensions, got {}x{}", self.rows, self.cols)));
        }
        if self.samples == 0
        {
            return Err(PercolationError::InvalidInput(String::from("samples must be at least 1")));
        }
        Ok(())
    }
    /// One RNG per probability index, so results do not depend on rayon's scheduling.
    /// Index `k` is seeded with the `k`-th draw of a generator seeded with `seed`.
    fn rng_for(&self, index: usize) -> SmallRng
    {
        match self.seed
        {
            Some(seed) =>
            {
                let mut seeder  = SmallRng::seed_from_u64(seed);
                let stream_seed = (0..=index).map(|_| seeder.random::<u64>()).last().unwrap_or_default();
                SmallRng::seed_from_u64(stream_seed)
            }
            None => SmallRng::from_os_rng(),
        }
    }
}

fn sample_probability(config: &SweepConfig, index: usize, p: f64) -> PercolationResult<PercolationResults<f64>>
{
    let mut rng     = config.rng_for(index);
    let mut lattice = Lattice::new_randomized(&mut rng, config.rows, config.cols, p)?;
    let num_sites   = (config.rows*config.cols) as f64;

    let mut percolating_acc  = 0_f64;
    let mut clusters_acc     = 0_f64;
    let mut largest_acc      = 0_f64;
    let mut mean_size_acc    = 0_f64;

    for sample in 0..config.samples
    {
        if sample > 0
        {
            lattice.randomize_sites(&mut rng, p);
        }
        let labels = label_clusters(&lattice);
        let stats  = ClusterStatistics::from_labels(&labels);

        if stats.percolates()
        {
            percolating_acc += 1_f64;
        }
        clusters_acc  += stats.num_clusters as f64;
        largest_acc   += stats.largest_cluster as f64;
        mean_size_acc += stats.mean_cluster_size;
    }

    let samples = config.samples as f64;
    log::debug!("p={p}: {} samples, percolation probability {}", config.samples, percolating_acc/samples);

    Ok(PercolationResults
    {
        percolation_probability:  percolating_acc/samples,
        clusters_per_site:        clusters_acc/(samples*num_sites),
        largest_cluster_fraction: largest_acc/(samples*num_sites),
        mean_cluster_size:        mean_size_acc/samples,
    })
}

/// Samples every probability in parallel and returns the averages in input order.
pub fn perform_percolation_sweep(config: &SweepConfig, probabilities: &[f64]) -> PercolationResult<Vec<PercolationResults<f64>>>
{
    config.validate()?;
    if let Some(p) = probabilities.iter().find(|p| !(0.0..=1.0).contains(*p))
    {
        return Err(PercolationError::InvalidInput(format!("occupation probability must be in [0, 1], got {p}")));
    }

    probabilities
        .par_iter()
        .enumerate()
        .map(|(index, &p)| sample_probability(config, index, p))
        .collect()
}

/// Generates and labels a single lattice, e.g. for dumping labels to a file.
pub fn label_single_sample(config: &SweepConfig, p: f64) -> PercolationResult<(Lattice, ClusterLabels)>
{
    config.validate()?;
    let mut rng    = config.rng_for(0);
    let lattice    = Lattice::new_randomized(&mut rng, config.rows, config.cols, p)?;
    let mut labels = label_clusters(&lattice);
    labels.compact();
    Ok((lattice, labels))
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn config(seed: u64) -> SweepConfig
    {
        SweepConfig {rows: 16, cols: 16, samples: 8, seed: Some(seed)}
    }

    #[test]
    fn test_neighbouring_seeds_use_distinct_streams()
    {
        for index in 1..8
        {
            let mut current = config(10).rng_for(index);
            let mut shifted = config(11).rng_for(index - 1);
            let a: Vec<u64> = (0..4).map(|_| current.random()).collect();
            let b: Vec<u64> = (0..4).map(|_| shifted.random()).collect();
            assert_ne!(a, b);
        }
        let first  = Lattice::new_randomized(&mut config(10).rng_for(1), 16, 16, 0.5).unwrap();
        let second = Lattice::new_randomized(&mut config(11).rng_for(0), 16, 16, 0.5).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sweep_extremes()
    {
        let results = perform_percolation_sweep(&config(1), &[0.0, 1.0]).unwrap();
        assert_eq!(results[0], PercolationResults::default());
        assert_eq!(results[1].percolation_probability, 1.0);
        assert_eq!(results[1].largest_cluster_fraction, 1.0);
        assert_eq!(results[1].clusters_per_site, 1.0/256.0);
        assert_eq!(results[1].mean_cluster_size, 256.0);
    }

    #[test]
    fn test_sweep_is_reproducible_with_seed()
    {
        let probabilities = [0.3, 0.5, 0.59, 0.7];
        let a = perform_percolation_sweep(&config(99), &probabilities).unwrap();
        let b = perform_percolation_sweep(&config(99), &probabilities).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_largest_cluster_grows_with_probability()
    {
        let results = perform_percolation_sweep(&config(5), &[0.2, 0.9]).unwrap();
        assert!(results[0].largest_cluster_fraction < results[1].largest_cluster_fraction);
    }

    #[test]
    fn test_sweep_rejects_bad_input()
    {
        assert!(perform_percolation_sweep(&config(1), &[0.5, 1.2]).is_err());
        let no_samples = SweepConfig {samples: 0, ..config(1)};
        assert!(perform_percolation_sweep(&no_samples, &[0.5]).is_err());
    }

    #[test]
    fn test_label_single_sample_is_compact()
    {
        let (lattice, labels) = label_single_sample(&config(3), 0.5).unwrap();
        let stats = ClusterStatistics::from_labels(&labels);
        assert_eq!(stats.occupied_sites, lattice.occupied_count());
        assert!(labels.as_slice().iter().all(|&label| label <= stats.num_clusters));
    }
}

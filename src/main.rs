use std::env;

use log::{error, info};

use percolation::label_writer::write_labels_to_file;
use percolation::parameter_reader::SimulationParameters;
use percolation::percolation_results::PercolationResults;
use percolation::percolation_sweep::{label_single_sample, perform_percolation_sweep};
use percolation::{ClusterStatistics, PercolationResult};


fn run(params: &SimulationParameters) -> PercolationResult<()>
{
    let SimulationParameters {sweep, probabilities, outputfile, labels_file} = params;

    info!("Launching percolation sweep for N:{}x{} with {} samples per probability", sweep.rows, sweep.cols, sweep.samples);
    let p_first = probabilities[0];
    let p_last  = probabilities[probabilities.len() - 1];
    info!("Using: {} probability values from {p_first} to {p_last}", probabilities.len());

    let time    = std::time::Instant::now();
    let results = perform_percolation_sweep(sweep, probabilities)?;
    let elapsed_time = time.elapsed();
    info!("Time taken: {:.4}s", elapsed_time.as_secs_f64());

    PercolationResults::write_to_file(outputfile, probabilities, &results, sweep.rows, sweep.cols, elapsed_time)?;
    info!("File saved as {outputfile}");

    if let Some(labels_file) = labels_file
    {
        let (_, labels) = label_single_sample(sweep, p_first)?;
        let stats = ClusterStatistics::from_labels(&labels);
        info!("Sample at p={p_first}: {} clusters, largest {} sites, percolates: {}", stats.num_clusters, stats.largest_cluster, stats.percolates());
        write_labels_to_file(labels_file, &labels)?;
        info!("Cluster labels saved as {labels_file}");
    }
    Ok(())
}

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args   = env::args().collect::<Vec<_>>();
    let params = SimulationParameters::read(&args).unwrap_or_else(|e|
    {
        error!("Failed to read parameters: {e}");
        std::process::exit(1);
    });

    if let Err(e) = run(&params)
    {
        error!("Percolation sweep failed: {e}");
        std::process::exit(1);
    }
}

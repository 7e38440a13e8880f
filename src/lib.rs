pub mod error;
pub mod lattice;
pub mod equivalence_class;
pub mod cluster_labels;
pub mod hoshen_kopelman;
pub mod cluster_statistics;
pub mod label_writer;
pub mod percolation_results;
pub mod percolation_sweep;
pub mod parameter_reader;

pub use error::{PercolationError, PercolationResult};
pub use lattice::Lattice;
pub use equivalence_class::EquivalenceClass;
pub use cluster_labels::{ClusterLabels, NO_CLUSTER};
pub use hoshen_kopelman::{hoshen_kopelman, label_clusters, HoshenKopelman};
pub use cluster_statistics::ClusterStatistics;
pub use percolation_results::{arange, PercolationResults};
pub use percolation_sweep::{perform_percolation_sweep, SweepConfig};
pub use parameter_reader::SimulationParameters;

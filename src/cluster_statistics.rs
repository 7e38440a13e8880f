use std::collections::HashSet;

use crate::cluster_labels::{ClusterLabels, NO_CLUSTER};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ClusterStatistics
{
    pub num_clusters: usize,
    pub occupied_sites: usize,
    pub largest_cluster: usize,
    pub mean_cluster_size: f64,
    pub spans_vertically: bool,   // some cluster touches both the top and bottom row
    pub spans_horizontally: bool, // some cluster touches both the left and right column
}

fn labels_on<'a>(sites: impl Iterator<Item = &'a usize>) -> HashSet<usize>
{
    sites.copied().filter(|&label| label != NO_CLUSTER).collect()
}

impl ClusterStatistics
{
    pub fn from_labels(labels: &ClusterLabels) -> Self
    {
        let sizes            = labels.cluster_sizes();
        let num_clusters     = sizes.len();
        let occupied_sites: usize = sizes.values().sum();
        let largest_cluster  = sizes.values().copied().max().unwrap_or(0);
        let mean_cluster_size = if num_clusters == 0 {0_f64} else {occupied_sites as f64 / num_clusters as f64};

        let top      = labels.rows_iter().next().map(|row| labels_on(row.iter())).unwrap_or_default();
        let bottom   = labels.rows_iter().last().map(|row| labels_on(row.iter())).unwrap_or_default();
        let left     = labels_on(labels.rows_iter().filter_map(|row| row.first()));
        let right    = labels_on(labels.rows_iter().filter_map(|row| row.last()));

        let spans_vertically   = !top.is_disjoint(&bottom);
        let spans_horizontally = !left.is_disjoint(&right);

        Self {num_clusters, occupied_sites, largest_cluster, mean_cluster_size, spans_vertically, spans_horizontally}
    }
    /// A cluster connects two opposite boundaries.
    pub fn percolates(&self) -> bool
    {
        self.spans_vertically || self.spans_horizontally
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::hoshen_kopelman::hoshen_kopelman;

    #[test]
    fn test_statistics_of_mixed_lattice()
    {
        let labels = hoshen_kopelman(&[[1u8, 0, 1], [1, 1, 0], [0, 1, 1]]).unwrap();
        let stats  = ClusterStatistics::from_labels(&labels);
        assert_eq!(stats.num_clusters, 2);
        assert_eq!(stats.occupied_sites, 6);
        assert_eq!(stats.largest_cluster, 5);
        assert!((stats.mean_cluster_size - 3.0).abs() < 1e-12);
        assert!(stats.spans_vertically);
        assert!(stats.spans_horizontally);
        assert!(stats.percolates());
    }

    #[test]
    fn test_statistics_of_empty_lattice()
    {
        let labels = hoshen_kopelman(&[[0u8; 4]; 4]).unwrap();
        let stats  = ClusterStatistics::from_labels(&labels);
        assert_eq!(stats, ClusterStatistics::default());
        assert!(!stats.percolates());
    }

    #[test]
    fn test_vertical_bar_spans_only_vertically()
    {
        let labels = hoshen_kopelman(&[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
        let stats  = ClusterStatistics::from_labels(&labels);
        assert!(stats.spans_vertically);
        assert!(!stats.spans_horizontally);
    }

    #[test]
    fn test_separate_edge_clusters_do_not_span()
    {
        let labels = hoshen_kopelman(&[[1u8, 1, 1], [0, 0, 0], [1, 1, 1]]).unwrap();
        let stats  = ClusterStatistics::from_labels(&labels);
        assert!(!stats.spans_vertically);
        assert!(stats.spans_horizontally);
        assert_eq!(stats.num_clusters, 2);
    }
}

use std::collections::HashMap;

use crate::lattice::{Lattice, EMPTY, OCCUPIED};

/// Label of empty sites. Minted labels start at 1.
pub const NO_CLUSTER: usize = 0;

/// Same-shaped grid of cluster labels produced by the labeler.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClusterLabels
{
    data: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl ClusterLabels
{
    pub fn new(rows: usize, cols: usize) -> Self
    {
        let data = vec![NO_CLUSTER; rows*cols];
        Self {data, rows, cols}
    }
    #[inline]
    pub fn at_pos(&self, pos: (usize, usize)) -> usize
    {
        self.data[pos.0*self.cols + pos.1]
    }
    #[inline]
    pub fn set(&mut self, pos: (usize, usize), label: usize)
    {
        self.data[pos.0*self.cols + pos.1] = label;
    }
    /// `None` for empty sites.
    pub fn get(&self, i: usize, j: usize) -> Option<usize>
    {
        match self.at_pos((i, j))
        {
            NO_CLUSTER => None,
            label      => Some(label),
        }
    }
    pub fn shape(&self) -> (usize, usize)
    {
        (self.rows, self.cols)
    }
    pub fn as_slice(&self) -> &[usize]
    {
        &self.data
    }
    pub fn rows_iter(&self) -> std::slice::Chunks<'_, usize>
    {
        self.data.chunks(self.cols.max(1))
    }
    pub(crate) fn labels_mut(&mut self) -> std::slice::IterMut<'_, usize>
    {
        self.data.iter_mut()
    }
    pub fn num_clusters(&self) -> usize
    {
        self.cluster_sizes().len()
    }
    /// Number of sites per label.
    pub fn cluster_sizes(&self) -> HashMap<usize, usize>
    {
        let mut sizes = HashMap::new();
        for &label in self.data.iter().filter(|&&label| label != NO_CLUSTER)
        {
            *sizes.entry(label).or_insert(0) += 1;
        }
        sizes
    }
    /// Treats every labelled site as occupied.
    pub fn occupied_mask(&self) -> Lattice
    {
        let data = self.data.iter().map(|&label| if label == NO_CLUSTER {EMPTY} else {OCCUPIED}).collect();
        Lattice::from_raw(data, self.rows, self.cols)
    }
    /// Renumbers labels to `1..=num_clusters` in order of first appearance in the raster scan.
    pub fn compact(&mut self)
    {
        let mut relabel: HashMap<usize, usize> = HashMap::new();
        for label in self.data.iter_mut().filter(|label| **label != NO_CLUSTER)
        {
            let next = relabel.len() + 1;
            *label = *relabel.entry(*label).or_insert(next);
        }
    }
}

//! Hoshen–Kopelman cluster labeling.
//!
//! One raster scan assigns provisional labels from the left and upper
//! neighbours and records merges in an [`EquivalenceClass`]; a second scan
//! rewrites every site to the smallest label of its class.

use crate::cluster_labels::{ClusterLabels, NO_CLUSTER};
use crate::equivalence_class::EquivalenceClass;
use crate::error::PercolationResult;
use crate::lattice::Lattice;

trait Direction
{
    fn left(self) -> Self;
    fn above(self) -> Self;
}

impl Direction for (usize, usize)
{
    #[inline(always)]
    fn left(self) -> Self
    {
        (self.0, self.1 - 1)
    }
    #[inline(always)]
    fn above(self) -> Self
    {
        (self.0 - 1, self.1)
    }
}

/// Labeler bound to one lattice; the label grid always takes the lattice's shape.
pub struct HoshenKopelman<'a>
{
    lattice: &'a Lattice,
    labels: ClusterLabels,
    eq_classes: EquivalenceClass,
}
impl<'a> HoshenKopelman<'a>
{
    pub fn new(lattice: &'a Lattice) -> Self
    {
        let (rows, cols) = lattice.shape();
        let labels       = ClusterLabels::new(rows, cols);
        let eq_classes   = EquivalenceClass::with_capacity(rows*cols/4);
        Self {lattice, labels, eq_classes}
    }
    #[inline(always)]
    fn make_new_cluster(&mut self, pos: (usize, usize))
    {
        let new_class = self.eq_classes.create_class();
        self.labels.set(pos, new_class);
    }
    #[inline(always)]
    fn merge_clusters_single(&mut self, pos: (usize, usize), neighbour_label: usize)
    {
        let cluster_label = self.eq_classes.find(neighbour_label);
        self.labels.set(pos, cluster_label);
    }
    #[inline(always)]
    fn merge_clusters_above_and_left(&mut self, pos: (usize, usize), above_label: usize, left_label: usize)
    {
        let label = self.eq_classes.union_get_label(above_label, left_label);
        self.labels.set(pos, label);
    }
    /// Labels one occupied site. A missing neighbour (lattice edge) and an
    /// empty neighbour are both `NO_CLUSTER`.
    #[inline(always)]
    fn assign(&mut self, pos: (usize, usize), left_label: usize, above_label: usize)
    {
        match (left_label, above_label)
        {
            (NO_CLUSTER, NO_CLUSTER) => self.make_new_cluster(pos),
            (left, NO_CLUSTER)       => self.merge_clusters_single(pos, left),
            (NO_CLUSTER, above)      => self.merge_clusters_single(pos, above),
            (left, above)            => self.merge_clusters_above_and_left(pos, above, left),
        }
    }
    #[inline(always)]
    fn handle_top(&mut self)
    {
        let lattice = self.lattice;
        let top_left = (0, 0);
        if lattice.is_occupied(top_left)
        {
            self.make_new_cluster(top_left);
        }
        for x in lattice.columns().skip(1)
        {
            let pos = (0, x);
            if lattice.is_occupied(pos)
            {
                let left_label = self.labels.at_pos(pos.left());
                self.assign(pos, left_label, NO_CLUSTER);
            }
        }
    }
    #[inline(always)]
    fn handle_rows(&mut self)
    {
        let lattice = self.lattice;
        for y in lattice.rows().skip(1)
        {
            // ---------------------- LEFT EDGE ---------------------------//
            let left_edge = (y, 0);
            if lattice.is_occupied(left_edge)
            {
                let above_label = self.labels.at_pos(left_edge.above());
                self.assign(left_edge, NO_CLUSTER, above_label);
            }
            // ----------------------- BULK -----------------------//
            for x in lattice.columns().skip(1)
            {
                let pos = (y, x);
                if lattice.is_occupied(pos)
                {
                    let left_label  = self.labels.at_pos(pos.left());
                    let above_label = self.labels.at_pos(pos.above());
                    self.assign(pos, left_label, above_label);
                }
            }
        }
    }
    fn resolve_labels(&mut self)
    {
        let eq_classes = &mut self.eq_classes;
        for label in self.labels.labels_mut().filter(|label| **label != NO_CLUSTER)
        {
            *label = eq_classes.find_compress(*label);
        }
    }
    /// Consumes the labeler; the equivalence map does not outlive the call.
    pub fn label(mut self) -> ClusterLabels
    {
        self.handle_top();
        self.handle_rows();
        self.resolve_labels();
        log::trace!("labeled {:?} lattice: minted {} labels, {} clusters", self.lattice.shape(), self.eq_classes.num_labels(), self.eq_classes.num_classes());
        self.labels
    }
}

/// Labels the clusters of a validated lattice.
pub fn label_clusters(lattice: &Lattice) -> ClusterLabels
{
    HoshenKopelman::new(lattice).label()
}

/// Validates a nested 0/1 grid and labels its clusters.
pub fn hoshen_kopelman<T: AsRef<[u8]>>(grid: &[T]) -> PercolationResult<ClusterLabels>
{
    let lattice = Lattice::from_rows(grid)?;
    Ok(label_clusters(&lattice))
}

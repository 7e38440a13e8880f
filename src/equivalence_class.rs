use crate::cluster_labels::NO_CLUSTER;

/// Union-find forest over provisional cluster labels.
///
/// `data[label]` is the parent of `label`. Roots point to themselves and a
/// non-root always points to a strictly smaller label, so the root of a class
/// is its smallest member. Slot 0 is the "no cluster" sentinel and stays its
/// own root.
pub struct EquivalenceClass
{
    data: Vec<usize>,
}
impl EquivalenceClass
{
    pub fn new() -> Self
    {
        Self::with_capacity(0)
    }
    pub fn with_capacity(expected_classes: usize) -> Self
    {
        let mut data = Vec::with_capacity(expected_classes + 1);
        data.push(NO_CLUSTER);
        Self {data}
    }
    /// Number of labels minted so far.
    pub fn num_labels(&self) -> usize
    {
        self.data.len() - 1
    }
    pub fn create_class(&mut self) -> usize
    {
        let new_cluster_index = self.data.len();
        self.data.push(new_cluster_index);
        new_cluster_index
    }
    pub fn find(&self, mut cluster_result: usize) -> usize // find to which equivalence class a label belongs
    {
        while self.data[cluster_result] != cluster_result
        {
            cluster_result = self.data[cluster_result];
        }
        cluster_result
    }
    /// Like `find`, but points every label on the walked path straight at the root.
    pub fn find_compress(&mut self, cluster_label: usize) -> usize
    {
        let root = self.find(cluster_label);
        let mut current = cluster_label;
        while self.data[current] != root
        {
            let next = self.data[current];
            self.data[current] = root;
            current = next;
        }
        root
    }
    /// Merges the classes of both labels and returns the canonical (smaller) root.
    pub fn union_get_label(&mut self, cluster_label1: usize, cluster_label2: usize) -> usize
    {
        let l1    = self.find_compress(cluster_label1);
        let l2    = self.find_compress(cluster_label2);
        let l_max = l1.max(l2);
        let l_min = l1.min(l2);
        if l_min != l_max
        {
            self.data[l_max] = l_min;
        }
        l_min
    }
    pub fn num_classes(&self) -> usize
    {
        self.data.iter().enumerate().skip(1).filter(|&(label, &parent)| label == parent).count()
    }
}

impl Default for EquivalenceClass
{
    fn default() -> Self
    {
        Self::new()
    }
}

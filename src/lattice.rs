use rand::Rng;

use crate::error::{PercolationError, PercolationResult};

pub const EMPTY: u8    = 0;
pub const OCCUPIED: u8 = 1;

/// Rectangular 0/1 occupancy grid, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Lattice
{
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

fn check_shape(rows: usize, cols: usize) -> PercolationResult<()>
{
    if rows == 0 || cols == 0
    {
        return Err(PercolationError::InvalidInput(format!("lattice must have non-zero dimensions, got {rows}x{cols}")));
    }
    Ok(())
}

impl Lattice
{
    pub fn new_empty(rows: usize, cols: usize) -> PercolationResult<Self>
    {
        check_shape(rows, cols)?;
        let data = vec![EMPTY; rows*cols];
        Ok(Self {data, rows, cols})
    }
    pub fn new_occupied(rows: usize, cols: usize) -> PercolationResult<Self>
    {
        check_shape(rows, cols)?;
        let data = vec![OCCUPIED; rows*cols];
        Ok(Self {data, rows, cols})
    }
    /// Every site is occupied independently with probability `p`.
    pub fn new_randomized<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize, p: f64) -> PercolationResult<Self>
    {
        if !(0.0..=1.0).contains(&p)
        {
            return Err(PercolationError::InvalidInput(format!("occupation probability must be in [0, 1], got {p}")));
        }
        let mut lattice = Lattice::new_empty(rows, cols)?;
        lattice.randomize_sites(rng, p);
        Ok(lattice)
    }
    /// Builds a lattice from nested rows, rejecting jagged, empty or non-binary input.
    pub fn from_rows<T: AsRef<[u8]>>(grid: &[T]) -> PercolationResult<Self>
    {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        check_shape(rows, cols)?;

        let mut data = Vec::with_capacity(rows*cols);
        for (i, row) in grid.iter().enumerate()
        {
            let row = row.as_ref();
            if row.len() != cols
            {
                return Err(PercolationError::InvalidInput(format!("jagged lattice: row {i} has {} columns, expected {cols}", row.len())));
            }
            if let Some(j) = row.iter().position(|&site| site > OCCUPIED)
            {
                return Err(PercolationError::InvalidInput(format!("site ({i}, {j}) is {}, expected 0 or 1", row[j])));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {data, rows, cols})
    }
    pub(crate) fn from_raw(data: Vec<u8>, rows: usize, cols: usize) -> Self
    {
        debug_assert_eq!(data.len(), rows*cols, "from_raw: data length must match shape");
        Self {data, rows, cols}
    }
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> u8
    {
        self.data[i*self.cols + j]
    }
    #[inline]
    pub fn at_pos(&self, pos: (usize, usize)) -> u8
    {
        self.at(pos.0, pos.1)
    }
    #[inline]
    pub fn is_occupied(&self, pos: (usize, usize)) -> bool
    {
        self.at_pos(pos) == OCCUPIED
    }
    pub fn occupied_count(&self) -> usize
    {
        self.data.iter().filter(|&&site| site == OCCUPIED).count()
    }
    pub fn shape(&self) -> (usize, usize)
    {
        (self.rows, self.cols)
    }
    pub fn rows(&self) -> std::ops::Range<usize>
    {
        0..self.rows
    }
    pub fn columns(&self) -> std::ops::Range<usize>
    {
        0..self.cols
    }
    pub fn randomize_sites<R: Rng + ?Sized>(&mut self, rng: &mut R, p: f64)
    {
        for site in self.data.iter_mut()
        {
            *site = if rng.random_bool(p) {OCCUPIED} else {EMPTY};
        }
    }
}

use std::fmt;
impl fmt::Debug for Lattice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let mut result = vec![String::from("\n[")];
        for i in self.rows()
        {
            for j in self.columns()
            {
                result.push(format!(" {} ", self.at(i, j)));
            }
            if i + 1 < self.rows
            {
                result.push(String::from("\n"));
            }
        }
        result.push(String::from("]"));
        write!(f, "{}", result.concat())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_rows_keeps_row_major_layout()
    {
        let lattice = Lattice::from_rows(&[vec![1u8, 0, 1], vec![0, 0, 1]]).unwrap();
        assert_eq!(lattice.shape(), (2, 3));
        assert_eq!(lattice.at(0, 2), 1);
        assert_eq!(lattice.at(1, 0), 0);
        assert_eq!(lattice.occupied_count(), 3);
    }

    #[test]
    fn test_from_rows_rejects_jagged()
    {
        let result = Lattice::from_rows(&[vec![1u8, 0, 1], vec![0, 1]]);
        assert!(matches!(result, Err(PercolationError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_rejects_empty_dimensions()
    {
        let no_rows: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(Lattice::from_rows(&no_rows), Err(PercolationError::InvalidInput(_))));
        assert!(matches!(Lattice::from_rows(&[Vec::<u8>::new()]), Err(PercolationError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_rejects_non_binary()
    {
        let result = Lattice::from_rows(&[vec![1u8, 2]]);
        assert!(matches!(result, Err(PercolationError::InvalidInput(_))));
    }

    #[test]
    fn test_randomized_extreme_probabilities()
    {
        let mut rng = SmallRng::seed_from_u64(7);
        let empty = Lattice::new_randomized(&mut rng, 4, 6, 0.0).unwrap();
        let full  = Lattice::new_randomized(&mut rng, 4, 6, 1.0).unwrap();
        assert_eq!(empty.occupied_count(), 0);
        assert_eq!(full.occupied_count(), 24);
    }

    #[test]
    fn test_randomized_rejects_bad_probability()
    {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(Lattice::new_randomized(&mut rng, 4, 4, 1.5).is_err());
        assert!(Lattice::new_randomized(&mut rng, 4, 4, f64::NAN).is_err());
    }

    #[test]
    fn test_randomized_is_reproducible_with_seed()
    {
        let a = Lattice::new_randomized(&mut SmallRng::seed_from_u64(42), 16, 9, 0.4).unwrap();
        let b = Lattice::new_randomized(&mut SmallRng::seed_from_u64(42), 16, 9, 0.4).unwrap();
        assert_eq!(a, b);
    }
}

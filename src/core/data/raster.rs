/// Row-major grid of escape counts with shape `(height, width)`.
///
/// Values lie in `[0, max_iterations]`; `max_iterations` itself marks a point
/// that stayed bounded for the whole budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

impl Raster {
    pub(crate) fn from_counts(width: u32, height: u32, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), width as usize * height as usize);

        Self {
            width,
            height,
            counts,
        }
    }

    pub(crate) fn zeroed(width: u32, height: u32) -> Self {
        Self::from_counts(width, height, vec![0; width as usize * height as usize])
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(rows, columns)`, matching the `(height, width)` layout of the grid.
    #[must_use]
    pub fn shape(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.counts
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        if row >= self.height {
            return None;
        }

        let width = self.width as usize;
        let start = row as usize * width;

        self.counts.get(start..start + width)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.counts.iter().copied().max()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u32> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::Raster;

    fn sample() -> Raster {
        Raster::from_counts(3, 2, vec![0, 1, 2, 3, 4, 5])
    }

    #[test]
    fn test_shape_is_height_then_width() {
        let raster = sample();

        assert_eq!(raster.shape(), (2, 3));
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
    }

    #[test]
    fn test_get_is_row_major() {
        let raster = sample();

        assert_eq!(raster.get(0, 0), Some(0));
        assert_eq!(raster.get(0, 2), Some(2));
        assert_eq!(raster.get(1, 0), Some(3));
        assert_eq!(raster.get(1, 2), Some(5));
        assert_eq!(raster.get(2, 0), None);
        assert_eq!(raster.get(0, 3), None);
    }

    #[test]
    fn test_row_slices() {
        let raster = sample();

        assert_eq!(raster.row(1), Some(&[3, 4, 5][..]));
        assert_eq!(raster.row(2), None);
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::zeroed(0, 4);

        assert!(raster.is_empty());
        assert_eq!(raster.shape(), (4, 0));
        assert_eq!(raster.max_value(), None);
        assert_eq!(raster.row(0), Some(&[][..]));
    }
}

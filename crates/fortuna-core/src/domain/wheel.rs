use crate::error::CoreError;
use rand::Rng;

pub const DEFAULT_SECTOR_COUNT: usize = 18;
pub const DEFAULT_EXCLUDED_SECTORS: [usize; 2] = [2, 8];

/// Wheel geometry: a contiguous range of sector indices with some sectors
/// removed from the draw. Validated at construction, so `draw` always has
/// at least one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelLayout {
    sector_count: usize,
    excluded: Vec<usize>,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            sector_count: DEFAULT_SECTOR_COUNT,
            excluded: DEFAULT_EXCLUDED_SECTORS.to_vec(),
        }
    }
}

impl WheelLayout {
    pub fn new(sector_count: usize, excluded: Vec<usize>) -> Result<Self, CoreError> {
        if sector_count == 0 {
            return Err(CoreError::EmptyWheel);
        }
        for (pos, &sector) in excluded.iter().enumerate() {
            if sector >= sector_count {
                return Err(CoreError::ExcludedSectorOutOfRange(sector));
            }
            if excluded[..pos].contains(&sector) {
                return Err(CoreError::DuplicateExcludedSector(sector));
            }
        }
        if excluded.len() == sector_count {
            return Err(CoreError::NoSelectableSectors);
        }
        Ok(Self {
            sector_count,
            excluded,
        })
    }

    pub fn sector_count(&self) -> usize {
        self.sector_count
    }

    pub fn excluded(&self) -> &[usize] {
        &self.excluded
    }

    /// Selectable sector indices in ascending order.
    pub fn candidates(&self) -> Vec<usize> {
        (0..self.sector_count)
            .filter(|sector| !self.excluded.contains(sector))
            .collect()
    }

    /// One independent uniform draw over the selectable sectors.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        let candidates = self.candidates();
        candidates[rng.random_range(0..candidates.len())]
    }
}

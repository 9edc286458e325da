//! Double-buffered dense cell storage and the patch interface.
//!
//! Two same-sized buffers ping-pong: a step reads the whole front buffer
//! and writes the whole back buffer, then the roles swap. Painting goes
//! straight to the front buffer through [`Patch`] application and never
//! touches transition logic.

use crate::error::PatchError;

/// A front-buffer mutation: sparse cell writes or a full replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Patch {
    /// `(cell index, new state)` pairs, applied in order.
    Cells(Vec<(usize, u8)>),
    /// A whole-grid snapshot, `width * height` states.
    Dense(Vec<u8>),
}

/// Fixed-size grid with front/back state buffers and a generation counter.
///
/// Dimensions are fixed for the grid's lifetime; a resize is a new grid.
/// Every stored value is less than the configured state count — patches are
/// validated before any write, and the transition function cannot produce an
/// out-of-range state.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: u32,
    height: u32,
    generation: u64,
    front: Vec<u8>,
    back: Vec<u8>,
}

impl CellGrid {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            generation: 0,
            front: vec![0; cells],
            back: vec![0; cells],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.front[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, state: u8) {
        let i = self.index(x, y);
        self.front[i] = state;
    }

    /// The current generation's cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.front
    }

    /// An owned copy of the current generation.
    pub fn snapshot(&self) -> Vec<u8> {
        self.front.clone()
    }

    /// Read view of the front buffer plus write view of the back buffer,
    /// for one update pass.
    #[inline]
    pub fn buffers_mut(&mut self) -> (&[u8], &mut [u8]) {
        (&self.front, &mut self.back)
    }

    /// Promote the back buffer to front and advance the generation by one.
    /// The caller must have written every back-buffer cell first.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
    }

    /// Apply a patch to the front buffer. All-or-nothing: the patch is fully
    /// validated against the grid extent and `num_states` before the first
    /// write, so a failed application leaves the grid untouched. Does not
    /// advance the generation.
    pub fn apply(&mut self, patch: &Patch, num_states: u16) -> Result<(), PatchError> {
        match patch {
            Patch::Cells(cells) => {
                for &(index, value) in cells {
                    if index >= self.front.len() {
                        return Err(PatchError::IndexOutOfBounds {
                            index,
                            cells: self.front.len(),
                        });
                    }
                    if value as u16 >= num_states {
                        return Err(PatchError::ValueOutOfRange { value, num_states });
                    }
                }
                for &(index, value) in cells {
                    self.front[index] = value;
                }
            }
            Patch::Dense(cells) => {
                if cells.len() != self.front.len() {
                    return Err(PatchError::DenseSizeMismatch {
                        got: cells.len(),
                        expected: self.front.len(),
                    });
                }
                if let Some(&value) = cells.iter().find(|&&v| v as u16 >= num_states) {
                    return Err(PatchError::ValueOutOfRange { value, num_states });
                }
                self.front.copy_from_slice(cells);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_flips_buffers_and_counts_generations() {
        let mut grid = CellGrid::new(3, 2);
        grid.set(1, 0, 1);
        {
            let (front, back) = grid.buffers_mut();
            back.copy_from_slice(front);
            back[0] = 1;
        }
        grid.swap();
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(1, 0), 1);
    }

    #[test]
    fn sparse_patch_applies_in_order() {
        let mut grid = CellGrid::new(2, 2);
        let patch = Patch::Cells(vec![(0, 3), (0, 1), (3, 2)]);
        grid.apply(&patch, 4).unwrap();
        assert_eq!(grid.cells(), &[1, 0, 0, 2]);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn failed_patch_leaves_the_grid_untouched() {
        let mut grid = CellGrid::new(2, 2);
        grid.apply(&Patch::Cells(vec![(0, 1)]), 2).unwrap();

        let err = grid.apply(&Patch::Cells(vec![(1, 1), (4, 1)]), 2);
        assert_eq!(
            err,
            Err(PatchError::IndexOutOfBounds { index: 4, cells: 4 })
        );
        assert_eq!(grid.cells(), &[1, 0, 0, 0]);

        let err = grid.apply(&Patch::Cells(vec![(2, 1), (3, 2)]), 2);
        assert_eq!(
            err,
            Err(PatchError::ValueOutOfRange {
                value: 2,
                num_states: 2
            })
        );
        assert_eq!(grid.cells(), &[1, 0, 0, 0]);
    }

    #[test]
    fn dense_patch_replaces_everything() {
        let mut grid = CellGrid::new(2, 2);
        grid.apply(&Patch::Dense(vec![1, 0, 2, 3]), 4).unwrap();
        assert_eq!(grid.snapshot(), vec![1, 0, 2, 3]);

        assert!(grid.apply(&Patch::Dense(vec![0; 3]), 4).is_err());
        assert!(grid.apply(&Patch::Dense(vec![9; 4]), 4).is_err());
        assert_eq!(grid.snapshot(), vec![1, 0, 2, 3]);
    }
}

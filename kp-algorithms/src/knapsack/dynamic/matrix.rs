use ndarray::Array2;

/// Two-dimensional grid of flags addressed by `(row, col)`.
///
/// Every cell starts out `false`. Access outside `rows() x cols()` panics.
pub trait BoolMatrix {
    fn zeros(rows: usize, cols: usize) -> Self
    where
        Self: Sized;
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> bool;
    fn set(&mut self, row: usize, col: usize, value: bool);
    /// Number of cells set to `true`.
    fn count_ones(&self) -> usize;
    /// Bytes held by the cell storage.
    fn size_in_bytes(&self) -> usize;
}

/// One `bool` per cell. Fast to access, eight times larger than [`PackedBoolMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoolMatrix {
    cells: Array2<bool>,
}

impl BoolMatrix for DenseBoolMatrix {
    fn zeros(rows: usize, cols: usize) -> Self {
        DenseBoolMatrix {
            cells: Array2::from_elem((rows, cols), false),
        }
    }

    fn rows(&self) -> usize {
        self.cells.nrows()
    }

    fn cols(&self) -> usize {
        self.cells.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> bool {
        self.cells[[row, col]]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: bool) {
        self.cells[[row, col]] = value;
    }

    fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    fn size_in_bytes(&self) -> usize {
        self.cells.len() * std::mem::size_of::<bool>()
    }
}

const WORD_BITS: usize = u64::BITS as usize;

/// One bit per cell, rows laid out back to back in `u64` words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBoolMatrix {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl PackedBoolMatrix {
    #[inline]
    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        assert!(row < self.rows, "Row {} is out of bound ({})", row, self.rows);
        assert!(col < self.cols, "Col {} is out of bound ({})", col, self.cols);
        let bit = row * self.cols + col;
        (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
    }
}

impl BoolMatrix for PackedBoolMatrix {
    fn zeros(rows: usize, cols: usize) -> Self {
        PackedBoolMatrix {
            rows,
            cols,
            words: vec![0; (rows * cols).div_ceil(WORD_BITS)],
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.locate(row, col);
        self.words[word] & mask != 0
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.locate(row, col);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn size_in_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

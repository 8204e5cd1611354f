use std::slice::{ChunksExact, ChunksExactMut};

/// Read access to a tightly packed, row-major image.
///
/// Rows hold `width * channels` interleaved samples with no padding, so the
/// whole image is always available as one contiguous slice.
pub trait ImageView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn channels(&self) -> usize {
        1
    }

    fn as_slice(&self) -> &[Self::Sample];

    /// Number of samples in one row.
    #[inline]
    fn row_len(&self) -> usize {
        self.width() * self.channels()
    }

    #[inline]
    fn row(&self, y: usize) -> &[Self::Sample] {
        let len = self.row_len();
        &self.as_slice()[y * len..(y + 1) * len]
    }

    fn rows(&self) -> Rows<'_, Self::Sample> {
        // `chunks_exact(0)` panics; an empty image simply yields no rows.
        self.as_slice().chunks_exact(self.row_len().max(1))
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub trait ImageViewMut: ImageView {
    fn as_mut_slice(&mut self) -> &mut [Self::Sample];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::Sample] {
        let len = self.row_len();
        &mut self.as_mut_slice()[y * len..(y + 1) * len]
    }

    fn rows_mut(&mut self) -> RowsMut<'_, Self::Sample> {
        let len = self.row_len().max(1);
        self.as_mut_slice().chunks_exact_mut(len)
    }
}

pub type Rows<'a, S> = ChunksExact<'a, S>;
pub type RowsMut<'a, S> = ChunksExactMut<'a, S>;

use devplot_core::SeriesKind;

/// One character cell of a rasterised chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Point(SeriesKind),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Point(SeriesKind::Raw) => '.',
            Self::Point(SeriesKind::Smoothed) => '*',
        }
    }
}

/// Value range shared by every series of a pane.
pub fn bounds<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> Option<(f64, f64)> {
    series
        .into_iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Squeeze `values` into at most `width` columns, averaging each bucket.
///
/// Shorter inputs keep one column per value, left aligned.  Non-finite values
/// are skipped; a bucket with none left yields `None`.
pub fn downsample(values: &[f64], width: usize) -> Vec<Option<f64>> {
    let n = values.len();
    if n <= width {
        return values
            .iter()
            .map(|v| v.is_finite().then_some(*v))
            .collect();
    }

    (0..width)
        .map(|col| {
            let bucket = &values[col * n / width..(col + 1) * n / width];
            let finite: Vec<f64> = bucket.iter().copied().filter(|v| v.is_finite()).collect();
            (!finite.is_empty()).then(|| finite.iter().sum::<f64>() / finite.len() as f64)
        })
        .collect()
}

/// Rasterise series onto a `height × width` grid, row 0 at the top.
///
/// Later series overwrite earlier ones where they share a cell.
pub fn rasterise(
    series: &[(SeriesKind, &[f64])],
    width: usize,
    height: usize,
) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; width]; height];
    if width == 0 || height == 0 {
        return grid;
    }
    let Some((lo, hi)) = bounds(series.iter().map(|(_, v)| *v)) else {
        return grid;
    };

    for (kind, values) in series {
        for (col, value) in downsample(values, width).into_iter().enumerate() {
            let Some(v) = value else { continue };
            grid[row_for(v, lo, hi, height)][col] = Cell::Point(*kind);
        }
    }

    grid
}

fn row_for(v: f64, lo: f64, hi: f64, height: usize) -> usize {
    if hi <= lo {
        return height / 2;
    }
    let from_top = (hi - v) / (hi - lo) * (height - 1) as f64;
    (from_top.round() as usize).min(height - 1)
}

/// Summary of a full logit row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStats {
    pub max: f32,
    pub min: f32,
    pub mean: f32,
}

impl RowStats {
    /// Computes max, min and arithmetic mean over every entry of `row`.
    ///
    /// Returns `None` for an empty row. The sum is accumulated in f64 so
    /// vocab-sized rows keep their precision.
    pub fn compute(row: &[f32]) -> Option<RowStats> {
        if row.is_empty() {
            return None;
        }
        let mut max = f32::NEG_INFINITY;
        let mut min = f32::INFINITY;
        let mut sum = 0.0f64;
        for &x in row {
            max = max.max(x);
            min = min.min(x);
            sum += x as f64;
        }
        Some(RowStats {
            max,
            min,
            mean: (sum / row.len() as f64) as f32,
        })
    }
}

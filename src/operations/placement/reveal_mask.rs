use super::{LengthTable, PlacementSample};

/// Per-slot visibility as a fence unrolls.
///
/// Walks the samples from the last slot to the first, accumulating
/// `gap + footprint` for each. A slot stays visible while the accumulated
/// distance fits within `curve_length * (1 - progress)`, so the slots
/// farthest along the fence disappear first as progress grows.
pub struct RevealMask<'a> {
    lengths: &'a LengthTable,
    gap: f64,
    progress: f64,
}

impl<'a> RevealMask<'a> {
    /// Creates a new `RevealMask` query.
    ///
    /// `progress` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(lengths: &'a LengthTable, gap: f64, progress: f64) -> Self {
        Self {
            lengths,
            gap,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// Executes the query, returning one flag per sample in slot order.
    #[must_use]
    pub fn execute(&self, samples: &[PlacementSample], curve_length: f64) -> Vec<bool> {
        let budget = curve_length * (1.0 - self.progress);
        let mut visible = vec![false; samples.len()];
        let mut reached = 0.0;
        for (flag, sample) in visible.iter_mut().zip(samples).rev() {
            reached += self.gap + self.lengths.footprint_for_slot(sample.slot);
            *flag = reached <= budget;
        }
        visible
    }

    /// Inverts a mask, for the straight fence that takes over the slots
    /// the spiral has hidden.
    #[must_use]
    pub fn complement(mask: &[bool]) -> Vec<bool> {
        mask.iter().map(|v| !v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Transform;

    fn samples(count: usize) -> Vec<PlacementSample> {
        (0..count)
            .map(|slot| PlacementSample {
                slot,
                model_index: 0,
                distance: 0.0,
                transform: Transform::IDENTITY,
            })
            .collect()
    }

    #[test]
    fn zero_progress_shows_what_fits() {
        let table = LengthTable::from_footprints(vec![2.0]);
        // Each slot needs 3.0; 10.0 fits three of four.
        let mask = RevealMask::new(&table, 1.0, 0.0).execute(&samples(4), 10.0);
        assert_eq!(mask, vec![false, true, true, true]);
    }

    #[test]
    fn full_progress_hides_everything() {
        let table = LengthTable::from_footprints(vec![2.0]);
        let mask = RevealMask::new(&table, 1.0, 1.0).execute(&samples(3), 100.0);
        assert_eq!(mask, vec![false, false, false]);
    }

    #[test]
    fn half_progress_keeps_tail_slots() {
        let table = LengthTable::from_footprints(vec![1.0, 3.0]);
        // From the last slot back: 1+3=4, 4+1+1=6, 6+1+3=10, 10+1+1=12.
        let mask = RevealMask::new(&table, 1.0, 0.5).execute(&samples(4), 20.0);
        assert_eq!(mask, vec![false, true, true, true]);
    }

    #[test]
    fn complement_inverts() {
        assert_eq!(
            RevealMask::complement(&[true, false, true]),
            vec![false, true, false]
        );
    }
}

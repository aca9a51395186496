//! 騎手載重累計迭代器

use std::iter::FusedIterator;

use courier_core::Parcel;
use rust_decimal::Decimal;
use serde::Serialize;

/// 一步載重累計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadStep<'a> {
    pub parcel_id: &'a str,
    pub weight_kg: Decimal,
    /// 含本件的累計重量
    pub cumulative_kg: Decimal,
}

/// 依分派順序走訪騎手的包裹，並回報累計重量
#[derive(Debug, Clone)]
pub struct RiderLoadIterator<'a> {
    parcels: &'a [Parcel],
    index: usize,
    cumulative_kg: Decimal,
}

impl<'a> RiderLoadIterator<'a> {
    pub fn new(parcels: &'a [Parcel]) -> Self {
        Self {
            parcels,
            index: 0,
            cumulative_kg: Decimal::ZERO,
        }
    }

    /// 到目前為止的累計重量
    pub fn cumulative_kg(&self) -> Decimal {
        self.cumulative_kg
    }
}

impl<'a> Iterator for RiderLoadIterator<'a> {
    type Item = LoadStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let parcels = self.parcels;
        let parcel = parcels.get(self.index)?;
        self.cumulative_kg = self.cumulative_kg.saturating_add(parcel.weight_kg);
        self.index += 1;
        Some(LoadStep {
            parcel_id: &parcel.parcel_id,
            weight_kg: parcel.weight_kg,
            cumulative_kg: self.cumulative_kg,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parcels.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RiderLoadIterator<'_> {}

impl FusedIterator for RiderLoadIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Priority;

    fn parcel(id: &str, weight_kg: Decimal) -> Parcel {
        Parcel::new(
            id.to_string(),
            "Student".to_string(),
            Priority::Normal,
            "H1".to_string(),
            "Hall".to_string(),
            weight_kg,
        )
    }

    #[test]
    fn test_cumulative_weight() {
        let parcels = vec![
            parcel("P1", Decimal::new(15, 1)),
            parcel("P2", Decimal::from(2)),
            parcel("P3", Decimal::new(5, 1)),
        ];
        let mut iter = RiderLoadIterator::new(&parcels);
        assert_eq!(iter.len(), 3);

        let first = iter.next().unwrap();
        assert_eq!(first.parcel_id, "P1");
        assert_eq!(first.cumulative_kg, Decimal::new(15, 1));

        let rest: Vec<LoadStep> = iter.by_ref().collect();
        assert_eq!(rest[0].cumulative_kg, Decimal::new(35, 1));
        assert_eq!(rest[1].weight_kg, Decimal::new(5, 1));
        assert_eq!(rest[1].cumulative_kg, Decimal::from(4));

        // 走完後不再產生
        assert_eq!(iter.next(), None);
        assert_eq!(iter.cumulative_kg(), Decimal::from(4));
    }

    #[test]
    fn test_cumulative_saturates() {
        let parcels = vec![parcel("P1", Decimal::MAX), parcel("P2", Decimal::ONE)];
        let steps: Vec<LoadStep> = RiderLoadIterator::new(&parcels).collect();

        assert_eq!(steps[1].cumulative_kg, Decimal::MAX);
    }

    #[test]
    fn test_empty_list() {
        let mut iter = RiderLoadIterator::new(&[]);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }
}

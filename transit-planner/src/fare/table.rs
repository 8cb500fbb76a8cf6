//! Zone fare table.

use std::collections::BTreeMap;

use crate::domain::Money;

/// Errors building a [`ZoneFareTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareTableError {
    /// No fares were supplied
    #[error("zone fare table must not be empty")]
    Empty,

    /// A zone count of zero was supplied
    #[error("zone counts start at 1")]
    ZeroZones,
}

/// Fare by number of zones.
///
/// Lookups past the largest tabulated zone count return the fare for that
/// largest count, so pricing never fails for long trips.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::Money;
/// use transit_planner::fare::ZoneFareTable;
///
/// let table = ZoneFareTable::new([
///     (1, Money::from_cents(250)),
///     (2, Money::from_cents(375)),
///     (3, Money::from_cents(490)),
/// ])
/// .unwrap();
///
/// assert_eq!(table.fare_for(2), Money::from_cents(375));
/// assert_eq!(table.fare_for(7), Money::from_cents(490));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFareTable {
    fares: BTreeMap<u32, Money>,
}

impl ZoneFareTable {
    /// Build a table. Must be non-empty; zone counts must be positive.
    pub fn new(fares: impl IntoIterator<Item = (u32, Money)>) -> Result<Self, FareTableError> {
        let fares: BTreeMap<u32, Money> = fares.into_iter().collect();

        if fares.is_empty() {
            return Err(FareTableError::Empty);
        }
        if fares.contains_key(&0) {
            return Err(FareTableError::ZeroZones);
        }

        Ok(Self { fares })
    }

    /// Fare for a zone count.
    ///
    /// Counts beyond the largest key use the largest key's fare. Counts that
    /// fall in a gap below the largest key also fall back to it.
    pub fn fare_for(&self, zones: u32) -> Money {
        self.fares
            .get(&zones)
            .copied()
            .unwrap_or_else(|| self.max_fare())
    }

    /// Largest tabulated zone count.
    pub fn max_zones(&self) -> u32 {
        self.fares.keys().next_back().copied().unwrap_or(1)
    }

    /// Fare at the largest tabulated zone count.
    pub fn max_fare(&self) -> Money {
        self.fares.values().next_back().copied().unwrap_or_default()
    }

    /// Tabulated entries in ascending zone order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Money)> + '_ {
        self.fares.iter().map(|(z, m)| (*z, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ZoneFareTable {
        ZoneFareTable::new([
            (1, Money::from_cents(250)),
            (2, Money::from_cents(375)),
            (3, Money::from_cents(490)),
        ])
        .unwrap()
    }

    #[test]
    fn exact_lookup() {
        let t = table();
        assert_eq!(t.fare_for(1), Money::from_cents(250));
        assert_eq!(t.fare_for(2), Money::from_cents(375));
        assert_eq!(t.fare_for(3), Money::from_cents(490));
    }

    #[test]
    fn caps_at_maximum() {
        let t = table();
        assert_eq!(t.fare_for(4), Money::from_cents(490));
        assert_eq!(t.fare_for(u32::MAX), Money::from_cents(490));
        assert_eq!(t.max_zones(), 3);
        assert_eq!(t.max_fare(), Money::from_cents(490));
    }

    #[test]
    fn gap_falls_back_to_maximum() {
        let t = ZoneFareTable::new([(1, Money::from_cents(200)), (3, Money::from_cents(500))])
            .unwrap();
        assert_eq!(t.fare_for(2), Money::from_cents(500));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(ZoneFareTable::new([]), Err(FareTableError::Empty));
    }

    #[test]
    fn rejects_zero_zones() {
        let err = ZoneFareTable::new([(0, Money::ZERO), (1, Money::from_cents(100))]).unwrap_err();
        assert_eq!(err, FareTableError::ZeroZones);
        assert_eq!(err.to_string(), "zone counts start at 1");
    }

    #[test]
    fn iter_in_zone_order() {
        let zones: Vec<u32> = table().iter().map(|(z, _)| z).collect();
        assert_eq!(zones, vec![1, 2, 3]);
    }
}

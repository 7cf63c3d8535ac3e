//! The published fare matrix.
//!
//! Fares are flat per locality pair and charged on the SUBE card only.
//! Prices are stored in integer centavos; no floating point anywhere near
//! money. The published table is directed but sparse: where only one
//! direction is printed, the lookup falls back to the reverse pair, which
//! matches how the company quotes return trips.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::Locality;

/// The fare table in force, with its validity date.
#[derive(Debug, Clone)]
pub struct FareMatrix {
    effective_from: NaiveDate,
    prices: HashMap<(Locality, Locality), u32>,
}

impl FareMatrix {
    /// Build a matrix from (from, to, centavos) rows.
    pub fn new(
        effective_from: NaiveDate,
        rows: impl IntoIterator<Item = (Locality, Locality, u32)>,
    ) -> Self {
        Self {
            effective_from,
            prices: rows.into_iter().map(|(a, b, p)| ((a, b), p)).collect(),
        }
    }

    /// The date this table took effect.
    pub fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }

    /// The fare between two localities, in centavos.
    ///
    /// Tries the directed pair first, then the reverse direction. A
    /// directed entry always wins: the table prices a handful of pairs
    /// differently per direction. Returns `None` for a locality paired
    /// with itself or a pair the table does not cover.
    pub fn fare(&self, from: Locality, to: Locality) -> Option<u32> {
        self.prices
            .get(&(from, to))
            .or_else(|| self.prices.get(&(to, from)))
            .copied()
    }

    /// Every priced (from, to, centavos) row, fallback applied, for
    /// rendering the full table.
    pub fn all_fares(&self) -> Vec<(Locality, Locality, u32)> {
        let mut rows = Vec::new();
        for from in Locality::ALL {
            for to in Locality::ALL {
                if from == to {
                    continue;
                }
                if let Some(price) = self.fare(from, to) {
                    rows.push((from, to, price));
                }
            }
        }
        rows
    }
}

/// The fare table effective 2025-01-17.
pub fn current_fares() -> FareMatrix {
    use Locality::*;

    // Fixed date constant; pinned by the tests below
    let effective = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();

    FareMatrix::new(
        effective,
        [
            (SantaFe, Espora, 160_000),
            (SantaFe, Parada10, 160_000),
            (SantaFe, AngelGallardo, 195_100),
            (SantaFe, AltosDeMirta, 224_100),
            (SantaFe, MonteVera, 276_500),
            (Espora, Parada10, 160_000),
            (Espora, AngelGallardo, 160_000),
            (Espora, AltosDeMirta, 160_200),
            (Espora, MonteVera, 212_500),
            (Parada10, AngelGallardo, 160_000),
            (Parada10, AltosDeMirta, 160_000),
            (Parada10, MonteVera, 166_000),
            (AngelGallardo, AltosDeMirta, 160_000),
            (AngelGallardo, MonteVera, 160_000),
            (AltosDeMirta, MonteVera, 160_000),
            (MonteVera, SantaFe, 276_500),
            (MonteVera, Espora, 224_100),
            (MonteVera, Parada10, 195_100),
            (MonteVera, AngelGallardo, 160_000),
            (MonteVera, AltosDeMirta, 160_000),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use Locality::*;

    #[test]
    fn directed_entry_wins_over_reverse() {
        let fares = current_fares();

        // The table prices the two directions of this pair differently
        assert_eq!(fares.fare(MonteVera, Parada10), Some(195_100));
        assert_eq!(fares.fare(Parada10, MonteVera), Some(166_000));
    }

    #[test]
    fn missing_direction_falls_back_to_reverse() {
        let fares = current_fares();

        // Espora → Santa Fe is not printed; the reverse entry is used
        assert_eq!(fares.fare(Espora, SantaFe), Some(160_000));
        assert_eq!(fares.fare(AltosDeMirta, SantaFe), Some(224_100));
    }

    #[test]
    fn same_locality_has_no_fare() {
        let fares = current_fares();
        for locality in Locality::ALL {
            assert_eq!(fares.fare(locality, locality), None);
        }
    }

    #[test]
    fn every_distinct_pair_is_priced() {
        let fares = current_fares();
        for from in Locality::ALL {
            for to in Locality::ALL {
                if from != to {
                    assert!(
                        fares.fare(from, to).is_some(),
                        "no fare for {from} → {to}"
                    );
                }
            }
        }
    }

    #[test]
    fn minimum_fare_applies_broadly() {
        let fares = current_fares();
        // The flat minimum covers every short hop
        assert_eq!(fares.fare(AngelGallardo, AltosDeMirta), Some(160_000));
        assert_eq!(fares.fare(SantaFe, Espora), Some(160_000));
        assert!(fares.all_fares().iter().all(|&(_, _, p)| p >= 160_000));
    }

    #[test]
    fn effective_date_is_pinned() {
        assert_eq!(
            current_fares().effective_from(),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
        );
    }

    #[test]
    fn all_fares_covers_every_ordered_pair() {
        let rows = current_fares().all_fares();
        // 6 localities → 30 ordered pairs
        assert_eq!(rows.len(), 30);
    }

    #[test]
    fn empty_matrix_prices_nothing() {
        let fares = FareMatrix::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), []);
        assert_eq!(fares.fare(SantaFe, MonteVera), None);
        assert!(fares.all_fares().is_empty());
    }
}

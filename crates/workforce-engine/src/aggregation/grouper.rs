//! Grouping: sum populations per (year, category), compute yearly totals,
//! and join back percentage shares.

use tracing::info;

use workforce_core::types::collections::FxHashMap;
use workforce_core::types::{AggregatedPoint, AggregatedSeries, RawRecord};

use super::cleaner::{clean, CleanRecord};

/// Aggregate cleaned records into the per-(year, category) series.
///
/// Within a year, percentages sum to 100 (0 when the yearly total is 0).
/// Empty input yields an empty series, not an error.
pub fn aggregate(records: &[CleanRecord]) -> AggregatedSeries {
    let mut sums: FxHashMap<(i32, String), f64> = FxHashMap::default();
    for r in records {
        *sums.entry((r.year, r.category.clone())).or_insert(0.0) += r.population;
    }

    let mut yearly_totals: FxHashMap<i32, f64> = FxHashMap::default();
    for ((year, _), population) in sums.iter() {
        *yearly_totals.entry(*year).or_insert(0.0) += *population;
    }

    let points: Vec<AggregatedPoint> = sums
        .into_iter()
        .map(|((year, category), population)| {
            let yearly_total = yearly_totals.get(&year).copied().unwrap_or(0.0);
            let percentage = if yearly_total > 0.0 {
                100.0 * population / yearly_total
            } else {
                0.0
            };
            AggregatedPoint {
                year,
                category,
                population,
                yearly_total,
                percentage,
            }
        })
        .collect();

    AggregatedSeries::new(points)
}

/// Full pipeline: clean raw records, then aggregate.
pub fn aggregate_raw(records: &[RawRecord]) -> AggregatedSeries {
    let cleaned = clean(records);
    let series = aggregate(&cleaned);
    info!(
        raw = records.len(),
        cleaned = cleaned.len(),
        points = series.len(),
        version = format_args!("{:016x}", series.version()),
        "aggregated raw records"
    );
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_core::types::RawRecord;

    fn raw(year: &str, category: &str, population: &str) -> RawRecord {
        RawRecord::new(year, category, population)
    }

    #[test]
    fn test_percentages_sum_to_100_per_year() {
        let series = aggregate_raw(&[
            raw("2018", "Petani", "100"),
            raw("2018", "Guru", "300"),
            raw("2019", "Petani", "120"),
        ]);
        for year in series.years() {
            let sum: f64 = series
                .points()
                .iter()
                .filter(|p| p.year == year)
                .map(|p| p.percentage)
                .sum();
            assert!((sum - 100.0).abs() < 1e-9, "year {year}: percentages sum to {sum}");
        }
    }

    #[test]
    fn test_duplicate_labels_collapse_and_sum() {
        let series = aggregate_raw(&[
            raw("2018", " petani ", "100"),
            raw("2018", "PETANI", "50"),
        ]);
        assert_eq!(series.len(), 1);
        let p = &series.points()[0];
        assert_eq!(p.category, "Petani");
        assert_eq!(p.population, 150.0);
        assert_eq!(p.percentage, 100.0);
    }

    #[test]
    fn test_empty_and_unusable_input_yield_empty_series() {
        assert!(aggregate_raw(&[]).is_empty());
        assert!(aggregate_raw(&[raw("not-a-year", "Petani", "10")]).is_empty());
    }

    #[test]
    fn test_zero_yearly_total_has_zero_percentage() {
        let series = aggregate_raw(&[raw("2018", "Petani", "not-a-number")]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].population, 0.0);
        assert_eq!(series.points()[0].percentage, 0.0);
    }

    #[test]
    fn test_aggregation_idempotence() {
        let first = aggregate_raw(&[
            raw("2018", "Petani", "100"),
            raw("2018", "Guru", "300"),
            raw("2019", "Petani", "120"),
            raw("2019", "Guru", "280"),
        ]);

        // Re-aggregate the aggregated series as raw input (identity cleaning).
        let as_raw: Vec<RawRecord> = first
            .points()
            .iter()
            .map(|p| RawRecord::new(p.year.to_string(), p.category.clone(), p.population.to_string()))
            .collect();
        let second = aggregate_raw(&as_raw);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.points().iter().zip(second.points()) {
            assert_eq!(a.year, b.year);
            assert_eq!(a.category, b.category);
            assert!((a.percentage - b.percentage).abs() < 1e-9);
        }
    }
}

//! Raw input records and the aggregated per-(year, category) series.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use super::collections::BTreeMap;
use super::prediction::{CategoryCount, DatasetSummary, YearlyTotal};

/// One unvalidated input row.
///
/// Field names mirror the upstream dataset's Indonesian column headers.
/// Values arrive as free-form strings from CSV or JSON and are coerced
/// during cleaning; anything may be empty or non-numeric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "tahun", default)]
    pub year: String,
    #[serde(rename = "jenis_pekerjaan", default)]
    pub category: String,
    #[serde(rename = "jumlah_penduduk", default)]
    pub population: String,
}

impl RawRecord {
    pub fn new(
        year: impl Into<String>,
        category: impl Into<String>,
        population: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            category: category.into(),
            population: population.into(),
        }
    }
}

/// One row of the aggregated series.
///
/// Serde names preserve the upstream application contract:
/// `tahun` / `jenis_pekerjaan` / `jumlah_penduduk` / `total_population` /
/// `percentage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    #[serde(rename = "tahun")]
    pub year: i32,
    #[serde(rename = "jenis_pekerjaan")]
    pub category: String,
    /// Summed population for this (year, category). Never negative.
    #[serde(rename = "jumlah_penduduk")]
    pub population: f64,
    /// Total population across all categories in this year.
    #[serde(rename = "total_population")]
    pub yearly_total: f64,
    /// `100 * population / yearly_total`; 0 when the yearly total is 0.
    pub percentage: f64,
}

/// The aggregated series: every (year, category) point, sorted by
/// (year, category), plus a content version stamp.
///
/// The version stamp (xxh3 over year/category/population) keys the
/// per-category stats cache, so a data reload can never serve stale
/// statistics.
#[derive(Debug, Clone)]
pub struct AggregatedSeries {
    points: Vec<AggregatedPoint>,
    version: u64,
}

impl AggregatedSeries {
    /// Build a series from aggregated points. Points are sorted by
    /// (year, category) so the version stamp is order-independent.
    pub fn new(mut points: Vec<AggregatedPoint>) -> Self {
        points.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.category.cmp(&b.category)));
        let version = Self::content_hash(&points);
        Self { points, version }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn content_hash(points: &[AggregatedPoint]) -> u64 {
        let mut hasher = Xxh3::new();
        for p in points {
            hasher.update(&p.year.to_le_bytes());
            hasher.update(p.category.as_bytes());
            hasher.update(&[0]);
            hasher.update(&p.population.to_bits().to_le_bytes());
        }
        hasher.digest()
    }

    /// Content version stamp for cache keying.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn points(&self) -> &[AggregatedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self.points.iter().map(|p| p.category.clone()).collect();
        cats.sort();
        cats.dedup();
        cats
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.points.iter().any(|p| p.category == category)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.points.iter().map(|p| p.year).max()
    }

    /// All points for one category, ordered by year ascending.
    pub fn category_points(&self, category: &str) -> Vec<&AggregatedPoint> {
        self.points.iter().filter(|p| p.category == category).collect()
    }

    /// Total population per year, ascending by year.
    pub fn yearly_totals(&self) -> BTreeMap<i32, f64> {
        let mut totals = BTreeMap::new();
        for p in &self.points {
            *totals.entry(p.year).or_insert(0.0) += p.population;
        }
        totals
    }

    /// The `n` largest categories by population in the latest year,
    /// descending. Ties break by label so the order is stable.
    pub fn top_categories(&self, n: usize) -> Vec<String> {
        let Some(latest) = self.latest_year() else {
            return Vec::new();
        };
        let mut latest_points: Vec<&AggregatedPoint> =
            self.points.iter().filter(|p| p.year == latest).collect();
        latest_points.sort_by(|a, b| {
            b.population
                .partial_cmp(&a.population)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        latest_points.into_iter().take(n).map(|p| p.category.clone()).collect()
    }

    /// Dataset summary for the host application's reporting surface.
    pub fn summary(&self, top_n: usize) -> DatasetSummary {
        let latest = self.latest_year();
        let yearly_totals: Vec<YearlyTotal> = self
            .yearly_totals()
            .into_iter()
            .map(|(year, population)| YearlyTotal { year, population })
            .collect();

        let mut top_jobs: Vec<CategoryCount> = match latest {
            Some(year) => self
                .points
                .iter()
                .filter(|p| p.year == year)
                .map(|p| CategoryCount {
                    category: p.category.clone(),
                    population: p.population,
                })
                .collect(),
            None => Vec::new(),
        };
        top_jobs.sort_by(|a, b| {
            b.population
                .partial_cmp(&a.population)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        top_jobs.truncate(top_n);

        DatasetSummary {
            total_records: self.points.len(),
            years: self.years(),
            job_types: self.categories(),
            total_population: self.points.iter().map(|p| p.population).sum(),
            earliest_year: self.years().first().copied(),
            latest_year: latest,
            yearly_totals,
            top_jobs,
        }
    }
}

//! Record cleaning: numeric coercion and category canonicalization.
//!
//! Non-numeric populations coerce to 0, unparseable years drop the record,
//! and category labels are trimmed and title-cased so near-duplicate
//! labels ("petani", " PETANI ") collapse into one.

use tracing::warn;

use workforce_core::types::RawRecord;

/// A validated input row, ready for grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub year: i32,
    pub category: String,
    pub population: f64,
}

/// Clean a batch of raw records.
///
/// Records with an unparseable year are dropped; everything else is
/// coerced. Returns the surviving rows in input order.
pub fn clean(records: &[RawRecord]) -> Vec<CleanRecord> {
    let mut dropped = 0usize;
    let mut negatives = 0usize;

    let cleaned: Vec<CleanRecord> = records
        .iter()
        .filter_map(|r| {
            let Some(year) = coerce_year(&r.year) else {
                dropped += 1;
                return None;
            };
            let mut population = coerce_population(&r.population);
            if population < 0.0 {
                negatives += 1;
                population = 0.0;
            }
            Some(CleanRecord {
                year,
                category: canonical_category(&r.category),
                population,
            })
        })
        .collect();

    if dropped > 0 {
        warn!(dropped, "dropped records with unparseable year");
    }
    if negatives > 0 {
        warn!(negatives, "clamped negative populations to 0");
    }

    cleaned
}

/// Coerce a year string to an integer. Accepts integer and float forms
/// ("2018", "2018.0"); anything else is None.
pub fn coerce_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(y) = trimmed.parse::<i32>() {
        return Some(y);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
            Some(f.trunc() as i32)
        }
        _ => None,
    }
}

/// Coerce a population string to a number, treating non-numeric as 0.
pub fn coerce_population(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Canonical category form: trimmed, internal whitespace collapsed,
/// title-cased per word.
pub fn canonical_category(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_year_integer_and_float_forms() {
        assert_eq!(coerce_year("2018"), Some(2018));
        assert_eq!(coerce_year(" 2018.0 "), Some(2018));
        assert_eq!(coerce_year("abc"), None);
        assert_eq!(coerce_year(""), None);
    }

    #[test]
    fn test_coerce_population_non_numeric_is_zero() {
        assert_eq!(coerce_population("1234.5"), 1234.5);
        assert_eq!(coerce_population("n/a"), 0.0);
        assert_eq!(coerce_population(""), 0.0);
        assert_eq!(coerce_population("inf"), 0.0);
    }

    #[test]
    fn test_canonical_category_collapses_near_duplicates() {
        assert_eq!(canonical_category(" petani "), "Petani");
        assert_eq!(canonical_category("PETANI"), "Petani");
        assert_eq!(canonical_category("pegawai  negeri sipil"), "Pegawai Negeri Sipil");
    }

    #[test]
    fn test_clean_drops_bad_year_keeps_order() {
        let records = vec![
            RawRecord::new("2018", "petani", "100"),
            RawRecord::new("not-a-year", "petani", "50"),
            RawRecord::new("2019", "guru", "-10"),
        ];
        let cleaned = clean(&records);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].year, 2018);
        assert_eq!(cleaned[0].category, "Petani");
        assert_eq!(cleaned[1].year, 2019);
        assert_eq!(cleaned[1].population, 0.0); // negative clamped
    }
}

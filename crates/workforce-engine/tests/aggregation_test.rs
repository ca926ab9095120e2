//! Aggregation pipeline tests: cleaning, grouping, CSV ingestion.

use std::io::Write;

use workforce_engine::aggregation::{aggregate_raw, load_csv};
use workforce_core::types::RawRecord;

fn raw(year: &str, category: &str, population: &str) -> RawRecord {
    RawRecord::new(year, category, population)
}

#[test]
fn pipeline_produces_one_point_per_year_category() {
    let series = aggregate_raw(&[
        raw("2018", "petani", "100"),
        raw("2018", "Petani", "50"),
        raw("2018", "guru", "300"),
        raw("2019", "petani", "160"),
    ]);

    assert_eq!(series.len(), 3);
    let petani_2018 = series
        .points()
        .iter()
        .find(|p| p.year == 2018 && p.category == "Petani")
        .unwrap();
    assert_eq!(petani_2018.population, 150.0);
    assert_eq!(petani_2018.yearly_total, 450.0);
    assert!((petani_2018.percentage - 100.0 * 150.0 / 450.0).abs() < 1e-9);
}

#[test]
fn percentages_sum_to_100_within_each_year() {
    let series = aggregate_raw(&[
        raw("2018", "A", "10"),
        raw("2018", "B", "20"),
        raw("2018", "C", "30"),
        raw("2019", "A", "5"),
        raw("2019", "B", "15"),
    ]);

    for year in series.years() {
        let sum: f64 = series
            .points()
            .iter()
            .filter(|p| p.year == year)
            .map(|p| p.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9, "year {year}: got {sum}");
    }
}

#[test]
fn malformed_rows_are_dropped_not_fatal() {
    let series = aggregate_raw(&[
        raw("garbage", "Petani", "100"),
        raw("", "Petani", "100"),
        raw("2019", "Petani", "not-a-number"),
        raw("2020", "Petani", "121"),
    ]);

    // Bad years dropped; non-numeric population coerced to 0.
    assert_eq!(series.years(), vec![2019, 2020]);
    let p2019 = series.points().iter().find(|p| p.year == 2019).unwrap();
    assert_eq!(p2019.population, 0.0);
}

#[test]
fn load_csv_roundtrip_through_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Tahun,Jenis_Pekerjaan,Jumlah_Penduduk").unwrap();
    writeln!(file, "2018,petani,100").unwrap();
    writeln!(file, "2018,GURU,300").unwrap();
    writeln!(file, "2019.0, petani ,160").unwrap();
    writeln!(file, "bad-year,petani,999").unwrap();
    file.flush().unwrap();

    let records = load_csv(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let series = aggregate_raw(&records);
    assert_eq!(series.years(), vec![2018, 2019]);
    assert_eq!(series.categories(), vec!["Guru", "Petani"]);
    let petani_2019 = series
        .points()
        .iter()
        .find(|p| p.year == 2019 && p.category == "Petani")
        .unwrap();
    assert_eq!(petani_2019.population, 160.0);
}

#[test]
fn empty_input_yields_empty_series() {
    let series = aggregate_raw(&[]);
    assert!(series.is_empty());
    assert!(series.summary(10).top_jobs.is_empty());
}

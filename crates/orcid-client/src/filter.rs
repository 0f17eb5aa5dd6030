//! Recency filtering and deterministic ordering
//!
//! "Now" is an explicit parameter so tests can pin the window; the
//! comparison always happens on the UTC calendar day, never the local
//! one, so a run near the window boundary gives the same answer
//! regardless of execution timezone.

use std::cmp::Reverse;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::identifiers::doi_url;
use crate::record::WorkRecord;

/// Trailing inclusion window, in calendar years.
pub const RECENCY_WINDOW_YEARS: i32 = 4;

/// Start of the recency window: today's UTC date shifted back by the
/// window. Feb 29 with no counterpart falls forward to Mar 1.
fn window_start(today: NaiveDate) -> NaiveDate {
    let year = today.year() - RECENCY_WINDOW_YEARS;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 is always valid"))
}

/// Calendar date a record is assumed to have occurred on. Partially
/// dated records snap to the start of their known period: January when
/// the month is missing, the 1st when the day is. A record without a
/// parseable year cannot be dated at all.
fn derived_date(record: &WorkRecord) -> Option<NaiveDate> {
    let year: i32 = record.year.parse().ok()?;
    let month: u32 = record.month.parse().unwrap_or(1);
    let day: u32 = record.day.parse().unwrap_or(1);

    // Out-of-range month/day tokens snap to the start of the year
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
}

fn sort_year(record: &WorkRecord) -> i32 {
    record.year.parse().unwrap_or(0)
}

/// Apply the recency window, derive resolver URLs, and order the
/// surviving records by descending year. The sort is stable: records
/// from the same year keep their feed order, and duplicate DOIs are
/// deliberately not collapsed.
pub fn select(records: Vec<WorkRecord>, now: DateTime<Utc>) -> Vec<WorkRecord> {
    let cutoff = window_start(now.date_naive());

    let mut works: Vec<WorkRecord> = records
        .into_iter()
        .filter(|record| derived_date(record).is_some_and(|date| date >= cutoff))
        .map(|mut record| {
            if !record.doi.is_empty() {
                record.url = doi_url(&record.doi);
            }
            record
        })
        .collect();

    works.sort_by_key(|record| Reverse(sort_year(record)));
    works
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // Window start: 2020-06-15
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn record(title: &str, year: &str, month: &str, day: &str, doi: &str) -> WorkRecord {
        WorkRecord {
            title: title.to_string(),
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
            doi: doi.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn excludes_records_older_than_the_window() {
        let works = select(
            vec![
                record("Old", "2018", "11", "2", ""),
                record("Recent", "2023", "", "", ""),
            ],
            fixed_now(),
        );
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].title, "Recent");
    }

    #[test]
    fn excludes_records_without_a_year() {
        let works = select(vec![record("Undated", "", "5", "1", "")], fixed_now());
        assert!(works.is_empty());
    }

    #[test]
    fn missing_month_snaps_to_january() {
        // Window starts 2020-06-15: a year-only 2020 record is assumed
        // Jan 1 and falls out; month 7 keeps it in
        let works = select(
            vec![
                record("Year only", "2020", "", "", ""),
                record("July", "2020", "7", "", ""),
            ],
            fixed_now(),
        );
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].title, "July");
    }

    #[test]
    fn boundary_day_is_inclusive() {
        let works = select(vec![record("Edge", "2020", "6", "15", "")], fixed_now());
        assert_eq!(works.len(), 1);
    }

    #[test]
    fn out_of_range_date_tokens_snap_to_year_start() {
        let works = select(vec![record("Bad month", "2023", "13", "40", "")], fixed_now());
        assert_eq!(works.len(), 1);
    }

    #[test]
    fn url_is_derived_from_doi_only() {
        let works = select(
            vec![
                record("With doi", "2023", "", "", "10.1/xyz"),
                record("Without doi", "2023", "", "", ""),
            ],
            fixed_now(),
        );
        assert_eq!(works[0].url, "https://doi.org/10.1/xyz");
        assert_eq!(works[1].url, "");
    }

    #[test]
    fn sorts_by_descending_year_keeping_feed_order_on_ties() {
        let works = select(
            vec![
                record("A", "2021", "", "", ""),
                record("B", "2023", "", "", ""),
                record("C", "2021", "12", "31", ""),
                record("D", "2022", "", "", ""),
            ],
            fixed_now(),
        );
        let titles: Vec<&str> = works.iter().map(|w| w.title.as_str()).collect();
        // No secondary key on month/day: A stays ahead of C
        assert_eq!(titles, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn feb_29_window_start_falls_forward() {
        // 2104 is a leap year but 2100 is not
        let today = NaiveDate::from_ymd_opt(2104, 2, 29).unwrap();
        assert_eq!(window_start(today), NaiveDate::from_ymd_opt(2100, 3, 1).unwrap());
    }
}

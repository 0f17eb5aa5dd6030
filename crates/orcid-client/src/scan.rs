//! Work record extraction from the activities XML
//!
//! Registry schema: https://info.orcid.org/documentation (v3.0)
//!
//! This is a best-effort regional scanner, not an XML parser. Each
//! work group span is located by marker matching, and every field is
//! pulled out of the span by its own locally-scoped pattern. A missing
//! field yields an empty value; a group with no extractable title is
//! dropped. The scanner has no true nesting awareness: a group span
//! runs from a start marker to the *nearest* following end marker,
//! which tolerates the work/group element duplication the feed
//! exhibits without needing balanced-tag tracking.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::WorkRecord;
use crate::text::normalize;

const GROUP_END: &str = "</activities:group>";

lazy_static! {
    static ref GROUP_START: Regex = Regex::new(r"<activities:group[^>]*>").unwrap();

    // DOI-scheme external identifiers only; other schemes (eid,
    // bibcode, ...) never match the 10. prefix
    static ref DOI_VALUE: Regex =
        Regex::new(r"<common:external-id-value>(10\.[^<]+)</common:external-id-value>").unwrap();

    // Title requires the exact work:title > common:title nesting;
    // any other shape yields no title and the group is dropped
    static ref TITLE: Regex = Regex::new(
        r"<work:title[^>]*>\s*<common:title[^>]*>([^<]+)</common:title>\s*</work:title>"
    )
    .unwrap();

    static ref JOURNAL: Regex =
        Regex::new(r"<work:journal-title[^>]*>([^<]+)</work:journal-title>").unwrap();

    static ref YEAR: Regex = Regex::new(r"<common:year[^>]*>(\d{4})</common:year>").unwrap();
    static ref MONTH: Regex = Regex::new(r"<common:month[^>]*>(\d{1,2})</common:month>").unwrap();
    static ref DAY: Regex = Regex::new(r"<common:day[^>]*>(\d{1,2})</common:day>").unwrap();

    static ref CONTRIBUTOR: Regex =
        Regex::new(r"(?s)<work:contributor[^>]*>.*?</work:contributor>").unwrap();
    static ref CREDIT_NAME: Regex =
        Regex::new(r"<common:credit-name[^>]*>([^<]+)</common:credit-name>").unwrap();
}

/// Locate every maximal work group span, left to right, non-overlapping.
///
/// A span ends at the nearest following end marker, and scanning
/// resumes past it. A start marker with no remaining end marker yields
/// no span.
fn group_spans(xml: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(start) = GROUP_START.find_at(xml, cursor) {
        let Some(end) = xml[start.start()..].find(GROUP_END) else {
            break;
        };
        let span_end = start.start() + end + GROUP_END.len();
        spans.push(&xml[start.start()..span_end]);
        cursor = span_end;
    }

    spans
}

fn first_capture(pattern: &Regex, span: &str) -> String {
    pattern
        .captures(span)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extract one candidate record from a group span, or `None` when the
/// title cannot be read. Field extraction is order-insensitive and
/// never fails; absent patterns default to empty strings.
fn scan_group(span: &str) -> Option<WorkRecord> {
    let title = normalize(first_capture(&TITLE, span).trim());
    if title.is_empty() {
        return None;
    }

    let authors: Vec<String> = CONTRIBUTOR
        .find_iter(span)
        .filter_map(|c| {
            CREDIT_NAME
                .captures(c.as_str())
                .and_then(|m| m.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect();

    Some(WorkRecord {
        title,
        journal: normalize(first_capture(&JOURNAL, span).trim()),
        year: first_capture(&YEAR, span),
        month: first_capture(&MONTH, span),
        day: first_capture(&DAY, span),
        doi: first_capture(&DOI_VALUE, span).trim().to_string(),
        authors: authors.join(", "),
        url: String::new(),
    })
}

/// Scan the full response text for work records, one per group span.
pub fn scan_works(xml: &str) -> Vec<WorkRecord> {
    let spans = group_spans(xml);
    let total = spans.len();

    let works: Vec<WorkRecord> = spans.into_iter().filter_map(scan_group).collect();

    if works.len() < total {
        tracing::debug!(
            dropped = total - works.len(),
            kept = works.len(),
            "skipped work groups without an extractable title"
        );
    }

    works
}

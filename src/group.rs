//! Year grouping, in-year ordering, and reverse numbering.
//!
//! The document walks years in descending order and, within a year, entries
//! in descending month order, so the most recent publication comes first.
//! Numbering runs the other way: the first entry emitted gets the highest
//! number and the counter decreases by one per entry down to 1.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::error::{RenderError, fields};
use crate::record::Record;
use crate::utils::month_ordinal;

/// The records of one publication year, in emission order.
#[derive(Debug)]
pub struct YearGroup<'a> {
    /// The year value, an opaque sortable string (typically four digits).
    pub year: String,
    /// Records sorted by month, most recent first. Records with equal or
    /// missing months keep their source-database order.
    pub records: Vec<&'a Record>,
}

/// Bucket records by their `year` field, preserving insertion order per
/// bucket. No dedup and no validation of the year format.
///
/// # Errors
///
/// Returns [`RenderError::MissingYear`] for the first record without a
/// `year` field; supplying one is the caller's precondition.
pub fn year_buckets<'a>(
    records: &'a [Record],
) -> Result<BTreeMap<String, Vec<&'a Record>>, RenderError> {
    let mut buckets: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
    for record in records {
        let year = record.year().ok_or_else(|| RenderError::MissingYear {
            key: record.key().to_string(),
        })?;
        buckets.entry(year).or_default().push(record);
    }
    Ok(buckets)
}

/// The month sort key of a record: 1-12 for resolvable months, 0 when the
/// field is absent (sorting last in a descending order).
///
/// # Errors
///
/// Returns [`RenderError::BadMonth`] when the field is present but neither
/// a known month name nor an integer.
fn month_key(record: &Record) -> Result<i64, RenderError> {
    match record.field(fields::MONTH) {
        None => Ok(0),
        Some(value) => month_ordinal(&value).ok_or_else(|| RenderError::BadMonth {
            key: record.key().to_string(),
            value,
        }),
    }
}

/// Arrange records into emission order: years descending, records within a
/// year by month descending.
pub fn emission_order<'a>(records: &'a [Record]) -> Result<Vec<YearGroup<'a>>, RenderError> {
    let buckets = year_buckets(records)?;
    let mut groups = Vec::with_capacity(buckets.len());
    for (year, bucket) in buckets.into_iter().rev() {
        let keyed: Vec<(i64, &Record)> = bucket
            .into_iter()
            .map(|record| month_key(record).map(|key| (key, record)))
            .collect::<Result<_, _>>()?;
        let records = keyed
            .into_iter()
            // Stable sort: same-month records keep their bucket order.
            .sorted_by(|a, b| b.0.cmp(&a.0))
            .map(|(_, record)| record)
            .collect();
        groups.push(YearGroup { year, records });
    }
    Ok(groups)
}

/// Reverse numbering over an entire document.
///
/// Initialized with the total record count and handed out once per emitted
/// entry, the sequence is strictly decreasing with no gaps, spanning
/// `[1, total]`, so the most recent entry carries the highest number.
pub struct Numbering {
    next: usize,
}

impl Numbering {
    pub fn new(total: usize) -> Self {
        Numbering { next: total }
    }

    /// The number for the next emitted entry.
    pub fn take(&mut self) -> usize {
        let number = self.next;
        self.next = number.saturating_sub(1);
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblatex::Bibliography;
    use pretty_assertions::assert_eq;

    fn records_from(input: &str) -> Vec<Record> {
        let bibliography = Bibliography::parse(input).unwrap();
        Record::resolve_all(&bibliography)
    }

    fn keys<'a>(group: &YearGroup<'a>) -> Vec<&'a str> {
        group.records.iter().map(|r| r.key()).collect()
    }

    #[test]
    fn test_same_year_lands_in_one_bucket() {
        let records = records_from(
            r#"@article{a, title = {A}, year = {2020}}
            @article{b, title = {B}, year = {2021}}
            @article{c, title = {C}, year = {2020}}"#,
        );
        let buckets = year_buckets(&records).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets["2020"].len(), 2);
        assert_eq!(buckets["2020"][0].key(), "a");
        assert_eq!(buckets["2020"][1].key(), "c");
        assert_eq!(buckets["2021"].len(), 1);
    }

    #[test]
    fn test_missing_year_is_fatal() {
        let records = records_from(r#"@article{nodate, title = {T}}"#);
        let error = year_buckets(&records).unwrap_err();
        assert!(matches!(error, RenderError::MissingYear { ref key } if key == "nodate"));
    }

    #[test]
    fn test_years_descend_and_months_descend() {
        let records = records_from(
            r#"@article{jan21, title = {A}, year = {2021}, month = {Jan}}
            @article{old, title = {B}, year = {2019}}
            @article{dec21, title = {C}, year = {2021}, month = {Dec}}
            @article{mar20, title = {D}, year = {2020}, month = {March}}"#,
        );
        let groups = emission_order(&records).unwrap();
        let years: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, vec!["2021", "2020", "2019"]);
        assert_eq!(keys(&groups[0]), vec!["dec21", "jan21"]);
        assert_eq!(keys(&groups[1]), vec!["mar20"]);
    }

    #[test]
    fn test_missing_month_sorts_last() {
        let records = records_from(
            r#"@article{nomonth, title = {A}, year = {2021}}
            @article{feb, title = {B}, year = {2021}, month = {Feb}}"#,
        );
        let groups = emission_order(&records).unwrap();
        assert_eq!(keys(&groups[0]), vec!["feb", "nomonth"]);
    }

    #[test]
    fn test_equal_months_keep_source_order() {
        let records = records_from(
            r#"@article{first, title = {A}, year = {2021}, month = {May}}
            @article{second, title = {B}, year = {2021}, month = {May}}"#,
        );
        let groups = emission_order(&records).unwrap();
        assert_eq!(keys(&groups[0]), vec!["first", "second"]);
    }

    #[test]
    fn test_unrecognized_month_is_fatal() {
        let records = records_from(
            r#"@article{odd, title = {A}, year = {2021}, month = {Brumaire}}"#,
        );
        let error = emission_order(&records).unwrap_err();
        assert!(
            matches!(error, RenderError::BadMonth { ref key, ref value } if key == "odd" && value == "Brumaire")
        );
    }

    #[test]
    fn test_numbering_counts_down_without_gaps() {
        let mut numbering = Numbering::new(3);
        assert_eq!(numbering.take(), 3);
        assert_eq!(numbering.take(), 2);
        assert_eq!(numbering.take(), 1);
    }
}

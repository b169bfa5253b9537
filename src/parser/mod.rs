pub mod links;
pub mod location;
pub mod rows;

use crate::error::FormatError;
use crate::store::{Batch, Record};

/// Column appended by normalization, after the five parsed from the header.
const IS_US_COLUMN: &str = "Is_US_Location";

/// Two-pass pipeline: locate the header against its dash separator row, then
/// fold every following line into normalized records. Pure function of the
/// raw table text; row order is preserved.
pub fn normalize_table(raw: &str) -> Result<Batch, FormatError> {
    let lines: Vec<&str> = raw.lines().collect();

    let separator = rows::find_separator(&lines).ok_or(FormatError::SeparatorMissing)?;
    if separator == 0 {
        return Err(FormatError::HeaderMissing);
    }

    let mut header = rows::split_cells(lines[separator - 1].trim());
    header.push(IS_US_COLUMN.to_string());

    let mut records: Vec<Record> = Vec::new();
    let mut last_company = String::new();
    for line in &lines[separator + 1..] {
        if let Some(record) = rows::parse_row(line, &mut last_company) {
            records.push(record);
        }
    }

    Ok(Batch { header, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
| Company | Role | Location | Application/Link | Date Posted |
| --- | --- | --- | --- | --- |
| **Stripe** | SWE Intern | San Jose, CA | <a href=\"https://simplify.jobs/p/1\">S</a> <a href=\"https://stripe.com/jobs/1?utm_source=Simplify&ref=Simplify\">Apply</a> | Oct 01 |
| ↳ | Data Intern | London, UK | <a href=\"https://stripe.com/jobs/2\">Apply</a> | Oct 02 |
| Shopify | Backend Intern | Toronto, ON, Canada | <a href=\"https://shopify.com/careers/3\">Apply</a> | Oct 03 |";

    #[test]
    fn header_gains_us_column() {
        let batch = normalize_table(TABLE).unwrap();
        assert_eq!(
            batch.header,
            vec![
                "Company",
                "Role",
                "Location",
                "Application/Link",
                "Date Posted",
                "Is_US_Location"
            ]
        );
    }

    #[test]
    fn rows_normalize_in_order() {
        let batch = normalize_table(TABLE).unwrap();
        assert_eq!(batch.records.len(), 3);

        let first = &batch.records[0];
        assert_eq!(first.company, "**Stripe**");
        assert_eq!(first.link, "https://stripe.com/jobs/1");
        assert_eq!(first.is_us_location, "Yes");

        let second = &batch.records[1];
        assert_eq!(second.company, "**Stripe**");
        assert_eq!(second.is_us_location, "No");

        let third = &batch.records[2];
        assert_eq!(third.company, "Shopify");
        assert_eq!(third.is_us_location, "No");
    }

    #[test]
    fn malformed_row_does_not_abort_batch() {
        let table = format!("{}\n| truncated |\n| Figma | PM Intern | NYC | x | Oct 04 |", TABLE);
        let batch = normalize_table(&table).unwrap();
        assert_eq!(batch.records.len(), 4);
        assert_eq!(batch.records[3].company, "Figma");
    }

    #[test]
    fn trailing_artifacts_are_ignored() {
        let table = format!("{}\n\n---\n", TABLE);
        let batch = normalize_table(&table).unwrap();
        assert_eq!(batch.records.len(), 3);
    }

    #[test]
    fn missing_separator_is_fatal() {
        let err = normalize_table("| Company | Role |\n| a | b |").unwrap_err();
        assert!(matches!(err, FormatError::SeparatorMissing));
    }

    #[test]
    fn separator_without_header_is_fatal() {
        let err = normalize_table("| --- | --- | --- | --- | --- |\n| a | b | c | d | e |")
            .unwrap_err();
        assert!(matches!(err, FormatError::HeaderMissing));
    }

    #[test]
    fn readme_fixture() {
        let doc = std::fs::read_to_string("tests/fixtures/readme_excerpt.md").unwrap();
        let raw = crate::fetch::slice_table(&doc).unwrap();
        let batch = normalize_table(&raw).unwrap();

        // Locked and no-sponsorship rows never reach the batch.
        assert_eq!(batch.records.len(), 3);
        assert!(!batch.records.iter().any(|r| r.company.contains("Jane Street")));
        assert!(!batch.records.iter().any(|r| r.company.contains("Shopify")));

        let first = &batch.records[0];
        assert!(first.company.contains("Capital One"));
        assert_eq!(
            first.link,
            "https://capitalone.wd12.myworkdayjobs.com/Capital_One/job/R12345"
        );
        // </br> between the two locations is stripped as a tag.
        assert_eq!(first.location, "Plano, TXMcLean, VA");
        assert_eq!(first.is_us_location, "Yes");

        // ↳ row inherits the full company cell.
        assert_eq!(batch.records[1].company, first.company);
        assert_eq!(batch.records[2].is_us_location, "Yes");
    }

    #[test]
    fn normalization_is_idempotent() {
        let a = normalize_table(TABLE).unwrap();
        let b = normalize_table(TABLE).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.header, b.header);
    }
}

//! CSV posting import
//!
//! Reads ledger postings from CSV for the trial-balance aggregator. Expected
//! columns (header row required, case-insensitive): `code`, `name`, `type`,
//! `debit`, `credit`, and optionally `date` (YYYY-MM-DD). Empty debit/credit
//! cells are treated as zero.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{RigelError, RigelResult};
use crate::models::{AccountKind, Money, Posting};

/// Column indexes resolved from the CSV header row
#[derive(Debug, Clone, Copy)]
struct PostingColumns {
    code: usize,
    name: usize,
    kind: usize,
    debit: usize,
    credit: usize,
    date: Option<usize>,
}

impl PostingColumns {
    fn from_headers(headers: &csv::StringRecord) -> RigelResult<Self> {
        let find = |wanted: &[&str]| {
            headers
                .iter()
                .position(|h| wanted.contains(&h.trim().to_lowercase().as_str()))
        };

        let required = |wanted: &[&str]| {
            find(wanted).ok_or_else(|| {
                RigelError::Import(format!("missing required column '{}'", wanted[0]))
            })
        };

        Ok(Self {
            code: required(&["code", "account_code", "account"])?,
            name: required(&["name", "account_name"])?,
            kind: required(&["type", "kind", "account_type"])?,
            debit: required(&["debit", "dr"])?,
            credit: required(&["credit", "cr"])?,
            date: find(&["date"]),
        })
    }
}

/// Read postings from a CSV file on disk
pub fn read_postings_file(path: &Path) -> RigelResult<Vec<Posting>> {
    let file = std::fs::File::open(path)
        .map_err(|e| RigelError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    read_postings(file)
}

/// Read postings from any CSV source
pub fn read_postings<R: Read>(reader: R) -> RigelResult<Vec<Posting>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = PostingColumns::from_headers(csv_reader.headers()?)?;

    let mut postings = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        // Header is line 1; data starts at line 2
        let line = index + 2;
        let record = record?;
        postings.push(parse_record(&record, columns, line)?);
    }

    Ok(postings)
}

fn parse_record(
    record: &csv::StringRecord,
    columns: PostingColumns,
    line: usize,
) -> RigelResult<Posting> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let account_code = field(columns.code).to_string();
    if account_code.is_empty() {
        return Err(RigelError::import_line(line, "empty account code"));
    }

    let kind_text = field(columns.kind);
    let account_kind = AccountKind::parse(kind_text)
        .ok_or_else(|| RigelError::import_line(line, format!("unknown account type '{}'", kind_text)))?;

    let debit = parse_amount(field(columns.debit), line, "debit")?;
    let credit = parse_amount(field(columns.credit), line, "credit")?;

    let date = match columns.date {
        Some(idx) => {
            let text = field(idx);
            if text.is_empty() {
                None
            } else {
                Some(NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                    RigelError::import_line(line, format!("invalid date '{}'", text))
                })?)
            }
        }
        None => None,
    };

    Ok(Posting {
        account_code,
        account_name: field(columns.name).to_string(),
        account_kind,
        debit,
        credit,
        date,
    })
}

fn parse_amount(text: &str, line: usize, column: &str) -> RigelResult<Money> {
    if text.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(text)
        .map_err(|_| RigelError::import_line(line, format!("invalid {} amount '{}'", column, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_postings() {
        let csv = "\
code,name,type,debit,credit,date
1000,Bank,asset,500.00,,2024-02-01
4000,Sales,revenue,,500.00,2024-02-01
";
        let postings = read_postings(csv.as_bytes()).unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].account_code, "1000");
        assert_eq!(postings[0].account_kind, AccountKind::Asset);
        assert_eq!(postings[0].debit, Money::from_cents(50_000));
        assert_eq!(postings[0].credit, Money::zero());
        assert_eq!(
            postings[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(postings[1].credit, Money::from_cents(50_000));
    }

    #[test]
    fn test_header_aliases_and_no_date() {
        let csv = "\
account_code,account_name,kind,dr,cr
2000,Loan,liability,,1000.00
";
        let postings = read_postings(csv.as_bytes()).unwrap();
        assert_eq!(postings[0].account_kind, AccountKind::Liability);
        assert_eq!(postings[0].date, None);
    }

    #[test]
    fn test_missing_column() {
        let csv = "code,name,debit,credit\n1000,Bank,1.00,\n";
        let err = read_postings(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column 'type'"));
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let csv = "\
code,name,type,debit,credit
1000,Bank,asset,1.00,
4000,Sales,revenue,,oops
";
        let err = read_postings(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_unknown_account_type() {
        let csv = "code,name,type,debit,credit\n1000,Bank,widget,1.00,\n";
        let err = read_postings(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown account type"));
    }
}

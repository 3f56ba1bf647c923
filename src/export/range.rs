// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse an export `--range`.
///
/// Accepted forms:
/// - `all` (no bounds)
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `start:end` with both sides in the same form
///
/// Bounds are inclusive. `None` means no filtering.
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (from, to) = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "'{r}': start and end must have the same format"
                )));
            }

            (period_bounds(start)?.0, period_bounds(end)?.1)
        }
        None => period_bounds(r)?,
    };

    if from > to {
        return Err(AppError::InvalidRange(format!("'{r}': start is after end")));
    }

    Ok(Some((from, to)))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported period '{p}'"));

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, last_day_of_month(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(
            parse_range("2024").unwrap(),
            Some((d("2024-01-01"), d("2024-12-31")))
        );
        assert_eq!(
            parse_range("2024-02").unwrap(),
            Some((d("2024-02-01"), d("2024-02-29")))
        );
        assert_eq!(
            parse_range("2024-03-05").unwrap(),
            Some((d("2024-03-05"), d("2024-03-05")))
        );
    }

    #[test]
    fn ranges_and_all() {
        assert_eq!(parse_range("all").unwrap(), None);
        assert_eq!(
            parse_range("2023-11:2024-01").unwrap(),
            Some((d("2023-11-01"), d("2024-01-31")))
        );
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_range("2024:2024-01").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("2025:2024").is_err());
        assert!(parse_range("yesterday").is_err());
    }
}

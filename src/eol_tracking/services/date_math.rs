use chrono::NaiveDate;

/// DateMath - signed day-counts between calendar dates.
///
/// Both operands are plain calendar dates with no time component, so the
/// difference is always a whole number of days and intra-day clock skew
/// cannot produce off-by-one counts.
pub struct DateMath;

impl DateMath {
    /// Days from `today` until `eol`, signed. Negative means the EOL date
    /// has passed; zero means the EOL date is today.
    pub fn days_until(today: NaiveDate, eol: NaiveDate) -> i64 {
        (eol - today).num_days()
    }
}

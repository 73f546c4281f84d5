// ============================================================
// Layer 4 - Recency Filter
// ============================================================
// A candidate passes when it is a regular file AND its
// modification time, truncated to a local calendar date, equals
// today's local calendar date.
//
// This is a calendar comparison, not a rolling 24-hour window:
// a file touched at 23:59:59 is no longer "today" at 00:00:01.

use chrono::{Local, NaiveDate};

use crate::domain::candidate::CandidateFile;

/// Decides whether a candidate belongs in today's digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecencyFilter {
    /// Pinned date; `None` reads the local clock on every check
    today: Option<NaiveDate>,
}

impl RecencyFilter {
    /// Compare against the local date at the moment of each check.
    pub fn live() -> Self {
        Self { today: None }
    }

    /// Compare against a fixed date.
    #[cfg(test)]
    pub fn on(date: NaiveDate) -> Self {
        Self { today: Some(date) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// True iff the candidate is a regular file modified today.
    pub fn accepts(&self, candidate: &CandidateFile) -> bool {
        if !candidate.is_file {
            return false;
        }
        match candidate.modified {
            Some(modified) => modified.date_naive() == self.today(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accepts_file_modified_today() {
        let filter = RecencyFilter::on(date(2024, 3, 10));
        let file   = CandidateFile::file("a.txt", "/tmp/a.txt", at(2024, 3, 10, 12, 0, 0));
        assert!(filter.accepts(&file));
    }

    #[test]
    fn test_rejects_file_modified_yesterday() {
        let filter = RecencyFilter::on(date(2024, 3, 10));
        let file   = CandidateFile::file("b.bin", "/tmp/b.bin", at(2024, 3, 9, 12, 0, 0));
        assert!(!filter.accepts(&file));
    }

    #[test]
    fn test_midnight_boundary_is_calendar_based() {
        // Two seconds apart, but on different local dates
        let filter = RecencyFilter::on(date(2024, 3, 10));
        let late   = CandidateFile::file("late", "/tmp/late", at(2024, 3, 9, 23, 59, 59));
        let early  = CandidateFile::file("early", "/tmp/early", at(2024, 3, 10, 0, 0, 1));
        assert!(!filter.accepts(&late));
        assert!(filter.accepts(&early));
    }

    #[test]
    fn test_rejects_directories() {
        let filter = RecencyFilter::live();
        let dir    = CandidateFile::other("sub", "/tmp/sub");
        assert!(!filter.accepts(&dir));
    }

    #[test]
    fn test_live_filter_reads_the_clock() {
        // Two days back is never today, whenever the check runs
        let filter = RecencyFilter::live();
        let old    = Local::now() - chrono::Duration::days(2);
        let file   = CandidateFile::file("old.txt", "/tmp/old.txt", old);
        assert!(filter.today.is_none());
        assert!(!filter.accepts(&file));
    }
}

//! Daily seeds - calendar date to seed and storage key
//!
//! The date key is `YYYYMMDD` in the caller's calendar. Hosts pass a local
//! date so that "today" matches what the player sees.

use chrono::{Datelike, Local, NaiveDate};

use crate::types::{DAILY_BEST_KEY_PREFIX, DAILY_SEED_SALT};

/// Zero-padded `YYYYMMDD`
pub fn format_date_key(date: &impl Datelike) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Seed shared by every player on `date`
pub fn create_daily_seed(date: &impl Datelike) -> String {
    format!("{}{}", format_date_key(date), DAILY_SEED_SALT)
}

/// Storage key for the best score on `date`
pub fn daily_best_key(date: &impl Datelike) -> String {
    format!("{}{}", DAILY_BEST_KEY_PREFIX, format_date_key(date))
}

/// Seed for a free-play run started at `started_at` (ms since epoch)
pub fn free_play_seed(started_at: u64) -> String {
    format!("run_{started_at}")
}

/// Today's date in the local time zone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_padding() {
        assert_eq!(format_date_key(&date(2025, 12, 31)), "20251231");
        assert_eq!(format_date_key(&date(2026, 1, 5)), "20260105");
        assert_eq!(format_date_key(&date(987, 3, 9)), "09870309");
    }

    #[test]
    fn test_daily_seed_and_key() {
        let d = date(2025, 12, 31);
        assert_eq!(create_daily_seed(&d), "20251231lumelines_v1");
        assert_eq!(daily_best_key(&d), "dailyBest_20251231");
    }

    #[test]
    fn test_distinct_days_distinct_seeds() {
        let mut seeds: Vec<String> = (0..400)
            .map(|offset| create_daily_seed(&(date(2025, 1, 1) + chrono::Days::new(offset))))
            .collect();
        let before = seeds.len();
        seeds.sort();
        seeds.dedup();
        assert_eq!(seeds.len(), before);
    }

    #[test]
    fn test_free_play_seed() {
        assert_eq!(free_play_seed(1_700_000_000_000), "run_1700000000000");
    }
}

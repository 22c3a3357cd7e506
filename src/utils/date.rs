//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for timestamp handling,
//! optimized for feed generation (RSS `lastBuildDate`/`pubDate` fields).
//!
//! # Features
//!
//! - Zero external dependencies for date handling
//! - Wall-clock `now()` derived from the system clock
//! - RFC 2822 formatting for feeds
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_timestamp(1_718_461_845);
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 14:30:45 GMT");
//! ```

use std::time::SystemTime;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current UTC time from the system clock.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_timestamp(secs)
    }

    /// Convert seconds since the Unix epoch to a civil UTC datetime.
    #[allow(clippy::cast_possible_truncation)] // Components are range-checked by construction
    pub fn from_unix_timestamp(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self::new(
            year,
            month,
            day,
            (rem / 3_600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    #[inline]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

/// Days since 1970-01-01 to civil (year, month, day).
///
/// Euclidean-affine algorithm over 400-year eras; exact for the full u16
/// year range used here.
#[allow(clippy::cast_possible_truncation)] // Era arithmetic keeps values in range
const fn civil_from_days(z: i64) -> (u16, u8, u8) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as u16, m as u8, d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_timestamp_epoch() {
        let dt = DateTimeUtc::from_unix_timestamp(0);
        assert_eq!(dt, DateTimeUtc::new(1970, 1, 1, 0, 0, 0));
        assert_eq!(dt.to_rfc2822(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_from_unix_timestamp_known_date() {
        // 2024-06-15T14:30:45Z
        let dt = DateTimeUtc::from_unix_timestamp(1_718_461_845);
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
        assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 14:30:45 GMT");
    }

    #[test]
    fn test_from_unix_timestamp_leap_day() {
        // 2000-02-29T00:00:00Z (leap year divisible by 400)
        let dt = DateTimeUtc::from_unix_timestamp(951_782_400);
        assert_eq!(dt, DateTimeUtc::new(2000, 2, 29, 0, 0, 0));
        assert_eq!(dt.to_rfc2822(), "Tue, 29 Feb 2000 00:00:00 GMT");
    }

    #[test]
    fn test_to_rfc2822_format() {
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);
        let rfc2822 = dt.to_rfc2822();

        // Check the general format: "Day, DD Mon YYYY HH:MM:SS GMT"
        let parts: Vec<&str> = rfc2822.split(' ').collect();
        assert_eq!(parts.len(), 6);
        assert!(parts[0].ends_with(','));
        assert_eq!(parts[5], "GMT");
    }

    #[test]
    fn test_to_rfc2822_all_months() {
        let months = [
            (1, "Jan"),
            (2, "Feb"),
            (3, "Mar"),
            (4, "Apr"),
            (5, "May"),
            (6, "Jun"),
            (7, "Jul"),
            (8, "Aug"),
            (9, "Sep"),
            (10, "Oct"),
            (11, "Nov"),
            (12, "Dec"),
        ];

        for (month_num, month_name) in months {
            let dt = DateTimeUtc::new(2024, month_num, 15, 12, 0, 0);
            let rfc2822 = dt.to_rfc2822();
            assert!(
                rfc2822.contains(month_name),
                "Month {} should contain {}",
                month_num,
                month_name
            );
        }
    }

    #[test]
    fn test_civil_from_days_month_boundaries() {
        // 2023-12-31 → 2024-01-01 rollover
        let dt = DateTimeUtc::from_unix_timestamp(1_704_067_199);
        assert_eq!(dt, DateTimeUtc::new(2023, 12, 31, 23, 59, 59));

        let dt = DateTimeUtc::from_unix_timestamp(1_704_067_200);
        assert_eq!(dt, DateTimeUtc::new(2024, 1, 1, 0, 0, 0));
    }
}

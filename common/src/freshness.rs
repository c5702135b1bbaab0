use chrono::NaiveDate;
#[cfg(feature = "std")]
use chrono::Utc;

/// How close a product is to its expiration date, relative to a reference day.
/// Variants are ordered by urgency; `evaluate` picks the first that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessStatus {
    Expired,
    ExpiresToday,
    ExpiringSoon,
    Fresh,
}

/// Result of evaluating a product's expiration date against a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub date: NaiveDate,
    /// Whole days until expiration. Negative once the date has passed.
    pub days_remaining: i64,
    pub status: FreshnessStatus,
}

/// Products this many days or fewer from expiring count as expiring soon.
pub const SOON_THRESHOLD_DAYS: i64 = 3;

/// Parse a `DD/MM/YYYY` expiration string into a calendar date.
///
/// Exactly three `/`-separated numeric components are required; anything
/// else, including calendar-invalid combinations like `32/01/2025`, yields
/// `None`. Catalog data arrives with and without zero padding, so `7/3/2025`
/// is accepted.
pub fn parse_expiration(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date in the catalog's wire format, zero-padded `DD/MM/YYYY`.
pub fn format_expiration(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Convert a wire date to the `YYYY-MM-DD` value an HTML date input expects.
pub fn html_date_value(raw: &str) -> Option<String> {
    parse_expiration(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Convert an HTML date input value back to the wire format.
pub fn from_html_date_value(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(format_expiration)
}

/// Evaluate an expiration string against a reference day.
///
/// Total over all inputs: malformed or absent dates yield `None`, never a
/// fault, so a product without usable expiration data simply renders without
/// a freshness badge. `today` is a UTC calendar date; comparisons are pure
/// calendar-date comparisons with no time-of-day component.
pub fn evaluate(raw: &str, today: NaiveDate) -> Option<Freshness> {
    let date = parse_expiration(raw)?;
    let days_remaining = date.signed_duration_since(today).num_days();
    let status = if date < today {
        FreshnessStatus::Expired
    } else if date == today {
        FreshnessStatus::ExpiresToday
    } else if days_remaining <= SOON_THRESHOLD_DAYS {
        FreshnessStatus::ExpiringSoon
    } else {
        FreshnessStatus::Fresh
    };
    Some(Freshness {
        date,
        days_remaining,
        status,
    })
}

impl Freshness {
    pub fn is_expired(&self) -> bool {
        self.status == FreshnessStatus::Expired
    }

    pub fn expires_today(&self) -> bool {
        self.status == FreshnessStatus::ExpiresToday
    }

    pub fn formatted(&self) -> String {
        format_expiration(self.date)
    }

    /// User-facing badge text. Expired and same-day expiration take
    /// precedence over the days-remaining wording.
    pub fn label(&self) -> String {
        match self.status {
            FreshnessStatus::Expired => format!("Caducado el {}", self.formatted()),
            FreshnessStatus::ExpiresToday => "Consumir hoy".to_string(),
            FreshnessStatus::ExpiringSoon => {
                if self.days_remaining == 1 {
                    "Caduca en 1 día".to_string()
                } else {
                    format!("Caduca en {} días", self.days_remaining)
                }
            }
            FreshnessStatus::Fresh => format!("Caduca el {}", self.formatted()),
        }
    }
}

/// Current UTC calendar date. All freshness checks in the app use this as
/// their reference day.
#[cfg(feature = "std")]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_padded_and_unpadded() {
        assert_eq!(parse_expiration("01/02/2025"), Some(date(2025, 2, 1)));
        assert_eq!(parse_expiration("7/3/2025"), Some(date(2025, 3, 7)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_expiration(""), None);
        assert_eq!(parse_expiration("pronto"), None);
        assert_eq!(parse_expiration("12-05-2025"), None);
        assert_eq!(parse_expiration("12/05"), None);
        assert_eq!(parse_expiration("12/05/2025/9"), None);
        assert_eq!(parse_expiration("//2025"), None);
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert_eq!(parse_expiration("32/01/2025"), None);
        assert_eq!(parse_expiration("29/02/2023"), None);
        assert_eq!(parse_expiration("01/13/2025"), None);
        assert_eq!(parse_expiration("0/01/2025"), None);
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert_eq!(parse_expiration("29/02/2024"), Some(date(2024, 2, 29)));
    }

    #[test]
    fn far_future_date_is_fresh() {
        let f = evaluate("31/12/2099", date(2025, 1, 1)).unwrap();
        assert_eq!(f.status, FreshnessStatus::Fresh);
        assert!(!f.is_expired());
        assert!(f.days_remaining > 0);
        assert_eq!(f.formatted(), "31/12/2099");
        assert_eq!(f.label(), "Caduca el 31/12/2099");
    }

    #[test]
    fn past_date_is_expired_with_negative_days() {
        let f = evaluate("01/01/2000", date(2025, 1, 1)).unwrap();
        assert_eq!(f.status, FreshnessStatus::Expired);
        assert!(f.days_remaining < 0);
        assert_eq!(f.label(), "Caducado el 01/01/2000");
    }

    #[test]
    fn same_day_expires_today() {
        let f = evaluate("15/06/2025", date(2025, 6, 15)).unwrap();
        assert_eq!(f.status, FreshnessStatus::ExpiresToday);
        assert_eq!(f.days_remaining, 0);
        assert!(!f.is_expired());
        assert_eq!(f.label(), "Consumir hoy");
    }

    #[test]
    fn test_soon_threshold_boundaries() {
        let today = date(2025, 6, 15);
        assert_eq!(
            evaluate("16/06/2025", today).unwrap().status,
            FreshnessStatus::ExpiringSoon
        );
        assert_eq!(
            evaluate("18/06/2025", today).unwrap().status,
            FreshnessStatus::ExpiringSoon
        );
        assert_eq!(
            evaluate("19/06/2025", today).unwrap().status,
            FreshnessStatus::Fresh
        );
    }

    #[test]
    fn test_soon_labels_pluralize() {
        let today = date(2025, 6, 15);
        assert_eq!(evaluate("16/06/2025", today).unwrap().label(), "Caduca en 1 día");
        assert_eq!(
            evaluate("18/06/2025", today).unwrap().label(),
            "Caduca en 3 días"
        );
    }

    #[test]
    fn expired_takes_precedence_over_soon_wording() {
        // Yesterday is within 3 days in absolute terms but must read as expired.
        let f = evaluate("14/06/2025", date(2025, 6, 15)).unwrap();
        assert_eq!(f.status, FreshnessStatus::Expired);
        assert_eq!(f.label(), "Caducado el 14/06/2025");
    }

    #[test]
    fn malformed_input_yields_no_evaluation() {
        let today = date(2025, 6, 15);
        assert!(evaluate("", today).is_none());
        assert!(evaluate("mañana", today).is_none());
        assert!(evaluate("2025/06/16", today).is_none());
    }

    #[test]
    fn test_days_remaining_across_month_boundary() {
        let f = evaluate("02/07/2025", date(2025, 6, 30)).unwrap();
        assert_eq!(f.days_remaining, 2);
        assert_eq!(f.status, FreshnessStatus::ExpiringSoon);
    }

    #[test]
    fn test_html_date_bridging() {
        assert_eq!(html_date_value("05/09/2025"), Some("2025-09-05".to_string()));
        assert_eq!(html_date_value("no date"), None);
        assert_eq!(
            from_html_date_value("2025-09-05"),
            Some("05/09/2025".to_string())
        );
        assert_eq!(from_html_date_value("05/09/2025"), None);
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_expiration(date(2025, 3, 7)), "07/03/2025");
    }
}

use chrono::{Days, NaiveDateTime, NaiveTime};

/// Places `time` on today's date, or tomorrow's when that moment has
/// already passed. A time equal to `now` stays today.
pub fn resolve_delivery_at(now: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today >= now {
        return today;
    }

    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_later_time_stays_today() {
        let at = resolve_delivery_at(now(), time(18, 0));
        assert_eq!(at.to_string(), "2026-10-16 18:00:00");
    }

    #[test]
    fn test_earlier_time_rolls_to_tomorrow() {
        let at = resolve_delivery_at(now(), time(9, 0));
        assert_eq!(at.to_string(), "2026-10-17 09:00:00");
    }

    #[test]
    fn test_same_time_stays_today() {
        let at = resolve_delivery_at(now(), time(12, 30));
        assert_eq!(at, now());
    }

    #[test]
    fn test_rolls_over_month_end() {
        let now = NaiveDate::from_ymd_opt(2026, 12, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();

        let at = resolve_delivery_at(now, time(7, 15));
        assert_eq!(at.to_string(), "2027-01-01 07:15:00");
    }
}

//! Period arithmetic anchored on a [`Clock`].

use budget_domain::PeriodId;

use crate::time::Clock;

/// Stateless helpers computing the current, previous and labelled periods.
pub struct PeriodCalendar;

impl PeriodCalendar {
    /// Period containing the clock's local calendar date.
    pub fn current_period(clock: &dyn Clock) -> PeriodId {
        PeriodId::from_date(clock.local_today())
    }

    /// Period preceding `of`, or preceding the current period when `of` is `None`.
    pub fn previous_period(of: Option<&PeriodId>, clock: &dyn Clock) -> PeriodId {
        match of {
            Some(period) => period.previous(),
            None => Self::current_period(clock).previous(),
        }
    }

    pub fn display_label(period: &PeriodId) -> String {
        period.display_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    fn clock(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock::at_noon(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn current_period_is_zero_padded() {
        assert_eq!(
            PeriodCalendar::current_period(&clock(2025, 3, 15)).to_string(),
            "2025-03"
        );
        assert_eq!(
            PeriodCalendar::current_period(&clock(2025, 11, 15)).to_string(),
            "2025-11"
        );
    }

    #[test]
    fn previous_defaults_to_current_period() {
        let clock = clock(2025, 11, 15);
        assert_eq!(
            PeriodCalendar::previous_period(None, &clock).to_string(),
            "2025-10"
        );
    }

    #[test]
    fn previous_of_explicit_period_ignores_clock() {
        let clock = clock(2030, 6, 1);
        let january: PeriodId = "2025-01".parse().unwrap();
        assert_eq!(
            PeriodCalendar::previous_period(Some(&january), &clock).to_string(),
            "2024-12"
        );
    }

    #[test]
    fn label_renders_month_and_year() {
        let october: PeriodId = "2025-10".parse().unwrap();
        assert_eq!(PeriodCalendar::display_label(&october), "October 2025");
    }
}

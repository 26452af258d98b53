//! Inner join of the hourly table against the daily table on the date key.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::{DailyRecord, HourlyRecord, JoinedRecord};
use super::weather::WeatherCondition;

/// Joins hourly rows with daily rows sharing the same date.
///
/// Every (hourly, daily) pair with a matching date produces one joined row,
/// so a date with 24 hourly rows fans out to 24 joined rows against its one
/// daily row. Dates present on only one side contribute nothing. Hourly row
/// order is preserved.
pub fn join_hourly_daily(hourly: &[HourlyRecord], daily: &[DailyRecord]) -> Vec<JoinedRecord> {
    let mut by_date: HashMap<NaiveDate, Vec<&DailyRecord>> = HashMap::new();
    for day in daily {
        by_date.entry(day.dteday).or_default().push(day);
    }

    let mut joined = Vec::with_capacity(hourly.len());
    for hour in hourly {
        let Some(days) = by_date.get(&hour.dteday) else {
            continue;
        };
        for day in days {
            joined.push(JoinedRecord {
                dteday: hour.dteday,
                hr: hour.hr,
                weathersit_hour: hour.weathersit,
                weathersit_day: day.weathersit,
                temp_hour: hour.temp,
                temp_day: day.temp,
                windspeed_hour: hour.windspeed,
                windspeed_day: day.windspeed,
                casual_hour: hour.casual,
                casual_day: day.casual,
                registered_hour: hour.registered,
                registered_day: day.registered,
                cnt_hour: hour.cnt,
                cnt_day: day.cnt,
                workingday_hour: hour.workingday,
                workingday_day: day.workingday,
                weather: WeatherCondition::from_code(day.weathersit),
            });
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(date: &str, weathersit: u8, cnt: u64) -> DailyRecord {
        DailyRecord {
            dteday: date.parse().unwrap(),
            weathersit,
            temp: 0.3,
            windspeed: 0.2,
            casual: 100,
            registered: 500,
            cnt,
            workingday: 1,
        }
    }

    fn hourly(date: &str, hr: u8) -> HourlyRecord {
        HourlyRecord {
            dteday: date.parse().unwrap(),
            hr,
            weathersit: 1,
            temp: 0.3,
            windspeed: 0.1,
            casual: 5,
            registered: 20,
            cnt: 25,
            workingday: 1,
        }
    }

    #[test]
    fn test_join_matches_on_date() {
        let hours = vec![hourly("2011-01-01", 0), hourly("2011-01-01", 1)];
        let days = vec![daily("2011-01-01", 2, 985)];

        let joined = join_hourly_daily(&hours, &days);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].hr, 0);
        assert_eq!(joined[1].hr, 1);
        assert_eq!(joined[0].cnt_day, 985);
        assert_eq!(joined[0].cnt_hour, 25);
        assert_eq!(joined[0].weathersit_day, 2);
        assert_eq!(joined[0].weather, Some(WeatherCondition::Mist));
    }

    #[test]
    fn test_unmatched_dates_are_dropped() {
        let hours = vec![hourly("2011-01-01", 0), hourly("2011-01-02", 0)];
        let days = vec![daily("2011-01-02", 1, 801), daily("2011-01-03", 1, 1349)];

        let joined = join_hourly_daily(&hours, &days);

        // 2011-01-01 has no daily row, 2011-01-03 has no hourly row.
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].dteday, "2011-01-02".parse().unwrap());
    }

    #[test]
    fn test_duplicate_daily_dates_multiply() {
        let hours = vec![hourly("2011-01-01", 0)];
        let days = vec![daily("2011-01-01", 1, 985), daily("2011-01-01", 3, 985)];

        let joined = join_hourly_daily(&hours, &days);

        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn test_unknown_weather_code_carries_as_none() {
        let hours = vec![hourly("2011-01-01", 0)];
        let days = vec![daily("2011-01-01", 9, 985)];

        let joined = join_hourly_daily(&hours, &days);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].weather, None);
        assert_eq!(joined[0].weather_label(), "Unknown");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(join_hourly_daily(&[], &[daily("2011-01-01", 1, 1)]).is_empty());
        assert!(join_hourly_daily(&[hourly("2011-01-01", 0)], &[]).is_empty());
    }
}

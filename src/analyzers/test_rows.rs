//! Shared row builders for analyzer tests.

use crate::dataset::{JoinedRecord, WeatherCondition};

/// A joined row with the given date, daily weather code, and daily count.
/// Other fields are fixed: registered_day 500, casual_day 100, working day.
pub fn row_with(date: &str, weathersit_day: u8, cnt_day: u64) -> JoinedRecord {
    JoinedRecord {
        dteday: date.parse().unwrap(),
        hr: 0,
        weathersit_hour: weathersit_day,
        weathersit_day,
        temp_hour: 0.3,
        temp_day: 0.3,
        windspeed_hour: 0.1,
        windspeed_day: 0.2,
        casual_hour: 5,
        casual_day: 100,
        registered_hour: 20,
        registered_day: 500,
        cnt_hour: 25,
        cnt_day,
        workingday_hour: 1,
        workingday_day: 1,
        weather: WeatherCondition::from_code(weathersit_day),
    }
}

/// Same as [`row_with`] but with explicit daily windspeed and working-day flag.
pub fn row_full(
    date: &str,
    weathersit_day: u8,
    cnt_day: u64,
    windspeed_day: f64,
    registered_day: u64,
    casual_day: u64,
    workingday_day: u8,
) -> JoinedRecord {
    let mut row = row_with(date, weathersit_day, cnt_day);
    row.windspeed_day = windspeed_day;
    row.registered_day = registered_day;
    row.casual_day = casual_day;
    row.workingday_day = workingday_day;
    row
}

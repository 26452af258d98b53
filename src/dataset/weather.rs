//! Weather code labeling.

use std::fmt;

/// Weather situation categories for codes 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Clear,
    Mist,
    LightRainfall,
    HeavyRainfall,
}

impl WeatherCondition {
    /// All known conditions in code order, used to zero-fill aggregations.
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Mist,
        WeatherCondition::LightRainfall,
        WeatherCondition::HeavyRainfall,
    ];

    /// Label shown for rows whose weather code is outside 1..=4.
    pub const UNKNOWN_LABEL: &'static str = "Unknown";

    pub fn from_code(code: u8) -> Option<WeatherCondition> {
        match code {
            1 => Some(WeatherCondition::Clear),
            2 => Some(WeatherCondition::Mist),
            3 => Some(WeatherCondition::LightRainfall),
            4 => Some(WeatherCondition::HeavyRainfall),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            WeatherCondition::Clear => 1,
            WeatherCondition::Mist => 2,
            WeatherCondition::LightRainfall => 3,
            WeatherCondition::HeavyRainfall => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::LightRainfall => "Light Rainfall",
            WeatherCondition::HeavyRainfall => "Heavy Rainfall",
        }
    }

    /// Grouping label for an optional condition, mapping `None` to "Unknown".
    pub fn label_of(condition: Option<WeatherCondition>) -> &'static str {
        condition.map_or(Self::UNKNOWN_LABEL, WeatherCondition::label)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Collected form input and the assembled model query

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::TempcastError;
use crate::models::city::City;

/// Meteorological season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons, in the order the model was trained on
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Season name as it appears in the model vocabulary
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

/// Accepted range for the year field
pub const YEAR_RANGE: RangeInclusive<u16> = 2000..=2100;
/// Accepted range for the month field
pub const MONTH_RANGE: RangeInclusive<u8> = 1..=12;
/// Accepted range for the day field
pub const DAY_RANGE: RangeInclusive<u8> = 1..=31;
/// Accepted range for relative humidity in percent
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 0..=100;
/// Accepted range for dew point in Celsius
pub const DEW_POINT_RANGE: RangeInclusive<i8> = -20..=40;
/// Accepted range for atmospheric pressure in hPa
pub const PRESSURE_RANGE: RangeInclusive<u16> = 900..=1100;
/// Accepted range for cloud cover in percent
pub const CLOUD_COVER_RANGE: RangeInclusive<u8> = 0..=100;
/// Accepted range for wind speed in km/h
pub const WIND_SPEED_RANGE: RangeInclusive<u8> = 0..=100;

/// The fields collected from the form, before geo enrichment
///
/// Field ranges mirror the bounds of the corresponding form controls; the
/// server re-checks them because API clients bypass the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInput {
    pub city: City,
    pub season: Season,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Dew point in Celsius
    pub dew_point: i8,
    /// Atmospheric pressure in hPa
    pub pressure: u16,
    /// Cloud cover in percent
    pub cloud_cover: u8,
    /// Wind speed in km/h
    pub wspd: u8,
}

impl Default for WeatherInput {
    fn default() -> Self {
        Self {
            city: City::Islamabad,
            season: Season::Summer,
            year: 2025,
            month: 6,
            day: 12,
            humidity: 50,
            dew_point: 10,
            pressure: 1010,
            cloud_cover: 20,
            wspd: 10,
        }
    }
}

impl WeatherInput {
    /// Check every field against its accepted range
    ///
    /// Day and month are range-checked independently; calendar-invalid
    /// combinations such as day 31 in February are accepted.
    pub fn validate(&self) -> Result<()> {
        check_range("year", self.year, &YEAR_RANGE)?;
        check_range("month", self.month, &MONTH_RANGE)?;
        check_range("day", self.day, &DAY_RANGE)?;
        check_range("humidity", self.humidity, &HUMIDITY_RANGE)?;
        check_range("dew_point", self.dew_point, &DEW_POINT_RANGE)?;
        check_range("pressure", self.pressure, &PRESSURE_RANGE)?;
        check_range("cloud_cover", self.cloud_cover, &CLOUD_COVER_RANGE)?;
        check_range("wspd", self.wspd, &WIND_SPEED_RANGE)?;
        Ok(())
    }
}

fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(TempcastError::validation(format!(
            "{field} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

/// Every column the model consumes, in training order
pub const FEATURE_COLUMNS: [&str; 13] = [
    "city",
    "season",
    "year",
    "month",
    "day",
    "latitude",
    "longitude",
    "elevation",
    "humidity",
    "dew_point",
    "pressure",
    "cloud_cover",
    "wspd",
];

/// The numeric subset of [`FEATURE_COLUMNS`], in the same order
pub const NUMERIC_COLUMNS: [&str; 11] = [
    "year",
    "month",
    "day",
    "latitude",
    "longitude",
    "elevation",
    "humidity",
    "dew_point",
    "pressure",
    "cloud_cover",
    "wspd",
];

/// One fully assembled model query
///
/// Built fresh per prediction request from a validated [`WeatherInput`] plus
/// the static city registry; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub city: City,
    pub season: Season,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// Latitude of the selected city, from the static registry
    pub latitude: f64,
    /// Longitude of the selected city, from the static registry
    pub longitude: f64,
    /// Elevation of the selected city in meters, from the static registry
    pub elevation: f64,
    pub humidity: u8,
    pub dew_point: i8,
    pub pressure: u16,
    pub cloud_cover: u8,
    pub wspd: u8,
}

impl WeatherQuery {
    /// Assemble a query from validated form input and the city registry
    pub fn assemble(input: &WeatherInput) -> Result<Self> {
        input.validate()?;
        let geo = input.city.geo();
        Ok(Self {
            city: input.city,
            season: input.season,
            year: input.year,
            month: input.month,
            day: input.day,
            latitude: geo.latitude,
            longitude: geo.longitude,
            elevation: geo.elevation,
            humidity: input.humidity,
            dew_point: input.dew_point,
            pressure: input.pressure,
            cloud_cover: input.cloud_cover,
            wspd: input.wspd,
        })
    }

    /// The numeric feature values, in [`NUMERIC_COLUMNS`] order
    #[must_use]
    pub fn numeric_features(&self) -> [f64; 11] {
        [
            f64::from(self.year),
            f64::from(self.month),
            f64::from(self.day),
            self.latitude,
            self.longitude,
            self.elevation,
            f64::from(self.humidity),
            f64::from(self.dew_point),
            f64::from(self.pressure),
            f64::from(self.cloud_cover),
            f64::from(self.wspd),
        ]
    }
}

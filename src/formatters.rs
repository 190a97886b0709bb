use crate::models::{CurrentConditions, DayRecord};

/// Relative label for a day offset, e.g. `tomorrow (2024-05-19)`
pub fn day_label(offset: i64, day: &DayRecord) -> String {
    let date = day.date.format("%Y-%m-%d");
    match offset {
        0 => format!("today ({date})"),
        1 => format!("tomorrow ({date})"),
        n => format!("in {n} days ({date})"),
    }
}

/// Formats one forecast day into a single sentence
pub fn format_report(city: &str, offset: i64, day: &DayRecord, description: &str) -> String {
    format!(
        "Forecast for {} {}: {}, high of {:.1}\u{00b0}C, low of {:.1}\u{00b0}C with winds up to {:.1} km/h.",
        city,
        day_label(offset, day),
        description,
        day.temperature_max_c,
        day.temperature_min_c,
        day.wind_speed_max_kmh
    )
}

/// Formats current conditions into a single sentence
pub fn format_current_report(
    city: &str,
    current: &CurrentConditions,
    description: &str,
) -> String {
    format!(
        "Current weather in {}: {}, {:.1}\u{00b0}C with a wind speed of {:.1} km/h.",
        city, description, current.temperature_c, current.wind_speed_kmh
    )
}

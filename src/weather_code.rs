use std::fmt;

/// WMO weather interpretation codes reported by Open-Meteo
///
/// See <https://open-meteo.com/en/docs> for the code reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCode {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    DepositingRimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    LightFreezingDrizzle,
    DenseFreezingDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    LightFreezingRain,
    HeavyFreezingRain,
    SlightSnowfall,
    ModerateSnowfall,
    HeavySnowfall,
    SnowGrains,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    SlightSnowShowers,
    HeavySnowShowers,
    Thunderstorm,
    ThunderstormWithSlightHail,
    ThunderstormWithHeavyHail,
    /// Any code outside the table above
    Unknown(i64),
}

impl WeatherCode {
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            56 => Self::LightFreezingDrizzle,
            57 => Self::DenseFreezingDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            66 => Self::LightFreezingRain,
            67 => Self::HeavyFreezingRain,
            71 => Self::SlightSnowfall,
            73 => Self::ModerateSnowfall,
            75 => Self::HeavySnowfall,
            77 => Self::SnowGrains,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            85 => Self::SlightSnowShowers,
            86 => Self::HeavySnowShowers,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormWithSlightHail,
            99 => Self::ThunderstormWithHeavyHail,
            other => Self::Unknown(other),
        }
    }

    /// Short phrase for known codes, `None` for [`WeatherCode::Unknown`]
    pub const fn phrase(&self) -> Option<&'static str> {
        let phrase = match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::LightFreezingDrizzle => "Light freezing drizzle",
            Self::DenseFreezingDrizzle => "Dense freezing drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::LightFreezingRain => "Light freezing rain",
            Self::HeavyFreezingRain => "Heavy freezing rain",
            Self::SlightSnowfall => "Slight snowfall",
            Self::ModerateSnowfall => "Moderate snowfall",
            Self::HeavySnowfall => "Heavy snowfall",
            Self::SnowGrains => "Snow grains",
            Self::SlightRainShowers => "Slight rain showers",
            Self::ModerateRainShowers => "Moderate rain showers",
            Self::ViolentRainShowers => "Violent rain showers",
            Self::SlightSnowShowers => "Slight snow showers",
            Self::HeavySnowShowers => "Heavy snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithSlightHail => "Thunderstorm with slight hail",
            Self::ThunderstormWithHeavyHail => "Thunderstorm with heavy hail",
            Self::Unknown(_) => return None,
        };
        Some(phrase)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.phrase(), self) {
            (Some(phrase), _) => f.write_str(phrase),
            (None, Self::Unknown(code)) => write!(f, "Unknown weather (code {code})"),
            (None, _) => f.write_str("Unknown weather"),
        }
    }
}

/// Converts a WMO weather code to a human-readable description.
///
/// Never fails: codes outside the table describe as `Unknown weather (code N)`.
pub fn describe_code(code: i64) -> String {
    WeatherCode::from_code(code).to_string()
}

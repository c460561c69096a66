//! Description-to-glyph lookup for display.

/// Glyph shown when a description is not in the known set.
pub const FALLBACK_ICON: &str = "🌈";

/// Map a weather description to a display glyph.
///
/// Case-insensitive over the fixed set of descriptions the backend emits;
/// anything unrecognized gets [`FALLBACK_ICON`]. Pure function, no state.
pub fn weather_icon(description: &str) -> &'static str {
    match description.to_lowercase().as_str() {
        "sunny" => "☀️",
        "cloudy" => "☁️",
        "rainy" => "🌧️",
        "partly cloudy" | "scattered clouds" => "⛅",
        _ => FALLBACK_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptions_map_to_glyphs() {
        assert_eq!(weather_icon("sunny"), "☀️");
        assert_eq!(weather_icon("cloudy"), "☁️");
        assert_eq!(weather_icon("rainy"), "🌧️");
        assert_eq!(weather_icon("partly cloudy"), "⛅");
        assert_eq!(weather_icon("scattered clouds"), "⛅");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            weather_icon("Scattered Clouds"),
            weather_icon("scattered clouds")
        );
        assert_eq!(weather_icon("SUNNY"), weather_icon("sunny"));
    }

    #[test]
    fn unknown_descriptions_get_the_fallback() {
        assert_eq!(weather_icon("volcanic ash"), FALLBACK_ICON);
        assert_eq!(weather_icon(""), FALLBACK_ICON);
    }
}

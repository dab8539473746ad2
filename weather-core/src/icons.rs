//! Emoji for provider icon codes and moon phases.

/// Shown for `none` and for any code the table does not know.
pub const FALLBACK_EMOJI: &str = "🏴‍☠️";

const MOON_PHASES: [&str; 8] = [
    "🌑", // new moon
    "🌒", // waxing crescent
    "🌓", // first quarter
    "🌔", // waxing gibbous
    "🌕", // full moon
    "🌖", // waning gibbous
    "🌗", // last quarter
    "🌘", // waning crescent
];

/// Map a provider icon code to an emoji. `clear-night` shows the moon for
/// `moon_phase`.
pub fn icon_emoji(code: &str, moon_phase: f64) -> &'static str {
    match code {
        "clear-day" => "☀️",
        "clear-night" => moon_phase_emoji(moon_phase),
        "rain" => "🌧️",
        "snow" | "sleet" | "hail" => "🌨️",
        "wind" => "🌬️",
        "fog" => "🌫️",
        "cloudy" | "partly-cloudy-night" => "☁️",
        "partly-cloudy-day" => "🌤️",
        "thunderstorm" => "⛈️",
        _ => FALLBACK_EMOJI,
    }
}

/// Bucket a lunation fraction into one of eight phases of width 0.125.
///
/// Input is clamped into `[0, 1)` first, so out-of-range provider values land
/// in the nearest end bucket. NaN falls through to the last one.
pub fn moon_phase_emoji(phase: f64) -> &'static str {
    let phase = phase.clamp(0.0, 1.0);
    MOON_PHASES
        .iter()
        .zip(1u32..)
        .find(|(_, upper)| phase < f64::from(*upper) * 0.125)
        .map(|(emoji, _)| *emoji)
        .unwrap_or(MOON_PHASES[MOON_PHASES.len() - 1])
}

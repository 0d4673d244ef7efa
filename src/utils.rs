//! Utility helpers for Soundstage

/// Characters stripped from search input before filtering: smart quotes
/// plus angle brackets, so markup never reaches the matcher.
const UNWANTED_CHARACTERS: [char; 5] = ['\u{201c}', '\u{201d}', '"', '<', '>'];

/// Clean a user-typed search query.
pub fn clean_input(query: &str) -> String {
    query
        .chars()
        .filter(|c| !UNWANTED_CHARACTERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Format seconds as `m:ss`, e.g. 266 -> "4:26". Non-finite and negative
/// inputs render as "0:00".
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(266.0), "4:26");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-5.0), "0:00");
    }

    #[test]
    fn clean_input_strips_markup_and_quotes() {
        assert_eq!(clean_input("  lo-fi beats "), "lo-fi beats");
        assert_eq!(clean_input("<script>night</script>"), "scriptnight/script");
        assert_eq!(clean_input("\u{201c}drive\u{201d}"), "drive");
    }
}

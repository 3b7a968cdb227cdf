//! Property-based tests for log_druid using proptest

use log_druid::formatter::COLOR_GRAY;
use log_druid::pattern::center;
use log_druid::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Names and numeric values both parse back to the same level
    #[test]
    fn test_log_level_parse_roundtrip(level in any_level()) {
        prop_assert_eq!(level.to_str().parse::<LogLevel>(), Ok(level));
        prop_assert_eq!(level.value().to_string().parse::<LogLevel>(), Ok(level));
    }

    /// Ordering agrees with numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.value() <= level2.value());
        prop_assert_eq!(level1 < level2, level1.value() < level2.value());
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Rendered text is color + text + reset for any mapped level
    #[test]
    fn test_render_wraps_text_verbatim(level in any_level(), text in ".*") {
        let formatter = ColorFormatter::new(LogFormat::default());
        let rendered = formatter.render(level, &text);
        let color = ColorMap::default().get(level).map(str::to_string).unwrap();

        prop_assert!(rendered.starts_with(&color));
        prop_assert!(rendered.ends_with(formatter.reset_code()));
        prop_assert_eq!(&rendered[color.len()..rendered.len() - formatter.reset_code().len()], text.as_str());
    }

    /// Levels left out of a replacement map use the fallback color
    #[test]
    fn test_unmapped_levels_fall_back(mapped in any_level(), probe in any_level()) {
        let formatter = ColorFormatter::new(LogFormat::default());
        formatter.set_color_map(ColorMap::empty().with(mapped, "<custom>"));

        let rendered = formatter.render(probe, "x");
        if probe == mapped {
            prop_assert_eq!(rendered, format!("<custom>x{}", COLOR_GRAY));
        } else {
            prop_assert_eq!(rendered, format!("{}x{}", COLOR_GRAY, COLOR_GRAY));
        }
    }
}

// ============================================================================
// Pattern Tests
// ============================================================================

proptest! {
    /// The separator never exceeds the requested length and only uses the style
    #[test]
    fn test_pattern_length_bound(len in 0usize..500, style in prop_oneof![Just('-'), Just('='), Just('*'), Just('═')]) {
        let pattern = PatternTemplate::new(style, len);

        prop_assert!(pattern.len() <= len);
        prop_assert!(pattern.line().chars().all(|c| c == style));
        if len >= 2 {
            prop_assert_eq!(pattern.len(), 2 * (len / 2) - 1);
        }
        prop_assert_eq!(pattern, PatternTemplate::new(style, len));
    }

    /// Centering fills exactly to the width and keeps the text intact
    #[test]
    fn test_center_fills_width(text in "[a-z ]{1,30}", width in 0usize..80) {
        let centered = center(&text, width, '-');
        let text_len = text.chars().count();

        prop_assert!(centered.contains(text.as_str()));
        prop_assert_eq!(centered.chars().count(), width.max(text_len));

        let left = centered.chars().take_while(|&c| c == '-').count();
        let right = centered.chars().rev().take_while(|&c| c == '-').count();
        prop_assert!(left.abs_diff(right) <= 1);
    }
}

// ============================================================================
// LogFormat Tests
// ============================================================================

proptest! {
    /// Messages pass through the template untouched, placeholders included
    #[test]
    fn test_message_never_rescanned(message in ".*") {
        let format = LogFormat::new("[%(levelname)s] %(message)s");
        let entry = LogEntry::new(LogLevel::Info, "prop", message.clone());

        prop_assert_eq!(format.render(&entry), format!("[INFO] {}", message));
    }
}

//! Chat transcript helper functions
//!
//! Sender naming, line splitting and locale-aware timestamp formatting for
//! [`ChatEntry`](crate::ui::presentation::components::ChatEntry).

use chrono::{DateTime, Locale, TimeZone, Utc};
use gmvoice_domain::MessageOrigin;
use thiserror::Error;

pub const GAME_MASTER_NAME: &str = "Game Master";
pub const DEFAULT_PLAYER_NAME: &str = "You";

/// Marker placed before the visible time of an edited message
pub const EDITED_MARKER: &str = "*";

/// Errors raised while formatting a chat timestamp
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatTimeError {
    /// Milliseconds outside the range chrono can represent
    #[error("Timestamp out of range: {0} ms")]
    OutOfRange(i64),
}

/// Sender label for a transcript line
///
/// Remote lines are always the game master, whatever name was supplied.
///
/// # Examples
/// ```
/// use gmvoice_domain::MessageOrigin;
/// use gmvoice_player::ui::presentation::helpers::chat_helpers::display_name;
///
/// assert_eq!(display_name(MessageOrigin::Remote, Some("Anything")), "Game Master");
/// assert_eq!(display_name(MessageOrigin::Local, Some("Rook")), "Rook");
/// assert_eq!(display_name(MessageOrigin::Local, None), "You");
/// ```
pub fn display_name(origin: MessageOrigin, name: Option<&str>) -> &str {
    match origin {
        MessageOrigin::Remote => GAME_MASTER_NAME,
        MessageOrigin::Local => name
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PLAYER_NAME),
    }
}

/// Split a message body on embedded newlines
///
/// No other transformation happens; an empty body is a single empty line.
pub fn message_lines(message: &str) -> Vec<&str> {
    message.split('\n').collect()
}

/// Visible time text, prefixed with [`EDITED_MARKER`] for edited messages
pub fn visible_time(has_been_edited: bool, short_time: &str) -> String {
    if has_been_edited {
        format!("{EDITED_MARKER}{short_time}")
    } else {
        short_time.to_string()
    }
}

/// Region assumed for a bare language tag whose region code differs from the
/// language code
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("ca", "ca_ES"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("et", "et_EE"),
    ("fa", "fa_IR"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("sl", "sl_SI"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

/// Resolve a BCP-47 tag ("en-US", "de", "ja") to a chrono locale
///
/// Tries `language_REGION` from the tag, then for a bare language its usual
/// region (`ja` → `ja_JP`) or the doubled code (`de` → `de_DE`), then falls
/// back to POSIX.
pub fn resolve_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    let mut parts = normalized.split('_').filter(|p| !p.is_empty());
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);

    let candidates = match region {
        Some(region) => vec![format!("{language}_{region}")],
        None if language.is_empty() => Vec::new(),
        None => {
            let default_region = DEFAULT_REGIONS
                .iter()
                .find(|(lang, _)| *lang == language)
                .map(|(_, locale)| locale.to_string());
            default_region
                .into_iter()
                .chain(std::iter::once(format!(
                    "{language}_{}",
                    language.to_ascii_uppercase()
                )))
                .collect()
        }
    };

    for candidate in &candidates {
        if let Ok(locale) = Locale::try_from(candidate.as_str()) {
            return locale;
        }
    }

    tracing::debug!(tag, "Unknown locale tag, using POSIX time format");
    Locale::POSIX
}

/// Formatted times for one transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTimestamps {
    /// Long form with seconds and zone, used as the tooltip
    pub full: String,
    /// Hours and minutes, shown next to the sender
    pub short: String,
}

/// Format an epoch-millisecond timestamp in `tz` for the given locale tag
///
/// Locales without AM/PM markers get a 24-hour short time.
pub fn chat_timestamps<Tz>(
    timestamp_ms: i64,
    locale_tag: &str,
    tz: &Tz,
) -> Result<ChatTimestamps, ChatTimeError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc: DateTime<Utc> = Utc
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .ok_or(ChatTimeError::OutOfRange(timestamp_ms))?;
    let local = utc.with_timezone(tz);
    let locale = resolve_locale(locale_tag);

    let full = local.format_localized("%X %Z", locale).to_string();
    let uses_meridiem = !local.format_localized("%p", locale).to_string().is_empty();
    let short_format = if uses_meridiem { "%-I:%M %p" } else { "%H:%M" };
    let short = local.format_localized(short_format, locale).to_string();

    Ok(ChatTimestamps { full, short })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    mod display_name_tests {
        use super::*;

        #[test]
        fn remote_is_always_game_master() {
            assert_eq!(display_name(MessageOrigin::Remote, Some("Anything")), GAME_MASTER_NAME);
            assert_eq!(display_name(MessageOrigin::Remote, None), GAME_MASTER_NAME);
        }

        #[test]
        fn local_uses_supplied_name() {
            assert_eq!(display_name(MessageOrigin::Local, Some("Rook")), "Rook");
        }

        #[test]
        fn local_without_name_is_you() {
            assert_eq!(display_name(MessageOrigin::Local, None), DEFAULT_PLAYER_NAME);
            assert_eq!(display_name(MessageOrigin::Local, Some("")), DEFAULT_PLAYER_NAME);
        }
    }

    mod message_lines_tests {
        use super::*;

        #[test]
        fn splits_on_newlines() {
            assert_eq!(
                message_lines("The door creaks.\nA cold wind blows."),
                vec!["The door creaks.", "A cold wind blows."]
            );
        }

        #[test]
        fn keeps_empty_lines() {
            assert_eq!(message_lines("a\n\nb"), vec!["a", "", "b"]);
            assert_eq!(message_lines("end\n"), vec!["end", ""]);
        }

        #[test]
        fn single_line_is_untouched() {
            assert_eq!(message_lines("**not markdown**"), vec!["**not markdown**"]);
            assert_eq!(message_lines(""), vec![""]);
        }
    }

    mod visible_time_tests {
        use super::*;

        #[test]
        fn edited_gets_marker() {
            assert_eq!(visible_time(true, "9:05 PM"), "*9:05 PM");
        }

        #[test]
        fn unedited_is_plain() {
            assert_eq!(visible_time(false, "9:05 PM"), "9:05 PM");
        }
    }

    mod timestamp_tests {
        use super::*;

        // 2023-11-14T22:13:20Z
        const EVENING: i64 = 1_700_000_000_000;

        #[test]
        fn us_locale_uses_twelve_hour_short_time() {
            let times = chat_timestamps(EVENING, "en-US", &Utc).unwrap();
            assert_eq!(times.short, "10:13 PM");
            assert!(times.full.ends_with("UTC"));
        }

        #[test]
        fn german_locale_uses_twenty_four_hour_short_time() {
            let times = chat_timestamps(EVENING, "de-DE", &Utc).unwrap();
            assert_eq!(times.short, "22:13");
        }

        #[test]
        fn offset_shifts_the_clock() {
            let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
            let times = chat_timestamps(EVENING, "de-DE", &plus_two).unwrap();
            assert_eq!(times.short, "00:13");
            assert!(times.full.ends_with("+02:00"));
        }

        #[test]
        fn out_of_range_timestamp_is_an_error() {
            assert_eq!(
                chat_timestamps(i64::MAX, "en-US", &Utc),
                Err(ChatTimeError::OutOfRange(i64::MAX))
            );
        }

        #[test]
        fn language_only_tag_resolves() {
            assert_eq!(resolve_locale("de"), Locale::de_DE);
            assert_eq!(resolve_locale("en-US"), Locale::en_US);
        }

        #[test]
        fn bare_language_uses_its_usual_region() {
            assert_eq!(resolve_locale("ja"), Locale::ja_JP);
            assert_eq!(resolve_locale("en"), Locale::en_US);
            assert_eq!(resolve_locale("zh"), Locale::zh_CN);
        }

        #[test]
        fn tag_case_is_normalized() {
            assert_eq!(resolve_locale("en-us"), Locale::en_US);
            assert_eq!(resolve_locale("DE_de"), Locale::de_DE);
        }

        #[test]
        fn unknown_tag_falls_back_to_posix() {
            assert_eq!(resolve_locale("xx-YY"), Locale::POSIX);
            assert_eq!(resolve_locale(""), Locale::POSIX);
        }
    }
}

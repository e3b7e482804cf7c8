//! The fixed mood vocabulary attached to diary entries.
//!
//! Every entry carries exactly one of eight moods. Each mood has a stable
//! display label (an emoji-prefixed short phrase) which is also the value
//! persisted in the database, so the stored text round-trips through
//! [`Mood::label`] and [`Mood::from_label`].

use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Error returned when a stored mood label is not one of the eight known values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized mood label: '{0}'")]
pub struct UnknownMood(pub String);

/// One of the eight emotional-state labels an entry can carry.
///
/// On the command line moods are selected by their English names
/// (`--mood happy`); in storage and display the original emoji labels are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mood {
    /// 😊 开心
    Happy,
    /// 😄 兴奋
    Excited,
    /// 😌 平静
    Calm,
    /// 😢 难过
    Sad,
    /// 😠 生气
    Angry,
    /// 😔 忧郁
    Gloomy,
    /// 😴 疲惫
    Tired,
    /// 🤔 思考
    Pensive,
}

impl Mood {
    /// All eight moods, in the order the original selector offered them.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Calm,
        Mood::Sad,
        Mood::Angry,
        Mood::Gloomy,
        Mood::Tired,
        Mood::Pensive,
    ];

    /// The display label, which is also the value stored in the database.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 开心",
            Mood::Excited => "😄 兴奋",
            Mood::Calm => "😌 平静",
            Mood::Sad => "😢 难过",
            Mood::Angry => "😠 生气",
            Mood::Gloomy => "😔 忧郁",
            Mood::Tired => "😴 疲惫",
            Mood::Pensive => "🤔 思考",
        }
    }

    /// Parses a stored label back into a mood.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMood`] if the label is not one of the eight known
    /// values. The store uses this to reject rows whose mood column was
    /// written by something other than daybook.
    pub fn from_label(label: &str) -> Result<Mood, UnknownMood> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == label)
            .ok_or_else(|| UnknownMood(label.to_string()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_label(mood.label()), Ok(mood));
        }
    }

    #[test]
    fn test_all_has_eight_distinct_labels() {
        let labels: std::collections::HashSet<_> =
            Mood::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn test_from_label_unknown() {
        let err = Mood::from_label("🙃 upside down").unwrap_err();
        assert_eq!(err, UnknownMood("🙃 upside down".to_string()));
        assert!(err.to_string().contains("unrecognized mood label"));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", Mood::Happy), "😊 开心");
        assert_eq!(format!("{}", Mood::Pensive), "🤔 思考");
    }

    #[test]
    fn test_cli_value_names() {
        // ValueEnum derives kebab-case English names for the CLI surface.
        let happy = Mood::from_str("happy", true).unwrap();
        assert_eq!(happy, Mood::Happy);
        let gloomy = Mood::from_str("gloomy", true).unwrap();
        assert_eq!(gloomy, Mood::Gloomy);
        assert!(Mood::from_str("ecstatic", true).is_err());
    }
}

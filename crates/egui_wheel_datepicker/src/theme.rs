use egui::{Color32, Stroke, Visuals};

/// Visual preset of a [`crate::DatePicker`].
///
/// Parsing from a name never fails: anything that is not one of the five
/// known names becomes [`Theme::Default`].
///
/// ```
/// use egui_wheel_datepicker::Theme;
///
/// assert_eq!(Theme::from_name("android-dark"), Theme::AndroidDark);
/// assert_eq!(Theme::from_name("purple"), Theme::Default);
/// ```
///
/// With the `serde` feature a theme is stored as its name, with the same fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "String", into = "String")
)]
pub enum Theme {
    Default,
    Dark,
    #[default]
    Ios,
    Android,
    AndroidDark,
}

impl Theme {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Dark,
        Self::Ios,
        Self::Android,
        Self::AndroidDark,
    ];

    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == name)
            .unwrap_or(Self::Default)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Ios => "ios",
            Self::Android => "android",
            Self::AndroidDark => "android-dark",
        }
    }

    /// The root class name, e.g. `"datepicker ios"`.
    pub fn class_name(self) -> String {
        format!("datepicker {}", self.name())
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::AndroidDark)
    }

    /// Colour of the selected row and of the confirm button.
    pub fn accent(self) -> Color32 {
        match self {
            Self::Default => Color32::from_rgb(0x33, 0x33, 0x33),
            Self::Dark => Color32::from_rgb(0xff, 0xff, 0xff),
            Self::Ios => Color32::from_rgb(0x00, 0x7a, 0xff),
            Self::Android | Self::AndroidDark => Color32::from_rgb(0x31, 0xb6, 0xe7),
        }
    }

    /// Full egui visuals for this preset.
    pub fn visuals(self) -> Visuals {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        let accent = self.accent();
        visuals.selection.bg_fill = accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, accent);
        visuals.hyperlink_color = accent;

        if self == Self::Dark {
            visuals.panel_fill = Color32::from_gray(0x28);
            visuals.window_fill = Color32::from_gray(0x28);
        }
        visuals
    }
}

impl From<&str> for Theme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.name().to_owned()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }
    }

    #[test]
    fn unknown_falls_back_to_default() {
        for name in ["purple", "", "IOS", "android dark"] {
            assert_eq!(Theme::from(name), Theme::Default);
        }
        let class_name = Theme::from_name("purple").class_name();
        assert!(class_name.contains("default"));
        assert!(!class_name.contains("purple"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_goes_through_names() {
        use serde::Deserialize as _;
        use serde::de::{IntoDeserializer as _, value::Error};

        let parse = |name: &str| -> Result<Theme, Error> {
            Theme::deserialize(name.into_deserializer())
        };
        assert_eq!(parse("android-dark"), Ok(Theme::AndroidDark));
        assert_eq!(parse("purple"), Ok(Theme::Default));
        assert_eq!(String::from(Theme::AndroidDark), "android-dark");
    }

    #[test]
    fn dark_presets_use_dark_visuals() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(Theme::AndroidDark.visuals().dark_mode);
        assert!(!Theme::Ios.visuals().dark_mode);
        assert_eq!(Theme::default(), Theme::Ios);
    }
}

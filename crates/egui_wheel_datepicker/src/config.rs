use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{DateFormat, PickedValue, Theme};

/// Called with the confirmed value.
pub type OnSelect = Arc<dyn Fn(PickedValue) + Send + Sync>;

/// Called when the user cancels.
pub type OnCancel = Arc<dyn Fn() + Send + Sync>;

/// Replaces the default header or content of the picker.
pub type CustomUi = Arc<dyn Fn(&mut egui::Ui) + Send + Sync>;

/// One choice of a list-mode picker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ListEntry {
    /// Machine value, for the caller.
    pub value: String,

    /// What the user sees, and what is emitted on confirm.
    pub text: String,
}

impl ListEntry {
    pub fn new(value: impl ToString, text: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            text: text.into(),
        }
    }
}

/// What the picker starts on: a date (calendar mode) or the entries of a list (list mode).
#[derive(Clone, Debug, PartialEq)]
pub enum PickerValue {
    Date(NaiveDateTime),
    List(Arc<[ListEntry]>),
}

impl PickerValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::List(_) => "list",
        }
    }
}

impl From<NaiveDateTime> for PickerValue {
    fn from(date: NaiveDateTime) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDate> for PickerValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date.and_time(NaiveTime::MIN))
    }
}

impl From<Vec<ListEntry>> for PickerValue {
    fn from(entries: Vec<ListEntry>) -> Self {
        Self::List(entries.into())
    }
}

impl From<Arc<[ListEntry]>> for PickerValue {
    fn from(entries: Arc<[ListEntry]>) -> Self {
        Self::List(entries)
    }
}

/// Everything the caller controls about a [`crate::DatePicker`].
///
/// Build it with the chained setters, starting from [`Default`]:
///
/// ```
/// use chrono::NaiveDate;
/// use egui_wheel_datepicker::DatePickerConfig;
///
/// let config = DatePickerConfig::default()
///     .theme("dark")
///     .value(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap())
///     .date_format(["YYYY", "MM", "DD"])
///     .show_format("DD.MM.YYYY")
///     .on_select(|value| println!("picked {value}"));
/// ```
///
/// Both callbacks are optional and safe to omit: a missing callback is a no-op.
#[derive(Clone)]
pub struct DatePickerConfig {
    pub theme: Theme,
    pub value: PickerValue,

    /// Lower bound of the calendar value (inclusive).
    pub min: NaiveDateTime,

    /// Upper bound of the calendar value (inclusive).
    pub max: NaiveDateTime,

    pub date_format: DateFormat,

    /// Header pattern in calendar mode, see [`crate::time::format`].
    pub show_format: String,
    pub show_header: bool,
    pub confirm_text: String,
    pub cancel_text: String,
    pub on_select: Option<OnSelect>,
    pub on_cancel: Option<OnCancel>,
    pub custom_header: Option<CustomUi>,
    pub custom_content: Option<CustomUi>,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Ios,
            value: PickerValue::Date(chrono::Local::now().naive_local()),
            min: default_min(),
            max: default_max(),
            date_format: DateFormat::default(),
            show_format: "YYYY/MM/DD".to_owned(),
            show_header: true,
            confirm_text: "Done".to_owned(),
            cancel_text: "Cancel".to_owned(),
            on_select: None,
            on_cancel: None,
            custom_header: None,
            custom_content: None,
        }
    }
}

/// 1970-01-01 00:00:00
pub fn default_min() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MIN)
}

/// 2050-01-01 00:00:00
pub fn default_max() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2050, 1, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX)
}

impl DatePickerConfig {
    /// Unknown theme names fall back to [`Theme::Default`].
    #[inline]
    pub fn theme(mut self, theme: impl Into<Theme>) -> Self {
        self.theme = theme.into();
        self
    }

    #[inline]
    pub fn value(mut self, value: impl Into<PickerValue>) -> Self {
        self.value = value.into();
        self
    }

    #[inline]
    pub fn min(mut self, min: impl Into<NaiveDateTime>) -> Self {
        self.min = min.into();
        self
    }

    #[inline]
    pub fn max(mut self, max: impl Into<NaiveDateTime>) -> Self {
        self.max = max.into();
        self
    }

    /// Column tokens. A first token starting with `l` switches to list mode.
    #[inline]
    pub fn date_format(mut self, date_format: impl Into<DateFormat>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[inline]
    pub fn show_format(mut self, show_format: impl Into<String>) -> Self {
        self.show_format = show_format.into();
        self
    }

    #[inline]
    pub fn show_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }

    #[inline]
    pub fn confirm_text(mut self, confirm_text: impl Into<String>) -> Self {
        self.confirm_text = confirm_text.into();
        self
    }

    #[inline]
    pub fn cancel_text(mut self, cancel_text: impl Into<String>) -> Self {
        self.cancel_text = cancel_text.into();
        self
    }

    #[inline]
    pub fn on_select(mut self, on_select: impl Fn(PickedValue) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(on_select));
        self
    }

    #[inline]
    pub fn on_cancel(mut self, on_cancel: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Arc::new(on_cancel));
        self
    }

    #[inline]
    pub fn custom_header(
        mut self,
        add_contents: impl Fn(&mut egui::Ui) + Send + Sync + 'static,
    ) -> Self {
        self.custom_header = Some(Arc::new(add_contents));
        self
    }

    #[inline]
    pub fn custom_content(
        mut self,
        add_contents: impl Fn(&mut egui::Ui) + Send + Sync + 'static,
    ) -> Self {
        self.custom_content = Some(Arc::new(add_contents));
        self
    }

    /// The inclusive calendar bounds.
    pub fn bounds(&self) -> std::ops::RangeInclusive<NaiveDateTime> {
        self.min..=self.max
    }

    pub fn is_list_mode(&self) -> bool {
        self.date_format.is_list_mode()
    }
}

impl std::fmt::Debug for DatePickerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePickerConfig")
            .field("theme", &self.theme)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("date_format", &self.date_format)
            .field("show_format", &self.show_format)
            .field("show_header", &self.show_header)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .finish_non_exhaustive()
    }
}

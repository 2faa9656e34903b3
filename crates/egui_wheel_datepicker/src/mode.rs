use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{
    DatePickerConfig, ListEntry, PickerError, PickerValue,
    time::{self, normalize},
};

/// What a column reports back when the user picks something in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Date(NaiveDateTime),

    /// Index into the list entries.
    Entry(usize),
}

/// What the picker hands to `on_select` on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickedValue {
    /// The working date of a calendar-mode picker.
    Date(NaiveDateTime),

    /// The display text of the selected entry of a list-mode picker.
    Text(String),
}

impl PickedValue {
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Date(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for PickedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// The working value of a picker, shaped by its operating mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// A single date, kept inside the configured bounds.
    Calendar { value: NaiveDateTime },

    /// A choice among caller-supplied entries.
    ///
    /// The selection is tracked by index, so entries sharing a display text stay distinct.
    List {
        entries: Arc<[ListEntry]>,
        selected: usize,
    },
}

impl Mode {
    /// The initial working value for `config`.
    ///
    /// # Errors
    /// [`PickerError::EmptyList`] for list mode without entries,
    /// [`PickerError::ValueMismatch`] when the value kind does not fit the mode.
    pub fn from_config(config: &DatePickerConfig) -> Result<Self, PickerError> {
        match (&config.value, config.is_list_mode()) {
            (PickerValue::List(entries), true) => {
                if entries.is_empty() {
                    return Err(PickerError::EmptyList);
                }
                Ok(Self::List {
                    entries: Arc::clone(entries),
                    selected: 0,
                })
            }
            (PickerValue::Date(date), false) => Ok(Self::Calendar {
                value: normalize(*date, config.bounds()),
            }),
            (value, list_mode) => Err(PickerError::ValueMismatch {
                expected: if list_mode { "list" } else { "date" },
                found: value.kind(),
            }),
        }
    }

    /// The working value after the caller handed in `config`.
    ///
    /// A list-mode value is kept as is: entries are not re-read after construction.
    /// A calendar value is re-normalized and only replaced when it moved by at least a second.
    /// Switching modes starts over as if freshly constructed.
    ///
    /// # Errors
    /// Same as [`Self::from_config`].
    pub fn reconfigured(&self, config: &DatePickerConfig) -> Result<Self, PickerError> {
        if self.is_list() != config.is_list_mode() {
            return Self::from_config(config);
        }

        match self {
            Self::List { .. } => Ok(self.clone()),
            Self::Calendar { value } => {
                let Self::Calendar { value: next } = Self::from_config(config)? else {
                    return Ok(self.clone());
                };
                if time::same_instant(next, *value) {
                    Ok(self.clone())
                } else {
                    Ok(Self::Calendar { value: next })
                }
            }
        }
    }

    /// The working value after a column reported `selection`.
    ///
    /// Returns `None` if the selection does not fit this mode, or names no entry.
    /// Calendar dates are taken as-is: columns only offer dates inside the bounds.
    pub fn selected(&self, selection: Selection) -> Option<Self> {
        match (self, selection) {
            (Self::Calendar { .. }, Selection::Date(value)) => Some(Self::Calendar { value }),
            (Self::List { entries, .. }, Selection::Entry(index)) if index < entries.len() => {
                Some(Self::List {
                    entries: Arc::clone(entries),
                    selected: index,
                })
            }
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Calendar { value } => Some(*value),
            Self::List { .. } => None,
        }
    }

    /// The selected list entry.
    pub fn selected_entry(&self) -> Option<&ListEntry> {
        match self {
            Self::Calendar { .. } => None,
            Self::List { entries, selected } => entries.get(*selected),
        }
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected_entry().map(|entry| entry.text.as_str())
    }

    /// What confirming right now would emit.
    pub fn picked_value(&self) -> PickedValue {
        match self {
            Self::Calendar { value } => PickedValue::Date(*value),
            Self::List { .. } => {
                PickedValue::Text(self.selected_text().unwrap_or_default().to_owned())
            }
        }
    }

    /// Default header: the selected text, or the date rendered with `show_format`.
    pub fn header_text(&self, show_format: &str) -> String {
        match self {
            Self::Calendar { value } => time::format(value, show_format),
            Self::List { .. } => self.selected_text().unwrap_or_default().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn list_config() -> DatePickerConfig {
        DatePickerConfig::default()
            .date_format(["l"])
            .value(vec![ListEntry::new(1, "A"), ListEntry::new(2, "B")])
    }

    #[test]
    fn calendar_value_is_clamped() {
        let config = DatePickerConfig::default().value(ymd(1900, 1, 1));
        let mode = Mode::from_config(&config).unwrap();
        assert_eq!(mode.date(), Some(ymd(1970, 1, 1)));

        let config = DatePickerConfig::default().value(ymd(2020, 6, 15));
        let mode = Mode::from_config(&config).unwrap();
        assert_eq!(mode.date(), Some(ymd(2020, 6, 15)));
        assert_eq!(mode.header_text("YYYY/MM/DD"), "2020/06/15");
    }

    #[test]
    fn list_starts_on_first_entry() {
        let mode = Mode::from_config(&list_config()).unwrap();
        assert_eq!(mode.selected_text(), Some("A"));
        assert_eq!(mode.header_text("YYYY"), "A");
        assert_eq!(mode.picked_value(), PickedValue::Text("A".to_owned()));
    }

    #[test]
    fn construction_errors() {
        let empty = list_config().value(Vec::<ListEntry>::new());
        assert_eq!(Mode::from_config(&empty), Err(PickerError::EmptyList));

        let date_in_list_mode = list_config().value(ymd(2020, 1, 1));
        assert_eq!(
            Mode::from_config(&date_in_list_mode),
            Err(PickerError::ValueMismatch {
                expected: "list",
                found: "date"
            })
        );

        let list_in_calendar_mode = DatePickerConfig::default().value(vec![ListEntry::new(1, "A")]);
        assert!(matches!(
            Mode::from_config(&list_in_calendar_mode),
            Err(PickerError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn selection_replaces_value() {
        let mode = Mode::from_config(&list_config()).unwrap();
        let mode = mode.selected(Selection::Entry(1)).unwrap();
        assert_eq!(mode.picked_value(), PickedValue::Text("B".to_owned()));
        assert!(mode.selected(Selection::Date(ymd(2020, 1, 1))).is_none());
        assert!(mode.selected(Selection::Entry(2)).is_none());

        let calendar = Mode::from_config(&DatePickerConfig::default().value(ymd(2020, 6, 15))).unwrap();
        let calendar = calendar.selected(Selection::Date(ymd(2021, 3, 1))).unwrap();
        assert_eq!(calendar.date(), Some(ymd(2021, 3, 1)));
    }

    #[test]
    fn list_ignores_reconfiguration() {
        let mode = Mode::from_config(&list_config())
            .unwrap()
            .selected(Selection::Entry(1))
            .unwrap();
        let next = mode
            .reconfigured(&list_config().value(vec![ListEntry::new(9, "Z")]))
            .unwrap();
        assert_eq!(next, mode);
    }

    #[test]
    fn calendar_reconfiguration_reclamps() {
        let config = DatePickerConfig::default().value(ymd(2020, 6, 15));
        let mode = Mode::from_config(&config).unwrap();

        let tighter = config.clone().max(ymd(2019, 1, 1));
        assert_eq!(mode.reconfigured(&tighter).unwrap().date(), Some(ymd(2019, 1, 1)));

        let same = config.clone().value(ymd(2020, 6, 15) + chrono::TimeDelta::milliseconds(300));
        assert_eq!(mode.reconfigured(&same).unwrap(), mode);
    }

    #[test]
    fn duplicate_texts_stay_distinct() {
        let config = DatePickerConfig::default().date_format(["l"]).value(vec![
            ListEntry::new(1, "Same"),
            ListEntry::new(2, "Same"),
        ]);
        let mode = Mode::from_config(&config)
            .unwrap()
            .selected(Selection::Entry(1))
            .unwrap();
        assert_eq!(mode.selected_entry(), Some(&ListEntry::new(2, "Same")));
        assert_ne!(mode, Mode::from_config(&config).unwrap());
    }

    #[test]
    fn switching_modes_starts_over() {
        let calendar = Mode::from_config(&DatePickerConfig::default().value(ymd(2020, 6, 15))).unwrap();
        let list = calendar.reconfigured(&list_config()).unwrap();
        assert_eq!(list.selected_text(), Some("A"));
    }
}

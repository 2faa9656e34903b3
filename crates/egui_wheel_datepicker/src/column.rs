use std::ops::{Range, RangeInclusive};

use chrono::{Datelike as _, NaiveDateTime};
use egui::{Button, Key, ScrollArea, Ui, Vec2};

use crate::{
    FormatToken, Mode, Selection, Unit,
    time::{self, normalize},
};

/// One row of a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRow {
    pub label: String,
    pub selection: Selection,

    /// `false` if picking this row would leave the bounds.
    pub enabled: bool,
    pub selected: bool,
}

/// A single scrollable column of a [`crate::DatePicker`].
///
/// Date columns list every value of their unit, each row rendered with the
/// column's token as pattern. Rows that can't be reached inside the bounds
/// are shown disabled. List columns show one row per entry.
///
/// Rows are built lazily: only the ones scrolled into view are laid out,
/// so a year column spanning any bounds stays cheap.
///
/// While hovered, the up and down arrow keys move the selection by one row.
#[must_use = "You should call .show()"]
pub struct PickerColumn<'a> {
    token: &'a str,
    parsed: Option<FormatToken>,
    mode: &'a Mode,
    bounds: RangeInclusive<NaiveDateTime>,
    visible_rows: usize,
}

impl<'a> PickerColumn<'a> {
    pub fn new(token: &'a str, mode: &'a Mode, bounds: RangeInclusive<NaiveDateTime>) -> Self {
        Self {
            token,
            parsed: FormatToken::parse(token).ok(),
            mode,
            bounds,
            visible_rows: 5,
        }
    }

    /// How many rows are visible without scrolling. (Default: 5)
    #[inline]
    pub fn visible_rows(mut self, visible_rows: usize) -> Self {
        self.visible_rows = visible_rows.max(1);
        self
    }

    /// The values a date column offers, or `None` for a list or unknown token.
    fn candidates(&self) -> Option<(Unit, RangeInclusive<i32>)> {
        let unit = self.parsed.as_ref()?.unit();
        let Mode::Calendar { value } = self.mode else {
            return None;
        };
        let (start, end) = (self.bounds.start().year(), self.bounds.end().year());
        let range = match unit {
            Unit::Year => start.min(end)..=start.max(end),
            Unit::Month => 1..=12,
            Unit::Day => 1..=time::days_in_month(value.year(), value.month()) as i32,
            Unit::Hour => 0..=23,
            Unit::Minute | Unit::Second => 0..=59,
            Unit::List => return None,
        };
        Some((unit, range))
    }

    /// Number of rows, without building any of them.
    ///
    /// Zero if the token is unknown or does not fit the picker mode.
    pub fn len(&self) -> usize {
        match (self.parsed.as_ref().map(FormatToken::unit), self.mode) {
            (Some(Unit::List), Mode::List { entries, .. }) => entries.len(),
            _ => self.candidates().map_or(0, |(_, range)| {
                let span = i64::from(*range.end()) - i64::from(*range.start()) + 1;
                usize::try_from(span).unwrap_or(0)
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the row matching the current value.
    pub fn selected_index(&self) -> Option<usize> {
        match self.mode {
            Mode::List { selected, .. } => (*selected < self.len()).then_some(*selected),
            Mode::Calendar { value } => {
                let (unit, range) = self.candidates()?;
                let current = time::unit_value(value, unit)?;
                usize::try_from(i64::from(current) - i64::from(*range.start())).ok()
            }
        }
    }

    /// The row at `index`, in display order.
    pub fn row(&self, index: usize) -> Option<ColumnRow> {
        if index >= self.len() {
            return None;
        }

        if let Mode::List { entries, selected } = self.mode {
            let entry = entries.get(index)?;
            return Some(ColumnRow {
                label: entry.text.clone(),
                selected: index == *selected,
                enabled: true,
                selection: Selection::Entry(index),
            });
        }

        let (unit, range) = self.candidates()?;
        let Mode::Calendar { value } = self.mode else {
            return None;
        };
        let n = range.start().checked_add(i32::try_from(index).ok()?)?;
        let raw = time::with_unit(*value, unit, n)?;
        let clamped = normalize(raw, self.bounds.clone());
        Some(ColumnRow {
            label: time::format(&raw, self.parsed.as_ref()?.pattern()),
            enabled: time::unit_value(&clamped, unit) == Some(n),
            selected: time::unit_value(value, unit) == Some(n),
            selection: Selection::Date(clamped),
        })
    }

    /// The rows in `range`, clipped to [`Self::len`].
    pub fn rows(&self, range: Range<usize>) -> Vec<ColumnRow> {
        let end = range.end.min(self.len());
        (range.start..end).filter_map(|index| self.row(index)).collect()
    }

    /// Where the arrow keys lead from the current selection.
    fn stepped(&self, delta: i32) -> Option<Selection> {
        match self.mode {
            Mode::Calendar { value } => {
                let unit = self.parsed.as_ref()?.unit();
                let next = time::step(*value, unit, delta)?;
                (normalize(next, self.bounds.clone()) == next).then_some(Selection::Date(next))
            }
            Mode::List { .. } => {
                let next = self.selected_index()?.checked_add_signed(delta as isize)?;
                self.row(next).map(|row| row.selection)
            }
        }
    }

    /// Returns what the user picked this frame, if anything.
    pub fn show(self, ui: &mut Ui) -> Option<Selection> {
        let total_rows = self.len();
        if total_rows == 0 {
            let warned_id = ui.id().with("warned_empty");
            if !ui.data(|data| data.get_temp::<bool>(warned_id).unwrap_or(false)) {
                log::warn!(
                    "Column {:?} has nothing to show in {} mode",
                    self.token,
                    if self.mode.is_list() { "list" } else { "calendar" }
                );
                ui.data_mut(|data| data.insert_temp(warned_id, true));
            }
        }

        let row_height = ui.spacing().interact_size.y;
        let row_height_with_spacing = row_height + ui.spacing().item_spacing.y;
        let height = row_height_with_spacing * self.visible_rows as f32;

        let mut scroll_area = ScrollArea::vertical()
            .max_height(height)
            .auto_shrink([false, false]);

        // Center the selected row whenever the selection moved.
        let scrolled_to_id = ui.id().with("scrolled_to");
        let scrolled_to: Option<usize> = ui.data(|data| data.get_temp(scrolled_to_id));
        let selected = self.selected_index();
        if let Some(index) = selected
            && scrolled_to != Some(index)
        {
            let offset = index as f32 * row_height_with_spacing - (height - row_height) / 2.0;
            scroll_area = scroll_area.vertical_scroll_offset(offset.max(0.0));
            ui.data_mut(|data| data.insert_temp(scrolled_to_id, index));
        }

        let mut picked = None;
        let output = scroll_area.show_rows(ui, row_height, total_rows, |ui, row_range| {
            ui.vertical_centered_justified(|ui| {
                for row in self.rows(row_range) {
                    let button = Button::selectable(row.selected, row.label)
                        .min_size(Vec2::new(0.0, row_height));
                    if ui.add_enabled(row.enabled, button).clicked() {
                        picked = Some(row.selection);
                    }
                }
            });
        });

        if picked.is_none() && ui.rect_contains_pointer(output.inner_rect) {
            let (up, down) =
                ui.input(|i| (i.key_pressed(Key::ArrowUp), i.key_pressed(Key::ArrowDown)));
            if up {
                picked = self.stepped(-1);
            } else if down {
                picked = self.stepped(1);
            }
        }

        picked
    }
}

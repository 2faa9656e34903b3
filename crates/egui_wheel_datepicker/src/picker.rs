use std::hash::Hash;

use egui::{Frame, Id, InnerResponse, Response, RichText, Ui, Widget};

use crate::{
    DatePickerConfig, Mode, PickedValue, PickerColumn, PickerError, Selection, Theme,
    change::should_update,
};

/// Something the user did this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// A column reported a new value. Nothing is emitted to the caller yet.
    Selected(Selection),

    /// The confirm button was clicked; `on_select` has been called with this value.
    Confirmed(PickedValue),

    /// The cancel button was clicked; `on_cancel` has been called.
    Cancelled,
}

/// What [`DatePicker::show`] returns.
pub struct DatePickerResponse {
    pub response: Response,
    pub event: Option<PickerEvent>,
}

enum FooterAction {
    Confirm,
    Cancel,
}

/// A scrollable multi-column date picker, or a single-column list picker.
///
/// Unlike most egui widgets this one is retained: keep it in your app state
/// and call [`Self::show`] every frame. Feed it new configuration with
/// [`Self::set_config`] when (and only when) the configuration changes,
/// as that re-derives the working value.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// use chrono::NaiveDate;
/// use egui_wheel_datepicker::{DatePicker, DatePickerConfig};
///
/// let config = DatePickerConfig::default()
///     .value(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap())
///     .on_select(|value| log::info!("picked {value}"));
/// let mut picker = DatePicker::new(config).unwrap();
/// assert_eq!(picker.header_text(), "2020/06/15");
/// picker.show(ui);
/// # });
/// ```
pub struct DatePicker {
    id_salt: Id,
    config: DatePickerConfig,
    state: Mode,
    visible_rows: usize,
    repaint_pending: bool,
}

impl DatePicker {
    /// # Errors
    /// See [`Mode::from_config`].
    pub fn new(config: DatePickerConfig) -> Result<Self, PickerError> {
        let state = Mode::from_config(&config)?;
        log::debug!(
            "New {} picker with {} column(s)",
            if state.is_list() { "list" } else { "calendar" },
            config.date_format.len()
        );
        Ok(Self {
            id_salt: Id::new("egui_wheel_datepicker"),
            config,
            state,
            visible_rows: 5,
            repaint_pending: false,
        })
    }

    /// Must be set if multiple pickers are in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// How many rows each column shows without scrolling. (Default: 5)
    #[inline]
    pub fn visible_rows(mut self, visible_rows: usize) -> Self {
        self.visible_rows = visible_rows;
        self
    }

    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    /// The current working value.
    pub fn mode(&self) -> &Mode {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// `"datepicker <theme>"`, with the theme after fallback.
    pub fn class_name(&self) -> String {
        self.config.theme.class_name()
    }

    /// The default header: selected entry text, or the date in `show_format`.
    pub fn header_text(&self) -> String {
        self.state.header_text(&self.config.show_format)
    }

    /// Has a change been applied that still needs a repaint?
    pub fn repaint_pending(&self) -> bool {
        self.repaint_pending
    }

    /// Hand in a new configuration.
    ///
    /// List-mode pickers keep their entries and selection; calendar-mode
    /// pickers re-clamp the new value into the new bounds and adopt it if it
    /// differs by at least a second.
    ///
    /// Returns `true` if the change warrants a repaint.
    ///
    /// # Errors
    /// See [`Mode::from_config`]. The picker is left unchanged on error.
    pub fn set_config(&mut self, config: DatePickerConfig) -> Result<bool, PickerError> {
        let next_state = self.state.reconfigured(&config)?;
        let update = should_update(&self.state, &next_state, &self.config, &config);
        log::debug!("Configuration changed, repaint: {update}");
        self.state = next_state;
        self.config = config;
        self.repaint_pending |= update;
        Ok(update)
    }

    /// Apply what a column reported.
    ///
    /// Returns `true` if the change warrants a repaint.
    pub fn handle_select(&mut self, selection: Selection) -> bool {
        let Some(next_state) = self.state.selected(selection.clone()) else {
            log::warn!("Ignoring {selection:?}: it does not fit the picker mode");
            return false;
        };
        let update = should_update(&self.state, &next_state, &self.config, &self.config);
        log::trace!("Selected {selection:?}, repaint: {update}");
        self.state = next_state;
        self.repaint_pending |= update;
        update
    }

    /// Emit the working value to `on_select` and return it. The picker state is kept.
    pub fn confirm(&self) -> PickedValue {
        let value = self.state.picked_value();
        log::debug!("Confirmed {value}");
        if let Some(on_select) = &self.config.on_select {
            on_select(value.clone());
        }
        value
    }

    /// Call `on_cancel`. The picker state is kept.
    pub fn cancel(&self) {
        log::debug!("Cancelled");
        if let Some(on_cancel) = &self.config.on_cancel {
            on_cancel();
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> DatePickerResponse {
        let theme = self.config.theme;

        let InnerResponse {
            inner: (selection, action),
            mut response,
        } = ui.push_id(self.id_salt, |ui| {
            *ui.visuals_mut() = theme.visuals();
            Frame::popup(ui.style())
                .show(ui, |ui| {
                    self.header_ui(ui);
                    let selection = self.content_ui(ui);
                    let action = self.footer_ui(ui);
                    (selection, action)
                })
                .inner
        });

        let mut event = None;
        if let Some(selection) = selection {
            self.handle_select(selection.clone());
            response.mark_changed();
            event = Some(PickerEvent::Selected(selection));
        }

        match action {
            Some(FooterAction::Confirm) => event = Some(PickerEvent::Confirmed(self.confirm())),
            Some(FooterAction::Cancel) => {
                self.cancel();
                event = Some(PickerEvent::Cancelled);
            }
            None => {}
        }

        if std::mem::take(&mut self.repaint_pending) {
            ui.ctx().request_repaint();
        }

        DatePickerResponse { response, event }
    }

    fn header_ui(&self, ui: &mut Ui) {
        if !self.config.show_header {
            return;
        }
        if let Some(custom_header) = &self.config.custom_header {
            custom_header(ui);
        } else {
            ui.vertical_centered(|ui| {
                ui.heading(self.header_text());
            });
        }
        ui.separator();
    }

    fn content_ui(&self, ui: &mut Ui) -> Option<Selection> {
        if let Some(custom_content) = &self.config.custom_content {
            custom_content(ui);
            return None;
        }

        let tokens = self.config.date_format.tokens();
        if tokens.is_empty() {
            return None;
        }

        let mut picked = None;
        ui.columns(tokens.len(), |columns| {
            for (index, (ui, token)) in columns.iter_mut().zip(tokens).enumerate() {
                ui.push_id(index, |ui| {
                    let column = PickerColumn::new(token, &self.state, self.config.bounds())
                        .visible_rows(self.visible_rows);
                    if let Some(selection) = column.show(ui) {
                        picked = Some(selection);
                    }
                });
            }
        });
        picked
    }

    fn footer_ui(&self, ui: &mut Ui) -> Option<FooterAction> {
        ui.separator();
        let accent = self.config.theme.accent();
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new(&self.config.confirm_text).color(accent))
                .clicked()
            {
                Some(FooterAction::Confirm)
            } else if ui.button(self.config.cancel_text.as_str()).clicked() {
                Some(FooterAction::Cancel)
            } else {
                None
            }
        })
        .inner
    }
}

impl Widget for &mut DatePicker {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::*;
    use crate::ListEntry;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[derive(Default)]
    struct Calls {
        selected: Mutex<Vec<PickedValue>>,
        cancelled: Mutex<usize>,
    }

    fn recording(config: DatePickerConfig) -> (DatePickerConfig, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let on_select = Arc::clone(&calls);
        let on_cancel = Arc::clone(&calls);
        let config = config
            .on_select(move |value| on_select.selected.lock().unwrap().push(value))
            .on_cancel(move || *on_cancel.cancelled.lock().unwrap() += 1);
        (config, calls)
    }

    fn list_config() -> DatePickerConfig {
        DatePickerConfig::default()
            .date_format(["l"])
            .value(vec![ListEntry::new(1, "A"), ListEntry::new(2, "B")])
    }

    #[test]
    fn confirm_emits_initial_date() {
        let (config, calls) = recording(
            DatePickerConfig::default()
                .date_format(["YYYY", "M", "D"])
                .value(ymd(2020, 6, 15)),
        );
        let picker = DatePicker::new(config).unwrap();
        assert_eq!(picker.confirm(), PickedValue::Date(ymd(2020, 6, 15)));
        assert_eq!(
            *calls.selected.lock().unwrap(),
            [PickedValue::Date(ymd(2020, 6, 15))]
        );
    }

    #[test]
    fn list_selection_then_confirm() {
        let (config, calls) = recording(list_config());
        let mut picker = DatePicker::new(config).unwrap();
        assert_eq!(picker.header_text(), "A");

        picker.handle_select(Selection::Entry(1));
        assert_eq!(picker.header_text(), "B");
        picker.confirm();
        assert_eq!(
            *calls.selected.lock().unwrap(),
            [PickedValue::Text("B".to_owned())]
        );
    }

    #[test]
    fn cancel_never_selects() {
        let (config, calls) = recording(DatePickerConfig::default().value(ymd(2020, 6, 15)));
        let picker = DatePicker::new(config).unwrap();
        picker.cancel();
        picker.cancel();
        assert!(calls.selected.lock().unwrap().is_empty());
        assert_eq!(*calls.cancelled.lock().unwrap(), 2);
        assert_eq!(picker.mode().date(), Some(ymd(2020, 6, 15)));
    }

    #[test]
    fn callbacks_are_optional() {
        let picker = DatePicker::new(DatePickerConfig::default().value(ymd(2020, 6, 15))).unwrap();
        picker.cancel();
        assert_eq!(picker.confirm(), PickedValue::Date(ymd(2020, 6, 15)));
    }

    #[test]
    fn equal_value_does_not_repaint() {
        let config = DatePickerConfig::default().value(ymd(2020, 6, 15));
        let mut picker = DatePicker::new(config.clone()).unwrap();

        let same_second = config.clone().value(ymd(2020, 6, 15) + TimeDelta::milliseconds(400));
        assert_eq!(picker.set_config(same_second), Ok(false));
        assert!(!picker.repaint_pending());
        assert_eq!(picker.mode().date(), Some(ymd(2020, 6, 15)));

        let next_day = config.value(ymd(2020, 6, 16));
        assert_eq!(picker.set_config(next_day), Ok(true));
        assert!(picker.repaint_pending());
        assert_eq!(picker.mode().date(), Some(ymd(2020, 6, 16)));
    }

    #[test]
    fn set_config_reclamps() {
        let config = DatePickerConfig::default().value(ymd(2020, 6, 15));
        let mut picker = DatePicker::new(config.clone()).unwrap();
        assert_eq!(picker.set_config(config.max(ymd(2010, 1, 1))), Ok(true));
        assert_eq!(picker.mode().date(), Some(ymd(2010, 1, 1)));
    }

    #[test]
    fn list_mode_keeps_selection_on_reconfigure() {
        let mut picker = DatePicker::new(list_config()).unwrap();
        picker.handle_select(Selection::Entry(1));

        let renamed = list_config()
            .value(vec![ListEntry::new(3, "C")])
            .confirm_text("OK");
        assert_eq!(picker.set_config(renamed), Ok(true));
        assert_eq!(picker.header_text(), "B");
        assert_eq!(picker.config().confirm_text, "OK");
    }

    #[test]
    fn failed_reconfigure_leaves_picker_alone() {
        let mut picker = DatePicker::new(DatePickerConfig::default().value(ymd(2020, 6, 15))).unwrap();
        let bad = DatePickerConfig::default().value(vec![ListEntry::new(1, "A")]);
        assert!(picker.set_config(bad).is_err());
        assert_eq!(picker.mode().date(), Some(ymd(2020, 6, 15)));
    }

    #[test]
    fn mismatched_selection_is_ignored() {
        let mut picker = DatePicker::new(list_config()).unwrap();
        assert!(!picker.handle_select(Selection::Date(ymd(2020, 1, 1))));
        assert_eq!(picker.header_text(), "A");
    }

    #[test]
    fn theme_fallback_in_class_name() {
        let picker = DatePicker::new(
            DatePickerConfig::default()
                .theme("purple")
                .value(ymd(2020, 6, 15)),
        )
        .unwrap();
        assert_eq!(picker.theme(), Theme::Default);
        assert!(picker.class_name().contains("default"));
        assert!(!picker.class_name().contains("purple"));

        let default_theme = DatePicker::new(DatePickerConfig::default()).unwrap();
        assert_eq!(default_theme.class_name(), "datepicker ios");
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example

use chrono::{Local, Months};
use eframe::egui;
use egui_wheel_datepicker::{
    DatePicker, DatePickerConfig, ListEntry, PickerError, PickerEvent, Theme,
};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    let app = DemoApp::new().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    eframe::run_native(
        "Wheel date picker",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

struct DemoApp {
    theme: Theme,
    calendar: DatePicker,
    list: DatePicker,
    last_event: String,
}

impl DemoApp {
    fn new() -> Result<Self, PickerError> {
        let theme = Theme::Ios;
        Ok(Self {
            theme,
            calendar: DatePicker::new(calendar_config(theme))?.id_salt("calendar"),
            list: DatePicker::new(list_config(theme))?.id_salt("list"),
            last_event: "Nothing picked yet".to_owned(),
        })
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), PickerError> {
        self.theme = theme;
        let calendar = self.calendar.config().clone().theme(theme);
        let list = self.list.config().clone().theme(theme);
        self.calendar.set_config(calendar)?;
        self.list.set_config(list)?;
        Ok(())
    }
}

fn calendar_config(theme: Theme) -> DatePickerConfig {
    // Five years back, one year ahead.
    let today = Local::now().date_naive();
    let min = today.checked_sub_months(Months::new(60)).unwrap_or(today);
    let max = today.checked_add_months(Months::new(12)).unwrap_or(today);
    DatePickerConfig::default()
        .theme(theme)
        .min(min)
        .max(max)
        .date_format(["YYYY", "MM", "DD", "hh", "mm"])
        .show_format("YYYY/MM/DD hh:mm")
        .on_select(|value| log::info!("Calendar picked {value}"))
        .on_cancel(|| log::info!("Calendar cancelled"))
}

fn list_config(theme: Theme) -> DatePickerConfig {
    let sizes = ["Small", "Medium", "Large", "Extra large"];
    DatePickerConfig::default()
        .theme(theme)
        .date_format(["l"])
        .value(
            sizes
                .iter()
                .enumerate()
                .map(|(i, size)| ListEntry::new(i, *size))
                .collect::<Vec<_>>(),
        )
        .on_select(|value| log::info!("List picked {value}"))
}

impl eframe::App for DemoApp {
    // Required by eframe 0.34; all drawing still happens in `update`, which eframe keeps calling.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Theme:");
                let mut theme = self.theme;
                egui::ComboBox::from_id_salt("theme")
                    .selected_text(theme.name())
                    .show_ui(ui, |ui| {
                        for candidate in Theme::ALL {
                            ui.selectable_value(&mut theme, candidate, candidate.name());
                        }
                    });
                if theme != self.theme
                    && let Err(err) = self.set_theme(theme)
                {
                    log::error!("Failed to switch theme: {err}");
                }
            });
            ui.separator();

            ui.columns(2, |columns| {
                for (ui, picker) in columns.iter_mut().zip([&mut self.calendar, &mut self.list]) {
                    ui.label(picker.class_name());
                    match picker.show(ui).event {
                        Some(PickerEvent::Confirmed(value)) => {
                            self.last_event = format!("Confirmed {value}");
                        }
                        Some(PickerEvent::Cancelled) => {
                            self.last_event = "Cancelled".to_owned();
                        }
                        Some(PickerEvent::Selected(_)) | None => {}
                    }
                }
            });

            ui.separator();
            ui.label(&self.last_event);
        });
    }
}

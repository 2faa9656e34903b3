//! A scrollable, multi-column date picker for [`egui`](https://github.com/emilk/egui).
//!
//! The picker shows one column per format token (`"YYYY"`, `"M"`, `"D"`, and
//! optionally `"hh"`, `"mm"`, `"ss"`), keeps the picked date inside `[min, max]`
//! and hands the result to a callback when the user confirms.
//! A first token starting with `l` turns it into a single-choice list picker.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_wheel_datepicker::{DatePicker, DatePickerConfig, ListEntry};
//!
//! let config = DatePickerConfig::default()
//!     .date_format(["l"])
//!     .value(vec![ListEntry::new(1, "Small"), ListEntry::new(2, "Large")]);
//! let mut picker = DatePicker::new(config).unwrap();
//! ui.add(&mut picker);
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod change;
mod column;
mod config;
mod error;
mod mode;
mod picker;
mod theme;
mod token;

pub mod time;

pub use crate::change::{ShallowEq, opt_ptr_eq, should_update};
pub use crate::column::{ColumnRow, PickerColumn};
pub use crate::config::{
    CustomUi, DatePickerConfig, ListEntry, OnCancel, OnSelect, PickerValue, default_max,
    default_min,
};
pub use crate::error::PickerError;
pub use crate::mode::{Mode, PickedValue, Selection};
pub use crate::picker::{DatePicker, DatePickerResponse, PickerEvent};
pub use crate::theme::Theme;
pub use crate::token::{DateFormat, FormatToken, Unit};

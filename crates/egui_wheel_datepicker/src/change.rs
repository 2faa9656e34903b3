//! Deciding whether a picker needs to be repainted.
//!
//! egui redraws what is on screen every frame anyway; what this module saves
//! is the extra repaint a state or configuration change would request.

use std::sync::Arc;

use crate::{DatePickerConfig, Mode, time};

/// Field-by-field comparison without looking inside shared data.
///
/// Plain values (numbers, dates, strings, flags) compare by value, anything
/// behind an [`Arc`] compares by identity. Two configurations holding
/// equal-looking but separately allocated callbacks are *not* shallow-equal.
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

/// Both `None`, or both pointing at the same allocation.
pub fn opt_ptr_eq<T: ?Sized>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Ignores `value`: the date is compared separately, after normalization.
impl ShallowEq for DatePickerConfig {
    fn shallow_eq(&self, other: &Self) -> bool {
        let Self {
            theme,
            value: _,
            min,
            max,
            date_format,
            show_format,
            show_header,
            confirm_text,
            cancel_text,
            on_select,
            on_cancel,
            custom_header,
            custom_content,
        } = self;

        *theme == other.theme
            && *min == other.min
            && *max == other.max
            && date_format.ptr_eq(&other.date_format)
            && *show_format == other.show_format
            && *show_header == other.show_header
            && *confirm_text == other.confirm_text
            && *cancel_text == other.cancel_text
            && opt_ptr_eq(on_select.as_ref(), other.on_select.as_ref())
            && opt_ptr_eq(on_cancel.as_ref(), other.on_cancel.as_ref())
            && opt_ptr_eq(custom_header.as_ref(), other.custom_header.as_ref())
            && opt_ptr_eq(custom_content.as_ref(), other.custom_content.as_ref())
    }
}

/// Ignores the calendar date, like the [`DatePickerConfig`] impl ignores `value`.
impl ShallowEq for Mode {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Calendar { .. }, Self::Calendar { .. }) => true,
            (
                Self::List { entries, selected },
                Self::List {
                    entries: other_entries,
                    selected: other_selected,
                },
            ) => Arc::ptr_eq(entries, other_entries) && selected == other_selected,
            _ => false,
        }
    }
}

/// Should a picker going from (`old_state`, `old_config`) to (`new_state`, `new_config`) be repainted?
///
/// * List mode: always.
/// * Calendar mode: when the new date, normalized into the new bounds, is a
///   different second than the old one, or when any other field differs by
///   [`ShallowEq`].
pub fn should_update(
    old_state: &Mode,
    new_state: &Mode,
    old_config: &DatePickerConfig,
    new_config: &DatePickerConfig,
) -> bool {
    if new_config.is_list_mode() {
        return true;
    }

    let date_changed = match (old_state.date(), new_state.date()) {
        (Some(old), Some(new)) => {
            !time::same_instant(time::normalize(new, new_config.bounds()), old)
        }
        _ => true,
    };

    date_changed || !new_config.shallow_eq(old_config) || !new_state.shallow_eq(old_state)
}

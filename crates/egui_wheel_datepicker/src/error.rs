/// Why a [`crate::DatePicker`] could not be built from a [`crate::DatePickerConfig`].
///
/// Out-of-range dates and unknown theme names are never errors: they are
/// clamped and replaced by a fallback.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// List mode was selected but there is no entry to start on.
    #[error("list mode needs at least one entry")]
    EmptyList,

    /// The value does not fit the mode picked by the first format token.
    #[error("expected a {expected} value, got a {found} value")]
    ValueMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A format token whose first character names no known unit.
    #[error("unknown format token {0:?}")]
    UnknownToken(String),
}

use std::sync::Arc;

use crate::PickerError;

/// What one picker column scrolls through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,

    /// A caller-supplied list of entries instead of a date component.
    List,
}

impl Unit {
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'D' => Some(Self::Day),
            'h' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'l' => Some(Self::List),
            _ => None,
        }
    }
}

/// One parsed entry of a [`DateFormat`].
///
/// The unit comes from the first character, the whole token is kept as the
/// pattern each row of the column is rendered with (see [`crate::time::format`]).
///
/// ```
/// use egui_wheel_datepicker::{FormatToken, Unit};
///
/// let token = FormatToken::parse("MM").unwrap();
/// assert_eq!(token.unit(), Unit::Month);
/// assert_eq!(token.pattern(), "MM");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatToken {
    unit: Unit,
    pattern: String,
}

impl FormatToken {
    /// # Errors
    /// [`PickerError::UnknownToken`] when the first character names no [`Unit`].
    pub fn parse(token: &str) -> Result<Self, PickerError> {
        let unit = token
            .chars()
            .next()
            .and_then(Unit::from_prefix)
            .ok_or_else(|| PickerError::UnknownToken(token.to_owned()))?;
        Ok(Self {
            unit,
            pattern: token.to_owned(),
        })
    }

    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// The ordered column tokens of a picker, e.g. `["YYYY", "M", "D"]`.
///
/// Cheap to clone: clones share the same token list, and the change detector
/// compares two formats by that identity only.
#[derive(Clone, Debug)]
pub struct DateFormat(Arc<[String]>);

impl DateFormat {
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// List mode when the first token starts with `l`, calendar mode otherwise.
    pub fn is_list_mode(&self) -> bool {
        self.0.first().is_some_and(|first| first.starts_with('l'))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Same underlying token list, not just equal contents.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(["YYYY", "M", "D"])
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for DateFormat {
    fn from(tokens: [S; N]) -> Self {
        Self::new(tokens)
    }
}

impl<S: Into<String>> From<Vec<S>> for DateFormat {
    fn from(tokens: Vec<S>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_first_char() {
        let units: Vec<Unit> = ["YYYY", "MM", "D", "hh", "m", "ss", "list"]
            .into_iter()
            .map(|t| FormatToken::parse(t).unwrap().unit())
            .collect();
        assert_eq!(
            units,
            [
                Unit::Year,
                Unit::Month,
                Unit::Day,
                Unit::Hour,
                Unit::Minute,
                Unit::Second,
                Unit::List,
            ]
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            FormatToken::parse("Q"),
            Err(PickerError::UnknownToken("Q".to_owned()))
        );
        assert!(FormatToken::parse("").is_err());
    }

    #[test]
    fn list_mode_detection() {
        assert!(DateFormat::from(["l"]).is_list_mode());
        assert!(DateFormat::from(["label", "YYYY"]).is_list_mode());
        assert!(!DateFormat::default().is_list_mode());
        assert!(!DateFormat::from(["YYYY", "l"]).is_list_mode());
        assert!(!DateFormat::new(Vec::<String>::new()).is_list_mode());
    }

    #[test]
    fn clones_share_identity() {
        let a = DateFormat::default();
        let b = a.clone();
        let c = DateFormat::default();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }
}

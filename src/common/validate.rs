//! Value validation for public setters.
//!
//! Setters validate first and assign afterwards, so a rejected value never
//! leaves an object half updated.

use crate::ooxml::error::{OoxmlError, Result};
use std::ops::RangeInclusive;

/// A closed vocabulary of XML attribute tokens.
///
/// Implementors list every member in [`XmlToken::ALL`]; the list doubles as the
/// allowed set reported when validation fails.
pub trait XmlToken: Copy + 'static {
    /// Every member of the vocabulary, in schema order.
    const ALL: &'static [Self];

    /// The token written to XML for this member.
    fn xml_value(&self) -> &'static str;
}

/// Accept only integers `>= 0` that fit a `u32`.
///
/// # Examples
///
/// ```
/// use sheetdraw::common::validate::validate_unsigned_int;
/// assert_eq!(validate_unsigned_int("width", 120).unwrap(), 120);
/// assert!(validate_unsigned_int("width", -1).is_err());
/// ```
pub fn validate_unsigned_int(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        OoxmlError::invalid_value(field, value, "an integer between 0 and 4294967295")
    })
}

/// Accept only integers inside `range`.
pub fn validate_int_range(
    field: &'static str,
    value: i64,
    range: RangeInclusive<u32>,
) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or_else(|| {
            OoxmlError::invalid_value(
                field,
                value,
                format!("an integer between {} and {}", range.start(), range.end()),
            )
        })
}

/// Accept only tokens that belong to the vocabulary `T`.
pub fn validate_enum_member<T: XmlToken>(field: &'static str, value: &str) -> Result<T> {
    T::ALL
        .iter()
        .copied()
        .find(|member| member.xml_value() == value)
        .ok_or_else(|| {
            OoxmlError::invalid_value(field, format!("{value:?}"), allowed_set::<T>())
        })
}

/// Render the allowed set of `T` as `one of [a, b, c]`.
pub(crate) fn allowed_set<T: XmlToken>() -> String {
    let members: Vec<&str> = T::ALL.iter().map(XmlToken::xml_value).collect();
    format!("one of [{}]", members.join(", "))
}

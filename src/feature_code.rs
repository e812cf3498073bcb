//! The VCP feature code type and its parsing helpers.

use std::fmt;

/// First code of the range reserved for manufacturer-specific features.
///
/// Codes at or above this value are never present in the built-in registry;
/// metadata for them is either user-defined or synthesized on demand.
pub const MFG_RANGE_START: u8 = 0xe0;

/// A one-byte VCP feature code naming a single monitor control.
///
/// # Examples
///
/// ```
/// use vcp_features::FeatureCode;
///
/// let code = FeatureCode::new(0x10);
/// assert_eq!(code.byte(), 0x10);
/// assert_eq!(code.to_string(), "0x10");
/// assert!(!code.is_manufacturer_specific());
/// assert!(FeatureCode::new(0xe5).is_manufacturer_specific());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureCode(u8);

impl FeatureCode {
    /// Creates a feature code from its raw byte.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw byte.
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Returns true if the code lies in the manufacturer-specific range
    /// (0xE0-0xFF).
    pub const fn is_manufacturer_specific(self) -> bool {
        self.0 >= MFG_RANGE_START
    }

    /// Parses a hexadecimal feature-code token.
    ///
    /// Accepts the forms used by user-defined feature files: with or
    /// without a `0x`/`x` prefix, case-insensitive, leading zeros allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcp_features::FeatureCode;
    ///
    /// assert_eq!(FeatureCode::parse_hex("0x10"), Some(FeatureCode::new(0x10)));
    /// assert_eq!(FeatureCode::parse_hex("E5"), Some(FeatureCode::new(0xe5)));
    /// assert_eq!(FeatureCode::parse_hex("x0c"), Some(FeatureCode::new(0x0c)));
    /// assert_eq!(FeatureCode::parse_hex("notahex"), None);
    /// ```
    pub fn parse_hex(token: &str) -> Option<Self> {
        parse_hex_byte(token).map(Self::new)
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl From<u8> for FeatureCode {
    fn from(code: u8) -> Self {
        Self::new(code)
    }
}

impl From<FeatureCode> for u8 {
    fn from(code: FeatureCode) -> Self {
        code.byte()
    }
}

/// Parses a hexadecimal byte token, shared by feature-code and value-token
/// parsing in user-defined feature files.
pub(crate) fn parse_hex_byte(token: &str) -> Option<u8> {
    let stripped = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .or_else(|| token.strip_prefix('x'))
        .or_else(|| token.strip_prefix('X'))
        .unwrap_or(token);
    if stripped.is_empty() {
        return None;
    }
    // Tolerate leading zeros longer than the value itself, e.g. "0010".
    let stripped = stripped.trim_start_matches('0');
    if stripped.is_empty() {
        return Some(0);
    }
    u8::from_str_radix(stripped, 16).ok()
}

/// A macro that declares a well-known feature code at compile time.
///
/// This macro creates two constants:
/// - A raw `u8` value constant with the suffix `_RAW`
/// - A `FeatureCode` constant with the given name
///
/// This is used internally to define the named codes of the registry.
///
/// # Examples
///
/// ```
/// use vcp_features::*;
/// use paste::paste;
///
/// // Define a constant for a manufacturer-specific code
/// const_feature!(0xe3, PANEL_SERVICE_MENU);
///
/// assert_eq!(PANEL_SERVICE_MENU.byte(), 0xe3);
///
/// paste! {
///     // PANEL_SERVICE_MENU_RAW is the raw u8 value
///     assert_eq!(PANEL_SERVICE_MENU_RAW, 0xe3);
/// }
/// ```
#[macro_export]
macro_rules! const_feature {
    ($code:expr, $const_name:ident) => {
        paste! {
            pub const [<$const_name _RAW>]: u8 = $code;
        }
        pub const $const_name: $crate::FeatureCode = $crate::FeatureCode::new($code);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(parse_hex_byte("10"), Some(0x10));
        assert_eq!(parse_hex_byte("0x10"), Some(0x10));
        assert_eq!(parse_hex_byte("0X10"), Some(0x10));
        assert_eq!(parse_hex_byte("xFF"), Some(0xff));
        assert_eq!(parse_hex_byte("ff"), Some(0xff));
        assert_eq!(parse_hex_byte("FF"), Some(0xff));
        assert_eq!(parse_hex_byte("0"), Some(0x00));
        assert_eq!(parse_hex_byte("00"), Some(0x00));
        assert_eq!(parse_hex_byte("0099"), Some(0x99));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex_byte(""), None);
        assert_eq!(parse_hex_byte("0x"), None);
        assert_eq!(parse_hex_byte("zz"), None);
        assert_eq!(parse_hex_byte("100"), None);
        assert_eq!(parse_hex_byte("-1"), None);
    }

    #[test]
    fn test_manufacturer_range() {
        assert!(!FeatureCode::new(0xdf).is_manufacturer_specific());
        assert!(FeatureCode::new(0xe0).is_manufacturer_specific());
        assert!(FeatureCode::new(0xff).is_manufacturer_specific());
    }

    #[test]
    fn test_ordering_follows_byte() {
        assert!(FeatureCode::new(0x10) < FeatureCode::new(0x12));
    }
}

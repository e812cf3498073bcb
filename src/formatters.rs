//! Value formatters: pure functions turning resolved metadata plus raw
//! device bytes into display strings.
//!
//! Formatter selection happens during metadata resolution; invocation
//! happens later, when a caller has actual bytes from a display. The
//! selected formatter is carried as a [`FormatterTag`], and dispatch is a
//! single match so a new category cannot silently lack a formatter.

use crate::value_table::ValueNameTable;

/// Raw bytes of a non-table VCP feature reply.
///
/// MH/ML carry the maximum value, SH/SL the current value. For
/// Non-Continuous features the SL byte conventionally holds the selected
/// value.
///
/// # Examples
///
/// ```
/// use vcp_features::NonTableValue;
///
/// let value = NonTableValue::from_words(100, 50);
/// assert_eq!(value.value(), 50);
/// assert_eq!(value.maximum(), 100);
/// assert_eq!(value.sl, 50);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NonTableValue {
    /// High byte of the maximum value.
    pub mh: u8,
    /// Low byte of the maximum value.
    pub ml: u8,
    /// High byte of the current value.
    pub sh: u8,
    /// Low byte of the current value.
    pub sl: u8,
}

impl NonTableValue {
    /// Creates a value from its four raw bytes.
    pub const fn new(mh: u8, ml: u8, sh: u8, sl: u8) -> Self {
        Self { mh, ml, sh, sl }
    }

    /// Creates a value from 16-bit maximum and current words.
    pub const fn from_words(maximum: u16, value: u16) -> Self {
        Self {
            mh: (maximum >> 8) as u8,
            ml: maximum as u8,
            sh: (value >> 8) as u8,
            sl: value as u8,
        }
    }

    /// The current value word.
    pub const fn value(self) -> u16 {
        ((self.sh as u16) << 8) | self.sl as u16
    }

    /// The maximum value word.
    pub const fn maximum(self) -> u16 {
        ((self.mh as u16) << 8) | self.ml as u16
    }

    const fn raw_u32(self) -> u32 {
        ((self.mh as u32) << 24)
            | ((self.ml as u32) << 16)
            | ((self.sh as u32) << 8)
            | self.sl as u32
    }
}

/// Identifies the formatting function attached to resolved metadata.
///
/// The tag doubles as the debug identity of the formatter; [`name`] gives
/// a stable display name without any address-based introspection.
///
/// [`name`]: FormatterTag::name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FormatterTag {
    /// Standard continuous: current and maximum words.
    Continuous,
    /// Simple NC with a value table: SL byte looked up by name.
    SlLookup,
    /// NC with meaningful SH byte alongside the SL lookup.
    ShSlLookup,
    /// Simple NC without a table: bare SL byte.
    RawSl,
    /// Extended NC without interpretation: SH and SL bytes.
    RawShSl,
    /// Fallback: all four raw bytes.
    DebugBytes,
    /// Generic table rendering: hex dump.
    HexDumpTable,
    /// LUT size reply: entry counts and bit depths per channel (0x73).
    LutSize,
    /// MCCS/firmware version held in SH.SL (0xdf, 0xc9).
    SpecVersion,
    /// Display usage time in hours (0xc0).
    UsageTime,
    /// MCCS 3.0 audio level with fixed/mute special values (0x62, 0x8f,
    /// 0x91).
    AudioVolume,
    /// MCCS 3.0 color preset with tolerance in SH (0x14).
    ColorPreset,
    /// Horizontal frequency in Hz across all four bytes (0xac).
    HorizontalFrequency,
    /// Vertical frequency in 0.01 Hz units (0xae).
    VerticalFrequency,
    /// Display controller manufacturer and controller number (0xc8).
    DisplayController,
}

impl FormatterTag {
    /// Stable display name of the formatting function.
    pub const fn name(self) -> &'static str {
        match self {
            FormatterTag::Continuous => "format_continuous",
            FormatterTag::SlLookup => "format_sl_lookup",
            FormatterTag::ShSlLookup => "format_sh_sl_lookup",
            FormatterTag::RawSl => "format_raw_sl",
            FormatterTag::RawShSl => "format_raw_sh_sl",
            FormatterTag::DebugBytes => "format_debug_bytes",
            FormatterTag::HexDumpTable => "format_hex_dump",
            FormatterTag::LutSize => "format_lut_size",
            FormatterTag::SpecVersion => "format_spec_version",
            FormatterTag::UsageTime => "format_usage_time",
            FormatterTag::AudioVolume => "format_audio_volume",
            FormatterTag::ColorPreset => "format_color_preset",
            FormatterTag::HorizontalFrequency => "format_horizontal_frequency",
            FormatterTag::VerticalFrequency => "format_vertical_frequency",
            FormatterTag::DisplayController => "format_display_controller",
        }
    }

    /// True for the formatters applied to table-typed features.
    pub const fn is_table(self) -> bool {
        matches!(self, FormatterTag::HexDumpTable | FormatterTag::LutSize)
    }
}

/// Dispatches a non-table value to the formatter identified by `tag`.
///
/// Table-oriented tags fall back to the debug rendering: the caller read
/// non-table bytes for a feature resolved as a table, and the raw bytes
/// are the most useful thing to show.
pub fn format_non_table_value(
    tag: FormatterTag,
    table: Option<&ValueNameTable>,
    value: NonTableValue,
) -> String {
    match tag {
        FormatterTag::Continuous => format_continuous(value),
        FormatterTag::SlLookup => format_sl_lookup(table, value),
        FormatterTag::ShSlLookup => format_sh_sl_lookup(table, value),
        FormatterTag::RawSl => format_raw_sl(value),
        FormatterTag::RawShSl => format_raw_sh_sl(value),
        FormatterTag::SpecVersion => format_spec_version(value),
        FormatterTag::UsageTime => format_usage_time(value),
        FormatterTag::AudioVolume => format_audio_volume(value),
        FormatterTag::ColorPreset => format_color_preset(table, value),
        FormatterTag::HorizontalFrequency => format_horizontal_frequency(value),
        FormatterTag::VerticalFrequency => format_vertical_frequency(value),
        FormatterTag::DisplayController => format_display_controller(table, value),
        FormatterTag::DebugBytes | FormatterTag::HexDumpTable | FormatterTag::LutSize => {
            format_debug_bytes(value)
        }
    }
}

/// Dispatches table bytes to the formatter identified by `tag`.
///
/// Non-table tags render as a hex dump too: the caller read table bytes
/// for a feature resolved as non-table, and showing them raw is the most
/// useful fallback.
pub fn format_table_value(tag: FormatterTag, bytes: &[u8]) -> String {
    match tag {
        FormatterTag::LutSize => format_lut_size(bytes),
        _ => format_hex_dump(bytes),
    }
}

pub(crate) fn format_continuous(value: NonTableValue) -> String {
    format!(
        "current value = {:5}, max value = {:5}",
        value.value(),
        value.maximum()
    )
}

pub(crate) fn format_sl_lookup(table: Option<&ValueNameTable>, value: NonTableValue) -> String {
    match table.and_then(|t| t.lookup(value.sl)) {
        Some(name) => format!("{} (sl=0x{:02x})", name, value.sl),
        None => format!("Unrecognized value (sl=0x{:02x})", value.sl),
    }
}

pub(crate) fn format_sh_sl_lookup(table: Option<&ValueNameTable>, value: NonTableValue) -> String {
    match table.and_then(|t| t.lookup(value.sl)) {
        Some(name) => format!("{} (sh=0x{:02x}, sl=0x{:02x})", name, value.sh, value.sl),
        None => format!(
            "Unrecognized value (sh=0x{:02x}, sl=0x{:02x})",
            value.sh, value.sl
        ),
    }
}

pub(crate) fn format_raw_sl(value: NonTableValue) -> String {
    format!("sl=0x{:02x}", value.sl)
}

pub(crate) fn format_raw_sh_sl(value: NonTableValue) -> String {
    format!("sh=0x{:02x}, sl=0x{:02x}", value.sh, value.sl)
}

pub(crate) fn format_debug_bytes(value: NonTableValue) -> String {
    format!(
        "mh=0x{:02x}, ml=0x{:02x}, sh=0x{:02x}, sl=0x{:02x}",
        value.mh, value.ml, value.sh, value.sl
    )
}

pub(crate) fn format_hex_dump(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "(empty table value)".to_string();
    }
    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{} bytes: {}", bytes.len(), hex.join(" "))
}

pub(crate) fn format_lut_size(bytes: &[u8]) -> String {
    // Reply layout: entry count per channel (2 bytes each, big-endian)
    // followed by bit depth per channel (1 byte each).
    if bytes.len() != 9 {
        return format_hex_dump(bytes);
    }
    let red = u16::from_be_bytes([bytes[0], bytes[1]]);
    let green = u16::from_be_bytes([bytes[2], bytes[3]]);
    let blue = u16::from_be_bytes([bytes[4], bytes[5]]);
    format!(
        "Red: {} entries x {} bits, Green: {} entries x {} bits, Blue: {} entries x {} bits",
        red, bytes[6], green, bytes[7], blue, bytes[8]
    )
}

pub(crate) fn format_spec_version(value: NonTableValue) -> String {
    format!("{}.{}", value.sh, value.sl)
}

pub(crate) fn format_usage_time(value: NonTableValue) -> String {
    // Hours are carried in the low three bytes.
    let hours =
        ((value.ml as u32) << 16) | ((value.sh as u32) << 8) | value.sl as u32;
    format!("Usage time (hours) = {} (0x{:06x})", hours, hours)
}

pub(crate) fn format_audio_volume(value: NonTableValue) -> String {
    match value.sl {
        0x00 => "Fixed (default) level".to_string(),
        0xff => "Mute".to_string(),
        sl => format!("Volume level {}", sl),
    }
}

pub(crate) fn format_color_preset(table: Option<&ValueNameTable>, value: NonTableValue) -> String {
    let tolerance = value.sh & 0x0f;
    let preset = table.and_then(|t| t.lookup(value.sl));
    match (preset, tolerance) {
        (Some(name), 0) => format!("{} (sl=0x{:02x})", name, value.sl),
        (Some(name), t) => format!("{} (sl=0x{:02x}), tolerance {}%", name, value.sl, t),
        (None, _) => format!("Unrecognized color preset (sl=0x{:02x})", value.sl),
    }
}

pub(crate) fn format_horizontal_frequency(value: NonTableValue) -> String {
    let raw = value.raw_u32();
    if raw == 0xffff_ffff {
        "Cannot determine frequency or out of range".to_string()
    } else {
        format!("{:.2} kHz", f64::from(raw) / 1000.0)
    }
}

pub(crate) fn format_vertical_frequency(value: NonTableValue) -> String {
    let raw = value.raw_u32();
    if raw == 0xffff_ffff {
        "Cannot determine frequency or out of range".to_string()
    } else {
        // Value is reported in 0.01 Hz units.
        format!("{:.2} Hz", f64::from(raw) * 0.01)
    }
}

pub(crate) fn format_display_controller(
    table: Option<&ValueNameTable>,
    value: NonTableValue,
) -> String {
    let mfg = table
        .and_then(|t| t.lookup(value.sl))
        .unwrap_or("Unrecognized manufacturer");
    format!(
        "Mfg: {} (sl=0x{:02x}), controller number: mh=0x{:02x}, ml=0x{:02x}, sh=0x{:02x}",
        mfg, value.sl, value.mh, value.ml, value.sh
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous() {
        let value = NonTableValue::from_words(100, 50);
        assert_eq!(
            format_continuous(value),
            "current value =    50, max value =   100"
        );
    }

    #[test]
    fn test_sl_lookup() {
        let table = ValueNameTable::from_pairs(&[(0x01, "Mute"), (0x02, "Unmute")]);
        let hit = NonTableValue::new(0, 0, 0, 0x01);
        assert_eq!(format_sl_lookup(Some(&table), hit), "Mute (sl=0x01)");

        let miss = NonTableValue::new(0, 0, 0, 0x07);
        assert_eq!(
            format_sl_lookup(Some(&table), miss),
            "Unrecognized value (sl=0x07)"
        );
        assert_eq!(
            format_sl_lookup(None, hit),
            "Unrecognized value (sl=0x01)"
        );
    }

    #[test]
    fn test_raw_formatters() {
        let value = NonTableValue::new(0x01, 0x02, 0x03, 0x04);
        assert_eq!(format_raw_sl(value), "sl=0x04");
        assert_eq!(format_raw_sh_sl(value), "sh=0x03, sl=0x04");
        assert_eq!(
            format_debug_bytes(value),
            "mh=0x01, ml=0x02, sh=0x03, sl=0x04"
        );
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(format_hex_dump(&[]), "(empty table value)");
        assert_eq!(format_hex_dump(&[0x0a, 0xff, 0x00]), "3 bytes: 0a ff 00");
    }

    #[test]
    fn test_spec_version() {
        let value = NonTableValue::new(0, 0, 2, 1);
        assert_eq!(format_spec_version(value), "2.1");
    }

    #[test]
    fn test_usage_time() {
        let value = NonTableValue::new(0x00, 0x01, 0x00, 0x10);
        // 0x010010 = 65552 hours
        assert_eq!(
            format_usage_time(value),
            "Usage time (hours) = 65552 (0x010010)"
        );
    }

    #[test]
    fn test_audio_volume_special_values() {
        assert_eq!(
            format_audio_volume(NonTableValue::new(0, 0, 0, 0x00)),
            "Fixed (default) level"
        );
        assert_eq!(
            format_audio_volume(NonTableValue::new(0, 0, 0, 0xff)),
            "Mute"
        );
        assert_eq!(
            format_audio_volume(NonTableValue::new(0, 0, 0, 40)),
            "Volume level 40"
        );
    }

    #[test]
    fn test_frequencies() {
        let value = NonTableValue::new(0x00, 0x01, 0x18, 0x6a);
        // 0x0001186a = 71786 -> 71.79 kHz / 717.86 Hz
        assert_eq!(format_horizontal_frequency(value), "71.79 kHz");
        assert_eq!(format_vertical_frequency(value), "717.86 Hz");

        let unknown = NonTableValue::new(0xff, 0xff, 0xff, 0xff);
        assert_eq!(
            format_horizontal_frequency(unknown),
            "Cannot determine frequency or out of range"
        );
    }

    #[test]
    fn test_color_preset_tolerance() {
        let table = ValueNameTable::from_pairs(&[(0x05, "6500 K")]);
        let value = NonTableValue::new(0, 0, 0x03, 0x05);
        assert_eq!(
            format_color_preset(Some(&table), value),
            "6500 K (sl=0x05), tolerance 3%"
        );
        let exact = NonTableValue::new(0, 0, 0x00, 0x05);
        assert_eq!(
            format_color_preset(Some(&table), exact),
            "6500 K (sl=0x05)"
        );
    }

    #[test]
    fn test_lut_size() {
        let bytes = [0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x08, 0x08, 0x08];
        assert_eq!(
            format_lut_size(&bytes),
            "Red: 256 entries x 8 bits, Green: 256 entries x 8 bits, Blue: 256 entries x 8 bits"
        );
        // Malformed replies fall back to the hex dump.
        assert_eq!(format_lut_size(&[0x01, 0x02]), "2 bytes: 01 02");
        assert_eq!(
            format_table_value(FormatterTag::LutSize, &[0x01, 0x02]),
            "2 bytes: 01 02"
        );
    }

    #[test]
    fn test_formatter_names_are_stable() {
        assert_eq!(FormatterTag::Continuous.name(), "format_continuous");
        assert_eq!(FormatterTag::HexDumpTable.name(), "format_hex_dump");
        assert!(FormatterTag::HexDumpTable.is_table());
        assert!(!FormatterTag::SlLookup.is_table());
    }
}

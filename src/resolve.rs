//! Metadata resolution: what one feature code means for one display.
//!
//! Resolution merges three sources, in priority order: the display's
//! user-defined override record, the built-in registry resolved at the
//! display's MCCS version, and (when requested) a synthesized dummy for
//! codes known to neither.

use log::debug;

use crate::dynamic_features::{DynamicFeatureMetadata, DynamicFeatureRecord};
use crate::error::Error;
use crate::feature_code::FeatureCode;
use crate::flags::FeatureFlags;
use crate::formatters::{format_non_table_value, format_table_value, FormatterTag, NonTableValue};
use crate::registry::{feature_registry, FeatureEntry};
use crate::value_table::ValueNameTable;
use crate::version::MccsVersion;

/// Fully resolved metadata for one (feature code, display) pair.
///
/// Owned by the caller. The value table, if any, is always a fresh copy:
/// the immutable registry and override records are never aliased into
/// caller state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedFeatureMetadata {
    /// The feature code.
    pub code: FeatureCode,
    /// The version resolution ran at (unqueried normalized to unknown).
    pub version: MccsVersion,
    /// Effective flags, provenance bits included.
    pub flags: FeatureFlags,
    /// Display name at the effective version.
    pub name: String,
    /// Registry description, absent for overrides and synthesized
    /// entries.
    pub description: Option<String>,
    /// Value-name table at the effective version, freshly copied.
    pub values: Option<ValueNameTable>,
    /// The formatter chosen for this feature's category.
    pub formatter: FormatterTag,
}

impl ResolvedFeatureMetadata {
    /// Renders raw non-table reply bytes with the attached formatter.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcp_features::{resolve_feature_metadata, FeatureCode, MccsVersion, NonTableValue};
    ///
    /// let meta = resolve_feature_metadata(
    ///     FeatureCode::new(0x10),
    ///     None,
    ///     MccsVersion::V2_0,
    ///     false,
    /// )
    /// .unwrap();
    /// let text = meta.format_non_table_value(NonTableValue::from_words(100, 50));
    /// assert_eq!(text, "current value =    50, max value =   100");
    /// ```
    pub fn format_non_table_value(&self, value: NonTableValue) -> String {
        format_non_table_value(self.formatter, self.values.as_ref(), value)
    }

    /// Renders table reply bytes with the attached formatter.
    pub fn format_table_value(&self, bytes: &[u8]) -> String {
        format_table_value(self.formatter, bytes)
    }

    /// True if the feature's current value can be read.
    pub fn is_readable(&self) -> bool {
        self.flags.is_readable()
    }

    /// True if the feature's value can be written.
    pub fn is_writable(&self) -> bool {
        self.flags.is_writable()
    }

    /// True for table-typed features.
    pub fn is_table(&self) -> bool {
        self.flags.is_table()
    }

    /// True for entries synthesized rather than resolved.
    pub fn is_synthetic(&self) -> bool {
        self.flags.contains(FeatureFlags::SYNTHETIC)
    }
}

/// Resolves metadata for one feature code.
///
/// The override record wins over the registry. A code known to neither
/// fails with [`Error::UnknownFeature`] unless `synthesize_if_unknown` is
/// set, in which case a read-write complex-NC dummy is produced (named
/// "Manufacturer Specific" in the 0xE0-0xFF range, "Unknown feature"
/// below it).
///
/// # Examples
///
/// ```
/// use vcp_features::{resolve_feature_metadata, FeatureCode, MccsVersion};
///
/// let meta = resolve_feature_metadata(
///     FeatureCode::new(0x10),
///     None,
///     MccsVersion::V3_0,
///     false,
/// )
/// .unwrap();
/// assert_eq!(meta.name, "Luminosity");
///
/// let unknown = resolve_feature_metadata(
///     FeatureCode::new(0xe5),
///     None,
///     MccsVersion::V2_0,
///     false,
/// );
/// assert!(unknown.is_err());
/// ```
pub fn resolve_feature_metadata(
    code: FeatureCode,
    override_record: Option<&DynamicFeatureRecord>,
    version: MccsVersion,
    synthesize_if_unknown: bool,
) -> Result<ResolvedFeatureMetadata, Error> {
    let version = version.normalized();

    if let Some(metadata) = override_record.and_then(|record| record.feature(code)) {
        debug!("feature {} resolved from user-defined record", code);
        return Ok(resolve_from_override(metadata, version));
    }

    match feature_registry().lookup(code) {
        Some(entry) => resolve_from_registry(entry, version),
        None if synthesize_if_unknown => Ok(synthesize_unknown(code, version)),
        None => Err(Error::UnknownFeature(code)),
    }
}

fn resolve_from_override(
    metadata: &DynamicFeatureMetadata,
    version: MccsVersion,
) -> ResolvedFeatureMetadata {
    let formatter = formatter_for_flags(metadata.flags, metadata.values.is_some(), None);
    ResolvedFeatureMetadata {
        code: metadata.code,
        version,
        flags: metadata.flags,
        name: metadata.name.clone(),
        description: None,
        values: metadata.values.clone(),
        formatter,
    }
}

fn resolve_from_registry(
    entry: &FeatureEntry,
    version: MccsVersion,
) -> Result<ResolvedFeatureMetadata, Error> {
    let flags = entry.version_sensitive_flags(version)? | entry.global_flags();
    let name = entry
        .version_sensitive_name(version)
        .unwrap_or(entry.description())
        .to_string();
    let values = entry
        .version_sensitive_values(version)
        .map(ValueNameTable::from_pairs);
    let formatter = formatter_for_flags(flags, values.is_some(), Some(entry));
    Ok(ResolvedFeatureMetadata {
        code: entry.code(),
        version,
        flags,
        name,
        description: Some(entry.description().to_string()),
        values,
        formatter,
    })
}

/// Picks the formatter for a feature's semantic category.
///
/// When resolving from the registry, complex categories prefer an
/// entry-specific formatter and fall back to the raw-bytes rendering;
/// overrides have no custom formatters, so their complex categories go
/// straight to the generic SH/SL renderings.
fn formatter_for_flags(
    flags: FeatureFlags,
    has_table: bool,
    entry: Option<&FeatureEntry>,
) -> FormatterTag {
    if flags.contains(FeatureFlags::SIMPLE_NC) {
        if has_table {
            FormatterTag::SlLookup
        } else {
            FormatterTag::RawSl
        }
    } else if flags.intersects(
        FeatureFlags::COMPLEX_NC | FeatureFlags::NC_CONT | FeatureFlags::WO_NC,
    ) {
        match entry.and_then(FeatureEntry::nontable_formatter) {
            Some(custom) => custom,
            None if entry.is_none() && has_table => FormatterTag::ShSlLookup,
            None if entry.is_none() => FormatterTag::RawShSl,
            None => FormatterTag::DebugBytes,
        }
    } else if flags.contains(FeatureFlags::STD_CONT) {
        FormatterTag::Continuous
    } else if flags.contains(FeatureFlags::COMPLEX_CONT) {
        entry
            .and_then(FeatureEntry::nontable_formatter)
            .unwrap_or(FormatterTag::DebugBytes)
    } else if flags.is_table() {
        entry
            .and_then(FeatureEntry::table_formatter)
            .unwrap_or(FormatterTag::HexDumpTable)
    } else {
        FormatterTag::DebugBytes
    }
}

fn synthetic_name(code: FeatureCode) -> &'static str {
    if code.is_manufacturer_specific() {
        "Manufacturer Specific"
    } else {
        "Unknown feature"
    }
}

/// Synthesizes the non-table dummy used when scanning unknown codes.
pub(crate) fn synthesize_unknown(
    code: FeatureCode,
    version: MccsVersion,
) -> ResolvedFeatureMetadata {
    ResolvedFeatureMetadata {
        code,
        version,
        flags: FeatureFlags::RW | FeatureFlags::COMPLEX_NC | FeatureFlags::SYNTHETIC,
        name: synthetic_name(code).to_string(),
        description: None,
        values: None,
        formatter: FormatterTag::DebugBytes,
    }
}

/// Synthesizes the table-typed dummy probed alongside the non-table one
/// during verbose manufacturer-range scans.
pub(crate) fn synthesize_unknown_table(
    code: FeatureCode,
    version: MccsVersion,
) -> ResolvedFeatureMetadata {
    ResolvedFeatureMetadata {
        code,
        version,
        flags: FeatureFlags::RW | FeatureFlags::NORMAL_TABLE | FeatureFlags::SYNTHETIC,
        name: synthetic_name(code).to_string(),
        description: None,
        values: None,
        formatter: FormatterTag::HexDumpTable,
    }
}

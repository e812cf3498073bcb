//! The built-in feature registry: one immutable entry per known VCP
//! feature code, with per-revision metadata rows.

use std::sync::OnceLock;

use crate::error::Error;
use crate::feature_code::FeatureCode;
use crate::feature_codes::build_feature_table;
use crate::flags::{FeatureFlags, FeatureSubsets, SpecGroups};
use crate::formatters::FormatterTag;
use crate::version::{
    select_version_sensitive, select_version_specific, BandRows, MccsVersion, VersionBand,
};

/// One per-revision row of a registry entry.
///
/// Each aspect (name, flags, value table) is independently optional; an
/// aspect left unset falls through to an earlier row during resolution.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VersionRow {
    pub(crate) name: Option<&'static str>,
    pub(crate) flags: FeatureFlags,
    pub(crate) values: Option<&'static [(u8, &'static str)]>,
}

impl VersionRow {
    const UNSET: VersionRow = VersionRow {
        name: None,
        flags: FeatureFlags::empty(),
        values: None,
    };

    fn flags_opt(&self) -> Option<FeatureFlags> {
        if self.flags.is_empty() {
            None
        } else {
            Some(self.flags)
        }
    }
}

/// An immutable registry entry for one feature code.
///
/// Entries are built once, validated, tagged with the persistent-metadata
/// provenance marker, and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct FeatureEntry {
    code: FeatureCode,
    description: &'static str,
    groups: SpecGroups,
    subsets: FeatureSubsets,
    global_flags: FeatureFlags,
    rows: BandRows<VersionRow>,
    nontable_formatter: Option<FormatterTag>,
    table_formatter: Option<FormatterTag>,
}

impl FeatureEntry {
    pub(crate) fn builder(code: u8, description: &'static str) -> FeatureEntryBuilder {
        FeatureEntryBuilder {
            entry: FeatureEntry {
                code: FeatureCode::new(code),
                description,
                groups: SpecGroups::empty(),
                subsets: FeatureSubsets::empty(),
                global_flags: FeatureFlags::empty(),
                rows: [VersionRow::UNSET; 4],
                nontable_formatter: None,
                table_formatter: None,
            },
        }
    }

    /// The feature code this entry describes.
    pub fn code(&self) -> FeatureCode {
        self.code
    }

    /// Free-text description of the feature.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Specification groups the feature belongs to.
    pub fn groups(&self) -> SpecGroups {
        self.groups
    }

    /// Thematic subsets the feature belongs to.
    pub fn subsets(&self) -> FeatureSubsets {
        self.subsets
    }

    /// Cross-version provenance flags (deprecated, persistent-metadata).
    pub fn global_flags(&self) -> FeatureFlags {
        self.global_flags
    }

    /// Entry-specific formatter for complex non-table values, if any.
    pub fn nontable_formatter(&self) -> Option<FormatterTag> {
        self.nontable_formatter
    }

    /// Entry-specific formatter for table values, if any.
    pub fn table_formatter(&self) -> Option<FormatterTag> {
        self.table_formatter
    }

    /// Version-specific flag resolution: no fallback beyond the base row.
    ///
    /// `None` means the entry defines nothing at the requested version —
    /// distinct from the feature being unknown altogether.
    pub fn version_specific_flags(&self, version: MccsVersion) -> Option<FeatureFlags> {
        select_version_specific(&self.rows, version.normalized(), VersionRow::flags_opt)
    }

    /// Version-specific display name.
    pub fn version_specific_name(&self, version: MccsVersion) -> Option<&'static str> {
        select_version_specific(&self.rows, version.normalized(), |row| row.name)
    }

    /// Version-specific value table.
    pub fn version_specific_values(
        &self,
        version: MccsVersion,
    ) -> Option<&'static [(u8, &'static str)]> {
        select_version_specific(&self.rows, version.normalized(), |row| row.values)
    }

    /// Version-sensitive flag resolution.
    ///
    /// Falls back through 2.1, 3.0, 2.2 when the requested version
    /// predates the feature's earliest definition. Finding nothing at all
    /// is an internal consistency violation: every entry must populate at
    /// least one flag row.
    pub fn version_sensitive_flags(&self, version: MccsVersion) -> Result<FeatureFlags, Error> {
        select_version_sensitive(&self.rows, version.normalized(), VersionRow::flags_opt)
            .ok_or_else(|| {
                Error::InternalInconsistency(format!(
                    "feature {}: no flag row populated in any version band",
                    self.code
                ))
            })
    }

    /// Version-sensitive display name. `None` is tolerated.
    pub fn version_sensitive_name(&self, version: MccsVersion) -> Option<&'static str> {
        select_version_sensitive(&self.rows, version.normalized(), |row| row.name)
    }

    /// Version-sensitive value table. `None` is tolerated: not every
    /// feature has enumerated values.
    pub fn version_sensitive_values(
        &self,
        version: MccsVersion,
    ) -> Option<&'static [(u8, &'static str)]> {
        select_version_sensitive(&self.rows, version.normalized(), |row| row.values)
    }

    fn validate(&self) {
        let code = self.code;
        assert!(
            !code.is_manufacturer_specific(),
            "registry entry {} lies in the manufacturer-specific range",
            code
        );
        let mut any_flags = false;
        for band in VersionBand::ALL {
            let row = &self.rows[band.index()];
            if row.flags.is_empty() {
                continue;
            }
            any_flags = true;
            if row.flags.contains(FeatureFlags::DEPRECATED) {
                continue;
            }
            assert!(
                row.flags.access_bit_count() == 1,
                "registry entry {} band {}: expected exactly one access bit, got {:?}",
                code,
                band,
                row.flags
            );
            assert!(
                row.flags.type_bit_count() == 1,
                "registry entry {} band {}: expected exactly one type bit, got {:?}",
                code,
                band,
                row.flags
            );
        }
        assert!(
            any_flags,
            "registry entry {}: no version band defines flags",
            code
        );
    }
}

pub(crate) struct FeatureEntryBuilder {
    entry: FeatureEntry,
}

impl FeatureEntryBuilder {
    pub(crate) fn groups(mut self, groups: SpecGroups) -> Self {
        self.entry.groups = groups;
        self
    }

    pub(crate) fn subsets(mut self, subsets: FeatureSubsets) -> Self {
        self.entry.subsets = subsets;
        self
    }

    pub(crate) fn row(mut self, band: VersionBand, name: &'static str, flags: FeatureFlags) -> Self {
        let row = &mut self.entry.rows[band.index()];
        row.name = Some(name);
        row.flags = flags;
        self
    }

    /// Sets only the name for a band, leaving flags to resolve through
    /// earlier rows.
    pub(crate) fn row_name(mut self, band: VersionBand, name: &'static str) -> Self {
        self.entry.rows[band.index()].name = Some(name);
        self
    }

    pub(crate) fn row_values(
        mut self,
        band: VersionBand,
        values: &'static [(u8, &'static str)],
    ) -> Self {
        self.entry.rows[band.index()].values = Some(values);
        self
    }

    pub(crate) fn formatter(mut self, tag: FormatterTag) -> Self {
        self.entry.nontable_formatter = Some(tag);
        self
    }

    pub(crate) fn table_formatter(mut self, tag: FormatterTag) -> Self {
        self.entry.table_formatter = Some(tag);
        self
    }

    pub(crate) fn build(self) -> FeatureEntry {
        self.entry
    }
}

/// The immutable table of known feature codes.
///
/// Built exactly once per process; read-only (and therefore freely
/// shareable across threads) afterwards.
///
/// # Examples
///
/// ```
/// use vcp_features::{feature_registry, FeatureCode};
///
/// let registry = feature_registry();
/// let entry = registry.lookup(FeatureCode::new(0x10)).unwrap();
/// assert_eq!(entry.description(), "Adjust the brightness of the image");
/// assert!(registry.lookup(FeatureCode::new(0xe5)).is_none());
/// ```
#[derive(Debug)]
pub struct FeatureRegistry {
    entries: Vec<FeatureEntry>,
}

impl FeatureRegistry {
    pub(crate) fn from_entries(mut entries: Vec<FeatureEntry>) -> Self {
        for pair in entries.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "registry entries out of order or duplicated at {}",
                pair[1].code
            );
        }
        for entry in &mut entries {
            entry.validate();
            // Tag every entry as backed by the built-in tables.
            entry.global_flags |= FeatureFlags::PERSISTENT_METADATA;
        }
        Self { entries }
    }

    /// Looks up an entry by exact code match. No synthesis: callers decide
    /// what an absent code means.
    pub fn lookup(&self, code: FeatureCode) -> Option<&FeatureEntry> {
        self.entries
            .binary_search_by_key(&code, |entry| entry.code)
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `index` (ascending code order). Panics if out of range.
    pub fn entry_at(&self, index: usize) -> &FeatureEntry {
        &self.entries[index]
    }

    /// Iterates entries in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.entries.iter()
    }

    /// Finds the entry whose name at `version` matches `name`,
    /// case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcp_features::{feature_registry, MccsVersion};
    ///
    /// let registry = feature_registry();
    /// let entry = registry
    ///     .entry_named("brightness", MccsVersion::V2_0)
    ///     .unwrap();
    /// assert_eq!(entry.code().byte(), 0x10);
    /// ```
    pub fn entry_named(&self, name: &str, version: MccsVersion) -> Option<&FeatureEntry> {
        self.entries.iter().find(|entry| {
            entry
                .version_sensitive_name(version)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }
}

/// Returns the process-wide feature registry, building it on first use.
///
/// The build is an atomic get-or-init; afterwards the registry is
/// immutable and reads take no lock.
pub fn feature_registry() -> &'static FeatureRegistry {
    static REGISTRY: OnceLock<FeatureRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| FeatureRegistry::from_entries(build_feature_table()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_code::MFG_RANGE_START;

    #[test]
    fn test_registry_builds_and_is_ordered() {
        let registry = feature_registry();
        assert!(registry.count() > 100);
        for i in 1..registry.count() {
            assert!(registry.entry_at(i - 1).code() < registry.entry_at(i).code());
        }
    }

    #[test]
    fn test_lookup_exact_match_only() {
        let registry = feature_registry();
        assert!(registry.lookup(FeatureCode::new(0x10)).is_some());
        // Manufacturer range is never present.
        for byte in MFG_RANGE_START..=0xff {
            assert!(registry.lookup(FeatureCode::new(byte)).is_none());
        }
    }

    #[test]
    fn test_every_entry_tagged_persistent() {
        let registry = feature_registry();
        for entry in registry.entries() {
            assert!(entry
                .global_flags()
                .contains(FeatureFlags::PERSISTENT_METADATA));
        }
    }

    #[test]
    fn test_version_specific_rows_are_complete_or_unset() {
        // For every entry and every concrete version: the resolved
        // (flags, name) pair is either complete and well-formed, or the
        // row is genuinely unset at that version.
        let registry = feature_registry();
        let versions = [
            MccsVersion::V2_0,
            MccsVersion::V2_1,
            MccsVersion::V2_2,
            MccsVersion::V3_0,
        ];
        for entry in registry.entries() {
            for version in versions {
                match entry.version_specific_flags(version) {
                    Some(flags) if flags.contains(FeatureFlags::DEPRECATED) => {}
                    Some(flags) => {
                        assert_eq!(
                            flags.access_bit_count(),
                            1,
                            "{} at {}",
                            entry.code(),
                            version
                        );
                        assert_eq!(
                            flags.type_bit_count(),
                            1,
                            "{} at {}",
                            entry.code(),
                            version
                        );
                        let name = entry.version_specific_name(version);
                        assert!(
                            name.is_some_and(|n| !n.is_empty()),
                            "{} at {} has flags but no name",
                            entry.code(),
                            version
                        );
                    }
                    None => {}
                }
            }
        }
    }

    #[test]
    fn test_version_sensitive_flags_never_fail() {
        let registry = feature_registry();
        let versions = [
            MccsVersion::V2_0,
            MccsVersion::V2_1,
            MccsVersion::V2_2,
            MccsVersion::V3_0,
            MccsVersion::UNKNOWN,
            MccsVersion::UNQUERIED,
        ];
        for entry in registry.entries() {
            for version in versions {
                assert!(
                    entry.version_sensitive_flags(version).is_ok(),
                    "{} at {}",
                    entry.code(),
                    version
                );
            }
        }
    }

    #[test]
    fn test_brightness_name_diverges_by_version() {
        let registry = feature_registry();
        let entry = registry.lookup(FeatureCode::new(0x10)).unwrap();
        assert_eq!(entry.version_specific_name(MccsVersion::V2_0), Some("Brightness"));
        assert_eq!(entry.version_specific_name(MccsVersion::V3_0), Some("Luminosity"));
        // Flags do not diverge.
        assert_eq!(
            entry.version_specific_flags(MccsVersion::V2_0),
            entry.version_specific_flags(MccsVersion::V3_0),
        );
    }

    #[test]
    fn test_entry_named_is_case_insensitive() {
        let registry = feature_registry();
        let entry = registry.entry_named("LUMINOSITY", MccsVersion::V3_0).unwrap();
        assert_eq!(entry.code().byte(), 0x10);
        assert!(registry.entry_named("luminosity", MccsVersion::V2_0).is_none());
    }
}

//! Feature-set construction: named or computed collections of resolved
//! metadata, built by iterating candidate codes through the resolver
//! under a selector and an orthogonal filter mask.

use crate::dynamic_features::DynamicFeatureRecord;
use crate::error::Error;
use crate::feature_code::{FeatureCode, MFG_RANGE_START};
use crate::flags::{FeatureFlags, FeatureSetFlags, FeatureSubsets, SpecGroups};
use crate::registry::feature_registry;
use crate::resolve::{
    resolve_feature_metadata, synthesize_unknown_table, ResolvedFeatureMetadata,
};
use crate::version::MccsVersion;

/// Selects which feature codes a set is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FeatureSetSelector {
    /// Every code the registry knows.
    Known,
    /// Probe every possible code 0x00-0xFF, synthesizing the unknown.
    Scan,
    /// Probe only the manufacturer-specific range 0xE0-0xFF.
    ManufacturerRange,
    /// Only the display's user-defined features.
    UserDefined,
    /// Features commonly captured in monitor profiles.
    Profile,
    /// Color adjustment features.
    Color,
    /// Audio features.
    Audio,
    /// Window features.
    Window,
    /// Lookup-table access features (table exclusion disabled).
    Lut,
    /// Television tuner features.
    Tv,
    /// CRT-only features.
    Crt,
    /// DPVL status features.
    Dpvl,
    /// Preset operations (tested against the spec group, not a subset).
    Preset,
    /// Every feature resolving to a table type (exclusion disabled).
    Table,
    /// Every feature resolving to standard continuous.
    StandardContinuous,
    /// Every feature resolving to complex continuous.
    ComplexContinuous,
    /// Every feature resolving to simple non-continuous.
    SimpleNonContinuous,
    /// Every feature resolving to complex non-continuous.
    ComplexNonContinuous,
    /// Every feature resolving read-only.
    ReadOnly,
    /// Every feature resolving write-only.
    WriteOnly,
    /// Every feature resolving read-write.
    ReadWrite,
    /// Exactly these codes, in this order.
    Explicit(Vec<FeatureCode>),
}

impl FeatureSetSelector {
    /// The thematic subset mask this selector tests, if it is a
    /// subset-based selector.
    fn subset_mask(&self) -> Option<FeatureSubsets> {
        match self {
            FeatureSetSelector::Profile => Some(FeatureSubsets::PROFILE),
            FeatureSetSelector::Color => Some(FeatureSubsets::COLOR),
            FeatureSetSelector::Audio => Some(FeatureSubsets::AUDIO),
            FeatureSetSelector::Window => Some(FeatureSubsets::WINDOW),
            FeatureSetSelector::Lut => Some(FeatureSubsets::LUT),
            FeatureSetSelector::Tv => Some(FeatureSubsets::TV),
            FeatureSetSelector::Crt => Some(FeatureSubsets::CRT),
            FeatureSetSelector::Dpvl => Some(FeatureSubsets::DPVL),
            _ => None,
        }
    }

    /// True for selectors that force table features in and disable the
    /// usual table exclusion.
    fn forces_tables(&self) -> bool {
        matches!(self, FeatureSetSelector::Table | FeatureSetSelector::Lut)
    }

    /// The resolved-flag predicate of a type-based selector.
    ///
    /// Type-based selectors test the resolved version flags; thematic
    /// selectors test registry masks instead. The two axes are distinct.
    fn type_predicate(&self, flags: FeatureFlags) -> Option<bool> {
        match self {
            FeatureSetSelector::StandardContinuous => {
                Some(flags.contains(FeatureFlags::STD_CONT))
            }
            FeatureSetSelector::ComplexContinuous => {
                Some(flags.contains(FeatureFlags::COMPLEX_CONT))
            }
            FeatureSetSelector::SimpleNonContinuous => {
                Some(flags.contains(FeatureFlags::SIMPLE_NC))
            }
            FeatureSetSelector::ComplexNonContinuous => {
                Some(flags.contains(FeatureFlags::COMPLEX_NC))
            }
            FeatureSetSelector::ReadOnly => Some(flags.contains(FeatureFlags::RO)),
            FeatureSetSelector::WriteOnly => Some(flags.contains(FeatureFlags::WO)),
            FeatureSetSelector::ReadWrite => Some(flags.contains(FeatureFlags::RW)),
            FeatureSetSelector::Table => Some(flags.is_table()),
            _ => None,
        }
    }
}

/// An ordered collection of resolved metadata plus the selector that
/// produced it.
///
/// Built fresh per request and owned by the caller; nothing here is
/// cached.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureSet {
    selector: FeatureSetSelector,
    members: Vec<ResolvedFeatureMetadata>,
}

impl FeatureSet {
    /// The selector this set was built from.
    pub fn selector(&self) -> &FeatureSetSelector {
        &self.selector
    }

    /// Members in set order.
    pub fn members(&self) -> &[ResolvedFeatureMetadata] {
        &self.members
    }

    /// Consumes the set, returning its members.
    pub fn into_members(self) -> Vec<ResolvedFeatureMetadata> {
        self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates member feature codes in set order.
    pub fn codes(&self) -> impl Iterator<Item = FeatureCode> + '_ {
        self.members.iter().map(|m| m.code)
    }

    /// Finds the member for a code, if present.
    pub fn member(&self, code: FeatureCode) -> Option<&ResolvedFeatureMetadata> {
        self.members.iter().find(|m| m.code == code)
    }
}

/// Builds a feature set.
///
/// Scanning and thematic selectors return members in ascending code
/// order; [`FeatureSetSelector::Explicit`] preserves the caller's order.
/// `filter` narrows the result orthogonally as a final pass.
///
/// # Examples
///
/// ```
/// use vcp_features::{
///     build_feature_set, FeatureSetFlags, FeatureSetSelector, MccsVersion,
/// };
///
/// let colors = build_feature_set(
///     FeatureSetSelector::Color,
///     None,
///     MccsVersion::V2_0,
///     FeatureSetFlags::empty(),
/// )
/// .unwrap();
/// assert!(colors.codes().any(|code| code.byte() == 0x10));
/// ```
pub fn build_feature_set(
    selector: FeatureSetSelector,
    override_record: Option<&DynamicFeatureRecord>,
    version: MccsVersion,
    filter: FeatureSetFlags,
) -> Result<FeatureSet, Error> {
    let mut members = Vec::new();

    match &selector {
        FeatureSetSelector::UserDefined => {
            if let Some(record) = override_record {
                for feature in record.features() {
                    members.push(resolve_feature_metadata(
                        feature.code,
                        override_record,
                        version,
                        false,
                    )?);
                }
            }
        }
        FeatureSetSelector::Scan => {
            for byte in 0x00..=0xffu8 {
                let metadata =
                    resolve_feature_metadata(FeatureCode::new(byte), override_record, version, true)?;
                if metadata.is_readable() {
                    members.push(metadata);
                }
            }
        }
        FeatureSetSelector::ManufacturerRange => {
            let probe_tables = filter.contains(FeatureSetFlags::VERBOSE)
                && !filter.contains(FeatureSetFlags::EXCLUDE_TABLES);
            for byte in MFG_RANGE_START..=0xffu8 {
                let code = FeatureCode::new(byte);
                let metadata = resolve_feature_metadata(code, override_record, version, true)?;
                let synthetic = metadata.is_synthetic();
                if metadata.is_readable() {
                    members.push(metadata);
                }
                // Probe both interpretations of an unknown code: the
                // non-table dummy and a table-typed dummy.
                if probe_tables && synthetic {
                    members.push(synthesize_unknown_table(code, version.normalized()));
                }
            }
        }
        FeatureSetSelector::Explicit(codes) => {
            let synthesize = filter.contains(FeatureSetFlags::FORCE_SYNTHESIS);
            for code in codes {
                members.push(resolve_feature_metadata(
                    *code,
                    override_record,
                    version,
                    synthesize,
                )?);
            }
        }
        _ => {
            let registry = feature_registry();
            for byte in 0x00..=0xffu8 {
                let code = FeatureCode::new(byte);
                let Ok(metadata) =
                    resolve_feature_metadata(code, override_record, version, false)
                else {
                    continue;
                };
                let included = if let Some(mask) = selector.subset_mask() {
                    registry
                        .lookup(code)
                        .is_some_and(|entry| entry.subsets().intersects(mask))
                } else if let Some(matched) = selector.type_predicate(metadata.flags) {
                    matched
                } else {
                    match &selector {
                        FeatureSetSelector::Known => true,
                        FeatureSetSelector::Preset => registry
                            .lookup(code)
                            .is_some_and(|entry| entry.groups().contains(SpecGroups::PRESET)),
                        _ => unreachable!("selector handled above"),
                    }
                };
                if !included {
                    continue;
                }
                if metadata.is_table()
                    && !selector.forces_tables()
                    && !filter.contains(FeatureSetFlags::INCLUDE_TABLES)
                {
                    continue;
                }
                members.push(metadata);
            }
        }
    }

    apply_filter(&mut members, filter);

    Ok(FeatureSet { selector, members })
}

/// The final orthogonal filter pass.
fn apply_filter(members: &mut Vec<ResolvedFeatureMetadata>, filter: FeatureSetFlags) {
    if filter.contains(FeatureSetFlags::EXCLUDE_TABLES) {
        members.retain(|m| !m.is_table());
    }
    if filter.contains(FeatureSetFlags::READABLE_ONLY) {
        members.retain(|m| m.is_readable());
    }
    if filter.contains(FeatureSetFlags::RO_ONLY) {
        members.retain(|m| m.flags.contains(FeatureFlags::RO));
    }
    if filter.contains(FeatureSetFlags::WO_ONLY) {
        members.retain(|m| m.flags.contains(FeatureFlags::WO));
    }
    if filter.contains(FeatureSetFlags::RW_ONLY) {
        members.retain(|m| m.flags.contains(FeatureFlags::RW));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic_features::{parse_dynamic_feature_record, MonitorModelKey};
    use crate::registry::feature_registry;

    fn empty_filter() -> FeatureSetFlags {
        FeatureSetFlags::empty()
    }

    #[test]
    fn test_scan_covers_every_code() {
        let set = build_feature_set(
            FeatureSetSelector::Scan,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();

        // Every code resolves (real or synthetic); the members are
        // exactly the readable ones.
        let registry = feature_registry();
        let mut expected = 0usize;
        for byte in 0x00..=0xffu8 {
            let readable = match registry.lookup(FeatureCode::new(byte)) {
                Some(entry) => entry
                    .version_sensitive_flags(MccsVersion::V2_0)
                    .unwrap()
                    .is_readable(),
                // Synthesized dummies are read-write.
                None => true,
            };
            if readable {
                expected += 1;
            }
        }
        assert_eq!(set.len(), expected);

        // Ascending order.
        let codes: Vec<u8> = set.codes().map(|c| c.byte()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);

        // The manufacturer range is fully present, synthesized.
        for byte in MFG_RANGE_START..=0xff {
            let member = set.member(FeatureCode::new(byte)).unwrap();
            assert!(member.is_synthetic());
        }
    }

    #[test]
    fn test_manufacturer_range_verbose_probes_both_interpretations() {
        let set = build_feature_set(
            FeatureSetSelector::ManufacturerRange,
            None,
            MccsVersion::V2_0,
            FeatureSetFlags::VERBOSE,
        )
        .unwrap();
        // 32 codes, each present twice: NC dummy plus table dummy.
        assert_eq!(set.len(), 64);
        for byte in MFG_RANGE_START..=0xff {
            let code = FeatureCode::new(byte);
            let both: Vec<_> = set.members().iter().filter(|m| m.code == code).collect();
            assert_eq!(both.len(), 2);
            assert!(both.iter().any(|m| !m.is_table()));
            assert!(both.iter().any(|m| m.is_table()));
        }
    }

    #[test]
    fn test_manufacturer_range_quiet_probes_once() {
        let set = build_feature_set(
            FeatureSetSelector::ManufacturerRange,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        assert_eq!(set.len(), 32);
        assert!(set.members().iter().all(|m| !m.is_table()));
    }

    #[test]
    fn test_known_excludes_tables_by_default() {
        let set = build_feature_set(
            FeatureSetSelector::Known,
            None,
            MccsVersion::V3_0,
            empty_filter(),
        )
        .unwrap();
        assert!(!set.is_empty());
        assert!(set.members().iter().all(|m| !m.is_table()));

        // Explicitly requesting tables brings them back.
        let with_tables = build_feature_set(
            FeatureSetSelector::Known,
            None,
            MccsVersion::V3_0,
            FeatureSetFlags::INCLUDE_TABLES,
        )
        .unwrap();
        assert!(with_tables.len() > set.len());
        assert!(with_tables.members().iter().any(|m| m.is_table()));
    }

    #[test]
    fn test_known_with_exclude_tables_has_no_table_members() {
        let set = build_feature_set(
            FeatureSetSelector::Known,
            None,
            MccsVersion::V3_0,
            FeatureSetFlags::EXCLUDE_TABLES,
        )
        .unwrap();
        assert!(set.members().iter().all(|m| {
            !m.flags.contains(FeatureFlags::NORMAL_TABLE)
                && !m.flags.contains(FeatureFlags::WO_TABLE)
        }));
    }

    #[test]
    fn test_lut_selector_force_includes_tables() {
        let set = build_feature_set(
            FeatureSetSelector::Lut,
            None,
            MccsVersion::V3_0,
            empty_filter(),
        )
        .unwrap();
        let codes: Vec<u8> = set.codes().map(|c| c.byte()).collect();
        assert_eq!(codes, vec![0x73, 0x74, 0x75]);
        assert!(set.members().iter().all(|m| m.is_table()));
    }

    #[test]
    fn test_color_subset_tests_registry_mask_not_type() {
        let set = build_feature_set(
            FeatureSetSelector::Color,
            None,
            MccsVersion::V2_2,
            empty_filter(),
        )
        .unwrap();
        let registry = feature_registry();
        assert!(!set.is_empty());
        for member in set.members() {
            let entry = registry.lookup(member.code).unwrap();
            assert!(entry.subsets().contains(FeatureSubsets::COLOR));
        }
        // Mixed value types appear: the subset axis is independent of the
        // type axis.
        assert!(set.members().iter().any(|m| m.flags.is_continuous()));
        assert!(set
            .members()
            .iter()
            .any(|m| m.flags.contains(FeatureFlags::SIMPLE_NC)));
    }

    #[test]
    fn test_type_selector_tests_resolved_flags() {
        let set = build_feature_set(
            FeatureSetSelector::SimpleNonContinuous,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        assert!(!set.is_empty());
        assert!(set
            .members()
            .iter()
            .all(|m| m.flags.contains(FeatureFlags::SIMPLE_NC)));

        // 0x60 is simple NC at 2.0 but a table feature at 3.0: the same
        // selector must reflect the resolved version.
        assert!(set.codes().any(|c| c.byte() == 0x60));
        let at_v30 = build_feature_set(
            FeatureSetSelector::SimpleNonContinuous,
            None,
            MccsVersion::V3_0,
            empty_filter(),
        )
        .unwrap();
        assert!(!at_v30.codes().any(|c| c.byte() == 0x60));
    }

    #[test]
    fn test_write_only_selector() {
        let set = build_feature_set(
            FeatureSetSelector::WriteOnly,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        assert!(set.codes().any(|c| c.byte() == 0x01));
        assert!(set
            .members()
            .iter()
            .all(|m| m.flags.contains(FeatureFlags::WO)));
    }

    #[test]
    fn test_explicit_list_preserves_order_and_errors() {
        let codes = vec![
            FeatureCode::new(0xd6),
            FeatureCode::new(0x10),
            FeatureCode::new(0x60),
        ];
        let set = build_feature_set(
            FeatureSetSelector::Explicit(codes.clone()),
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        let got: Vec<FeatureCode> = set.codes().collect();
        assert_eq!(got, codes);

        // Unknown code without forced synthesis propagates the error.
        let err = build_feature_set(
            FeatureSetSelector::Explicit(vec![FeatureCode::new(0xe5)]),
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownFeature(_)));

        // With forced synthesis it succeeds.
        let set = build_feature_set(
            FeatureSetSelector::Explicit(vec![FeatureCode::new(0xe5)]),
            None,
            MccsVersion::V2_0,
            FeatureSetFlags::FORCE_SYNTHESIS,
        )
        .unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.members()[0].is_synthetic());
    }

    #[test]
    fn test_user_defined_selector() {
        let key = MonitorModelKey::new("ACI", "VG248", 1427);
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xe0 Picture mode
ATTRS RW NC
VALUE 0x00 Standard
FEATURE_CODE 0xe1 Game mode
ATTRS RO C
";
        let record = parse_dynamic_feature_record(text.lines(), &key).unwrap();

        let set = build_feature_set(
            FeatureSetSelector::UserDefined,
            Some(&record),
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set
            .members()
            .iter()
            .all(|m| m.flags.contains(FeatureFlags::USER_DEFINED)));

        // No record: empty result, not an error.
        let empty = build_feature_set(
            FeatureSetSelector::UserDefined,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_filter_flags_narrow_orthogonally() {
        let read_only = build_feature_set(
            FeatureSetSelector::Known,
            None,
            MccsVersion::V2_0,
            FeatureSetFlags::RO_ONLY,
        )
        .unwrap();
        assert!(!read_only.is_empty());
        assert!(read_only
            .members()
            .iter()
            .all(|m| m.flags.contains(FeatureFlags::RO)));

        let readable_scan = build_feature_set(
            FeatureSetSelector::Scan,
            None,
            MccsVersion::V2_0,
            FeatureSetFlags::READABLE_ONLY,
        )
        .unwrap();
        assert!(readable_scan.members().iter().all(|m| m.is_readable()));
    }

    #[test]
    fn test_preset_selector_tests_spec_group() {
        let set = build_feature_set(
            FeatureSetSelector::Preset,
            None,
            MccsVersion::V2_0,
            empty_filter(),
        )
        .unwrap();
        let registry = feature_registry();
        assert!(!set.is_empty());
        for member in set.members() {
            let entry = registry.lookup(member.code).unwrap();
            assert!(entry.groups().contains(SpecGroups::PRESET));
        }
    }
}

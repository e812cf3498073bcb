//! Feature flag bitmasks: access mode, value type, provenance, spec
//! groups, thematic subsets, and feature-set filters.

use bitflags::bitflags;

bitflags! {
    /// Flags describing a feature at one resolved specification version.
    ///
    /// Three orthogonal axes share the mask. For a live (non-deprecated)
    /// feature exactly one access bit and exactly one type bit are set;
    /// provenance bits may combine freely with the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcp_features::FeatureFlags;
    ///
    /// let flags = FeatureFlags::RW | FeatureFlags::STD_CONT;
    /// assert!(flags.is_readable());
    /// assert!(flags.is_continuous());
    /// assert!(!flags.is_table());
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u32 {
        /// Read-only access.
        const RO = 0x0001;
        /// Write-only access.
        const WO = 0x0002;
        /// Read-write access.
        const RW = 0x0004;

        /// Standard continuous value (0..max range, no interpretation).
        const STD_CONT = 0x0008;
        /// Continuous value requiring interpretation.
        const COMPLEX_CONT = 0x0010;
        /// Non-continuous value fully described by an SL lookup table.
        const SIMPLE_NC = 0x0020;
        /// Non-continuous value requiring interpretation beyond SL lookup.
        const COMPLEX_NC = 0x0040;
        /// Non-continuous value with a continuous sub-range.
        const NC_CONT = 0x0080;
        /// Write-only non-continuous value.
        const WO_NC = 0x0100;
        /// Normal (readable) table value.
        const NORMAL_TABLE = 0x0200;
        /// Write-only table value.
        const WO_TABLE = 0x0400;

        /// Removed or superseded at the resolved version.
        const DEPRECATED = 0x01_0000;
        /// Generated on demand, not authoritative.
        const SYNTHETIC = 0x02_0000;
        /// Supplied by a user-defined feature file.
        const USER_DEFINED = 0x04_0000;
        /// Backed by the built-in registry.
        const PERSISTENT_METADATA = 0x08_0000;
    }
}

impl FeatureFlags {
    /// Mask of the access-mode bits.
    pub const ACCESS_MASK: FeatureFlags =
        FeatureFlags::RO.union(FeatureFlags::WO).union(FeatureFlags::RW);

    /// Mask of the value-type bits.
    pub const TYPE_MASK: FeatureFlags = FeatureFlags::STD_CONT
        .union(FeatureFlags::COMPLEX_CONT)
        .union(FeatureFlags::SIMPLE_NC)
        .union(FeatureFlags::COMPLEX_NC)
        .union(FeatureFlags::NC_CONT)
        .union(FeatureFlags::WO_NC)
        .union(FeatureFlags::NORMAL_TABLE)
        .union(FeatureFlags::WO_TABLE);

    /// Mask of the table-type bits.
    pub const TABLE_MASK: FeatureFlags =
        FeatureFlags::NORMAL_TABLE.union(FeatureFlags::WO_TABLE);

    /// Mask of the continuous-type bits.
    pub const CONT_MASK: FeatureFlags =
        FeatureFlags::STD_CONT.union(FeatureFlags::COMPLEX_CONT);

    /// Mask of the non-continuous-type bits.
    pub const NC_MASK: FeatureFlags = FeatureFlags::SIMPLE_NC
        .union(FeatureFlags::COMPLEX_NC)
        .union(FeatureFlags::NC_CONT)
        .union(FeatureFlags::WO_NC);

    /// True if the feature's current value can be read.
    pub fn is_readable(self) -> bool {
        self.intersects(Self::RO | Self::RW)
    }

    /// True if the feature's value can be written.
    pub fn is_writable(self) -> bool {
        self.intersects(Self::WO | Self::RW)
    }

    /// True for either table type.
    pub fn is_table(self) -> bool {
        self.intersects(Self::TABLE_MASK)
    }

    /// True for either continuous type.
    pub fn is_continuous(self) -> bool {
        self.intersects(Self::CONT_MASK)
    }

    /// True for any non-continuous type.
    pub fn is_non_continuous(self) -> bool {
        self.intersects(Self::NC_MASK)
    }

    /// Number of access bits set.
    pub fn access_bit_count(self) -> u32 {
        self.intersection(Self::ACCESS_MASK).bits().count_ones()
    }

    /// Number of type bits set.
    pub fn type_bit_count(self) -> u32 {
        self.intersection(Self::TYPE_MASK).bits().count_ones()
    }
}

bitflags! {
    /// MCCS specification group a feature belongs to.
    ///
    /// Groups come from the specification's own chapter structure and are
    /// independent of the thematic [`FeatureSubsets`] used for filtering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SpecGroups: u16 {
        /// Preset operations (restore defaults, save/restore settings).
        const PRESET = 0x0001;
        /// Image adjustment.
        const IMAGE = 0x0002;
        /// Display geometry.
        const GEOMETRY = 0x0004;
        /// Miscellaneous functions.
        const MISC = 0x0008;
        /// Control functions.
        const CONTROL = 0x0010;
        /// Audio functions.
        const AUDIO = 0x0020;
        /// Digital Packet Video Link.
        const DPVL = 0x0040;
        /// Window operations.
        const WINDOW = 0x0080;
        /// Manufacturer-specific.
        const MFG = 0x0100;
    }
}

bitflags! {
    /// Thematic groupings used for feature-set filtering.
    ///
    /// A feature may belong to several subsets; subsets cut across the
    /// specification groups.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FeatureSubsets: u16 {
        /// Features commonly captured in monitor profiles.
        const PROFILE = 0x0001;
        /// Color adjustment.
        const COLOR = 0x0002;
        /// Lookup-table access.
        const LUT = 0x0004;
        /// CRT-only geometry and focus.
        const CRT = 0x0008;
        /// Television tuner controls.
        const TV = 0x0010;
        /// Audio controls.
        const AUDIO = 0x0020;
        /// Window controls.
        const WINDOW = 0x0040;
        /// Digital Packet Video Link status.
        const DPVL = 0x0080;
    }
}

bitflags! {
    /// Orthogonal filters applied during feature-set construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FeatureSetFlags: u16 {
        /// Drop table-typed features in the final filter pass.
        const EXCLUDE_TABLES = 0x0001;
        /// Request table-typed features from selectors that would
        /// otherwise skip them.
        const INCLUDE_TABLES = 0x0002;
        /// Keep only readable features.
        const READABLE_ONLY = 0x0004;
        /// Keep only read-only features.
        const RO_ONLY = 0x0008;
        /// Keep only write-only features.
        const WO_ONLY = 0x0010;
        /// Keep only read-write features.
        const RW_ONLY = 0x0020;
        /// Verbose scanning: probe both interpretations of
        /// manufacturer-range codes.
        const VERBOSE = 0x0040;
        /// Synthesize metadata for unknown codes in explicit lists.
        const FORCE_SYNTHESIS = 0x0080;
    }
}

fn collect_names<T: Copy>(
    value: T,
    pairs: &[(T, &'static str)],
    contains: impl Fn(T, T) -> bool,
) -> Vec<&'static str> {
    pairs
        .iter()
        .filter(|(bit, _)| contains(value, *bit))
        .map(|(_, name)| *name)
        .collect()
}

impl SpecGroups {
    /// Names of every group set in this mask, in specification order.
    pub fn names(self) -> Vec<&'static str> {
        collect_names(
            self,
            &[
                (SpecGroups::PRESET, "Preset"),
                (SpecGroups::IMAGE, "Image"),
                (SpecGroups::GEOMETRY, "Geometry"),
                (SpecGroups::MISC, "Miscellaneous"),
                (SpecGroups::CONTROL, "Control"),
                (SpecGroups::AUDIO, "Audio"),
                (SpecGroups::DPVL, "DPVL"),
                (SpecGroups::WINDOW, "Window"),
                (SpecGroups::MFG, "Manufacturer specific"),
            ],
            |v, bit| v.contains(bit),
        )
    }
}

impl FeatureSubsets {
    /// Names of every subset set in this mask.
    pub fn names(self) -> Vec<&'static str> {
        collect_names(
            self,
            &[
                (FeatureSubsets::PROFILE, "Profile"),
                (FeatureSubsets::COLOR, "Color"),
                (FeatureSubsets::LUT, "LUT"),
                (FeatureSubsets::CRT, "CRT"),
                (FeatureSubsets::TV, "TV"),
                (FeatureSubsets::AUDIO, "Audio"),
                (FeatureSubsets::WINDOW, "Window"),
                (FeatureSubsets::DPVL, "DPVL"),
            ],
            |v, bit| v.contains(bit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_predicates() {
        assert!(FeatureFlags::RO.is_readable());
        assert!(FeatureFlags::RW.is_readable());
        assert!(!FeatureFlags::WO.is_readable());
        assert!(FeatureFlags::WO.is_writable());
        assert!(FeatureFlags::RW.is_writable());
        assert!(!FeatureFlags::RO.is_writable());
    }

    #[test]
    fn test_type_predicates() {
        assert!(FeatureFlags::NORMAL_TABLE.is_table());
        assert!(FeatureFlags::WO_TABLE.is_table());
        assert!(FeatureFlags::STD_CONT.is_continuous());
        assert!(FeatureFlags::COMPLEX_CONT.is_continuous());
        assert!(FeatureFlags::SIMPLE_NC.is_non_continuous());
        assert!(FeatureFlags::WO_NC.is_non_continuous());
        assert!(!FeatureFlags::NORMAL_TABLE.is_continuous());
    }

    #[test]
    fn test_bit_counts() {
        let well_formed = FeatureFlags::RW | FeatureFlags::STD_CONT;
        assert_eq!(well_formed.access_bit_count(), 1);
        assert_eq!(well_formed.type_bit_count(), 1);

        // The forced-RW normalization of user-defined features can leave
        // two access bits set.
        let forced = FeatureFlags::RO | FeatureFlags::RW | FeatureFlags::SIMPLE_NC;
        assert_eq!(forced.access_bit_count(), 2);
    }

    #[test]
    fn test_provenance_does_not_affect_counts() {
        let flags = FeatureFlags::RW
            | FeatureFlags::SIMPLE_NC
            | FeatureFlags::USER_DEFINED
            | FeatureFlags::PERSISTENT_METADATA;
        assert_eq!(flags.access_bit_count(), 1);
        assert_eq!(flags.type_bit_count(), 1);
    }

    #[test]
    fn test_group_names() {
        let groups = SpecGroups::IMAGE | SpecGroups::AUDIO;
        assert_eq!(groups.names(), vec!["Image", "Audio"]);
    }

    #[test]
    fn test_subset_names() {
        let subsets = FeatureSubsets::PROFILE | FeatureSubsets::COLOR;
        assert_eq!(subsets.names(), vec!["Profile", "Color"]);
    }
}

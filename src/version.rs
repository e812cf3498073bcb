//! MCCS specification versions and version-row selection.
//!
//! Four revisions of the MCCS specification matter for feature metadata:
//! 2.0, 2.1, 3.0, and 2.2 (in chronological order of publication — 2.2
//! postdates 3.0). A registry entry carries up to four per-revision rows;
//! the selection functions here pick the row that applies to the version a
//! display actually reports.

use std::fmt;

/// An MCCS specification version as reported by a display.
///
/// Two sentinel values exist alongside the concrete revisions:
/// [`MccsVersion::UNKNOWN`] for a display whose version query failed, and
/// [`MccsVersion::UNQUERIED`] for a display that has not been asked yet.
///
/// # Examples
///
/// ```
/// use vcp_features::MccsVersion;
///
/// let v = MccsVersion::parse("2.1").unwrap();
/// assert_eq!(v, MccsVersion::V2_1);
/// assert_eq!(v.to_string(), "2.1");
/// assert!(MccsVersion::parse("0.0").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MccsVersion {
    /// Major revision number.
    pub major: u8,
    /// Minor revision number.
    pub minor: u8,
}

impl MccsVersion {
    /// MCCS 2.0.
    pub const V2_0: MccsVersion = MccsVersion::new(2, 0);
    /// MCCS 2.1.
    pub const V2_1: MccsVersion = MccsVersion::new(2, 1);
    /// MCCS 2.2.
    pub const V2_2: MccsVersion = MccsVersion::new(2, 2);
    /// MCCS 3.0.
    pub const V3_0: MccsVersion = MccsVersion::new(3, 0);
    /// The version query failed or returned nothing usable.
    pub const UNKNOWN: MccsVersion = MccsVersion::new(0, 0);
    /// The display has not been asked for its version yet.
    pub const UNQUERIED: MccsVersion = MccsVersion::new(0xff, 0xff);

    /// Creates a version value.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns true for the unknown sentinel.
    pub const fn is_unknown(self) -> bool {
        self.major == 0 && self.minor == 0
    }

    /// Returns true for the unqueried sentinel.
    pub const fn is_unqueried(self) -> bool {
        self.major == 0xff && self.minor == 0xff
    }

    /// Maps the unqueried sentinel to [`MccsVersion::UNKNOWN`].
    ///
    /// Row selection treats an unknown version as the 2.0 base; without
    /// this step the 255.255 sentinel would satisfy the `major >= 3` test
    /// and silently select 3.0 rows.
    pub const fn normalized(self) -> Self {
        if self.is_unqueried() { Self::UNKNOWN } else { self }
    }

    /// Parses a `"<major>.<minor>"` version string.
    ///
    /// Returns `None` for malformed input and for strings that denote the
    /// unknown or unqueried sentinels; user-defined feature files must
    /// declare a concrete version.
    pub fn parse(s: &str) -> Option<Self> {
        let (major, minor) = s.trim().split_once('.')?;
        let parsed = Self::new(major.parse().ok()?, minor.parse().ok()?);
        if parsed.is_unknown() || parsed.is_unqueried() {
            None
        } else {
            Some(parsed)
        }
    }
}

impl fmt::Display for MccsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "Unknown")
        } else if self.is_unqueried() {
            write!(f, "Unqueried")
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

/// The four concrete MCCS revisions a registry entry can describe.
///
/// This is the key type of per-entry row storage, replacing positional
/// per-version fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VersionBand {
    /// MCCS 2.0.
    V2_0,
    /// MCCS 2.1.
    V2_1,
    /// MCCS 2.2.
    V2_2,
    /// MCCS 3.0.
    V3_0,
}

impl VersionBand {
    /// All bands, in ascending version order.
    pub const ALL: [VersionBand; 4] = [
        VersionBand::V2_0,
        VersionBand::V2_1,
        VersionBand::V2_2,
        VersionBand::V3_0,
    ];

    /// Index of this band into per-entry row storage.
    pub const fn index(self) -> usize {
        match self {
            VersionBand::V2_0 => 0,
            VersionBand::V2_1 => 1,
            VersionBand::V2_2 => 2,
            VersionBand::V3_0 => 3,
        }
    }

    /// The version value this band describes.
    pub const fn version(self) -> MccsVersion {
        match self {
            VersionBand::V2_0 => MccsVersion::V2_0,
            VersionBand::V2_1 => MccsVersion::V2_1,
            VersionBand::V2_2 => MccsVersion::V2_2,
            VersionBand::V3_0 => MccsVersion::V3_0,
        }
    }
}

impl fmt::Display for VersionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())
    }
}

/// Per-band row storage, indexed by [`VersionBand::index`].
pub(crate) type BandRows<R> = [R; 4];

/// Fallback order for version-sensitive selection.
///
/// 2.0 is deliberately absent: the version-specific pass has already
/// consulted the base row before fallback begins. The order is otherwise
/// chronological (2.1, then 3.0, then 2.2) and is preserved exactly;
/// reordering it would change results for displays reporting pre-2.1
/// versions for features first defined in 2.1 or later.
pub(crate) const SENSITIVE_FALLBACK: [VersionBand; 3] =
    [VersionBand::V2_1, VersionBand::V3_0, VersionBand::V2_2];

/// Version-specific selection: picks the row whose applicability threshold
/// is the highest one not exceeding `version`, per aspect.
///
/// The extractor returns `None` for an unset aspect, letting flags, names,
/// and value tables fall through to earlier rows independently.
pub(crate) fn select_version_specific<R, T>(
    rows: &BandRows<R>,
    version: MccsVersion,
    extract: impl Fn(&R) -> Option<T>,
) -> Option<T> {
    let mut result = None;
    if version.major >= 3 {
        result = extract(&rows[VersionBand::V3_0.index()]);
    } else if version.major == 2 && version.minor >= 2 {
        result = extract(&rows[VersionBand::V2_2.index()]);
    }
    if result.is_none() && (version.major >= 3 || (version.major == 2 && version.minor >= 1)) {
        result = extract(&rows[VersionBand::V2_1.index()]);
    }
    if result.is_none() {
        result = extract(&rows[VersionBand::V2_0.index()]);
    }
    result
}

/// Version-sensitive selection: version-specific first, then the fixed
/// fallback order until some row yields the aspect.
///
/// Used whenever the caller wants *some* answer even if the requested
/// version predates the feature's earliest definition, e.g. exhaustive
/// scanning.
pub(crate) fn select_version_sensitive<R, T>(
    rows: &BandRows<R>,
    version: MccsVersion,
    extract: impl Fn(&R) -> Option<T>,
) -> Option<T> {
    if let Some(found) = select_version_specific(rows, version, &extract) {
        return Some(found);
    }
    SENSITIVE_FALLBACK
        .iter()
        .find_map(|band| extract(&rows[band.index()]))
}

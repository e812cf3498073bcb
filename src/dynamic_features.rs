//! User-defined (dynamic) feature definitions.
//!
//! A monitor model can override or extend the built-in registry through a
//! small line-oriented definition language stored in a `.mccs` file named
//! after the model. Parsing accumulates every line-level error rather than
//! stopping at the first; a file that fails to parse yields a placeholder
//! record marked "confirmed absent" so the lookup is cached, not retried.
//!
//! # Definition format
//!
//! ```text
//! * Comment lines start with '*' or '#'; blank lines are ignored.
//! MFG_ID ACI
//! MODEL VG248
//! PRODUCT_CODE 1427
//! MCCS_VERSION 2.1
//!
//! FEATURE_CODE 0xe0 Picture mode
//!   ATTRS RW NC
//!   VALUE 0x00 Standard
//!   VALUE 0x01 Cinema
//! ```
//!
//! Keywords are case-sensitive; hex tokens are not.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::error::{Error, LineError};
use crate::feature_code::{parse_hex_byte, FeatureCode};
use crate::flags::FeatureFlags;
use crate::value_table::ValueNameTable;
use crate::version::MccsVersion;

/// Identifies a monitor model: the key a definition file is looked up by
/// and checked against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonitorModelKey {
    mfg_id: String,
    model_name: String,
    product_code: u16,
}

impl MonitorModelKey {
    /// Creates a model key.
    pub fn new(
        mfg_id: impl Into<String>,
        model_name: impl Into<String>,
        product_code: u16,
    ) -> Self {
        Self {
            mfg_id: mfg_id.into(),
            model_name: model_name.into(),
            product_code,
        }
    }

    /// Three-character EDID manufacturer id.
    pub fn mfg_id(&self) -> &str {
        &self.mfg_id
    }

    /// Model name as reported in the EDID.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Numeric product code.
    pub fn product_code(&self) -> u16 {
        self.product_code
    }

    /// The definition file stem for this model: the manufacturer id, the
    /// model name with every non-alphanumeric character replaced by `_`,
    /// and the product code, joined by `-`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcp_features::MonitorModelKey;
    ///
    /// let key = MonitorModelKey::new("ACI", "VG248 Rev. B", 1427);
    /// assert_eq!(key.file_stem(), "ACI-VG248_Rev__B-1427");
    /// ```
    pub fn file_stem(&self) -> String {
        let model: String = self
            .model_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}-{}-{}", self.mfg_id, model, self.product_code)
    }
}

impl fmt::Display for MonitorModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.mfg_id, self.model_name, self.product_code
        )
    }
}

/// One user-defined feature: the override metadata stored for a code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DynamicFeatureMetadata {
    /// The feature code being defined or overridden.
    pub code: FeatureCode,
    /// Display name from the `FEATURE_CODE` line.
    pub name: String,
    /// Normalized flags after block finalization.
    pub flags: FeatureFlags,
    /// Accumulated value-name table, terminated, if any `VALUE` lines
    /// appeared.
    pub values: Option<ValueNameTable>,
}

/// The parsed per-model override record.
///
/// Created at most once per model per process; immutable after a
/// successful load. A failed load produces an immutable placeholder with
/// [`confirmed_absent`] set, so later lookups short-circuit.
///
/// [`confirmed_absent`]: DynamicFeatureRecord::confirmed_absent
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DynamicFeatureRecord {
    key: MonitorModelKey,
    spec_version: Option<MccsVersion>,
    features: BTreeMap<FeatureCode, DynamicFeatureMetadata>,
    confirmed_absent: bool,
}

impl DynamicFeatureRecord {
    /// The model this record belongs to.
    pub fn key(&self) -> &MonitorModelKey {
        &self.key
    }

    /// MCCS version declared by the definition file, if any.
    pub fn spec_version(&self) -> Option<MccsVersion> {
        self.spec_version
    }

    /// True for the cached placeholder of a model with no usable
    /// definition file.
    pub fn confirmed_absent(&self) -> bool {
        self.confirmed_absent
    }

    /// Looks up the override metadata for a code.
    pub fn feature(&self, code: FeatureCode) -> Option<&DynamicFeatureMetadata> {
        self.features.get(&code)
    }

    /// Iterates the defined features in ascending code order.
    pub fn features(&self) -> impl Iterator<Item = &DynamicFeatureMetadata> {
        self.features.values()
    }

    /// Number of defined features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if no features are defined (always true for placeholders).
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Creates the "confirmed absent" placeholder cached after a failed
    /// load.
    pub fn absent_placeholder(key: MonitorModelKey) -> Self {
        Self {
            key,
            spec_version: None,
            features: BTreeMap::new(),
            confirmed_absent: true,
        }
    }

    /// Re-serializes the record as definition text.
    ///
    /// The output parses back to an identical record: finalization is
    /// idempotent over its own normalized output.
    pub fn to_definition_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("MFG_ID {}\n", self.key.mfg_id()));
        out.push_str(&format!("MODEL {}\n", self.key.model_name()));
        out.push_str(&format!("PRODUCT_CODE {}\n", self.key.product_code()));
        if let Some(version) = self.spec_version {
            out.push_str(&format!("MCCS_VERSION {}\n", version));
        }
        for feature in self.features.values() {
            out.push_str(&format!("FEATURE_CODE {} {}\n", feature.code, feature.name));
            let attrs = attr_keywords(feature.flags);
            if !attrs.is_empty() {
                out.push_str(&format!("ATTRS {}\n", attrs.join(" ")));
            }
            if let Some(table) = &feature.values {
                for (value, name) in table.named_entries() {
                    out.push_str(&format!("VALUE 0x{:02x} {}\n", value, name));
                }
            }
        }
        out
    }
}

/// Reconstructs the `ATTRS` keywords equivalent to normalized flags.
fn attr_keywords(flags: FeatureFlags) -> Vec<&'static str> {
    let mut attrs = Vec::new();
    if flags.contains(FeatureFlags::RO) {
        attrs.push("RO");
    }
    if flags.contains(FeatureFlags::WO) {
        attrs.push("WO");
    }
    if flags.contains(FeatureFlags::RW) {
        attrs.push("RW");
    }
    if flags.contains(FeatureFlags::STD_CONT) {
        attrs.push("C");
    }
    if flags.contains(FeatureFlags::COMPLEX_CONT) {
        attrs.push("CCONT");
    }
    // Simple/WO NC both came from an NC keyword downgraded at
    // finalization; NC round-trips through the same downgrade.
    if flags.intersects(
        FeatureFlags::COMPLEX_NC | FeatureFlags::SIMPLE_NC | FeatureFlags::WO_NC,
    ) {
        attrs.push("NC");
    }
    if flags.intersects(FeatureFlags::TABLE_MASK) {
        attrs.push("T");
    }
    attrs
}

/// A feature block being accumulated by the parser.
struct PendingFeature {
    code: FeatureCode,
    name: String,
    flags: FeatureFlags,
    values: ValueNameTable,
    opened_at: usize,
}

/// Finalizes a feature block. Runs when a block closes, at the next
/// `FEATURE_CODE` line or at end of input.
fn finalize_feature(pending: PendingFeature, errors: &mut Vec<LineError>) -> DynamicFeatureMetadata {
    let mut flags = pending.flags;
    let mut values = None;

    if !pending.values.is_empty() {
        let mut table = pending.values;
        table.terminate();
        values = Some(table);
    }

    // Any access keyword also forces RW. Preserved verbatim from the
    // original normalization even where it looks redundant.
    if flags.intersects(FeatureFlags::ACCESS_MASK) {
        flags.insert(FeatureFlags::RW);
    }

    if values.is_some() {
        if flags.contains(FeatureFlags::COMPLEX_NC) {
            flags.remove(FeatureFlags::COMPLEX_NC);
            if flags.contains(FeatureFlags::WO) {
                flags.insert(FeatureFlags::WO_NC);
            } else {
                flags.insert(FeatureFlags::SIMPLE_NC);
            }
        } else if flags.intersects(FeatureFlags::CONT_MASK | FeatureFlags::TABLE_MASK) {
            errors.push(LineError::new(
                pending.opened_at,
                format!(
                    "feature values specified for Continuous or Table feature {}",
                    pending.code
                ),
            ));
        }
    }

    // The T keyword sets the normal-table bit; a write-only table keeps
    // only the write-only variant.
    if flags.contains(FeatureFlags::WO) && flags.contains(FeatureFlags::NORMAL_TABLE) {
        flags.remove(FeatureFlags::NORMAL_TABLE);
        flags.insert(FeatureFlags::WO_TABLE);
    }

    flags.insert(FeatureFlags::USER_DEFINED);

    DynamicFeatureMetadata {
        code: pending.code,
        name: pending.name,
        flags,
        values,
    }
}

/// Splits a line into its keyword and the rest, trimmed on the left.
fn split_keyword(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    }
}

/// Parses a user-defined feature definition.
///
/// `lines` is the ordered definition text; `key` is the expected model
/// identity that the file's `MFG_ID`/`MODEL`/`PRODUCT_CODE` fields must
/// match. All line-level errors are accumulated; on any error the
/// partially built record is discarded and an aggregated
/// [`Error::BadData`] is returned. The caller should then cache
/// [`DynamicFeatureRecord::absent_placeholder`] for the model.
///
/// # Examples
///
/// ```
/// use vcp_features::{parse_dynamic_feature_record, FeatureCode, MonitorModelKey};
///
/// let key = MonitorModelKey::new("ACI", "VG248", 1427);
/// let text = "\
/// MFG_ID ACI
/// MODEL VG248
/// PRODUCT_CODE 1427
/// FEATURE_CODE 0xe0 Picture mode
/// ATTRS RW NC
/// VALUE 0x00 Standard
/// VALUE 0x01 Cinema
/// ";
/// let record = parse_dynamic_feature_record(text.lines(), &key).unwrap();
/// let feature = record.feature(FeatureCode::new(0xe0)).unwrap();
/// assert_eq!(feature.name, "Picture mode");
/// ```
pub fn parse_dynamic_feature_record<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    key: &MonitorModelKey,
) -> Result<DynamicFeatureRecord, Error> {
    let mut errors: Vec<LineError> = Vec::new();
    let mut features: BTreeMap<FeatureCode, DynamicFeatureMetadata> = BTreeMap::new();
    let mut pending: Option<PendingFeature> = None;
    let mut spec_version: Option<MccsVersion> = None;
    let mut seen_mfg = false;
    let mut seen_model = false;
    let mut seen_product = false;

    for (index, raw) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('*') || line.starts_with('#') {
            continue;
        }
        let (keyword, rest) = split_keyword(line);
        match keyword {
            "MFG_ID" => {
                seen_mfg = true;
                if rest != key.mfg_id() {
                    errors.push(LineError::new(
                        line_no,
                        format!(
                            "MFG_ID {} does not match expected {}",
                            rest,
                            key.mfg_id()
                        ),
                    ));
                }
            }
            "MODEL" => {
                seen_model = true;
                if rest != key.model_name() {
                    errors.push(LineError::new(
                        line_no,
                        format!(
                            "MODEL {} does not match expected {}",
                            rest,
                            key.model_name()
                        ),
                    ));
                }
            }
            "PRODUCT_CODE" => {
                seen_product = true;
                match rest.parse::<u16>() {
                    Ok(code) if code == key.product_code() => {}
                    Ok(code) => errors.push(LineError::new(
                        line_no,
                        format!(
                            "PRODUCT_CODE {} does not match expected {}",
                            code,
                            key.product_code()
                        ),
                    )),
                    Err(_) => errors.push(LineError::new(
                        line_no,
                        format!("invalid product code: {}", rest),
                    )),
                }
            }
            "MCCS_VERSION" | "VCP_VERSION" => match MccsVersion::parse(rest) {
                Some(version) => spec_version = Some(version),
                None => errors.push(LineError::new(
                    line_no,
                    format!("invalid MCCS version: {}", rest),
                )),
            },
            "FEATURE_CODE" => {
                if let Some(open) = pending.take() {
                    let metadata = finalize_feature(open, &mut errors);
                    features.insert(metadata.code, metadata);
                }
                let (code_token, name) = split_keyword(rest);
                match FeatureCode::parse_hex(code_token) {
                    Some(code) => {
                        pending = Some(PendingFeature {
                            code,
                            name: name.to_string(),
                            flags: FeatureFlags::empty(),
                            values: ValueNameTable::new(),
                            opened_at: line_no,
                        });
                    }
                    None => errors.push(LineError::new(
                        line_no,
                        format!("invalid feature code: {}", code_token),
                    )),
                }
            }
            "ATTRS" => match pending.as_mut() {
                Some(open) => {
                    for attr in rest.split_whitespace() {
                        match attr {
                            "RW" => open.flags.insert(FeatureFlags::RW),
                            "RO" => open.flags.insert(FeatureFlags::RO),
                            "WO" => open.flags.insert(FeatureFlags::WO),
                            "C" => open.flags.insert(FeatureFlags::STD_CONT),
                            "CCONT" => open.flags.insert(FeatureFlags::COMPLEX_CONT),
                            "NC" => open.flags.insert(FeatureFlags::COMPLEX_NC),
                            "T" => open.flags.insert(FeatureFlags::NORMAL_TABLE),
                            _ => errors.push(LineError::new(
                                line_no,
                                format!("unrecognized attribute: {}", attr),
                            )),
                        }
                    }
                }
                None => errors.push(LineError::new(line_no, "ATTRS before FEATURE_CODE")),
            },
            "VALUE" => match pending.as_mut() {
                Some(open) => {
                    let (value_token, value_name) = split_keyword(rest);
                    match parse_hex_byte(value_token) {
                        Some(value) => open.values.push(value, value_name.to_string()),
                        None => errors.push(LineError::new(
                            line_no,
                            format!("invalid feature value: {}", value_token),
                        )),
                    }
                }
                None => errors.push(LineError::new(line_no, "VALUE before FEATURE_CODE")),
            },
            _ => errors.push(LineError::new(
                line_no,
                format!("unexpected field: {}", keyword),
            )),
        }
    }

    if let Some(open) = pending.take() {
        let metadata = finalize_feature(open, &mut errors);
        features.insert(metadata.code, metadata);
    }

    if features.is_empty() {
        errors.push(LineError::new(0, "no feature definitions found"));
    }
    if !seen_mfg {
        errors.push(LineError::new(0, "missing required field MFG_ID"));
    }
    if !seen_model {
        errors.push(LineError::new(0, "missing required field MODEL"));
    }
    if !seen_product {
        errors.push(LineError::new(0, "missing required field PRODUCT_CODE"));
    }

    if !errors.is_empty() {
        return Err(Error::BadData {
            source_name: key.file_stem(),
            causes: errors,
        });
    }

    debug!(
        "parsed {} user-defined feature(s) for {}",
        features.len(),
        key
    );

    Ok(DynamicFeatureRecord {
        key: key.clone(),
        spec_version,
        features,
        confirmed_absent: false,
    })
}

#[cfg(feature = "dynamic-features")]
pub use loading::{
    cached_dynamic_record, load_dynamic_record, DirectoryConfig, DEFINITION_FILE_EXTENSION,
};

#[cfg(feature = "dynamic-features")]
mod loading {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use log::{info, warn};

    use super::*;

    /// Extension of user-defined feature files.
    pub const DEFINITION_FILE_EXTENSION: &str = "mccs";

    /// Search paths for user-defined feature files.
    ///
    /// Directories are consulted in order; the first file whose name
    /// matches the model's [`MonitorModelKey::file_stem`] wins.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use vcp_features::DirectoryConfig;
    ///
    /// // Use only the default directory (~/.vcp-features/)
    /// let config = DirectoryConfig::default_only();
    ///
    /// // Use custom paths with the default appended
    /// let config = DirectoryConfig::with_paths_and_default(vec![
    ///     "/etc/vcp-features".into(),
    /// ]);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct DirectoryConfig {
        paths: Vec<PathBuf>,
    }

    impl DirectoryConfig {
        /// Creates an empty configuration with no search paths.
        pub fn new() -> Self {
            Self { paths: Vec::new() }
        }

        /// Creates configuration with only the default directory.
        pub fn default_only() -> Self {
            Self {
                paths: vec![Self::default_directory()],
            }
        }

        /// Creates configuration with custom paths (searched in order).
        pub fn with_paths(paths: Vec<PathBuf>) -> Self {
            Self { paths }
        }

        /// Creates configuration with custom paths followed by the
        /// default directory.
        pub fn with_paths_and_default(mut paths: Vec<PathBuf>) -> Self {
            paths.push(Self::default_directory());
            Self { paths }
        }

        /// Returns the default directory: `~/.vcp-features/`
        ///
        /// Falls back to `./.vcp-features/` if the home directory cannot
        /// be determined.
        pub fn default_directory() -> PathBuf {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".vcp-features")
        }

        /// Returns the configured search paths.
        pub fn paths(&self) -> &[PathBuf] {
            &self.paths
        }

        /// Adds a path after the existing ones.
        pub fn add_path(&mut self, path: PathBuf) {
            self.paths.push(path);
        }
    }

    /// Locates and parses the definition file for a model.
    ///
    /// Returns [`Error::FileNotFound`] when no search path holds a file
    /// named `<stem>.mccs` (the reported path is the first candidate
    /// tried), [`Error::BadData`] when the file fails to parse, and the
    /// parsed record otherwise.
    pub fn load_dynamic_record(
        key: &MonitorModelKey,
        config: &DirectoryConfig,
    ) -> Result<DynamicFeatureRecord, Error> {
        let file_name = format!("{}.{}", key.file_stem(), DEFINITION_FILE_EXTENSION);
        let mut first_candidate = None;
        for dir in config.paths() {
            let candidate = dir.join(&file_name);
            if candidate.is_file() {
                debug!("reading user-defined features from {}", candidate.display());
                let content = fs::read_to_string(&candidate)?;
                return parse_dynamic_feature_record(content.lines(), key);
            }
            if first_candidate.is_none() {
                first_candidate = Some(candidate);
            }
        }
        Err(Error::FileNotFound(
            first_candidate.unwrap_or_else(|| PathBuf::from(file_name)),
        ))
    }

    /// Per-model record cache, an atomic get-or-insert keyed by file
    /// stem. Holding the lock across the load serializes concurrent
    /// first-time loads of the same model, so exactly one record is ever
    /// produced per model per process.
    static RECORD_CACHE: Mutex<Option<HashMap<String, Arc<DynamicFeatureRecord>>>> =
        Mutex::new(None);

    /// Returns the cached record for a model, loading it on first use.
    ///
    /// A model with no usable definition file is cached as a
    /// "confirmed absent" placeholder: the miss is reported once (file
    /// absence at info level, malformed files at warn level) and then
    /// suppressed for the life of the process.
    pub fn cached_dynamic_record(
        key: &MonitorModelKey,
        config: &DirectoryConfig,
    ) -> Arc<DynamicFeatureRecord> {
        let mut guard = RECORD_CACHE.lock().unwrap();
        let cache = guard.get_or_insert_with(HashMap::new);
        if let Some(record) = cache.get(&key.file_stem()) {
            return Arc::clone(record);
        }
        let record = match load_dynamic_record(key, config) {
            Ok(record) => record,
            Err(Error::FileNotFound(path)) => {
                info!("no user-defined features for {}: {}", key, path.display());
                DynamicFeatureRecord::absent_placeholder(key.clone())
            }
            Err(error) => {
                warn!("discarding user-defined features for {}: {}", key, error);
                DynamicFeatureRecord::absent_placeholder(key.clone())
            }
        };
        let record = Arc::new(record);
        cache.insert(key.file_stem(), Arc::clone(&record));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> MonitorModelKey {
        MonitorModelKey::new("ACI", "VG248", 1427)
    }

    fn parse(text: &str) -> Result<DynamicFeatureRecord, Error> {
        parse_dynamic_feature_record(text.lines(), &key())
    }

    const VALID: &str = "\
* Test definition
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
MCCS_VERSION 2.1

FEATURE_CODE 0x99 speaker mode
ATTRS RW NC
VALUE 0x00 off
VALUE 0x01 on
VALUE 0x02 auto
";

    #[test]
    fn test_parse_valid_definition() {
        let record = parse(VALID).unwrap();
        assert!(!record.confirmed_absent());
        assert_eq!(record.spec_version(), Some(MccsVersion::V2_1));
        assert_eq!(record.len(), 1);

        let feature = record.feature(FeatureCode::new(0x99)).unwrap();
        assert_eq!(feature.name, "speaker mode");
        // NC was downgraded to simple NC because a value table was
        // supplied and the feature is not write-only.
        assert!(feature.flags.contains(FeatureFlags::SIMPLE_NC));
        assert!(!feature.flags.contains(FeatureFlags::COMPLEX_NC));
        assert!(feature.flags.contains(FeatureFlags::RW));
        assert!(feature.flags.contains(FeatureFlags::USER_DEFINED));

        // 3 values plus the sentinel.
        let table = feature.values.as_ref().unwrap();
        assert_eq!(table.entry_count(), 4);
        assert!(table.is_terminated());
        assert_eq!(table.lookup(0x02), Some("auto"));
    }

    #[test]
    fn test_model_name_with_spaces_matches_verbatim() {
        let key = MonitorModelKey::new("DEL", "U3011 WIDE", 16609);
        let text = "\
MFG_ID DEL
MODEL U3011 WIDE
PRODUCT_CODE 16609
FEATURE_CODE 0xe1 Preset
ATTRS RW C
";
        let record = parse_dynamic_feature_record(text.lines(), &key).unwrap();
        assert_eq!(record.key().model_name(), "U3011 WIDE");
        let feature = record.feature(FeatureCode::new(0xe1)).unwrap();
        assert!(feature.flags.contains(FeatureFlags::STD_CONT));
    }

    #[test]
    fn test_identity_mismatches_are_errors() {
        let text = "\
MFG_ID XYZ
MODEL OTHER
PRODUCT_CODE 9999
FEATURE_CODE 0xe0 Mode
ATTRS RW NC
";
        let error = parse(text).unwrap_err();
        match error {
            Error::BadData { causes, .. } => {
                assert_eq!(causes.len(), 3);
                assert!(causes[0].message.contains("MFG_ID"));
                assert!(causes[1].message.contains("MODEL"));
                assert!(causes[2].message.contains("PRODUCT_CODE"));
            }
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn test_error_accumulation_never_stops_early() {
        // Five distinct line errors plus nothing valid: all reported.
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
BOGUS_FIELD whatever
ATTRS RW
FEATURE_CODE 0xzz broken
MCCS_VERSION twelve
FEATURE_CODE 0xe0 Mode
ATTRS RW SPARKLE
";
        let error = parse(text).unwrap_err();
        match error {
            Error::BadData { causes, .. } => {
                let messages: Vec<&str> =
                    causes.iter().map(|c| c.message.as_str()).collect();
                assert_eq!(causes.len(), 5, "{:?}", messages);
                assert!(messages[0].starts_with("unexpected field"));
                assert!(messages[1].contains("ATTRS before FEATURE_CODE"));
                assert!(messages[2].contains("invalid feature code"));
                assert!(messages[3].contains("invalid MCCS version"));
                assert!(messages[4].contains("unrecognized attribute"));
            }
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_mandatory_fields() {
        let text = "\
FEATURE_CODE 0xe0 Mode
ATTRS RW NC
";
        let error = parse(text).unwrap_err();
        match error {
            Error::BadData { causes, .. } => {
                assert_eq!(causes.len(), 3);
                assert!(causes.iter().all(|c| c.line == 0));
                assert!(causes[0].message.contains("MFG_ID"));
            }
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_reports_no_features() {
        let error = parse("* nothing here\n").unwrap_err();
        match error {
            Error::BadData { causes, .. } => {
                assert!(causes
                    .iter()
                    .any(|c| c.message.contains("no feature definitions found")));
            }
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn test_values_on_continuous_feature_is_error() {
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xe0 Mode
ATTRS RW C
VALUE 0x01 one
";
        let error = parse(text).unwrap_err();
        match error {
            Error::BadData { causes, .. } => {
                assert_eq!(causes.len(), 1);
                assert!(causes[0]
                    .message
                    .contains("feature values specified for Continuous or Table feature"));
                // Reported against the FEATURE_CODE line that opened the
                // block.
                assert_eq!(causes[0].line, 4);
            }
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn test_wo_nc_downgrade() {
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xe2 Blast
ATTRS WO NC
VALUE 0x01 go
";
        let record = parse(text).unwrap();
        let feature = record.feature(FeatureCode::new(0xe2)).unwrap();
        assert!(feature.flags.contains(FeatureFlags::WO_NC));
        assert!(!feature.flags.contains(FeatureFlags::COMPLEX_NC));
        // The forced-RW normalization applies even to write-only blocks.
        assert!(feature.flags.contains(FeatureFlags::RW));
    }

    #[test]
    fn test_wo_table_downgrade_quirk() {
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xe4 Firmware blob
ATTRS WO T
";
        let record = parse(text).unwrap();
        let feature = record.feature(FeatureCode::new(0xe4)).unwrap();
        assert!(feature.flags.contains(FeatureFlags::WO_TABLE));
        assert!(!feature.flags.contains(FeatureFlags::NORMAL_TABLE));
    }

    #[test]
    fn test_last_block_with_same_code_wins() {
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xe0 First
ATTRS RW C
FEATURE_CODE 0xe0 Second
ATTRS RO NC
";
        let record = parse(text).unwrap();
        assert_eq!(record.len(), 1);
        let feature = record.feature(FeatureCode::new(0xe0)).unwrap();
        assert_eq!(feature.name, "Second");
        assert!(feature.flags.contains(FeatureFlags::COMPLEX_NC));
    }

    #[test]
    fn test_vcp_version_alias() {
        let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
VCP_VERSION 2.2
FEATURE_CODE 0xe0 Mode
ATTRS RW NC
";
        let record = parse(text).unwrap();
        assert_eq!(record.spec_version(), Some(MccsVersion::V2_2));
    }

    #[test]
    fn test_round_trip_normalization_is_idempotent() {
        let record = parse(VALID).unwrap();
        let serialized = record.to_definition_text();
        let reparsed = parse_dynamic_feature_record(serialized.lines(), &key()).unwrap();
        assert_eq!(reparsed.spec_version(), record.spec_version());
        assert_eq!(reparsed.len(), record.len());
        for (a, b) in record.features().zip(reparsed.features()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_comment_styles_ignored() {
        let text = "\
* star comment
# hash comment

MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0xE0 Upper hex
ATTRS RW NC
";
        let record = parse(text).unwrap();
        assert!(record.feature(FeatureCode::new(0xe0)).is_some());
    }
}

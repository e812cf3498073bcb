//! VCP feature metadata resolution for DDC/CI monitor control.
//!
//! This crate determines what any of the 256 possible one-byte VCP
//! feature codes *means* for a specific monitor: its access mode, value
//! encoding, display name, enumerated value table, and the formatter used
//! to render raw device bytes as text, across the four revisions of the
//! MCCS specification (2.0, 2.1, 2.2, 3.0). Individual monitor models can
//! override or extend the built-in knowledge through a small textual
//! definition language.
//!
//! It performs no I/O against displays: transports supply raw bytes,
//! display managers supply the active MCCS version and any user-defined
//! feature record, and this crate resolves metadata and formats values.
//!
//! # Basic Usage
//!
//! ```rust
//! use vcp_features::{
//!     resolve_feature_metadata, FeatureCode, MccsVersion, NonTableValue,
//! };
//!
//! // What does code 0x10 mean for a display reporting MCCS 2.0?
//! let meta = resolve_feature_metadata(
//!     FeatureCode::new(0x10),
//!     None,
//!     MccsVersion::V2_0,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(meta.name, "Brightness");
//! assert!(meta.is_readable());
//!
//! // Render bytes read from the display.
//! let text = meta.format_non_table_value(NonTableValue::from_words(100, 50));
//! assert_eq!(text, "current value =    50, max value =   100");
//! ```
//!
//! # Feature Sets
//!
//! Collections of resolved metadata are built through selectors: named
//! thematic subsets, type-based subsets, exhaustive scans, or explicit
//! code lists.
//!
//! ```rust
//! use vcp_features::{
//!     build_feature_set, FeatureSetFlags, FeatureSetSelector, MccsVersion,
//! };
//!
//! let color = build_feature_set(
//!     FeatureSetSelector::Color,
//!     None,
//!     MccsVersion::V2_0,
//!     FeatureSetFlags::empty(),
//! )
//! .unwrap();
//! assert!(color.codes().any(|code| code.byte() == 0x10));
//! ```
//!
//! # User-Defined Features
//!
//! A model-specific `.mccs` file can override the registry. Files are
//! named `<mfg>-<model>-<product code>.mccs` (non-alphanumeric model
//! characters replaced by `_`) and searched for in configurable
//! directories when the `dynamic-features` feature (default) is enabled.
//!
//! ```rust
//! use vcp_features::{
//!     parse_dynamic_feature_record, resolve_feature_metadata, FeatureCode,
//!     MccsVersion, MonitorModelKey,
//! };
//!
//! let key = MonitorModelKey::new("ACI", "VG248", 1427);
//! let definition = "\
//! MFG_ID ACI
//! MODEL VG248
//! PRODUCT_CODE 1427
//! FEATURE_CODE 0xe0 Picture mode
//! ATTRS RW NC
//! VALUE 0x00 Standard
//! VALUE 0x01 Cinema
//! ";
//! let record = parse_dynamic_feature_record(definition.lines(), &key).unwrap();
//! let meta = resolve_feature_metadata(
//!     FeatureCode::new(0xe0),
//!     Some(&record),
//!     MccsVersion::V2_0,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(meta.name, "Picture mode");
//! ```
//!
//! Parsing accumulates every error in a malformed file and reports them
//! together; the failed model is cached as "confirmed absent" so the
//! lookup is not retried.

mod error;
pub use error::{Error, LineError};

mod feature_code;
pub use feature_code::{FeatureCode, MFG_RANGE_START};

mod version;
pub use version::{MccsVersion, VersionBand};

mod flags;
pub use flags::{FeatureFlags, FeatureSetFlags, FeatureSubsets, SpecGroups};

mod value_table;
pub use value_table::{ValueNameEntry, ValueNameTable};

mod formatters;
pub use formatters::{
    format_non_table_value, format_table_value, FormatterTag, NonTableValue,
};

mod registry;
pub use registry::{feature_registry, FeatureEntry, FeatureRegistry};

mod feature_codes;
pub use feature_codes::*;

mod dynamic_features;
pub use dynamic_features::{
    parse_dynamic_feature_record, DynamicFeatureMetadata, DynamicFeatureRecord,
    MonitorModelKey,
};

#[cfg(feature = "dynamic-features")]
pub use dynamic_features::{
    cached_dynamic_record, load_dynamic_record, DirectoryConfig,
    DEFINITION_FILE_EXTENSION,
};

mod resolve;
pub use resolve::{resolve_feature_metadata, ResolvedFeatureMetadata};

mod feature_sets;
pub use feature_sets::{build_feature_set, FeatureSet, FeatureSetSelector};

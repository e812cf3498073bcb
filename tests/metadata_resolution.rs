//! End-to-end metadata resolution behavior through the public API.

use vcp_features::{
    build_feature_set, feature_registry, parse_dynamic_feature_record,
    resolve_feature_metadata, Error, FeatureCode, FeatureFlags, FeatureSetFlags,
    FeatureSetSelector, FormatterTag, MccsVersion, MonitorModelKey, NonTableValue,
};

#[test]
fn test_brightness_diverges_in_name_only() {
    let at_v20 =
        resolve_feature_metadata(FeatureCode::new(0x10), None, MccsVersion::V2_0, false)
            .unwrap();
    let at_v30 =
        resolve_feature_metadata(FeatureCode::new(0x10), None, MccsVersion::V3_0, false)
            .unwrap();

    assert_eq!(at_v20.name, "Brightness");
    assert_eq!(at_v30.name, "Luminosity");
    assert!(at_v20.flags.contains(FeatureFlags::RW));
    assert!(at_v20.flags.contains(FeatureFlags::STD_CONT));
    assert_eq!(
        at_v20.flags & FeatureFlags::TYPE_MASK,
        at_v30.flags & FeatureFlags::TYPE_MASK
    );
}

#[test]
fn test_color_preset_diverges_in_type() {
    let at_v20 =
        resolve_feature_metadata(FeatureCode::new(0x14), None, MccsVersion::V2_0, false)
            .unwrap();
    assert!(at_v20.flags.contains(FeatureFlags::SIMPLE_NC));
    let table = at_v20.values.as_ref().unwrap();
    assert_eq!(table.lookup(0x05), Some("6500 K"));

    let at_v30 =
        resolve_feature_metadata(FeatureCode::new(0x14), None, MccsVersion::V3_0, false)
            .unwrap();
    assert!(at_v30.flags.contains(FeatureFlags::COMPLEX_NC));
    assert!(!at_v30.flags.contains(FeatureFlags::SIMPLE_NC));
}

#[test]
fn test_unknown_code_synthesis_contract() {
    let code = FeatureCode::new(0xe5);
    assert!(matches!(
        resolve_feature_metadata(code, None, MccsVersion::V2_0, false),
        Err(Error::UnknownFeature(c)) if c == code
    ));

    let synthesized = resolve_feature_metadata(code, None, MccsVersion::V2_0, true).unwrap();
    assert_eq!(synthesized.name, "Manufacturer Specific");
    assert!(synthesized.flags.contains(FeatureFlags::RW));
    assert!(synthesized.flags.contains(FeatureFlags::COMPLEX_NC));
    assert!(synthesized.flags.contains(FeatureFlags::SYNTHETIC));
}

#[test]
fn test_override_finalization_example() {
    // An override declaring NC plus a value table finalizes to simple NC
    // with a sentinel-terminated table.
    let key = MonitorModelKey::new("ACI", "VG248", 1427);
    let text = "\
MFG_ID ACI
MODEL VG248
PRODUCT_CODE 1427
FEATURE_CODE 0x99 speaker mode
ATTRS RW NC
VALUE 0x00 off
VALUE 0x01 front
VALUE 0x02 surround
";
    let record = parse_dynamic_feature_record(text.lines(), &key).unwrap();
    let meta = resolve_feature_metadata(
        FeatureCode::new(0x99),
        Some(&record),
        MccsVersion::V2_0,
        false,
    )
    .unwrap();

    assert_eq!(meta.name, "speaker mode");
    assert!(meta.flags.contains(FeatureFlags::RW));
    assert!(meta.flags.contains(FeatureFlags::SIMPLE_NC));
    assert_eq!(meta.values.as_ref().unwrap().entry_count(), 4);
    assert_eq!(meta.formatter, FormatterTag::SlLookup);
    assert_eq!(
        meta.format_non_table_value(NonTableValue::new(0, 0, 0, 0x01)),
        "front (sl=0x01)"
    );
}

#[test]
fn test_scan_resolves_every_code() {
    let set = build_feature_set(
        FeatureSetSelector::Scan,
        None,
        MccsVersion::V2_0,
        FeatureSetFlags::empty(),
    )
    .unwrap();

    // Every code not in the set is a registry feature that resolves
    // non-readable; everything else, real or synthetic, is present.
    let registry = feature_registry();
    for byte in 0x00..=0xffu8 {
        let code = FeatureCode::new(byte);
        if set.member(code).is_some() {
            continue;
        }
        let entry = registry
            .lookup(code)
            .unwrap_or_else(|| panic!("{} missing from scan but not in registry", code));
        assert!(!entry
            .version_sensitive_flags(MccsVersion::V2_0)
            .unwrap()
            .is_readable());
    }
}

#[test]
fn test_known_set_table_exclusion_property() {
    let set = build_feature_set(
        FeatureSetSelector::Known,
        None,
        MccsVersion::V3_0,
        FeatureSetFlags::EXCLUDE_TABLES,
    )
    .unwrap();
    assert!(!set.is_empty());
    for member in set.members() {
        assert!(!member.flags.contains(FeatureFlags::NORMAL_TABLE));
        assert!(!member.flags.contains(FeatureFlags::WO_TABLE));
    }
}

#[test]
fn test_deprecated_feature_resolves_with_marker() {
    let at_v21 =
        resolve_feature_metadata(FeatureCode::new(0x13), None, MccsVersion::V2_1, false)
            .unwrap();
    assert!(at_v21.flags.contains(FeatureFlags::DEPRECATED));

    let at_v20 =
        resolve_feature_metadata(FeatureCode::new(0x13), None, MccsVersion::V2_0, false)
            .unwrap();
    assert!(!at_v20.flags.contains(FeatureFlags::DEPRECATED));
    assert!(at_v20.flags.contains(FeatureFlags::STD_CONT));
}

#[test]
fn test_feature_first_defined_after_requested_version() {
    // 0x17 exists only from 2.2 on; version-sensitive resolution still
    // answers at 2.0.
    let meta = resolve_feature_metadata(FeatureCode::new(0x17), None, MccsVersion::V2_0, false)
        .unwrap();
    assert_eq!(meta.name, "User color vision compensation");
    assert!(meta.flags.contains(FeatureFlags::STD_CONT));

    // Version-specific resolution, by contrast, reports the row unset.
    let entry = feature_registry().lookup(FeatureCode::new(0x17)).unwrap();
    assert_eq!(entry.version_specific_flags(MccsVersion::V2_0), None);
}

#[cfg(feature = "serde")]
#[test]
fn test_resolved_metadata_serializes() {
    let meta = resolve_feature_metadata(FeatureCode::new(0x14), None, MccsVersion::V2_0, false)
        .unwrap();
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["name"], "Select color preset");
    assert!(json["values"]["entries"].as_array().unwrap().len() > 1);
}

use super::*;
use crate::SerializeError;
use pretty_assertions::assert_eq;

#[test]
fn test_catalog_is_indexed_by_id() {
    assert_eq!(catalog().len(), OptionId::ALL.len());
    for (index, def) in catalog().iter().enumerate() {
        assert_eq!(def.id as usize, index, "catalog entry {} out of order", def.name);
        assert_eq!(OptionId::ALL[index], def.id);
    }
}

#[test]
fn test_catalog_fields_match_kinds() {
    for def in catalog() {
        match def.field {
            Some(Field::Text(_)) => assert_eq!(def.kind, OptionKind::String, "{}", def.name),
            Some(Field::Flag(_) | Field::XmlVersion) => {
                assert_eq!(def.kind, OptionKind::Numeric, "{}", def.name);
            }
            None => {}
        }
        if def.has_serializer_value() {
            assert!(def.areas.intersects(OptionArea::SERIALIZER), "{}", def.name);
        }
    }
}

#[test]
fn test_names_are_unique_and_resolvable() {
    for id in OptionId::ALL {
        assert_eq!(OptionId::from_name(id.name()), Some(id));
    }
    assert_eq!(OptionId::from_name("relativeURIs"), Some(OptionId::RelativeUris));
    assert_eq!(OptionId::from_name("relativeuris"), None);
}

#[test]
fn test_areas() {
    assert!(OptionId::NoNet.is_valid_for_area(OptionArea::PARSER));
    assert!(OptionId::NoNet.is_valid_for_area(OptionArea::SERIALIZER));
    assert!(OptionId::Scanning.is_valid_for_area(OptionArea::PARSER));
    assert!(!OptionId::Scanning.is_valid_for_area(OptionArea::SERIALIZER));
    assert!(!OptionId::JsonCallback.is_valid_for_area(OptionArea::PARSER));
}

#[test]
fn test_enumerate_serializer_area() {
    let names: Vec<_> = for_area(OptionArea::SERIALIZER).map(|def| def.name).collect();
    assert_eq!(names.first().copied(), Some("relativeURIs"));
    assert!(names.contains(&"noNet"));
    assert!(!names.contains(&"scanning"));
    assert_eq!(enumerate(OptionArea::SERIALIZER, 0).unwrap().id, OptionId::RelativeUris);
    assert!(enumerate(OptionArea::SERIALIZER, names.len()).is_none());
}

#[test]
fn test_defaults() {
    let opts = SerializerOptions::default();
    assert_eq!(opts.get_numeric(OptionId::WriteBaseUri).unwrap(), 1);
    assert_eq!(opts.get_numeric(OptionId::RelativeUris).unwrap(), 1);
    assert_eq!(opts.get_numeric(OptionId::WriterXmlVersion).unwrap(), 10);
    assert_eq!(opts.get_numeric(OptionId::WriterXmlDeclaration).unwrap(), 1);
    assert_eq!(opts.get_numeric(OptionId::PrefixElements).unwrap(), 0);
    for def in for_area(OptionArea::SERIALIZER) {
        if def.kind == OptionKind::String && def.has_serializer_value() {
            assert_eq!(opts.get_string(def.id).unwrap(), None, "{}", def.name);
        }
    }
}

#[test]
fn test_xml_version_soft_validation() {
    let mut opts = SerializerOptions::default();
    opts.set_numeric(OptionId::WriterXmlVersion, 12).unwrap();
    assert_eq!(opts.xml_version(), 10);
    opts.set_numeric(OptionId::WriterXmlVersion, 11).unwrap();
    assert_eq!(opts.xml_version(), 11);
    opts.set_numeric(OptionId::WriterXmlVersion, 0).unwrap();
    assert_eq!(opts.get_numeric(OptionId::WriterXmlVersion).unwrap(), 11);
}

#[test]
fn test_flags_normalize_to_zero_or_one() {
    let mut opts = SerializerOptions::default();
    opts.set_numeric(OptionId::PrefixElements, 7).unwrap();
    assert_eq!(opts.get_numeric(OptionId::PrefixElements).unwrap(), 1);
    assert!(opts.prefix_elements());
    opts.set_numeric(OptionId::RelativeUris, 0).unwrap();
    assert_eq!(opts.get_numeric(OptionId::RelativeUris).unwrap(), 0);
    assert!(!opts.relative_uris());
}

#[test]
fn test_set_numeric_rejections() {
    let mut opts = SerializerOptions::default();
    let cases = [
        (OptionId::WriteBaseUri, -1, "negative value"),
        (OptionId::Scanning, 1, "not a serializer option"),
        (OptionId::NoNet, 1, "no serializer value"),
        (OptionId::WriterAutoIndent, 1, "no serializer value"),
        (OptionId::JsonCallback, 1, "string option given a number"),
    ];
    for (option, value, expected) in cases {
        match opts.set_numeric(option, value) {
            Err(SerializeError::InvalidOption { option: name, reason }) => {
                assert_eq!(name, option.name());
                assert_eq!(reason, expected);
            }
            other => panic!("{option:?}: expected InvalidOption, got {other:?}"),
        }
    }
    assert_eq!(opts, SerializerOptions::default());
}

#[test]
fn test_set_string_numeric_is_parsed() {
    let mut opts = SerializerOptions::default();
    opts.set_string(OptionId::WriterXmlVersion, "11").unwrap();
    assert_eq!(opts.xml_version(), 11);
    opts.set_string(OptionId::WriteBaseUri, " 0 ").unwrap();
    assert!(!opts.write_base_uri());
    assert!(matches!(
        opts.set_string(OptionId::WriteBaseUri, "yes"),
        Err(SerializeError::InvalidOption { .. })
    ));
    assert!(matches!(
        opts.set_string(OptionId::WriteBaseUri, "-1"),
        Err(SerializeError::InvalidOption { reason: "negative value", .. })
    ));
}

#[test]
fn test_set_string_replaces_value() {
    let mut opts = SerializerOptions::default();
    opts.set_string(OptionId::JsonCallback, "first").unwrap();
    opts.set_string(OptionId::JsonCallback, "second").unwrap();
    assert_eq!(opts.get_string(OptionId::JsonCallback).unwrap(), Some("second"));
    assert_eq!(opts.get_string(OptionId::JsonExtraData).unwrap(), None);
}

#[test]
fn test_set_string_rejections() {
    let mut opts = SerializerOptions::default();
    assert!(matches!(
        opts.set_string(OptionId::WwwHttpUserAgent, "agent"),
        Err(SerializeError::InvalidOption { reason: "not a serializer option", .. })
    ));
    assert!(matches!(
        opts.set_string(OptionId::AtomEntryUri, "a\0b"),
        Err(SerializeError::InvalidOption { reason: "contains NUL", .. })
    ));
    assert_eq!(opts.get_string(OptionId::AtomEntryUri).unwrap(), None);
}

#[test]
fn test_get_kind_mismatches() {
    let opts = SerializerOptions::default();
    assert!(opts.get_numeric(OptionId::ResourceFill).is_err());
    assert!(opts.get_string(OptionId::RelativeUris).is_err());
    assert!(opts.get_numeric(OptionId::Scanning).is_err());
    assert!(opts.get_string(OptionId::WwwHttpCacheControl).is_err());
    assert!(opts.get_numeric(OptionId::WriterIndentWidth).is_err());
}

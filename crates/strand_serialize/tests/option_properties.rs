//! Property tests over the numeric option surface.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use strand_serialize::options::{self, OptionArea, OptionKind};
use strand_serialize::{OptionId, SerializeError, SerializerOptions};

/// Numeric options a serializer stores.
fn stored_numeric() -> impl Strategy<Value = OptionId> {
    let ids: Vec<OptionId> = options::for_area(OptionArea::SERIALIZER)
        .filter(|def| def.kind == OptionKind::Numeric && def.has_serializer_value())
        .map(|def| def.id)
        .collect();
    prop::sample::select(ids)
}

fn any_option() -> impl Strategy<Value = OptionId> {
    prop::sample::select(OptionId::ALL.to_vec())
}

proptest! {
    #[test]
    fn negative_values_always_rejected(id in any_option(), value in i64::MIN..0) {
        let mut opts = SerializerOptions::default();
        let before = opts.clone();
        let rejected = matches!(
            opts.set_numeric(id, value),
            Err(SerializeError::InvalidOption { .. })
        );
        prop_assert!(rejected);
        prop_assert_eq!(opts, before);
    }

    #[test]
    fn flags_read_back_as_zero_or_one(id in stored_numeric(), value in 0i64..=i64::from(u32::MAX)) {
        prop_assume!(id != OptionId::WriterXmlVersion);
        let mut opts = SerializerOptions::default();
        opts.set_numeric(id, value).unwrap();
        prop_assert_eq!(opts.get_numeric(id).unwrap(), u32::from(value != 0));
    }

    #[test]
    fn xml_version_is_always_10_or_11(values in prop::collection::vec(0i64..100, 1..8)) {
        let mut opts = SerializerOptions::default();
        for value in values {
            opts.set_numeric(OptionId::WriterXmlVersion, value).unwrap();
            let version = opts.get_numeric(OptionId::WriterXmlVersion).unwrap();
            prop_assert!(version == 10 || version == 11);
        }
    }

    #[test]
    fn decimal_strings_match_numeric_setter(id in stored_numeric(), value in 0i64..100_000) {
        let mut by_string = SerializerOptions::default();
        let mut by_number = SerializerOptions::default();
        by_string.set_string(id, &value.to_string()).unwrap();
        by_number.set_numeric(id, value).unwrap();
        prop_assert_eq!(by_string, by_number);
    }

    #[test]
    fn parser_only_options_never_stored(value in 0i64..1000) {
        for def in options::catalog() {
            if def.areas.contains(OptionArea::SERIALIZER) {
                continue;
            }
            let mut opts = SerializerOptions::default();
            prop_assert!(opts.set_numeric(def.id, value).is_err(), "{}", def.name);
            prop_assert!(opts.set_string(def.id, "x").is_err(), "{}", def.name);
            prop_assert_eq!(opts, SerializerOptions::default());
        }
    }
}

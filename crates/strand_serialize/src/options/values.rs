//! Per-serializer option values.

use crate::error::{Result, SerializeError};

use super::{OptionArea, OptionId, OptionKind};

/// Serializer-side storage slot of an option.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Field {
    Flag(FlagField),
    /// Restricted to 10 or 11; other values are ignored.
    XmlVersion,
    Text(TextField),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FlagField {
    WriteBaseUri,
    RelativeUris,
    WriteXmlDeclaration,
    PrefixElements,
}

/// Index into the string option table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TextField {
    ResourceBorder,
    LiteralBorder,
    BnodeBorder,
    ResourceFill,
    LiteralFill,
    BnodeFill,
    JsonCallback,
    JsonExtraData,
    RssTriples,
    AtomEntryUri,
}

const TEXT_FIELDS: usize = 10;

/// Option values held by one serializer.
///
/// Numeric options store non-negative integers, flags normalized to 0/1.
/// String options own their value; setting one replaces the previous value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializerOptions {
    write_base_uri: bool,
    relative_uris: bool,
    xml_version: u32,
    write_xml_declaration: bool,
    prefix_elements: bool,
    text: [Option<String>; TEXT_FIELDS],
}

impl Default for SerializerOptions {
    fn default() -> Self {
        SerializerOptions {
            write_base_uri: true,
            relative_uris: true,
            xml_version: 10,
            write_xml_declaration: true,
            prefix_elements: false,
            text: Default::default(),
        }
    }
}

impl SerializerOptions {
    /// Set a numeric option.
    ///
    /// `writerXMLVersion` only accepts 10 or 11; any other value leaves the
    /// current version in place and still succeeds.
    pub fn set_numeric(&mut self, option: OptionId, value: i64) -> Result<()> {
        let def = option.def();
        if value < 0 {
            return Err(SerializeError::invalid_option(def.name, "negative value"));
        }
        if !option.is_valid_for_area(OptionArea::SERIALIZER) {
            return Err(SerializeError::invalid_option(
                def.name,
                "not a serializer option",
            ));
        }
        match def.field {
            Some(Field::Flag(flag)) => {
                *self.flag_mut(flag) = value != 0;
                Ok(())
            }
            Some(Field::XmlVersion) => {
                match value {
                    10 => self.xml_version = 10,
                    11 => self.xml_version = 11,
                    _ => tracing::warn!(
                        value,
                        current = self.xml_version,
                        "ignoring unsupported XML version"
                    ),
                }
                Ok(())
            }
            Some(Field::Text(_)) => Err(SerializeError::invalid_option(
                def.name,
                "string option given a number",
            )),
            None => Err(SerializeError::invalid_option(
                def.name,
                "no serializer value",
            )),
        }
    }

    /// Set an option from a string.
    ///
    /// Numeric options parse the value as a decimal integer and go through
    /// [`set_numeric`](Self::set_numeric). String options release the old
    /// value and store a fresh copy.
    pub fn set_string(&mut self, option: OptionId, value: &str) -> Result<()> {
        let def = option.def();
        if !option.is_valid_for_area(OptionArea::SERIALIZER) {
            return Err(SerializeError::invalid_option(
                def.name,
                "not a serializer option",
            ));
        }
        if def.kind == OptionKind::Numeric {
            let number = value
                .trim()
                .parse::<i64>()
                .map_err(|_| SerializeError::invalid_option(def.name, "not a decimal number"))?;
            return self.set_numeric(option, number);
        }
        if value.contains('\0') {
            return Err(SerializeError::invalid_option(def.name, "contains NUL"));
        }
        let Some(Field::Text(field)) = def.field else {
            return Err(SerializeError::invalid_option(
                def.name,
                "no serializer value",
            ));
        };
        let slot = &mut self.text[field as usize];
        *slot = None;
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| SerializeError::AllocFailure { option: def.name })?;
        owned.push_str(value);
        *slot = Some(owned);
        Ok(())
    }

    /// Read a numeric option. Flags read as 0 or 1.
    pub fn get_numeric(&self, option: OptionId) -> Result<u32> {
        let def = option.def();
        if !option.is_valid_for_area(OptionArea::SERIALIZER) {
            return Err(SerializeError::invalid_option(
                def.name,
                "not a serializer option",
            ));
        }
        if def.kind != OptionKind::Numeric {
            return Err(SerializeError::invalid_option(def.name, "string option"));
        }
        match def.field {
            Some(Field::Flag(flag)) => Ok(u32::from(self.flag(flag))),
            Some(Field::XmlVersion) => Ok(self.xml_version),
            _ => Err(SerializeError::invalid_option(
                def.name,
                "no serializer value",
            )),
        }
    }

    /// Read a string option; `Ok(None)` if it was never set.
    ///
    /// The value stays owned by these options.
    pub fn get_string(&self, option: OptionId) -> Result<Option<&str>> {
        let def = option.def();
        if !option.is_valid_for_area(OptionArea::SERIALIZER) {
            return Err(SerializeError::invalid_option(
                def.name,
                "not a serializer option",
            ));
        }
        match def.field {
            Some(Field::Text(field)) => Ok(self.text[field as usize].as_deref()),
            _ if def.kind == OptionKind::Numeric => {
                Err(SerializeError::invalid_option(def.name, "numeric option"))
            }
            _ => Err(SerializeError::invalid_option(
                def.name,
                "no serializer value",
            )),
        }
    }

    pub fn write_base_uri(&self) -> bool {
        self.write_base_uri
    }

    pub fn relative_uris(&self) -> bool {
        self.relative_uris
    }

    pub fn xml_version(&self) -> u32 {
        self.xml_version
    }

    pub fn write_xml_declaration(&self) -> bool {
        self.write_xml_declaration
    }

    pub fn prefix_elements(&self) -> bool {
        self.prefix_elements
    }

    fn flag(&self, flag: FlagField) -> bool {
        match flag {
            FlagField::WriteBaseUri => self.write_base_uri,
            FlagField::RelativeUris => self.relative_uris,
            FlagField::WriteXmlDeclaration => self.write_xml_declaration,
            FlagField::PrefixElements => self.prefix_elements,
        }
    }

    fn flag_mut(&mut self, flag: FlagField) -> &mut bool {
        match flag {
            FlagField::WriteBaseUri => &mut self.write_base_uri,
            FlagField::RelativeUris => &mut self.relative_uris,
            FlagField::WriteXmlDeclaration => &mut self.write_xml_declaration,
            FlagField::PrefixElements => &mut self.prefix_elements,
        }
    }
}

//! Option catalog.
//!
//! Every option identifier has one static entry describing its value kind
//! (numeric or string), the areas it applies to, and the serializer-side
//! field that stores it (if any). The same table drives validation in
//! [`SerializerOptions`] and catalog enumeration for presentation layers.
//!
//! Areas are a bit set: an option valid for `SHARED` is valid for both
//! parsers and serializers. Validity for the serializer area does not imply
//! the serializer stores the option; writer options such as
//! `writerAutoIndent` belong to the serializer area but are rejected because
//! no serializer-side field exists.

mod values;

pub use values::SerializerOptions;

use bitflags::bitflags;

use values::{Field, FlagField, TextField};

bitflags! {
    /// Functional areas an option applies to.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct OptionArea: u8 {
        const PARSER = 1;
        const SERIALIZER = 1 << 1;
        const SHARED = Self::PARSER.bits() | Self::SERIALIZER.bits();
    }
}

/// Value kind of an option.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OptionKind {
    /// Non-negative integer (flags are 0/1).
    Numeric,
    /// Owned string without NUL bytes.
    String,
}

/// Option identifiers.
///
/// The discriminant is the index of the option's entry in the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    Scanning,
    AllowNonNsAttributes,
    AllowOtherParsetypes,
    AllowBagId,
    AllowRdfTypeRdfList,
    NormalizeLanguage,
    NonNfcFatal,
    WarnOtherParsetypes,
    CheckRdfId,
    RelativeUris,
    WriterAutoIndent,
    WriterAutoEmpty,
    WriterIndentWidth,
    WriterXmlVersion,
    WriterXmlDeclaration,
    NoNet,
    ResourceBorder,
    LiteralBorder,
    BnodeBorder,
    ResourceFill,
    LiteralFill,
    BnodeFill,
    HtmlTagSoup,
    Microformats,
    HtmlLink,
    WwwTimeout,
    WriteBaseUri,
    WwwHttpCacheControl,
    WwwHttpUserAgent,
    JsonCallback,
    JsonExtraData,
    RssTriples,
    AtomEntryUri,
    PrefixElements,
}

impl OptionId {
    /// All identifiers, in catalog order.
    pub const ALL: [OptionId; 34] = [
        OptionId::Scanning,
        OptionId::AllowNonNsAttributes,
        OptionId::AllowOtherParsetypes,
        OptionId::AllowBagId,
        OptionId::AllowRdfTypeRdfList,
        OptionId::NormalizeLanguage,
        OptionId::NonNfcFatal,
        OptionId::WarnOtherParsetypes,
        OptionId::CheckRdfId,
        OptionId::RelativeUris,
        OptionId::WriterAutoIndent,
        OptionId::WriterAutoEmpty,
        OptionId::WriterIndentWidth,
        OptionId::WriterXmlVersion,
        OptionId::WriterXmlDeclaration,
        OptionId::NoNet,
        OptionId::ResourceBorder,
        OptionId::LiteralBorder,
        OptionId::BnodeBorder,
        OptionId::ResourceFill,
        OptionId::LiteralFill,
        OptionId::BnodeFill,
        OptionId::HtmlTagSoup,
        OptionId::Microformats,
        OptionId::HtmlLink,
        OptionId::WwwTimeout,
        OptionId::WriteBaseUri,
        OptionId::WwwHttpCacheControl,
        OptionId::WwwHttpUserAgent,
        OptionId::JsonCallback,
        OptionId::JsonExtraData,
        OptionId::RssTriples,
        OptionId::AtomEntryUri,
        OptionId::PrefixElements,
    ];

    /// The catalog entry for this option.
    #[inline]
    pub fn def(self) -> &'static OptionDef {
        &CATALOG[self as usize]
    }

    /// Catalog name, as used in `name=value` settings.
    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn kind(self) -> OptionKind {
        self.def().kind
    }

    pub fn is_numeric(self) -> bool {
        self.kind() == OptionKind::Numeric
    }

    /// Whether the option applies to `area`.
    pub fn is_valid_for_area(self, area: OptionArea) -> bool {
        self.def().areas.intersects(area)
    }

    /// Look up an option by its catalog name (exact match).
    pub fn from_name(name: &str) -> Option<OptionId> {
        CATALOG.iter().find(|def| def.name == name).map(|def| def.id)
    }
}

/// Static metadata for one option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDef {
    pub id: OptionId,
    pub name: &'static str,
    pub label: &'static str,
    pub kind: OptionKind,
    pub areas: OptionArea,
    pub(crate) field: Option<Field>,
}

impl OptionDef {
    /// Whether a serializer stores a value for this option.
    pub fn has_serializer_value(&self) -> bool {
        self.field.is_some()
    }
}

/// The full catalog, in identifier order.
pub fn catalog() -> &'static [OptionDef] {
    CATALOG
}

/// Options that apply to `area`, in catalog order.
pub fn for_area(area: OptionArea) -> impl Iterator<Item = &'static OptionDef> {
    CATALOG.iter().filter(move |def| def.areas.intersects(area))
}

/// The `index`-th option applying to `area`.
pub fn enumerate(area: OptionArea, index: usize) -> Option<&'static OptionDef> {
    for_area(area).nth(index)
}

const fn numeric(
    id: OptionId,
    name: &'static str,
    label: &'static str,
    areas: OptionArea,
    field: Option<Field>,
) -> OptionDef {
    OptionDef {
        id,
        name,
        label,
        kind: OptionKind::Numeric,
        areas,
        field,
    }
}

const fn string(
    id: OptionId,
    name: &'static str,
    label: &'static str,
    areas: OptionArea,
    field: Option<Field>,
) -> OptionDef {
    OptionDef {
        id,
        name,
        label,
        kind: OptionKind::String,
        areas,
        field,
    }
}

const PARSER: OptionArea = OptionArea::PARSER;
const SERIALIZER: OptionArea = OptionArea::SERIALIZER;
const SHARED: OptionArea = OptionArea::SHARED;

static CATALOG: &[OptionDef] = &[
    numeric(OptionId::Scanning, "scanning", "Scan for rdf:RDF in XML content", PARSER, None),
    numeric(
        OptionId::AllowNonNsAttributes,
        "allowNonNsAttributes",
        "Allow bare 'name' rather than namespaced 'rdf:name' for rdf:about, rdf:resource, rdf:ID and rdf:bagID",
        PARSER,
        None,
    ),
    numeric(
        OptionId::AllowOtherParsetypes,
        "allowOtherParsetypes",
        "Allow user-defined rdf:parseType values",
        PARSER,
        None,
    ),
    numeric(OptionId::AllowBagId, "allowBagID", "Allow rdf:bagID", PARSER, None),
    numeric(
        OptionId::AllowRdfTypeRdfList,
        "allowRDFtypeRDFlist",
        "Generate the collection rdf:type rdf:List triple",
        PARSER,
        None,
    ),
    numeric(
        OptionId::NormalizeLanguage,
        "normalizeLanguage",
        "Normalize xml:lang values to lowercase",
        PARSER,
        None,
    ),
    numeric(
        OptionId::NonNfcFatal,
        "nonNFCfatal",
        "Make non-NFC literals cause a fatal error",
        PARSER,
        None,
    ),
    numeric(
        OptionId::WarnOtherParsetypes,
        "warnOtherParseTypes",
        "Warn about unknown rdf:parseType values",
        PARSER,
        None,
    ),
    numeric(
        OptionId::CheckRdfId,
        "checkRdfID",
        "Check rdf:ID values for duplicates",
        PARSER,
        None,
    ),
    numeric(
        OptionId::RelativeUris,
        "relativeURIs",
        "Write relative URIs wherever possible in serializing",
        SERIALIZER,
        Some(Field::Flag(FlagField::RelativeUris)),
    ),
    numeric(
        OptionId::WriterAutoIndent,
        "writerAutoIndent",
        "Automatically indent elements when writing",
        SERIALIZER,
        None,
    ),
    numeric(
        OptionId::WriterAutoEmpty,
        "writerAutoEmpty",
        "Automatically close empty elements when writing",
        SERIALIZER,
        None,
    ),
    numeric(
        OptionId::WriterIndentWidth,
        "writerIndentWidth",
        "Indentation width when writing",
        SERIALIZER,
        None,
    ),
    numeric(
        OptionId::WriterXmlVersion,
        "writerXMLVersion",
        "XML version (10 or 11) to write",
        SERIALIZER,
        Some(Field::XmlVersion),
    ),
    numeric(
        OptionId::WriterXmlDeclaration,
        "writerXMLDeclaration",
        "Write an XML declaration",
        SERIALIZER,
        Some(Field::Flag(FlagField::WriteXmlDeclaration)),
    ),
    numeric(OptionId::NoNet, "noNet", "Deny network requests", SHARED, None),
    string(
        OptionId::ResourceBorder,
        "resourceBorder",
        "DOT serializer resource border color",
        SERIALIZER,
        Some(Field::Text(TextField::ResourceBorder)),
    ),
    string(
        OptionId::LiteralBorder,
        "literalBorder",
        "DOT serializer literal border color",
        SERIALIZER,
        Some(Field::Text(TextField::LiteralBorder)),
    ),
    string(
        OptionId::BnodeBorder,
        "bnodeBorder",
        "DOT serializer blank node border color",
        SERIALIZER,
        Some(Field::Text(TextField::BnodeBorder)),
    ),
    string(
        OptionId::ResourceFill,
        "resourceFill",
        "DOT serializer resource fill color",
        SERIALIZER,
        Some(Field::Text(TextField::ResourceFill)),
    ),
    string(
        OptionId::LiteralFill,
        "literalFill",
        "DOT serializer literal fill color",
        SERIALIZER,
        Some(Field::Text(TextField::LiteralFill)),
    ),
    string(
        OptionId::BnodeFill,
        "bnodeFill",
        "DOT serializer blank node fill color",
        SERIALIZER,
        Some(Field::Text(TextField::BnodeFill)),
    ),
    numeric(
        OptionId::HtmlTagSoup,
        "htmlTagSoup",
        "Use a lax HTML parser if an XML parser fails",
        PARSER,
        None,
    ),
    numeric(
        OptionId::Microformats,
        "microformats",
        "Look for microformats",
        PARSER,
        None,
    ),
    numeric(
        OptionId::HtmlLink,
        "htmlLink",
        "Look for head <link> to type rdf/xml for GRDDL",
        PARSER,
        None,
    ),
    numeric(
        OptionId::WwwTimeout,
        "wwwTimeout",
        "Set timeout for internal WWW requests",
        PARSER,
        None,
    ),
    numeric(
        OptionId::WriteBaseUri,
        "writeBaseURI",
        "Write @base directive or equivalent",
        SERIALIZER,
        Some(Field::Flag(FlagField::WriteBaseUri)),
    ),
    string(
        OptionId::WwwHttpCacheControl,
        "wwwHttpCacheControl",
        "HTTP Cache-Control header for internal WWW requests",
        PARSER,
        None,
    ),
    string(
        OptionId::WwwHttpUserAgent,
        "wwwHttpUserAgent",
        "HTTP User-Agent header for internal WWW requests",
        PARSER,
        None,
    ),
    string(
        OptionId::JsonCallback,
        "jsonCallback",
        "JSON serializer callback function name",
        SERIALIZER,
        Some(Field::Text(TextField::JsonCallback)),
    ),
    string(
        OptionId::JsonExtraData,
        "jsonExtraData",
        "JSON serializer extra top-level data",
        SERIALIZER,
        Some(Field::Text(TextField::JsonExtraData)),
    ),
    string(
        OptionId::RssTriples,
        "rssTriples",
        "Atom/RSS serializer writes extra RDF triples",
        SERIALIZER,
        Some(Field::Text(TextField::RssTriples)),
    ),
    string(
        OptionId::AtomEntryUri,
        "atomEntryUri",
        "Atom serializer entry URI",
        SERIALIZER,
        Some(Field::Text(TextField::AtomEntryUri)),
    ),
    numeric(
        OptionId::PrefixElements,
        "prefixElements",
        "Atom/RSS serializer prefixes elements with a namespace",
        SERIALIZER,
        Some(Field::Flag(FlagField::PrefixElements)),
    ),
];

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

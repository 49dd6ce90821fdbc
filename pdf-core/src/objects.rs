/// Object identifier: (object_number, generation_number).
/// Generation is always 0 for new documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub u32, pub u16);

/// PDF object types (PDF 32000-1:2008 §7.3).
#[derive(Debug, Clone)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`.
    Name(String),
    /// Literal string as raw bytes, stored without the enclosing parens.
    LiteralString(Vec<u8>),
    Array(Vec<PdfObject>),
    /// Key-value pairs in insertion order so output is deterministic.
    Dictionary(Vec<(String, PdfObject)>),
    Stream {
        dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
    },
    Reference(ObjId),
}

impl PdfObject {
    pub fn name(s: &str) -> Self {
        PdfObject::Name(s.to_string())
    }

    /// Literal string from UTF-8 text. Non-ASCII characters are written
    /// in their WinAnsi form.
    pub fn literal_string(s: &str) -> Self {
        PdfObject::LiteralString(crate::fonts::encode_win_ansi(s))
    }

    pub fn array(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }

    pub fn dict(entries: Vec<(&str, PdfObject)>) -> Self {
        PdfObject::Dictionary(owned_entries(entries))
    }

    pub fn stream(dict_entries: Vec<(&str, PdfObject)>, data: Vec<u8>) -> Self {
        PdfObject::Stream {
            dict: owned_entries(dict_entries),
            data,
        }
    }

    /// Array of four numbers, as used by `/MediaBox` and `/FontBBox`.
    pub fn rect(values: [f64; 4]) -> Self {
        PdfObject::Array(values.iter().map(|v| PdfObject::Real(*v)).collect())
    }
}

impl From<ObjId> for PdfObject {
    fn from(id: ObjId) -> Self {
        PdfObject::Reference(id)
    }
}

impl From<i64> for PdfObject {
    fn from(v: i64) -> Self {
        PdfObject::Integer(v)
    }
}

impl From<f64> for PdfObject {
    fn from(v: f64) -> Self {
        PdfObject::Real(v)
    }
}

fn owned_entries(entries: Vec<(&str, PdfObject)>) -> Vec<(String, PdfObject)> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

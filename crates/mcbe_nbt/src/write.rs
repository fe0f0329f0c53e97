//! Types for writing documents
//!

use binrw::BinWrite;
use byteorder::{LittleEndian, WriteBytesExt};
use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};
use tracing::{instrument, trace};

use crate::{
    error::{EncodingError, Result},
    tag::{Compound, List, Tag, TagType},
    types::{Document, Header},
};

impl Document {
    /// Number of bytes [`Document::to_bytes`] will produce, header included.
    pub fn encoded_len(&self) -> usize {
        Header::SIZE + payload_len(&self.root_name, &self.root)
    }

    /// Encode the document, recomputing the payload length.
    ///
    /// The header version is written unchanged. Nothing is returned unless the whole document
    /// could be encoded.
    ///
    /// ```
    /// # fn doit() -> mcbe_nbt::error::Result<()>
    /// # {
    /// use mcbe_nbt::{Compound, Document};
    ///
    /// let bytes = Document::new(10, Compound::new()).to_bytes()?;
    ///
    /// #[rustfmt::skip]
    /// assert_eq!(bytes, [
    ///     0x0A, 0x00, 0x00, 0x00,
    ///     0x04, 0x00, 0x00, 0x00,
    ///     0x0A, 0x00, 0x00, 0x00,
    /// ]);
    /// # Ok(())
    /// # }
    /// # doit().unwrap();
    /// ```
    #[instrument(skip_all, err, fields(version = self.header.version))]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let expected = self.encoded_len();

        let mut payload = EncodeState::new(Vec::with_capacity(expected - Header::SIZE));
        payload.write_root(&self.root_name, &self.root)?;
        let payload = payload.into_inner();

        let header = Header {
            version: self.header.version,
            payload_len: i32::try_from(payload.len())
                .map_err(|_| EncodingError::PayloadTooLong(payload.len()))?,
        };

        let mut out = Cursor::new(Vec::with_capacity(expected));
        header.write(&mut out)?;
        out.write_all(&payload)?;

        trace!(len = expected, "encoded document");
        Ok(out.into_inner())
    }

    /// Encode the document and write it to `writer`.
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Encode the document and write it to a file, replacing any existing contents.
    ///
    /// The file is not opened until encoding has succeeded.
    #[instrument(skip_all, err, fields(path = %path.as_ref().display()))]
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

fn string_len(s: &str) -> usize {
    2 + s.len()
}

fn payload_len(root_name: &str, root: &Compound) -> usize {
    1 + string_len(root_name) + compound_len(root)
}

fn compound_len(compound: &Compound) -> usize {
    compound
        .iter()
        .map(|(name, tag)| 1 + string_len(name) + tag_len(tag))
        .sum::<usize>()
        + 1
}

fn tag_len(tag: &Tag) -> usize {
    match tag {
        Tag::Byte(_) => 1,
        Tag::Short(_) => 2,
        Tag::Int(_) | Tag::Float(_) => 4,
        Tag::Long(_) | Tag::Double(_) => 8,
        Tag::ByteArray(v) => 4 + v.len(),
        Tag::String(s) => string_len(s),
        Tag::List(l) => list_len(l),
        Tag::Compound(c) => compound_len(c),
        Tag::IntArray(v) => 4 + v.len() * 4,
        Tag::LongArray(v) => 4 + v.len() * 8,
    }
}

fn list_len(list: &List) -> usize {
    5 + match list {
        List::End => 0,
        List::Byte(v) => v.len(),
        List::Short(v) => v.len() * 2,
        List::Int(v) => v.len() * 4,
        List::Long(v) => v.len() * 8,
        List::Float(v) => v.len() * 4,
        List::Double(v) => v.len() * 8,
        List::ByteArray(v) => v.iter().map(|a| 4 + a.len()).sum(),
        List::String(v) => v.iter().map(|s| string_len(s)).sum(),
        List::List(v) => v.iter().map(list_len).sum(),
        List::Compound(v) => v.iter().map(compound_len).sum(),
        List::IntArray(v) => v.iter().map(|a| 4 + a.len() * 4).sum(),
        List::LongArray(v) => v.iter().map(|a| 4 + a.len() * 8).sum(),
    }
}

struct EncodeState<W: Write> {
    writer: W,
}

impl<W: Write> EncodeState<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn into_inner(self) -> W {
        self.writer
    }

    fn write_root(&mut self, name: &str, root: &Compound) -> Result<()> {
        self.write_tag_type(TagType::Compound)?;
        self.write_string(name)?;
        self.write_compound(root)
    }

    fn write_tag_type(&mut self, tag_type: TagType) -> Result<()> {
        self.writer.write_u8(tag_type as u8)?;
        Ok(())
    }

    fn write_len(&mut self, kind: TagType, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| EncodingError::LengthTooLong { kind, len })?;
        self.writer.write_i32::<LittleEndian>(len)?;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(s.len()).map_err(|_| EncodingError::StringTooLong(s.len()))?;
        self.writer.write_u16::<LittleEndian>(len)?;
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_byte_array(&mut self, v: &[i8]) -> Result<()> {
        self.write_len(TagType::ByteArray, v.len())?;
        for &b in v {
            self.writer.write_i8(b)?;
        }
        Ok(())
    }

    fn write_int_array(&mut self, v: &[i32]) -> Result<()> {
        self.write_len(TagType::IntArray, v.len())?;
        for &i in v {
            self.writer.write_i32::<LittleEndian>(i)?;
        }
        Ok(())
    }

    fn write_long_array(&mut self, v: &[i64]) -> Result<()> {
        self.write_len(TagType::LongArray, v.len())?;
        for &l in v {
            self.writer.write_i64::<LittleEndian>(l)?;
        }
        Ok(())
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::Byte(v) => self.writer.write_i8(*v)?,
            Tag::Short(v) => self.writer.write_i16::<LittleEndian>(*v)?,
            Tag::Int(v) => self.writer.write_i32::<LittleEndian>(*v)?,
            Tag::Long(v) => self.writer.write_i64::<LittleEndian>(*v)?,
            Tag::Float(v) => self.writer.write_f32::<LittleEndian>(*v)?,
            Tag::Double(v) => self.writer.write_f64::<LittleEndian>(*v)?,
            Tag::ByteArray(v) => self.write_byte_array(v)?,
            Tag::String(s) => self.write_string(s)?,
            Tag::List(l) => self.write_list(l)?,
            Tag::Compound(c) => self.write_compound(c)?,
            Tag::IntArray(v) => self.write_int_array(v)?,
            Tag::LongArray(v) => self.write_long_array(v)?,
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, tag) in compound {
            self.write_tag_type(tag.tag_type())?;
            self.write_string(name)?;
            self.write_payload(tag)?;
        }
        self.write_tag_type(TagType::End)
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.write_tag_type(list.element_type())?;
        self.write_len(TagType::List, list.len())?;

        match list {
            List::End => {}
            List::Byte(v) => self.write_each(v, |w, &b| Ok(w.writer.write_i8(b)?))?,
            List::Short(v) => {
                self.write_each(v, |w, &s| Ok(w.writer.write_i16::<LittleEndian>(s)?))?
            }
            List::Int(v) => {
                self.write_each(v, |w, &i| Ok(w.writer.write_i32::<LittleEndian>(i)?))?
            }
            List::Long(v) => {
                self.write_each(v, |w, &l| Ok(w.writer.write_i64::<LittleEndian>(l)?))?
            }
            List::Float(v) => {
                self.write_each(v, |w, &f| Ok(w.writer.write_f32::<LittleEndian>(f)?))?
            }
            List::Double(v) => {
                self.write_each(v, |w, &d| Ok(w.writer.write_f64::<LittleEndian>(d)?))?
            }
            List::ByteArray(v) => self.write_each(v, |w, a| w.write_byte_array(a))?,
            List::String(v) => self.write_each(v, |w, s| w.write_string(s))?,
            List::List(v) => self.write_each(v, |w, l| w.write_list(l))?,
            List::Compound(v) => self.write_each(v, |w, c| w.write_compound(c))?,
            List::IntArray(v) => self.write_each(v, |w, a| w.write_int_array(a))?,
            List::LongArray(v) => self.write_each(v, |w, a| w.write_long_array(a))?,
        }
        Ok(())
    }

    fn write_each<T>(
        &mut self,
        items: &[T],
        mut write: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        for item in items {
            write(self, item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::{assert_eq, assert_str_eq};

    use crate::compound;
    use crate::error::{EncodingError, Error, Result};
    use crate::tag::{Compound, List, Tag};
    use crate::types::Document;

    fn encoding_error(result: Result<Vec<u8>>) -> EncodingError {
        match result {
            Err(Error::Encoding(e)) => e,
            other => panic!("expected an encoding error, got {other:?}"),
        }
    }

    #[test]
    fn write_scalars() -> Result<()> {
        let document = Document::new(
            10,
            compound! {
                "b" => 1i8,
                "s" => 2i16,
                "i" => 68,
                "f" => 1.0f32,
                "name" => "Test",
            },
        );

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x0A, 0x00, 0x00, 0x00,
            0x2C, 0x00, 0x00, 0x00,
            0x0A, 0x00, 0x00,
            0x01, 0x01, 0x00, b'b', 0x01,
            0x02, 0x01, 0x00, b's', 0x02, 0x00,
            0x03, 0x01, 0x00, b'i', 0x44, 0x00, 0x00, 0x00,
            0x05, 0x01, 0x00, b'f', 0x00, 0x00, 0x80, 0x3F,
            0x08, 0x04, 0x00, b'n', b'a', b'm', b'e', 0x04, 0x00, b'T', b'e', b's', b't',
            0x00,
        ];

        let actual = document.to_bytes()?;
        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));
        assert_eq!(document.encoded_len(), expected.len());

        Ok(())
    }

    #[test]
    fn write_empty_list_as_end() -> Result<()> {
        let document = Document::new(10, compound! { "l" => List::Int(vec![]) });

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x0A, 0x00, 0x00, 0x00,
            0x0D, 0x00, 0x00, 0x00,
            0x0A, 0x00, 0x00,
            0x09, 0x01, 0x00, b'l', 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00,
        ];

        assert_eq!(document.to_bytes()?, expected);

        Ok(())
    }

    #[test]
    fn write_list_uses_element_type() -> Result<()> {
        let document = Document::new(
            10,
            compound! {
                "l" => List::from(vec![compound! { "a" => 1i8 }, Compound::new()]),
            },
        );

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x0A, 0x00, 0x00, 0x00,
            0x14, 0x00, 0x00, 0x00,
            0x0A, 0x00, 0x00,
            0x09, 0x01, 0x00, b'l', 0x0A, 0x02, 0x00, 0x00, 0x00,
            0x01, 0x01, 0x00, b'a', 0x01, 0x00,
            0x00,
            0x00,
        ];

        let actual = document.to_bytes()?;
        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));
        assert_eq!(document.encoded_len(), expected.len());

        Ok(())
    }

    #[test]
    fn write_arrays() -> Result<()> {
        let document = Document::new(
            10,
            compound! {
                "b" => vec![-1i8, 2],
                "i" => vec![1i32],
                "l" => vec![-2i64],
            },
        );

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x0A, 0x00, 0x00, 0x00,
            0x2A, 0x00, 0x00, 0x00,
            0x0A, 0x00, 0x00,
            0x07, 0x01, 0x00, b'b', 0x02, 0x00, 0x00, 0x00, 0xFF, 0x02,
            0x0B, 0x01, 0x00, b'i', 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
            0x0C, 0x01, 0x00, b'l', 0x01, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0x00,
        ];

        let actual = document.to_bytes()?;
        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));
        assert_eq!(document.encoded_len(), expected.len());

        Ok(())
    }

    #[test]
    fn write_keeps_version_and_root_name() -> Result<()> {
        let mut document = Document::new(-3, Compound::new());
        document.root_name = "root".into();

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0xFD, 0xFF, 0xFF, 0xFF,
            0x08, 0x00, 0x00, 0x00,
            0x0A, 0x04, 0x00, b'r', b'o', b'o', b't',
            0x00,
        ];

        assert_eq!(document.to_bytes()?, expected);

        Ok(())
    }

    #[test]
    fn write_longest_string() -> Result<()> {
        let value = "x".repeat(65535);
        let document = Document::new(10, compound! { "s" => value.clone() });

        let bytes = document.to_bytes()?;
        let decoded = Document::from_bytes(&bytes)?;

        assert_eq!(decoded.root.get("s"), Some(&Tag::String(value)));

        Ok(())
    }

    #[test]
    fn write_string_too_long() {
        let document = Document::new(10, compound! { "s" => "x".repeat(65536) });

        assert_eq!(
            encoding_error(document.to_bytes()),
            EncodingError::StringTooLong(65536)
        );
    }

    #[test]
    fn write_name_too_long() {
        let document = Document::new(10, compound! { "é".repeat(40000) => 1i8 });

        assert_eq!(
            encoding_error(document.to_bytes()),
            EncodingError::StringTooLong(80000)
        );
    }

    #[test]
    fn write_to_writer() -> Result<()> {
        let document = Document::new(1, compound! { "a" => 1i8 });

        let mut out = Vec::new();
        document.to_writer(&mut out)?;

        assert_eq!(out, document.to_bytes()?);

        Ok(())
    }

    #[test]
    fn write_leaves_header_untouched() -> Result<()> {
        let document = Document::new(10, Compound::new());

        let bytes = document.to_bytes()?;
        assert_eq!(bytes[4..8], [0x04, 0x00, 0x00, 0x00]);
        assert_eq!(document.payload_len(), 0);

        let decoded = Document::from_bytes(&bytes)?;
        assert_eq!(decoded.payload_len(), 4);

        Ok(())
    }
}

//! Types for reading documents
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::{
    fs,
    io::{self, Cursor, Read},
    path::Path,
};
use tracing::{debug, instrument, warn};

use crate::{
    error::{Error, FormatError, Result},
    tag::{Compound, List, Tag, TagType},
    types::{Document, Header},
};

/// Largest byte array accepted, in bytes. Int and long arrays are limited to the same number
/// of bytes.
pub const MAX_ARRAY_BYTES: i32 = 1024 * 1024;

/// Largest number of elements accepted in a list
pub const MAX_LIST_LEN: i32 = 65536;

/// Deepest nesting of lists and compounds accepted
pub const MAX_DEPTH: usize = 512;

impl Document {
    /// Decode a document held in memory.
    ///
    /// If the header declares a payload length that is negative or longer than the data that
    /// follows, the whole buffer is decoded as a headerless document with version `0`.
    ///
    /// ```
    /// # fn doit() -> mcbe_nbt::error::Result<()>
    /// # {
    /// #[rustfmt::skip]
    /// let data = [
    ///     0x0A, 0x00, 0x00, 0x00, // Version
    ///     0x04, 0x00, 0x00, 0x00, // Payload Length
    ///     0x0A, 0x00, 0x00, 0x00, // Empty root compound
    /// ];
    ///
    /// let document = mcbe_nbt::Document::from_bytes(&data)?;
    /// assert_eq!(document.version(), 10);
    /// assert!(document.root.is_empty());
    /// # Ok(())
    /// # }
    /// # doit().unwrap();
    /// ```
    #[instrument(skip_all, err, fields(size = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Document> {
        if data.len() < Header::SIZE {
            return Err(FormatError::TooSmall(data.len()).into());
        }

        let mut header = Header::read(&mut Cursor::new(&data[..Header::SIZE]))?;
        let remaining = data.len() - Header::SIZE;

        let payload = if header.payload_len < 0 || header.payload_len as usize > remaining {
            debug!(
                declared = header.payload_len,
                remaining, "payload length out of range, decoding without header"
            );
            header = Header {
                version: 0,
                payload_len: i32::try_from(data.len()).unwrap_or(i32::MAX),
            };
            data
        } else {
            &data[Header::SIZE..Header::SIZE + header.payload_len as usize]
        };

        let mut state = DecodeState::new(payload);
        let (root_name, root) = state.read_root()?;

        if !state.input.is_empty() {
            debug!(trailing = state.input.len(), "ignoring bytes after root tag");
        }

        Ok(Document {
            header,
            root_name,
            root,
        })
    }

    /// Read an entire stream into memory and decode it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Document> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Read a file into memory and decode it.
    #[instrument(skip_all, err, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Document> {
        let data = fs::read(path.as_ref())?;
        Self::from_bytes(&data)
    }
}

fn eof(_: io::Error) -> Error {
    FormatError::UnexpectedEof.into()
}

struct DecodeState<'a> {
    input: &'a [u8],
    depth: usize,
}

impl<'a> DecodeState<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, depth: 0 }
    }

    fn read_root(&mut self) -> Result<(String, Compound)> {
        match self.read_tag_type()? {
            TagType::End => Ok((String::new(), Compound::new())),
            TagType::Compound => {
                let name = self.read_string()?;
                let root = self.read_compound()?;
                Ok((name, root))
            }
            other => Err(FormatError::RootNotCompound(other).into()),
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(FormatError::DepthExceeded(MAX_DEPTH).into());
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.input.len() {
            return Err(FormatError::UnexpectedEof.into());
        }

        let (head, tail) = self.input.split_at(len);
        self.input = tail;
        Ok(head)
    }

    fn read_tag_type(&mut self) -> Result<TagType> {
        let value = self.input.read_u8().map_err(eof)?;
        Ok(TagType::try_from(value)?)
    }

    fn read_payload(&mut self, tag_type: TagType) -> Result<Tag> {
        Ok(match tag_type {
            TagType::End => return Err(FormatError::UnknownTag(TagType::End as u8).into()),
            TagType::Byte => Tag::Byte(self.read_byte()?),
            TagType::Short => Tag::Short(self.read_short()?),
            TagType::Int => Tag::Int(self.read_int()?),
            TagType::Long => Tag::Long(self.read_long()?),
            TagType::Float => Tag::Float(self.read_float()?),
            TagType::Double => Tag::Double(self.read_double()?),
            TagType::ByteArray => Tag::ByteArray(self.read_byte_array()?),
            TagType::String => Tag::String(self.read_string()?),
            TagType::List => Tag::List(self.read_list()?),
            TagType::Compound => Tag::Compound(self.read_compound()?),
            TagType::IntArray => Tag::IntArray(self.read_int_array()?),
            TagType::LongArray => Tag::LongArray(self.read_long_array()?),
        })
    }

    fn read_byte(&mut self) -> Result<i8> {
        self.input.read_i8().map_err(eof)
    }

    fn read_short(&mut self) -> Result<i16> {
        self.input.read_i16::<LittleEndian>().map_err(eof)
    }

    fn read_int(&mut self) -> Result<i32> {
        self.input.read_i32::<LittleEndian>().map_err(eof)
    }

    fn read_long(&mut self) -> Result<i64> {
        self.input.read_i64::<LittleEndian>().map_err(eof)
    }

    fn read_float(&mut self) -> Result<f32> {
        self.input.read_f32::<LittleEndian>().map_err(eof)
    }

    fn read_double(&mut self) -> Result<f64> {
        self.input.read_f64::<LittleEndian>().map_err(eof)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.input.read_u16::<LittleEndian>().map_err(eof)? as usize;
        let bytes = self.take(len)?;

        Ok(match std::str::from_utf8(bytes) {
            Ok(s) => s.to_owned(),
            Err(e) => {
                warn!(error = %e, len, "string is not valid utf-8, replacing invalid sequences");
                String::from_utf8_lossy(bytes).into_owned()
            }
        })
    }

    /// Reads an array length and checks it against the ceiling and the bytes left.
    fn read_array_len(&mut self, kind: TagType, elem_size: usize, max: i32) -> Result<usize> {
        let len = self.read_int()?;
        if !(0..=max).contains(&len) {
            return Err(FormatError::InvalidLength { kind, len }.into());
        }

        let remaining = self.input.len();
        if len as usize * elem_size > remaining {
            return Err(FormatError::LengthExceedsBuffer {
                kind,
                len,
                remaining,
            }
            .into());
        }

        Ok(len as usize)
    }

    fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let len = self.read_array_len(TagType::ByteArray, 1, MAX_ARRAY_BYTES)?;
        Ok(self.take(len)?.iter().map(|&b| b as i8).collect())
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_array_len(TagType::IntArray, 4, MAX_ARRAY_BYTES / 4)?;
        self.read_n(len, Self::read_int)
    }

    fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_array_len(TagType::LongArray, 8, MAX_ARRAY_BYTES / 8)?;
        self.read_n(len, Self::read_long)
    }

    fn read_n<T>(
        &mut self,
        len: usize,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(read(self)?);
        }
        Ok(out)
    }

    fn read_list(&mut self) -> Result<List> {
        let elem_type = self.read_tag_type()?;
        let len = self.read_int()?;

        if !(0..=MAX_LIST_LEN).contains(&len) {
            return Err(FormatError::InvalidLength {
                kind: TagType::List,
                len,
            }
            .into());
        }

        if len == 0 {
            return Ok(List::End);
        }

        if elem_type == TagType::End {
            return Err(FormatError::NonEmptyEndList(len).into());
        }

        let remaining = self.input.len();
        if len as usize * elem_type.min_payload_size() > remaining {
            return Err(FormatError::LengthExceedsBuffer {
                kind: TagType::List,
                len,
                remaining,
            }
            .into());
        }

        let len = len as usize;
        self.enter()?;
        let list = match elem_type {
            TagType::End => List::End,
            TagType::Byte => List::Byte(self.read_n(len, Self::read_byte)?),
            TagType::Short => List::Short(self.read_n(len, Self::read_short)?),
            TagType::Int => List::Int(self.read_n(len, Self::read_int)?),
            TagType::Long => List::Long(self.read_n(len, Self::read_long)?),
            TagType::Float => List::Float(self.read_n(len, Self::read_float)?),
            TagType::Double => List::Double(self.read_n(len, Self::read_double)?),
            TagType::ByteArray => List::ByteArray(self.read_n(len, Self::read_byte_array)?),
            TagType::String => List::String(self.read_n(len, Self::read_string)?),
            TagType::List => List::List(self.read_n(len, Self::read_list)?),
            TagType::Compound => List::Compound(self.read_n(len, Self::read_compound)?),
            TagType::IntArray => List::IntArray(self.read_n(len, Self::read_int_array)?),
            TagType::LongArray => List::LongArray(self.read_n(len, Self::read_long_array)?),
        };
        self.leave();

        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;

        let mut compound = Compound::new();
        loop {
            let tag_type = self.read_tag_type()?;
            if tag_type == TagType::End {
                break;
            }

            let name = self.read_string()?;
            let tag = self.read_payload(tag_type)?;

            if compound.contains_key(&name) {
                debug!(
                    name = name.as_str(),
                    "duplicate name in compound, keeping the last value"
                );
            }
            compound.insert(name, tag);
        }

        self.leave();
        Ok(compound)
    }
}

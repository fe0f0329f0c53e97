//! Base types for structure of a document.

use binrw::{BinRead, BinWrite};

use crate::tag::Compound;

/// Document header
///
/// Defines the 8 byte header in front of every document. All data is stored in little endian
/// format.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Header {
    /// The storage version of the document
    pub version: i32,

    /// The number of bytes of the root tag following the header
    pub payload_len: i32,
}

impl Header {
    /// Size of the header in bytes
    pub const SIZE: usize = 8;
}

/// A decoded document: the header and the root compound it describes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Header as read, or as constructed. Encoding never updates it.
    pub header: Header,

    /// Name of the root tag, nearly always empty
    pub root_name: String,

    /// The root compound
    pub root: Compound,
}

impl Document {
    /// Create a document around a root compound. The stored payload length is 0; the written
    /// header carries the recomputed length.
    pub fn new(version: i32, root: Compound) -> Self {
        Self {
            header: Header {
                version,
                payload_len: 0,
            },
            root_name: String::new(),
            root,
        }
    }

    /// Storage version from the header
    pub fn version(&self) -> i32 {
        self.header.version
    }

    /// Length in bytes of the root tag, as declared by the header that was read
    pub fn payload_len(&self) -> i32 {
        self.header.payload_len
    }
}

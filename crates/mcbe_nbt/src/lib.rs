//! This library handles reading from and creating the **little-endian NBT** documents used by
//! *Minecraft: Bedrock Edition*, such as a world's `level.dat`.
//!
//! # Document Format Documentation
//!
//! A document is a small fixed header followed by a single named root tag, which is always a
//! compound. Unlike the Java edition format, every multi-byte value is stored little-endian and
//! the payload is never compressed.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Version                | 4 bytes: Storage format version (signed)                   |
//! | 0x0004         | Payload Length         | 4 bytes: Number of bytes in the root tag that follows      |
//! | 0x0008         | Root Tag               | (Payload Length) bytes: A named compound tag               |
//!
//! ### Header
//!
//! - **Version**: A 4-byte signed integer, the storage version of the world. It is re-emitted
//!   unchanged when a document is written back.
//! - **Payload Length**: A 4-byte signed integer giving the size of the root tag. It is recomputed
//!   on every write.
//!
//! Older files were written without a header. When the declared payload length is negative or
//! larger than the rest of the buffer, the whole buffer is read as the root tag and the version is
//! reported as `0`.
//!
//! ### Tags
//!
//! Every named tag is stored as a 1-byte type, a name and a payload:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Type                   | 1 byte: One of the [`TagType`] discriminants            |
//! | 0x0001         | Name Length            | 2 bytes: Unsigned length of the name in bytes           |
//! | 0x0003         | Name                   | (Name Length) bytes: UTF-8 name                         |
//! | ...            | Payload                | Depends on the type                                     |
//!
//! | Type | Name      | Payload                                                                  |
//! |------|-----------|--------------------------------------------------------------------------|
//! | 0    | End       | None, terminates a compound                                              |
//! | 1    | Byte      | 1 byte signed                                                            |
//! | 2    | Short     | 2 bytes signed                                                           |
//! | 3    | Int       | 4 bytes signed                                                           |
//! | 4    | Long      | 8 bytes signed                                                           |
//! | 5    | Float     | 4 bytes IEEE-754                                                         |
//! | 6    | Double    | 8 bytes IEEE-754                                                         |
//! | 7    | ByteArray | 4 byte signed length, then that many bytes                               |
//! | 8    | String    | 2 byte unsigned length, then that many bytes of UTF-8                    |
//! | 9    | List      | 1 byte element type, 4 byte signed length, then unnamed payloads         |
//! | 10   | Compound  | Named tags until an End type byte                                        |
//! | 11   | IntArray  | 4 byte signed length, then that many 4 byte integers                     |
//! | 12   | LongArray | 4 byte signed length, then that many 8 byte integers                     |
//!
//! An empty list is always written with the End element type.
//!
//! ## Limits
//!
//! Decoding refuses lengths that would allow a corrupt file to exhaust memory:
//!
//! - **ByteArray**: at most 1 MiB elements
//! - **IntArray**: at most 1 MiB / 4 elements
//! - **LongArray**: at most 1 MiB / 8 elements
//! - **List**: at most 65536 elements
//! - **Nesting**: at most 512 nested lists and compounds
//!
//! ## Example
//!
//! ```
//! # fn doit() -> mcbe_nbt::error::Result<()>
//! # {
//! use mcbe_nbt::{compound, Document, Tag};
//!
//! let document = Document::new(10, compound! {
//!     "LevelName" => "My World",
//!     "SpawnY" => 68,
//! });
//!
//! let bytes = document.to_bytes()?;
//! let decoded = Document::from_bytes(&bytes)?;
//!
//! assert_eq!(decoded.version(), 10);
//! assert_eq!(decoded.root.get("SpawnY").and_then(Tag::as_int), Some(68));
//! # Ok(())
//! # }
//! # doit().unwrap();
//! ```
//!

pub mod error;
pub mod read;
pub mod tag;
pub mod types;
pub mod write;

pub use tag::{Compound, List, Tag, TagType};
pub use types::{Document, Header};

//! In-memory tag model.

use derive_more::derive::{Deref, DerefMut, Display, From};
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::error::FormatError;

/// One of the possible tag discriminants.
///
/// The numeric value of each variant is the byte stored in the document.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TagType {
    // Variant order is significant!
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagType {
    /// Whether this is one of the fixed width numeric types.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            TagType::Byte
                | TagType::Short
                | TagType::Int
                | TagType::Long
                | TagType::Float
                | TagType::Double
        )
    }

    /// Whether this is one of the numeric array types.
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            TagType::ByteArray | TagType::IntArray | TagType::LongArray
        )
    }

    /// The smallest number of bytes a payload of this type can occupy.
    pub const fn min_payload_size(self) -> usize {
        match self {
            TagType::End => 0,
            TagType::Byte => 1,
            TagType::Short => 2,
            TagType::Int => 4,
            TagType::Long => 8,
            TagType::Float => 4,
            TagType::Double => 8,
            TagType::ByteArray => 4,
            TagType::String => 2,
            TagType::List => 5,
            TagType::Compound => 1,
            TagType::IntArray => 4,
            TagType::LongArray => 4,
        }
    }
}

impl TryFrom<u8> for TagType {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => TagType::End,
            1 => TagType::Byte,
            2 => TagType::Short,
            3 => TagType::Int,
            4 => TagType::Long,
            5 => TagType::Float,
            6 => TagType::Double,
            7 => TagType::ByteArray,
            8 => TagType::String,
            9 => TagType::List,
            10 => TagType::Compound,
            11 => TagType::IntArray,
            12 => TagType::LongArray,
            _ => return Err(FormatError::UnknownTag(value)),
        })
    }
}

/// A single tag payload.
///
/// The name of a tag is the key it is stored under in its parent [`Compound`]; list elements
/// and the document root have no name of their own.
#[derive(Clone, Debug, PartialEq, From)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// The discriminant of this tag
    pub const fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a child by name, if this tag is a compound
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|c| c.get(key))
    }

    /// Look up a child by name for modification, if this tag is a compound
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.as_compound_mut().and_then(|c| c.get_mut(key))
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_owned())
    }
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Tag::Byte(value as i8)
    }
}

/// A homogeneous list of unnamed payloads.
///
/// An empty list has no element type and is stored as [`List::End`]. Two empty lists compare
/// equal whatever their variant, since the format cannot tell them apart.
#[derive(Clone, Debug, Default)]
pub enum List {
    #[default]
    End,
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<i8>>),
    String(Vec<String>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

impl List {
    /// The type written for this list's elements. Empty lists always report [`TagType::End`].
    pub fn element_type(&self) -> TagType {
        if self.is_empty() {
            return TagType::End;
        }

        match self {
            List::End => TagType::End,
            List::Byte(_) => TagType::Byte,
            List::Short(_) => TagType::Short,
            List::Int(_) => TagType::Int,
            List::Long(_) => TagType::Long,
            List::Float(_) => TagType::Float,
            List::Double(_) => TagType::Double,
            List::ByteArray(_) => TagType::ByteArray,
            List::String(_) => TagType::String,
            List::List(_) => TagType::List,
            List::Compound(_) => TagType::Compound,
            List::IntArray(_) => TagType::IntArray,
            List::LongArray(_) => TagType::LongArray,
        }
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        match self {
            List::End => 0,
            List::Byte(v) => v.len(),
            List::Short(v) => v.len(),
            List::Int(v) => v.len(),
            List::Long(v) => v.len(),
            List::Float(v) => v.len(),
            List::Double(v) => v.len(),
            List::ByteArray(v) => v.len(),
            List::String(v) => v.len(),
            List::List(v) => v.len(),
            List::Compound(v) => v.len(),
            List::IntArray(v) => v.len(),
            List::LongArray(v) => v.len(),
        }
    }

    /// Whether the list contains no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_empty() && b.is_empty() => true,
            (List::Byte(a), List::Byte(b)) => a == b,
            (List::Short(a), List::Short(b)) => a == b,
            (List::Int(a), List::Int(b)) => a == b,
            (List::Long(a), List::Long(b)) => a == b,
            (List::Float(a), List::Float(b)) => a == b,
            (List::Double(a), List::Double(b)) => a == b,
            (List::ByteArray(a), List::ByteArray(b)) => a == b,
            (List::String(a), List::String(b)) => a == b,
            (List::List(a), List::List(b)) => a == b,
            (List::Compound(a), List::Compound(b)) => a == b,
            (List::IntArray(a), List::IntArray(b)) => a == b,
            (List::LongArray(a), List::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! list_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for List {
                fn from(value: Vec<$ty>) -> Self {
                    if value.is_empty() {
                        List::End
                    } else {
                        List::$variant(value)
                    }
                }
            }
        )*
    };
}

list_from_vec! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

#[cfg(feature = "serde")]
impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            List::End => serializer.collect_seq(std::iter::empty::<()>()),
            List::Byte(v) => v.serialize(serializer),
            List::Short(v) => v.serialize(serializer),
            List::Int(v) => v.serialize(serializer),
            List::Long(v) => v.serialize(serializer),
            List::Float(v) => v.serialize(serializer),
            List::Double(v) => v.serialize(serializer),
            List::ByteArray(v) => v.serialize(serializer),
            List::String(v) => v.serialize(serializer),
            List::List(v) => v.serialize(serializer),
            List::Compound(v) => v.serialize(serializer),
            List::IntArray(v) => v.serialize(serializer),
            List::LongArray(v) => v.serialize(serializer),
        }
    }
}

/// An insertion ordered map of named tags.
///
/// Re-inserting an existing name replaces the tag but keeps its original position. Equality
/// takes the order of the entries into account, because the order is part of the encoded form.
#[derive(Clone, Debug, Default, Deref, DerefMut, From)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Insert a tag, returning the tag previously stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        self.0.insert(key.into(), tag.into())
    }

    /// Unwrap the underlying map
    pub fn into_inner(self) -> IndexMap<String, Tag> {
        self.0
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<K: Into<String>, V: Into<Tag>> FromIterator<(K, V)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut compound = Compound::new();
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a [`Compound`] from `name => value` pairs, keeping their order.
///
/// ```
/// use mcbe_nbt::{compound, Tag};
///
/// let c = compound! {
///     "LevelName" => "Test",
///     "SpawnY" => 68,
///     "abilities" => compound! { "flying" => false },
/// };
///
/// assert_eq!(c.get("SpawnY"), Some(&Tag::Int(68)));
/// ```
#[macro_export]
macro_rules! compound {
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::Compound as ::core::iter::FromIterator<(::std::string::String, $crate::Tag)>>::from_iter([
            $(
                (::std::string::String::from($key), $crate::Tag::from($value)),
            )*
        ])
    };
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::error::FormatError;
    use crate::tag::{Compound, List, Tag, TagType};

    #[test]
    fn tag_type_from_byte() {
        assert_eq!(TagType::try_from(0u8), Ok(TagType::End));
        assert_eq!(TagType::try_from(10u8), Ok(TagType::Compound));
        assert_eq!(TagType::try_from(12u8), Ok(TagType::LongArray));
        assert_eq!(TagType::try_from(13u8), Err(FormatError::UnknownTag(13)));
        assert_eq!(TagType::try_from(0xFFu8), Err(FormatError::UnknownTag(0xFF)));
    }

    #[test]
    fn tag_type_names() {
        assert_eq!(TagType::ByteArray.to_string(), "ByteArray");
        assert_eq!(TagType::Compound.to_string(), "Compound");
        assert_eq!(TagType::End.to_string(), "End");
    }

    #[test]
    fn compound_keeps_insertion_order() {
        let mut c = Compound::new();
        c.insert("A", 1i32);
        c.insert("C", 2i32);
        c.insert("B", 3i32);

        assert_eq!(c.keys().collect::<Vec<_>>(), vec!["A", "C", "B"]);
    }

    #[test]
    fn compound_overwrite_keeps_slot() {
        let mut c = Compound::new();
        c.insert("A", 1i32);
        c.insert("B", 2i32);
        let previous = c.insert("A", "replaced");

        assert_eq!(previous, Some(Tag::Int(1)));
        assert_eq!(c.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(c.get("A"), Some(&Tag::String("replaced".into())));
    }

    #[test]
    fn compound_equality_is_order_sensitive() {
        let ab = compound! { "a" => 1i8, "b" => 2i8 };
        let ba = compound! { "b" => 2i8, "a" => 1i8 };

        assert_ne!(ab, ba);
        assert_eq!(ab, compound! { "a" => 1i8, "b" => 2i8 });
    }

    #[test]
    fn empty_lists_are_untyped() {
        assert_eq!(List::from(Vec::<i32>::new()), List::End);
        assert_eq!(List::Int(vec![]), List::End);
        assert_eq!(List::Int(vec![]).element_type(), TagType::End);
        assert_eq!(List::from(vec![1i32, 2]).element_type(), TagType::Int);
        assert_ne!(List::Int(vec![1]), List::Long(vec![1]));
    }

    #[test]
    fn nested_lookup() {
        let root = Tag::Compound(compound! {
            "abilities" => compound! { "flySpeed" => 0.05f32 },
        });

        assert_eq!(
            root.get("abilities")
                .and_then(|a| a.get("flySpeed"))
                .and_then(Tag::as_float),
            Some(0.05)
        );
        assert_eq!(root.get("missing"), None);
        assert_eq!(Tag::Int(1).get("abilities"), None);
    }
}

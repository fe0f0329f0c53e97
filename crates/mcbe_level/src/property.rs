//! Path addressed views of, and text edits to, the tags of a compound tree.

use mcbe_nbt::{Compound, Tag, TagType};
use tracing::debug;

use crate::category::Category;
use crate::error::PathError;

/// A view of one tag inside a tree, together with the path used to reach it.
///
/// A property borrows the tree it was taken from, so it has to be looked up again after the tree
/// has been modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Property<'a> {
    path: String,
    name: &'a str,
    tag: &'a Tag,
    category: Category,
}

impl<'a> Property<'a> {
    fn new(path: String, name: &'a str, tag: &'a Tag) -> Self {
        let category = Category::of(&path);
        Self {
            path,
            name,
            tag,
            category,
        }
    }

    /// Dot-joined names from the root, e.g. `abilities.flySpeed`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the tag in its parent compound
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn tag(&self) -> &'a Tag {
        self.tag
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tag_type(&self) -> TagType {
        self.tag.tag_type()
    }

    pub fn type_name(&self) -> String {
        self.tag_type().to_string()
    }

    /// The name with its first letter upper-cased and a space before every later upper-case
    /// letter, so `flySpeed` becomes `Fly Speed`.
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for (i, c) in self.name.chars().enumerate() {
            if i == 0 {
                out.extend(c.to_uppercase());
            } else {
                if c.is_uppercase() {
                    out.push(' ');
                }
                out.push(c);
            }
        }
        out
    }

    /// The value as text. Containers and arrays are summarised by their size.
    pub fn value_string(&self) -> String {
        match self.tag {
            Tag::Byte(v) => v.to_string(),
            Tag::Short(v) => v.to_string(),
            Tag::Int(v) => v.to_string(),
            Tag::Long(v) => v.to_string(),
            Tag::Float(v) => format!("{v:?}"),
            Tag::Double(v) => format!("{v:?}"),
            Tag::String(v) => v.clone(),
            Tag::List(l) => format!("[{} items]", l.len()),
            Tag::Compound(c) => format!("{{{} entries}}", c.len()),
            Tag::ByteArray(v) => format!("byte[{}]", v.len()),
            Tag::IntArray(v) => format!("int[{}]", v.len()),
            Tag::LongArray(v) => format!("long[{}]", v.len()),
        }
    }

    /// A byte holding `0` or `1`, which is best shown as a switch. It is still stored as a byte.
    pub fn is_boolean(&self) -> bool {
        matches!(self.tag, Tag::Byte(0 | 1))
    }

    pub fn is_numeric(&self) -> bool {
        self.tag_type().is_numeric()
    }
}

/// List the properties of a tree in depth-first order.
///
/// Compounds are descended into and not listed themselves. Numeric arrays are skipped.
pub fn properties(root: &Compound) -> Vec<Property<'_>> {
    let mut out = Vec::new();
    collect(root, "", &mut out);
    out
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

fn collect<'a>(compound: &'a Compound, prefix: &str, out: &mut Vec<Property<'a>>) {
    for (name, tag) in compound {
        let path = join(prefix, name);
        match tag {
            Tag::Compound(child) => collect(child, &path, out),
            Tag::ByteArray(_) | Tag::IntArray(_) | Tag::LongArray(_) => {}
            _ => out.push(Property::new(path, name, tag)),
        }
    }
}

/// Group properties by category, in the order each category first appears.
pub fn group_by_category<'p, 'a>(
    properties: &'p [Property<'a>],
) -> Vec<(Category, Vec<&'p Property<'a>>)> {
    let mut groups: Vec<(Category, Vec<&'p Property<'a>>)> = Vec::new();
    for property in properties {
        match groups.iter_mut().find(|(c, _)| *c == property.category) {
            Some((_, members)) => members.push(property),
            None => groups.push((property.category, vec![property])),
        }
    }
    groups
}

/// Look up the tag at `path`, whatever its type.
pub fn get<'a>(root: &'a Compound, path: &str) -> Option<Property<'a>> {
    let (parents, last) = split(path);

    let mut current = root;
    if let Some(parents) = parents {
        for segment in parents.split('.') {
            current = current.get(segment)?.as_compound()?;
        }
    }

    let (name, tag) = current.get_key_value(last)?;
    Some(Property::new(path.to_owned(), name, tag))
}

fn split(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    }
}

fn resolve_mut<'a>(root: &'a mut Compound, path: &str) -> Result<&'a mut Tag, PathError> {
    let (parents, last) = split(path);

    let mut current = root;
    if let Some(parents) = parents {
        let mut end = 0;
        for segment in parents.split('.') {
            end += segment.len();
            current = match current.get_mut(segment) {
                Some(Tag::Compound(child)) => child,
                Some(_) => return Err(PathError::NotCompound(path[..end].to_owned())),
                None => return Err(PathError::NotFound(path[..end].to_owned())),
            };
            end += 1;
        }
    }

    current
        .get_mut(last)
        .ok_or_else(|| PathError::NotFound(path.to_owned()))
}

fn parse_value(path: &str, current: &Tag, text: &str) -> Result<Tag, PathError> {
    let kind = current.tag_type();
    let invalid = || PathError::InvalidValue {
        value: text.to_owned(),
        kind,
    };
    let number = text.trim();

    Ok(match current {
        Tag::Byte(_) => Tag::Byte(number.parse().map_err(|_| invalid())?),
        Tag::Short(_) => Tag::Short(number.parse().map_err(|_| invalid())?),
        Tag::Int(_) => Tag::Int(number.parse().map_err(|_| invalid())?),
        Tag::Long(_) => Tag::Long(number.parse().map_err(|_| invalid())?),
        Tag::Float(_) => Tag::Float(number.parse().map_err(|_| invalid())?),
        Tag::Double(_) => Tag::Double(number.parse().map_err(|_| invalid())?),
        Tag::String(_) => Tag::String(text.to_owned()),
        _ => {
            return Err(PathError::NotEditable {
                path: path.to_owned(),
                kind,
            })
        }
    })
}

/// Set the tag at `path` from text, keeping its type.
///
/// Numbers are parsed after trimming surrounding whitespace, so `" 1"` sets an Int to `1`. Strings
/// are stored exactly as given, whitespace included. Nothing is changed when an error is returned.
pub fn try_update(root: &mut Compound, path: &str, value: &str) -> Result<(), PathError> {
    let target = resolve_mut(root, path)?;
    *target = parse_value(path, target, value)?;
    Ok(())
}

/// Set the tag at `path` from text, keeping its type, or leave the tree unchanged if that is not
/// possible. See [`try_update`].
pub fn update(root: &mut Compound, path: &str, value: &str) {
    if let Err(e) = try_update(root, path, value) {
        debug!(path, error = %e, "update declined");
    }
}

//! This library edits the `level.dat` of a *Minecraft: Bedrock Edition* world one property at a
//! time, on top of the documents read and written by [`mcbe_nbt`].
//!
//! # Properties
//!
//! Every tag reachable from the root compound through nested compounds is addressed by the
//! dot-joined names of the compounds leading to it, e.g. `abilities.flySpeed`. Compounds are
//! descended into rather than listed, and the numeric array types are never listed, so the
//! properties of a document are its scalars, strings and lists in depth-first order.
//!
//! Updates take the new value as text and convert it to the type the tag already has. An update
//! never changes the type of a tag and never adds or removes one. When the text cannot be
//! converted, or the path does not name an editable tag, the document is left unchanged.
//!
//! ## Categories
//!
//! Each property is placed in a [`Category`] by matching keywords against its lower-cased path.
//! The rules are tried in the order below and the first match wins:
//!
//! | Keywords                        | Category            |
//! |---------------------------------|---------------------|
//! | `spawn`, `position`, `pos`      | Position            |
//! | `game`, `mode`, `difficulty`    | Game Settings       |
//! | `time`, `day`, `tick`           | Time                |
//! | `weather`, `rain`, `thunder`    | Weather             |
//! | `player`, `xp`, `level`         | Player              |
//! | `world`, `seed`, `generator`    | World               |
//! | `cheat`, `command`, `allow`     | Cheats & Commands   |
//! | `experiment`, `beta`            | Experiments         |
//! | anything else                   | Other               |
//!
//! # World Directory
//!
//! | File               | Description                                                   |
//! |--------------------|---------------------------------------------------------------|
//! | `level.dat`        | World settings document                                       |
//! | `level.dat.backup` | Copy of `level.dat` taken before it is overwritten            |
//! | `levelname.txt`    | Display name of the world, kept in step with `LevelName`      |
//!
//! ## Example
//!
//! ```
//! # fn doit() -> mcbe_level::error::Result<()>
//! # {
//! use mcbe_level::{properties, update, Category};
//! use mcbe_nbt::{compound, Tag};
//!
//! let mut root = compound! {
//!     "GameType" => 0,
//!     "SpawnY" => 68,
//! };
//!
//! update(&mut root, "GameType", "1");
//! assert_eq!(root.get("GameType"), Some(&Tag::Int(1)));
//!
//! let list = properties(&root);
//! assert_eq!(list[1].path(), "SpawnY");
//! assert_eq!(list[1].category(), Category::Position);
//! # Ok(())
//! # }
//! # doit().unwrap();
//! ```
//!

pub mod category;
pub mod error;
pub mod property;
pub mod world;

pub use category::Category;
pub use property::{get, group_by_category, properties, try_update, update, Property};
pub use world::{discover, GameMode, SaveOptions, World};

//! Editing session over one world directory.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use bon::Builder;
use mcbe_nbt::{Compound, Document, Tag};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::error::{Error, PathError, Result};
use crate::property::{self, Property};

/// World settings document
pub const LEVEL_DAT: &str = "level.dat";

/// Copy of the settings document taken before saving
pub const LEVEL_DAT_BACKUP: &str = "level.dat.backup";

/// Display name of the world
pub const LEVEL_NAME_TXT: &str = "levelname.txt";

/// Options for how a world is saved
#[derive(Debug, Clone, Copy, Builder)]
pub struct SaveOptions {
    /// Copy the current `level.dat` to `level.dat.backup` first
    #[builder(default = true)]
    pub backup: bool,

    /// Rewrite `levelname.txt` from the `LevelName` tag
    #[builder(default = true)]
    pub sync_level_name: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The `GameType` of a world
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
    Unknown(i32),
}

impl From<i32> for GameMode {
    fn from(value: i32) -> Self {
        match value {
            0 => GameMode::Survival,
            1 => GameMode::Creative,
            2 => GameMode::Adventure,
            3 => GameMode::Spectator,
            other => GameMode::Unknown(other),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Survival => "Survival",
            GameMode::Creative => "Creative",
            GameMode::Adventure => "Adventure",
            GameMode::Spectator => "Spectator",
            GameMode::Unknown(_) => "Unknown",
        })
    }
}

/// A world directory with its `level.dat` loaded.
///
/// Edits are made to the in-memory document and only reach the disk through [`World::save`].
///
/// ```no_run
/// # fn doit() -> mcbe_level::error::Result<()>
/// # {
/// use mcbe_level::World;
///
/// let mut world = World::open("minecraftWorlds/abc=")?;
/// world.update("GameType", "1");
/// world.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct World {
    dir: PathBuf,
    document: Document,
}

impl World {
    /// Load the `level.dat` of a world directory.
    #[instrument(skip_all, err, fields(dir = %dir.as_ref().display()))]
    pub fn open(dir: impl AsRef<Path>) -> Result<World> {
        let dir = dir.as_ref().to_path_buf();
        let level_dat = dir.join(LEVEL_DAT);
        if !level_dat.is_file() {
            return Err(Error::LevelDatNotFound(level_dat));
        }

        let document = Document::from_file(&level_dat)?;
        debug!(version = document.version(), "loaded level.dat");

        Ok(World { dir, document })
    }

    /// Whether `dir` contains a `level.dat`
    pub fn has_level_dat(dir: impl AsRef<Path>) -> bool {
        dir.as_ref().join(LEVEL_DAT).is_file()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> &Compound {
        &self.document.root
    }

    /// Storage version from the `level.dat` header
    pub fn version(&self) -> i32 {
        self.document.version()
    }

    pub fn properties(&self) -> Vec<Property<'_>> {
        property::properties(&self.document.root)
    }

    pub fn get(&self, path: &str) -> Option<Property<'_>> {
        property::get(&self.document.root, path)
    }

    pub fn update(&mut self, path: &str, value: &str) {
        property::update(&mut self.document.root, path, value)
    }

    pub fn try_update(&mut self, path: &str, value: &str) -> std::result::Result<(), PathError> {
        property::try_update(&mut self.document.root, path, value)
    }

    /// Name of the world from `levelname.txt`, then the `LevelName` tag, then the directory.
    pub fn level_name(&self) -> String {
        match fs::read_to_string(self.dir.join(LEVEL_NAME_TXT)) {
            Ok(name) if !name.trim().is_empty() => return name.trim().to_owned(),
            Ok(_) => {}
            Err(e) => debug!(error = %e, "no usable levelname.txt"),
        }

        if let Some(name) = self.level_name_tag() {
            return name.to_owned();
        }

        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn level_name_tag(&self) -> Option<&str> {
        self.document
            .root
            .get("LevelName")
            .and_then(Tag::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Game mode from the `GameType` tag, Survival when absent
    pub fn game_mode(&self) -> GameMode {
        self.document
            .root
            .get("GameType")
            .and_then(Tag::as_int)
            .map_or(GameMode::Survival, GameMode::from)
    }

    /// Save with the default [`SaveOptions`].
    pub fn save(&self) -> Result<()> {
        self.save_with(SaveOptions::default())
    }

    /// Write the document back to `level.dat`, keeping the version it was read with.
    #[instrument(skip_all, err, fields(dir = %self.dir.display()))]
    pub fn save_with(&self, options: SaveOptions) -> Result<()> {
        let bytes = self.document.to_bytes()?;
        let level_dat = self.dir.join(LEVEL_DAT);

        if options.backup && level_dat.exists() {
            fs::copy(&level_dat, self.dir.join(LEVEL_DAT_BACKUP))?;
            debug!("backed up level.dat");
        }

        fs::write(&level_dat, bytes)?;

        if options.sync_level_name {
            self.write_level_name();
        }

        info!(version = self.version(), "saved level.dat");
        Ok(())
    }

    fn write_level_name(&self) {
        let Some(name) = self.level_name_tag() else {
            return;
        };

        match fs::write(self.dir.join(LEVEL_NAME_TXT), name) {
            Ok(()) => debug!(name, "updated levelname.txt"),
            Err(e) => warn!(error = %e, "failed to update levelname.txt"),
        }
    }
}

/// Find the world directories directly inside `worlds_dir`, sorted by directory name.
#[instrument(skip_all, err, fields(dir = %worlds_dir.as_ref().display()))]
pub fn discover(worlds_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut worlds = Vec::new();

    for entry in WalkDir::new(worlds_dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() && World::has_level_dat(entry.path()) {
            worlds.push(entry.into_path());
        }
    }

    Ok(worlds)
}

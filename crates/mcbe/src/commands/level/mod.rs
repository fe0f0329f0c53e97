pub mod get;
pub mod list;
pub mod set;
pub mod worlds;

#[derive(clap::Subcommand)]
pub enum LevelCommands {
    /// List the properties of a world by category
    List(list::ListArgs),
    /// Print one property of a world
    Get(get::GetArgs),
    /// Change properties of a world and save it
    Set(set::SetArgs),
    /// List the worlds in a directory
    Worlds(worlds::WorldsArgs),
}

impl LevelCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            LevelCommands::List(list) => list.handle(),
            LevelCommands::Get(get) => get.handle(),
            LevelCommands::Set(set) => set.handle(),
            LevelCommands::Worlds(worlds) => worlds.handle(),
        }
    }
}

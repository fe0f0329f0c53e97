pub mod level;
pub mod nbt;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Inspect raw NBT documents
    Nbt {
        #[command(subcommand)]
        command: nbt::NbtCommands,
    },
    /// View and edit world settings
    Level {
        #[command(subcommand)]
        command: level::LevelCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Nbt { command } => command.handle(),
            Commands::Level { command } => command.handle(),
        }
    }
}

use clap::Args;
use mcbe_level::{discover, World};
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args)]
pub struct WorldsArgs {
    /// A directory of worlds, such as minecraftWorlds
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,
}

impl WorldsArgs {
    pub fn handle(&self) -> Result<()> {
        let worlds = discover(&self.directory)
            .context(format!("listing {}", &self.directory.display()))?;

        for dir in worlds {
            let world = match World::open(&dir) {
                Ok(world) => world,
                Err(e) => {
                    warn!("skipping {}: {}", dir.display(), e);
                    continue;
                }
            };

            println!(
                "{}  {}  {}",
                world
                    .level_name()
                    .if_supports_color(Stream::Stdout, |v| v.bold()),
                world.game_mode(),
                dir.display()
                    .if_supports_color(Stream::Stdout, |v| v.dimmed()),
            );
        }

        Ok(())
    }
}

use clap::Args;
use mcbe_level::{SaveOptions, World};
use miette::{miette, Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct SetArgs {
    /// A world directory
    #[arg(short, long, value_name = "DIR")]
    world: PathBuf,

    /// Assignments of the form PATH=VALUE
    #[arg(value_name = "PATH=VALUE", required = true, value_parser = parse_assignment)]
    assignments: Vec<(String, String)>,

    /// Do not copy level.dat to level.dat.backup first
    #[arg(long, default_value_t = false)]
    no_backup: bool,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(path, value)| (path.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected PATH=VALUE, found {s:?}"))
}

impl SetArgs {
    pub fn handle(&self) -> Result<()> {
        let mut world = World::open(&self.world)
            .context(format!("opening {}", &self.world.display()))?;

        let mut applied = 0;
        for (path, value) in &self.assignments {
            match world.try_update(path, value) {
                Ok(()) => {
                    info!("{} = {}", path, value);
                    applied += 1;
                }
                Err(e) => warn!("skipping {}: {}", path, e),
            }
        }

        if applied == 0 {
            return Err(miette!("no property was changed"));
        }

        world
            .save_with(SaveOptions::builder().backup(!self.no_backup).build())
            .context(format!("saving {}", &self.world.display()))?;

        Ok(())
    }
}

use clap::Args;
use mcbe_level::World;
use miette::{miette, Context, Result};
use std::path::PathBuf;

#[derive(Args)]
pub struct GetArgs {
    /// A world directory
    #[arg(short, long, value_name = "DIR")]
    world: PathBuf,

    /// Dotted path of the property, e.g. abilities.flySpeed
    #[arg(value_name = "PATH")]
    path: String,
}

impl GetArgs {
    pub fn handle(&self) -> Result<()> {
        let world = World::open(&self.world)
            .context(format!("opening {}", &self.world.display()))?;

        let property = world
            .get(&self.path)
            .ok_or_else(|| miette!("no property at {}", self.path))?;

        println!("{}", property.value_string());

        Ok(())
    }
}

use clap::Args;
use itertools::Itertools;
use mcbe_level::{group_by_category, Property, World};
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// A world directory
    #[arg(short, long, value_name = "DIR")]
    world: PathBuf,
}

fn format_property(property: &Property<'_>, width: usize) -> String {
    let value = property.value_string();
    let value = if property.is_boolean() {
        format!("{} ({})", value, if value == "1" { "on" } else { "off" })
    } else {
        value
    };

    format!(
        "  {:<width$}  {}  {}",
        property.display_name(),
        value.if_supports_color(Stream::Stdout, |v| v.green()),
        format!("{} {}", property.type_name(), property.path())
            .if_supports_color(Stream::Stdout, |v| v.dimmed()),
    )
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let world = World::open(&self.world)
            .context(format!("opening {}", &self.world.display()))?;

        let properties = world.properties();
        let width = properties
            .iter()
            .map(|p| p.display_name().chars().count())
            .max()
            .unwrap_or(0);

        println!(
            "{} ({}, version {})",
            world
                .level_name()
                .if_supports_color(Stream::Stdout, |v| v.bold()),
            world.game_mode(),
            world.version()
        );

        for (category, members) in group_by_category(&properties) {
            println!();
            println!(
                "{}",
                category
                    .label()
                    .if_supports_color(Stream::Stdout, |v| v.blue())
            );
            println!(
                "{}",
                members
                    .iter()
                    .map(|p| format_property(p, width))
                    .join("\n")
            );
        }

        Ok(())
    }
}

pub mod check;
pub mod dump;

#[derive(clap::Subcommand)]
pub enum NbtCommands {
    /// Print a document as JSON
    Dump(dump::DumpArgs),
    /// Check that a document is rewritten byte for byte
    Check(check::CheckArgs),
}

impl NbtCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            NbtCommands::Dump(dump) => dump.handle(),
            NbtCommands::Check(check) => check.handle(),
        }
    }
}

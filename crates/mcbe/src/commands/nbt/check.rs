use clap::Args;
use itertools::{EitherOrBoth, Itertools};
use mcbe_nbt::Document;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct CheckArgs {
    /// An input NBT file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl CheckArgs {
    pub fn handle(&self) -> Result<()> {
        let original = std::fs::read(&self.file)
            .into_diagnostic()
            .context(format!("reading {}", &self.file.display()))?;

        let document = Document::from_bytes(&original)
            .context(format!("decoding {}", &self.file.display()))?;
        let rewritten = document.to_bytes().context("encoding document")?;

        let mismatch = original
            .iter()
            .zip_longest(rewritten.iter())
            .position(|pair| !matches!(pair, EitherOrBoth::Both(a, b) if a == b));

        match mismatch {
            None => {
                info!(
                    version = document.version(),
                    len = original.len(),
                    "{} is rewritten unchanged",
                    self.file.display()
                );
                Ok(())
            }
            Some(offset) => Err(miette!(
                "rewritten document differs at offset {:#06X} ({} bytes read, {} bytes written)",
                offset,
                original.len(),
                rewritten.len()
            )),
        }
    }
}

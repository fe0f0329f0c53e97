use clap::Args;
use mcbe_nbt::Document;
use miette::{Context, IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Args)]
pub struct DumpArgs {
    /// An input NBT file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Indent the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let document = Document::from_file(&self.file)
            .context(format!("reading {}", &self.file.display()))?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&document.root)
        } else {
            serde_json::to_string(&document.root)
        }
        .into_diagnostic()?;

        println!("version: {}", document.version());
        println!("{}", json);

        Ok(())
    }
}

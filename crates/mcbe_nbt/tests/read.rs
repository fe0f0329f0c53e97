use std::fs::File;
use std::path::PathBuf;

use mcbe_nbt::error::Result;
use mcbe_nbt::{Document, List, Tag, TagType};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/resources/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    ))
}

#[traced_test]
#[test]
fn parse_level_dat() -> Result<()> {
    let document = Document::from_file(resource("level.dat"))?;

    assert_eq!(document.version(), 10);
    assert_eq!(document.payload_len(), 483);
    assert_eq!(document.root_name, "");

    let root = &document.root;
    assert_eq!(root.len(), 18);
    assert_eq!(root.get("LevelName").and_then(Tag::as_str), Some("Bedrock level"));
    assert_eq!(root.get("SpawnY").and_then(Tag::as_int), Some(32767));
    assert_eq!(root.get("RandomSeed").and_then(Tag::as_long), Some(-4172144997902289642));
    assert_eq!(
        root.get("abilities")
            .and_then(|a| a.get("flySpeed"))
            .and_then(Tag::as_float),
        Some(0.05)
    );

    let version = root.get("lastOpenedWithVersion").and_then(Tag::as_list);
    assert_eq!(version, Some(&List::Int(vec![1, 21, 0, 3, 0])));

    let policies = root.get("worldPolicies").and_then(Tag::as_list);
    assert_eq!(policies.map(List::element_type), Some(TagType::End));

    Ok(())
}

#[test]
fn parse_level_dat_from_reader() -> Result<()> {
    let file = File::open(resource("level.dat"))?;
    let document = Document::from_reader(file)?;

    let keys: Vec<_> = document.root.keys().take(4).collect();
    assert_eq!(
        keys,
        vec!["abilities", "allowdestructiveobjects", "commandsEnabled", "Difficulty"]
    );

    Ok(())
}

#[test]
fn rewrite_level_dat_unchanged() -> Result<()> {
    let original = std::fs::read(resource("level.dat"))?;
    let document = Document::from_bytes(&original)?;

    assert_eq!(document.encoded_len(), original.len());
    assert_eq!(document.to_bytes()?, original);

    Ok(())
}

use mcbe_nbt::error::Result;
use mcbe_nbt::{compound, Compound, Document, List, Tag};
use pretty_assertions::assert_eq;
use proptest::collection::vec;
use proptest::prelude::*;

#[test]
fn level_dat_scenario() -> Result<()> {
    let document = Document::new(
        10,
        compound! {
            "LevelName" => "Test",
            "SpawnX" => 0,
            "SpawnY" => 68,
            "abilities" => compound! { "flying" => 0i8 },
        },
    );

    let bytes = document.to_bytes()?;
    let decoded = Document::from_bytes(&bytes)?;

    assert_eq!(decoded.version(), 10);
    assert_eq!(decoded.payload_len() as usize, bytes.len() - 8);
    assert_eq!(decoded.root.get("SpawnY").and_then(Tag::as_int), Some(68));
    assert_eq!(
        decoded
            .root
            .get("abilities")
            .and_then(|a| a.get("flying"))
            .and_then(Tag::as_byte),
        Some(0)
    );
    assert_eq!(decoded.root, document.root);

    Ok(())
}

#[test]
fn compound_order_survives() -> Result<()> {
    let mut root = Compound::new();
    root.insert("A", 1i32);
    root.insert("C", 2i32);
    root.insert("B", 3i32);

    let bytes = Document::new(10, root).to_bytes()?;
    let decoded = Document::from_bytes(&bytes)?;

    assert_eq!(decoded.root.keys().collect::<Vec<_>>(), vec!["A", "C", "B"]);

    Ok(())
}

#[test]
fn int_list_survives() -> Result<()> {
    let document = Document::new(10, compound! { "list" => List::from(vec![3i32, 2, 1]) });

    let decoded = Document::from_bytes(&document.to_bytes()?)?;

    assert_eq!(
        decoded.root.get("list"),
        Some(&Tag::List(List::Int(vec![3, 2, 1])))
    );

    Ok(())
}

#[test]
fn file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("level.dat");

    let document = Document::new(
        9,
        compound! {
            "LevelName" => "On disk",
            "Time" => 24000i64,
            "rainLevel" => 0.5f32,
        },
    );
    document.write_file(&path)?;

    let decoded = Document::from_file(&path)?;
    assert_eq!(decoded.version(), 9);
    assert_eq!(decoded.root, document.root);
    assert_eq!(std::fs::read(&path)?.len(), document.encoded_len());

    Ok(())
}

fn arb_name() -> &'static str {
    "[a-zA-Z_]{0,12}"
}

fn arb_list() -> impl Strategy<Value = List> {
    prop_oneof![
        vec(any::<i8>(), 0..8).prop_map(List::from),
        vec(any::<i16>(), 0..8).prop_map(List::from),
        vec(any::<i32>(), 0..8).prop_map(List::from),
        vec(any::<i64>(), 0..8).prop_map(List::from),
        vec(-1.0e6f32..1.0e6, 0..8).prop_map(List::from),
        vec(-1.0e12f64..1.0e12, 0..8).prop_map(List::from),
        vec(".{0,8}", 0..4).prop_map(List::from),
        vec(vec(any::<i8>(), 0..4), 0..4).prop_map(List::from),
        vec(vec(any::<i32>(), 0..4), 0..4).prop_map(List::from),
        vec(vec(any::<i64>(), 0..4), 0..4).prop_map(List::from),
        vec(vec(any::<i16>(), 0..4).prop_map(List::from), 0..4).prop_map(List::from),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Tag> {
    prop_oneof![
        any::<i8>().prop_map(Tag::Byte),
        any::<i16>().prop_map(Tag::Short),
        any::<i32>().prop_map(Tag::Int),
        any::<i64>().prop_map(Tag::Long),
        (-1.0e6f32..1.0e6).prop_map(Tag::Float),
        (-1.0e12f64..1.0e12).prop_map(Tag::Double),
        vec(any::<i8>(), 0..16).prop_map(Tag::ByteArray),
        ".{0,16}".prop_map(Tag::String),
        vec(any::<i32>(), 0..8).prop_map(Tag::IntArray),
        vec(any::<i64>(), 0..8).prop_map(Tag::LongArray),
        arb_list().prop_map(Tag::List),
    ]
}

fn arb_tag() -> impl Strategy<Value = Tag> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        let entries = vec((arb_name(), inner), 0..6)
            .prop_map(|entries| entries.into_iter().collect::<Compound>());

        prop_oneof![
            entries.clone().prop_map(Tag::Compound),
            vec(entries, 0..4).prop_map(|items| Tag::List(List::from(items))),
        ]
    })
}

fn arb_root() -> impl Strategy<Value = Compound> {
    vec((arb_name(), arb_tag()), 0..12).prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip(root in arb_root(), version in any::<i32>()) {
        let document = Document::new(version, root);

        let bytes = document.to_bytes().unwrap();
        prop_assert_eq!(bytes.len(), document.encoded_len());

        let decoded = Document::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.version(), version);
        prop_assert_eq!(&decoded.root, &document.root);

        let rewritten = decoded.to_bytes().unwrap();
        prop_assert_eq!(rewritten, bytes);
    }
}

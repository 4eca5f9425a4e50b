use std::fs;

use mapsplit::{split_map, Broadphase, MapError, SplitOptions};

/// Worldspawn with three brushes: 0 and 1 overlap, 2 stands apart.
const LEVEL: &str = "{\n\"classname\" \"worldspawn\"\n\"wad\" \"base.wad\"\n\
    {\n( 0 0 0 ) ( 32 0 0 ) ( 0 32 32 ) TILE 0 0 0 1 1\n}\n\
    {\n( 16 16 16 ) ( 48 48 48 ) ( 16 48 16 ) TILE 0 0 0 1 1\n}\n\
    {\n( 100 100 0 ) ( 132 132 16 ) ( 100 132 0 ) GRASS 0 0 0 1 1\n}\n\
    }\n";

#[test]
fn writes_one_map_per_group_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("level.map");
    fs::write(&input, LEVEL).unwrap();

    let summary = split_map(&input, &SplitOptions::default()).unwrap();
    assert_eq!(summary.brushes, 3);
    assert_eq!(summary.groups, vec![vec![0, 2], vec![1]]);
    assert_eq!(summary.written, vec![dir.path().join("level-0.map"), dir.path().join("level-1.map")]);
    assert!(summary.exports.is_none());

    let first = fs::read_to_string(dir.path().join("level-0.map")).unwrap();
    assert!(first.starts_with("{\n\"classname\" \"worldspawn\"\n\"wad\" \"base.wad\"\n{\n( 0 0 0 )"));
    assert!(first.contains("TILE 0 0 0 1 1\n}\r\n{\n( 100 100 0 )"));
    assert!(first.ends_with("GRASS 0 0 0 1 1\n}\r\n}"));

    let second = fs::read_to_string(dir.path().join("level-1.map")).unwrap();
    assert_eq!(second.matches("( 16 16 16 )").count(), 1);
    assert!(!second.contains("GRASS"));
}

#[test]
fn latin1_text_is_copied_through_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cafe.map");
    let level = b"{\n\"classname\" \"worldspawn\"\n\"message\" \"Caf\xE9\"\n\
        {\n( 0 0 0 ) ( 32 0 0 ) ( 0 32 32 ) CR\xC8ME 0 0 0 1 1\n}\n}\n";
    fs::write(&input, level).unwrap();

    let summary = split_map(&input, &SplitOptions::default()).unwrap();
    assert_eq!(summary.groups, vec![vec![0]]);
    assert_eq!(
        fs::read(dir.path().join("cafe-0.map")).unwrap(),
        b"{\n\"classname\" \"worldspawn\"\n\"message\" \"Caf\xE9\"\n\
        {\n( 0 0 0 ) ( 32 0 0 ) ( 0 32 32 ) CR\xC8ME 0 0 0 1 1\n}\r\n}"
    );
}

#[test]
fn group_extension_can_be_overridden() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("level.map");
    fs::write(&input, LEVEL).unwrap();

    let options = SplitOptions { group_ext: Some("vmf".into()), ..SplitOptions::default() };
    let summary = split_map(&input, &options).unwrap();
    assert_eq!(summary.written, vec![dir.path().join("level-0.vmf"), dir.path().join("level-1.vmf")]);
    assert!(summary.written.iter().all(|path| path.exists()));
    assert!(!dir.path().join("level-0.map").exists());
}

#[test]
fn writes_exports_with_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("castle.map");
    let exports = dir.path().join("castle.cs");
    fs::write(&input, LEVEL).unwrap();

    let options = SplitOptions {
        broadphase: Broadphase::RTree,
        exports: Some(exports.clone()),
        prefix: Some("platinum\\data\\".into()),
        ..SplitOptions::default()
    };
    let summary = split_map(&input, &options).unwrap();
    assert_eq!(summary.exports.as_deref(), Some(exports.as_path()));

    let text = fs::read_to_string(&exports).unwrap();
    assert_eq!(text.matches("new InteriorInstance()").count(), 2);
    assert!(text.contains("interiorFile = \"platinum/data/castle-0.dif\";"));
    assert!(text.contains("interiorFile = \"platinum/data/castle-1.dif\";"));
}

#[test]
fn input_errors_are_distinguishable() {
    let dir = tempfile::tempdir().unwrap();

    let missing = split_map(&dir.path().join("missing.map"), &SplitOptions::default());
    assert!(matches!(missing, Err(MapError::Read { .. })));

    let broken = dir.path().join("broken.map");
    fs::write(&broken, "{\n{ ( 0 0 0 ) }\n}\n}\n").unwrap();
    assert!(matches!(split_map(&broken, &SplitOptions::default()), Err(MapError::MismatchedBrace { line: 4 })));
    assert!(!dir.path().join("broken-0.map").exists());
}

#[test]
fn unwritable_exports_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("level.map");
    fs::write(&input, LEVEL).unwrap();

    let options = SplitOptions {
        exports: Some(dir.path().join("missing/dir/level.cs")),
        ..SplitOptions::default()
    };
    assert!(matches!(split_map(&input, &options), Err(MapError::WriteExports { .. })));
}

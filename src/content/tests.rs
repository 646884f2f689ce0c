//! Tests for the content entry model

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Utc};

use super::*;

#[test]
fn test_basic_decode() {
    let yaml = r#"
- src: a
  dst: b
- src: a
  dst: b
  type: "config"
- src: a
  dst: b
  type: "config|noreplace"
  packager: "rpm"
  file_info:
    mode: 0o644
    mtime: 2008-01-02T15:04:05Z
"#;
    let contents: Contents = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(contents.len(), 3);

    assert_eq!(contents[0].kind, EntryKind::File);
    assert_eq!(contents[0].source, "a");
    assert_eq!(contents[0].destination, "b");

    assert_eq!(contents[1].kind, EntryKind::Config { noreplace: false });

    assert_eq!(contents[2].kind, EntryKind::Config { noreplace: true });
    assert_eq!(contents[2].packager.as_deref(), Some("rpm"));
    let info = contents[2].file_info.as_ref().unwrap();
    assert_eq!(info.mode, Some(0o644));
    let mtime = "2008-01-02T15:04:05Z".parse::<DateTime<Utc>>().unwrap();
    assert_eq!(info.mtime, Some(mtime));
    assert_eq!(info.owner, None);
    assert_eq!(info.group, None);
}

#[test]
fn test_empty_type_decodes_as_file() {
    let yaml = r#"
src: a
dst: b
type: ""
"#;
    let entry: ContentEntry = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(entry.kind, EntryKind::File);
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = r#"
src: a
dst: b
bla: bla
"#;
    let err = serde_yaml::from_str::<ContentEntry>(yaml).unwrap_err();
    assert!(err.to_string().contains("unknown field"), "got: {err}");
}

#[test]
fn test_missing_src_rejected() {
    let err = serde_yaml::from_str::<ContentEntry>("dst: b").unwrap_err();
    assert!(err.to_string().contains("src"), "got: {err}");
}

#[test]
fn test_missing_dst_rejected() {
    let err = serde_yaml::from_str::<ContentEntry>("src: a").unwrap_err();
    assert!(err.to_string().contains("dst"), "got: {err}");
}

#[test]
fn test_empty_src_rejected() {
    let yaml = r#"
src: ""
dst: b
"#;
    let err = serde_yaml::from_str::<ContentEntry>(yaml).unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "got: {err}");
}

#[test]
fn test_invalid_type_rejected() {
    let yaml = r#"
src: a
dst: b
type: "conf"
"#;
    let err = serde_yaml::from_str::<ContentEntry>(yaml).unwrap_err();
    assert!(err.to_string().contains("Invalid content type"), "got: {err}");
}

#[test]
fn test_unknown_file_info_field_rejected() {
    let yaml = r#"
src: a
dst: b
file_info:
  mode: 0o755
  checksum: abc
"#;
    let err = serde_yaml::from_str::<ContentEntry>(yaml).unwrap_err();
    assert!(err.to_string().contains("unknown field"), "got: {err}");
}

#[test]
fn test_empty_packager_means_all() {
    let yaml = r#"
src: a
dst: b
packager: ""
"#;
    let entry: ContentEntry = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(entry.packager, None);
    assert!(entry.applies_to("rpm"));
    assert!(entry.applies_to("deb"));
}

#[test]
fn test_applies_to_tagged_packager() {
    let yaml = r#"
src: a
dst: b
packager: "rpm"
"#;
    let entry: ContentEntry = serde_yaml::from_str(yaml).unwrap();
    assert!(entry.applies_to("rpm"));
    assert!(!entry.applies_to("deb"));
}

#[test]
fn test_kind_tag_parsing() {
    assert_eq!("".parse::<EntryKind>().unwrap(), EntryKind::File);
    assert_eq!("file".parse::<EntryKind>().unwrap(), EntryKind::File);
    assert_eq!(
        "config".parse::<EntryKind>().unwrap(),
        EntryKind::Config { noreplace: false }
    );
    assert_eq!(
        "config|noreplace".parse::<EntryKind>().unwrap(),
        EntryKind::Config { noreplace: true }
    );
    assert_eq!("symlink".parse::<EntryKind>().unwrap(), EntryKind::Symlink);
    assert_eq!("dir".parse::<EntryKind>().unwrap(), EntryKind::Dir);
    assert_eq!("ghost".parse::<EntryKind>().unwrap(), EntryKind::Ghost);
}

#[test]
fn test_kind_rejects_unknown_modifier() {
    let err = "file|noreplace".parse::<EntryKind>().unwrap_err();
    assert!(matches!(err, ContentError::InvalidType { .. }));
    let err = "config|norePlace".parse::<EntryKind>().unwrap_err();
    assert!(matches!(err, ContentError::InvalidType { .. }));
}

#[test]
fn test_kind_display_round_trip() {
    for tag in ["file", "config", "config|noreplace", "symlink", "dir", "ghost"] {
        let kind: EntryKind = tag.parse().unwrap();
        assert_eq!(kind.to_string(), tag);
    }
}

#[test]
fn test_kind_virtual() {
    assert!(EntryKind::Symlink.is_virtual());
    assert!(EntryKind::Dir.is_virtual());
    assert!(EntryKind::Ghost.is_virtual());
    assert!(!EntryKind::File.is_virtual());
    assert!(!EntryKind::Config { noreplace: true }.is_virtual());
}

#[test]
fn test_validate_rejects_empty_fields() {
    let entry = ContentEntry::new("", "/etc/app.conf");
    assert!(matches!(
        entry.validate().unwrap_err(),
        ContentError::EmptyField { field: "src" }
    ));

    let entry = ContentEntry::new("app.conf", "");
    assert!(matches!(
        entry.validate().unwrap_err(),
        ContentError::EmptyField { field: "dst" }
    ));

    let entry = ContentEntry::new("app.conf", "/etc/app.conf");
    assert!(entry.validate().is_ok());
}

#[test]
fn test_serialize_omits_defaults() {
    let entry = ContentEntry::new("a", "b");
    let yaml = serde_yaml::to_string(&entry).unwrap();
    assert!(!yaml.contains("type"), "got: {yaml}");
    assert!(!yaml.contains("packager"), "got: {yaml}");
    assert!(!yaml.contains("file_info"), "got: {yaml}");
}

#[test]
fn test_serialize_round_trip() {
    let entry = ContentEntry {
        source: "etc/app.conf".to_string(),
        destination: "/etc/app.conf".to_string(),
        kind: EntryKind::Config { noreplace: true },
        packager: Some("rpm".to_string()),
        file_info: Some(FileInfo {
            mode: Some(0o600),
            mtime: Some("2008-01-02T15:04:05Z".parse::<DateTime<Utc>>().unwrap()),
            owner: Some("root".to_string()),
            group: Some("wheel".to_string()),
        }),
    };
    let yaml = serde_yaml::to_string(&entry).unwrap();
    assert!(yaml.contains("config|noreplace"), "got: {yaml}");
    let decoded: ContentEntry = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, entry);
}

//! End-to-end validation of realistic canonical buffers: the checker
//! accepts them, and the scanner then extracts the pieces a reader needs.

use stele_check::ObjectChecker;
use stele_raw::{parse_person_ident, scan};
use stele_types::{ObjectId, ObjectType, PersonIdent};

const COMMIT: &[u8] = b"tree be9bfa841874ccc9f2ef7c48d0c76226f89b7189\n\
parent ab85b1d0f1d9b54fba2a8c56b7b2e4bd4a8d57f0\n\
author A U Thor <author@example.com> 1142878501 -0500\n\
committer C O Mitter <committer@example.com> 1142878502 +0100\n\
\n\
Initial revision\n\
\n\
Signed-off-by: A. U. Thor\n";

#[test]
fn commit_validates_and_parses() {
    let mut checker = ObjectChecker::new();
    assert!(checker.check(ObjectType::Commit, COMMIT));

    let tree = ObjectId::from_hex_at(COMMIT, 5).unwrap();
    assert_eq!(tree.to_hex(), "be9bfa841874ccc9f2ef7c48d0c76226f89b7189");

    let author_at = scan::author(COMMIT, 0).unwrap();
    let author = parse_person_ident(COMMIT, author_at).unwrap();
    assert_eq!(
        author,
        PersonIdent::new("A U Thor", "author@example.com", 1_142_878_501_000, -300)
    );
    assert_eq!(
        author.to_external_string(),
        "A U Thor <author@example.com> 1142878501 -0500"
    );

    let committer_at = scan::committer(COMMIT, 0).unwrap();
    let committer = parse_person_ident(COMMIT, committer_at).unwrap();
    assert_eq!(committer.name(), "C O Mitter");
    assert_eq!(committer.timezone_offset_minutes(), 60);
}

#[test]
fn commit_message_and_footer_locate() {
    let msg = scan::commit_message(COMMIT, 0).unwrap();
    assert!(COMMIT[msg..].starts_with(b"Initial revision"));

    let para_end = scan::end_of_paragraph(COMMIT, msg);
    assert_eq!(&COMMIT[msg..para_end], b"Initial revision");

    let footer = para_end + 2;
    let colon = scan::end_of_footer_line_key(COMMIT, footer).unwrap();
    assert_eq!(&COMMIT[footer..colon], b"Signed-off-by");
}

#[test]
fn corrupted_commit_is_rejected_not_misparsed() {
    let mut checker = ObjectChecker::new();

    // Flip the tree header keyword.
    let mut bad = COMMIT.to_vec();
    bad[0] = b'x';
    assert!(!checker.check(ObjectType::Commit, &bad));

    // Truncate mid person line.
    let cut = &COMMIT[..COMMIT.len() / 2];
    assert!(!checker.check(ObjectType::Commit, cut));

    // As a blob the same bytes are fine.
    assert!(checker.check(ObjectType::Blob, &bad));
}

#[test]
fn tag_validates_and_parses() {
    let tag: &[u8] = b"object be9bfa841874ccc9f2ef7c48d0c76226f89b7189\n\
type commit\n\
tag v1.2.0\n\
tagger T A Gger <tagger@example.com> 1142878501 +0000\n\
\n\
release notes\n";

    let mut checker = ObjectChecker::new();
    assert!(checker.check(ObjectType::Tag, tag));

    let tagger_at = scan::tagger(tag, 0).unwrap();
    let tagger = parse_person_ident(tag, tagger_at).unwrap();
    assert_eq!(tagger.name(), "T A Gger");
    assert_eq!(tagger.when_seconds(), 1_142_878_501);

    let msg = scan::tag_message(tag, 0).unwrap();
    assert_eq!(&tag[msg..], b"release notes\n");
}

#[test]
fn tree_round_trip_through_checker() {
    let oid = ObjectId::from_hex("be9bfa841874ccc9f2ef7c48d0c76226f89b7189").unwrap();
    let mut tree = Vec::new();
    for (mode, name) in [("100644", "README"), ("100755", "build.sh"), ("40000", "src")] {
        tree.extend_from_slice(mode.as_bytes());
        tree.push(b' ');
        tree.extend_from_slice(name.as_bytes());
        tree.push(0);
        tree.extend_from_slice(oid.as_bytes());
    }

    let checker = ObjectChecker::new();
    assert!(checker.check_tree(&tree));

    // Each embedded id reads back out in raw form.
    let first_id_at = "100644 README".len() + 1;
    assert_eq!(ObjectId::from_raw_at(&tree, first_id_at).unwrap(), oid);
}

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use text_diff::{diff_lines, format_unified, generate_unified_diff, DiffLimits};

#[test]
fn test_single_hunk_format() {
    let unified = generate_unified_diff("a\nb\nc", "a\nx\nc");

    assert_eq!(
        unified,
        "--- old\n\
         +++ new\n\
         @@ -1,3 +1,3 @@\n \
         a\n\
         -b\n\
         +x\n \
         c\n"
    );
}

#[test]
fn test_snapshot_single_hunk() {
    let unified = generate_unified_diff("a\nb\nc", "a\nx\nc");

    assert_snapshot!(unified.trim_end(), @r"
    --- old
    +++ new
    @@ -1,3 +1,3 @@
     a
    -b
    +x
     c
    ");
}

#[test]
fn test_snapshot_two_hunks() {
    let old = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n12\n";
    let new = "1\nX\n3\n4\n5\n6\n7\n8\n9\n10\nY\n12\n";
    let unified = generate_unified_diff(old, new);

    assert_snapshot!(unified.trim_end(), @r"
    --- old
    +++ new
    @@ -1,5 +1,5 @@
     1
    -2
    +X
     3
     4
     5
    @@ -8,5 +8,5 @@
     8
     9
     10
    -11
    +Y
     12
    ");
}

#[test]
fn test_nearby_changes_merge_into_one_hunk() {
    let old = "1\n2\n3\n4\n5\n6\n";
    let new = "1\nX\n3\n4\nY\n6\n";
    let unified = generate_unified_diff(old, new);

    assert_eq!(unified.matches("@@").count(), 2, "one hunk, one header");
    assert!(unified.contains("-2\n"));
    assert!(unified.contains("+X\n"));
    assert!(unified.contains("-5\n"));
    assert!(unified.contains("+Y\n"));
}

#[test]
fn test_identical_inputs_render_empty() {
    assert_eq!(generate_unified_diff("same\ntext\n", "same\ntext\n"), "");
    assert_eq!(generate_unified_diff("", ""), "");
}

#[test]
fn test_addition_to_empty_input() {
    let unified = generate_unified_diff("", "hello\n");

    // The empty old buffer is its single empty line
    assert!(unified.contains("@@ -1,1 +1,1 @@"));
    assert!(unified.contains("-\n"));
    assert!(unified.contains("+hello\n"));
}

#[test]
fn test_unified_always_aligns_lines() {
    // A one-word change inside a line still produces whole-line entries
    let unified = generate_unified_diff("the quick brown fox\n", "the quick red fox\n");

    assert!(unified.contains("-the quick brown fox\n"));
    assert!(unified.contains("+the quick red fox\n"));
}

#[test]
fn test_format_unified_matches_generate() {
    let old = "alpha\nbeta\n";
    let new = "alpha\ngamma\n";

    let script = diff_lines(old, new).into_script().unwrap();
    assert_eq!(format_unified(&script), generate_unified_diff(old, new));
}

#[test]
fn test_oversized_input_renders_summary_line() {
    let limits = DiffLimits {
        max_line_input: 8,
        ..DiffLimits::default()
    };
    let unified =
        text_diff::generate_unified_diff_with_limits("a\nb\nc\nd\ne\n", "a\n", limits);

    assert!(unified.starts_with("input too large for unified diff"));
    assert!(!unified.contains("@@"));
}

use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffTag};
use text_diff::{tokenize, ChangeKind, DiffConfig, Granularity};

fn all_granularities() -> impl Strategy<Value = Granularity> {
    prop::sample::select(vec![
        Granularity::Line,
        Granularity::Word,
        Granularity::Character,
    ])
}

/// Small texts drawn from a narrow alphabet so token matches are common
/// and the scripts exercise real context/removed/added interleavings
fn small_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", " ", ",", "\n", "é", "🚀"]),
        0..24,
    )
    .prop_map(|pieces| pieces.concat())
}

fn diff_at(old: &str, new: &str, granularity: Granularity) -> text_diff::EditScript {
    DiffConfig::default()
        .granularity(granularity)
        .diff(old, new)
        .into_script()
        .expect("small inputs are always under the ceiling")
}

proptest! {
    #[test]
    fn round_trip_reconstructs_both_sides(
        old in small_text(),
        new in small_text(),
        granularity in all_granularities(),
    ) {
        let script = diff_at(&old, &new, granularity);
        prop_assert_eq!(script.reconstruct_old(), old);
        prop_assert_eq!(script.reconstruct_new(), new);
    }

    #[test]
    fn diff_against_self_is_all_context(
        text in small_text(),
        granularity in all_granularities(),
    ) {
        let script = diff_at(&text, &text, granularity);
        prop_assert!(!script.has_changes());
        prop_assert_eq!(script.added_count(), 0);
        prop_assert_eq!(script.removed_count(), 0);
    }

    #[test]
    fn script_is_minimal(
        old in small_text(),
        new in small_text(),
        granularity in all_granularities(),
    ) {
        let old_tokens = tokenize(&old, granularity);
        let new_tokens = tokenize(&new, granularity);

        // Myers on the same token streams is an independent minimal-edit
        // reference; both must retain an LCS-sized common subsequence
        let ops = capture_diff_slices(Algorithm::Myers, &old_tokens, &new_tokens);
        let reference: usize = ops
            .iter()
            .map(|op| match op.tag() {
                DiffTag::Equal => 0,
                DiffTag::Delete => op.old_range().len(),
                DiffTag::Insert => op.new_range().len(),
                DiffTag::Replace => op.old_range().len() + op.new_range().len(),
            })
            .sum();

        let script = diff_at(&old, &new, granularity);
        prop_assert_eq!(script.removed_count() + script.added_count(), reference);
    }

    #[test]
    fn word_tokenizer_is_lossless(text in "\\PC{0,60}") {
        let rebuilt: String = tokenize(&text, Granularity::Word).concat();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn removals_precede_additions_between_context(
        old in small_text(),
        new in small_text(),
        granularity in all_granularities(),
    ) {
        let script = diff_at(&old, &new, granularity);
        let mut seen_added = false;
        for change in script.changes() {
            match change.kind {
                ChangeKind::Context => seen_added = false,
                ChangeKind::Added => seen_added = true,
                ChangeKind::Removed => prop_assert!(!seen_added),
            }
        }
    }

    #[test]
    fn change_list_cap_accounts_for_every_entry(
        old in small_text(),
        new in small_text(),
        cap in 0usize..16,
    ) {
        let script = diff_at(&old, &new, Granularity::Character);
        let rendered = script.render(cap);

        let total = script.changes().len();
        if total <= cap {
            prop_assert_eq!(rendered.len(), total);
        } else {
            prop_assert_eq!(rendered.len(), cap + 1);
            match rendered.last().unwrap() {
                text_diff::ListEntry::Elided { omitted } => {
                    prop_assert_eq!(*omitted, total - cap)
                }
                _ => prop_assert!(false, "missing elision marker"),
            }
        }
    }
}

use crate::change::Change;

/// Align two token sequences into a minimal edit script.
///
/// The script minimizes the total count of removed plus added tokens,
/// which is the classic LCS-diff notion of minimality. At a divergence
/// where more than one minimal path exists, the old side is consumed
/// first, so removals always precede additions.
pub fn align(old_tokens: &[&str], new_tokens: &[&str]) -> Vec<Change> {
    // Matching ends are common in practice and cost nothing to peel off
    // before paying for the quadratic table.
    let prefix = old_tokens
        .iter()
        .zip(new_tokens)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_tokens[prefix..]
        .iter()
        .rev()
        .zip(new_tokens[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_mid = &old_tokens[prefix..old_tokens.len() - suffix];
    let new_mid = &new_tokens[prefix..new_tokens.len() - suffix];

    let mut changes = Vec::with_capacity(old_tokens.len().max(new_tokens.len()));
    for (i, token) in old_tokens[..prefix].iter().enumerate() {
        changes.push(Change::context(token, i));
    }

    align_middle(old_mid, new_mid, prefix, &mut changes);

    let suffix_start = old_tokens.len() - suffix;
    for (i, token) in old_tokens[suffix_start..].iter().enumerate() {
        changes.push(Change::context(token, suffix_start + i));
    }

    changes
}

/// LCS dynamic program over the unmatched middle of the two sequences.
///
/// `dp[i][j]` holds the LCS length of `old[i..]` and `new[j..]`; filling
/// the table back-to-front lets the emitting pass walk forward, so the
/// script comes out in original order with no reversal step and the
/// old-first tie-break is a plain `>=` on the two candidate cells.
fn align_middle(old: &[&str], new: &[&str], offset: usize, changes: &mut Vec<Change>) {
    let n = old.len();
    let m = new.len();
    let width = m + 1;

    // Flat (n + 1) x (m + 1) suffix table; LCS lengths fit u32 because the
    // size gates cap token counts well below 2^32.
    let mut dp = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i * width + j] = if old[i] == new[j] {
                dp[(i + 1) * width + j + 1] + 1
            } else {
                dp[(i + 1) * width + j].max(dp[i * width + j + 1])
            };
        }
    }

    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if old[i] == new[j] {
            changes.push(Change::context(old[i], offset + i));
            i += 1;
            j += 1;
        } else if dp[(i + 1) * width + j] >= dp[i * width + j + 1] {
            changes.push(Change::removed(old[i], offset + i));
            i += 1;
        } else {
            changes.push(Change::added(new[j], offset + j));
            j += 1;
        }
    }
    while i < n {
        changes.push(Change::removed(old[i], offset + i));
        i += 1;
    }
    while j < m {
        changes.push(Change::added(new[j], offset + j));
        j += 1;
    }
}

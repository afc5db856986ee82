use std::cmp::Ordering;

/// Total order over rotated word sequences.
pub trait RotationOrder {
    fn compare(&self, lhs: &[&str], rhs: &[&str]) -> Ordering;
}

/// v0: ASCII case-insensitive, word by word.
///
/// When one sequence is a prefix of the other, the longer one sorts first.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseInsensitiveOrder;

impl RotationOrder for CaseInsensitiveOrder {
    fn compare(&self, lhs: &[&str], rhs: &[&str]) -> Ordering {
        for (l, r) in lhs.iter().zip(rhs.iter()) {
            let word_cmp = compare_ignore_case(l, r);
            if word_cmp != Ordering::Equal {
                return word_cmp;
            }
        }

        // Shared prefix: longer first
        rhs.len().cmp(&lhs.len())
    }
}

/// Compare two words by their ASCII upper-cased forms.
pub fn compare_ignore_case(lhs: &str, rhs: &str) -> Ordering {
    let l = lhs.bytes().map(|b| b.to_ascii_uppercase());
    let r = rhs.bytes().map(|b| b.to_ascii_uppercase());
    l.cmp(r)
}

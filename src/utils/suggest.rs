//! Fuzzy identifier suggestions for mistyped example and category ids.

/// Find the registered id the user most likely meant.
///
/// Checks in order: case-insensitive exact match, prefix, suffix, then
/// Levenshtein distance <= 3. Returns `None` when nothing is close.
pub fn closest_match<'a, I>(input: &str, ids: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let input_lower = input.to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    let lowered = || ids.clone().into_iter().map(|id| (id, id.to_lowercase()));

    if let Some((id, _)) = lowered().find(|(_, l)| *l == input_lower) {
        return Some(id.to_string());
    }
    if let Some((id, _)) = lowered().find(|(_, l)| l.starts_with(&input_lower)) {
        return Some(id.to_string());
    }
    if let Some((id, _)) = lowered().find(|(_, l)| l.ends_with(&input_lower)) {
        return Some(id.to_string());
    }

    lowered()
        .map(|(id, l)| (id, levenshtein(&input_lower, &l)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(id, _)| id.to_string())
}

/// Build the "did you mean" hint for an unknown id, if any id is close.
pub fn did_you_mean<'a, I>(input: &str, ids: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    closest_match(input, ids).map(|id| format!("Did you mean '{}'?", id))
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 3] = ["fhe-counter", "fhe-add", "blind-auction"];

    #[test]
    fn prefix_match_wins_over_distance() {
        assert_eq!(
            closest_match("fhe-co", IDS.iter().copied()),
            Some("fhe-counter".to_string())
        );
    }

    #[test]
    fn small_typo_is_suggested() {
        assert_eq!(
            closest_match("fhe-ad", IDS.iter().copied()),
            Some("fhe-add".to_string())
        );
        assert_eq!(
            closest_match("blind-auctoin", IDS.iter().copied()),
            Some("blind-auction".to_string())
        );
    }

    #[test]
    fn unrelated_input_has_no_suggestion() {
        assert_eq!(closest_match("zzzzzzzzzz", IDS.iter().copied()), None);
        assert_eq!(did_you_mean("", IDS.iter().copied()), None);
    }

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }
}

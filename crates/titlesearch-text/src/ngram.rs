use std::collections::HashSet;

pub type Bigram = (char, char);

/// Distinct overlapping character pairs of `s`, compared as-is.
/// Strings shorter than two characters have none.
pub fn bigrams(s: &str) -> HashSet<Bigram> {
	let chars: Vec<char> = s.chars().collect();
	chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Number of distinct bigrams of `query` that also occur in `target`.
pub fn shared_bigrams(query: &HashSet<Bigram>, target: &HashSet<Bigram>) -> usize {
	query.iter().filter(|g| target.contains(*g)).count()
}

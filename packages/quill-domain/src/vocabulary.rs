use std::collections::BTreeSet;

use crate::note::Note;

/// Builds the category selector list: `all_label` first, then `seeds` in their given order,
/// then every other non-blank category found in `notes`, sorted and deduplicated.
pub fn category_vocabulary(all_label: &str, seeds: &[String], notes: &[Note]) -> Vec<String> {
	let mut vocabulary = Vec::with_capacity(seeds.len() + 1);

	vocabulary.push(all_label.to_string());

	for seed in seeds {
		if !vocabulary.contains(seed) {
			vocabulary.push(seed.clone());
		}
	}

	let observed: BTreeSet<&str> = notes
		.iter()
		.map(|note| note.category.as_str())
		.filter(|category| !category.trim().is_empty())
		.filter(|category| !vocabulary.iter().any(|known| known == category))
		.collect();

	vocabulary.extend(observed.into_iter().map(str::to_string));

	vocabulary
}

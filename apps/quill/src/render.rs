use std::fmt::Write;

use time::format_description::well_known::Rfc3339;

use quill_domain::Note;

pub fn note(note: &Note) -> String {
	let mut out = String::new();
	let created = note.timestamp.format(&Rfc3339).unwrap_or_else(|_| "-".to_string());

	let _ = writeln!(out, "{}  [{}]  {created}", note.id, note.category);
	let _ = writeln!(out, "  {}", display_or_placeholder(&note.title, "(untitled)"));

	for line in note.content.lines() {
		let _ = writeln!(out, "    {line}");
	}

	out
}

pub fn list(notes: &[Note]) -> String {
	if notes.is_empty() {
		return "No notes.\n".to_string();
	}

	notes.iter().map(note).collect::<Vec<_>>().join("\n")
}

pub fn categories(categories: &[String]) -> String {
	categories.iter().fold(String::new(), |mut out, category| {
		let _ = writeln!(out, "{category}");

		out
	})
}

fn display_or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
	if value.trim().is_empty() { placeholder } else { value }
}

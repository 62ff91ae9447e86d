//! Note display formatting

use crate::models::Note;

/// Format the note list as a table
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let title_width = notes
        .iter()
        .map(|n| n.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<title_width$}  {}\n",
        "ID",
        "Title",
        "Created",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<19}\n",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for note in notes {
        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {}\n",
            note.id,
            note.title,
            note.timestamp,
            title_width = title_width,
        ));
    }

    output
}

/// Format a single note with its full content
pub fn format_note_details(note: &Note) -> String {
    format!(
        "ID: {}\nTitle: {}\nCreated: {}\n\n{}\n",
        note.id, note.title, note.timestamp, note.content
    )
}

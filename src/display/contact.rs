//! Contact display formatting

use crate::models::Contact;

/// Format the contact list as a table
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let phone_width = contacts
        .iter()
        .map(|c| c.phone.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<phone_width$}  {}\n",
        "ID",
        "Name",
        "Phone",
        "Email",
        name_width = name_width,
        phone_width = phone_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<phone_width$}  {:-<20}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width,
    ));

    for contact in contacts {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<phone_width$}  {}\n",
            contact.id,
            contact.name,
            contact.phone,
            contact.email,
            name_width = name_width,
            phone_width = phone_width,
        ));
    }

    output
}

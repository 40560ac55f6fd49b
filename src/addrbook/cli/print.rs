use addrbook::api::{CmdMessage, ContactView, MessageLevel};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_phones(contact: &ContactView) {
    println!("{}", phone_line(contact));
}

pub(super) fn print_contacts(heading: &str, contacts: &[ContactView]) {
    if contacts.is_empty() {
        return;
    }
    println!("{}", heading.bold());
    for row in contact_rows(contacts) {
        println!("{}", row);
    }
}

pub(super) fn print_pages(pages: &[Vec<ContactView>]) {
    if pages.is_empty() {
        println!("{}", "Contact list is empty!".dimmed());
        return;
    }
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        print_contacts(&format!("Page {}/{}", i + 1, total), page);
    }
}

fn phone_line(contact: &ContactView) -> String {
    if contact.phones.is_empty() {
        format!("{} has no phone numbers", contact.name)
    } else {
        format!(
            "The phone number for {} is {}",
            contact.name,
            contact.phones.join(", ")
        )
    }
}

/// One line per contact, names padded to a common display width.
fn contact_rows(contacts: &[ContactView]) -> Vec<String> {
    let name_width = contacts
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    contacts
        .iter()
        .map(|contact| {
            let padding = " ".repeat(name_width - contact.name.width());
            let phones = if contact.phones.is_empty() {
                "-".to_string()
            } else {
                contact.phones.join(", ")
            };
            let mut row = format!("  {}{}  {}", contact.name, padding, phones);
            if let Some(birthday) = &contact.birthday {
                row.push_str(&format!("  {}", birthday_note(birthday, contact.days_to_birthday)));
            }
            row
        })
        .collect()
}

fn birthday_note(birthday: &str, days: Option<u32>) -> String {
    match days {
        Some(0) => format!("(born {}, birthday today!)", birthday),
        Some(1) => format!("(born {}, birthday tomorrow)", birthday),
        Some(n) => format!("(born {}, birthday in {} days)", birthday, n),
        None => format!("(born {})", birthday),
    }
}

use crate::record::Record;

pub mod add;
pub mod birthday;
pub mod delete;
pub mod list;
pub mod lookup;
pub mod page;
pub mod phones;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A detached copy of a record, safe to hand to any front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub days_to_birthday: Option<u32>,
}

impl From<&Record> for ContactView {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
            days_to_birthday: record.days_to_birthday(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub contacts: Vec<ContactView>,
    pub pages: Vec<Vec<ContactView>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<ContactView>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<ContactView>>) -> Self {
        self.pages = pages;
        self
    }
}

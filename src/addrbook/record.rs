use crate::error::ValidationError;
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};

/// One contact: a name, its phone numbers in entry order, and an optional
/// birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builds a record from raw text, validating every part.
    pub fn create<S: AsRef<str>>(
        name: &str,
        phones: &[S],
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(Name::new(name)?);
        for phone in phones {
            record.add_phone(phone.as_ref())?;
        }
        if let Some(text) = birthday {
            record.set_birthday(text)?;
        }
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, text: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(text)?);
        Ok(())
    }

    /// Removes the first phone equal to `text`. Returns whether one was removed.
    pub fn remove_phone(&mut self, text: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == text) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// `new` is validated even if `old` is absent. Returns whether a phone
    /// was replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replaces the whole phone list with a single number.
    pub fn replace_phones(&mut self, text: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(text)?;
        self.phones = vec![phone];
        Ok(())
    }

    pub fn set_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local time) until the next birthday, or `None` when
    /// no birthday is set.
    pub fn days_to_birthday(&self) -> Option<u32> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's
    /// month and day. Zero when it is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<u32> {
        let born = self.birthday?.date();
        let this_year = occurrence_in(today.year(), born)?;
        let next = if this_year < today {
            occurrence_in(today.year() + 1, born)?
        } else {
            this_year
        };
        u32::try_from((next - today).num_days()).ok()
    }

    /// Case-insensitive substring match against the name or any phone.
    /// The empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&query)
            || self
                .phones
                .iter()
                .any(|p| p.as_str().to_lowercase().contains(&query))
    }
}

/// The birthday's month/day in `year`. Feb 29 falls back to Feb 28 outside
/// leap years.
fn occurrence_in(year: i32, born: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), born.day() - 1))
}

//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, one or more phone numbers, and an optional
/// birthday.
///
/// Phones keep insertion order and never contain two equal values. A record
/// always has at least one phone at creation time; `remove_phone` can drain
/// the list afterwards, matching the original behavior.
///
/// The name is fixed for the life of the record. The address book keys on
/// it, so renaming a contact means deleting and re-adding the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a single phone and no birthday.
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
            birthday: None,
        }
    }

    /// Builder-style birthday attachment.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or clear the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Append a phone number unless an equal one is already stored.
    ///
    /// Adding a duplicate is a silent no-op, not an error.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
    }

    /// Remove the phone whose value equals `raw` exactly; no-op if absent.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Find the stored phone whose value equals `raw` exactly.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Replace the phone equal to `raw_old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PhoneNotFound`] naming the missing phone and
    /// this contact when no stored phone matches `raw_old`.
    pub fn edit_phone(&mut self, raw_old: &str, new: PhoneNumber) -> RecordResult<()> {
        match self.phones.iter_mut().find(|p| p.as_str() == raw_old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound {
                phone: raw_old.to_string(),
                contact: self.name.as_str().to_string(),
            }),
        }
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns 0 when `today` is the birthday, otherwise a positive count;
    /// `None` when no birthday is stored.
    pub fn days_until_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_until_birthday(&self) -> Option<i64> {
        self.days_until_birthday_from(Local::now().date_naive())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn phone(raw: &str) -> PhoneNumber {
        PhoneNumber::new(raw).unwrap()
    }

    fn sample_record() -> Record {
        Record::new(ContactName::new("Alice Smith"), phone("1234567890"))
    }

    #[test]
    fn test_record_new() {
        let record = sample_record();
        assert_eq!(record.name().as_str(), "Alice Smith");
        assert_eq!(record.phones().len(), 1);
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_dedupes() {
        let mut record = sample_record();
        record.add_phone(phone("1234567890"));
        assert_eq!(record.phones().len(), 1);

        record.add_phone(phone("0987654321"));
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones()[1].as_str(), "0987654321");
    }

    #[test]
    fn test_remove_phone() {
        let mut record = sample_record();
        record.add_phone(phone("0987654321"));

        record.remove_phone("1234567890");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0987654321");

        // absent phone is a no-op
        record.remove_phone("1111111111");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_find_phone() {
        let record = sample_record();
        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("0987654321").is_none());
    }

    #[test]
    fn test_edit_phone_replaces_exactly_one() {
        let mut record = sample_record();
        record.add_phone(phone("0987654321"));

        record.edit_phone("1234567890", phone("5555555555")).unwrap();
        assert_eq!(record.phones()[0].as_str(), "5555555555");
        assert_eq!(record.phones()[1].as_str(), "0987654321");
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut record = sample_record();
        let err = record
            .edit_phone("1111111111", phone("5555555555"))
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::PhoneNotFound {
                phone: "1111111111".to_string(),
                contact: "Alice Smith".to_string(),
            }
        );
        // nothing changed
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_days_until_birthday() {
        let record = sample_record().with_birthday(Birthday::new("15031990").unwrap());
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(record.days_until_birthday_from(today), Some(0));

        let day_after = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert_eq!(record.days_until_birthday_from(day_after), Some(364));
    }

    #[test]
    fn test_days_until_birthday_none_without_birthday() {
        let record = sample_record();
        assert_eq!(record.days_until_birthday(), None);
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = sample_record();
        record.add_phone(phone("0987654321"));
        assert_eq!(
            record.to_string(),
            "Contact name: Alice Smith, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let record = sample_record().with_birthday(Birthday::new("15031990").unwrap());
        assert_eq!(
            record.to_string(),
            "Contact name: Alice Smith, phones: 1234567890, Birthday: 15031990"
        );
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record().with_birthday(Birthday::new("15031990").unwrap());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"name\":\"Alice Smith\""));
        assert!(json.contains("\"phones\":[\"1234567890\"]"));
        assert!(json.contains("\"birthday\":\"15031990\""));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialize_missing_birthday() {
        let json = r#"{"name":"Bob","phones":["1234567890"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_deserialize_invalid_phone_fails() {
        let json = r#"{"name":"Bob","phones":["12345"],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

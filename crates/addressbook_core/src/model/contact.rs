//! Contact domain model.
//!
//! # Responsibility
//! - Define the six-field record stored in the `person` table.
//! - Provide the name normalization and matching rules shared by handlers.
//!
//! # Invariants
//! - `name` is non-empty after trimming; other fields may be empty.
//! - Stored names are title-cased by the add path, so matching title-cases
//!   the query instead of lower-casing both sides.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// Lookup and delete key. Not unique.
    pub name: String,
    pub job: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Validation failures for contact data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
        }
    }
}

impl Error for ContactValidationError {}

impl Contact {
    /// Builds a contact from raw form input.
    ///
    /// The name is title-cased; the remaining fields are kept verbatim.
    pub fn from_input(
        name: &str,
        job: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: title_case(name),
            job: job.into(),
            company: company.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Validates invariants before persistence.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        Ok(())
    }

    /// Fields in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.job.as_str(),
            self.company.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ]
    }

    /// Returns whether the title-cased `query` occurs anywhere in `name`.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.contains(title_case(query).as_str())
    }
}

/// Upper-cases the first cased character of every word and lower-cases the rest.
///
/// Any uncased character (space, digit, apostrophe, hyphen, CJK ideograph)
/// starts a new word.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut previous_is_cased = false;

    for ch in value.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased {
            if previous_is_cased {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
        } else {
            titled.push(ch);
        }
        previous_is_cased = cased;
    }

    titled
}

#[cfg(test)]
mod tests {
    use super::{title_case, Contact, ContactValidationError};

    fn named(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            ..Contact::default()
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("ada lovelace"), "Ada Lovelace");
        assert_eq!(title_case("GRACE HOPPER"), "Grace Hopper");
    }

    #[test]
    fn title_case_treats_non_letters_as_word_breaks() {
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("mary-jane"), "Mary-Jane");
        assert_eq!(title_case("r2d2"), "R2D2");
        assert_eq!(title_case("a中b"), "A中B");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn from_input_titles_only_the_name() {
        let contact = Contact::from_input("ada lovelace", "engineer", "", "a@b.c", "", "london");
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.job, "engineer");
        assert_eq!(contact.address, "london");
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert_eq!(
            named("   ").validate(),
            Err(ContactValidationError::EmptyName)
        );
        assert!(named("Ada").validate().is_ok());
    }

    #[test]
    fn name_matches_is_a_titled_substring_check() {
        let contact = named("Ada Lovelace");
        assert!(contact.name_matches("ada"));
        assert!(contact.name_matches("love"));
        assert!(contact.name_matches("ADA LOVE"));
        assert!(!contact.name_matches("grace"));
    }

    #[test]
    fn name_matches_follows_title_case_of_the_query() {
        // "lace" titles to "Lace", which is not in "Ada Lovelace".
        assert!(!named("Ada Lovelace").name_matches("lace"));
        assert!(named("Ada Lovelace").name_matches(""));
    }
}

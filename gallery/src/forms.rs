//! Contact and admin form models.
//!
//! Both forms are validated here before anything goes over the wire. The
//! contact form serializes straight to the `/contact` JSON body; the admin
//! draft only carries the text fields, the image file stays in the browser's
//! `FormData`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::work::Category;

/// Services offered in the contact form's select, `(value, label)`.
pub const SERVICES: [(&str, &str); 5] = [
    ("design", "Marketplace design"),
    ("reels", "Reels editing"),
    ("youtube", "YouTube editing"),
    ("development", "Web development"),
    ("other", "Something else"),
];

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the email shape.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !is_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        require("message", &self.message)?;
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            service: self.service.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Text fields of the admin "add work" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: Option<String>,
}

impl WorkDraft {
    /// # Errors
    ///
    /// Returns [`FormError::Missing`] for the first blank required field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("title", &self.title)?;
        require("category", &self.category)?;
        require("description", &self.description)?;
        Ok(())
    }

    /// Category the new work will be filed under.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::from(self.category.trim())
    }

    /// Link, with blank input treated as absent.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() { Err(FormError::Missing(field)) } else { Ok(()) }
}

/// Loose `local@domain.tld` check, the same shape an `<input type=email>` accepts.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

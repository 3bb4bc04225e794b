use regex::Regex;

// ============================================================================
// CONTACT FORM MODEL - profile-card "Get in Touch" section
// ============================================================================

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex");
}

/// Minimum length for a non-empty message, in characters.
const MESSAGE_MIN_LEN: usize = 10;

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 4] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    /// Lowercase key used for error-slot ids in the DOM.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Capitalized field name for "<Field> is required." messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// One validation failure, tied to the field whose error slot shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// Raw contact-form input. Subject is optional, everything else is not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    /// Run the full rule set and collect every failure at once, one per
    /// field at most, so the view can light up all bad inputs together.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: format!("{} is required.", field.display_name()),
                });
            }
        }

        // Format check runs on the raw value, so stray whitespace around an
        // otherwise valid address still fails.
        if !self.email.trim().is_empty() && !EMAIL_REGEX.is_match(&self.email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter a valid email address (e.g., name@example.com)."
                    .to_string(),
            });
        }

        let message = self.message.trim();
        if !message.is_empty() && message.chars().count() < MESSAGE_MIN_LEN {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Message must be at least 10 characters long.".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages_for(form: &ContactForm, field: ContactField) -> Vec<String> {
        form.validate()
            .err()
            .unwrap_or_default()
            .into_iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn valid_form_passes() {
        let form = ContactForm::new(
            "Ada Lovelace",
            "ada@example.com",
            "",
            "I would like to report an issue.",
        );
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_form_flags_all_required_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(errors[0].message, "Name is required.");
        assert_eq!(errors[1].message, "Email is required.");
        assert_eq!(errors[2].message, "Message is required.");
    }

    #[test]
    fn subject_is_optional() {
        let form = ContactForm::new("Ada", "ada@example.com", "", "A long enough message.");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["plainaddress", "a@b", "a b@c.d", "a@b .c"] {
            let form = ContactForm::new("Ada", bad, "", "A long enough message.");
            assert_eq!(
                messages_for(&form, ContactField::Email),
                vec!["Please enter a valid email address (e.g., name@example.com).".to_string()],
                "email '{}' should fail",
                bad
            );
        }
    }

    #[test]
    fn padded_email_fails_format_check() {
        // Passes the required check after trimming but the format check
        // sees the raw padded value.
        let form = ContactForm::new("Ada", " ada@example.com ", "", "A long enough message.");
        assert_eq!(
            messages_for(&form, ContactField::Email),
            vec!["Please enter a valid email address (e.g., name@example.com).".to_string()]
        );
    }

    #[test]
    fn short_message_is_rejected() {
        let form = ContactForm::new("Ada", "ada@example.com", "", "Too short");
        assert_eq!(
            messages_for(&form, ContactField::Message),
            vec!["Message must be at least 10 characters long.".to_string()]
        );
    }

    #[test]
    fn ten_character_message_passes() {
        let form = ContactForm::new("Ada", "ada@example.com", "", "0123456789");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_message_reports_required_not_length() {
        let form = ContactForm::new("Ada", "ada@example.com", "", "   ");
        assert_eq!(
            messages_for(&form, ContactField::Message),
            vec!["Message is required.".to_string()]
        );
    }
}

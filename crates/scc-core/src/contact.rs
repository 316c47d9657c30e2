use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

pub const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }

    pub fn multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending { submission_id: u64 },
    Sent,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    pub status: ContactStatus,
    next_submission_id: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            status: ContactStatus::Idle,
            next_submission_id: 1,
        }
    }
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, ContactStatus::Sending { .. })
    }

    pub fn in_flight_id(&self) -> Option<u64> {
        match self.status {
            ContactStatus::Sending { submission_id } => Some(submission_id),
            _ => None,
        }
    }

    /// Every field is required; the first blank one in form order is reported.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormError> {
        if self.is_sending() {
            return Err(ContactFormError::InFlight);
        }
        if let Some(field) = CONTACT_FIELDS
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            return Err(ContactFormError::MissingField(field));
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim_end().to_string(),
        })
    }

    pub fn begin_submission(&mut self) -> u64 {
        let submission_id = self.next_submission_id;
        self.next_submission_id += 1;
        self.status = ContactStatus::Sending { submission_id };
        submission_id
    }

    pub fn clear_fields(&mut self) {
        for field in CONTACT_FIELDS {
            self.field_mut(field).clear();
        }
        self.focus = ContactField::Name;
    }

    /// Drops the view state when the form goes away. The submission counter
    /// survives so a late result for the old submission cannot match a new one.
    pub fn abandon(&mut self) {
        *self = Self {
            next_submission_id: self.next_submission_id,
            ..Self::default()
        };
    }
}

//! Guest model
//!
//! A guest on the list, with their RSVP state and the private code they use
//! to answer the RSVP form.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GuestId;

labeled_enum! {
    /// How a guest knows the couple
    pub enum GuestRelation {
        Family => ("family", "Family"),
        Friend => ("friend", "Friend"),
        Coworker => ("coworker", "Coworker"),
        PartnerFamily => ("partner_family", "Partner's Family"),
        PartnerFriend => ("partner_friend", "Partner's Friend"),
        Other => ("other", "Other"),
    }
}

impl Default for GuestRelation {
    fn default() -> Self {
        Self::Other
    }
}

labeled_enum! {
    /// Whose side of the aisle
    pub enum Side {
        Partner1 => ("partner1", "Partner 1"),
        Partner2 => ("partner2", "Partner 2"),
        Both => ("both", "Both"),
    }
}

impl Default for Side {
    fn default() -> Self {
        Self::Both
    }
}

labeled_enum! {
    /// A guest's response to the invitation
    pub enum RsvpStatus {
        Pending => ("pending", "Pending"),
        Invited => ("invited", "Invited"),
        Confirmed => ("confirmed", "Confirmed"),
        Declined => ("declined", "Declined"),
        Maybe => ("maybe", "Maybe"),
    }
}

impl Default for RsvpStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl RsvpStatus {
    /// Still waiting on an answer (pending, invited or maybe)
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Pending | Self::Invited | Self::Maybe)
    }
}

/// Length of a generated RSVP code
pub const RSVP_CODE_LEN: usize = 6;

const RSVP_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random RSVP code like `K7Q2ZD`
pub fn generate_rsvp_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RSVP_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..RSVP_CODE_CHARSET.len());
            RSVP_CODE_CHARSET[idx] as char
        })
        .collect()
}

/// A wedding guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,

    pub first_name: String,

    pub last_name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub relation: GuestRelation,

    #[serde(default)]
    pub side: Side,

    #[serde(default)]
    pub rsvp_status: RsvpStatus,

    /// Unique across the guest list, stored upper-case
    pub rsvp_code: String,

    #[serde(default)]
    pub meal_choice: Option<String>,

    #[serde(default)]
    pub dietary_restrictions: Option<String>,

    #[serde(default)]
    pub plus_one_allowed: bool,

    #[serde(default)]
    pub plus_one_name: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Create a new guest with a freshly generated RSVP code
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: GuestId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            relation: GuestRelation::default(),
            side: Side::default(),
            rsvp_status: RsvpStatus::default(),
            rsvp_code: generate_rsvp_code(&mut rand::thread_rng()),
            meal_choice: None,
            dietary_restrictions: None,
            plus_one_allowed: false,
            plus_one_name: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether a named plus-one is coming along
    pub fn has_plus_one(&self) -> bool {
        self.plus_one_name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty())
    }

    pub fn set_rsvp_status(&mut self, status: RsvpStatus) {
        self.rsvp_status = status;
        self.updated_at = Utc::now();
    }

    /// Append a line to the guest's notes
    pub fn append_note(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.notes = Some(match self.notes.take() {
            Some(existing) if !existing.trim().is_empty() => format!("{}\n{}", existing, line),
            _ => line.to_string(),
        });
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), GuestValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(GuestValidationError::EmptyFirstName);
        }

        if self.last_name.trim().is_empty() {
            return Err(GuestValidationError::EmptyLastName);
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(GuestValidationError::InvalidEmail(email.clone()));
            }
        }

        if self.rsvp_code.len() != RSVP_CODE_LEN
            || !self
                .rsvp_code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(GuestValidationError::InvalidRsvpCode(self.rsvp_code.clone()));
        }

        if self.has_plus_one() && !self.plus_one_allowed {
            return Err(GuestValidationError::PlusOneNotAllowed);
        }

        Ok(())
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestValidationError {
    EmptyFirstName,
    EmptyLastName,
    InvalidEmail(String),
    InvalidRsvpCode(String),
    PlusOneNotAllowed,
}

impl fmt::Display for GuestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "First name cannot be empty"),
            Self::EmptyLastName => write!(f, "Last name cannot be empty"),
            Self::InvalidEmail(e) => write!(f, "Invalid email address: {}", e),
            Self::InvalidRsvpCode(c) => write!(
                f,
                "Invalid RSVP code '{}': expected {} letters or digits",
                c, RSVP_CODE_LEN
            ),
            Self::PlusOneNotAllowed => write!(f, "This guest is not allowed a plus-one"),
        }
    }
}

impl std::error::Error for GuestValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_guest() {
        let guest = Guest::new("Emma", "Johnson");
        assert_eq!(guest.full_name(), "Emma Johnson");
        assert_eq!(guest.rsvp_status, RsvpStatus::Pending);
        assert_eq!(guest.rsvp_code.len(), RSVP_CODE_LEN);
        assert!(guest.validate().is_ok());
    }

    #[test]
    fn test_rsvp_code_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let code = generate_rsvp_code(&mut rng);
            assert_eq!(code.len(), 6);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_awaiting() {
        assert!(RsvpStatus::Pending.is_awaiting());
        assert!(RsvpStatus::Invited.is_awaiting());
        assert!(RsvpStatus::Maybe.is_awaiting());
        assert!(!RsvpStatus::Confirmed.is_awaiting());
        assert!(!RsvpStatus::Declined.is_awaiting());
    }

    #[test]
    fn test_plus_one_requires_permission() {
        let mut guest = Guest::new("Michael", "Chen");
        guest.plus_one_name = Some("Alex".into());
        assert_eq!(guest.validate(), Err(GuestValidationError::PlusOneNotAllowed));

        guest.plus_one_allowed = true;
        assert!(guest.validate().is_ok());
        assert!(guest.has_plus_one());
    }

    #[test]
    fn test_blank_plus_one_is_not_counted() {
        let mut guest = Guest::new("Sarah", "Williams");
        guest.plus_one_allowed = true;
        guest.plus_one_name = Some("   ".into());
        assert!(!guest.has_plus_one());
    }

    #[test]
    fn test_append_note() {
        let mut guest = Guest::new("Lisa", "Davis");
        guest.append_note("Song request: September");
        guest.append_note("  ");
        guest.append_note("Message: Can't wait!");
        assert_eq!(
            guest.notes.as_deref(),
            Some("Song request: September\nMessage: Can't wait!")
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut guest = Guest::new("James", "Brown");
        guest.email = Some("james.example.com".into());
        assert!(matches!(
            guest.validate(),
            Err(GuestValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_relation_parse() {
        assert_eq!(
            "partner-family".parse::<GuestRelation>().unwrap(),
            GuestRelation::PartnerFamily
        );
        assert_eq!("partner2".parse::<Side>().unwrap(), Side::Partner2);
    }
}

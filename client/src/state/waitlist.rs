//! Owner and hunter waitlist records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role has a single storage slot: submitting a form overwrites the
//! previous record for that browser. Nothing is sent over the network.
//!
//! ERROR HANDLING
//! ==============
//! The forms carry browser `required` attributes, but submission re-checks
//! the same rules through [`WaitlistRecord::validate`] and reports storage
//! failures as [`WaitlistError::Storage`] instead of dropping them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::storage::{
    HUNTER_WAITLIST_KEY, KeyValueStore, OWNER_WAITLIST_KEY, StorageError, load_or, save_json,
};

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

/// Reasons a waitlist submission is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Day rate must be a number of dollars, zero or more.")]
    InvalidDayRate,

    #[error("Could not save your details: {0}")]
    Storage(#[from] StorageError),
}

/// A single-slot waitlist record persisted under its own key.
pub trait WaitlistRecord: Serialize + DeserializeOwned + Default {
    /// Local-storage key holding the record.
    const STORAGE_KEY: &'static str;
    /// Message shown after a successful save.
    const ACKNOWLEDGEMENT: &'static str;

    /// Check required fields and formats.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    fn validate(&self) -> Result<(), WaitlistError>;

    /// The stored record, or the defaults when none is readable.
    fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        load_or(store, Self::STORAGE_KEY, Self::default)
    }
}

/// Validate `record` and overwrite its storage slot.
///
/// # Errors
///
/// Returns a validation error without touching storage, or
/// [`WaitlistError::Storage`] if the write fails.
pub fn submit<R, S>(record: &R, store: &S) -> Result<(), WaitlistError>
where
    R: WaitlistRecord,
    S: KeyValueStore + ?Sized,
{
    record.validate()?;
    save_json(store, R::STORAGE_KEY, record)?;
    Ok(())
}

fn require(value: &str, label: &'static str) -> Result<(), WaitlistError> {
    if value.trim().is_empty() {
        return Err(WaitlistError::MissingField(label));
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), WaitlistError> {
    require(value, "Email")?;
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !trimmed.contains(' ') => Ok(()),
        _ => Err(WaitlistError::InvalidEmail),
    }
}

// =============================================================================
// OWNER
// =============================================================================

/// Landowner interest record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerWaitlistEntry {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Free text: an address or `lat,lng`.
    pub property_location: String,
    /// Dollars per day, as typed.
    pub day_rate: String,
    pub rules: String,
    pub zones_hours: String,
    pub no_transfer: bool,
    pub checkin: String,
}

impl Default for OwnerWaitlistEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            property_location: String::new(),
            day_rate: String::new(),
            rules: String::new(),
            zones_hours: "Sunrise to 10:30 / 2:30 to sunset. North field closed.".to_owned(),
            no_transfer: true,
            checkin: "Photo at gate on arrival; photo of area on exit.".to_owned(),
        }
    }
}

impl WaitlistRecord for OwnerWaitlistEntry {
    const STORAGE_KEY: &'static str = OWNER_WAITLIST_KEY;
    const ACKNOWLEDGEMENT: &'static str = "Owner waitlist saved (local demo).";

    fn validate(&self) -> Result<(), WaitlistError> {
        require(&self.name, "Full name")?;
        require(&self.phone, "Phone")?;
        check_email(&self.email)?;
        require(&self.property_location, "Property location")?;
        require(&self.day_rate, "Day rate")?;
        match self.day_rate.trim().parse::<f64>() {
            Ok(rate) if rate.is_finite() && rate >= 0.0 => Ok(()),
            _ => Err(WaitlistError::InvalidDayRate),
        }
    }
}

// =============================================================================
// HUNTER
// =============================================================================

/// Species a hunter or angler is most interested in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSpecies {
    Whitetail,
    #[default]
    Turkey,
    Waterfowl,
    Bass,
    Walleye,
    Panfish,
}

impl TargetSpecies {
    pub const ALL: [Self; 6] =
        [Self::Whitetail, Self::Turkey, Self::Waterfowl, Self::Bass, Self::Walleye, Self::Panfish];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Whitetail => "Whitetail",
            Self::Turkey => "Turkey",
            Self::Waterfowl => "Waterfowl",
            Self::Bass => "Bass",
            Self::Walleye => "Walleye",
            Self::Panfish => "Panfish",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Whether proof of liability insurance is on file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Insurance {
    #[default]
    Yes,
    No,
}

impl Insurance {
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];

    /// Form option value, matching the stored JSON string.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.value() == value)
    }
}

/// Self-reported experience level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }
}

/// Hunter/angler interest record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HunterWaitlistEntry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub species: TargetSpecies,
    pub insurance: Insurance,
    /// Optional license number.
    pub license_id: String,
    pub experience: Experience,
}

impl WaitlistRecord for HunterWaitlistEntry {
    const STORAGE_KEY: &'static str = HUNTER_WAITLIST_KEY;
    const ACKNOWLEDGEMENT: &'static str = "Hunter waitlist saved (local demo).";

    fn validate(&self) -> Result<(), WaitlistError> {
        require(&self.name, "Full name")?;
        require(&self.phone, "Phone")?;
        check_email(&self.email)
    }
}

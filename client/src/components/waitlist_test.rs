use super::*;
use crate::util::storage::{MemoryStore, OWNER_WAITLIST_KEY, load_json};

fn complete_owner() -> OwnerWaitlistEntry {
    OwnerWaitlistEntry {
        name: "Dana Fields".into(),
        phone: "555-0100".into(),
        email: "dana@example.com".into(),
        property_location: "42.08,-82.75".into(),
        day_rate: "75".into(),
        ..OwnerWaitlistEntry::default()
    }
}

#[test]
fn submit_message_returns_acknowledgement_and_stores_record() {
    let store = MemoryStore::new();
    let owner = complete_owner();

    assert_eq!(submit_message(&owner, &store), Ok("Owner waitlist saved (local demo)."));
    let stored: Option<OwnerWaitlistEntry> = load_json(&store, OWNER_WAITLIST_KEY).unwrap();
    assert_eq!(stored, Some(owner));
}

#[test]
fn submit_message_reports_missing_field_inline() {
    let store = MemoryStore::new();
    let owner = OwnerWaitlistEntry { phone: "  ".into(), ..complete_owner() };

    assert_eq!(submit_message(&owner, &store), Err("Phone is required.".to_owned()));
    assert_eq!(store.get(OWNER_WAITLIST_KEY).unwrap(), None);
}

#[test]
fn submit_message_reports_unavailable_storage_inline() {
    let hunter = HunterWaitlistEntry {
        name: "Sam".into(),
        phone: "555-0101".into(),
        email: "sam@example.com".into(),
        ..HunterWaitlistEntry::default()
    };

    let message = submit_message(&hunter, &BrowserStorage).unwrap_err();
    assert!(message.starts_with("Could not save your details"));
}

#[test]
fn first_render_record_ignores_stored_submission() {
    let store = MemoryStore::new();
    submit_message(&complete_owner(), &store).unwrap();

    // Forms render from the defaults; the stored record arrives after mount.
    assert_eq!(OwnerWaitlistEntry::default().name, "");
    assert_eq!(OwnerWaitlistEntry::load(&store), complete_owner());
}

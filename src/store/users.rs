use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::User;

/// Canonical uniqueness key for an email address. Two addresses differing
/// only in case or surrounding whitespace are the same account.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Rejection from `UserStore::create` when the email key is already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailTaken;

/// User repository. Uniqueness is enforced through the `by_email` index:
/// the entry API makes check-and-insert a single atomic step, so two
/// concurrent registrations of the same address cannot both win.
#[derive(Debug, Default)]
pub struct UserStore {
    by_id: DashMap<Uuid, User>,
    by_email: DashMap<String, Uuid>,
}

impl UserStore {
    pub fn create(
        &self,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, EmailTaken> {
        let user = User {
            id: Uuid::new_v4(),
            email: email.trim().to_string(),
            password_hash: password_hash.to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            created_at: Utc::now(),
        };
        match self.by_email.entry(email_key(email)) {
            Entry::Occupied(_) => Err(EmailTaken),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.by_id.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.by_email.contains_key(&email_key(email))
    }

    pub fn find(&self, id: Uuid) -> Option<User> {
        self.by_id.get(&id).map(|u| u.clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.by_email.get(&email_key(email))?;
        self.find(id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_persists_and_finds() {
        let store = UserStore::default();
        let user = store
            .create("jane@example.com", "hash", "Jane", "Doe")
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(user.id).unwrap().email, "jane@example.com");
    }

    #[test]
    fn duplicate_email_differing_only_in_case_is_rejected() {
        let store = UserStore::default();
        store
            .create("Jane@Example.COM", "hash", "Jane", "Doe")
            .unwrap();
        let result = store.create("jane@example.com", "hash", "Other", "Person");
        assert_eq!(result.err(), Some(EmailTaken));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_by_email_ignores_case_and_whitespace() {
        let store = UserStore::default();
        let user = store
            .create("jane@example.com", "hash", "Jane", "Doe")
            .unwrap();
        let found = store.find_by_email("  JANE@EXAMPLE.COM ").unwrap();
        assert_eq!(found.id, user.id);
    }

    #[test]
    fn stored_email_keeps_submitted_case() {
        let store = UserStore::default();
        let user = store
            .create(" Jane@Example.com ", "hash", "Jane", "Doe")
            .unwrap();
        assert_eq!(user.email, "Jane@Example.com");
    }
}

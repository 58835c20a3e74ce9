#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;

use pharmacy_client_rust::context::AuthUser;
use pharmacy_client_rust::guard::{AuthCallback, AuthProvider, Subscription};
use pharmacy_client_rust::store::memory::MemoryStore;

/// Memory store seeded with two pharmacies, so a scoping bug that reads the
/// wrong tenant shows up as foreign records in an assertion.
pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .load_fixture(&json!({
            "Pharmacies": {
                "ph1": { "name": "Main Street Pharmacy", "city": "Nairobi" },
                "ph2": { "name": "Harbor Pharmacy", "city": "Mombasa" }
            },
            "medicinesCatalog": {
                "c1": { "name": "aspirin", "form": "tablet" },
                "c2": { "name": "paracetamol", "form": "syrup" }
            },
            "Pharmacies/ph1/medicines": {
                "m1": { "name": "aspirin", "stock": 120 },
                "m2": { "name": "Aspirin", "stock": 5 },
                "m3": { "name": "aspartame", "stock": 40 },
                "m4": { "name": "ibuprofen", "stock": 80 },
                "m5": { "name": "baspirin", "stock": 3 },
                "m6": { "name": "asp", "stock": 1 }
            },
            "Pharmacies/ph2/medicines": {
                "x1": { "name": "aspirin", "stock": 999 }
            },
            "Pharmacies/ph1/medicines/m1/batches": {
                "b1": { "batchNumber": "A-100", "expiryDate": "2027-01-31", "quantity": 60 },
                "b2": { "batchNumber": "A-101", "expiryDate": "2024-06-30", "quantity": 60 }
            },
            "Pharmacies/ph1/batches": {
                "pb1": { "batchNumber": "A-100", "medicineId": "m1", "expiryDate": "2027-01-31" }
            },
            "Pharmacies/ph1/requests": {
                "r1": { "medicine": "aspirin", "quantity": 30, "status": "pending" }
            },
            "Pharmacies/ph1/staff": {
                "s1": { "name": "Dr. Otieno", "role": "doctor" },
                "s2": { "name": "Wanjiru", "role": "nurse" }
            }
        }))
        .expect("fixture should load");
    store
}

pub fn test_user(uid: &str) -> AuthUser {
    AuthUser {
        uid: uid.to_string(),
        display_name: "Test User".to_string(),
        email: format!("{}@example.com", uid),
    }
}

/// Auth provider that replays a fixed list of auth-state events
/// synchronously on subscribe, the way a real provider fires the callback
/// immediately with the current state.
pub struct ScriptedAuthProvider {
    events: Vec<Option<AuthUser>>,
    unsubscribes: Arc<AtomicUsize>,
}

impl ScriptedAuthProvider {
    pub fn new(events: Vec<Option<AuthUser>>) -> Self {
        Self {
            events,
            unsubscribes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

impl AuthProvider for ScriptedAuthProvider {
    fn on_auth_state_changed(&self, mut callback: AuthCallback) -> Subscription {
        for event in self.events.clone() {
            callback(event);
        }
        let unsubscribes = Arc::clone(&self.unsubscribes);
        Subscription::new(move || {
            unsubscribes.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Auth provider that holds the listener without ever firing it, for
/// exercising abandoned navigations.
pub struct PendingAuthProvider {
    listener: Mutex<Option<AuthCallback>>,
    unsubscribes: Arc<AtomicUsize>,
}

impl PendingAuthProvider {
    pub fn new() -> Self {
        Self {
            listener: Mutex::new(None),
            unsubscribes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

impl AuthProvider for PendingAuthProvider {
    fn on_auth_state_changed(&self, callback: AuthCallback) -> Subscription {
        *self.listener.lock().unwrap() = Some(callback);
        let unsubscribes = Arc::clone(&self.unsubscribes);
        Subscription::new(move || {
            unsubscribes.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/*!
 * Shared fixtures for lifecycle tests
 */

#![allow(dead_code)]

use parking_lot::Mutex;
use realm_binder::{
    BindableRealm, ContainerContext, DefaultEnvironment, DefaultSecurityManager, Realm,
    RealmError, RealmResult,
};
use std::sync::Arc;

/// Stand-in database pool handed to realms
#[derive(Debug)]
pub struct Pool {
    pub id: u32,
}

pub fn pool() -> Arc<Pool> {
    Arc::new(Pool { id: 1 })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Bind,
    Unbind,
}

/// One bind or unbind call as seen by a realm
#[derive(Debug, Clone)]
pub struct Entry {
    pub realm: String,
    pub call: Call,
    pub handle: Arc<Pool>,
}

/// Shared, ordered record of realm calls
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Entry>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, realm: &str, call: Call, handle: &Arc<Pool>) {
        self.0.lock().push(Entry {
            realm: realm.to_string(),
            call,
            handle: Arc::clone(handle),
        });
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.0.lock().clone()
    }

    /// Realm names for calls of the given kind, in call order
    pub fn realms(&self, call: Call) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|e| e.call == call)
            .map(|e| e.realm.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

/// Bindable realm that records every call and can be told to fail
pub struct RecordingRealm {
    name: String,
    journal: Journal,
    fail_on: Option<Call>,
}

impl Realm<Pool> for RecordingRealm {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_bindable(&self) -> Option<&dyn BindableRealm<Pool>> {
        Some(self)
    }
}

impl BindableRealm<Pool> for RecordingRealm {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self, handle: Arc<Pool>) -> RealmResult<()> {
        self.journal.record(&self.name, Call::Bind, &handle);
        self.outcome(Call::Bind)
    }

    fn unbind(&self, handle: &Arc<Pool>) -> RealmResult<()> {
        self.journal.record(&self.name, Call::Unbind, handle);
        self.outcome(Call::Unbind)
    }
}

impl RecordingRealm {
    fn outcome(&self, call: Call) -> RealmResult<()> {
        if self.fail_on == Some(call) {
            Err(RealmError::Unavailable {
                realm: self.name.clone(),
                reason: "connection refused".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Realm without the bindable capability
pub struct PlainRealm(pub String);

impl Realm<Pool> for PlainRealm {
    fn name(&self) -> &str {
        &self.0
    }
}

pub fn recording(name: &str, journal: &Journal) -> Arc<dyn Realm<Pool>> {
    Arc::new(RecordingRealm {
        name: name.to_string(),
        journal: journal.clone(),
        fail_on: None,
    })
}

pub fn failing(name: &str, journal: &Journal, call: Call) -> Arc<dyn Realm<Pool>> {
    Arc::new(RecordingRealm {
        name: name.to_string(),
        journal: journal.clone(),
        fail_on: Some(call),
    })
}

pub fn plain(name: &str) -> Arc<dyn Realm<Pool>> {
    Arc::new(PlainRealm(name.to_string()))
}

/// Context with a registered environment whose manager holds `realms`
pub fn context_with(
    realms: Vec<Arc<dyn Realm<Pool>>>,
) -> (ContainerContext<Pool>, Arc<DefaultSecurityManager<Pool>>) {
    let manager = Arc::new(DefaultSecurityManager::with_realms(realms));
    let context = ContainerContext::new("app");
    context.set_environment(Arc::new(DefaultEnvironment::<Pool>::new(manager.clone())));
    (context, manager)
}

/// The `[R1(capable), R2(incapable), R3(capable)]` realm set
pub fn mixed_realms(journal: &Journal) -> Vec<Arc<dyn Realm<Pool>>> {
    vec![
        recording("r1", journal),
        plain("r2"),
        recording("r3", journal),
    ]
}

/*!
 * Container Context
 * Per-application context and the lifecycle events delivered against it
 */

use crate::security::Environment;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;
use uuid::Uuid;

/// Lifecycle moment an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    /// The request-handling environment is available
    Ready,
    /// The request-handling environment is being torn down
    Torndown,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleStage::Ready => write!(f, "ready"),
            LifecycleStage::Torndown => write!(f, "torndown"),
        }
    }
}

/// Application context owned by the hosting container
///
/// The security environment is registered here by its loader and looked up
/// by anything that runs later in the lifecycle.
pub struct ContainerContext<H> {
    name: String,
    environment: RwLock<Option<Arc<dyn Environment<H>>>>,
}

impl<H> ContainerContext<H> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            environment: RwLock::new(None),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the security environment, replacing any previous one
    pub fn set_environment(&self, environment: Arc<dyn Environment<H>>) {
        *self.environment.write() = Some(environment);
    }

    /// Unregister the security environment
    pub fn remove_environment(&self) -> Option<Arc<dyn Environment<H>>> {
        self.environment.write().take()
    }

    /// Currently registered security environment
    pub fn environment(&self) -> Option<Arc<dyn Environment<H>>> {
        self.environment.read().clone()
    }
}

/// Notification delivered by the container at a lifecycle moment
pub struct LifecycleEvent<'a, H> {
    id: Uuid,
    stage: LifecycleStage,
    occurred_at: SystemTime,
    context: &'a ContainerContext<H>,
}

impl<'a, H> LifecycleEvent<'a, H> {
    pub fn new(stage: LifecycleStage, context: &'a ContainerContext<H>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage,
            occurred_at: SystemTime::now(),
            context,
        }
    }

    #[inline]
    pub fn ready(context: &'a ContainerContext<H>) -> Self {
        Self::new(LifecycleStage::Ready, context)
    }

    #[inline]
    pub fn torndown(context: &'a ContainerContext<H>) -> Self {
        Self::new(LifecycleStage::Torndown, context)
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    #[inline]
    pub fn occurred_at(&self) -> SystemTime {
        self.occurred_at
    }

    #[inline]
    pub fn context(&self) -> &'a ContainerContext<H> {
        self.context
    }
}

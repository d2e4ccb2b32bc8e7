//! # Core Actor Framework
//!
//! Generic building blocks for keeping a keyed collection inside a single task.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every stored type implements.
//! - [`ResourceActor`]: The actor that owns the collection.
//! - [`ResourceClient`]: The cloneable handle used to talk to it.
//! - [`FrameworkError`]: Channel failures (ActorClosed, ActorDropped).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any entity must implement to be held by a [`ResourceActor`].
///
/// # Architecture Note
/// The actor never looks inside an entity. It needs two things: the key the
/// entity is stored under, and a way to decide whether the entity answers a
/// query. Both are expressed here, so the same message loop serves any cached
/// record type.
///
/// `Query` is an associated type, so a search for hardware assets takes an asset
/// query and nothing else. The compiler rejects a query meant for another store.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Search criteria understood by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// Key the entity is stored under.
    fn id(&self) -> Self::Id;

    /// Whether the entity satisfies `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor.
///
/// # Store Operations
/// The actor backs a cache that is filled in bulk and read many times, so the
/// vocabulary is that of a keyed store rather than full CRUD:
///
/// - **Put**: Insert or replace by [`ActorEntity::id`]. Returns the replaced entity.
/// - **Get**: Fetch by key.
/// - **Search**: Every entity for which [`ActorEntity::matches`] holds.
/// - **List**: Every entity.
/// - **Clear**: Drop everything. Returns how many entities were removed.
/// - **Len**: Current size.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Put {
        item: T,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Search {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Clear {
        respond_to: Response<usize>,
    },
    Len {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Many loader tasks may write into the store at the same time, but the actor
/// applies their messages one after the other. No `Mutex` or `RwLock` guards the
/// `store`; exclusive ownership inside the task is the guard.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "HardwareAsset" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Put { item, respond_to } => {
                    let id = item.id();
                    let previous = self.store.insert(id.clone(), item);
                    debug!(entity_type, %id, replaced = previous.is_some(), size = self.store.len(), "Put");
                    let _ = respond_to.send(Ok(previous));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Search { query, respond_to } => {
                    let hits: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, hits = hits.len(), "Search");
                    let _ = respond_to.send(Ok(hits));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn put(&self, item: T) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Put { item, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn search(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Search { query, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to }).await
    }

    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Len { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Part {
        sku: String,
        label: String,
    }

    impl Part {
        fn new(sku: &str, label: &str) -> Self {
            Self { sku: sku.into(), label: label.into() }
        }
    }

    impl ActorEntity for Part {
        type Id = String;
        type Query = String;

        fn id(&self) -> String {
            self.sku.clone()
        }

        fn matches(&self, query: &String) -> bool {
            self.label.contains(query.as_str())
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_store_operations() {
        let (actor, client) = ResourceActor::<Part>::new(10);
        let handle = tokio::spawn(actor.run());

        // 1. Put
        assert_eq!(client.put(Part::new("A-1", "red valve")).await.unwrap(), None);
        client.put(Part::new("B-2", "blue valve")).await.unwrap();
        client.put(Part::new("C-3", "red pump")).await.unwrap();

        // 2. Replace returns the previous entity
        let previous = client.put(Part::new("A-1", "red valve v2")).await.unwrap();
        assert_eq!(previous, Some(Part::new("A-1", "red valve")));
        assert_eq!(client.len().await.unwrap(), 3);

        // 3. Get
        let part = client.get("A-1".to_string()).await.unwrap().unwrap();
        assert_eq!(part.label, "red valve v2");
        assert!(client.get("missing".to_string()).await.unwrap().is_none());

        // 4. Search
        let mut hits = client.search("red".to_string()).await.unwrap();
        hits.sort_by(|a, b| a.sku.cmp(&b.sku));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].sku, "C-3");

        // 5. Clear
        assert_eq!(client.clear().await.unwrap(), 3);
        assert!(client.list().await.unwrap().is_empty());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = ResourceActor::<Part>::new(1);
        drop(actor);

        let err = client.len().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}

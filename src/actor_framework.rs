use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Trait that any store entry must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Name used in logs and error messages ("cart", "order", ...)
    const KIND: &'static str;

    /// Construct the full entity from the generated ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_delete(&self) -> Result<(), String> { Ok(()) }

    /// Handle a domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    /// Removes the entry and hands it back to the caller.
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(kind = T::KIND, "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(Self::not_found(&id)),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(kind = T::KIND, "Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        debug!(kind = T::KIND, id = %id, "Created");
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<T, FrameworkError> {
        let item = self.store.get(&id).ok_or_else(|| Self::not_found(&id))?;
        item.on_delete().map_err(FrameworkError::Rejected)?;
        let item = self.store.remove(&id).ok_or_else(|| Self::not_found(&id))?;
        debug!(kind = T::KIND, id = %id, "Deleted");
        Ok(item)
    }

    fn not_found(id: &T::Id) -> FrameworkError {
        FrameworkError::NotFound { kind: T::KIND, id: id.to_string() }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: derive(Clone) would require T: Clone on the request type.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cart, CartChange, CartCreate, CartLine, MenuItem};
    use crate::cart_actor::CartAction;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn spawn_cart_actor() -> ResourceClient<Cart> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("cart_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::<Cart>::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_cart_actor();

        let id = client.create(CartCreate::default()).await.unwrap();
        assert_eq!(id, "cart_1");

        let coke = MenuItem::new("m4", "Coke", 2.50);
        let result = client.perform_action(id.clone(), CartAction::AddOrIncrement(coke.clone())).await.unwrap();
        assert_eq!(result.change, CartChange::Added);

        let result = client.perform_action(id.clone(), CartAction::AddOrIncrement(coke)).await.unwrap();
        assert_eq!(result.change, CartChange::Incremented);

        let cart = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_rejected_create_and_missing_ids() {
        let client = spawn_cart_actor();

        let bad = CartCreate { lines: vec![CartLine::new("m1", "Margherita Pizza", 12.99, 0)] };
        assert!(matches!(client.create(bad).await, Err(FrameworkError::Rejected(_))));

        let missing = client.delete("cart_99".to_string()).await;
        assert_eq!(missing, Err(FrameworkError::NotFound { kind: "cart", id: "cart_99".to_string() }));

        assert_eq!(client.get("cart_99".to_string()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_delete_hands_back_the_entry_once() {
        let client = spawn_cart_actor();
        let lines = vec![CartLine::new("m1", "Margherita Pizza", 12.99, 2)];
        let id = client.create(CartCreate { lines: lines.clone() }).await.unwrap();

        let removed = client.delete(id.clone()).await.unwrap();
        assert_eq!(removed.lines, lines);

        let again = client.delete(id.clone()).await;
        assert!(matches!(again, Err(FrameworkError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id_and_actor_stops_with_last_client() {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("cart_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::<Cart>::new(10, next_id);
        let handle = tokio::spawn(actor.run());

        client.create(CartCreate::default()).await.unwrap();
        client.create(CartCreate::default()).await.unwrap();
        let ids: Vec<String> = client.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["cart_1", "cart_2"]);

        let second_client = client.clone();
        drop(client);
        // Actor stays alive while any sender exists.
        assert!(second_client.list().await.is_ok());
        drop(second_client);
        handle.await.unwrap();
    }
}

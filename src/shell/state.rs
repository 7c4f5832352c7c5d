use crate::modules::gatherings::adapters::projections_in_memory::InMemoryProjections;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::handler::GatheringCommandHandler;
use crate::modules::gatherings::queries::CatalogQueries;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::mailer::Mailer;
use crate::shared::infrastructure::media_store::MediaStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handler:
        Arc<GatheringCommandHandler<InMemoryEventStore<GatheringEvent>, InMemoryProjections>>,
    pub queries: Arc<dyn CatalogQueries>,
    pub mailer: Arc<dyn Mailer>,
    pub media: Arc<dyn MediaStore>,
}

impl AppState {
    /// In-memory wiring shared by the binary and the route tests.
    pub fn in_memory(mailer: Arc<dyn Mailer>, media: Arc<dyn MediaStore>) -> Self {
        let event_store = Arc::new(InMemoryEventStore::<GatheringEvent>::new());
        let projections = Arc::new(InMemoryProjections::new());
        let handler = Arc::new(GatheringCommandHandler::new(
            event_store,
            projections.clone(),
        ));
        Self {
            handler,
            queries: projections,
            mailer,
            media,
        }
    }
}

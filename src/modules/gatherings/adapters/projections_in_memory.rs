// In memory implementation of the projection repository and the read port.
//
// Purpose
// - Support handler and route tests and local development without a
//   database.
// - The offline toggle exercises the failure paths.

use crate::modules::gatherings::adapters::projections::GatheringProjectionRepository;
use crate::modules::gatherings::queries::{
    CatalogQueries, GatheringView, GuestView, ReservationView, SlotReservationsView,
};
use anyhow::anyhow;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    gatherings: RwLock<HashMap<String, GatheringView>>,
    reservations: RwLock<HashMap<String, ReservationView>>,
    offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.offline {
            return Err(anyhow!("projections repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GatheringProjectionRepository for InMemoryProjections {
    async fn upsert_gathering(&self, view: GatheringView) -> anyhow::Result<()> {
        self.check_online()?;
        let mut guard = self.gatherings.write().await;
        guard.insert(view.gathering_id.clone(), view);
        Ok(())
    }

    async fn remove_gathering(&self, gathering_id: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.gatherings.write().await.remove(gathering_id);
        self.reservations
            .write()
            .await
            .retain(|_, view| view.gathering_id != gathering_id);
        Ok(())
    }

    async fn upsert_reservation(&self, view: ReservationView) -> anyhow::Result<()> {
        self.check_online()?;
        let mut guard = self.reservations.write().await;
        guard.insert(view.reservation_id.clone(), view);
        Ok(())
    }

    async fn remove_reservation(&self, reservation_id: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.reservations.write().await.remove(reservation_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogQueries for InMemoryProjections {
    async fn list_gatherings(&self, only_active: bool) -> anyhow::Result<Vec<GatheringView>> {
        self.check_online()?;
        let guard = self.gatherings.read().await;
        let mut views: Vec<GatheringView> = guard
            .values()
            .filter(|view| !only_active || view.is_active)
            .cloned()
            .collect();
        views.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.gathering_id.cmp(&b.gathering_id))
        });
        Ok(views)
    }

    async fn get_gathering(&self, gathering_id: &str) -> anyhow::Result<Option<GatheringView>> {
        self.check_online()?;
        Ok(self.gatherings.read().await.get(gathering_id).cloned())
    }

    async fn list_reservations(
        &self,
        gathering_id: &str,
    ) -> anyhow::Result<Vec<SlotReservationsView>> {
        self.check_online()?;
        let Some(gathering) = self.gatherings.read().await.get(gathering_id).cloned() else {
            return Ok(vec![]);
        };
        let guard = self.reservations.read().await;
        let mut groups = Vec::with_capacity(gathering.slots.len());
        for slot in gathering.slots {
            let mut reservations: Vec<ReservationView> = guard
                .values()
                .filter(|view| view.gathering_id == gathering_id && view.slot_id == slot.slot_id)
                .cloned()
                .collect();
            reservations.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.reservation_id.cmp(&b.reservation_id))
            });
            groups.push(SlotReservationsView { slot, reservations });
        }
        Ok(groups)
    }

    async fn find_reservation(
        &self,
        gathering_id: &str,
        reservation_number: u32,
    ) -> anyhow::Result<Option<ReservationView>> {
        self.check_online()?;
        let guard = self.reservations.read().await;
        Ok(guard
            .values()
            .find(|view| {
                view.gathering_id == gathering_id
                    && view.reservation_number == reservation_number
            })
            .cloned())
    }

    async fn list_guests(&self) -> anyhow::Result<Vec<GuestView>> {
        self.check_online()?;
        let guard = self.reservations.read().await;
        let mut by_email: HashMap<&str, GuestView> = HashMap::new();
        let mut freshest: HashMap<&str, i64> = HashMap::new();
        for view in guard.values() {
            let entry = by_email
                .entry(view.email.as_str())
                .or_insert_with(|| GuestView {
                    email: view.email.clone(),
                    guest_name: view.guest_name.clone(),
                    phone: view.phone.clone(),
                    reservation_count: 0,
                    total_participants: 0,
                });
            entry.reservation_count += 1;
            entry.total_participants += view.party_size;
            // Contact fields follow the most recently touched reservation.
            let newest = freshest.entry(view.email.as_str()).or_insert(i64::MIN);
            if view.updated_at >= *newest {
                *newest = view.updated_at;
                entry.guest_name = view.guest_name.clone();
                entry.phone = view.phone.clone();
            }
        }
        let mut guests: Vec<GuestView> = by_email.into_values().collect();
        guests.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(guests)
    }
}

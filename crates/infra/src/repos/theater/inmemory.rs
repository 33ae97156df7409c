use super::ITheaterRepo;
use crate::repos::shared::inmemory_repo::*;
use seatwatch_domain::{Theater, ID};

pub struct InMemoryTheaterRepo {
    theaters: std::sync::Mutex<Vec<Theater>>,
}

impl InMemoryTheaterRepo {
    pub fn new() -> Self {
        Self {
            theaters: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITheaterRepo for InMemoryTheaterRepo {
    async fn insert(&self, theater: &Theater) -> anyhow::Result<()> {
        insert(theater, &self.theaters);
        Ok(())
    }

    async fn find(&self, theater_id: &ID) -> Option<Theater> {
        find(theater_id, &self.theaters)
    }
}

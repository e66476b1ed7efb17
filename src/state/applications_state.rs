// ============================================================================
// APPLICATIONS STATE - Keyed cache of applications (server order preserved)
// ============================================================================

use std::collections::HashMap;

use crate::models::Application;

#[derive(Debug, Default, Clone)]
pub struct ApplicationCache {
    items: Vec<Application>,
    index: HashMap<i64, usize>,
}

impl ApplicationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a fresh server list
    pub fn replace_all(&mut self, applications: Vec<Application>) {
        self.items.clear();
        self.index.clear();
        for application in applications {
            self.upsert(application);
        }
    }

    /// Patch by id, or append when the id is new
    pub fn upsert(&mut self, application: Application) {
        match self.index.get(&application.id) {
            Some(&position) => self.items[position] = application,
            None => {
                self.index.insert(application.id, self.items.len());
                self.items.push(application);
            }
        }
    }

    /// Lookup by id
    pub fn get(&self, id: i64) -> Option<&Application> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Server order
    pub fn iter(&self) -> impl Iterator<Item = &Application> {
        self.items.iter()
    }

}

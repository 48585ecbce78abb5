use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::MealPlan;

/// Template plans keyed by name.
pub type TemplateLibrary = BTreeMap<String, MealPlan>;

/// Cycles through a template library in shuffled order.
///
/// Every template is handed out once per cycle; a new shuffle starts when the
/// cycle is exhausted. The random source is injected so tests can pin the order.
#[derive(Debug)]
pub struct PlanRotator<R = StdRng> {
    order: Vec<String>,
    cursor: usize,
    rng: R,
}

impl PlanRotator<StdRng> {
    /// Rotator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Rotator with a fixed seed, for reproducible rotations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PlanRotator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            order: Vec::new(),
            cursor: 0,
            rng,
        }
    }

    /// Return the next template of the current cycle.
    pub fn next<'a>(&mut self, library: &'a TemplateLibrary) -> Result<&'a MealPlan> {
        if library.is_empty() {
            return Err(PlanError::EmptyLibrary);
        }

        if self.cursor >= self.order.len() || !self.matches(library) {
            self.reshuffle(library);
        }

        let name = &self.order[self.cursor];
        self.cursor += 1;

        library
            .get(name)
            .ok_or_else(|| PlanError::TemplateNotFound {
                name: name.clone(),
                suggestion: None,
            })
    }

    /// Templates still to be handed out in the current cycle.
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// The stored permutation is stale if the library gained or lost names.
    fn matches(&self, library: &TemplateLibrary) -> bool {
        self.order.len() == library.len() && self.order.iter().all(|n| library.contains_key(n))
    }

    fn reshuffle(&mut self, library: &TemplateLibrary) {
        self.order = library.keys().cloned().collect();
        self.order.shuffle(&mut self.rng);
        self.cursor = 0;
        debug!(templates = self.order.len(), "started new rotation cycle");
    }
}

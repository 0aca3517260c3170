//! The command service.
//!
//! Every command that touches the pet runs the same transaction:
//!
//! 1. Read the pet from the store
//! 2. Apply the decay owed since its last update
//! 3. Run the command
//! 4. Stamp the save time and write the pet back once
//!
//! If step 3 fails nothing is written, so the stored pet never reflects a
//! half-applied command. Rejected actions are not failures: the decay from
//! step 2 is still saved. Read-only commands write only when step 2 changed
//! a stat.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use petterm_git::{CommitLog, CommitReconciler};
use petterm_pet::actions::validation::rejection_message;
use petterm_pet::{CarePlanner, ItemCatalog, Pet, Shop, TimeDecay};
use petterm_store::PetStore;
use petterm_types::{
    ActionResult, AutoPurchaseResult, CareAction, CareResult, CommitReport, PetRecord,
    PurchaseResult, Rejection, Species, TimeSyncResult,
};

use crate::config::Settings;
use crate::error::CoreError;

/// Result of a command: the pet as saved, the decay applied on load and
/// the command's own result.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// The pet after the command, as written to the store.
    pub pet: Pet,
    /// Decay applied before the command ran, if it changed any stat.
    pub synced: Option<TimeSyncResult>,
    /// What the command returned.
    pub value: T,
}

/// Result of the care command.
#[derive(Debug, Clone)]
pub struct CareOutcome {
    /// Restocking done first, when automatic care is enabled.
    pub restock: Option<AutoPurchaseResult>,
    /// The one-click care run.
    pub care: CareResult,
}

/// Runs pet commands against a store.
pub struct PetService<S: PetStore> {
    store: S,
    settings: Settings,
    catalog: ItemCatalog,
    decay: TimeDecay,
}

impl<S: PetStore> PetService<S> {
    /// Create a service using the standard item catalog.
    pub fn new(store: S, settings: Settings) -> Self {
        let decay = TimeDecay::new(settings.decay_config());
        Self {
            store,
            settings,
            catalog: ItemCatalog::standard(),
            decay,
        }
    }

    /// Replace the item catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: ItemCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Settings in effect.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The item catalog.
    pub const fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The shop over this service's catalog.
    pub const fn shop(&self) -> Shop<'_> {
        Shop::new(&self.catalog)
    }

    /// A care planner built from the settings.
    pub const fn planner(&self) -> CarePlanner<'_> {
        CarePlanner::new(
            &self.catalog,
            self.settings.auto_care.thresholds,
            self.settings.auto_care.enabled,
        )
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Whether a pet has been adopted.
    pub fn has_pet(&self) -> Result<bool, CoreError> {
        Ok(self.store.has_pet()?)
    }

    /// Whether the user still has to be onboarded.
    pub fn is_first_run(&self) -> Result<bool, CoreError> {
        Ok(self.store.is_first_run()?)
    }

    /// Record that onboarding is done.
    pub fn complete_onboarding(&mut self) -> Result<(), CoreError> {
        Ok(self.store.mark_onboarded()?)
    }

    /// Make the next run a first run again.
    pub fn restart_onboarding(&mut self) -> Result<(), CoreError> {
        Ok(self.store.reset_onboarding()?)
    }

    /// Adopt a new pet. Fails if one already exists.
    pub fn adopt(&mut self, name: &str, species: Species, now: DateTime<Utc>) -> Result<Pet, CoreError> {
        if let Some(existing) = self.store.get_pet()? {
            return Err(CoreError::PetExists { name: existing.name });
        }
        let mut pet = Pet::adopt(name, species, now);
        pet.mark_saved(now);
        self.store.save_pet(pet.record())?;
        Ok(pet)
    }

    /// Delete the pet for good and return what was stored.
    pub fn release(&mut self) -> Result<PetRecord, CoreError> {
        let record = self.store.get_pet()?.ok_or(CoreError::NoPet)?;
        self.store.delete_pet()?;
        info!(name = %record.name, "pet released");
        Ok(record)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Load the pet and bring it up to date.
    pub fn status(&mut self, now: DateTime<Utc>) -> Result<Outcome<()>, CoreError> {
        self.transact(now, Write::IfSynced, |_, _| Ok(()))
    }

    /// Feed, play, clean or heal.
    pub fn perform(&mut self, action: CareAction, now: DateTime<Utc>) -> Result<Outcome<ActionResult>, CoreError> {
        debug!(%action, "perform");
        self.transact(now, Write::Always, |_, pet| Ok(pet.perform(action, now)?))
    }

    /// Put the pet to bed or wake it up.
    pub fn toggle_sleep(&mut self, now: DateTime<Utc>) -> Result<Outcome<ActionResult>, CoreError> {
        self.transact(now, Write::Always, |_, pet| Ok(pet.toggle_sleep(now)?))
    }

    /// Use one item from the inventory. A sleeping pet refuses.
    pub fn use_item(&mut self, item_id: &str, now: DateTime<Utc>) -> Result<Outcome<ActionResult>, CoreError> {
        debug!(item = item_id, "use item");
        self.transact(now, Write::Always, |service, pet| {
            if pet.is_sleeping() {
                return Ok(ActionResult::rejected(
                    Rejection::Sleeping,
                    rejection_message(Rejection::Sleeping, pet.name()),
                ));
            }
            Ok(pet.use_item(&service.catalog, item_id, now)?)
        })
    }

    /// Buy items from the shop.
    pub fn purchase(
        &mut self,
        item_id: &str,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<Outcome<PurchaseResult>, CoreError> {
        debug!(item = item_id, quantity, "purchase");
        self.transact(now, Write::Always, |service, pet| {
            Ok(service.shop().purchase(pet, item_id, quantity, now)?)
        })
    }

    /// One-click care, restocking first when automatic care is enabled.
    pub fn care(&mut self, now: DateTime<Utc>) -> Result<Outcome<CareOutcome>, CoreError> {
        self.transact(now, Write::Always, |service, pet| {
            let planner = service.planner();
            let restock = if service.settings.auto_care.enabled {
                Some(planner.auto_purchase(pet, now)?)
            } else {
                None
            };
            let mut care = planner.one_click_care(pet, now)?;
            if let Some(restock) = &restock {
                care.coins_spent = restock.total_cost;
            }
            Ok(CareOutcome { restock, care })
        })
    }

    /// Reward the pet for new commits in `log`.
    pub fn check_commits<L: CommitLog + ?Sized>(
        &mut self,
        log: &L,
        now: DateTime<Utc>,
    ) -> Result<Outcome<CommitReport>, CoreError> {
        self.transact(now, Write::Always, |service, pet| {
            let reconciler = CommitReconciler::new(service.settings.git.backfill_limit);
            Ok(reconciler.reconcile(pet, log, now)?)
        })
    }

    fn transact<T>(
        &mut self,
        now: DateTime<Utc>,
        write: Write,
        command: impl FnOnce(&Self, &mut Pet) -> Result<T, CoreError>,
    ) -> Result<Outcome<T>, CoreError> {
        let record = self.store.get_pet()?.ok_or(CoreError::NoPet)?;
        let mut pet = Pet::from_record(record);
        let synced = pet.sync_time(&self.decay, now);
        let value = command(self, &mut pet)?;
        if write == Write::Always || synced.is_some() {
            pet.mark_saved(now);
            self.store.save_pet(pet.record())?;
        }
        Ok(Outcome { pet, synced, value })
    }
}

/// When a transaction writes the pet back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Write {
    /// The command may have changed the pet.
    Always,
    /// Read-only command: write only if decay changed a stat.
    IfSynced,
}

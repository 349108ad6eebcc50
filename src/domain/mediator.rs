//! Mediated tub/machine assignment.
//!
//! Tubs of chemicals sit at exactly one machine at a time; a machine hosts a
//! set of tubs. Both sides of that relation live here so they can never
//! drift apart: entities route every reassignment through the mediator
//! instead of mutating either side directly.
//!
//! The mediator is a plain value, not a process-wide singleton. Independent
//! simulations each own one; a mediator shared across threads goes behind a
//! `Mutex`, and because every mutation takes `&mut self` no reader can
//! observe a tub in zero or two machine sets.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::instrument;

use crate::domain::error::{MediatorError, MediatorResult};

/// Registry keeping tub→machine and machine→tubs views consistent.
#[derive(Debug, Default)]
pub struct Mediator {
    /// tub name -> machine currently holding it
    machine_of: HashMap<String, u32>,
    /// machine label -> tubs currently at it
    tubs_at: HashMap<u32, HashSet<String>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Introduce a machine with an empty tub set. Idempotent.
    pub fn register_machine(&mut self, machine: u32) {
        self.tubs_at.entry(machine).or_default();
    }

    pub fn is_registered(&self, machine: u32) -> bool {
        self.tubs_at.contains_key(&machine)
    }

    /// Move `tub` to `machine`, updating both relation sides as one step.
    ///
    /// Removes the tub from its previous machine's set (if any), adds it to
    /// the target's, and records the new owner. Fails without touching any
    /// state when the target machine is unregistered. Moving a tub to the
    /// machine it already sits at is a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn set_machine(&mut self, tub: &str, machine: u32) -> MediatorResult<()> {
        if !self.tubs_at.contains_key(&machine) {
            return Err(MediatorError::UnknownMachine(machine));
        }
        if let Some(&current) = self.machine_of.get(tub) {
            if current == machine {
                return Ok(());
            }
            if let Some(tubs) = self.tubs_at.get_mut(&current) {
                tubs.remove(tub);
            }
        }
        self.tubs_at
            .get_mut(&machine)
            .expect("target machine checked above")
            .insert(tub.to_string());
        self.machine_of.insert(tub.to_string(), machine);
        Ok(())
    }

    /// Machine currently holding `tub`, if the tub has ever been placed.
    pub fn machine_of(&self, tub: &str) -> Option<u32> {
        self.machine_of.get(tub).copied()
    }

    /// Snapshot of the tubs at `machine`.
    ///
    /// Returns an owned set; mutating it cannot corrupt the registry. An
    /// unregistered machine yields the empty set.
    pub fn tubs_at(&self, machine: u32) -> HashSet<String> {
        self.tubs_at.get(&machine).cloned().unwrap_or_default()
    }

    /// Deterministic snapshot of every tub assignment, for external
    /// persistence layers.
    pub fn assignments(&self) -> BTreeMap<String, u32> {
        self.machine_of
            .iter()
            .map(|(tub, &machine)| (tub.clone(), machine))
            .collect()
    }

    /// Registered machine labels, sorted.
    pub fn machines(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.tubs_at.keys().copied().collect();
        labels.sort_unstable();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_machine_leaves_state_unchanged() {
        let mut mediator = Mediator::new();
        mediator.register_machine(2402);
        mediator.set_machine("t20305", 2402).unwrap();

        let result = mediator.set_machine("t20305", 9999);

        assert_eq!(result, Err(MediatorError::UnknownMachine(9999)));
        assert_eq!(mediator.machine_of("t20305"), Some(2402));
        assert!(mediator.tubs_at(2402).contains("t20305"));
    }

    #[test]
    fn reassigning_to_current_machine_is_a_noop() {
        let mut mediator = Mediator::new();
        mediator.register_machine(2101);
        mediator.set_machine("t27001", 2101).unwrap();
        mediator.set_machine("t27001", 2101).unwrap();

        assert_eq!(mediator.tubs_at(2101).len(), 1);
        assert_eq!(mediator.machine_of("t27001"), Some(2101));
    }

    #[test]
    fn snapshot_mutation_does_not_leak_back() {
        let mut mediator = Mediator::new();
        mediator.register_machine(2301);
        mediator.set_machine("t25377", 2301).unwrap();

        let mut snapshot = mediator.tubs_at(2301);
        snapshot.clear();

        assert_eq!(mediator.tubs_at(2301).len(), 1);
    }
}

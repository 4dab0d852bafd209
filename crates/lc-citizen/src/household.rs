//! `CitizenUnit` — the 5-slot household.
//!
//! Slot convention (inherited from the host's unit layout): slots 0–1 hold
//! adults/parents, slots 2–4 hold children.  A unit whose adult slots are both
//! empty while at least one child slot is occupied is **orphaned**; orphaned
//! units end up in simulation purgatory on the host side, so the lifecycle
//! engine releases all children when the last adult dies.

use lc_core::CitizenId;

/// Total member slots per unit.
pub const UNIT_CAPACITY: usize = 5;
/// Slots 0–1: adults/parents.
pub const ADULT_SLOTS: usize = 2;
/// Slots 2–4: children.
pub const CHILD_SLOTS: usize = UNIT_CAPACITY - ADULT_SLOTS;

/// A household of up to 5 citizens sharing a home.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitizenUnit {
    members: [Option<CitizenId>; UNIT_CAPACITY],
}

impl CitizenUnit {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All occupied slots in slot order.
    pub fn members(&self) -> impl Iterator<Item = CitizenId> + '_ {
        self.members.iter().filter_map(|m| *m)
    }

    /// Occupied adult slots (0–1) in slot order.
    pub fn adults(&self) -> impl Iterator<Item = CitizenId> + '_ {
        self.members[..ADULT_SLOTS].iter().filter_map(|m| *m)
    }

    /// Occupied child slots (2–4) in slot order.
    pub fn children(&self) -> impl Iterator<Item = CitizenId> + '_ {
        self.members[ADULT_SLOTS..].iter().filter_map(|m| *m)
    }

    pub fn member_count(&self) -> usize {
        self.members().count()
    }

    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    pub fn contains(&self, citizen: CitizenId) -> bool {
        self.members.contains(&Some(citizen))
    }

    /// `true` if `citizen` occupies one of the adult slots.
    pub fn is_adult_member(&self, citizen: CitizenId) -> bool {
        self.members[..ADULT_SLOTS].contains(&Some(citizen))
    }

    /// `true` if `citizen` is an adult member and the other adult slot is
    /// empty — i.e. removing them would leave the unit with no adults.
    pub fn lone_adult(&self, citizen: CitizenId) -> bool {
        self.is_adult_member(citizen)
            && self.members[..ADULT_SLOTS]
                .iter()
                .filter(|m| m.is_some())
                .count()
                == 1
    }

    /// Place `citizen` in the first free adult slot.  Returns the slot index,
    /// or `None` if both adult slots are taken.
    pub fn add_adult(&mut self, citizen: CitizenId) -> Option<usize> {
        self.place(citizen, 0, ADULT_SLOTS)
    }

    /// Place `citizen` in the first free child slot.  Returns the slot index,
    /// or `None` if all child slots are taken.
    pub fn add_child(&mut self, citizen: CitizenId) -> Option<usize> {
        self.place(citizen, ADULT_SLOTS, UNIT_CAPACITY)
    }

    fn place(&mut self, citizen: CitizenId, from: usize, to: usize) -> Option<usize> {
        for slot in from..to {
            if self.members[slot].is_none() {
                self.members[slot] = Some(citizen);
                return Some(slot);
            }
        }
        None
    }

    /// Clear `citizen`'s slot.  Returns `true` if the citizen was a member.
    pub fn remove(&mut self, citizen: CitizenId) -> bool {
        for slot in self.members.iter_mut() {
            if *slot == Some(citizen) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// Drain every occupied child slot in fixed order (2 → 4).
    ///
    /// Each occupied slot is emptied exactly once; already-empty slots are
    /// not touched.  Used by orphan cleanup after the last adult dies.
    pub fn take_children(&mut self) -> Vec<CitizenId> {
        let mut taken = Vec::new();
        for slot in self.members[ADULT_SLOTS..].iter_mut() {
            if let Some(child) = slot.take() {
                taken.push(child);
            }
        }
        taken
    }
}

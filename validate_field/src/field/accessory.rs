// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, Weak};

use smallvec::SmallVec;
use strum_macros::{AsRefStr, EnumIter};

use crate::DEBUG_FIELD_MOD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum AccessorySlot {
    Left,
    Right,
}

/// One element of the field's left to right arrangement. See
/// [`AccessorySlotManager::arranged_elements`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum ArrangedElement {
    LeftAccessory,
    /// The header, text and placeholder stack.
    Fields,
    AssistiveRegion,
    RightAccessory,
}

pub type ArrangedElements = SmallVec<[ArrangedElement; 4]>;

/// Attachment points for caller owned accessory views. Only a [`Weak`] is kept, so the
/// field never extends the lifetime of a view. Detaching (or replacing) releases the
/// reference and leaves the view itself alone, so the caller can attach it somewhere
/// else.
#[derive(Debug)]
pub struct AccessorySlotManager<V> {
    maybe_left: Option<Weak<V>>,
    maybe_right: Option<Weak<V>>,
}

impl<V> Default for AccessorySlotManager<V> {
    fn default() -> Self {
        Self {
            maybe_left: None,
            maybe_right: None,
        }
    }
}

impl<V> AccessorySlotManager<V> {
    #[must_use]
    pub fn new(maybe_left: Option<&Arc<V>>, maybe_right: Option<&Arc<V>>) -> Self {
        let mut it = Self::default();
        if let Some(view) = maybe_left {
            it.attach(AccessorySlot::Left, view);
        }
        if let Some(view) = maybe_right {
            it.attach(AccessorySlot::Right, view);
        }
        it
    }

    fn slot_mut(&mut self, slot: AccessorySlot) -> &mut Option<Weak<V>> {
        match slot {
            AccessorySlot::Left => &mut self.maybe_left,
            AccessorySlot::Right => &mut self.maybe_right,
        }
    }

    /// At most one view per slot. An existing view is detached first.
    pub fn attach(&mut self, slot: AccessorySlot, view: &Arc<V>) {
        let maybe_old = self.detach(slot);

        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📎 AccessorySlotManager::attach",
                slot = %slot.as_ref(),
                replaced = %maybe_old.is_some()
            );
        });

        *self.slot_mut(slot) = Some(Arc::downgrade(view));
    }

    /// Returns the detached view if it is still alive.
    pub fn detach(&mut self, slot: AccessorySlot) -> Option<Arc<V>> {
        let maybe_weak = self.slot_mut(slot).take()?;

        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📎 AccessorySlotManager::detach",
                slot = %slot.as_ref()
            );
        });

        maybe_weak.upgrade()
    }

    /// Attach `Some`, detach `None`.
    pub fn set(&mut self, slot: AccessorySlot, maybe_view: Option<&Arc<V>>) {
        match maybe_view {
            Some(view) => self.attach(slot, view),
            None => {
                self.detach(slot);
            }
        }
    }

    /// [`None`] if nothing is attached, or the caller has dropped the view.
    #[must_use]
    pub fn get(&self, slot: AccessorySlot) -> Option<Arc<V>> {
        let maybe_weak = match slot {
            AccessorySlot::Left => self.maybe_left.as_ref(),
            AccessorySlot::Right => self.maybe_right.as_ref(),
        };
        maybe_weak.and_then(Weak::upgrade)
    }

    #[must_use]
    pub fn is_attached(&self, slot: AccessorySlot) -> bool { self.get(slot).is_some() }

    /// Left to right order of the field's elements. An assistive region placed inside
    /// the field goes last, unless there is a right accessory, in which case it goes
    /// right before it.
    #[must_use]
    pub fn arranged_elements(&self, has_inside_assistive_region: bool) -> ArrangedElements {
        let mut acc = ArrangedElements::new();

        if self.is_attached(AccessorySlot::Left) {
            acc.push(ArrangedElement::LeftAccessory);
        }
        acc.push(ArrangedElement::Fields);
        if has_inside_assistive_region {
            acc.push(ArrangedElement::AssistiveRegion);
        }
        if self.is_attached(AccessorySlot::Right) {
            acc.push(ArrangedElement::RightAccessory);
        }

        acc
    }
}

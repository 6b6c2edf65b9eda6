//! Slot arena for grid visuals.
//!
//! A slot is one visual owned and positioned by the grid. Slots live in a
//! [`SlotArena`]: a `SlotMap` for stable [`SlotId`] handles plus an ordered id
//! list that gives each slot its child index. Later slots paint above earlier
//! ones, which is how the overflow overlay ends up stacked on the last cell.
//!
//! The arena is reset wholesale on every provider attach. Because `SlotMap`
//! bumps the version of a key when it is removed, every [`SlotId`] handed out
//! before a reset resolves to nothing afterwards.

use slotmap::{new_key_type, SlotMap};

use crate::geometry::{Rect, Size};

new_key_type! {
    /// Stable handle to a slot in a [`SlotArena`].
    ///
    /// A `SlotId` becomes stale when the arena is cleared on re-attach.
    pub struct SlotId;
}

impl SlotId {
    /// Convert the id to a raw u64 value, for logging or host-side maps.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// The role a slot plays in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// A regular grid cell bound to one item position.
    Item,
    /// The sole, unconstrained slot used in single-adapted mode.
    Single,
    /// The overflow indicator stacked on the last regular cell.
    Overlay,
}

impl SlotKind {
    /// Short lowercase name used in logs and debug dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Single => "single",
            Self::Overlay => "overlay",
        }
    }
}

/// A visual owned by the grid, with its most recent geometry.
#[derive(Debug)]
pub struct Slot<V> {
    kind: SlotKind,
    visual: V,
    measured: Size,
    rect: Option<Rect>,
}

impl<V> Slot<V> {
    fn new(kind: SlotKind, visual: V) -> Self {
        Self {
            kind,
            visual,
            measured: Size::ZERO,
            rect: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    #[inline]
    pub fn visual(&self) -> &V {
        &self.visual
    }

    #[inline]
    pub fn visual_mut(&mut self) -> &mut V {
        &mut self.visual
    }

    /// Size recorded by the last measure pass.
    #[inline]
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn set_measured_size(&mut self, size: Size) {
        self.measured = size;
    }

    /// Rectangle assigned by the last layout pass, or `None` if never placed.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}

/// Ordered arena of slots.
#[derive(Debug)]
pub struct SlotArena<V> {
    slots: SlotMap<SlotId, Slot<V>>,
    order: Vec<SlotId>,
}

impl<V> SlotArena<V> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append a slot; it gets the next child index.
    pub fn push(&mut self, kind: SlotKind, visual: V) -> SlotId {
        let id = self.slots.insert(Slot::new(kind, visual));
        self.order.push(id);
        id
    }

    /// Remove every slot, invalidating all ids. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.slots.clear();
        self.order.clear();
        removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&Slot<V>> {
        self.slots.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Slot<V>> {
        self.slots.get_mut(id)
    }

    /// Id of the slot at a child index.
    #[inline]
    pub fn id_at(&self, index: usize) -> Option<SlotId> {
        self.order.get(index).copied()
    }

    /// Slot at a child index.
    pub fn at(&self, index: usize) -> Option<&Slot<V>> {
        self.id_at(index).and_then(|id| self.slots.get(id))
    }

    /// Mutable slot at a child index.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Slot<V>> {
        let id = self.id_at(index)?;
        self.slots.get_mut(id)
    }

    /// Child index of a slot.
    pub fn index_of(&self, id: SlotId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Ids in child order.
    pub fn ids(&self) -> &[SlotId] {
        &self.order
    }

    /// Slots in child order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot<V>)> + '_ {
        self.order.iter().map(move |&id| (id, &self.slots[id]))
    }

    /// Number of slots of a given kind.
    pub fn count_of(&self, kind: SlotKind) -> usize {
        self.slots.values().filter(|slot| slot.kind == kind).count()
    }
}

impl<V> Default for SlotArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Dirty state for the two mesh inputs.

use std::fmt;

/// One of the node's two mesh inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSlot {
    /// The undeformed rest pose.
    Orig,
    /// The deformed pose.
    Deformed,
}

impl InputSlot {
    /// Both slots, in evaluation order.
    pub const ALL: [InputSlot; 2] = [InputSlot::Orig, InputSlot::Deformed];

    /// Returns the input's attribute name.
    pub fn name(self) -> &'static str {
        match self {
            InputSlot::Orig => "orig",
            InputSlot::Deformed => "deform",
        }
    }
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-slot staleness of the cached edge-length arrays.
///
/// Both slots start dirty so the first evaluation computes both arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyFlags {
    orig: bool,
    deformed: bool,
}

impl Default for DirtyFlags {
    fn default() -> Self {
        Self {
            orig: true,
            deformed: true,
        }
    }
}

impl DirtyFlags {
    /// Creates flags with both slots dirty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `slot` as stale.
    pub fn mark_dirty(&mut self, slot: InputSlot) {
        *self.flag_mut(slot) = true;
    }

    /// Returns whether `slot` is stale.
    pub fn is_dirty(&self, slot: InputSlot) -> bool {
        match slot {
            InputSlot::Orig => self.orig,
            InputSlot::Deformed => self.deformed,
        }
    }

    /// Marks `slot` as up to date.
    pub fn clear(&mut self, slot: InputSlot) {
        *self.flag_mut(slot) = false;
    }

    /// Returns whether either slot is stale.
    pub fn any_dirty(&self) -> bool {
        self.orig || self.deformed
    }

    fn flag_mut(&mut self, slot: InputSlot) -> &mut bool {
        match slot {
            InputSlot::Orig => &mut self.orig,
            InputSlot::Deformed => &mut self.deformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dirty() {
        let flags = DirtyFlags::new();
        assert!(flags.is_dirty(InputSlot::Orig));
        assert!(flags.is_dirty(InputSlot::Deformed));
        assert!(flags.any_dirty());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut flags = DirtyFlags::new();

        flags.clear(InputSlot::Orig);
        assert!(!flags.is_dirty(InputSlot::Orig));
        assert!(flags.is_dirty(InputSlot::Deformed));

        flags.clear(InputSlot::Deformed);
        assert!(!flags.any_dirty());

        flags.mark_dirty(InputSlot::Deformed);
        assert!(!flags.is_dirty(InputSlot::Orig));
        assert!(flags.is_dirty(InputSlot::Deformed));
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(InputSlot::Orig.to_string(), "orig");
        assert_eq!(InputSlot::Deformed.to_string(), "deform");
    }
}

//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::instance::MemberInstance;
use crate::instance::slots::Slots;

impl<'ctx> Slots<'ctx> {
    /// Slot that the resolution protocol has already populated.
    pub(crate) fn ensure(&self, index: usize) -> &MemberInstance<'ctx> {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "Slots: member {index} of {} not resolved \
                 (resolution must proceed in index order)",
                self.len()
            )
        })
    }

    pub(crate) fn ensure_vacant(&self, index: usize) {
        assert!(
            index < self.len(),
            "Slots: member {index} out of {} slots",
            self.len()
        );
        assert!(
            self.get(index).is_none(),
            "Slots: member {index} resolved twice (resolution is at most once per member)"
        );
    }
}

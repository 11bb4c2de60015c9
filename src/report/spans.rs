//! Per-class address spans
//!
//! Groups the report (and the scratch block) by [`StorageClass`] and records the
//! lowest and highest address seen for each class. The viewer lists these, and
//! the integration tests use them to check that statics and call-frame slots
//! occupy separate regions.

use super::{Address, Report, StorageClass};
use rustc_hash::FxHashMap;

/// Address range covered by one storage class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpan {
    pub low: Address,
    pub high: Address,
    pub count: usize,
}

impl AddressSpan {
    fn single(address: Address) -> Self {
        AddressSpan {
            low: address,
            high: address,
            count: 1,
        }
    }

    fn include(&mut self, address: Address) {
        self.low = self.low.min(address);
        self.high = self.high.max(address);
        self.count += 1;
    }

    /// Distance between the lowest and highest address
    pub fn width(&self) -> usize {
        self.high - self.low
    }

    /// Smallest distance between any address of `self` and any of `other`,
    /// or `None` when the spans overlap
    pub fn gap_to(&self, other: &AddressSpan) -> Option<usize> {
        if self.high < other.low {
            Some(other.low - self.high)
        } else if other.high < self.low {
            Some(self.low - other.high)
        } else {
            None
        }
    }
}

/// Build the span of every storage class present in `report`
///
/// The scratch block counts towards [`StorageClass::Dynamic`].
pub fn class_spans(report: &Report) -> FxHashMap<StorageClass, AddressSpan> {
    let mut spans: FxHashMap<StorageClass, AddressSpan> = FxHashMap::default();

    let addresses = report
        .entries()
        .iter()
        .map(|entry| (entry.storage_class(), entry.address))
        .chain(std::iter::once((StorageClass::Dynamic, report.block().address)));

    for (class, address) in addresses {
        spans
            .entry(class)
            .and_modify(|span| span.include(address))
            .or_insert_with(|| AddressSpan::single(address));
    }

    spans
}

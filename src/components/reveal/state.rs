//! Fire-once reveal bookkeeping.
//!
//! Each observed element owns one slot. A slot flips to [`RevealSlot::Revealed`]
//! the first time its element is reported visible and never flips back, no
//! matter how often the element scrolls in and out afterwards.

/// Reveal progress of a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealSlot {
	#[default]
	Pending,
	Revealed,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
	slots: Vec<RevealSlot>,
}

impl RevealTracker {
	pub fn new(count: usize) -> Self {
		Self {
			slots: vec![RevealSlot::Pending; count],
		}
	}

	/// Records a visibility notification for element `index`.
	///
	/// Returns `true` only for the notification that reveals the element;
	/// out-of-range indices are ignored.
	pub fn observe(&mut self, index: usize, visible: bool) -> bool {
		let Some(slot) = self.slots.get_mut(index) else {
			return false;
		};
		if !visible || *slot == RevealSlot::Revealed {
			return false;
		}
		*slot = RevealSlot::Revealed;
		true
	}
}

#[cfg(test)]
impl RevealTracker {
	fn slot(&self, index: usize) -> Option<RevealSlot> {
		self.slots.get(index).copied()
	}

	fn pending(&self) -> usize {
		self.slots
			.iter()
			.filter(|s| **s == RevealSlot::Pending)
			.count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_exactly_once_per_element() {
		let mut tracker = RevealTracker::new(2);
		let fired: Vec<bool> = [true, false, true, true, false, true]
			.into_iter()
			.map(|visible| tracker.observe(0, visible))
			.collect();
		assert_eq!(fired, [true, false, false, false, false, false]);
		assert_eq!(tracker.slot(0), Some(RevealSlot::Revealed));
		assert_eq!(tracker.slot(1), Some(RevealSlot::Pending));
	}

	#[test]
	fn hidden_notifications_keep_waiting() {
		let mut tracker = RevealTracker::new(1);
		assert!(!tracker.observe(0, false));
		assert!(!tracker.observe(0, false));
		assert_eq!(tracker.pending(), 1);
		assert!(tracker.observe(0, true));
		assert_eq!(tracker.pending(), 0);
	}

	#[test]
	fn elements_are_independent() {
		let mut tracker = RevealTracker::new(3);
		assert!(tracker.observe(2, true));
		assert!(tracker.observe(0, true));
		assert!(!tracker.observe(2, true));
		assert_eq!(tracker.pending(), 1);
	}

	#[test]
	fn empty_and_unknown_targets_are_ignored() {
		let mut tracker = RevealTracker::new(0);
		assert_eq!(tracker.pending(), 0);
		assert!(!tracker.observe(0, true));
		assert_eq!(tracker.slot(0), None);
	}
}

//! Deprecation signal channel for the legacy mutation shims.
//!
//! Records are logically immutable; every legacy mutation entry point emits
//! one warning on the `"deprecation"` log target before performing the
//! write. The warning is informational and never interrupts the mutation.

use log::warn;

pub(crate) fn warn_immutable(method: &str) {
	warn!(
		target: "deprecation",
		"this object is immutable; '{method}' is retained only for compatibility and will be removed"
	);
	#[cfg(test)]
	capture::record();
}

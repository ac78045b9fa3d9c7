//! Process-wide toggle flags for the sandbox
//!
//! The sandbox models a single shared security posture, not per-session
//! state: flipping a flag is visible to every subsequent caller. The three
//! flags are packed into one `AtomicU8` so that a toggle is a single
//! read-modify-write and a snapshot is a single load, giving every
//! authorization decision one consistent view of all flags even while
//! another caller is toggling.

use std::sync::atomic::{AtomicU8, Ordering};

const PROTECTION_BIT: u8 = 1 << 0;
const ADMIN_BIT: u8 = 1 << 1;
const SANITIZATION_BIT: u8 = 1 << 2;

/// The three independent sandbox flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Whether role-based authorization rules are enforced at all
    Protection,
    /// Whether an admin-privileged session is active process-wide
    Admin,
    /// Whether submitted content is escaped before storage
    Sanitization,
}

impl Flag {
    fn mask(self) -> u8 {
        match self {
            Flag::Protection => PROTECTION_BIT,
            Flag::Admin => ADMIN_BIT,
            Flag::Sanitization => SANITIZATION_BIT,
        }
    }
}

/// One consistent read of all three flags
///
/// Decisions are computed from a snapshot captured at operation entry; a
/// flag flipped afterwards is not observed mid-decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSnapshot {
    /// Protection mode at snapshot time
    pub protection_enabled: bool,
    /// Admin mode at snapshot time
    pub admin_active: bool,
    /// Sanitization mode at snapshot time
    pub sanitization_enabled: bool,
}

/// Shared toggle state for the whole process
///
/// Created once at startup and passed into the transport layer explicitly
/// so tests can run against isolated instances. Defaults: protection off,
/// admin off, sanitization on. Never persisted; a restart resets it.
#[derive(Debug)]
pub struct ToggleState {
    bits: AtomicU8,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleState {
    /// Create a toggle state with the default posture
    pub fn new() -> Self {
        Self {
            bits: AtomicU8::new(SANITIZATION_BIT),
        }
    }

    /// Flip one flag and return its new value
    ///
    /// Pure negation, always succeeds. The xor is a single atomic RMW so
    /// concurrent toggles cannot interleave.
    pub fn toggle(&self, flag: Flag) -> bool {
        let previous = self.bits.fetch_xor(flag.mask(), Ordering::SeqCst);
        previous & flag.mask() == 0
    }

    /// Read one flag without side effects
    pub fn read(&self, flag: Flag) -> bool {
        self.bits.load(Ordering::SeqCst) & flag.mask() != 0
    }

    /// Capture all three flags in one atomic load
    pub fn snapshot(&self) -> FlagSnapshot {
        let bits = self.bits.load(Ordering::SeqCst);
        FlagSnapshot {
            protection_enabled: bits & PROTECTION_BIT != 0,
            admin_active: bits & ADMIN_BIT != 0,
            sanitization_enabled: bits & SANITIZATION_BIT != 0,
        }
    }
}

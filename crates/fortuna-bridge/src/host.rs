use crate::Result;
use fortuna_core::{InitData, UserPayload};

/// Receives the outcome of phone normalization.
pub trait PhoneHost {
    fn phone_result(&self, value: &str);
}

/// Receives the reshaped identity payload.
pub trait IdentityHost {
    fn user_data(&self, payload: &UserPayload);
}

/// The wheel widget's callbacks: the sector slot, the spin trigger, and the
/// readiness flag the spin button is gated on.
pub trait WheelHost {
    fn set_sector(&self, sector: usize);
    fn spin_to(&self, sector: usize);
    fn set_spin_ready(&self, ready: bool);
}

/// Seam for the in-app browser identity SDK. Implementations own the load
/// and hand back whatever payload the SDK exposed, unvalidated.
pub trait IdentitySource {
    fn source_name(&self) -> &'static str;
    fn init_data(&self) -> Result<InitData>;
}

use crate::host::{IdentityHost, IdentitySource};
use crate::Result;
use fortuna_core::{CoreError, UserPayload};
use tracing::{debug, warn};

/// Reads identity data from the SDK seam and forwards the reshaped payload
/// to the host callback. An incomplete identity (no user, or a user without
/// an id) is logged and swallowed: the callback is not invoked and `Ok(false)`
/// is returned, so the host only ever observes absence. `Err` is reserved
/// for SDK transport failures.
pub fn forward<H, S>(host: &H, source: &S) -> Result<bool>
where
    H: IdentityHost,
    S: IdentitySource,
{
    let data = source.init_data()?;
    match UserPayload::from_init_data(&data) {
        Ok(payload) => {
            debug!(
                source = source.source_name(),
                user_id = payload.output1,
                "forwarding identity"
            );
            host.user_data(&payload);
            Ok(true)
        }
        Err(err @ (CoreError::MissingUser | CoreError::MissingUserId)) => {
            warn!(
                source = source.source_name(),
                error = %err,
                "identity incomplete, nothing forwarded"
            );
            Ok(false)
        }
        Err(other) => Err(other.into()),
    }
}

use crate::host::WheelHost;
use fortuna_core::WheelLayout;
use rand::Rng;
use tracing::debug;

/// Draws a sector, records it in the host's sector slot, then fires the
/// spin trigger. Returns the drawn sector.
pub fn run<H, R>(host: &H, layout: &WheelLayout, rng: &mut R) -> usize
where
    H: WheelHost,
    R: Rng,
{
    let sector = layout.draw(rng);
    debug!(sector, "spinning wheel");
    host.set_sector(sector);
    host.spin_to(sector);
    sector
}

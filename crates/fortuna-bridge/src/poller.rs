use crate::error::{BridgeError, Result};
use crate::host::WheelHost;
use fortuna_config::PollerConfig;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&PollerConfig> for PollSettings {
    fn from(config: &PollerConfig) -> Self {
        Self {
            interval: config.interval(),
            timeout: config.timeout(),
        }
    }
}

/// Polls `probe` on a fixed interval until it reports the host bindings are
/// in place, then flips the host's readiness flag once. The first check runs
/// immediately. Gives up with `ReadyTimeout` once `timeout` has elapsed.
/// Sending `true` on the cancel channel (or dropping its sender) aborts the
/// wait with `Cancelled`.
pub async fn await_ready<H, P>(
    host: &H,
    mut probe: P,
    settings: PollSettings,
    mut cancel: watch::Receiver<bool>,
) -> Result<()>
where
    H: WheelHost,
    P: FnMut() -> bool,
{
    let started = tokio::time::Instant::now();
    let deadline = started + settings.timeout;
    let mut tick = tokio::time::interval(settings.interval);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                if probe() {
                    debug!(waited = ?started.elapsed(), "host bindings ready");
                    host.set_spin_ready(true);
                    return Ok(());
                }
                if tokio::time::Instant::now() >= deadline {
                    warn!(timeout = ?settings.timeout, "host bindings never became ready");
                    return Err(BridgeError::ReadyTimeout {
                        waited: settings.timeout,
                    });
                }
            }
            changed = cancel.changed() => {
                if changed.is_err() || *cancel.borrow() {
                    debug!("readiness wait cancelled");
                    return Err(BridgeError::Cancelled);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{await_ready, PollSettings};
    use crate::host::WheelHost;
    use crate::BridgeError;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;
    use tokio::sync::watch;

    #[derive(Debug, Default)]
    struct RecordingHost {
        ready: RefCell<Vec<bool>>,
    }

    impl WheelHost for RecordingHost {
        fn set_sector(&self, _sector: usize) {}

        fn spin_to(&self, _sector: usize) {}

        fn set_spin_ready(&self, ready: bool) {
            self.ready.borrow_mut().push(ready);
        }
    }

    fn settings() -> PollSettings {
        PollSettings {
            interval: Duration::from_millis(100),
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn signals_ready_once_when_the_probe_succeeds() {
        let host = RecordingHost::default();
        let checks = Cell::new(0u32);
        let (_tx, rx) = watch::channel(false);

        let result = await_ready(
            &host,
            || {
                checks.set(checks.get() + 1);
                checks.get() >= 3
            },
            settings(),
            rx,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(host.ready.borrow().as_slice(), [true]);
        assert_eq!(checks.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn configured_settings_drive_the_wait() {
        let host = RecordingHost::default();
        let (_tx, rx) = watch::channel(false);

        let settings = PollSettings::from(&fortuna_config::PollerConfig::default());
        assert_eq!(settings.interval, Duration::from_millis(100));
        assert_eq!(settings.timeout, Duration::from_secs(10));

        let result = await_ready(&host, || true, settings, rx).await;
        assert!(result.is_ok());
        assert_eq!(host.ready.borrow().as_slice(), [true]);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_the_probe_never_succeeds() {
        let host = RecordingHost::default();
        let (_tx, rx) = watch::channel(false);

        let result = await_ready(&host, || false, settings(), rx).await;

        assert!(matches!(result, Err(BridgeError::ReadyTimeout { .. })));
        assert!(host.ready.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_aborts_the_wait() {
        let host = RecordingHost::default();
        let (tx, rx) = watch::channel(false);

        let wait = await_ready(&host, || false, settings(), rx);
        tokio::pin!(wait);

        tokio::select! {
            _ = &mut wait => panic!("wait finished before cancellation"),
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
        tx.send(true).expect("send cancel");

        assert!(matches!(wait.await, Err(BridgeError::Cancelled)));
        assert!(host.ready.borrow().is_empty());
    }
}

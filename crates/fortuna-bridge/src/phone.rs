use crate::host::PhoneHost;
use fortuna_core::normalize_phone;

/// Sentinel the host receives for every unrecognized input shape. The host
/// platform keys its data flow on this literal, so it is delivered as-is
/// rather than as an error.
pub const PHONE_ERROR: &str = "error";

/// Normalizes raw input and delivers the outcome to the host callback,
/// which is invoked exactly once whether or not the input was recognized.
pub fn deliver<H: PhoneHost>(host: &H, raw: &str) -> String {
    let result = normalize_phone(raw).unwrap_or_else(|| PHONE_ERROR.to_string());
    host.phone_result(&result);
    result
}

#[cfg(test)]
mod tests {
    use super::{deliver, PHONE_ERROR};
    use crate::host::PhoneHost;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHost {
        delivered: RefCell<Vec<String>>,
    }

    impl PhoneHost for RecordingHost {
        fn phone_result(&self, value: &str) {
            self.delivered.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn deliver_forwards_the_normalized_number() {
        let host = RecordingHost::default();
        let result = deliver(&host, "+7 (999) 123-45-67");
        assert_eq!(result, "79991234567");
        assert_eq!(host.delivered.borrow().as_slice(), ["79991234567"]);
    }

    #[test]
    fn deliver_forwards_the_sentinel_for_bad_input() {
        let host = RecordingHost::default();
        let result = deliver(&host, "12345");
        assert_eq!(result, PHONE_ERROR);
        assert_eq!(host.delivered.borrow().as_slice(), [PHONE_ERROR]);
    }
}

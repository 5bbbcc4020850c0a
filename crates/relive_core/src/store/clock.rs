//! Time source and id generation for new records.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

// v4 UUIDs carry fixed variant bits at positions 62..=63.
const RANDOM_FRAGMENT_MASK: u64 = (1 << 62) - 1;

/// Generates a record id: base-36 epoch milliseconds followed by a base-36
/// random fragment.
///
/// Unique enough for one user on one device. There is no collision check.
pub fn generate_review_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let random = (Uuid::new_v4().as_u128() as u64) & RANDOM_FRAGMENT_MASK;
    let mut id = to_base36(millis);
    id.push_str(&to_base36(random));
    id
}

/// Returns `now` when it is after `previous`, otherwise `previous` plus one
/// millisecond, so successive updates always move forward.
pub fn next_update_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

//! Event identifier generation

use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build a `"{unix_millis}-{random base36 suffix}"` identifier.
///
/// Non-cryptographic and collision-tolerant: uniqueness rests on the
/// timestamp plus a 9-character random suffix with no collision check, which
/// is negligible at notification rates. Consumers treat ids as opaque.
pub fn event_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let mut id = format!("{}-", now.timestamp_millis());
    for _ in 0..SUFFIX_LEN {
        let idx = rng.gen_range(0..BASE36.len());
        id.push(BASE36[idx] as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn id_has_millis_prefix_and_base36_suffix() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let id = event_id(now, &mut rng);

        let (prefix, suffix) = id.split_once('-').expect("separator");
        assert_eq!(prefix, now.timestamp_millis().to_string());
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn ids_differ_across_calls() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        assert_ne!(event_id(now, &mut rng), event_id(now, &mut rng));
    }
}

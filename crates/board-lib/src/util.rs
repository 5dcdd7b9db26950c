//! ID generation utilities.

use sha2::{Digest, Sha256};

/// Generate a unique item ID with the given prefix (`sp`, `us`, `t`).
///
/// Uses SHA256 hashing with base36 encoding and a nonce to probe past
/// collisions. The `exists` closure checks candidate ids against the store.
pub fn generate_id<F>(prefix: &str, title: &str, item_count: usize, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = optimal_hash_length(item_count);

    loop {
        for nonce in 0..10_u32 {
            let seed = format!("{title}|{item_count}|{nonce}");
            let hash_str = compute_id_hash(&seed, length);
            let id = format!("{prefix}-{hash_str}");
            if !exists(&id) {
                return id;
            }
        }

        if length < 8 {
            length += 1;
        } else {
            // Pathological collision run: fall back to a long hash with an
            // unbounded nonce.
            let mut nonce = 0u32;
            loop {
                let seed = format!("{title}|{item_count}|long|{nonce}");
                let hash_str = compute_id_hash(&seed, 12);
                let id = format!("{prefix}-{hash_str}");
                if !exists(&id) {
                    return id;
                }
                nonce += 1;
                if nonce > 1000 {
                    return format!("{prefix}-{hash_str}{nonce}");
                }
            }
        }
    }
}

/// Shortest hash length keeping the birthday-collision probability low for
/// the current item count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
fn optimal_hash_length(item_count: usize) -> usize {
    let n = item_count as f64;
    let max_prob = 0.25;

    for (len, exp) in [(3_usize, 3_i32), (4, 4), (5, 5), (6, 6), (7, 7), (8, 8)] {
        let space = 36_f64.powi(exp);
        let prob = 1.0 - (-n * n / (2.0 * space)).exp();
        if prob < max_prob {
            return len;
        }
    }
    8
}

fn compute_id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    let mut num = 0u64;
    for &byte in result.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_has_prefix_and_short_hash() {
        let id = generate_id("us", "Fix login flow", 0, |_| false);
        assert!(id.starts_with("us-"));
        assert_eq!(id.len(), "us-".len() + 3);
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_id_deterministic_for_same_seed() {
        let a = generate_id("sp", "Sprint 1", 4, |_| false);
        let b = generate_id("sp", "Sprint 1", 4, |_| false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_id_probes_past_collision() {
        let first = generate_id("t", "Write docs", 0, |_| false);
        let second = generate_id("t", "Write docs", 0, |id| id == first);
        assert_ne!(first, second);
        assert!(second.starts_with("t-"));
    }

    #[test]
    fn test_hash_length_grows_with_count() {
        assert_eq!(optimal_hash_length(0), 3);
        assert!(optimal_hash_length(100_000) > 3);
    }
}

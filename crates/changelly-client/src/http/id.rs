/*
[INPUT]:  Nothing (or a caller-supplied id source)
[OUTPUT]: Fresh JSON-RPC request ids
[POS]:    HTTP layer - pluggable request id generation
[UPDATE]: When changing the id format
*/

use uuid::Uuid;

/// Source of JSON-RPC request ids.
///
/// Closures returning `String` implement this, so tests can hand the client a
/// deterministic sequence.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Random version-4 UUIDs in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn matches_id_pattern(id: &str) -> bool {
        let bytes = id.as_bytes();
        if bytes.len() != 36 {
            return false;
        }
        bytes.iter().enumerate().all(|(index, byte)| match index {
            8 | 13 | 18 | 23 => *byte == b'-',
            14 => *byte == b'4',
            19 => matches!(byte, b'8' | b'9' | b'a' | b'b'),
            _ => byte.is_ascii_digit() || (b'a'..=b'f').contains(byte),
        })
    }

    #[test]
    fn test_uuid_ids_match_pattern_every_time() {
        let generator = UuidV4Generator;
        for _ in 0..10_000 {
            let id = generator.next_id();
            assert!(matches_id_pattern(&id), "bad id: {id}");
        }
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let generator = UuidV4Generator;
        let ids: std::collections::HashSet<String> =
            (0..1_000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_closure_generator() {
        let counter = AtomicU64::new(0);
        let generator = move || format!("req-{}", counter.fetch_add(1, Ordering::Relaxed));
        assert_eq!(generator.next_id(), "req-0");
        assert_eq!(generator.next_id(), "req-1");
    }

    #[test]
    fn test_pattern_checker_rejects_wrong_variant() {
        assert!(matches_id_pattern("123e4567-e89b-42d3-a456-426614174000"));
        assert!(!matches_id_pattern("123e4567-e89b-42d3-c456-426614174000"));
        assert!(!matches_id_pattern("123e4567-e89b-12d3-a456-426614174000"));
        assert!(!matches_id_pattern("123E4567-E89B-42D3-A456-426614174000"));
    }
}

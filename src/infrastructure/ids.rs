use rand::Rng;
use uuid::Uuid;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SHORT_ID_LEN: usize = 9;

/// Id-generation capability injected into the editor and message intake,
/// so ids are seedable in tests.
pub trait IdProvider {
    fn generate(&self) -> String;
}

/// 9-character base-36 ids, the format the stored datasets already use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortIdProvider;

impl IdProvider for ShortIdProvider {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SHORT_ID_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}

/// Collision-resistant alternative for deployments that prefer UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

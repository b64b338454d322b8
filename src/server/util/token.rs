use rand::RngCore;

/// Length in characters of a generated token key.
pub const TOKEN_KEY_LEN: usize = 40;

/// Generates a new token key: 20 random bytes as lowercase hex.
pub fn generate_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_LEN / 2];
    rand::rng().fill_bytes(&mut bytes);

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

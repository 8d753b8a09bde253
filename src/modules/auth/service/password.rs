use rand::Rng;

#[derive(Debug)]
pub enum Error {
    HashingFailed,
}

type Result<T> = std::result::Result<T, Error>;

pub fn hash(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|err| {
        tracing::error!("Error occurred while trying to hash a password: {}", err);
        Error::HashingFailed
    })
}

pub fn verify(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

/// At least 8 characters with one uppercase letter, one lowercase letter and
/// one digit.
pub fn meets_policy(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn generate_confirmation_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

pub fn generate_reset_token() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_stores_the_plaintext() {
        let hashed = hash("Sup3rSecret").unwrap();
        assert_ne!(hashed, "Sup3rSecret");
        assert!(verify("Sup3rSecret", &hashed));
        assert!(!verify("Sup3rSecret!", &hashed));
    }

    #[test]
    fn hashing_twice_yields_different_values() {
        let first = hash("Sup3rSecret").unwrap();
        let second = hash("Sup3rSecret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn policy_requires_length_and_composition() {
        assert!(meets_policy("Abcdef12"));
        assert!(!meets_policy("Ab1"));
        assert!(!meets_policy("abcdefg1"));
        assert!(!meets_policy("ABCDEFG1"));
        assert!(!meets_policy("Abcdefgh"));
    }

    #[test]
    fn confirmation_code_is_six_digits() {
        for _ in 0..32 {
            let code = generate_confirmation_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn reset_token_is_32_random_bytes_hex_encoded() {
        let token = generate_reset_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_reset_token());
    }
}

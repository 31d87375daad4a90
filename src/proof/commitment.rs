//! Move Commitment Protocol
//!
//! Commit to the computer's move before the user plays.
//! Reveal the key afterwards so the user can recompute the tag.
//!
//! The HMAC key material is the key's hex text, exactly as printed, and the
//! message is the UTF-8 move name. A user can paste both into any
//! HMAC-SHA256 tool and compare against the tag shown at the start.

use std::fmt;

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

/// Secret key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Tag length in bytes (SHA-256 output).
pub const TAG_LEN: usize = 32;

/// Errors raised when parsing printed keys or tags.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitmentError {
    /// Key text is not 64 hex digits.
    #[error("invalid key: {0}")]
    InvalidKey(hex::FromHexError),
    /// Tag text is not 64 hex digits.
    #[error("invalid tag: {0}")]
    InvalidTag(hex::FromHexError),
}

// =============================================================================
// KEY AND TAG
// =============================================================================

/// Random secret withheld until the round is over.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(#[serde(with = "hex::serde")] [u8; KEY_LEN]);

impl Key {
    /// Draw a fresh key from a cryptographically secure source.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the printed form.
    pub fn from_hex(text: &str) -> Result<Self, CommitmentError> {
        let mut bytes = [0u8; KEY_LEN];
        hex::decode_to_slice(text.trim(), &mut bytes).map_err(CommitmentError::InvalidKey)?;
        Ok(Self(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, the form shown to the user and fed to the HMAC.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Keep the secret out of debug output and logs.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Keyed digest published before the user moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(#[serde(with = "hex::serde")] [u8; TAG_LEN]);

impl Tag {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the printed form.
    pub fn from_hex(text: &str) -> Result<Self, CommitmentError> {
        let mut bytes = [0u8; TAG_LEN];
        hex::decode_to_slice(text.trim(), &mut bytes).map_err(CommitmentError::InvalidTag)?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// KEYED DIGEST
// =============================================================================

/// Keyed message authentication used to build tags.
///
/// Injected into [`commit`] so tests can substitute their own digest.
pub trait KeyedDigest {
    /// Compute the tag of `message` under `key`.
    fn compute(&self, key: &[u8], message: &[u8]) -> Tag;

    /// Check a tag. Implementations should compare in constant time.
    fn verify(&self, key: &[u8], message: &[u8], tag: &Tag) -> bool {
        self.compute(key, message) == *tag
    }
}

/// HMAC-SHA256 (RFC 2104).
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    fn mac(key: &[u8], message: &[u8]) -> Hmac<Sha256> {
        let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
            .expect("HMAC accepts keys of any length");
        mac.update(message);
        mac
    }
}

impl KeyedDigest for HmacSha256 {
    fn compute(&self, key: &[u8], message: &[u8]) -> Tag {
        Tag(Self::mac(key, message).finalize().into_bytes().into())
    }

    fn verify(&self, key: &[u8], message: &[u8], tag: &Tag) -> bool {
        Self::mac(key, message).verify_slice(&tag.0).is_ok()
    }
}

// =============================================================================
// COMMITMENT
// =============================================================================

/// Published half of a commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommitment {
    /// Tag shown before the user moves.
    pub tag: Tag,
}

/// Secret half of a commitment (kept until reveal).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentOpening {
    /// Secret key.
    pub key: Key,
    /// Committed move name.
    pub move_name: String,
}

impl CommitmentOpening {
    /// Tag this opening produces under `digest`.
    pub fn tag<D: KeyedDigest + ?Sized>(&self, digest: &D) -> Tag {
        digest.compute(self.key.to_hex().as_bytes(), self.move_name.as_bytes())
    }
}

impl MoveCommitment {
    /// Check that an opening matches this commitment.
    pub fn verify<D: KeyedDigest + ?Sized>(&self, digest: &D, opening: &CommitmentOpening) -> bool {
        verify(digest, &opening.key, &opening.move_name, &self.tag)
    }
}

/// Commit to `move_name` with a freshly generated key.
pub fn commit<R, D>(rng: &mut R, digest: &D, move_name: &str) -> (CommitmentOpening, MoveCommitment)
where
    R: RngCore + CryptoRng + ?Sized,
    D: KeyedDigest + ?Sized,
{
    let opening = CommitmentOpening {
        key: Key::generate(rng),
        move_name: move_name.to_owned(),
    };
    let commitment = MoveCommitment {
        tag: opening.tag(digest),
    };
    (opening, commitment)
}

/// Recompute the tag for `(key, move_name)` and compare.
pub fn verify<D: KeyedDigest + ?Sized>(digest: &D, key: &Key, move_name: &str, tag: &Tag) -> bool {
    digest.verify(key.to_hex().as_bytes(), move_name.as_bytes(), tag)
}

/// Verify printed values, as a user would after the round.
pub fn verify_reveal<D: KeyedDigest + ?Sized>(
    digest: &D,
    key_hex: &str,
    move_name: &str,
    tag_hex: &str,
) -> Result<bool, CommitmentError> {
    let key = Key::from_hex(key_hex)?;
    let tag = Tag::from_hex(tag_hex)?;
    Ok(verify(digest, &key, move_name, &tag))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Digest stand-in that folds key and message with xor.
    struct XorDigest;

    impl KeyedDigest for XorDigest {
        fn compute(&self, key: &[u8], message: &[u8]) -> Tag {
            let mut out = [0u8; TAG_LEN];
            for (i, b) in key.iter().chain(message).enumerate() {
                out[i % TAG_LEN] ^= *b;
            }
            Tag(out)
        }
    }

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let tag = HmacSha256.compute(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            tag.to_hex(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_rfc4231_case_1() {
        let tag = HmacSha256.compute(&[0x0b; 20], b"Hi There");
        assert_eq!(
            tag.to_hex(),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }

    #[test]
    fn test_commitment_creation() {
        let mut rng = StdRng::seed_from_u64(7);
        let (opening, commitment) = commit(&mut rng, &HmacSha256, "Paper");

        assert_eq!(opening.move_name, "Paper");
        assert!(commitment.verify(&HmacSha256, &opening));
        assert_eq!(commitment.tag, opening.tag(&HmacSha256));
    }

    #[test]
    fn test_commitment_determinism() {
        let key = Key::from_bytes([9; KEY_LEN]);
        let t1 = HmacSha256.compute(key.to_hex().as_bytes(), b"Rock");
        let t2 = HmacSha256.compute(key.to_hex().as_bytes(), b"Rock");
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_wrong_move_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let (opening, commitment) = commit(&mut rng, &HmacSha256, "Rock");

        let mut wrong = opening.clone();
        wrong.move_name = "Paper".into();
        assert!(!commitment.verify(&HmacSha256, &wrong));

        let mut wrong_key = opening;
        wrong_key.key = Key::from_bytes([0; KEY_LEN]);
        assert!(!commitment.verify(&HmacSha256, &wrong_key));
    }

    #[test]
    fn test_key_is_hex_text_of_printed_form() {
        let key = Key::from_bytes([0xab; KEY_LEN]);
        let tag = HmacSha256.compute(key.to_string().as_bytes(), b"Rock");
        assert!(verify(&HmacSha256, &key, "Rock", &tag));
        // Raw bytes are not the key material
        assert_ne!(tag, HmacSha256.compute(key.as_bytes(), b"Rock"));
    }

    #[test]
    fn test_keys_are_fresh() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Key::generate(&mut rng);
        let b = Key::generate(&mut rng);
        assert_ne!(a, b);
        assert_eq!(a.to_hex().len(), 2 * KEY_LEN);
    }

    #[test]
    fn test_no_collisions_over_sampled_trials() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let moves = ["Rock", "Paper", "Scissors", "Lizard", "Spock"];
        let mut tags = HashSet::new();

        for i in 0..10_000 {
            let (_, commitment) = commit(&mut rng, &HmacSha256, moves[i % moves.len()]);
            assert!(tags.insert(commitment.tag), "tag collision at trial {}", i);
        }

        // Same key, every move: all distinct
        let key = Key::generate(&mut rng);
        let per_move: HashSet<Tag> = moves
            .iter()
            .map(|m| HmacSha256.compute(key.to_hex().as_bytes(), m.as_bytes()))
            .collect();
        assert_eq!(per_move.len(), moves.len());
    }

    #[test]
    fn test_injected_digest_is_used() {
        let mut rng = StdRng::seed_from_u64(11);
        let (opening, commitment) = commit(&mut rng, &XorDigest, "Rock");

        assert!(commitment.verify(&XorDigest, &opening));
        assert_ne!(commitment.tag, opening.tag(&HmacSha256));
    }

    #[test]
    fn test_verify_reveal_from_printed_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let (opening, commitment) = commit(&mut rng, &HmacSha256, "Spock");

        let key_hex = opening.key.to_string();
        let tag_hex = commitment.tag.to_string();

        assert_eq!(verify_reveal(&HmacSha256, &key_hex, "Spock", &tag_hex), Ok(true));
        assert_eq!(verify_reveal(&HmacSha256, &key_hex, "Rock", &tag_hex), Ok(false));
        assert!(matches!(
            verify_reveal(&HmacSha256, "not hex", "Spock", &tag_hex),
            Err(CommitmentError::InvalidKey(_))
        ));
        assert!(matches!(
            verify_reveal(&HmacSha256, &key_hex, "Spock", "abcd"),
            Err(CommitmentError::InvalidTag(_))
        ));
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = Key::from_bytes([0x11; KEY_LEN]);
        assert_eq!(format!("{:?}", key), "Key(..)");
    }

    #[test]
    fn test_serialized_opening_uses_hex() {
        let opening = CommitmentOpening {
            key: Key::from_bytes([0x0f; KEY_LEN]),
            move_name: "Rock".into(),
        };
        let json = serde_json::to_value(&opening).unwrap();
        assert_eq!(json["key"], "0f".repeat(KEY_LEN));
        assert_eq!(json["move_name"], "Rock");
    }
}

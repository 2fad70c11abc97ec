// src/core/rsa/mod.rs
//! RSA operation engine
//!
//! Five stateless operations. Every call parses its own keys and builds its
//! own padding scheme and RNG handle, so nothing is shared between threads.
//!
//! Each fallible operation comes in two layers: a `try_*` form returning
//! [`Result`](super::Result) that keeps the cause, and the public form
//! that logs the cause and collapses it to `None` / `false`.
mod decrypt;
mod encrypt;
mod keygen;
mod keys;
mod sign;
mod verify;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use keygen::generate_key;
pub use sign::generate_signature;
pub use verify::verify_signature;

use rand::rngs::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::algo::{EncryptionAlgorithm, SignatureAlgorithm};

/// Backend binding for a signature variant: the PKCS#1 v1.5 scheme
/// (carrying the digest OID) and the digest of `message`.
fn signing_input(algorithm: SignatureAlgorithm, message: &[u8]) -> (Pkcs1v15Sign, Vec<u8>) {
    match algorithm {
        SignatureAlgorithm::Sha256WithRsa => {
            (Pkcs1v15Sign::new::<Sha256>(), Sha256::digest(message).to_vec())
        }
        SignatureAlgorithm::Sha384WithRsa => {
            (Pkcs1v15Sign::new::<Sha384>(), Sha384::digest(message).to_vec())
        }
        SignatureAlgorithm::Sha512WithRsa => {
            (Pkcs1v15Sign::new::<Sha512>(), Sha512::digest(message).to_vec())
        }
    }
}

/// Backend binding for an encryption variant, encrypt side
fn encrypt_block(
    key: &RsaPublicKey,
    algorithm: EncryptionAlgorithm,
    data: &[u8],
) -> rsa::Result<Vec<u8>> {
    match algorithm {
        EncryptionAlgorithm::Pkcs1Padding => key.encrypt(&mut OsRng, Pkcs1v15Encrypt, data),
        EncryptionAlgorithm::OaepPadding => key.encrypt(&mut OsRng, Oaep::new::<Sha1>(), data),
        EncryptionAlgorithm::OaepSha256Padding => {
            key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), data)
        }
    }
}

/// Backend binding for an encryption variant, decrypt side. Blinded, and
/// the recovered block is wiped on drop.
fn decrypt_block(
    key: &RsaPrivateKey,
    algorithm: EncryptionAlgorithm,
    ciphertext: &[u8],
) -> rsa::Result<Zeroizing<Vec<u8>>> {
    let plaintext = match algorithm {
        EncryptionAlgorithm::Pkcs1Padding => {
            key.decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, ciphertext)?
        }
        EncryptionAlgorithm::OaepPadding => {
            key.decrypt_blinded(&mut OsRng, Oaep::new::<Sha1>(), ciphertext)?
        }
        EncryptionAlgorithm::OaepSha256Padding => {
            key.decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), ciphertext)?
        }
    };
    Ok(Zeroizing::new(plaintext))
}

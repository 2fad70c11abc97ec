// tests/core/concurrency.rs
use std::thread;

use rsa_facade::{decrypt, encrypt, generate_signature, verify_signature};
use rsa_facade::{EncryptionAlgorithm, SignatureAlgorithm};

use crate::common::key_pair;

#[test]
fn test_operations_run_concurrently_without_coordination() {
    let key = key_pair();

    thread::scope(|s| {
        for i in 0..8 {
            s.spawn(move || {
                let message = format!("message #{i}");

                let algo = SignatureAlgorithm::ALL[i % SignatureAlgorithm::ALL.len()];
                let signature = generate_signature(key.private_key(), &message, algo).unwrap();
                assert!(verify_signature(key.public_key(), &signature, &message, algo));

                let algo = EncryptionAlgorithm::ALL[i % EncryptionAlgorithm::ALL.len()];
                let ciphertext = encrypt(key.public_key(), &message, algo).unwrap();
                assert_eq!(decrypt(key.private_key(), &ciphertext, algo), Some(message));
            });
        }
    });
}

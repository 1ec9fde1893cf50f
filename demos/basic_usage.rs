//! Basic usage example for AEGIS authenticated encryption.

use aegis_aead::aegis128l::{self, Aegis128L};
use aegis_aead::aegis256::{self, Aegis256};
use aegis_aead::Error;

fn main() -> Result<(), Error> {
    println!("AEGIS Basic Usage Example");
    println!("=========================");

    // Example 1: Basic encryption and decryption
    basic_example()?;

    // Example 2: Reusing an output buffer
    buffer_reuse_example()?;

    // Example 3: Incremental encryption
    streaming_example()?;

    // Example 4: Error handling
    error_handling_example()?;

    Ok(())
}

fn basic_example() -> Result<(), Error> {
    println!("\n1. Basic Encryption/Decryption:");

    let key = [0x01; aegis128l::KEY_LENGTH];
    let nonce = [0x02; aegis128l::NONCE_LENGTH];
    let plaintext = b"Hello, AEGIS! This is a secret message.";
    let ad = b"public header";

    let aead = Aegis128L::new(&key, 16)?;
    let sealed = aead.seal(&nonce, plaintext, ad);
    println!("  Plaintext: {:?}", String::from_utf8_lossy(plaintext));
    println!("  Sealed: {} bytes (ciphertext || tag)", sealed.len());
    println!("  Tag: {:02x?}", &sealed[plaintext.len()..][..8]);

    let opened = aead.open(&nonce, &sealed, ad)?;
    println!("  Opened: {:?}", String::from_utf8_lossy(&opened));

    assert_eq!(opened, plaintext);
    println!("  ✓ Encryption/decryption successful!");

    Ok(())
}

fn buffer_reuse_example() -> Result<(), Error> {
    println!("\n2. Reusing an Output Buffer:");

    let aead = Aegis256::new(&[0x03; aegis256::KEY_LENGTH], 32)?;
    let nonce = [0x04; aegis256::NONCE_LENGTH];

    let mut packet = Vec::with_capacity(256);
    packet.extend_from_slice(b"HDR:");
    let before = packet.as_ptr();
    aead.seal_to(&mut packet, &nonce, b"payload", b"HDR:");
    println!("  Packet: {} bytes, reallocated: {}", packet.len(), before != packet.as_ptr());

    let mut opened = Vec::new();
    aead.open_to(&mut opened, &nonce, &packet[4..], &packet[..4])?;
    assert_eq!(opened, b"payload");
    println!("  ✓ Sealed after the header without reallocating");

    Ok(())
}

fn streaming_example() -> Result<(), Error> {
    println!("\n3. Incremental Encryption:");

    let key = [0x05; aegis128l::KEY_LENGTH];
    let nonce = [0x06; aegis128l::NONCE_LENGTH];
    let parts: [&[u8]; 3] = [b"first part, ", b"second part, ", b"and the end"];

    let mut encrypter = aegis128l::Encrypter::new(&key, &nonce, b"", 16)?;
    let mut ciphertext = Vec::new();
    for part in parts {
        encrypter.encrypt_into(&mut ciphertext, part);
    }
    let tag = encrypter.finalize();
    println!("  Ciphertext: {} bytes in {} parts", ciphertext.len(), parts.len());

    let mut decrypter = aegis128l::Decrypter::new(&key, &nonce, b"", 16)?;
    let plaintext = decrypter.decrypt(&ciphertext);
    decrypter.finalize(&tag)?;
    println!("  Plaintext: {:?}", String::from_utf8_lossy(&plaintext));
    println!("  ✓ Tag verified after the last chunk");

    Ok(())
}

fn error_handling_example() -> Result<(), Error> {
    println!("\n4. Error Handling:");

    let aead = Aegis128L::new(&[0x07; aegis128l::KEY_LENGTH], 16)?;
    let nonce = [0x08; aegis128l::NONCE_LENGTH];

    let mut sealed = aead.seal(&nonce, b"secret", b"");
    sealed[0] ^= 1;
    match aead.open(&nonce, &sealed, b"") {
        Err(Error::AuthenticationFailed) => println!("  ✓ Tampered ciphertext rejected"),
        other => println!("  ✗ Unexpected result: {other:?}"),
    }

    match aead.open(&nonce, &sealed[..10], b"") {
        Err(Error::Truncated) => println!("  ✓ Truncated ciphertext rejected"),
        other => println!("  ✗ Unexpected result: {other:?}"),
    }

    match Aegis128L::new(&[0u8; 15], 16) {
        Err(e) => println!("  ✓ Bad key rejected: {e}"),
        Ok(_) => println!("  ✗ Bad key accepted"),
    }

    Ok(())
}

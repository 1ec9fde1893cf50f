//! Test vectors from the AEGIS specification (draft-irtf-cfrg-aegis-aead).

use crate::primitive::{Aegis128L, Aegis256, Primitive};
use crate::{Aead, Decrypter, Encrypter};

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(
        hex.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>(),
    )
    .unwrap()
}

struct Vector<'a> {
    key: &'a str,
    nonce: &'a str,
    ad: &'a str,
    msg: &'a str,
    ct: &'a str,
    tag128: &'a str,
    tag256: &'a str,
}

fn run_test_vector<P: Primitive>(test_num: usize, v: &Vector<'_>) {
    let key = hex_to_bytes(v.key);
    let nonce = hex_to_bytes(v.nonce);
    let ad = hex_to_bytes(v.ad);
    let msg = hex_to_bytes(v.msg);
    let expected_ct = hex_to_bytes(v.ct);

    for expected_tag in [hex_to_bytes(v.tag128), hex_to_bytes(v.tag256)] {
        let tag_length = expected_tag.len();
        let aead = Aead::<P>::new(&key, tag_length).unwrap();

        // One-shot encryption
        let sealed = aead.seal(&nonce, &msg, &ad);
        assert_eq!(
            &sealed[..msg.len()],
            &expected_ct[..],
            "Test vector {test_num} ciphertext mismatch"
        );
        assert_eq!(
            &sealed[msg.len()..],
            &expected_tag[..],
            "Test vector {test_num} tag{} mismatch",
            tag_length * 8
        );

        // One-shot decryption
        let opened = aead
            .open(&nonce, &sealed, &ad)
            .unwrap_or_else(|e| panic!("Test vector {test_num} decryption failed: {e}"));
        assert_eq!(opened, msg, "Test vector {test_num} decryption mismatch");

        // Byte-at-a-time streaming
        let mut encrypter = Encrypter::<P>::new(&key, &nonce, &ad, tag_length).unwrap();
        let mut streamed = Vec::new();
        for byte in msg.chunks(1) {
            encrypter.encrypt_into(&mut streamed, byte);
        }
        streamed.extend_from_slice(&encrypter.finalize());
        assert_eq!(streamed, sealed, "Test vector {test_num} streaming mismatch");

        let mut decrypter = Decrypter::<P>::new(&key, &nonce, &ad, tag_length).unwrap();
        let plaintext = decrypter.decrypt(&expected_ct);
        assert_eq!(decrypter.finalize(&expected_tag), Ok(()));
        assert_eq!(plaintext, msg);

        // Corrupted tag
        let mut bad = sealed.clone();
        let last = bad.len() - 1;
        bad[last] ^= 1;
        assert!(
            aead.open(&nonce, &bad, &ad).is_err(),
            "Test vector {test_num} should fail with bad tag"
        );
    }
}

const KEY_128: &str = "10010000000000000000000000000000";
const NONCE_128: &str = "10000200000000000000000000000000";
const KEY_256: &str = "1001000000000000000000000000000000000000000000000000000000000000";
const NONCE_256: &str = "1000020000000000000000000000000000000000000000000000000000000000";

#[test]
fn test_aegis128l_vector_1_single_block() {
    run_test_vector::<Aegis128L>(
        1,
        &Vector {
            key: KEY_128,
            nonce: NONCE_128,
            ad: "",
            msg: "00000000000000000000000000000000",
            ct: "c1c0e58bd913006feba00f4b3cc3594e",
            tag128: "abe0ece80c24868a226a35d16bdae37a",
            tag256: "25835bfbb21632176cf03840687cb968cace4617af1bd0f7d064c639a5c79ee4",
        },
    );
}

#[test]
fn test_aegis128l_vector_2_empty() {
    run_test_vector::<Aegis128L>(
        2,
        &Vector {
            key: KEY_128,
            nonce: NONCE_128,
            ad: "",
            msg: "",
            ct: "",
            tag128: "c2b879a67def9d74e6c14f708bbcc9b4",
            tag256: "1360dc9db8ae42455f6e5b6a9d488ea4f2184c4e12120249335c4ee84bafe25d",
        },
    );
}

#[test]
fn test_aegis128l_vector_3_with_ad() {
    run_test_vector::<Aegis128L>(
        3,
        &Vector {
            key: KEY_128,
            nonce: NONCE_128,
            ad: "0001020304050607",
            msg: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            ct: "79d94593d8c2119d7e8fd9b8fc77845c5c077a05b2528b6ac54b563aed8efe84",
            tag128: "cc6f3372f6aa1bb82388d695c3962d9a",
            tag256: "022cb796fe7e0ae1197525ff67e309484cfbab6528ddef89f17d74ef8ecd82b3",
        },
    );
}

#[test]
fn test_aegis128l_vector_4_partial_block() {
    run_test_vector::<Aegis128L>(
        4,
        &Vector {
            key: KEY_128,
            nonce: NONCE_128,
            ad: "0001020304050607",
            msg: "000102030405060708090a0b0c0d",
            ct: "79d94593d8c2119d7e8fd9b8fc77",
            tag128: "5c04b3dba849b2701effbe32c7f0fab7",
            tag256: "86f1b80bfb463aba711d15405d094baf4a55a15dbfec81a76f35ed0b9c8b04ac",
        },
    );
}

#[test]
fn test_aegis256_vector_1_single_block() {
    run_test_vector::<Aegis256>(
        1,
        &Vector {
            key: KEY_256,
            nonce: NONCE_256,
            ad: "",
            msg: "00000000000000000000000000000000",
            ct: "754fc3d8c973246dcc6d741412a4b236",
            tag128: "3fe91994768b332ed7f570a19ec5896e",
            tag256: "1181a1d18091082bf0266f66297d167d2e68b845f61a3b0527d31fc7b7b89f13",
        },
    );
}

#[test]
fn test_aegis256_vector_2_empty() {
    run_test_vector::<Aegis256>(
        2,
        &Vector {
            key: KEY_256,
            nonce: NONCE_256,
            ad: "",
            msg: "",
            ct: "",
            tag128: "e3def978a0f054afd1e761d7553afba3",
            tag256: "6a348c930adbd654896e1666aad67de989ea75ebaa2b82fb588977b1ffec864a",
        },
    );
}

#[test]
fn test_aegis256_vector_3_with_ad() {
    run_test_vector::<Aegis256>(
        3,
        &Vector {
            key: KEY_256,
            nonce: NONCE_256,
            ad: "0001020304050607",
            msg: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            ct: "f373079ed84b2709faee373584585d60accd191db310ef5d8b11833df9dec711",
            tag128: "8d86f91ee606e9ff26a01b64ccbdd91d",
            tag256: "b7d28d0c3c0ebd409fd22b44160503073a547412da0854bfb9723020dab8da1a",
        },
    );
}

#[test]
fn test_aegis256_vector_4_partial_block() {
    run_test_vector::<Aegis256>(
        4,
        &Vector {
            key: KEY_256,
            nonce: NONCE_256,
            ad: "0001020304050607",
            msg: "000102030405060708090a0b0c0d",
            ct: "f373079ed84b2709faee37358458",
            tag128: "c60b9c2d33ceb058f96e6dd03c215652",
            tag256: "8c1cc703c81281bee3f6d9966e14948b4a175b2efbdc31e61a98b4465235c2d9",
        },
    );
}

use cidenc::{Base, Cid, Encoder, EncoderOptions, encoder_from_path};
use multihash::Multihash;
use sha2::{Digest, Sha256};

const SHA2_256: u64 = 0x12;
const DAG_PB: u64 = 0x70;

fn sample_v0() -> Cid {
    let digest = Sha256::digest(b"hello cidenc");
    Cid::new_v0(Multihash::<64>::wrap(SHA2_256, &digest).unwrap()).unwrap()
}

/// Test: a user asking for base32 gets upgraded version 0 CIDs on the
/// general tier, and the rendered form parses back to the same content.
#[test]
fn options_to_rendered_output() {
    let options = EncoderOptions {
        base: Some("base32".to_string()),
        upgrade: None,
    };
    let encoder = options.encoder().into_result().unwrap();

    let v0 = sample_v0();
    let rendered = encoder.encode(&v0);
    assert!(rendered.starts_with('b'));

    let reparsed = Cid::try_from(rendered.as_str()).unwrap();
    assert_eq!(reparsed.codec(), v0.codec());
    assert_eq!(reparsed.hash(), v0.hash());
}

/// Test: the same options on the low-level tier leave stored version 0
/// identifiers byte for byte intact.
#[test]
fn low_level_tier_preserves_v0_forms() {
    let options = EncoderOptions {
        base: Some("base32".to_string()),
        upgrade: None,
    };
    let encoder = options.low_level_encoder().into_result().unwrap();

    let v0_text = sample_v0().to_string();
    assert_eq!(encoder.recode(&v0_text).unwrap(), v0_text);
}

/// Test: output for a path echoes the encoding the path itself uses. A
/// base32 version 1 path stays base32 even when the session default is
/// base58btc, and a version 0 path stays version 0.
#[test]
fn paths_carry_their_own_encoding() {
    let session = EncoderOptions::default().encoder().into_result().unwrap();
    assert_eq!(session, Encoder::default());

    let v0 = sample_v0();
    let v1_text = Cid::new_v1(DAG_PB, *v0.hash())
        .to_string_of_base(Base::Base32Lower)
        .unwrap();

    let refined = encoder_from_path(session, &format!("/ipfs/{v1_text}/a/b"))
        .into_result()
        .unwrap();
    assert_eq!(refined.base, Base::Base32Lower);
    assert!(refined.upgrade);
    // re-encoding what the user typed changes nothing
    assert_eq!(refined.recode(&v1_text).unwrap(), v1_text);

    let v0_text = v0.to_string();
    let refined = encoder_from_path(session, &format!("/ipfs/{v0_text}"))
        .into_result()
        .unwrap();
    assert!(!refined.upgrade);
    assert_eq!(refined.recode(&v0_text).unwrap(), v0_text);
}

/// Test: a bad base name surfaces the error while still handing back a
/// usable default encoder.
#[test]
fn bad_base_name_still_renders() {
    let options = EncoderOptions {
        base: Some("base1337".to_string()),
        upgrade: None,
    };
    let resolution = options.encoder();
    assert!(resolution.error().is_some());

    let v0 = sample_v0();
    let rendered = resolution.encoder().encode(&v0);
    assert_eq!(rendered, v0.to_string());
}

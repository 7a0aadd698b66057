//! End-to-end tests for the account lifecycle

use harbor_wallet::{Account, Error, Full};

#[test]
fn test_full_account_has_every_capability() {
    let account = Account::random();
    let message = b"all hands on deck";

    let address = account.address().unwrap();
    assert!(address.starts_with('P'));

    let seed = account.seed().unwrap();
    assert!(seed.starts_with('S'));

    let signature = account.sign(message).unwrap();
    account.verify(message, &signature).unwrap();

    let sealed = account.encrypt(message).unwrap();
    assert_eq!(account.decrypt(&sealed).unwrap(), message);

    account.hint().unwrap();
    account.peer_id().unwrap();
}

#[test]
fn test_address_only_capabilities_are_limited() {
    let account = Account::random();
    let public = Account::parse(&account.address().unwrap()).unwrap();

    assert_eq!(public.seed().unwrap_err(), Error::NoSeed);
    assert_eq!(public.sign(b"message").unwrap_err(), Error::CannotSign);
    assert_eq!(public.decrypt(&[0u8; 96]).unwrap_err(), Error::CannotDecrypt);

    // The shared-capability half of the table still works.
    let signature = account.sign(b"message").unwrap();
    public.verify(b"message", &signature).unwrap();
    assert_eq!(public.hint().unwrap(), account.hint().unwrap());
    assert_eq!(public.peer_id().unwrap(), account.peer_id().unwrap());

    let sealed = public.encrypt(b"return to sender").unwrap();
    assert_eq!(account.decrypt(&sealed).unwrap(), b"return to sender");
}

#[test]
fn test_parse_never_confuses_variants() {
    let full = Full::random();

    assert!(Account::parse(full.seed()).unwrap().is_full());
    assert!(!Account::parse(&full.address().unwrap()).unwrap().is_full());
}

#[test]
fn test_verify_rejects_forgeries() {
    let account = Account::random();
    let other = Account::random();

    let signature = account.sign(b"genuine").unwrap();

    assert_eq!(account.verify(b"forged", &signature).unwrap_err(), Error::InvalidSignature);
    assert_eq!(other.verify(b"genuine", &signature).unwrap_err(), Error::InvalidSignature);

    let mut tampered = signature.clone();
    tampered[0] ^= 0x01;
    assert_eq!(account.verify(b"genuine", &tampered).unwrap_err(), Error::InvalidSignature);

    // Wrong-length input never reaches the primitive.
    assert_eq!(account.verify(b"genuine", &signature[..32]).unwrap_err(), Error::InvalidSignature);
}

#[test]
fn test_libp2p_keypair_matches_peer_id() {
    let full = Full::random();

    let keypair = full.libp2p_keypair().unwrap();
    assert_eq!(keypair.public().to_peer_id(), full.peer_id().unwrap());
}

#[test]
fn test_accounts_round_trip_through_strings() {
    let full = Full::random();

    let recovered = Account::parse(full.seed()).unwrap();
    assert_eq!(recovered.address().unwrap(), full.address().unwrap());

    let signature = recovered.sign(b"still works").unwrap();
    full.verify(b"still works", &signature).unwrap();
}

// Path: crates/types/src/app/instruction/tests.rs

use super::*;
use crate::app::darc::Identity;
use crate::app::ids::DarcId;
use proptest::prelude::*;

fn zero_spawn_coin() -> Instruction {
    Instruction::new(
        InstanceId::default(),
        Nonce::default(),
        0,
        1,
        Operation::Spawn(Spawn {
            contract_id: "coin".into(),
            args: Arguments::default(),
        }),
    )
}

fn invoke(command: &str, args: Vec<Argument>) -> Instruction {
    Instruction::new(
        InstanceId::new(DarcId([9; 32]), SubId([8; 32])),
        Nonce([7; 32]),
        2,
        3,
        Operation::Invoke(Invoke {
            command: command.into(),
            args: Arguments::new(args),
        }),
    )
}

#[test]
fn test_reference_digest_spawn_coin() {
    // Pinned across implementations; every validator must reproduce it.
    assert_eq!(
        hex::encode(zero_spawn_coin().hash()),
        "fbdc097a74ada388d0984aa738394ed1d355f08c8fbd0d0171e1d43b1f52aa8e"
    );
}

#[test]
fn test_hash_is_deterministic() {
    let instr = invoke("transfer", vec![Argument::new("coins", vec![1, 2, 3])]);
    assert_eq!(instr.hash(), instr.clone().hash());
}

#[test]
fn test_hash_changes_with_every_field() {
    let base = invoke(
        "transfer",
        vec![
            Argument::new("coins", vec![1, 2, 3]),
            Argument::new("to", vec![4]),
        ],
    );
    let digest = base.hash();

    let mut m = base.clone();
    m.index = 1;
    assert_ne!(m.hash(), digest, "index");

    let mut m = base.clone();
    m.length = 4;
    assert_ne!(m.hash(), digest, "length");

    let mut m = base.clone();
    m.nonce = Nonce([6; 32]);
    assert_ne!(m.hash(), digest, "nonce");

    let mut m = base.clone();
    m.instance_id.darc_id = DarcId([1; 32]);
    assert_ne!(m.hash(), digest, "darc id");

    let mut m = base.clone();
    m.instance_id.sub_id = SubId([1; 32]);
    assert_ne!(m.hash(), digest, "sub id");

    let m = invoke(
        "transfer",
        vec![
            Argument::new("coinz", vec![1, 2, 3]),
            Argument::new("to", vec![4]),
        ],
    );
    assert_ne!(m.hash(), digest, "argument name");

    let m = invoke(
        "transfer",
        vec![
            Argument::new("coins", vec![1, 2, 4]),
            Argument::new("to", vec![4]),
        ],
    );
    assert_ne!(m.hash(), digest, "argument value");

    let mut m = base.clone();
    m.operation = Operation::Delete;
    assert_ne!(m.hash(), digest, "operation kind");
}

#[test]
fn test_hash_ignores_invoke_command() {
    // Load-bearing: the command string is outside the digest. Changing this
    // invalidates every signature and derived instance ID already on the ledger.
    let a = invoke("transfer", vec![Argument::new("coins", vec![1])]);
    let b = invoke("mint", vec![Argument::new("coins", vec![1])]);
    assert_eq!(a.hash(), b.hash());
    assert_ne!(a.action(), b.action());
}

#[test]
fn test_hash_ignores_signatures() {
    let mut instr = zero_spawn_coin();
    let before = instr.hash();
    instr.signatures.push(Signature {
        signer: Identity::Ed25519([1; 32]),
        signature: vec![2; 64],
    });
    assert_eq!(instr.hash(), before);
}

#[test]
fn test_spawn_contract_id_is_hashed() {
    let mut other = zero_spawn_coin();
    other.operation = Operation::Spawn(Spawn {
        contract_id: "value".into(),
        args: Arguments::default(),
    });
    assert_ne!(other.hash(), zero_spawn_coin().hash());
}

#[test]
fn test_derive_id_is_deterministic_and_keeps_darc() {
    let mut instr = zero_spawn_coin();
    instr.instance_id.darc_id = DarcId([3; 32]);
    instr.signatures.push(Signature {
        signer: Identity::Ed25519([1; 32]),
        signature: vec![2; 64],
    });
    let a = instr.derive_id("coin");
    let b = instr.derive_id("coin");
    assert_eq!(a, b);
    assert_eq!(a.darc_id, DarcId([3; 32]));
    assert_ne!(a.sub_id, instr.instance_id.sub_id);
    assert_ne!(instr.derive_id("other"), a);
}

#[test]
fn test_derive_id_depends_on_signature_bytes() {
    let mut instr = zero_spawn_coin();
    instr.signatures.push(Signature {
        signer: Identity::Ed25519([1; 32]),
        signature: vec![2; 64],
    });
    let a = instr.derive_id("");
    instr.signatures[0].signature = vec![3; 64];
    assert_ne!(instr.derive_id(""), a);
}

#[test]
fn test_derive_id_ignores_signer_identity() {
    // Load-bearing: signer identities are excluded from derived IDs.
    let mut instr = zero_spawn_coin();
    instr.signatures.push(Signature {
        signer: Identity::Ed25519([1; 32]),
        signature: vec![2; 64],
    });
    let a = instr.derive_id("");
    instr.signatures[0].signer = Identity::Darc(DarcId([5; 32]));
    assert_eq!(instr.derive_id(""), a);
}

#[test]
fn test_action_labels() {
    assert_eq!(zero_spawn_coin().action(), "spawn:coin");
    assert_eq!(invoke("evolve", vec![]).action(), EVOLVE_ACTION);
    let mut del = zero_spawn_coin();
    del.operation = Operation::Delete;
    assert_eq!(del.action(), DELETE_ACTION);
    assert_eq!(del.instr_type(), InstrType::Delete);
    assert!(del.arguments().is_none());
}

#[test]
fn test_search_first_match_wins() {
    let args = Arguments::new(vec![
        Argument::new("x", b"A".to_vec()),
        Argument::new("x", b"B".to_vec()),
    ]);
    assert_eq!(args.search("x"), Some(&b"A"[..]));
    assert_eq!(args.search("y"), None);
}

#[test]
fn test_search_empty_value_reads_as_missing() {
    let args = Arguments::new(vec![
        Argument::new("x", Vec::new()),
        Argument::new("x", b"B".to_vec()),
    ]);
    assert_eq!(args.search("x"), None);
}

#[test]
fn test_display_mentions_action() {
    let text = zero_spawn_coin().to_string();
    assert!(text.contains("action: spawn:coin"));
    assert!(text.contains("signatures: 0"));
}

proptest! {
    #[test]
    fn prop_index_and_length_are_bound(index in any::<u32>(), length in any::<u32>()) {
        let mut instr = zero_spawn_coin();
        instr.index = index;
        instr.length = length;
        let digest = instr.hash();
        instr.index = index.wrapping_add(1);
        prop_assert_ne!(instr.hash(), digest);
        instr.index = index;
        instr.length = length.wrapping_add(1);
        prop_assert_ne!(instr.hash(), digest);
    }

    #[test]
    fn prop_swapping_adjacent_arguments_changes_hash(
        a in proptest::collection::vec(any::<u8>(), 4),
        b in proptest::collection::vec(any::<u8>(), 4),
    ) {
        prop_assume!(a != b);
        let first = invoke("c", vec![Argument::new("k", a.clone()), Argument::new("k", b.clone())]);
        let second = invoke("c", vec![Argument::new("k", b), Argument::new("k", a)]);
        prop_assert_ne!(first.hash(), second.hash());
    }
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use authset::{Error, Options, Sha2Factory, Tree};

fuzz_target!(|run: Run| {
    let Run { data, updates } = run;

    let mut tree = match Tree::build(Options::new(Sha2Factory::new()), &data) {
        Ok(tree) => tree,
        Err(err) => {
            assert!(data.is_empty());
            assert_eq!(err, Error::EmptyTreeData);
            return;
        }
    };

    let mut members = data;
    for payload in &members {
        assert_member(&tree, payload);
    }

    for Update { index, new } in updates {
        let index = index as usize % members.len();
        let old = members[index].clone();

        match tree.update_leaf(&old, &new) {
            Ok(()) => {
                assert!(!new.is_empty());
                assert_eq!(tree.get_proof(&old), Err(Error::DataNotInTree));
                assert_member(&tree, &new);
                members[index] = new.clone();
            }
            Err(Error::UpdateWithNilData) => assert!(new.is_empty()),
            Err(Error::UpdateWithExistingData) => assert!(tree.contains(&new)),
            Err(Error::DataNotInTree) => assert!(!tree.contains(&old)),
            Err(err) => panic!("unexpected update error: {err}"),
        }

        assert_proves(&tree, &new);
    }
});

fn assert_member(tree: &Tree<Sha2Factory>, payload: &[u8]) {
    let proof = tree.get_proof(payload).expect("payload is indexed");
    assert_eq!(proof.len(), tree.depth());
    assert_eq!(tree.verify_proof(payload, &proof), Ok(true));
}

/// Payloads displaced by an update of a repeated payload are no longer indexed, so only the proofs
/// that are issued get checked.
fn assert_proves(tree: &Tree<Sha2Factory>, payload: &[u8]) {
    if let Ok(proof) = tree.get_proof(payload) {
        assert_eq!(proof.len(), tree.depth());
        assert_eq!(tree.verify_proof(payload, &proof), Ok(true));
    }
}

#[derive(Debug, Arbitrary)]
struct Run {
    data: Vec<Vec<u8>>,
    updates: Vec<Update>,
}

#[derive(Debug, Arbitrary)]
struct Update {
    index: u16,
    new: Vec<u8>,
}

//! Updates beneath nodes which were paired with themselves to fill an odd level.

mod common;

use common::{build, payloads};

fn assert_all_proofs_verify(tree: &authset::Tree<authset::Sha2Factory>, data: &[Vec<u8>]) {
    for payload in data {
        let proof = tree.get_proof(payload).unwrap();
        assert_eq!(tree.depth(), proof.len());
        assert_eq!(tree.verify_proof(payload, &proof), Ok(true));
    }
}

#[test]
fn update_last_of_five() {
    // level sizes: 5 (+1) -> 3 (+1) -> 2 -> 1. The fifth leaf sits beneath a self-paired internal
    // node.
    let mut data = payloads(5, 5);
    let mut tree = build(&data);

    tree.update_leaf(&data[4], b"replacement").unwrap();
    data[4] = b"replacement".to_vec();

    assert_eq!(tree.root_digest(), build(&data).root_digest());
    assert_all_proofs_verify(&tree, &data);

    let right = tree.root().right().unwrap();
    assert_eq!(right.left(), right.right());
}

#[test]
fn update_every_leaf_of_odd_trees() {
    for count in [3, 5, 6, 7, 9, 11, 13, 25] {
        let mut data = payloads(count as u64, count);
        let mut tree = build(&data);

        for index in 0..count {
            let new = format!("updated {index}").into_bytes();
            tree.update_leaf(&data[index], &new).unwrap();
            data[index] = new;

            assert_eq!(
                tree.root_digest(),
                build(&data).root_digest(),
                "count {count}, index {index}"
            );
        }

        assert_all_proofs_verify(&tree, &data);
    }
}

#[test]
fn repeated_updates_of_self_paired_leaf() {
    let mut data = payloads(7, 7);
    let mut tree = build(&data);

    for round in 0..10 {
        let new = format!("round {round}").into_bytes();
        tree.update_leaf(&data[6], &new).unwrap();
        data[6] = new;
    }

    assert_eq!(tree.root_digest(), build(&data).root_digest());
    assert_all_proofs_verify(&tree, &data);
}

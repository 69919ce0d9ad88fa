mod common;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use suffix_tree::{SuffixTree, SuffixTreeBuilder, SuffixTreeOptions};

use common::{assert_well_formed, contains};

fn naive_contains(text: &[u8], pattern: &[u8]) -> bool {
    pattern.is_empty() || text.windows(pattern.len()).any(|w| w == pattern)
}

proptest! {
    #[test]
    fn prop_well_formed_small_alphabet(input in "[ab]{0,48}") {
        let tree: SuffixTree = SuffixTree::build(input.as_bytes()).unwrap();
        assert_well_formed(&tree, input.as_bytes());
    }

    #[test]
    fn prop_well_formed_wide_alphabet(input in "[a-f]{0,64}") {
        let tree: SuffixTree = SuffixTree::build(input.as_bytes()).unwrap();
        assert_well_formed(&tree, input.as_bytes());
    }

    #[test]
    fn prop_contains_agrees_with_scan(input in "[abc]{0,40}", pattern in "[abcd]{0,6}") {
        let tree: SuffixTree = SuffixTree::build(input.as_bytes()).unwrap();
        prop_assert_eq!(
            contains(&tree, pattern.as_bytes()),
            naive_contains(input.as_bytes(), pattern.as_bytes())
        );
    }

    #[test]
    fn prop_every_substring_is_found(input in "[xyz]{1,24}") {
        let tree: SuffixTree = SuffixTree::build(input.as_bytes()).unwrap();
        let bytes = input.as_bytes();
        for i in 0..bytes.len() {
            for j in i + 1..=bytes.len() {
                prop_assert!(contains(&tree, &bytes[i..j]));
            }
        }
    }

    #[test]
    fn prop_node_count_is_linear(input in "[ab]{0,64}") {
        let tree: SuffixTree = SuffixTree::build(input.as_bytes()).unwrap();
        let stats = tree.stats();
        prop_assert!(stats.internal_count <= input.len());
        prop_assert_eq!(stats.node_count, 1 + stats.internal_count + stats.leaf_count);
    }

    #[test]
    fn prop_terminator_collision_reports_first_position(
        prefix in "[ab]{0,10}",
        suffix in "[ab$]{0,10}",
    ) {
        let input = format!("{prefix}${suffix}");
        let err = SuffixTree::<u8>::build(input.as_bytes()).unwrap_err();
        prop_assert_eq!(
            err,
            suffix_tree::BuildError::TerminatorCollision { position: prefix.len() }
        );
    }
}

#[test]
fn fuzz_random_bytes_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    for round in 0..200 {
        let alphabet = rng.gen_range(1..=4u8);
        let len = rng.gen_range(0..120);
        let input: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect();
        let tree: SuffixTree = SuffixTree::build(&input)
            .unwrap_or_else(|e| panic!("round {round}: {e}"));
        assert_well_formed(&tree, &input);
    }
}

#[test]
fn fuzz_random_binary_matrix() {
    // Full byte range with NUL as terminator.
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let input: Vec<u8> = (0..len).map(|_| rng.gen_range(1..=255u8)).collect();
        let tree = SuffixTreeBuilder::new(SuffixTreeOptions { terminator: 0u8 })
            .build(&input)
            .unwrap();
        assert_well_formed(&tree, &input);
    }
}

#[test]
fn fuzz_random_chars_matrix() {
    let alphabet = ['α', 'β', 'γ', 'δ'];
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    for _ in 0..100 {
        let len = rng.gen_range(0..80);
        let input: Vec<char> = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        let tree = SuffixTree::build(input.as_slice()).unwrap();
        assert_well_formed(&tree, &input);
    }
}

#[test]
fn fuzz_long_periodic_text_matrix() {
    let input: Vec<u8> = b"abaababaabaababaababa".repeat(40);
    let tree: SuffixTree = SuffixTree::build(&input).unwrap();
    assert_eq!(tree.leaf_count(), input.len() + 1);
    assert!(tree.node_count() <= 2 * (input.len() + 1));
    assert_well_formed(&tree, &input);
}

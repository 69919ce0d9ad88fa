use suffix_tree::{SuffixTree, SuffixTreeBuilder, SuffixTreeOptions};

#[test]
fn options_from_toml_matrix() {
    let opts: SuffixTreeOptions<char> = toml::from_str(r##"terminator = "#""##).unwrap();
    assert_eq!(opts.terminator, '#');

    let input: Vec<char> = "cost$".chars().collect();
    let tree = SuffixTreeBuilder::new(opts).build(&input).unwrap();
    assert_eq!(tree.terminator(), '#');
    assert_eq!(tree.text().last(), Some(&'#'));
    assert_eq!(tree.leaf_count(), 6);
}

#[test]
fn options_byte_terminator_from_toml_matrix() {
    let opts: SuffixTreeOptions<u8> = toml::from_str("terminator = 0").unwrap();
    let tree = SuffixTreeBuilder::new(opts).build(b"a$a").unwrap();
    assert_eq!(tree.text(), b"a$a\0");
}

#[test]
fn options_roundtrip_to_toml_matrix() {
    let opts = SuffixTreeOptions { terminator: '%' };
    let text = toml::to_string(&opts).unwrap();
    assert_eq!(text.trim(), r#"terminator = "%""#);
}

#[test]
fn options_default_matrix() {
    let builder = SuffixTreeBuilder::<u8>::default();
    assert_eq!(builder.options(), &SuffixTreeOptions { terminator: b'$' });

    let tree: SuffixTree = builder.build(b"abc").unwrap();
    assert_eq!(tree.text(), b"abc$");
}

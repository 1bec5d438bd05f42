/// Round-trip tests between markup, tree and raw text
use crate::*;

#[test]
fn test_roundtrip_simple_markup() {
    let sources = vec![
        "plain text",
        "<b>bold</b>",
        "a<b>b</b>c",
        "<i><b>ab</b>cd</i>",
        "<b>x</b> <i>y</i> <c>z</c>",
        "<+3>big</+3><-3>small</-3>",
        "héllo <b>wörld</b> €",
    ];

    for source in sources {
        let tree = parse(source);
        assert!(check_coherence(&tree), "incoherent tree for {}", source);

        let serialized = serialize(&tree);
        assert_eq!(serialized, source);
        assert_eq!(parse(&serialized), tree);
    }
}

#[test]
fn test_roundtrip_normalizes_redundant_markup() {
    let tree = parse("<b>a</b><b>b</b><i></i>c");
    assert_eq!(serialize(&tree), "<b>ab</b>c");
    assert_eq!(parse(&serialize(&tree)), simplify(tree));
}

#[test]
fn test_roundtrip_malformed_markup() {
    let sources = vec!["a<b>b", "</i>x", "x<y>z</y>", "<b>a<b>b</b>c</b>", "1 < 2"];

    for source in sources {
        let tree = parse(source);
        assert!(check_coherence(&tree));
        assert_eq!(parse(&serialize(&tree)), tree);
    }
}

#[test]
fn test_raw_text_length_matches_root() {
    let tree = parse("<i>ab<b>cé</b></i>d<u>");
    let raw = raw_text(&tree);
    assert_eq!(raw, "abcéd<u>");
    assert_eq!(text::char_len(&raw), tree.end());
}

mod properties {
    use crate::*;
    use proptest::prelude::*;

    /// Well-formed markup where no tag is nested inside itself
    fn markup_strategy(depth: u32, free: Vec<Tag>) -> BoxedStrategy<String> {
        if depth == 0 || free.is_empty() {
            return "[a-zé ]{0,5}".boxed();
        }
        let nested = prop::sample::select(free.clone()).prop_flat_map(move |tag| {
            let rest: Vec<Tag> = free.iter().copied().filter(|t| *t != tag).collect();
            markup_strategy(depth - 1, rest)
                .prop_map(move |inner| format!("<{tag}>{inner}</{tag}>"))
        });
        prop::collection::vec(prop_oneof!["[a-zé ]{0,5}", nested], 1..4)
            .prop_map(|parts| parts.concat())
            .boxed()
    }

    fn markup() -> BoxedStrategy<String> {
        markup_strategy(3, Tag::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn parsed_trees_are_coherent(source in markup()) {
            let tree = parse(&source);
            prop_assert!(check_coherence(&tree), "incoherent: {:?}", tree);
            prop_assert_eq!(text::char_len(&raw_text(&tree)), tree.end());
        }

        #[test]
        fn arbitrary_input_never_breaks_parsing(source in "[a-c<>/+\\-3bi ]{0,24}") {
            let tree = parse(&source);
            prop_assert!(check_coherence(&tree));
        }

        #[test]
        fn serialize_then_parse_is_stable(source in markup()) {
            let tree = parse(&source);
            prop_assert_eq!(parse(&serialize(&tree)), simplify(tree.clone()));
        }

        #[test]
        fn simplify_is_idempotent(source in markup()) {
            let raw = Parser::new(&source).parse_root();
            let once = simplify(raw);
            prop_assert_eq!(simplify(once.clone()), once);
        }
    }
}

//! Identifier rendering and neighborhood dumps

use semnet_core::{
    log_scp_error, log_unknown_operator_type, print_info, system_identifier, write_info,
    ElementAddr, ElementType, GraphStore, NeighborhoodSummary, SemNetError,
};
use semnet_storage::MemStore;
use semnet_test_harness::{init_tracing, named_node};

fn render<S: GraphStore>(store: &S, addr: ElementAddr) -> (String, NeighborhoodSummary) {
    let mut out = Vec::new();
    let summary = write_info(store, addr, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_identifier_of_named_node() {
    let store = MemStore::new();
    let a = named_node(&store, "nrel_main_idtf");
    assert_eq!(system_identifier(&store, a).unwrap(), "nrel_main_idtf");
}

#[test]
fn test_identifier_falls_back_to_address() {
    let store = MemStore::new();
    let a = store.create_node(ElementType::NODE_CONST).unwrap();
    let link = store.create_link().unwrap();

    assert_eq!(system_identifier(&store, a).unwrap(), a.to_string());
    assert_eq!(system_identifier(&store, link).unwrap(), link.to_string());
    assert_eq!(system_identifier(&store, a).unwrap(), "0|1");
}

#[test]
fn test_identifier_of_named_link() {
    let store = MemStore::new();
    let link = store.create_link().unwrap();
    store.set_system_identifier(link, "content").unwrap();
    assert_eq!(system_identifier(&store, link).unwrap(), "content");
}

#[test]
fn test_identifier_of_nested_edges() {
    let store = MemStore::new();
    let a = named_node(&store, "a");
    let b = named_node(&store, "b");
    let role = named_node(&store, "rrel_1");
    let arc = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, a, b)
        .unwrap();
    let tag = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, role, arc)
        .unwrap();
    let meta = store
        .create_edge(ElementType::ARC_COMMON_CONST, tag, arc)
        .unwrap();

    assert_eq!(system_identifier(&store, arc).unwrap(), "(a->b)");
    assert_eq!(system_identifier(&store, tag).unwrap(), "(rrel_1->(a->b))");
    assert_eq!(
        system_identifier(&store, meta).unwrap(),
        "((rrel_1->(a->b))->(a->b))"
    );
}

#[test]
fn test_identifier_of_missing_element() {
    let store = MemStore::new();
    assert!(matches!(
        system_identifier(&store, ElementAddr::new(4, 4)),
        Err(SemNetError::Store(_))
    ));
}

#[test]
fn test_write_info_counts_and_glyphs() {
    let store = MemStore::new();
    let x = named_node(&store, "x");
    let a = named_node(&store, "a");
    let b = named_node(&store, "b");
    let c = named_node(&store, "c");
    let d = named_node(&store, "d");

    let in_access = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, a, x)
        .unwrap();
    let in_common = store
        .create_edge(ElementType::ARC_COMMON_CONST, b, x)
        .unwrap();
    let out_access = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, x, c)
        .unwrap();
    let out_common = store
        .create_edge(ElementType::ARC_COMMON_CONST, x, d)
        .unwrap();
    let cd = store
        .create_edge(ElementType::ARC_COMMON_CONST, c, d)
        .unwrap();
    let out_to_edge = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, x, cd)
        .unwrap();

    let (text, summary) = render(&store, x);

    assert_eq!(
        summary,
        NeighborhoodSummary {
            incoming: 2,
            outgoing: 3
        }
    );

    let expected = format!(
        "x\n\
         Input arcs:\n\
         \t{in_access} <- a\n\
         \t{in_common} <= b\n\
         Total input arcs: 2\n\
         Output arcs:\n\
         \t{out_access} -> c\n\
         \t{out_common} => d\n\
         \t{out_to_edge} -> (c->d)\n\
         Total output arcs: 3\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_write_info_section_line_counts() {
    let store = MemStore::new();
    let x = named_node(&store, "x");
    for i in 0..2 {
        let src = named_node(&store, &format!("in_{}", i));
        store
            .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, src, x)
            .unwrap();
    }
    for i in 0..3 {
        let trg = named_node(&store, &format!("out_{}", i));
        store
            .create_edge(ElementType::EDGE_COMMON | ElementType::CONST, x, trg)
            .unwrap();
    }

    let (text, _) = render(&store, x);
    let lines: Vec<&str> = text.lines().collect();

    let input = lines.iter().position(|l| *l == "Input arcs:").unwrap();
    let input_total = lines
        .iter()
        .position(|l| *l == "Total input arcs: 2")
        .unwrap();
    let output = lines.iter().position(|l| *l == "Output arcs:").unwrap();
    let output_total = lines
        .iter()
        .position(|l| *l == "Total output arcs: 3")
        .unwrap();

    assert_eq!(input_total - input - 1, 2);
    assert_eq!(output_total - output - 1, 3);
    assert!(lines[output + 1..output_total]
        .iter()
        .all(|l| l.contains(" => out_")));
}

#[test]
fn test_write_info_on_edge_element() {
    let store = MemStore::new();
    let a = named_node(&store, "a");
    let b = named_node(&store, "b");
    let role = named_node(&store, "rrel_2");
    let arc = store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, a, b)
        .unwrap();
    store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, role, arc)
        .unwrap();

    let (text, summary) = render(&store, arc);

    assert!(text.starts_with("(a->b)\n"));
    assert!(text.contains(" <- rrel_2\n"));
    assert_eq!(
        summary,
        NeighborhoodSummary {
            incoming: 1,
            outgoing: 0
        }
    );
}

#[test]
fn test_write_info_isolated_element() {
    let store = MemStore::new();
    let x = named_node(&store, "lonely");

    let (text, summary) = render(&store, x);
    assert_eq!(
        text,
        "lonely\nInput arcs:\nTotal input arcs: 0\nOutput arcs:\nTotal output arcs: 0\n"
    );
    assert_eq!(summary, NeighborhoodSummary::default());
}

#[test]
fn test_write_info_requires_existing_element() {
    let store = MemStore::new();
    let x = named_node(&store, "gone");
    store.erase_element(x).unwrap();

    let mut out = Vec::new();
    match write_info(&store, x, &mut out) {
        Err(SemNetError::ElementNotFound { addr }) => assert_eq!(addr, x),
        other => panic!("Expected ElementNotFound, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_print_info_to_stdout() {
    let store = MemStore::new();
    let x = named_node(&store, "x");
    let y = named_node(&store, "y");
    store
        .create_edge(ElementType::ARC_ACCESS_CONST_POS_PERM, x, y)
        .unwrap();

    let summary = print_info(&store, x).unwrap();
    assert_eq!(summary.outgoing, 1);
    assert!(print_info(&store, ElementAddr::new(9, 9)).is_err());
}

#[test]
fn test_diagnostic_hooks_do_not_panic() {
    init_tracing();
    let store = MemStore::new();
    let operator = named_node(&store, "broken_operator");

    log_unknown_operator_type(&store, operator);
    log_scp_error(&store, "Missing operand", operator);
    // Missing elements fall back to the raw address
    log_scp_error(&store, "Dangling reference", ElementAddr::new(8, 8));
}

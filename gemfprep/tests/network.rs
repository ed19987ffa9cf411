use gemfprep::io::network::{ContactNetwork, Directionality};
use gemfprep::TranslateError;

fn edges_text(net: &ContactNetwork) -> String {
    let mut buf = Vec::new();
    net.write_edges(&mut buf).expect("write edges");
    String::from_utf8(buf).expect("utf8")
}

#[test]
fn undirected_edge_expands_to_both_directions() {
    let input = "NODE\ta\t.\nNODE\tb\t.\nEDGE\ta\tb\t.\tu\n";
    let net = ContactNetwork::read(input.as_bytes()).expect("valid network");

    assert_eq!(net.nodes.lookup("a").unwrap(), 1);
    assert_eq!(net.nodes.lookup("b").unwrap(), 2);
    assert_eq!(net.edges.len(), 1);
    assert_eq!(net.edges[0].directionality, Directionality::Undirected);
    assert_eq!(edges_text(&net), "1\t2\n2\t1\n");
}

#[test]
fn directed_edges_keep_file_order() {
    let input = "\
# contact network
NODE\tx\tage=3
NODE\ty\t.

NODE\tz\t.
EDGE\tz\tx\tw=1\td
EDGE\tx\ty\t.\tu
EDGE\ty\tz\t.\td
";
    let net = ContactNetwork::read(input.as_bytes()).expect("valid network");
    assert_eq!(net.nodes.len(), 3);
    assert_eq!(
        net.directed_edges().collect::<Vec<_>>(),
        vec![(3, 1), (1, 2), (2, 1), (2, 3)]
    );
    assert_eq!(edges_text(&net), "3\t1\n1\t2\n2\t1\n2\t3\n");
}

#[test]
fn labels_and_flags_are_trimmed() {
    let input = "NODE\t a \t.\r\nNODE\tb\t.\r\nEDGE\ta\t b\t.\td \r\n";
    let net = ContactNetwork::read(input.as_bytes()).expect("valid network");
    assert_eq!(net.directed_edges().collect::<Vec<_>>(), vec![(1, 2)]);
}

#[test]
fn duplicate_node_is_rejected() {
    let input = "NODE\ta\t.\nNODE\ta\t.\n";
    match ContactNetwork::read(input.as_bytes()) {
        Err(TranslateError::DuplicateNode { line, label }) => {
            assert_eq!(line, 2);
            assert_eq!(label, "a");
        }
        other => panic!("expected DuplicateNode, got {other:?}"),
    }
}

#[test]
fn edge_before_node_declaration_is_rejected() {
    let input = "NODE\ta\t.\nEDGE\ta\tb\t.\td\nNODE\tb\t.\n";
    match ContactNetwork::read(input.as_bytes()) {
        Err(TranslateError::UnknownNode { line, label }) => {
            assert_eq!(line, 2);
            assert_eq!(label, "b");
        }
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn error_lines_count_skipped_comment_and_blank_lines() {
    let input = "NODE\ta\t.\n# second node\n\nNODE\tb\t.\n\n# oops\nNODE\ta\t.\n";
    match ContactNetwork::read(input.as_bytes()) {
        Err(TranslateError::DuplicateNode { line, label }) => {
            assert_eq!(line, 7);
            assert_eq!(label, "a");
        }
        other => panic!("expected DuplicateNode, got {other:?}"),
    }

    let input = "NODE\ta\t.\n\n# edges\nEDGE\ta\tc\t.\td\n";
    match ContactNetwork::read(input.as_bytes()) {
        Err(TranslateError::UnknownNode { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn unknown_directionality_is_rejected() {
    let input = "NODE\ta\t.\nNODE\tb\t.\nEDGE\ta\tb\t.\tboth\n";
    match ContactNetwork::read(input.as_bytes()) {
        Err(TranslateError::InvalidDirectionality { value, .. }) => assert_eq!(value, "both"),
        other => panic!("expected InvalidDirectionality, got {other:?}"),
    }
}

#[test]
fn unrecognised_rows_are_malformed() {
    for input in [
        "VERTEX\ta\t.\n",
        "NODE\ta\n",
        "NODE\ta\t.\textra\n",
        "NODE\ta\t.\nNODE\tb\t.\nEDGE\ta\tb\td\n",
    ] {
        match ContactNetwork::read(input.as_bytes()) {
            Err(TranslateError::MalformedRecord { .. }) => {}
            other => panic!("expected MalformedRecord for {input:?}, got {other:?}"),
        }
    }
}

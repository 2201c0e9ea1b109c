use vulcan_graph::{
    Anchor, EdgeKind, ExplicitEdge, LayoutOptions, Marker, SyntheticEdge, VersionRecord,
    build_graph, layout, synthesize_edges,
};

fn ids(edges: &[SyntheticEdge]) -> Vec<&str> {
    edges.iter().map(|e| e.id.as_str()).collect()
}

fn three_versions() -> Vec<VersionRecord> {
    vec![
        VersionRecord::root("v1"),
        VersionRecord::child("v2", "v1"),
        VersionRecord::child("v3", "v1"),
    ]
}

#[test]
fn edges_for_a_root_with_two_children() {
    let versions = three_versions();
    let nodes = layout(&versions, &LayoutOptions::default());
    let edges = synthesize_edges(&versions, &nodes);
    assert_eq!(ids(&edges), vec!["e-v1-v2", "e-v1-v3", "sibling-v2-v3"]);

    let parent = &edges[0];
    assert_eq!(parent.kind, EdgeKind::ParentChild);
    assert!(parent.animated);
    assert!(!parent.style.dashed);

    let sibling = &edges[2];
    assert_eq!(sibling.kind, EdgeKind::Sibling);
    assert!(!sibling.animated);
    assert!(sibling.style.dashed);
    assert_eq!(sibling.style.source_handle, Some(Anchor::Right));
    assert_eq!(sibling.style.target_handle, Some(Anchor::Left));
}

#[test]
fn sibling_edges_follow_dragged_positions() {
    let versions = three_versions();
    let mut nodes = layout(&versions, &LayoutOptions::default());
    for n in &mut nodes {
        if n.id == "v2" {
            n.position.x = 400.0;
        }
    }
    let edges = synthesize_edges(&versions, &nodes);
    assert_eq!(ids(&edges), vec!["e-v1-v2", "e-v1-v3", "sibling-v3-v2"]);
}

#[test]
fn sibling_edges_chain_adjacent_pairs_only() {
    let versions = vec![
        VersionRecord::root("r"),
        VersionRecord::child("a", "r"),
        VersionRecord::child("b", "r"),
        VersionRecord::child("c", "r"),
    ];
    let nodes = layout(&versions, &LayoutOptions::default());
    let siblings: Vec<_> = synthesize_edges(&versions, &nodes)
        .into_iter()
        .filter(|e| e.kind == EdgeKind::Sibling)
        .map(|e| e.id)
        .collect();
    assert_eq!(siblings, vec!["sibling-a-b", "sibling-b-c"]);
}

#[test]
fn roots_form_one_sibling_cohort() {
    let versions = vec![VersionRecord::root("x"), VersionRecord::root("y")];
    let nodes = layout(&versions, &LayoutOptions::default());
    assert_eq!(ids(&synthesize_edges(&versions, &nodes)), vec!["sibling-x-y"]);
}

#[test]
fn dangling_parent_emits_no_parent_edge() {
    let versions = vec![
        VersionRecord::root("v1"),
        VersionRecord::child("orphan", "missing"),
    ];
    let nodes = layout(&versions, &LayoutOptions::default());
    let edges = synthesize_edges(&versions, &nodes);
    assert!(edges.iter().all(|e| e.kind != EdgeKind::ParentChild));
    assert!(
        edges
            .iter()
            .all(|e| e.source != "missing" && e.target != "missing")
    );
}

#[test]
fn explicit_edges_carry_label_animation_and_marker() {
    let versions = vec![
        VersionRecord::root("v1"),
        VersionRecord::child("v2", "v1").with_explicit_edge(ExplicitEdge {
            target_id: "v1".to_string(),
            label: Some("merged into".to_string()),
            animated: Some(true),
        }),
        VersionRecord::root("v3").with_explicit_edge(ExplicitEdge::new("v2")),
    ];
    let nodes = layout(&versions, &LayoutOptions::default());
    let edges = synthesize_edges(&versions, &nodes);
    let explicit: Vec<_> = edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Explicit)
        .collect();
    assert_eq!(explicit.len(), 2);

    assert_eq!(explicit[0].id, "explicit-v2-v1");
    assert_eq!(explicit[0].label.as_deref(), Some("merged into"));
    assert!(explicit[0].animated);
    assert_eq!(explicit[0].style.marker_end, Some(Marker::ArrowClosed));

    assert_eq!(explicit[1].id, "explicit-v3-v2");
    assert_eq!(explicit[1].label, None);
    assert!(!explicit[1].animated);
}

#[test]
fn explicit_edge_to_a_missing_target_is_omitted() {
    let versions =
        vec![VersionRecord::root("v1").with_explicit_edge(ExplicitEdge::new("nowhere"))];
    let nodes = layout(&versions, &LayoutOptions::default());
    assert!(synthesize_edges(&versions, &nodes).is_empty());
}

#[test]
fn edges_touching_nodes_missing_from_the_layout_are_omitted() {
    let versions = three_versions();
    let nodes: Vec<_> = layout(&versions, &LayoutOptions::default())
        .into_iter()
        .filter(|n| n.id != "v3")
        .collect();
    assert_eq!(ids(&synthesize_edges(&versions, &nodes)), vec!["e-v1-v2"]);
}

#[test]
fn duplicate_explicit_edges_are_suppressed() {
    let versions = vec![
        VersionRecord::root("a")
            .with_explicit_edge(ExplicitEdge::new("b"))
            .with_explicit_edge(ExplicitEdge::new("b")),
        VersionRecord::root("b"),
    ];
    let nodes = layout(&versions, &LayoutOptions::default());
    assert_eq!(
        ids(&synthesize_edges(&versions, &nodes)),
        vec!["sibling-a-b", "explicit-a-b"]
    );
}

#[test]
fn synthesize_edges_is_idempotent() {
    let versions = three_versions();
    let nodes = layout(&versions, &LayoutOptions::default());
    assert_eq!(
        synthesize_edges(&versions, &nodes),
        synthesize_edges(&versions, &nodes)
    );
}

#[test]
fn edges_serialize_in_renderer_shape() {
    let versions = three_versions();
    let graph = build_graph(&versions, &LayoutOptions::default()).unwrap();
    let json = serde_json::to_value(&graph.edges[2]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "sibling-v2-v3",
            "source": "v2",
            "target": "v3",
            "kind": "sibling",
            "animated": false,
            "dashed": true,
            "sourceHandle": "right",
            "targetHandle": "left",
        })
    );
    let node = serde_json::to_value(&graph.nodes[0]).unwrap();
    assert_eq!(
        node,
        serde_json::json!({
            "id": "v1",
            "position": { "x": 0.0, "y": 0.0 },
            "depth": 0,
            "data": {},
        })
    );
}

#[test]
fn versions_parse_from_camel_case_json() {
    let versions = vulcan_graph::parse_versions(
        r#"[
            { "id": "v1", "parentId": null },
            { "id": "v2", "parentId": "v1", "explicitEdges": [{ "targetId": "v1", "label": "fork" }] }
        ]"#,
    )
    .unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[1].parent_id.as_deref(), Some("v1"));
    assert_eq!(versions[1].explicit_edges[0].label.as_deref(), Some("fork"));
}

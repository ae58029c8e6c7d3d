// Tests for the prompt-to-graph pipeline

use netsketch_core::{
    ConnectorSet, Diagnostic, Edge, Extractor, GraphRenderer, MermaidRenderer, Provenance,
    Vocabulary, normalize,
};
use std::sync::Arc;

fn extractor() -> Extractor {
    Extractor::with_default_tables().unwrap()
}

fn edge_pairs(extractor: &Extractor, prompt: &str) -> Vec<(String, String)> {
    extractor
        .extract(prompt)
        .graph
        .edges()
        .map(|e| (e.from, e.to))
        .collect()
}

fn pair(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_lowercases_and_strips_punctuation() {
    assert_eq!(normalize("  Router, connected to Firewall.  "), "router connected to firewall");
}

#[test]
fn test_normalize_keeps_hyphens_and_inner_spacing() {
    assert_eq!(normalize("Edge-Router  to VPN"), "edge-router  to vpn");
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "",
        "   ",
        "Router connected to Firewall.",
        " . , Cloud, then to LAPTOP ,. ",
        "Wireless Access Point joins the App Gateway",
        "ÜBER-Server. ",
    ];

    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
    }
}

// ============================================================================
// Edge Parsing Tests
// ============================================================================

#[test]
fn test_extract_simple_chain() {
    let extraction = extractor().extract("Router connected to Firewall then to Laptop");

    assert_eq!(extraction.provenance, Provenance::Parsed);
    assert!(!extraction.is_fallback());
    assert_eq!(
        extraction.graph.nodes().collect::<Vec<_>>(),
        vec!["Router", "Firewall", "Laptop"]
    );
    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Router", "Firewall"), Edge::new("Firewall", "Laptop")]
    );
}

#[test]
fn test_extract_longer_connector_takes_precedence() {
    let ex = extractor();
    let fragments = ex.segmenter().segment(&normalize("Router and then to Firewall"));

    assert_eq!(fragments, vec!["router", "firewall"]);
    assert_eq!(
        edge_pairs(&ex, "Router and then to Firewall"),
        vec![pair("Router", "Firewall")]
    );
}

#[test]
fn test_extract_every_default_connector() {
    let ex = extractor();
    let connectors = [
        "connected to",
        "connects to",
        "linked to",
        "joins",
        "talks to",
        "communicates with",
        "connects with",
        "and then to",
        "then to",
    ];

    for connector in connectors {
        let prompt = format!("Laptop {} Server", connector);
        assert_eq!(
            edge_pairs(&ex, &prompt),
            vec![pair("Laptop", "Server")],
            "connector {:?}",
            connector
        );
    }
}

#[test]
fn test_extract_aliases_resolve_to_canonical_label() {
    let extraction = extractor().extract("The cloud connects to our firewall");

    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Internet", "Firewall")]
    );
    // Node order follows the vocabulary, not the prompt
    assert_eq!(
        extraction.graph.nodes().collect::<Vec<_>>(),
        vec!["Firewall", "Internet"]
    );
}

#[test]
fn test_extract_multi_word_aliases() {
    let extraction = extractor().extract("App Gateway connects to a wireless access point");

    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("App Gateway", "WAP")]
    );
}

#[test]
fn test_extract_first_vocabulary_match_wins_within_fragment() {
    let extraction = extractor().extract("router and firewall connected to laptop");

    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Router", "Laptop")]
    );
    // The firewall is still discovered as a node
    assert!(extraction.graph.contains_node("Firewall"));
}

#[test]
fn test_extract_parallel_edges_are_kept() {
    let pairs = edge_pairs(
        &extractor(),
        "router connected to firewall then to router connected to firewall",
    );

    assert_eq!(
        pairs,
        vec![
            pair("Router", "Firewall"),
            pair("Firewall", "Router"),
            pair("Router", "Firewall"),
        ]
    );
}

#[test]
fn test_extract_self_loop() {
    let extraction = extractor().extract("Server talks to server");

    let edges: Vec<Edge> = extraction.graph.edges().collect();
    assert_eq!(edges.len(), 1);
    assert!(edges[0].is_self_loop());
    assert_eq!(extraction.graph.node_count(), 1);
}

// ============================================================================
// Word Boundary Tests
// ============================================================================

#[test]
fn test_keyword_inside_larger_word_does_not_match() {
    let ex = extractor();

    assert_eq!(ex.matcher().find_first_keyword("Routersmith"), None);
    assert!(ex.matcher().find_all_keywords("routersmith and clientele").is_empty());
}

#[test]
fn test_keyword_with_larger_word_yields_no_edge() {
    let extraction = extractor().extract("Routersmith connected to Firewall");

    assert_eq!(extraction.graph.edge_count(), 0);
    assert_eq!(extraction.graph.nodes().collect::<Vec<_>>(), vec!["Firewall"]);
}

#[test]
fn test_keyword_next_to_hyphen_matches() {
    assert_eq!(extractor().matcher().find_first_keyword("edge-router"), Some("router"));
}

// ============================================================================
// Unresolved Pair Tests
// ============================================================================

#[test]
fn test_unresolved_pair_is_skipped() {
    let extraction = extractor().extract("Router connected to Blorp");

    assert_eq!(extraction.graph.edge_count(), 0);
    assert_eq!(extraction.graph.nodes().collect::<Vec<_>>(), vec!["Router"]);
    assert_eq!(extraction.provenance, Provenance::NodesOnly);
    assert_eq!(
        extraction.diagnostics,
        vec![Diagnostic::UnresolvedPair {
            index: 0,
            from: "router".to_string(),
            to: "blorp".to_string(),
        }]
    );
}

#[test]
fn test_partial_prompt_keeps_resolved_pairs() {
    let extraction = extractor().extract("Laptop connected to Blorp then to Router connected to VPN");

    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Router", "VPN")]
    );
    assert_eq!(extraction.diagnostics.len(), 2);
    assert_eq!(extraction.provenance, Provenance::Parsed);
}

#[test]
fn test_consecutive_connectors_leave_empty_fragment() {
    let ex = extractor();
    let fragments = ex
        .segmenter()
        .segment(&normalize("router connected to connected to firewall"));

    assert_eq!(fragments, vec!["router", "", "firewall"]);

    let extraction = ex.extract("router connected to connected to firewall");
    let unresolved = extraction
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnresolvedPair { .. }))
        .count();
    assert_eq!(unresolved, 2);
}

// ============================================================================
// Fallback Chain Tests
// ============================================================================

#[test]
fn test_fallback_chain_without_connectors() {
    let extraction = extractor().extract("Router Firewall Laptop");

    assert!(extraction.is_fallback());
    assert_eq!(extraction.provenance, Provenance::FallbackChain);
    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Router", "Firewall"), Edge::new("Firewall", "Laptop")]
    );
    assert!(extraction.diagnostics.contains(&Diagnostic::FallbackChain {
        nodes: vec![
            "Router".to_string(),
            "Firewall".to_string(),
            "Laptop".to_string()
        ],
    }));
}

#[test]
fn test_no_fallback_for_single_device() {
    let extraction = extractor().extract("just a laptop");

    assert!(!extraction.is_fallback());
    assert_eq!(extraction.graph.node_count(), 1);
    assert_eq!(extraction.graph.edge_count(), 0);
}

#[test]
fn test_no_fallback_when_an_edge_was_parsed() {
    let extraction = extractor().extract("MFA and a VPN, the router connected to the firewall");

    assert!(!extraction.is_fallback());
    assert_eq!(extraction.graph.edge_count(), 1);
}

// ============================================================================
// Empty Input Tests
// ============================================================================

#[test]
fn test_empty_prompt_yields_empty_graph() {
    for prompt in ["", "   ", "\n\t", ".,.,"] {
        let extraction = extractor().extract(prompt);
        assert!(extraction.is_empty(), "prompt {:?}", prompt);
        assert_eq!(extraction.graph.edge_count(), 0);
        assert_eq!(extraction.provenance, Provenance::Empty);
        assert!(extraction.diagnostics.is_empty());
    }
}

#[test]
fn test_keyword_free_prompt_yields_empty_graph() {
    let extraction = extractor().extract("the quick brown fox connected to the lazy dog");

    assert!(extraction.is_empty());
    assert_eq!(extraction.provenance, Provenance::Empty);
}

// ============================================================================
// Determinism and Custom Table Tests
// ============================================================================

#[test]
fn test_pipeline_is_deterministic() {
    let prompt = "Cloud connects to Router and then to Firewall, then to Server talks to Client";
    let renderer = MermaidRenderer::new();

    let first = extractor().render(prompt, &renderer);
    let second = extractor().render(prompt, &renderer);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&extractor().extract(prompt)).unwrap();
    let second_json = serde_json::to_string(&extractor().extract(prompt)).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_custom_tables() {
    let vocabulary = Vocabulary::from_pairs(&[("switch", "Switch"), ("ap", "Access Point")]).unwrap();
    let connectors = ConnectorSet::new(["feeds"]).unwrap();
    let ex = Extractor::new(vocabulary, connectors).unwrap();

    let extraction = ex.extract("Switch feeds AP");
    assert_eq!(
        extraction.graph.edges().collect::<Vec<_>>(),
        vec![Edge::new("Switch", "Access Point")]
    );

    // Default devices are unknown to the custom table
    assert!(ex.extract("router connected to firewall").is_empty());
}

#[test]
fn test_no_connectors_always_falls_back() {
    let ex = Extractor::new(Vocabulary::default(), ConnectorSet::new(Vec::<String>::new()).unwrap())
        .unwrap();

    let extraction = ex.extract("router connected to firewall");
    assert!(extraction.is_fallback());
    assert_eq!(extraction.graph.edge_count(), 1);
}

#[test]
fn test_extractor_shared_across_threads() {
    let ex = Arc::new(extractor());
    let expected = MermaidRenderer::new().render(&ex.extract("router connected to vpn").graph);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ex = Arc::clone(&ex);
            std::thread::spawn(move || MermaidRenderer::new().render(&ex.extract("router connected to vpn").graph))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_extraction_serializes_to_json() {
    let extraction = extractor().extract("Router connected to Firewall");
    let json = serde_json::to_value(&extraction).unwrap();

    assert_eq!(json["graph"]["nodes"], serde_json::json!(["Router", "Firewall"]));
    assert_eq!(
        json["graph"]["edges"],
        serde_json::json!([{ "from": "Router", "to": "Firewall" }])
    );
    assert_eq!(json["provenance"], "parsed");
    assert!(json.get("diagnostics").is_none());
}

#[test]
fn test_fallback_extraction_json_carries_diagnostic() {
    let json = serde_json::to_value(extractor().extract("router vpn")).unwrap();

    assert_eq!(json["provenance"], "fallback_chain");
    assert_eq!(json["diagnostics"][0]["kind"], "fallback_chain");
    assert_eq!(json["diagnostics"][0]["nodes"], serde_json::json!(["Router", "VPN"]));
}

use dnsmap_application::use_cases::{ExploreDomainUseCase, ExploreSettings};
use dnsmap_domain::{DomainError, EdgeOrigin, LookupFailure, RecordType, Termination};
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{d, MockRecordResolver};

fn use_case(resolver: &MockRecordResolver) -> ExploreDomainUseCase {
    ExploreDomainUseCase::new(Arc::new(resolver.clone()), ExploreSettings::default())
}

#[tokio::test]
async fn test_explores_mail_and_spf_infrastructure() {
    let resolver = MockRecordResolver::new()
        .with_records("example.com", RecordType::MX, &["10 mail.example.com."])
        .with_records(
            "example.com",
            RecordType::TXT,
            &["\"v=spf1 include:spf.example.net redirect=foo.example.org\""],
        )
        .with_records("mail.example.com", RecordType::A, &["192.0.2.25"]);

    let report = use_case(&resolver).execute("example.com", 2).await.unwrap();
    let graph = &report.outcome.graph;

    assert_eq!(report.start, d("example.com"));
    assert_eq!(graph.layer_of(&d("example.com")), Some(1));
    assert_eq!(graph.layer_of(&d("mail.example.com")), Some(2));
    assert_eq!(graph.layer_of(&d("spf.example.net")), Some(2));
    assert_eq!(graph.layer_of(&d("foo.example.org")), Some(2));
    assert_eq!(report.layers.len(), 2);
    assert_eq!(report.outcome.completed_layers, 2);
    assert_eq!(report.outcome.termination, Termination::LayerBound);
    assert!(report.outcome.unexplored.contains(&d("example.net")));
}

#[tokio::test]
async fn test_each_domain_is_resolved_once() {
    let resolver = MockRecordResolver::new()
        .with_records("a.test", RecordType::NS, &["b.test", "c.test"])
        .with_records("b.test", RecordType::CNAME, &["c.test"])
        .with_records("c.test", RecordType::MX, &["10 a.test", "20 b.test"]);

    let report = use_case(&resolver).execute("a.test", 10).await.unwrap();

    assert_eq!(report.outcome.graph.node_count(), 3);
    for name in ["a.test", "b.test", "c.test"] {
        assert_eq!(resolver.call_count(name), 1, "{} resolved more than once", name);
    }
    assert_eq!(resolver.calls().len(), 3);
    assert_eq!(report.outcome.termination, Termination::FrontierExhausted);
}

#[tokio::test]
async fn test_unresolvable_start_still_reports_one_node() {
    let resolver = MockRecordResolver::new()
        .with_failure("gone.example", RecordType::A, LookupFailure::NxDomain)
        .with_failure("gone.example", RecordType::NS, LookupFailure::Timeout);

    let report = use_case(&resolver).execute("gone.example", 3).await.unwrap();

    assert_eq!(report.outcome.graph.node_count(), 1);
    assert_eq!(report.outcome.graph.edge_count(), 0);
    assert_eq!(report.outcome.completed_layers, 1);
    assert_eq!(report.lookups().failed, 2);
    assert_eq!(report.lookups().answered, 0);
}

#[tokio::test]
async fn test_failed_types_do_not_hide_parent_edge() {
    let resolver = MockRecordResolver::new()
        .with_failure("www.shop.example", RecordType::CNAME, LookupFailure::Timeout);

    let report = use_case(&resolver).execute("www.shop.example", 2).await.unwrap();
    let edges = report.outcome.graph.edges();

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].source, d("www.shop.example"));
    assert_eq!(edges[0].target, d("shop.example"));
    assert_eq!(edges[0].via, EdgeOrigin::Parent);
}

#[tokio::test]
async fn test_completion_order_does_not_change_graph() {
    let build = |slow: &str| {
        MockRecordResolver::new()
            .with_records("hub.test", RecordType::NS, &["ns-a.test", "ns-b.test"])
            .with_records("ns-a.test", RecordType::CNAME, &["shared.test"])
            .with_records("ns-b.test", RecordType::CNAME, &["shared.test"])
            .with_delay(slow, Duration::from_millis(30))
    };

    let slow_a = build("ns-a.test");
    let slow_b = build("ns-b.test");

    let first = use_case(&slow_a).execute("hub.test", 3).await.unwrap();
    let second = use_case(&slow_b).execute("hub.test", 3).await.unwrap();

    assert_eq!(first.outcome.graph, second.outcome.graph);
    let sources: Vec<&str> = first
        .outcome
        .graph
        .edges()
        .iter()
        .filter(|e| e.target == d("shared.test"))
        .map(|e| e.source.as_str())
        .collect();
    assert_eq!(sources, vec!["ns-a.test", "ns-b.test"]);
}

#[tokio::test]
async fn test_configured_types_are_requested() {
    let resolver = MockRecordResolver::new();
    let settings = ExploreSettings {
        record_types: vec![RecordType::NS, RecordType::MX],
        query_timeout: Duration::from_millis(200),
        concurrency: 1,
    };

    ExploreDomainUseCase::new(Arc::new(resolver.clone()), settings)
        .execute("example.com", 1)
        .await
        .unwrap();

    assert_eq!(resolver.requested_types(), vec![RecordType::NS, RecordType::MX]);
}

#[tokio::test]
async fn test_invalid_run_is_rejected_before_resolving() {
    let resolver = MockRecordResolver::new();
    let explore = use_case(&resolver);

    let zero = explore.execute("example.com", 0).await;
    assert!(matches!(zero, Err(DomainError::ConfigError(_))));

    let empty = explore.execute("", 3).await;
    assert!(matches!(empty, Err(DomainError::ConfigError(_))));

    let no_types = ExploreDomainUseCase::new(
        Arc::new(resolver.clone()),
        ExploreSettings {
            record_types: vec![],
            ..ExploreSettings::default()
        },
    )
    .execute("example.com", 2)
    .await;
    assert!(matches!(no_types, Err(DomainError::ConfigError(_))));

    assert!(resolver.calls().is_empty());
}

#[tokio::test]
async fn test_layer_reports_keep_records() {
    let resolver = MockRecordResolver::new()
        .with_records("mail.example.com", RecordType::MX, &["5 mx1.provider.net"]);

    let report = use_case(&resolver)
        .execute("mail.example.com", 2)
        .await
        .unwrap();

    let first = &report.layers[0];
    assert_eq!(first.summary.layer, 1);
    assert_eq!(first.summary.resolved, vec![d("mail.example.com")]);
    assert_eq!(
        first.records[&d("mail.example.com")].values(RecordType::MX),
        ["5 mx1.provider.net".to_string()]
    );

    let second = &report.layers[1];
    assert_eq!(
        second.summary.resolved,
        vec![d("example.com"), d("mx1.provider.net")]
    );
}

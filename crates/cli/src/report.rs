use dnsmap_application::use_cases::{ExplorationReport, ExportedFile, LayerReport};
use dnsmap_domain::{RecordSet, Termination};
use std::fmt::Write;

const VALUES_SHOWN: usize = 3;

pub fn print_exploration(report: &ExplorationReport) {
    print!("{}", render_exploration(report));
}

pub fn print_exports(exported: &[ExportedFile]) {
    for file in exported {
        match &file.result {
            Ok(path) => println!("Exported {}: {}", file.format, path.display()),
            Err(e) => println!("Export {} failed: {}", file.format, e),
        }
    }
}

fn render_exploration(report: &ExplorationReport) -> String {
    let mut out = String::new();

    for layer in &report.layers {
        render_layer(&mut out, layer);
    }

    let outcome = &report.outcome;
    let domains = outcome.graph.sorted_domains();
    let lookups = report.lookups();

    let _ = writeln!(
        out,
        "\nExplored {} layer(s) from {} in {:.2?}: {} domains, {} edges",
        outcome.completed_layers,
        report.start,
        report.elapsed,
        domains.len(),
        outcome.graph.edge_count()
    );
    let _ = writeln!(
        out,
        "Lookups: {} answered, {} empty, {} failed",
        lookups.answered, lookups.empty, lookups.failed
    );
    match outcome.termination {
        Termination::FrontierExhausted => {
            let _ = writeln!(out, "Stopped: no new domains left to explore");
        }
        Termination::LayerBound => {
            let _ = writeln!(
                out,
                "Stopped at layer bound; {} domain(s) left unexplored",
                outcome.unexplored.len()
            );
        }
    }

    let _ = writeln!(out, "\nDiscovered domains:");
    for domain in domains {
        let _ = writeln!(out, "  {}", domain);
    }

    out
}

fn render_layer(out: &mut String, layer: &LayerReport) {
    let summary = &layer.summary;
    let _ = writeln!(
        out,
        "\n=== Layer {} ({} domain(s), {} new) ===",
        summary.layer,
        summary.resolved.len(),
        summary.discovered
    );

    for domain in &summary.resolved {
        let _ = writeln!(out, "{}", domain);
        match layer.records.get(domain) {
            Some(records) if !records.is_empty() => render_records(out, records),
            _ => {
                let _ = writeln!(out, "  (no records)");
            }
        }
    }
}

fn render_records(out: &mut String, records: &RecordSet) {
    for (record_type, values) in records.answered() {
        let shown = values
            .iter()
            .take(VALUES_SHOWN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let more = values.len().saturating_sub(VALUES_SHOWN);
        if more > 0 {
            let _ = writeln!(out, "  {:<5} {} (+{} more)", record_type.as_str(), shown, more);
        } else {
            let _ = writeln!(out, "  {:<5} {}", record_type.as_str(), shown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsmap_domain::{discover_with, DomainName, RecordType};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn d(name: &str) -> DomainName {
        DomainName::parse(name).unwrap()
    }

    fn sample_report() -> ExplorationReport {
        let mx = RecordSet::new().with_values(
            RecordType::MX,
            [
                "10 mx1.example.net",
                "20 mx2.example.net",
                "30 mx3.example.net",
                "40 mx4.example.net",
            ],
        );
        let outcome = discover_with("example.com", 1, |_| mx.clone()).unwrap();
        let summary = dnsmap_domain::LayerSummary {
            layer: 1,
            resolved: vec![d("example.com")],
            discovered: 4,
            lookups: mx.tally(),
        };
        let mut records = BTreeMap::new();
        records.insert(d("example.com"), mx.clone());

        ExplorationReport {
            start: d("example.com"),
            outcome,
            layers: vec![LayerReport { summary, records }],
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_layer_shows_first_three_values() {
        let text = render_exploration(&sample_report());

        assert!(text.contains("=== Layer 1 (1 domain(s), 4 new) ==="));
        assert!(text.contains(
            "10 mx1.example.net, 20 mx2.example.net, 30 mx3.example.net (+1 more)"
        ));
        assert!(!text.contains("40 mx4.example.net"));
    }

    #[test]
    fn test_domain_without_answers_says_so() {
        let mut report = sample_report();
        let empty = RecordSet::new().with_values(RecordType::A, Vec::<String>::new());
        report.layers[0].records.insert(d("example.com"), empty);

        let text = render_exploration(&report);

        assert!(text.contains("example.com\n  (no records)\n"));
        assert!(!text.contains("MX"));
    }

    #[test]
    fn test_summary_lists_domains_and_bound() {
        let text = render_exploration(&sample_report());

        assert!(text.contains("Stopped at layer bound; 4 domain(s) left unexplored"));
        assert!(text.ends_with("Discovered domains:\n  example.com\n"));
    }
}

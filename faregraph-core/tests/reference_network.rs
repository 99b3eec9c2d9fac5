use faregraph_core::model::seed::reference_links;
use faregraph_core::prelude::*;

const EPSILON: f64 = 1e-9;

#[test]
fn cheapest_fare_from_tagoloan_to_indahag() {
    let graph = reference_network();
    let (path, cost) = graph
        .shortest_path("Tagoloan", "Indahag", Metric::Fare)
        .into_parts();

    assert_eq!(path, ["Tagoloan", "Carmen", "Iponan", "Indahag"]);
    assert!((cost - 95.0).abs() < EPSILON);
}

#[test]
fn shortest_distance_from_tagoloan_to_indahag() {
    let graph = reference_network();
    let result = graph.shortest_path("Tagoloan", "Indahag", Metric::Distance);

    assert_eq!(result.path(), ["Tagoloan", "Carmen", "Iponan", "Indahag"]);
    assert!((result.cost() - 62.0).abs() < EPSILON);
}

#[test]
fn unknown_place_gives_empty_path() {
    let graph = reference_network();
    let result = graph.shortest_path("Nowhere", "Gusa", Metric::Fare);

    assert_eq!(result, PathResult::NodeNotFound("Nowhere".to_string()));
    let (path, cost) = result.into_parts();
    assert!(path.is_empty());
    assert_eq!(cost, f64::INFINITY);
}

#[test]
fn every_place_reaches_itself_for_free() {
    let graph = reference_network();
    for id in graph.node_ids() {
        for metric in [Metric::Distance, Metric::Fare] {
            let (path, cost) = graph.shortest_path(id, id, metric).into_parts();
            assert_eq!(path, [id]);
            assert_eq!(cost, 0.0);
        }
    }
}

#[test]
fn costs_are_symmetric() {
    let graph = reference_network();
    let ids = graph.node_ids();

    for metric in [Metric::Distance, Metric::Fare] {
        for a in &ids {
            for b in &ids {
                let forward = graph.shortest_path(a, b, metric).cost();
                let backward = graph.shortest_path(b, a, metric).cost();
                assert!(
                    (forward - backward).abs() < EPSILON,
                    "{a} -> {b} by {metric}: {forward} vs {backward}"
                );
            }
        }
    }
}

#[test]
fn raising_a_used_fare_never_lowers_the_cost() {
    let raised = TransportGraph::from_links(reference_links().into_iter().map(|mut link| {
        if link.origin == "Carmen" && link.destination == "Iponan" {
            link.fare = 50.0;
        }
        link
    }));

    let (path, cost) = raised
        .shortest_path("Tagoloan", "Indahag", Metric::Fare)
        .into_parts();

    assert!(cost >= 95.0);
    assert!((cost - 100.0).abs() < EPSILON);
    assert_eq!(path, ["Tagoloan", "Balulang", "Pagatpat", "Taguanao", "Indahag"]);
}

#[test]
fn reports_match_route_costs() {
    let graph = reference_network();

    for start in graph.node_ids() {
        for metric in [Metric::Distance, Metric::Fare] {
            for route in graph.reachable_routes(start, metric).unwrap() {
                let exact = route.report(&graph).unwrap();
                assert!((exact.total(metric) - route.cost).abs() < EPSILON);

                // no parallel links in the reference network
                let by_name = graph.route_details(&route.nodes).unwrap();
                assert_eq!(by_name, exact);
            }
        }
    }
}

#[test]
fn all_paths_agree_with_single_queries() {
    let graph = reference_network();
    let paths = graph.all_shortest_paths("Gusa", Metric::Fare).unwrap();

    assert_eq!(paths.len(), graph.node_count() - 1);
    assert!(!paths.contains_key("Gusa"));
    for (target, result) in &paths {
        let single = graph.shortest_path("Gusa", target, Metric::Fare);
        assert!((single.cost() - result.cost()).abs() < EPSILON);
    }
}

#[test]
fn matrix_rows_follow_single_queries() {
    let graph = reference_network();
    let places = graph.node_ids();
    let matrix = graph.cost_matrix(&places, Metric::Distance).unwrap();

    for (i, from) in places.iter().enumerate() {
        for (j, to) in places.iter().enumerate() {
            let expected = graph.shortest_path(from, to, Metric::Distance).cost();
            let cost = matrix[i][j].unwrap();
            assert!((cost - expected).abs() < EPSILON);
        }
    }
}

#[test]
fn statistics_report_lists_rankings() {
    let statistics = reference_network().network_statistics();
    let report = statistics.to_string();

    assert_eq!(statistics.node_count, 8);
    assert_eq!(statistics.edge_count, 10);
    assert!(report.contains("TRANSPORTATION NETWORK ANALYSIS"));
    assert!(report.contains("Carmen"));
    assert_eq!(statistics.most_connected(1)[0].1, 3);
}

use u_dispatch::config::RoutingConfig;
use u_dispatch::constructive::{build_route, build_route_for, compare_strategies};
use u_dispatch::error::RoutingError;
use u_dispatch::evaluation::{ImpactReport, RouteEvaluator};
use u_dispatch::graph::{CostModel, LocationGraph};
use u_dispatch::models::{Stop, TravelLink};
use u_dispatch::objective::{EthicalRule, ObjectiveKind, PriorityObjective};

const EPS: f64 = 1e-6;

fn two_customer_graph() -> LocationGraph {
    LocationGraph::complete(vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
        Stop::customer(2, 8.0, 1.0, 12.0, 2.0),
    ])
    .expect("valid graph")
}

#[test]
fn test_two_customer_company_total_follows_formula() {
    let graph = two_customer_graph();
    let config = RoutingConfig::default();
    let (route, total) =
        build_route_for(&graph, 0, ObjectiveKind::Company, &config).expect("route");

    let evaluator = RouteEvaluator::new(&graph, &config);
    assert!(evaluator.is_well_formed(&route));

    // Recompute leg by leg with fee - 0.5 * distance, minus the return leg.
    let ids = route.stop_ids();
    let mut expected = 0.0;
    for w in ids.windows(2) {
        let to = graph.stop(w[1]).expect("known");
        let d = graph.distance(w[0], w[1]).expect("known");
        if to.is_depot() {
            expected -= 0.5 * d;
        } else {
            expected += to.delivery_fee() - 0.5 * d;
        }
    }
    assert!((total - expected).abs() < EPS);

    // Customer 2 scores 12 - 0.5*sqrt(65) = 7.969 against 7.5 for customer 1.
    assert_eq!(ids, &[0, 2, 1, 0]);
}

#[test]
fn test_empty_customer_graph() {
    let graph = LocationGraph::complete(vec![Stop::depot(0, 4.0, 4.0)]).expect("valid");
    for kind in ObjectiveKind::ALL {
        let (route, total) =
            build_route_for(&graph, 0, kind, &RoutingConfig::default()).expect("route");
        assert_eq!(route.stop_ids(), &[0, 0]);
        assert_eq!(total, 0.0);
    }
}

#[test]
fn test_exact_tie_picks_first_in_iteration_order() {
    let stops = vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 0.0, 3.0, 8.0, 2.0),
        Stop::customer(2, 0.0, -3.0, 8.0, 2.0),
        Stop::customer(3, 3.0, 0.0, 8.0, 2.0),
    ];
    let graph = LocationGraph::complete(stops.clone()).expect("valid");
    let (route, _) =
        build_route_for(&graph, 0, ObjectiveKind::Driver, &RoutingConfig::default()).expect("ok");
    assert_eq!(route.stop_ids()[1], 1);

    let links = vec![
        TravelLink::new(0, 3),
        TravelLink::new(0, 2),
        TravelLink::new(0, 1),
        TravelLink::new(1, 2),
        TravelLink::new(2, 3),
    ];
    let graph = LocationGraph::with_links(stops, links).expect("valid");
    let (route, _) =
        build_route_for(&graph, 0, ObjectiveKind::Driver, &RoutingConfig::default()).expect("ok");
    assert_eq!(route.stop_ids()[1], 3);
}

#[test]
fn test_disconnected_pockets_still_complete() {
    // Two islands: {0, 1, 2} and {3, 4}, with no link between them.
    let stops = vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 1.0, 0.0, 5.0, 1.0),
        Stop::customer(2, 2.0, 0.0, 5.0, 1.0),
        Stop::customer(3, 50.0, 0.0, 5.0, 1.0),
        Stop::customer(4, 51.0, 0.0, 5.0, 1.0),
    ];
    let links = vec![
        TravelLink::weighted(0, 1, 0.5),
        TravelLink::weighted(1, 2, 0.5),
        TravelLink::weighted(3, 4, 0.5),
    ];
    let graph = LocationGraph::with_links(stops, links).expect("valid");
    let config = RoutingConfig::default();
    let evaluator = RouteEvaluator::new(&graph, &config);

    for kind in ObjectiveKind::ALL {
        let (route, total) = build_route_for(&graph, 0, kind, &config).expect("route");
        assert!(evaluator.is_well_formed(&route), "{kind}: {:?}", route.stop_ids());
        assert_eq!(route.stop_ids(), &[0, 1, 2, 3, 4, 0]);
        let retraced = evaluator.retrace_value(&route, kind).expect("retrace");
        assert!((retraced - total).abs() < EPS);
    }
}

#[test]
fn test_unknown_ethical_rule_is_rejected() {
    for name in ["safety", "", "Driver-ish"] {
        match ObjectiveKind::ethical(name) {
            Err(RoutingError::UnsupportedObjective { name: got }) => assert_eq!(got, name),
            other => panic!("expected UnsupportedObjective for {name:?}, got {other:?}"),
        }
    }
    assert!("honesty".parse::<EthicalRule>().is_err());
}

#[test]
fn test_fairness_interleaves_low_tip_stops() {
    let graph = LocationGraph::complete(vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 1.0, 0.0, 10.0, 4.0),
        Stop::customer(2, 2.0, 0.0, 10.0, 4.0),
        Stop::customer(3, 3.0, 0.0, 10.0, 4.0),
        Stop::customer(4, 4.0, 0.0, 10.0, 2.5),
        Stop::customer(5, 5.0, 0.0, 10.0, 2.5),
    ])
    .expect("valid");
    let config = RoutingConfig::default();

    let (driver, driver_total) =
        build_route_for(&graph, 0, ObjectiveKind::Driver, &config).expect("ok");
    let (fair, fair_total) =
        build_route_for(&graph, 0, ObjectiveKind::Fairness, &config).expect("ok");

    assert_eq!(driver.stop_ids(), &[0, 1, 2, 3, 4, 5, 0]);
    assert_eq!(fair.stop_ids(), &[0, 1, 2, 4, 3, 5, 0]);
    assert!((driver_total - 62.0).abs() < EPS);
    assert!((fair_total - 61.0).abs() < EPS);

    let base = ImpactReport::analyze(&graph, &driver, &config).expect("ok");
    let ethical = ImpactReport::analyze(&graph, &fair, &config).expect("ok");
    assert!(ethical.tip_alternations > base.tip_alternations);
}

#[test]
fn test_fatigue_breaks_up_long_drives() {
    let graph = LocationGraph::complete(vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 16.0, 0.0, 20.0, 2.0),
        Stop::customer(2, 32.0, 0.0, 20.0, 2.5),
        Stop::customer(3, 18.0, 0.0, 14.0, 1.0),
    ])
    .expect("valid");
    let config = RoutingConfig::default();

    let (driver, _) = build_route_for(&graph, 0, ObjectiveKind::Driver, &config).expect("ok");
    let (tired, _) = build_route_for(&graph, 0, ObjectiveKind::Fatigue, &config).expect("ok");

    assert_eq!(driver.stop_ids(), &[0, 1, 2, 3, 0]);
    assert_eq!(tired.stop_ids(), &[0, 1, 3, 2, 0]);

    let base = ImpactReport::analyze(&graph, &driver, &config).expect("ok");
    let ethical = ImpactReport::analyze(&graph, &tired, &config).expect("ok");
    assert_eq!(base.max_consecutive_long_drives, 2);
    assert_eq!(ethical.max_consecutive_long_drives, 1);
    assert!(ethical.long_drives < base.long_drives);
}

#[test]
fn test_priority_pulls_urgent_stops_forward() {
    let graph = LocationGraph::complete(vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 1.0, 0.0, 10.0, 2.0).with_priority(4),
        Stop::customer(2, 2.0, 0.0, 10.0, 1.5).with_priority(1),
        Stop::customer(3, 3.0, 0.0, 10.0, 1.8).with_priority(5),
        Stop::customer(4, 4.0, 0.0, 10.0, 1.0).with_priority(2),
    ])
    .expect("valid");
    let config = RoutingConfig::default();

    let (driver, _) = build_route_for(&graph, 0, ObjectiveKind::Driver, &config).expect("ok");
    let (prio, _) = build_route_for(&graph, 0, ObjectiveKind::Priority, &config).expect("ok");

    assert_eq!(driver.stop_ids(), &[0, 1, 2, 3, 4, 0]);
    assert_eq!(prio.stop_ids(), &[0, 1, 2, 4, 3, 0]);

    let base = ImpactReport::analyze(&graph, &driver, &config).expect("ok");
    let ethical = ImpactReport::analyze(&graph, &prio, &config).expect("ok");
    assert_eq!(base.average_urgent_position, Some(2.0));
    assert_eq!(ethical.average_urgent_position, Some(1.5));
}

#[test]
fn test_priority_starvation_guard_serves_routine() {
    // Three urgent stops next to the depot; routine stop slightly less lucrative.
    let graph = LocationGraph::complete(vec![
        Stop::depot(0, 0.0, 0.0),
        Stop::customer(1, 1.0, 0.0, 10.0, 2.0).with_priority(1),
        Stop::customer(2, 2.0, 0.0, 10.0, 2.0).with_priority(1),
        Stop::customer(3, 3.0, 0.0, 10.0, 2.0).with_priority(2),
        Stop::customer(4, 4.0, 0.0, 10.0, 2.0).with_priority(1),
        Stop::customer(5, 4.0, 2.0, 10.0, 0.5).with_priority(4),
    ])
    .expect("valid");
    let config = RoutingConfig::default();

    let (driver, _) = build_route_for(&graph, 0, ObjectiveKind::Driver, &config).expect("ok");
    let mut objective = PriorityObjective::new(&config);
    let (prio, _) = build_route(&graph, 0, &mut objective, &CostModel::from_config(&config))
        .expect("ok");

    assert_eq!(driver.stop_ids(), &[0, 1, 2, 3, 4, 5, 0]);
    // After three urgent serves the routine stop gets +6 and jumps ahead of 4.
    assert_eq!(prio.stop_ids(), &[0, 1, 2, 3, 5, 4, 0]);
    assert_eq!(objective.served(), (4, 1));
}

#[test]
fn test_ethical_totals_equal_driver_retrace() {
    let graph = LocationGraph::with_links(
        vec![
            Stop::depot(0, 0.0, 0.0),
            Stop::customer(1, 3.0, 4.0, 10.0, 3.0).with_priority(1),
            Stop::customer(2, 8.0, 1.0, 12.0, 2.0).with_priority(4),
            Stop::customer(3, 20.0, 20.0, 15.0, 5.0).with_priority(2),
            Stop::customer(4, -6.0, 2.0, 7.0, 0.5).with_priority(5),
            Stop::customer(5, -18.0, -9.0, 9.0, 4.0).with_priority(3),
        ],
        vec![
            TravelLink::weighted(0, 1, 2.0),
            TravelLink::new(0, 4),
            TravelLink::weighted(1, 2, 3.0),
            TravelLink::new(2, 3),
            TravelLink::weighted(4, 5, 7.5),
        ],
    )
    .expect("valid");
    let config = RoutingConfig::default();
    let evaluator = RouteEvaluator::new(&graph, &config);

    let runs = compare_strategies(&graph, 0, &ObjectiveKind::ALL, &config).expect("ok");
    for run in &runs {
        assert!(evaluator.is_well_formed(&run.route));
        if run.kind.ethical_rule().is_some() {
            let retraced = evaluator
                .retrace_value(&run.route, ObjectiveKind::Driver)
                .expect("retrace");
            assert!((retraced - run.total_value).abs() < EPS, "{}", run.kind);
        }
    }
}

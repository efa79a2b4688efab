use heap_sssp::data_structures::QueueKind;
use heap_sssp::graph::generators::{dense_list, dense_matrix, random_graph, DenseGraphConfig};
use heap_sssp::graph::{AdjacencyList, AdjacencyMatrix, Graph, MutableGraph};
use heap_sssp::{Dijkstra, Error};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

fn check_mutations<G: MutableGraph<W>>(mut graph: G) {
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);

    graph.insert_edge(0, 1, OrderedFloat(2.0)).unwrap();
    graph.insert_edge(1, 2, OrderedFloat(3.0)).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));

    // inserting an existing edge overwrites the weight
    graph.insert_edge(0, 1, OrderedFloat(7.0)).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight(0, 1), Some(OrderedFloat(7.0)));

    let outgoing: Vec<_> = graph.outgoing_edges(0).collect();
    assert_eq!(outgoing, vec![(1, OrderedFloat(7.0))]);
    assert_eq!(graph.outgoing_edges(3).count(), 0);

    assert!(graph.remove_edge(0, 1));
    assert!(!graph.remove_edge(0, 1));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(0, 1), None);

    assert!(matches!(
        graph.insert_edge(0, 4, OrderedFloat(1.0)),
        Err(Error::InvalidVertex(4))
    ));
    assert!(matches!(
        graph.insert_edge(9, 0, OrderedFloat(1.0)),
        Err(Error::InvalidVertex(9))
    ));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_vertex(3));
    assert!(!graph.has_vertex(4));
}

#[test]
fn test_adjacency_list_mutations() {
    check_mutations(AdjacencyList::new(4));
}

#[test]
fn test_adjacency_matrix_mutations() {
    check_mutations(AdjacencyMatrix::new(4));
}

#[test]
fn test_from_edges_rejects_bad_vertex() {
    let result = AdjacencyList::from_edges(2, &[(0, 1, OrderedFloat(1.0)), (1, 2, OrderedFloat(1.0))]);
    assert!(matches!(result, Err(Error::InvalidVertex(2))));
}

#[test]
fn test_validate_non_negative() {
    let mut graph: AdjacencyMatrix<W> = AdjacencyMatrix::new(3);
    graph.insert_edge(0, 1, OrderedFloat(0.0)).unwrap();
    assert!(graph.validate_non_negative());
    graph.insert_edge(1, 2, OrderedFloat(-1.0)).unwrap();
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_dense_generator_is_deterministic() {
    let config = DenseGraphConfig {
        vertices: 60,
        seed: Some(11),
        ..Default::default()
    };
    let first = dense_matrix(&config).unwrap();
    let second = dense_matrix(&config).unwrap();
    let list = dense_list(&config).unwrap();

    assert!(first.edge_count() > 0);
    assert_eq!(first.edge_count(), second.edge_count());
    for v in 0..config.vertices {
        let a: Vec<_> = first.outgoing_edges(v).collect();
        let b: Vec<_> = second.outgoing_edges(v).collect();
        let c: Vec<_> = list.outgoing_edges(v).collect();
        assert_eq!(a, b);
        assert_eq!(a, c);
        // no self-loops, integer weights below the bound
        assert!(a.iter().all(|&(to, w)| to != v && w.0.fract() == 0.0 && w.0 < 1_000.0));
    }
    assert!(first.validate_non_negative());
}

#[test]
fn test_dense_generator_density() {
    let config = DenseGraphConfig {
        vertices: 400,
        max_step: 1,
        seed: Some(3),
        ..Default::default()
    };
    // a step of one links every ordered pair
    let graph = dense_list(&config).unwrap();
    assert_eq!(graph.edge_count(), 400 * 399);
}

#[test]
fn test_invalid_generator_config() {
    let config = DenseGraphConfig {
        max_step: 0,
        ..Default::default()
    };
    assert!(matches!(dense_matrix(&config), Err(Error::InvalidConfig(_))));

    let config = DenseGraphConfig {
        max_weight: 0,
        ..Default::default()
    };
    assert!(matches!(dense_list(&config), Err(Error::InvalidConfig(_))));

    assert!(matches!(random_graph(0, 2.0, Some(1)), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_random_graph_seeded() {
    let a = random_graph(100, 4.0, Some(5)).unwrap();
    let b = random_graph(100, 4.0, Some(5)).unwrap();
    assert_eq!(a.vertex_count(), 100);
    assert_eq!(a.edge_count(), b.edge_count());
    assert!(a.edge_count() <= 400);
    for v in 0..100 {
        assert_eq!(a.outgoing_edges(v).collect::<Vec<_>>(), b.outgoing_edges(v).collect::<Vec<_>>());
    }
}

#[test]
fn test_queue_kind_parsing() {
    assert_eq!("binary".parse::<QueueKind>().unwrap(), QueueKind::Binary);
    assert_eq!("Fibonacci".parse::<QueueKind>().unwrap(), QueueKind::Fibonacci);
    assert_eq!("fib".parse::<QueueKind>().unwrap(), QueueKind::Fibonacci);
    assert!(matches!("pairing".parse::<QueueKind>(), Err(Error::InvalidConfig(_))));

    assert_eq!(QueueKind::default(), QueueKind::Binary);
    assert_eq!(Dijkstra::new().queue_kind(), QueueKind::Binary);
    let configured = Dijkstra::new().with_queue("fibonacci".parse().unwrap());
    assert_eq!(configured.queue_kind(), QueueKind::Fibonacci);
    assert_eq!(QueueKind::Fibonacci.to_string(), "fibonacci heap");
}

use super::rand::{cycle, draw_graph, grid, path, star, GraphCfg, ReplayToken};
use super::*;

#[test]
fn edge_equality_is_direction_independent() {
    assert_eq!(Edge::new(3, 7), Edge::new(7, 3));
    assert_eq!(Edge::new(3, 7).endpoints(), (3, 7));
    assert_eq!(Edge::new(7, 3).endpoints(), (3, 7));
}

#[test]
#[should_panic(expected = "self-loop")]
fn edge_rejects_self_loop() {
    let _ = Edge::new(4, 4);
}

#[test]
fn edge_incidence_helpers() {
    let e = Edge::new(2, 5);
    assert!(e.touches(2));
    assert!(e.touches(5));
    assert!(!e.touches(3));
    assert_eq!(e.other(2), Some(5));
    assert_eq!(e.other(5), Some(2));
    assert_eq!(e.other(0), None);
}

#[test]
fn edge_set_deduplicates_both_directions() {
    let mut set = EdgeSet::new();
    assert!(set.insert(Edge::new(0, 1)));
    assert!(!set.insert(Edge::new(1, 0)));
    assert_eq!(set.len(), 1);
    assert!(set.contains(Edge::new(1, 0)));
}

#[test]
fn edge_set_without_is_set_difference() {
    let all: EdgeSet = [(0, 1), (1, 2), (2, 3)]
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();
    let drop: EdgeSet = [Edge::new(2, 1)].into_iter().collect();
    let rest = all.without(&drop);
    assert_eq!(rest.len(), 2);
    assert!(rest.contains(Edge::new(0, 1)));
    assert!(!rest.contains(Edge::new(1, 2)));
    // `without` leaves the receiver untouched
    assert_eq!(all.len(), 3);
}

#[test]
fn edge_set_iterates_lowest_first() {
    let set: EdgeSet = [(2, 3), (0, 3), (0, 1), (1, 2)]
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();
    let order: Vec<_> = set.iter().map(Edge::endpoints).collect();
    assert_eq!(order, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
}

#[test]
fn fixed_families_have_expected_sizes() {
    assert_eq!(path(5).len(), 4);
    assert_eq!(cycle(4).len(), 4);
    assert_eq!(star(3).len(), 3);
    // 3x3 grid: 2 horizontal runs of 3 + 2 vertical runs of 3
    assert_eq!(grid(3, 3).len(), 12);
    assert!(path(1).is_empty());
}

#[test]
fn grid_indexes_large_dimensions_without_overflow() {
    let g = grid(255, 255);
    // 254 edges per row/column, 255 rows and columns each way
    assert_eq!(g.len(), 2 * 254 * 255);
}

#[test]
#[should_panic(expected = "grid has more vertices")]
fn grid_rejects_unindexable_dimensions() {
    let _ = grid(300, 300);
}

#[test]
fn draw_graph_is_replayable_and_clamped() {
    let tok = ReplayToken { seed: 7, index: 0 };
    let cfg = GraphCfg {
        vertices: 6,
        edges: 9,
    };
    let a = draw_graph(cfg, tok);
    let b = draw_graph(cfg, tok);
    assert_eq!(a, b);
    assert_eq!(a.len(), 9);

    // more edges than the complete graph holds: clamp, don't spin forever
    let dense = draw_graph(
        GraphCfg {
            vertices: 4,
            edges: 100,
        },
        tok,
    );
    assert_eq!(dense.len(), 6);
}

use std::collections::BTreeMap;

use seatring_layout::{
    layout_seats, AnchorPosition, Direction, LayoutTable, SeatAssignment, SeatLayoutEngine,
    TableCapacity,
};

fn ring(seats: i64) -> Vec<SeatAssignment> {
    SeatAssignment::ring(TableCapacity::clamped(seats))
}

fn sorted(mut anchors: Vec<AnchorPosition>) -> Vec<AnchorPosition> {
    anchors.sort_by(|a, b| {
        a.left
            .total_cmp(&b.left)
            .then_with(|| a.top.total_cmp(&b.top))
    });
    anchors
}

#[test]
fn opponents_are_a_permutation_of_the_table() {
    let table = LayoutTable::standard();
    for direction in [Direction::Clockwise, Direction::CounterClockwise] {
        let engine = SeatLayoutEngine::default().with_direction(direction);
        for capacity in TableCapacity::all() {
            let expected: Vec<AnchorPosition> = table
                .anchors(capacity)
                .unwrap()
                .iter()
                .map(|a| direction.orient(*a))
                .collect();
            for viewer in 0..capacity.seats() {
                let map = engine.positions(capacity, Some(viewer), &SeatAssignment::ring(capacity));
                let opponents: Vec<AnchorPosition> = map
                    .iter()
                    .filter(|(seat, _)| **seat != viewer)
                    .map(|(_, anchor)| *anchor)
                    .collect();
                assert_eq!(
                    sorted(opponents),
                    sorted(expected.clone()),
                    "capacity {capacity}, viewer {viewer}"
                );
            }
        }
    }
}

#[test]
fn viewer_is_always_bottom_center() {
    for capacity in TableCapacity::all() {
        for viewer in 0..capacity.seats() {
            let map = layout_seats(capacity.seats() as i64, Some(viewer), &SeatAssignment::ring(capacity));
            assert_eq!(map[&viewer], AnchorPosition::VIEWER);
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let seats = vec![
        SeatAssignment::occupied(0, "a"),
        SeatAssignment::empty(2),
        SeatAssignment::occupied(5, "b"),
    ];
    let first = layout_seats(7, Some(2), &seats);
    let second = layout_seats(7, Some(2), &seats);
    assert_eq!(first, second);
}

#[test]
fn capacity_is_clamped() {
    assert_eq!(layout_seats(1, Some(0), &ring(2)), layout_seats(2, Some(0), &ring(2)));
    assert_eq!(layout_seats(0, Some(0), &ring(2)), layout_seats(2, Some(0), &ring(2)));
    assert_eq!(layout_seats(12, Some(0), &ring(8)), layout_seats(8, Some(0), &ring(8)));
}

#[test]
fn out_of_range_viewer_matches_its_residue() {
    let seats = ring(6);
    let far = layout_seats(6, Some(99), &seats);
    let near = layout_seats(6, Some(99 % 6), &seats);
    for seat in [0, 1, 2, 4, 5] {
        assert_eq!(far[&seat], near[&seat], "seat {seat}");
    }
    for anchor in far.values() {
        assert!(anchor.left.is_finite() && anchor.top.is_finite());
    }
}

#[test]
fn six_max_viewer_at_zero() {
    let table = LayoutTable::standard();
    let slots = table.anchors(TableCapacity::clamped(6)).unwrap();
    let map = layout_seats(6, Some(0), &ring(6));

    let mut expected = BTreeMap::new();
    expected.insert(0, AnchorPosition::VIEWER);
    for seat in 1..6 {
        expected.insert(seat, slots[seat - 1]);
    }
    assert_eq!(map, expected);
}

#[test]
fn six_max_viewer_at_three() {
    let table = LayoutTable::standard();
    let slots = table.anchors(TableCapacity::clamped(6)).unwrap();
    let map = layout_seats(6, Some(3), &ring(6));

    assert_eq!(map[&4], slots[0]);
    assert_eq!(map[&5], slots[1]);
    assert_eq!(map[&0], slots[2]);
    assert_eq!(map[&1], slots[3]);
    assert_eq!(map[&2], slots[4]);
    assert_eq!(map[&3], AnchorPosition::VIEWER);
}

#[test]
fn empty_seats_keep_their_slot() {
    let capacity = TableCapacity::clamped(5);
    let full = layout_seats(5, Some(1), &SeatAssignment::ring(capacity));
    let sparse = layout_seats(
        5,
        Some(1),
        &[SeatAssignment::occupied(1, "hero"), SeatAssignment::occupied(3, "villain")],
    );
    assert_eq!(sparse.len(), 2);
    assert_eq!(sparse[&3], full[&3]);
}

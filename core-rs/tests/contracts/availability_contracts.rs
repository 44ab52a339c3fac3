// Availability Contract Tests
//
// These tests verify INVARIANTS that MUST NEVER BREAK regardless of implementation.
// Each one documents WHY the behavior is fixed, so a refactor that "simplifies"
// the calculator fails with an explanation of what it gave up.

use wiring_core::{
    BoardDescriptor, Direction, PortAvailability, PortAvailabilityCalculator, PortRecord,
    PortSet, SequenceCapacity, WiringError,
};

fn compute(limit: u32, records: &[PortRecord]) -> Result<Vec<PortAvailability>, WiringError> {
    PortAvailabilityCalculator::default().compute(PortSet::new(Direction::Input, limit, records))
}

fn slot_states(port: &PortAvailability) -> Vec<bool> {
    port.sequence_slots.iter().map(|s| s.is_available).collect()
}

fn permutations(records: &[PortRecord]) -> Vec<Vec<PortRecord>> {
    if records.len() <= 1 {
        return vec![records.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..records.len() {
        let mut rest = records.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

/// WHY: Every physical port must appear exactly once in the output
/// REASON: Pickers render one row per position; a gap hides a free port
/// BREAKS: Operators cannot wire ports the calculator skipped
/// SACRIFICES: If this fails, the displayed wiring no longer matches the board
#[test]
fn output_covers_every_position_exactly_once() {
    let cases: Vec<(u32, Vec<PortRecord>)> = vec![
        (0, vec![]),
        (1, vec![]),
        (4, vec![]),
        (8, vec![PortRecord::new(7, [0])]),
        (8, vec![PortRecord::new(6, [1]), PortRecord::new(0, [0, 1, 2, 3])]),
        (
            5,
            vec![
                PortRecord::new(4, [3]),
                PortRecord::new(2, [0]),
                PortRecord::new(3, [1, 2]),
            ],
        ),
    ];

    for (limit, records) in cases {
        let result = compute(limit, &records).unwrap();
        let positions: Vec<u32> = result.iter().map(|p| p.port_position).collect();
        let expected: Vec<u32> = (0..limit).collect();

        assert_eq!(
            positions, expected,
            "limit {} with {} records must yield positions 0..{}",
            limit,
            records.len(),
            limit
        );
    }
}

/// WHY: A port with no record is a port nobody has wired
/// REASON: The descriptor only lists ports with assignments
/// BREAKS: Fresh boards would look fully occupied
/// SACRIFICES: If this fails, unconfigured ports lose their free default
#[test]
fn unconfigured_ports_are_fully_available() {
    let result = compute(4, &[]).unwrap();

    assert_eq!(result.len(), 4);
    for port in &result {
        assert!(port.is_available);
        assert_eq!(port.sequence_slots.len(), 4);
        assert_eq!(slot_states(port), vec![true; 4]);
    }
}

/// WHY: A port with every sequence slot taken cannot take a new assignment
/// REASON: The hardware has a fixed number of keys per port
/// BREAKS: A fifth key would be offered on a four-key port
/// SACRIFICES: If this fails, over-assignment becomes possible
#[test]
fn full_port_is_exhausted_and_neighbors_untouched() {
    let result = compute(4, &[PortRecord::new(2, [0, 1, 2, 3])]).unwrap();

    assert!(!result[2].is_available);
    assert_eq!(slot_states(&result[2]), vec![false; 4]);

    for position in [0usize, 1, 3] {
        assert!(result[position].is_available, "port {} must stay free", position);
        assert_eq!(slot_states(&result[position]), vec![true; 4]);
    }
}

/// WHY: Slot state follows sequence order, not assignment count
/// REASON: Assignments on one port may leave holes in the sequence
/// BREAKS: Picker would offer an occupied slot and hide a free one
/// SACRIFICES: If this fails, slot indexing is wrong
#[test]
fn partial_occupancy_marks_exact_slots() {
    let result = compute(4, &[PortRecord::new(1, [1, 3])]).unwrap();

    assert!(result[1].is_available);
    assert_eq!(slot_states(&result[1]), vec![true, false, true, false]);
}

/// WHY: Port identity is `order`, never list position
/// REASON: Upstream lists are sparse and unsorted
/// BREAKS: Assignments get attributed to the wrong physical port
/// SACRIFICES: If this fails, the index-vs-position defect is back
#[test]
fn record_order_in_list_does_not_matter() {
    let records = vec![
        PortRecord::new(5, [0]),
        PortRecord::new(1, [0, 1, 2, 3]),
        PortRecord::new(3, [2]),
    ];
    let reference = compute(6, &records).unwrap();

    for permutation in permutations(&records) {
        assert_eq!(compute(6, &permutation).unwrap(), reference);
    }

    assert_eq!(slot_states(&reference[5]), vec![false, true, true, true]);
    assert!(!reference[1].is_available);
    assert_eq!(slot_states(&reference[3]), vec![true, true, false, true]);
    assert_eq!(slot_states(&reference[0]), vec![true; 4]);
}

/// WHY: Two records for the same port are ambiguous
/// REASON: The calculator cannot know which one reflects the hardware
/// BREAKS: Silently picking one would misreport free ports
/// SACRIFICES: If this fails, inconsistent descriptors are papered over
#[test]
fn duplicate_port_order_fails_whole_call() {
    let result = compute(4, &[PortRecord::new(0, [0]), PortRecord::new(0, [1])]);

    match result {
        Err(WiringError::DuplicatePortOrder { order: 0, .. }) => {}
        other => panic!("Expected DuplicatePortOrder, got {:?}", other),
    }
}

/// WHY: Records outside the declared limit are reported, never clamped
/// REASON: The descriptor disagrees with its own capacity
/// BREAKS: Clamping would mark a real port as taken
/// SACRIFICES: If this fails, integrity violations go unnoticed
#[test]
fn out_of_range_orders_are_reported() {
    let port_err = compute(4, &[PortRecord::new(1, [0]), PortRecord::new(4, [0])]).unwrap_err();
    assert!(matches!(
        port_err,
        WiringError::PortOrderOutOfRange { order: 4, limit: 4, .. }
    ));

    let seq_err = compute(4, &[PortRecord::new(1, [0, 4])]).unwrap_err();
    assert!(matches!(
        seq_err,
        WiringError::SequenceOrderOutOfRange { sequence: 4, capacity: 4, .. }
    ));

    assert!(port_err.is_data_integrity());
    assert!(seq_err.is_data_integrity());
}

/// WHY: Same descriptor, same answer
/// REASON: The calculator is a pure projection of its input
/// BREAKS: Re-renders would flicker between states
/// SACRIFICES: If this fails, hidden state crept into the calculator
#[test]
fn computation_is_idempotent() {
    let board = BoardDescriptor::new(6, 4)
        .with_input_port(PortRecord::new(3, [0, 2]))
        .with_output_port(PortRecord::new(0, [0, 1, 2, 3]));
    let snapshot = board.clone();
    let calculator = PortAvailabilityCalculator::default();

    let first = calculator.compute_board(&board).unwrap();
    let second = calculator.compute_board(&board).unwrap();

    assert_eq!(first, second);
    assert_eq!(board, snapshot, "descriptor must not be modified");
}

/// WHY: Sequence capacity is a hardware-generation property
/// REASON: Future boards may carry more or fewer keys per port
/// BREAKS: A literal 4 would misreport every non-four-key board
/// SACRIFICES: If this fails, capacity is baked into the algorithm
#[test]
fn sequence_capacity_is_injected() {
    let calculator = PortAvailabilityCalculator::new(SequenceCapacity::new(6).unwrap());
    let records = vec![PortRecord::new(0, [0, 1, 2, 3])];
    let result = calculator
        .compute(PortSet::new(Direction::Output, 2, &records))
        .unwrap();

    assert!(result.iter().all(|p| p.sequence_slots.len() == 6));
    assert!(result[0].is_available, "4 of 6 slots taken leaves room");
    assert_eq!(
        slot_states(&result[0]),
        vec![false, false, false, false, true, true]
    );
}

/// WHY: Inputs and outputs run the same algorithm on different fields
/// REASON: Direction selects data, not code paths
/// BREAKS: One side drifting from the other
/// SACRIFICES: If this fails, direction handling was duplicated again
#[test]
fn directions_share_one_algorithm() {
    let records = vec![PortRecord::new(1, [3]), PortRecord::new(0, [0, 1, 2, 3])];
    let board = BoardDescriptor {
        board_input_limit: 3,
        board_output_limit: 3,
        input_ports: records.clone(),
        output_ports: records,
    };
    let calculator = PortAvailabilityCalculator::default();

    let inputs = calculator.compute_direction(&board, Direction::Input).unwrap();
    let outputs = calculator.compute_direction(&board, Direction::Output).unwrap();

    assert_eq!(inputs, outputs);
}

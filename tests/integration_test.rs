use bully::{
    Cluster, ElectionError, ElectionEvent, NoOpObserver, Priority, RejectReason, SimulationConfig,
    SimulationOptions,
};

fn p(priority: usize) -> Priority {
    Priority::new(priority)
}

fn quiet_cluster(size: usize) -> Cluster {
    Cluster::new(size, Box::new(NoOpObserver)).unwrap()
}

#[test]
fn every_alive_participant_agrees_on_the_highest_responder() {
    for size in 2..=9 {
        for initiator in 0..size - 1 {
            let cluster = quiet_cluster(size);

            let outcome = cluster.start_election(p(initiator), None).unwrap();

            // Everyone from the initiator up answers, except the killed leader.
            let expected = p(size - 2);
            assert_eq!(expected, outcome.winner, "size={} initiator={}", size, initiator);
            for (id, leader) in cluster.snapshot() {
                assert_eq!(expected, leader, "size={} initiator={} participant={}", size, initiator, id);
            }
            for id in 0..size {
                assert!(!cluster.participant(p(id)).unwrap().is_election_in_progress());
            }
        }
    }
}

#[test]
fn winner_is_highest_alive_at_or_above_initiator() {
    // (size, killed before election, initiator, expected winner)
    fn run(size: usize, dead: Vec<usize>, initiator: usize, expected: usize) {
        let cluster = quiet_cluster(size);
        for id in dead {
            cluster.kill(p(id)).unwrap();
        }

        let outcome = cluster.start_election(p(initiator), None).unwrap();

        assert_eq!(p(expected), outcome.winner);
        for (_, leader) in cluster.snapshot() {
            assert_eq!(p(expected), leader);
        }
    }

    run(5, vec![], 2, 3);
    run(5, vec![], 0, 3);
    run(3, vec![], 1, 1);
    run(5, vec![3], 1, 2);
    run(5, vec![3, 2], 1, 1);
    run(5, vec![3, 2], 0, 1);
    // Lower priority participants never answer, so nobody below the initiator can win.
    run(6, vec![4, 3], 2, 2);
}

#[test]
fn double_kill_is_same_as_single_kill() {
    let once = quiet_cluster(4);
    once.kill(p(1)).unwrap();
    let twice = quiet_cluster(4);
    twice.kill(p(1)).unwrap();
    twice.kill(p(1)).unwrap();

    assert_eq!(once.snapshot(), twice.snapshot());
    assert_eq!(
        once.start_election(p(0), None).unwrap(),
        twice.start_election(p(0), None).unwrap()
    );
}

#[test]
fn election_from_dead_leader_is_reported() {
    let cluster = quiet_cluster(5);

    assert_eq!(
        Err(ElectionError::NoElectionHeld {
            initiator: p(4),
            reason: RejectReason::Dead,
        }),
        cluster.start_election(p(4), None)
    );
}

#[test]
fn simulation_with_fixed_initiator() {
    let mut simulation = bully::try_create_simulation(SimulationConfig {
        info_logger: bully::create_discard_logger(),
        options: SimulationOptions {
            cluster_size: Some(5),
            initiator: Some(0),
            ..SimulationOptions::default()
        },
    })
    .unwrap();

    let outcome = simulation.kill_leader_and_elect().unwrap();

    assert_eq!(vec![p(1), p(2), p(3)], outcome.acknowledged_by);
    assert_eq!(
        vec![(p(0), p(3)), (p(1), p(3)), (p(2), p(3)), (p(3), p(3))],
        simulation.snapshot()
    );
}

#[test]
fn simulation_kill_out_of_range_fails() {
    let simulation = bully::try_create_simulation(SimulationConfig {
        info_logger: bully::create_discard_logger(),
        options: SimulationOptions::default(),
    })
    .unwrap();

    assert_eq!(Err(ElectionError::InvalidId { id: 5, size: 5 }), simulation.kill(5));
}

#[tokio::test]
async fn event_listener_sees_whole_protocol_trace() {
    let mut simulation = bully::try_create_simulation(SimulationConfig {
        info_logger: bully::create_discard_logger(),
        options: SimulationOptions {
            cluster_size: Some(5),
            initiator: Some(2),
            ..SimulationOptions::default()
        },
    })
    .unwrap();

    simulation.kill_leader_and_elect().unwrap();

    let mut events = Vec::new();
    while let Some(event) = simulation.event_listener.next_event().await {
        let done = matches!(event, ElectionEvent::CoordinatorBroadcast { .. });
        events.push(event);
        if done {
            break;
        }
    }

    assert_eq!(
        vec![
            ElectionEvent::ElectionStarted { by: p(2) },
            ElectionEvent::MessageRouted { from: p(2), to: p(0) },
            ElectionEvent::ElectionRejected {
                by: p(0),
                initiator: p(2),
                reason: RejectReason::HigherPriorityInitiator,
            },
            ElectionEvent::MessageRouted { from: p(2), to: p(1) },
            ElectionEvent::ElectionRejected {
                by: p(1),
                initiator: p(2),
                reason: RejectReason::HigherPriorityInitiator,
            },
            ElectionEvent::MessageRouted { from: p(2), to: p(3) },
            ElectionEvent::Acknowledged {
                by: p(3),
                initiator: p(2),
            },
            ElectionEvent::MessageRouted { from: p(2), to: p(4) },
            ElectionEvent::ElectionRejected {
                by: p(4),
                initiator: p(2),
                reason: RejectReason::Dead,
            },
            ElectionEvent::CoordinatorBroadcast { winner: p(3) },
        ],
        events
    );
    assert_eq!(None, simulation.event_listener.try_next_event());
}

use crate::api::options::SimulationOptionsValidated;
use crate::api::{event_channel, ElectionEventListener, LoggingObserver, SimulationOptions};
use crate::election::{Cluster, ElectionError, ElectionObserver, ElectionOutcome, Priority};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;

pub struct SimulationConfig {
    pub info_logger: slog::Logger,
    pub options: SimulationOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum SimulationCreationError {
    #[error("Illegal options for configuring simulation: {0}")]
    IllegalOptions(String),
    #[error("Invalid cluster: {0}")]
    InvalidCluster(#[from] ElectionError),
}

/// One run of the election: a fixed cluster plus the driver-side choices of who dies and who
/// initiates.
pub struct Simulation {
    pub event_listener: ElectionEventListener,
    logger: slog::Logger,
    cluster: Cluster,
    rng: StdRng,
    initiator: Option<Priority>,
    leader_to_kill: Priority,
}

pub fn try_create_simulation(config: SimulationConfig) -> Result<Simulation, SimulationCreationError> {
    let logger = config.info_logger;

    let options = SimulationOptionsValidated::try_from(config.options)
        .map_err(|e| SimulationCreationError::IllegalOptions(e.to_string()))?;

    let (channel_observer, event_listener) = event_channel();
    let observers: Vec<Box<dyn ElectionObserver>> = vec![
        Box::new(LoggingObserver::new(logger.new(slog::o!("Component" => "election")))),
        Box::new(channel_observer),
    ];
    let cluster = Cluster::new(options.cluster_size, Box::new(observers))?;

    let rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    slog::info!(logger, "Created cluster of {} participants", options.cluster_size);

    Ok(Simulation {
        event_listener,
        logger,
        cluster,
        rng,
        initiator: options.initiator.map(Priority::new),
        leader_to_kill: Priority::new(options.leader_to_kill),
    })
}

impl Simulation {
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn kill(&self, id: usize) -> Result<(), ElectionError> {
        self.cluster.kill(Priority::new(id))?;
        slog::info!(self.logger, "Killed participant {}", id);
        Ok(())
    }

    /// Kill the configured leader and hold an election from the configured (or a random)
    /// initiator.
    pub fn kill_leader_and_elect(&mut self) -> Result<ElectionOutcome, ElectionError> {
        slog::info!(self.logger, "Killing leader {}", self.leader_to_kill);
        let result = match self.initiator {
            Some(initiator) => self.cluster.start_election(initiator, Some(self.leader_to_kill)),
            None => self
                .cluster
                .start_election_with_random_initiator(&mut self.rng, Some(self.leader_to_kill)),
        };

        match &result {
            Ok(outcome) => {
                slog::info!(
                    self.logger,
                    "{} elected {} from acknowledgements {:?}",
                    outcome.initiator,
                    outcome.winner,
                    outcome.acknowledged_by
                );
            }
            Err(e) => {
                slog::warn!(self.logger, "Election failed: {}", e);
            }
        }

        result
    }

    pub fn snapshot(&self) -> Vec<(Priority, Priority)> {
        self.cluster.snapshot()
    }

    /// Log the coordinator view of every alive participant.
    pub fn show(&self) {
        for (id, leader) in self.cluster.snapshot() {
            slog::info!(self.logger, "Participant {} has leader {}", id, leader);
        }
    }
}

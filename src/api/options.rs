use std::convert::TryFrom;

#[derive(Clone, Default)]
pub struct SimulationOptions {
    pub cluster_size: Option<usize>,
    /// Participant that holds the election. Random in `[0, cluster_size - 2]` if unset.
    pub initiator: Option<usize>,
    /// Participant killed before the election. The highest priority if unset.
    pub leader_to_kill: Option<usize>,
    /// Seeds the initiator choice, for reproducible runs.
    pub rng_seed: Option<u64>,
}

pub(super) struct SimulationOptionsValidated {
    pub cluster_size: usize,
    pub initiator: Option<usize>,
    pub leader_to_kill: usize,
    pub rng_seed: Option<u64>,
}

impl SimulationOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.cluster_size < 1 {
            return Err("Cluster must have at least one participant");
        }
        if self.leader_to_kill >= self.cluster_size {
            return Err("Leader to kill must be a participant of the cluster");
        }
        if let Some(initiator) = self.initiator {
            if initiator >= self.cluster_size {
                return Err("Initiator must be a participant of the cluster");
            }
        }

        Ok(())
    }
}

impl TryFrom<SimulationOptions> for SimulationOptionsValidated {
    type Error = &'static str;

    fn try_from(options: SimulationOptions) -> Result<Self, Self::Error> {
        let cluster_size = options.cluster_size.unwrap_or(5);
        let values = SimulationOptionsValidated {
            cluster_size,
            initiator: options.initiator,
            leader_to_kill: options.leader_to_kill.unwrap_or_else(|| cluster_size.saturating_sub(1)),
            rng_seed: options.rng_seed,
        };

        values.validate()?;
        Ok(values)
    }
}

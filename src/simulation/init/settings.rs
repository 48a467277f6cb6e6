use crate::core::SimError;
use crate::domain::config::PhysicsConfig;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn config(sim: &SimulationCore) -> &PhysicsConfig {
    &sim.config
}

/// Swap tunables at runtime. Body radii stay as created even if the shrink
/// factor changes.
pub(super) fn set_config(sim: &mut SimulationCore, config: PhysicsConfig) -> Result<(), SimError> {
    if let Err(e) = config.validate() {
        log::warn!("rejected config: {e}");
        return Err(e);
    }
    sim.pages.set_delay(config.page_switch_delay_ms);
    sim.config = config;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

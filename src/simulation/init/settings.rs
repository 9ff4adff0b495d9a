use super::perf_stats::PerfStats;
use super::scene::Scene;
use super::step::FrameClock;
use super::GameCore;

pub(super) fn enable_perf_metrics<S: Scene>(core: &mut GameCore<S>, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn set_perf_clock<S: Scene>(core: &mut GameCore<S>, clock: Box<dyn FrameClock>) {
    core.perf_clock = clock;
}

pub(super) fn get_perf_stats<S: Scene>(core: &GameCore<S>) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn reset_clock<S: Scene>(core: &mut GameCore<S>) {
    core.last_time_ms = None;
}

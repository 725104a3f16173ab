//! Progress reporting for GA runs.

use log::{debug, info};

use super::runner::{EvolutionPhase, GenerationRecord, StopReason};

/// Receives progress events from [`GaRunner`](super::GaRunner).
///
/// All methods default to no-ops.
pub trait GenerationObserver {
    /// The controller entered `phase` while at `generation`.
    fn on_phase(&mut self, _phase: EvolutionPhase, _generation: usize) {}

    /// A generation was evaluated.
    fn on_generation(&mut self, _record: &GenerationRecord) {}

    /// The adaptive mutation rate changed from `old` to `new`.
    fn on_mutation_rate_change(&mut self, _generation: usize, _old: f64, _new: f64) {}

    /// The run stopped after `generations` evaluated generations.
    fn on_finish(&mut self, _reason: StopReason, _generations: usize) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Reports progress through the `log` facade.
#[derive(Debug, Clone)]
pub struct LogObserver {
    /// Log every n-th generation at `info` level; others go to `debug`.
    pub report_interval: usize,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self { report_interval: 10 }
    }
}

impl LogObserver {
    pub fn new(report_interval: usize) -> Self {
        Self { report_interval }
    }

    fn is_report_generation(&self, generation: usize) -> bool {
        self.report_interval > 0 && generation % self.report_interval == 0
    }
}

impl GenerationObserver for LogObserver {
    fn on_generation(&mut self, r: &GenerationRecord) {
        if self.is_report_generation(r.generation) {
            info!(
                "Gen {:3} | best={:.3}, avg={:.3}, worst={:.3}, improv={:+.2}%, mutation={:.4}",
                r.generation, r.best, r.avg, r.worst, r.improvement_percent, r.mutation_rate
            );
        } else {
            debug!(
                "Gen {:3} | best={:.3}, avg={:.3}, improv={:+.2}%",
                r.generation, r.best, r.avg, r.improvement_percent
            );
        }
    }

    fn on_mutation_rate_change(&mut self, generation: usize, old: f64, new: f64) {
        info!("Gen {generation:3} | mutation rate halved: {old:.4} -> {new:.4}");
    }

    fn on_finish(&mut self, reason: StopReason, generations: usize) {
        match reason {
            StopReason::Converged => {
                info!("Converged after {generations} generations")
            }
            StopReason::MaxGenerationsReached => {
                info!("Stopped at generation cap ({generations} generations)")
            }
        }
    }
}

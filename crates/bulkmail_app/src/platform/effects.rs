use bulkmail_core::Effect;
use bulkmail_engine::TimerHandle;

/// Executes one core effect against the timer engine.
pub(crate) fn execute(effect: Effect, timers: &TimerHandle) {
    match effect {
        Effect::ScheduleConnect { run_id } => timers.schedule_connect(run_id),
        Effect::ScheduleTick { run_id } => timers.schedule_tick(run_id),
        Effect::CancelConnect { run_id } => timers.cancel_connect(run_id),
        Effect::CancelRun { run_id } => timers.cancel_run(run_id),
    }
}

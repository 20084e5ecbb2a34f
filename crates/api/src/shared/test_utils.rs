use kit_scheduler_infra::{ISys, KitContext};
use std::sync::Arc;

pub struct FixedSys(pub i64);
impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

/// An in-memory context whose clock is frozen at `now`.
pub fn create_context_at(now: i64) -> KitContext {
    let mut ctx = KitContext::create_inmemory();
    ctx.sys = Arc::new(FixedSys(now));
    ctx
}

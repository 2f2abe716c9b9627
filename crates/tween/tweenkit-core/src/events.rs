//! Events produced by the runner each tick.
//!
//! Values flow through each run's sink; events only report lifecycle
//! changes so hosts can react (remove a component, chain a follow-up).

use serde::{Deserialize, Serialize};

use crate::ids::RunId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TweenEvent {
    Spawned { run: RunId, duration: f32 },
    Completed { run: RunId, ticks: u32 },
    Cancelled { run: RunId },
}

impl TweenEvent {
    pub fn run(&self) -> RunId {
        match self {
            TweenEvent::Spawned { run, .. }
            | TweenEvent::Completed { run, .. }
            | TweenEvent::Cancelled { run } => *run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kind_tag() {
        let ev = TweenEvent::Completed {
            run: RunId(3),
            ticks: 12,
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["kind"], "completed");
        assert_eq!(json["run"], 3);
        assert_eq!(ev.run(), RunId(3));
    }
}

use crate::event::RotationEvent;
use crate::interval::{Interval, InvalidDuration};
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A recurring personal-contact reminder, e.g. "call Mom every 2 weeks".
///
/// `starting` is the anchor all occurrences are computed from and
/// `every` the repeat interval between them. The rotation owns its
/// generated events; `events` is ordered by insertion and no two of its
/// entries ever share a `timestamp_original`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub id: ID,
    pub user_id: ID,
    pub contact_id: ID,
    pub contact_method_id: ID,
    pub name: String,
    pub starting: i64,
    pub every: Interval,
    pub events: Vec<RotationEvent>,
}

impl Rotation {
    pub fn new(
        user_id: ID,
        contact_id: ID,
        contact_method_id: ID,
        name: impl Into<String>,
        starting: i64,
        every: Interval,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            contact_id,
            contact_method_id,
            name: name.into(),
            starting,
            every,
            events: Vec::new(),
        }
    }

    /// The first occurrence strictly after `now`.
    ///
    /// A rotation that has not started yet is due at its anchor. For a
    /// started rotation the result is the smallest lattice point
    /// `starting + k * every` greater than `now`, so `now == starting`
    /// yields `starting + every`, never the anchor itself.
    pub fn next_occurrence(&self, now: i64) -> Result<i64, InvalidDuration> {
        if self.starting > now {
            return Ok(self.starting);
        }
        if self.every.is_calendar() {
            // Millisecond arithmetic would drift off the calendar
            // lattice, so walk it from the anchor instead.
            for k in 1.. {
                let occurrence = self.every.add_to(self.starting, k)?;
                if occurrence > now {
                    return Ok(occurrence);
                }
            }
            unreachable!("interval magnitude is positive so the lattice is strictly ascending");
        }
        let step = self.every.to_exact_millis(self.starting)?;
        let elapsed = now - self.starting;
        let remainder = elapsed % step;
        now.checked_add(step - remainder)
            .ok_or(InvalidDuration::Unrepresentable(now))
    }

    /// All occurrences after the anchor and at or before `horizon`, in
    /// strictly ascending order.
    ///
    /// Always recomputed from the immutable anchor, so repeated calls
    /// with the same inputs are identical regardless of when they run.
    pub fn occurrences_until(&self, horizon: i64) -> Result<Vec<i64>, InvalidDuration> {
        let mut occurrences = Vec::new();
        for k in 1.. {
            let occurrence = self.every.add_to(self.starting, k)?;
            if occurrence > horizon {
                break;
            }
            occurrences.push(occurrence);
        }
        Ok(occurrences)
    }

    /// Creates a pending event for every occurrence up to `horizon` that
    /// is not already represented in `events`, keyed by
    /// `timestamp_original`. Returns only the newly created events.
    ///
    /// Safe to invoke any number of times: a second call with the same
    /// horizon creates nothing, and extending the horizon only ever
    /// appends. Events that already exist are historical facts and are
    /// never touched, even if the anchor or interval changed since they
    /// were generated.
    pub fn merge_events(&mut self, horizon: i64) -> Result<Vec<RotationEvent>, InvalidDuration> {
        let candidates = self.occurrences_until(horizon)?;
        let existing = self
            .events
            .iter()
            .map(|e| e.timestamp_original)
            .collect::<HashSet<_>>();

        let mut created = Vec::new();
        for timestamp in candidates {
            if existing.contains(&timestamp) {
                continue;
            }
            let event = RotationEvent::new(self.id.clone(), timestamp);
            created.push(event.clone());
            self.events.push(event);
        }
        Ok(created)
    }

    /// The earliest event that can still be acted upon, by effective
    /// scheduled time. This is what a notification scheduler should fire
    /// for next.
    pub fn upcoming_event(&self) -> Option<&RotationEvent> {
        self.events
            .iter()
            .filter(|e| !e.status.is_terminal())
            .min_by_key(|e| e.timestamp)
    }

    pub fn event(&self, event_id: &ID) -> Option<&RotationEvent> {
        self.events.iter().find(|e| e.id == *event_id)
    }

    pub fn event_mut(&mut self, event_id: &ID) -> Option<&mut RotationEvent> {
        self.events.iter_mut().find(|e| e.id == *event_id)
    }
}

impl Entity for Rotation {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::EventStatus;
    use crate::interval::IntervalUnit;
    use chrono::prelude::*;

    const DAY: i64 = 1000 * 60 * 60 * 24;

    fn weekly_rotation(starting: i64) -> Rotation {
        Rotation::new(
            Default::default(),
            Default::default(),
            Default::default(),
            "Call Mom",
            starting,
            Interval::new(7, IntervalUnit::Days).unwrap(),
        )
    }

    fn monthly_rotation(starting: i64) -> Rotation {
        Rotation::new(
            Default::default(),
            Default::default(),
            Default::default(),
            "Call Dad",
            starting,
            Interval::new(1, IntervalUnit::Months).unwrap(),
        )
    }

    #[test]
    fn next_occurrence_lands_on_the_lattice() {
        let rotation = weekly_rotation(0);
        assert_eq!(rotation.next_occurrence(10 * DAY).unwrap(), 14 * DAY);
        assert_eq!(rotation.next_occurrence(13 * DAY).unwrap(), 14 * DAY);
        // An occurrence timestamp itself is not its own next occurrence
        assert_eq!(rotation.next_occurrence(14 * DAY).unwrap(), 21 * DAY);
    }

    #[test]
    fn next_occurrence_of_future_rotation_is_its_anchor() {
        let rotation = weekly_rotation(100 * DAY);
        assert_eq!(rotation.next_occurrence(10 * DAY).unwrap(), 100 * DAY);
    }

    #[test]
    fn next_occurrence_at_the_anchor_is_one_interval_later() {
        let rotation = weekly_rotation(3 * DAY);
        assert_eq!(rotation.next_occurrence(3 * DAY).unwrap(), 10 * DAY);
    }

    #[test]
    fn next_occurrence_is_always_in_the_future() {
        let rotation = weekly_rotation(DAY / 2);
        for now in (0..40 * DAY).step_by((DAY as usize) * 3 + 17) {
            let next = rotation.next_occurrence(now).unwrap();
            assert!(next > now);
            if now >= rotation.starting {
                assert_eq!((next - rotation.starting) % (7 * DAY), 0);
            }
        }
    }

    #[test]
    fn enumerates_occurrences_up_to_the_horizon() {
        let rotation = weekly_rotation(0);
        assert_eq!(
            rotation.occurrences_until(30 * DAY).unwrap(),
            vec![7 * DAY, 14 * DAY, 21 * DAY, 28 * DAY]
        );
        // Inclusive upper bound
        assert_eq!(
            rotation.occurrences_until(14 * DAY).unwrap(),
            vec![7 * DAY, 14 * DAY]
        );
        assert!(rotation.occurrences_until(6 * DAY).unwrap().is_empty());
    }

    #[test]
    fn monthly_occurrences_clamp_without_drifting() {
        let jan_31 = Utc.with_ymd_and_hms(2021, 1, 31, 9, 0, 0).unwrap();
        let rotation = monthly_rotation(jan_31.timestamp_millis());
        let horizon = Utc
            .with_ymd_and_hms(2021, 5, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();

        let expected = vec![
            Utc.with_ymd_and_hms(2021, 2, 28, 9, 0, 0).unwrap(),
            // Computed from Jan 31 + 2 months, not from Feb 28 + 1 month
            Utc.with_ymd_and_hms(2021, 3, 31, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 4, 30, 9, 0, 0).unwrap(),
        ]
        .into_iter()
        .map(|d| d.timestamp_millis())
        .collect::<Vec<_>>();

        assert_eq!(rotation.occurrences_until(horizon).unwrap(), expected);

        let mid_feb = Utc
            .with_ymd_and_hms(2021, 2, 10, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(rotation.next_occurrence(mid_feb).unwrap(), expected[0]);
    }

    #[test]
    fn merge_creates_only_missing_events() {
        let mut rotation = weekly_rotation(0);
        let mut seeded = RotationEvent::new(rotation.id.clone(), 7 * DAY);
        seeded.record_try(8 * DAY).unwrap();
        rotation.events.push(seeded);

        let created = rotation.merge_events(30 * DAY).unwrap();
        assert_eq!(
            created.iter().map(|e| e.timestamp_original).collect::<Vec<_>>(),
            vec![14 * DAY, 21 * DAY, 28 * DAY]
        );
        assert_eq!(rotation.events.len(), 4);
        for event in &created {
            assert_eq!(event.rotation_id, rotation.id);
            assert_eq!(event.status, EventStatus::NotDone);
            assert_eq!(event.timestamp, event.timestamp_original);
            assert!(event.tries.is_empty());
        }
        // The seeded event was left alone
        assert_eq!(rotation.events[0].status, EventStatus::Tried);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut rotation = weekly_rotation(0);
        let first = rotation.merge_events(30 * DAY).unwrap();
        assert_eq!(first.len(), 4);
        let second = rotation.merge_events(30 * DAY).unwrap();
        assert!(second.is_empty());
        assert_eq!(rotation.events.len(), 4);
    }

    #[test]
    fn extending_the_horizon_only_appends() {
        let mut rotation = weekly_rotation(0);
        rotation.merge_events(20 * DAY).unwrap();
        let before = rotation
            .events
            .iter()
            .map(|e| (e.id.clone(), e.timestamp_original, e.timestamp))
            .collect::<Vec<_>>();

        let created = rotation.merge_events(40 * DAY).unwrap();
        assert_eq!(
            created.iter().map(|e| e.timestamp_original).collect::<Vec<_>>(),
            vec![21 * DAY, 28 * DAY, 35 * DAY]
        );
        let after = rotation
            .events
            .iter()
            .map(|e| (e.id.clone(), e.timestamp_original, e.timestamp))
            .collect::<Vec<_>>();
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn merge_never_duplicates_original_timestamps() {
        let mut rotation = weekly_rotation(0);
        for horizon in &[10 * DAY, 25 * DAY, 25 * DAY, 60 * DAY, 30 * DAY] {
            rotation.merge_events(*horizon).unwrap();
            let mut timestamps = rotation
                .events
                .iter()
                .map(|e| e.timestamp_original)
                .collect::<Vec<_>>();
            timestamps.sort_unstable();
            timestamps.dedup();
            assert_eq!(timestamps.len(), rotation.events.len());
        }
    }

    #[test]
    fn merge_ignores_rescheduled_timestamps() {
        let mut rotation = weekly_rotation(0);
        rotation.merge_events(15 * DAY).unwrap();
        // Move the day 7 event onto the day 14 lattice point
        let event_id = rotation.events[0].id.clone();
        rotation
            .event_mut(&event_id)
            .unwrap()
            .reschedule(14 * DAY, 0)
            .unwrap();

        // Dedup is keyed by timestamp_original, so nothing new appears
        assert!(rotation.merge_events(15 * DAY).unwrap().is_empty());
    }

    #[test]
    fn upcoming_event_skips_terminal_events() {
        let mut rotation = weekly_rotation(0);
        rotation.merge_events(30 * DAY).unwrap();
        let first_id = rotation.events[0].id.clone();
        rotation.event_mut(&first_id).unwrap().mark_done().unwrap();

        let upcoming = rotation.upcoming_event().unwrap();
        assert_eq!(upcoming.timestamp, 14 * DAY);

        for event in rotation.events.iter_mut() {
            let _ = event.mark_canceled();
        }
        assert!(rotation.upcoming_event().is_none());
    }

    #[test]
    fn upcoming_event_follows_reschedules() {
        let mut rotation = weekly_rotation(0);
        rotation.merge_events(15 * DAY).unwrap();
        let second_id = rotation.events[1].id.clone();
        rotation
            .event_mut(&second_id)
            .unwrap()
            .reschedule(3 * DAY, 0)
            .unwrap();

        assert_eq!(rotation.upcoming_event().unwrap().id, second_id);
    }
}

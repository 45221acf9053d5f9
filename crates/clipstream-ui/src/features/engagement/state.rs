//! Engagement slice and its trigger/resolve transitions.
//!
//! # Design
//! - The slice owns the displayed toggle state for the video currently
//!   bound; triggers and resolutions are pure transitions so the whole
//!   flow is testable without a DOM or a network.
//! - Overlapping triggers on a subject are dropped while one call is in
//!   flight.
//! - A resolution that lands after the subject was unbound or rebound
//!   is discarded.

use crate::core::auth::AuthQuery;
use crate::features::engagement::logic::{
    TogglePhase, ToggleSnapshot, ToggleState, resolve, speculate,
};
use clipstream_api_models::VideoDetail;

/// Which toggle surface a trigger targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngagementKind {
    /// Like/unlike the bound video.
    Like,
    /// Subscribe/unsubscribe the video's channel.
    Subscribe,
}

/// Live toggle state for one subject (a video, or a channel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubjectEngagement {
    /// Identifier the toggle endpoint is keyed by.
    pub subject_id: u64,
    /// Currently displayed flag and count.
    pub state: ToggleState,
    /// In-flight guard for this subject.
    pub phase: TogglePhase,
}

/// Engagement slice for the currently displayed video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EngagementState {
    /// Like state, keyed by the video id.
    pub like: Option<SubjectEngagement>,
    /// Subscription state, keyed by the channel (author) id.
    pub subscription: Option<SubjectEngagement>,
}

/// One in-flight toggle, held by the dispatching task until resolution.
///
/// Carries the snapshot and the speculative value so reconciliation
/// never recomputes either; consumed exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingToggle {
    /// Surface being toggled.
    pub kind: EngagementKind,
    /// Subject the endpoint was invoked for.
    pub subject_id: u64,
    /// Pre-action capture restored on failure.
    pub snapshot: ToggleSnapshot,
    /// Value written ahead of confirmation.
    pub speculative: ToggleState,
}

/// Outcome of a user trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Nothing to do: no subject bound, or a call already in flight.
    Ignored,
    /// Viewer is signed out; nothing changed, surface the login prompt.
    LoginRequired,
    /// Speculative state written; dispatch the remote call.
    Dispatch(PendingToggle),
}

/// Bind both toggle surfaces from a freshly fetched video detail.
pub const fn bind_video(state: &mut EngagementState, detail: &VideoDetail) {
    state.like = Some(SubjectEngagement {
        subject_id: detail.id,
        state: ToggleState {
            active: detail.is_liked,
            count: detail.like_count,
        },
        phase: TogglePhase::Idle,
    });
    state.subscription = Some(SubjectEngagement {
        subject_id: detail.author.id,
        state: ToggleState {
            active: detail.is_subscribed,
            count: detail.subscriber_count,
        },
        phase: TogglePhase::Idle,
    });
}

/// Drop both surfaces when the detail view unloads.
pub const fn unbind(state: &mut EngagementState) {
    state.like = None;
    state.subscription = None;
}

/// Read the displayed state for a surface.
#[must_use]
pub const fn toggle_state(state: &EngagementState, kind: EngagementKind) -> Option<ToggleState> {
    match slot(state, kind) {
        Some(entry) => Some(entry.state),
        None => None,
    }
}

const fn slot(state: &EngagementState, kind: EngagementKind) -> Option<&SubjectEngagement> {
    match kind {
        EngagementKind::Like => state.like.as_ref(),
        EngagementKind::Subscribe => state.subscription.as_ref(),
    }
}

const fn slot_mut(
    state: &mut EngagementState,
    kind: EngagementKind,
) -> Option<&mut SubjectEngagement> {
    match kind {
        EngagementKind::Like => state.like.as_mut(),
        EngagementKind::Subscribe => state.subscription.as_mut(),
    }
}

/// Run the trigger path for one user click.
///
/// Guard order matches the interaction flow: a missing subject or an
/// in-flight call drops the trigger; a signed-out viewer aborts before
/// any mutation; only then is the snapshot taken and the speculative
/// value written.
pub fn begin_toggle<A: AuthQuery>(
    state: &mut EngagementState,
    auth: &A,
    kind: EngagementKind,
) -> TriggerDecision {
    let Some(entry) = slot_mut(state, kind) else {
        return TriggerDecision::Ignored;
    };
    if matches!(entry.phase, TogglePhase::InFlight) {
        return TriggerDecision::Ignored;
    }
    if !auth.is_authenticated() {
        return TriggerDecision::LoginRequired;
    }
    let snapshot = ToggleSnapshot::capture(entry.state);
    let speculative = speculate(entry.state);
    entry.state = speculative;
    entry.phase = TogglePhase::InFlight;
    TriggerDecision::Dispatch(PendingToggle {
        kind,
        subject_id: entry.subject_id,
        snapshot,
        speculative,
    })
}

/// Reconcile a resolved toggle call against the current slice.
pub fn resolve_toggle<E>(
    state: &mut EngagementState,
    pending: PendingToggle,
    result: &Result<(), E>,
) {
    let Some(entry) = slot_mut(state, pending.kind) else {
        return;
    };
    if entry.subject_id != pending.subject_id {
        return;
    }
    entry.state = resolve(pending.snapshot, pending.speculative, result);
    entry.phase = TogglePhase::Idle;
}

#[cfg(test)]
mod tests {
    use super::{
        EngagementKind, EngagementState, TriggerDecision, begin_toggle, bind_video,
        resolve_toggle, toggle_state, unbind,
    };
    use crate::core::auth::AuthQuery;
    use crate::features::engagement::logic::{TogglePhase, ToggleState};
    use chrono::{TimeZone, Utc};
    use clipstream_api_models::{VideoAuthor, VideoDetail};

    struct FakeAuth(bool);

    impl AuthQuery for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.0
        }
    }

    fn detail(video_id: u64, channel_id: u64) -> VideoDetail {
        VideoDetail {
            id: video_id,
            title: "Sea otters".to_string(),
            description: None,
            video_path: format!("/media/{video_id}.mp4"),
            view_count: 420,
            like_count: 10,
            is_liked: false,
            subscriber_count: 200,
            is_subscribed: true,
            created_at: Utc.timestamp_millis_opt(0).unwrap(),
            author: VideoAuthor {
                id: channel_id,
                nickname: "otterchannel".to_string(),
                profile_image: None,
            },
        }
    }

    fn bound() -> EngagementState {
        let mut state = EngagementState::default();
        bind_video(&mut state, &detail(7, 3));
        state
    }

    fn expect_pending(decision: TriggerDecision) -> super::PendingToggle {
        match decision {
            TriggerDecision::Dispatch(pending) => pending,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn bind_maps_both_surfaces() {
        let state = bound();
        let like = state.like.expect("like surface");
        assert_eq!(like.subject_id, 7);
        assert_eq!(like.state, ToggleState { active: false, count: 10 });
        assert_eq!(like.phase, TogglePhase::Idle);
        let subscription = state.subscription.expect("subscription surface");
        assert_eq!(subscription.subject_id, 3);
        assert_eq!(subscription.state, ToggleState { active: true, count: 200 });
    }

    #[test]
    fn trigger_without_subject_is_ignored() {
        let mut state = EngagementState::default();
        let decision = begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like);
        assert_eq!(decision, TriggerDecision::Ignored);
        assert_eq!(state, EngagementState::default());
    }

    #[test]
    fn trigger_signed_out_mutates_nothing() {
        let mut state = bound();
        let before = state;
        let decision = begin_toggle(&mut state, &FakeAuth(false), EngagementKind::Like);
        assert_eq!(decision, TriggerDecision::LoginRequired);
        assert_eq!(state, before);
    }

    #[test]
    fn trigger_writes_speculative_state_immediately() {
        let mut state = bound();
        let pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        assert_eq!(pending.subject_id, 7);
        assert_eq!(pending.snapshot.captured(), ToggleState { active: false, count: 10 });
        assert_eq!(pending.speculative, ToggleState { active: true, count: 11 });
        let like = state.like.expect("like surface");
        assert_eq!(like.state, pending.speculative);
        assert_eq!(like.phase, TogglePhase::InFlight);
    }

    #[test]
    fn overlapping_trigger_is_dropped_while_in_flight() {
        let mut state = bound();
        let _pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        let second = begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like);
        assert_eq!(second, TriggerDecision::Ignored);
        // The other surface keeps its own guard.
        let other = begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Subscribe);
        assert!(matches!(other, TriggerDecision::Dispatch(_)));
    }

    #[test]
    fn successful_toggle_keeps_speculative_state() {
        let mut state = bound();
        let pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        let result: Result<(), &str> = Ok(());
        resolve_toggle(&mut state, pending, &result);
        let like = state.like.expect("like surface");
        assert_eq!(like.state, ToggleState { active: true, count: 11 });
        assert_eq!(like.phase, TogglePhase::Idle);
    }

    #[test]
    fn failed_toggle_restores_snapshot_exactly() {
        let mut state = bound();
        // Un-toggle a live subscription: (true, 200) shown as (false, 199)
        // while in flight, then reverted.
        let pending =
            expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Subscribe));
        assert_eq!(
            toggle_state(&state, EngagementKind::Subscribe),
            Some(ToggleState { active: false, count: 199 })
        );
        let result: Result<(), &str> = Err("503");
        resolve_toggle(&mut state, pending, &result);
        let subscription = state.subscription.expect("subscription surface");
        assert_eq!(subscription.state, ToggleState { active: true, count: 200 });
        assert_eq!(subscription.phase, TogglePhase::Idle);
    }

    #[test]
    fn clamped_speculation_rolls_back_exactly() {
        let mut state = EngagementState::default();
        let mut inconsistent = detail(7, 3);
        inconsistent.is_liked = true;
        inconsistent.like_count = 0;
        bind_video(&mut state, &inconsistent);
        let pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        assert_eq!(pending.speculative, ToggleState { active: false, count: 0 });
        let result: Result<(), &str> = Err("timeout");
        resolve_toggle(&mut state, pending, &result);
        assert_eq!(
            toggle_state(&state, EngagementKind::Like),
            Some(ToggleState { active: true, count: 0 })
        );
    }

    #[test]
    fn resolution_after_unbind_is_a_noop() {
        let mut state = bound();
        let pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        unbind(&mut state);
        let result: Result<(), &str> = Ok(());
        resolve_toggle(&mut state, pending, &result);
        assert_eq!(state, EngagementState::default());
    }

    #[test]
    fn resolution_for_a_rebound_subject_is_discarded() {
        let mut state = bound();
        let pending = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        // Navigate to a different video before the call resolves.
        bind_video(&mut state, &detail(8, 3));
        let before = state;
        let result: Result<(), &str> = Err("network");
        resolve_toggle(&mut state, pending, &result);
        assert_eq!(state, before);
    }

    #[test]
    fn each_trigger_captures_a_fresh_snapshot() {
        let mut state = bound();
        let first = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        let ok: Result<(), &str> = Ok(());
        resolve_toggle(&mut state, first, &ok);
        let second = expect_pending(begin_toggle(&mut state, &FakeAuth(true), EngagementKind::Like));
        assert_ne!(first.snapshot, second.snapshot);
        assert_eq!(second.snapshot.captured(), ToggleState { active: true, count: 11 });
    }
}

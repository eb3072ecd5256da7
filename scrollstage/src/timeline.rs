use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::{
    Choreography, ItemKey, KeyframeSegment, Move, StageTargets, Target, TargetRole, Variant,
    VisualState,
};

/// Smallest duration a segment (or the whole timeline) may have, in timeline units.
const MIN_DURATION: f32 = 1e-4;

/// An immutable, ordered set of keyframe segments for one variant and one target list.
///
/// Built once by [`Timeline::build`]; a breakpoint change drops it wholesale and builds a new
/// one. Progress in `[0, 1]` maps linearly onto `[0, total_duration]`.
#[derive(Clone, Debug)]
pub struct Timeline<K = ItemKey> {
    variant: Variant,
    // Sorted by absolute start; equal starts keep insertion order.
    segments: Vec<KeyframeSegment<K>>,
    // One entry per target (header first, then cards by ordinal), holding indexes into
    // `segments` in time order.
    tracks: Vec<Vec<usize>>,
    has_header: bool,
    total_duration: f32,
}

struct Sequencer<K> {
    segments: Vec<KeyframeSegment<K>>,
    previous: Option<(f32, f32)>,
}

impl<K> Sequencer<K> {
    fn push(&mut self, target: Target<K>, step: &Move) {
        let duration = step.duration.max(MIN_DURATION);
        let start = step.placement.resolve(self.previous);
        self.previous = Some((start, start + duration));
        self.segments.push(KeyframeSegment {
            target,
            from: step.from,
            to: step.to,
            duration,
            placement: step.placement,
            easing: step.easing,
            start,
        });
    }
}

impl<K: Clone> Timeline<K> {
    /// Builds the stacking timeline for `targets`.
    ///
    /// Emits, in insertion order: the header retreat (if there is a header), the entrance of
    /// card 0, then for every hand-off the exit of card `i` followed by the entrance of card
    /// `i + 1`. A single card yields only its entrance.
    pub fn build(
        variant: Variant,
        choreography: &Choreography,
        targets: &StageTargets<K>,
    ) -> Result<Self> {
        let Some(first) = targets.cards.first() else {
            swarn!(?variant, "Timeline::build: empty target list");
            return Err(Error::EmptyTargetList);
        };

        let mut seq = Sequencer {
            segments: Vec::with_capacity(targets.cards.len() * 2),
            previous: None,
        };

        if let Some(header) = &targets.header {
            seq.push(Target::header(header.clone()), &choreography.header_retreat);
        }
        seq.push(Target::card(first.clone(), 0), &choreography.first_entrance);
        for (i, pair) in targets.cards.windows(2).enumerate() {
            seq.push(Target::card(pair[0].clone(), i), &choreography.exit);
            seq.push(Target::card(pair[1].clone(), i + 1), &choreography.next_entrance);
        }

        let mut segments = seq.segments;
        // `sort_by` is stable, which gives the (start, insertion order) tie-break.
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));

        let has_header = targets.header.is_some();
        let header_tracks = usize::from(has_header);
        let mut tracks = vec![Vec::new(); header_tracks + targets.cards.len()];
        for (i, seg) in segments.iter().enumerate() {
            let track = match seg.target.role {
                TargetRole::Header => 0,
                TargetRole::Card(index) => header_tracks + index,
            };
            tracks[track].push(i);
        }

        for track in &tracks {
            for pair in track.windows(2) {
                let (a, b) = (&segments[pair[0]], &segments[pair[1]]);
                if b.start < a.end() - MIN_DURATION {
                    swarn!(
                        prev_end = a.end(),
                        next_start = b.start,
                        "Timeline::build: segments of one target overlap; the later one wins"
                    );
                }
            }
        }

        let last_end = segments
            .iter()
            .map(KeyframeSegment::end)
            .fold(0.0f32, f32::max);
        let total_duration = (last_end + choreography.tail_hold.max(0.0)).max(MIN_DURATION);

        sdebug!(
            ?variant,
            segments = segments.len(),
            total_duration,
            "Timeline::build"
        );

        Ok(Self {
            variant,
            segments,
            tracks,
            has_header,
            total_duration,
        })
    }
}

impl<K> Timeline<K> {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn segments(&self) -> &[KeyframeSegment<K>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of cards (the header is not counted).
    pub fn card_count(&self) -> usize {
        self.tracks.len() - usize::from(self.has_header)
    }

    /// Maps progress in `[0, 1]` to timeline time.
    pub fn time_at(&self, progress: f32) -> f32 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        progress * self.total_duration
    }

    /// Iterates the segments of one target in time order.
    pub fn segments_for(&self, role: TargetRole) -> impl Iterator<Item = &KeyframeSegment<K>> {
        self.track(role)
            .unwrap_or(&[])
            .iter()
            .map(|&i| &self.segments[i])
    }

    /// Visits every target once with its state at `progress`: the header first (if any), then
    /// the cards by ordinal.
    ///
    /// A target is authored by its last segment that has started: inside that segment's range
    /// the eased interpolation is delivered, past it the segment's end state. Before the
    /// target's first segment, that segment's start state is delivered.
    pub fn for_each_state(&self, progress: f32, mut f: impl FnMut(&Target<K>, VisualState)) {
        let time = self.time_at(progress);
        for track in &self.tracks {
            if let Some(seg) = self.author(track, time) {
                f(&seg.target, seg.state_at(time));
            }
        }
    }

    /// The state of one target at `progress`.
    pub fn state_of_role(&self, role: TargetRole, progress: f32) -> Option<VisualState> {
        let time = self.time_at(progress);
        let seg = self.author(self.track(role)?, time)?;
        Some(seg.state_at(time))
    }

    fn track(&self, role: TargetRole) -> Option<&[usize]> {
        let index = match role {
            TargetRole::Header if self.has_header => 0,
            TargetRole::Header => return None,
            TargetRole::Card(i) => usize::from(self.has_header) + i,
        };
        self.tracks.get(index).map(Vec::as_slice)
    }

    fn author(&self, track: &[usize], time: f32) -> Option<&KeyframeSegment<K>> {
        let (&first, rest) = track.split_first()?;
        let mut author = &self.segments[first];
        for &i in rest {
            let seg = &self.segments[i];
            if seg.start > time {
                break;
            }
            author = seg;
        }
        Some(author)
    }
}

impl<K: PartialEq> Timeline<K> {
    /// The state of the target identified by `key` at `progress`.
    pub fn state_of(&self, key: &K, progress: f32) -> Option<VisualState> {
        let track = self
            .tracks
            .iter()
            .find(|t| t.first().is_some_and(|&i| self.segments[i].target.key == *key))?;
        let time = self.time_at(progress);
        Some(self.author(track, time)?.state_at(time))
    }
}

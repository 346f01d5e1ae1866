//! Turns simulated time into revealed tokens for both panes.
//!
//! Token `j` of a stream is due at `j * per_token_time`. Every due token is
//! shown at once, so a large jump in simulated time (the sped-up phase)
//! reveals many tokens in a single tick.

use crate::reading::TextStream;

pub const STREAM_COUNT: usize = 2;

/// How many leading tokens of `stream` are due by `simulated` seconds.
pub fn revealed_count(stream: &TextStream, simulated: f64) -> usize {
    count_due(stream, 0, simulated)
}

fn count_due(stream: &TextStream, from: usize, simulated: f64) -> usize {
    let per_token = match stream.per_token_time() {
        // Empty stream: nothing to reveal, already complete
        None => return 0,
        Some(per_token) => per_token,
    };
    if per_token <= 0.0 {
        return stream.len();
    }

    let mut count = from.min(stream.len());
    while count < stream.len() && count as f64 * per_token <= simulated {
        count += 1;
    }
    count
}

/// Per-cycle reveal progress. Cleared together with the clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    pub revealed: [usize; STREAM_COUNT],
    pub text: [String; STREAM_COUNT],
}

#[derive(Debug, Clone)]
pub struct DualStreamScheduler {
    streams: [TextStream; STREAM_COUNT],
    reveal: RevealState,
}

impl DualStreamScheduler {
    pub fn new(streams: [TextStream; STREAM_COUNT]) -> Self {
        Self {
            streams,
            reveal: RevealState::default(),
        }
    }

    pub fn streams(&self) -> &[TextStream; STREAM_COUNT] {
        &self.streams
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    pub fn revealed(&self) -> [usize; STREAM_COUNT] {
        self.reveal.revealed
    }

    pub fn revealed_text(&self, index: usize) -> &str {
        &self.reveal.text[index]
    }

    /// Reveals every token that is due and returns how many were added per stream.
    pub fn advance(&mut self, simulated: &[f64; STREAM_COUNT]) -> [usize; STREAM_COUNT] {
        let mut added = [0; STREAM_COUNT];

        for (index, stream) in self.streams.iter().enumerate() {
            let before = self.reveal.revealed[index];
            let after = count_due(stream, before, simulated[index]);
            for token in &stream.tokens()[before..after] {
                self.reveal.text[index].push_str(&token.text);
            }
            self.reveal.revealed[index] = after;
            added[index] = after - before;
        }

        added
    }

    pub fn is_stream_complete(&self, index: usize) -> bool {
        self.reveal.revealed[index] >= self.streams[index].len()
    }

    pub fn is_complete(&self) -> bool {
        (0..STREAM_COUNT).all(|index| self.is_stream_complete(index))
    }

    pub fn reset(&mut self) {
        self.reveal = RevealState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Token;

    fn scenario_stream() -> TextStream {
        TextStream::from_tokens(
            "left",
            vec![
                Token::word("ab"),
                Token::whitespace(' '),
                Token::word("cd"),
                Token::whitespace('\n'),
            ],
            2.0,
        )
    }

    #[test]
    fn test_concrete_scenario() {
        let stream = scenario_stream();
        assert_eq!(stream.per_token_time(), Some(0.5));
        assert_eq!(revealed_count(&stream, 0.4), 1);
        assert_eq!(revealed_count(&stream, 1.6), 4);
    }

    #[test]
    fn test_first_token_due_immediately() {
        assert_eq!(revealed_count(&scenario_stream(), 0.0), 1);
    }

    #[test]
    fn test_due_time_is_inclusive() {
        let stream = scenario_stream();
        assert_eq!(revealed_count(&stream, 0.5), 2);
        assert_eq!(revealed_count(&stream, 0.49), 1);
    }

    #[test]
    fn test_full_reveal_exactly_at_last_due_time() {
        let stream = scenario_stream();
        let last_due = (stream.len() - 1) as f64 * stream.per_token_time().unwrap();
        assert_eq!(revealed_count(&stream, last_due), stream.len());
        assert_eq!(revealed_count(&stream, last_due - 1e-6), stream.len() - 1);
    }

    #[test]
    fn test_empty_stream_is_complete() {
        let empty = TextStream::new("empty", "", 0.0);
        assert_eq!(revealed_count(&empty, 0.0), 0);
        assert_eq!(revealed_count(&empty, 100.0), 0);

        let scheduler = DualStreamScheduler::new([empty.clone(), empty]);
        assert!(scheduler.is_complete());
    }

    #[test]
    fn test_zero_elapsed_reveals_everything() {
        let stream = TextStream::new("instant", "a b c d e", 0.0);
        assert_eq!(revealed_count(&stream, 0.0), stream.len());
    }

    #[test]
    fn test_advance_appends_text_and_reports_new_tokens() {
        let mut scheduler = DualStreamScheduler::new([
            scenario_stream(),
            TextStream::new("right", "xy zw", 3.0),
        ]);

        let added = scheduler.advance(&[0.4, 0.4]);
        assert_eq!(added, [1, 1]);
        assert_eq!(scheduler.revealed_text(0), "ab");
        assert_eq!(scheduler.revealed_text(1), "xy");

        let added = scheduler.advance(&[1.6, 1.6]);
        assert_eq!(added, [3, 1]);
        assert_eq!(scheduler.revealed_text(0), "ab cd\n");
        assert_eq!(scheduler.revealed_text(1), "xy ");
        assert!(scheduler.is_stream_complete(0));
        assert!(!scheduler.is_complete());

        let added = scheduler.advance(&[2.0, 2.0]);
        assert_eq!(added, [0, 1]);
        assert!(scheduler.is_complete());
        assert_eq!(scheduler.revealed_text(1), "xy zw");
    }

    #[test]
    fn test_catch_up_in_one_tick() {
        let stream = TextStream::new("long", &"word ".repeat(100), 10.0);
        let mut scheduler = DualStreamScheduler::new([stream.clone(), stream]);
        let added = scheduler.advance(&[100.0, 5.01]);
        assert_eq!(added[0], 200);
        assert_eq!(added[1], 101);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let stream = TextStream::new("left", "First Citizen:\nBefore we proceed any further", 4.0);
        let total = stream.len();
        let mut scheduler = DualStreamScheduler::new([stream.clone(), stream]);
        let mut previous = [0; STREAM_COUNT];

        let mut simulated = 0.0;
        while simulated < 10.0 {
            scheduler.advance(&[simulated, simulated * 0.5]);
            let revealed = scheduler.revealed();
            for index in 0..STREAM_COUNT {
                assert!(revealed[index] >= previous[index]);
                assert!(revealed[index] <= total);
            }
            previous = revealed;
            simulated += 0.07;
        }
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut scheduler = DualStreamScheduler::new([scenario_stream(), scenario_stream()]);
        scheduler.advance(&[5.0, 5.0]);
        assert!(scheduler.is_complete());
        scheduler.reset();
        assert_eq!(scheduler.revealed(), [0, 0]);
        assert_eq!(scheduler.revealed_text(0), "");
        assert!(!scheduler.is_complete());
    }
}

/// Frames of the loading spinner.
pub const SPINNER_FRAMES: [&str; 8] = ["⣷", "⣯", "⣟", "⡿", "⢿", "⣻", "⣽", "⣾"];

const SPINNER_FRAMES_PER_SECOND: f64 = 10.0;
/// A backgrounded tab can deliver a frame minutes late; advance at most this much.
const SPINNER_MAX_FRAME_DELTA: f64 = 0.25;

/// Advance the spinner counter by the time since the last frame.
pub fn advance_spinner(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).clamp(0.0, SPINNER_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_counter =
        (counter + delta * SPINNER_FRAMES_PER_SECOND).rem_euclid(SPINNER_FRAMES.len() as f64);

    (next_counter, Some(now_seconds))
}

pub fn spinner_symbol(counter: f64) -> &'static str {
    let index = counter.max(0.0).floor() as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let (counter, last_tick) = advance_spinner(3.0, None, 10.0);
        assert_close(counter, 3.0);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn counter_advances_and_wraps() {
        let (counter, _) = advance_spinner(7.5, Some(4.0), 4.1);
        assert_close(counter, 0.5);
        assert_eq!(spinner_symbol(counter), SPINNER_FRAMES[0]);
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let (counter, _) = advance_spinner(0.0, Some(3.0), 300.0);
        assert_close(counter, SPINNER_MAX_FRAME_DELTA * SPINNER_FRAMES_PER_SECOND);
    }

    #[test]
    fn backwards_time_does_not_reverse() {
        let (counter, last_tick) = advance_spinner(2.0, Some(10.0), 9.0);
        assert_close(counter, 2.0);
        assert_eq!(last_tick, Some(9.0));
    }
}

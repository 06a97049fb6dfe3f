use super::deck::Difficulty;

pub const MIN_SCORE: u32 = 100;

pub fn calculate_score(difficulty: Difficulty, moves: u32, elapsed_secs: u32) -> u32 {
    let base = 1000.0 * difficulty.multiplier() - f64::from(moves) * 10.0 - f64::from(elapsed_secs) * 2.0;
    let floored = base.floor();
    if floored <= f64::from(MIN_SCORE) {
        MIN_SCORE
    } else {
        floored as u32
    }
}

/// Renders seconds as `MM:SS`; minutes keep growing past 99.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_game_in_ten_moves_and_thirty_seconds() {
        assert_eq!(calculate_score(Difficulty::Easy, 10, 30), 840);
    }

    #[test]
    fn multiplier_scales_base() {
        assert_eq!(calculate_score(Difficulty::Medium, 0, 0), 1500);
        assert_eq!(calculate_score(Difficulty::Hard, 0, 0), 2000);
        assert_eq!(calculate_score(Difficulty::Medium, 3, 7), 1500 - 30 - 14);
    }

    #[test]
    fn score_never_drops_below_floor() {
        assert_eq!(calculate_score(Difficulty::Easy, 500, 5000), MIN_SCORE);
        assert_eq!(calculate_score(Difficulty::Easy, 90, 0), MIN_SCORE);
        assert_eq!(calculate_score(Difficulty::Hard, u32::MAX, u32::MAX), MIN_SCORE);
    }

    #[test]
    fn score_decreases_with_moves_and_time() {
        let base = calculate_score(Difficulty::Medium, 20, 40);
        assert!(calculate_score(Difficulty::Medium, 21, 40) < base);
        assert!(calculate_score(Difficulty::Medium, 20, 41) < base);
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(6000), "100:00");
    }
}

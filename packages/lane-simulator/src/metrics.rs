//! Metrics collection for simulation results.

use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: SimConfig,
    pub result: GameResultMetrics,
    pub lanes: Vec<LaneMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    pub styles: Vec<String>,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u16>,
    /// Winning lane index (ties go to the earliest lane).
    pub winner: u8,
    pub total_rolls: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaneMetrics {
    pub lane: u8,
    pub style: String,
    pub score: u16,
    pub strikes: u32,
    pub spares: u32,
    pub perfect: bool,
}

/// One row per game in the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub lanes: usize,
    pub winner: u8,
    pub winner_score: u16,
    pub mean_score: f64,
    pub strikes: u32,
    pub spares: u32,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        let scores = &m.result.final_scores;
        let mean_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
        };
        Self {
            game_id: m.game_id,
            seed: m.seed,
            lanes: m.lanes.len(),
            winner: m.result.winner,
            winner_score: scores.get(m.result.winner as usize).copied().unwrap_or(0),
            mean_score,
            strikes: m.lanes.iter().map(|l| l.strikes).sum(),
            spares: m.lanes.iter().map(|l| l.spares).sum(),
        }
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    styles: &[String],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let winner = result
        .final_scores
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
        .map(|(i, _)| i as u8)
        .unwrap_or(0);

    let lanes = styles
        .iter()
        .enumerate()
        .map(|(i, style)| LaneMetrics {
            lane: i as u8,
            style: style.clone(),
            score: result.final_scores[i],
            strikes: result.strikes[i],
            spares: result.spares[i],
            perfect: result.final_scores[i] == 300,
        })
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: SimConfig {
            styles: styles.to_vec(),
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winner,
            total_rolls: result.total_rolls,
            duration_ms,
        },
        lanes,
    }
}

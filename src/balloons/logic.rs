//! Round logic for Balloon Words.

use super::types::{
    Balloon, BalloonGame, ClickEvent, GameOverNotice, RoundPhase, VocabularyEntry, PALETTE,
};
use rand::Rng;

/// Replace the balloon set with one fresh balloon per vocabulary entry and
/// pick a target. The score is left alone.
///
/// Balloons spawn at a random column inside the spawn margins and a random
/// height within one canvas height below the visible area, so they drift in
/// from the bottom at staggered times.
pub fn init_game<R: Rng>(game: &mut BalloonGame, rng: &mut R) {
    let config = &game.config;
    let (width, height) = (config.canvas_width, config.canvas_height);
    let margin = config.spawn_margin;

    game.balloons = game
        .vocabulary
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let x = rng.gen_range(margin..width - margin);
            let y = rng.gen_range(height..height * 2.0);
            let color = PALETTE[index % PALETTE.len()];
            Balloon::spawn(x, y, entry.word, color, config, rng)
        })
        .collect();
    game.phase = RoundPhase::Active;

    tracing::debug!(balloons = game.balloons.len(), "spawned balloon set");
    select_new_word(game, rng);
}

/// Entries that still have at least one unpopped balloon, in vocabulary order.
pub fn available_words(game: &BalloonGame) -> Vec<VocabularyEntry> {
    game.vocabulary
        .iter()
        .filter(|entry| {
            game.balloons
                .iter()
                .any(|b| !b.popped && b.word == entry.word)
        })
        .copied()
        .collect()
}

/// Pick the next target uniformly among the available words.
///
/// When none are left the game is over: the notice is recorded, a new
/// balloon set is spawned and the score resets to 0. The phase stays
/// [`RoundPhase::Over`] until [`acknowledge_game_over`]. Returns the notice in
/// that case.
pub fn select_new_word<R: Rng>(game: &mut BalloonGame, rng: &mut R) -> Option<GameOverNotice> {
    let available = available_words(game);

    if available.is_empty() {
        game.games_played += 1;
        let notice = GameOverNotice {
            final_score: game.score,
            game_number: game.games_played,
        };
        game.best_score = game.best_score.max(notice.final_score);
        game.pending_notice = Some(notice);
        tracing::info!(
            final_score = notice.final_score,
            game = notice.game_number,
            "game over"
        );

        init_game(game, rng);
        game.score = 0;
        game.phase = RoundPhase::Over;
        return Some(notice);
    }

    game.target = available[rng.gen_range(0..available.len())];
    tracing::debug!(word = game.target.word, "new target");
    None
}

/// Apply a click at canvas point `(x, y)`.
///
/// Every unpopped balloon under the point is resolved in collection order
/// against the target that was showing when the click landed, so
/// overlapping balloons can score (or cost) more than once. A game-over ends
/// processing: the remaining hits belonged to the balloon set that was just
/// replaced.
///
/// Clicks are ignored while a game-over notice is pending.
pub fn handle_click<R: Rng>(
    game: &mut BalloonGame,
    x: f64,
    y: f64,
    rng: &mut R,
) -> Vec<ClickEvent> {
    let mut events = Vec::new();
    if game.phase == RoundPhase::Over {
        return events;
    }
    let target = game.target;
    game.phase = RoundPhase::Resolving;

    for index in 0..game.balloons.len() {
        if !game.balloons[index].is_clicked(x, y) {
            continue;
        }
        let word = game.balloons[index].word;

        if word == target.word {
            game.balloons[index].popped = true;
            game.score = game.score.saturating_add(game.config.correct_points);
            tracing::info!(word, score = game.score, "popped target");
            events.push(ClickEvent::Popped {
                word,
                score: game.score,
            });

            if let Some(notice) = select_new_word(game, rng) {
                events.push(ClickEvent::GameOver(notice));
                break;
            }
        } else {
            game.score = game.score.saturating_sub(game.config.wrong_penalty);
            tracing::info!(word, wanted = target.word, score = game.score, "wrong balloon");
            events.push(ClickEvent::Missed {
                word,
                target: target.word,
                score: game.score,
            });
        }
    }

    if game.phase == RoundPhase::Resolving {
        game.phase = RoundPhase::Active;
    }
    events
}

/// Advance every balloon by one animation frame.
pub fn process_tick(game: &mut BalloonGame) {
    let height = game.config.canvas_height;
    for balloon in &mut game.balloons {
        balloon.update(height);
    }
}

/// Abandon the current game and start over with a zero score.
pub fn restart<R: Rng>(game: &mut BalloonGame, rng: &mut R) {
    tracing::info!(score = game.score, "restarted by player");
    game.pending_notice = None;
    init_game(game, rng);
    game.score = 0;
}

/// Clear the game-over notice once the player has seen it.
pub fn acknowledge_game_over(game: &mut BalloonGame) -> Option<GameOverNotice> {
    let notice = game.pending_notice.take();
    if notice.is_some() {
        game.phase = RoundPhase::Active;
    }
    notice
}

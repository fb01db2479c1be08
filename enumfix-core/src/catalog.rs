//! Built-in migrations.

use camino::Utf8PathBuf;
use enumfix_types::migration::{Migration, PatternEntry};

pub const BETTING_ROUND: &str = "betting-round";

pub const BETTING_ROUND_IMPORT: &str =
    "import com.donohoedigital.games.poker.core.state.BettingRound;";

pub const BETTING_ROUND_PATTERNS: [(&str, &str); 6] = [
    ("HoldemHand.ROUND_NONE", "BettingRound.NONE"),
    ("HoldemHand.ROUND_PRE_FLOP", "BettingRound.PRE_FLOP"),
    ("HoldemHand.ROUND_FLOP", "BettingRound.FLOP"),
    ("HoldemHand.ROUND_TURN", "BettingRound.TURN"),
    ("HoldemHand.ROUND_RIVER", "BettingRound.RIVER"),
    ("HoldemHand.ROUND_SHOWDOWN", "BettingRound.SHOWDOWN"),
];

pub const BETTING_ROUND_FILES: [&str; 38] = [
    "poker/src/main/java/com/donohoedigital/games/poker/ai/AIOutcome.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/gui/AdvisorInfoDialog.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/OpponentModel.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/PocketWeights.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/PokerAI.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/RuleEngine.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/V1Player.java",
    "poker/src/main/java/com/donohoedigital/games/poker/ai/V2Player.java",
    "poker/src/main/java/com/donohoedigital/games/poker/Bet.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/AdvanceAction.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/DashboardAdvisor.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/HandStrengthDash.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/ImproveOdds.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/Odds.java",
    "poker/src/main/java/com/donohoedigital/games/poker/dashboard/PotOdds.java",
    "poker/src/main/java/com/donohoedigital/games/poker/DealCommunity.java",
    "poker/src/main/java/com/donohoedigital/games/poker/HandAction.java",
    "poker/src/main/java/com/donohoedigital/games/poker/HandHistoryPanel.java",
    "poker/src/main/java/com/donohoedigital/games/poker/HandPotential.java",
    "poker/src/main/java/com/donohoedigital/games/poker/HoldemHand.java",
    "poker/src/main/java/com/donohoedigital/games/poker/impexp/ImpExpParadise.java",
    "poker/src/main/java/com/donohoedigital/games/poker/impexp/ImpExpUB.java",
    "poker/src/main/java/com/donohoedigital/games/poker/logic/DealingRules.java",
    "poker/src/main/java/com/donohoedigital/games/poker/online/TournamentDirector.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PlayerProfile.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PokerDatabase.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PokerGame.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PokerGameboard.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PokerStatsPanel.java",
    "poker/src/main/java/com/donohoedigital/games/poker/PokerTable.java",
    "poker/src/main/java/com/donohoedigital/games/poker/Showdown.java",
    "poker/src/main/java/com/donohoedigital/games/poker/SimulatorDialog.java",
    "poker/src/main/java/com/donohoedigital/games/poker/StatisticsViewer.java",
    "poker/src/main/java/com/donohoedigital/games/poker/TournamentDirectorPauser.java",
    "poker/src/test/java/com/donohoedigital/games/poker/ai/OpponentModelTest.java",
    "poker/src/test/java/com/donohoedigital/games/poker/HandActionTest.java",
    "poker/src/test/java/com/donohoedigital/games/poker/HoldemHandPotCalculationTest.java",
    "poker/src/test/java/com/donohoedigital/games/poker/HoldemHandTest.java",
];

/// `HoldemHand.ROUND_*` int constants to the `BettingRound` enum.
pub fn betting_round() -> Migration {
    Migration {
        name: BETTING_ROUND.to_string(),
        import_line: BETTING_ROUND_IMPORT.to_string(),
        patterns: BETTING_ROUND_PATTERNS
            .iter()
            .map(|(legacy, replacement)| PatternEntry::new(*legacy, *replacement))
            .collect(),
        files: BETTING_ROUND_FILES
            .iter()
            .map(|f| Utf8PathBuf::from(*f))
            .collect(),
    }
}

pub fn builtin(name: &str) -> Option<Migration> {
    match name {
        BETTING_ROUND => Some(betting_round()),
        _ => None,
    }
}

pub fn builtin_names() -> &'static [&'static str] {
    &[BETTING_ROUND]
}

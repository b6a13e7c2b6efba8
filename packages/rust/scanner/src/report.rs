//! Result reporting: console lines, flat-file output, and JSON.

use std::path::Path;

use similarscan_shared::{GameItem, Result, ScanError};

use crate::engine::ScanOutcome;

/// Render one accepted item as its report line.
fn line(game: &GameItem) -> String {
    format!("{}, {}", game.name, game.href)
}

/// Print one line per accepted item to stdout.
pub fn print_games(games: &[GameItem]) {
    for game in games {
        println!("{}", line(game));
    }
}

/// Write per-item lines to `path` — newline-terminated, no header.
///
/// A write failure surfaces as [`ScanError::Io`]; the scan's in-memory
/// results are unaffected.
pub fn write_games(games: &[GameItem], path: &Path) -> Result<()> {
    let mut out = String::with_capacity(games.len() * 80);
    for game in games {
        out.push_str(&line(game));
        out.push('\n');
    }
    std::fs::write(path, out).map_err(|e| ScanError::io(path, e))
}

/// Serialize accepted items as pretty-printed JSON.
pub fn games_json(games: &[GameItem]) -> Result<String> {
    serde_json::to_string_pretty(games).map_err(|e| ScanError::parse(e.to_string()))
}

/// One-line scan summary.
pub fn summary(outcome: &ScanOutcome) -> String {
    format!(
        "Found {} games after {} calls ({}).",
        outcome.games.len(),
        outcome.calls,
        outcome.stop
    )
}

#[cfg(test)]
mod tests {
    use similarscan_shared::AppId;

    use super::*;
    use crate::engine::StopReason;

    fn game(name: &str) -> GameItem {
        GameItem {
            appid: Some(AppId(620)),
            href: format!("https://store.steampowered.com/app/620/{name}/"),
            name: name.into(),
            depth: 1,
            category: "released".into(),
        }
    }

    #[test]
    fn line_pairs_name_and_href() {
        let games = vec![game("Portal_2")];
        assert_eq!(
            line(&games[0]),
            "Portal_2, https://store.steampowered.com/app/620/Portal_2/"
        );
    }

    #[test]
    fn write_games_emits_one_line_per_item() {
        let games = vec![game("Portal_2"), game("Half_Life")];
        let path = std::env::temp_dir().join("similarscan-report-test.txt");

        write_games(&games, &path).expect("write");
        let content = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Portal_2, "));
        assert!(content.ends_with('\n'));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_games_surfaces_io_failure() {
        let path = Path::new("/nonexistent-dir/similarscan/out.txt");
        let err = write_games(&[game("x")], path).expect_err("should fail");
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn games_json_is_parseable() {
        let games = vec![game("Portal_2")];
        let json = games_json(&games).expect("serialize");
        let parsed: Vec<GameItem> = serde_json::from_str(&json).expect("parse back");
        assert_eq!(parsed, games);
    }

    #[test]
    fn summary_names_the_stop_reason() {
        let outcome = ScanOutcome {
            games: vec![game("Portal_2")],
            calls: 7,
            visited: 9,
            queued: 3,
            stop: StopReason::BudgetExhausted,
        };
        assert_eq!(
            summary(&outcome),
            "Found 1 games after 7 calls (reached the fetch-call budget)."
        );
    }
}

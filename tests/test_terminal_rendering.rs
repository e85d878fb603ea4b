//! Tests for the console and JSON front-ends driven by a real game.

use zombies_vs_humans::{
    ConsoleUi, Game, GameConfig, JsonLinesUi, ScriptedInput, SimResult, UiEvent,
};

#[test]
fn test_console_transcript() -> SimResult<()> {
    let mut game = Game::new(GameConfig::new(6, 4, 2, 5, 3).with_seed(31))?;
    let mut ui = ConsoleUi::new(Vec::new());

    let state = game.run(&mut ui, &mut ScriptedInput::default())?;
    let text = String::from_utf8(ui.into_inner()).expect("console output is UTF-8");

    assert!(text.starts_with("World of 6x4 cells\n"));
    assert!(text.contains("Turn 0\n"));
    assert!(text.contains("[ Turn: 0 | Zombies: "));
    assert!(text.contains(&format!("{}\n", state.describe())));
    assert!(text.ends_with("Game over\n"));

    // Grid rows are the lines made only of cells
    let is_cell = |token: &str| {
        token == "..."
            || (token.len() > 1
                && token.starts_with(['z', 'h'])
                && token[1..].chars().all(|c| c.is_ascii_digit()))
    };
    let rows: Vec<&str> = text
        .lines()
        .filter(|line| !line.is_empty() && line.split_whitespace().all(is_cell))
        .collect();
    assert!(!rows.is_empty());
    assert_eq!(rows.len() % 4, 0);
    for row in rows {
        assert_eq!(row.split_whitespace().count(), 6, "bad row: {:?}", row);
    }
    Ok(())
}

#[test]
fn test_json_stream_mirrors_the_recording() -> SimResult<()> {
    let mut game = Game::new(GameConfig::new(5, 5, 1, 3, 4).with_seed(8))?;
    let mut ui = JsonLinesUi::new(Vec::new());
    game.run(&mut ui, &mut ScriptedInput::default())?;

    let text = String::from_utf8(ui.into_inner()).expect("JSON output is UTF-8");
    let events = text
        .lines()
        .map(serde_json::from_str::<UiEvent>)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(events.first(), Some(&UiEvent::Initialize { x_dim: 5, y_dim: 5 }));
    assert_eq!(events.last(), Some(&UiEvent::Finish));

    let worlds = events
        .iter()
        .filter_map(|event| match event {
            UiEvent::World { world } => Some(world),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert!(worlds.len() >= 2);
    for world in worlds {
        assert_eq!(world.agents.len(), 4);
    }
    Ok(())
}

//! Grouping of properties by keywords in their path.

use std::fmt;

/// Coarse grouping of a property, derived from its path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Position,
    GameSettings,
    Time,
    Weather,
    Player,
    World,
    CheatsAndCommands,
    Experiments,
    Other,
}

// Order is significant, the first rule with a matching keyword wins.
const RULES: &[(&[&str], Category)] = &[
    (&["spawn", "position", "pos"], Category::Position),
    (&["game", "mode", "difficulty"], Category::GameSettings),
    (&["time", "day", "tick"], Category::Time),
    (&["weather", "rain", "thunder"], Category::Weather),
    (&["player", "xp", "level"], Category::Player),
    (&["world", "seed", "generator"], Category::World),
    (&["cheat", "command", "allow"], Category::CheatsAndCommands),
    (&["experiment", "beta"], Category::Experiments),
];

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 9] = [
        Category::Position,
        Category::GameSettings,
        Category::Time,
        Category::Weather,
        Category::Player,
        Category::World,
        Category::CheatsAndCommands,
        Category::Experiments,
        Category::Other,
    ];

    /// Categorize a dotted property path.
    pub fn of(path: &str) -> Category {
        let lower = path.to_lowercase();

        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(Category::Other, |(_, category)| *category)
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Category::Position => "Position",
            Category::GameSettings => "Game Settings",
            Category::Time => "Time",
            Category::Weather => "Weather",
            Category::Player => "Player",
            Category::World => "World",
            Category::CheatsAndCommands => "Cheats & Commands",
            Category::Experiments => "Experiments",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::category::Category;

    #[test]
    fn categorize_level_dat_names() {
        assert_eq!(Category::of("SpawnY"), Category::Position);
        assert_eq!(Category::of("abilities.flySpeed"), Category::Other);
        assert_eq!(Category::of("GameType"), Category::GameSettings);
        assert_eq!(Category::of("Difficulty"), Category::GameSettings);
        assert_eq!(Category::of("Time"), Category::Time);
        assert_eq!(Category::of("rainLevel"), Category::Weather);
        assert_eq!(Category::of("LevelName"), Category::Player);
        assert_eq!(Category::of("RandomSeed"), Category::World);
        assert_eq!(Category::of("commandsEnabled"), Category::CheatsAndCommands);
        assert_eq!(Category::of("betaFeatures"), Category::Experiments);
        assert_eq!(Category::of("LastPlayed"), Category::Other);
    }

    #[test]
    fn first_rule_wins() {
        // "time" is tried before "rain"
        assert_eq!(Category::of("rainTime"), Category::Time);
        // "xp" inside "experiments" is tried before "experiment"
        assert_eq!(
            Category::of("experiments.experiments_ever_used"),
            Category::Player
        );
        // "mode" before "player"
        assert_eq!(Category::of("playerGameMode"), Category::GameSettings);
    }

    #[test]
    fn categorize_ignores_case() {
        assert_eq!(Category::of("SPAWNX"), Category::Position);
        assert_eq!(Category::of("spawnx"), Category::Position);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::CheatsAndCommands.to_string(), "Cheats & Commands");
        assert_eq!(Category::GameSettings.label(), "Game Settings");
        assert_eq!(Category::ALL.len(), 9);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Target id of the combat-bot AI module.
pub const BOT_MODULE: &str = "bot";
/// Target id of the team-deathmatch game-mode module.
pub const GAME_MODE: &str = "game_mode";
/// Target id of the manual testing guide.
pub const TESTING_GUIDE: &str = "testing_guide";

/// A named regular expression that must match somewhere in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub regex: String,
}

/// A file the verifier looks at, plus the structural patterns it must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFile {
    pub id: String,
    pub label: String,
    /// Relative to the root dir unless absolute.
    pub path: PathBuf,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
}

/// A substring heuristic for leftovers of a rename. Fires when `needle` is
/// present and `unless` (if any) is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRule {
    pub target: String,
    pub needle: String,
    #[serde(default)]
    pub unless: Option<String>,
    #[serde(default)]
    pub ignore_case: bool,
    pub issue: String,
}

/// Lines printed under the structural summary when everything passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryText {
    #[serde(default)]
    pub confirmations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(skip)]
    pub root_dir: PathBuf,
    pub targets: Vec<TargetFile>,
    #[serde(default)]
    pub health: Vec<HealthRule>,
    #[serde(default)]
    pub summary: SummaryText,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    UnknownTarget(String),
    DuplicateTarget(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Could not read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Invalid config {}: {source}", path.display())
            }
            ConfigError::UnknownTarget(id) => {
                write!(f, "Health rule references unknown target '{id}'")
            }
            ConfigError::DuplicateTarget(id) => {
                write!(f, "Target id '{id}' is defined more than once")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl VerifyConfig {
    /// Built-in tables for the CTFBot + TDM integration, rooted at the game-mode
    /// directory (`CTF_TDM`).
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            targets: default_targets(),
            health: default_health_rules(),
            summary: default_summary(),
        }
    }

    /// Replace the built-in tables with a JSON file.
    pub fn load(root: &Path, config_path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        config.root_dir = root.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, target) in self.targets.iter().enumerate() {
            if self.targets[..i].iter().any(|t| t.id == target.id) {
                return Err(ConfigError::DuplicateTarget(target.id.clone()));
            }
        }
        for rule in &self.health {
            if self.target(&rule.target).is_none() {
                return Err(ConfigError::UnknownTarget(rule.target.clone()));
            }
        }
        Ok(())
    }

    pub fn target(&self, id: &str) -> Option<&TargetFile> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Join `target.path` onto the root. `..` is folded against the root's
    /// text; symlinks are never consulted.
    pub fn resolve(&self, target: &TargetFile) -> PathBuf {
        let mut resolved = self.root_dir.clone();
        for component in target.path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(resolved.components().next_back(), Some(Component::Normal(_))) {
                        resolved.pop();
                    } else {
                        resolved.push("..");
                    }
                }
                other => resolved.push(other.as_os_str()),
            }
        }
        resolved
    }

    pub fn rules_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a HealthRule> + 'a {
        self.health.iter().filter(move |r| r.target == id)
    }
}

fn default_required() -> bool {
    true
}

fn pattern(name: &str, regex: &str) -> Pattern {
    Pattern {
        name: name.to_string(),
        regex: regex.to_string(),
    }
}

pub fn bot_module_patterns() -> Vec<Pattern> {
    vec![
        pattern("Namespace", r"namespace\s+InfServer\.Script\.CTFBot"),
        pattern("Class Definition", r"class\s+Script_CTF\s*:\s*Scripts\.IScript"),
        pattern("Member Variables", r"private\s+Bot\s+_bot"),
        pattern("Weapon Types", r"private\s+enum\s+WeaponType.*AR.*Shotgun.*RifleGrenade"),
        pattern("Debug Messages", r#"Console\.WriteLine\("\[CTF DEBUG\]"#),
        pattern("Init Method", r"public\s+bool\s+init\(IEventObject\s+invoker\)"),
        pattern("Poll Method", r"public\s+bool\s+poll\(\)"),
        pattern("Combat Logic", r"private\s+void\s+doCombatLogic"),
        pattern("Weapon Switching", r"ChooseOptimalWeaponForDistance"),
        pattern("Target Acquisition", r"getClosestPlayer"),
    ]
}

pub fn game_mode_patterns() -> Vec<Pattern> {
    vec![
        pattern("CTFBot Import", r"using\s+InfServer\.Script\.CTFBot"),
        pattern("Bot List", r"public\s+List<Bot>\s+_ctfBots"),
        pattern("Bot Spawning", r"private\s+void\s+handleBotSpawning"),
        pattern("Vehicle Selection", r"getCTFBotVehicleType.*301.*129"),
        pattern("Bot Management", r"private\s+void\s+manageBots"),
        pattern("Spawn Intervals", r"BOT_SPAWN_MIN_INTERVAL.*BOT_SPAWN_MAX_INTERVAL"),
        pattern("Skill Levels", r"enum\s+BotSkillLevel.*Weak.*Average.*Strong.*Elite"),
        pattern("Poll Integration", r"handleBotSpawning\(now\).*manageBots\(now\)"),
        pattern("CTFBot Creation", r"InfServer\.Script\.CTFBot\.Script_CTF"),
        pattern("Team Balance", r"getTeamWithFewestBots"),
    ]
}

pub fn default_targets() -> Vec<TargetFile> {
    vec![
        TargetFile {
            id: BOT_MODULE.to_string(),
            label: "CTFBot.cs".to_string(),
            path: PathBuf::from("../Bots/CTFBot.cs"),
            required: true,
            patterns: bot_module_patterns(),
        },
        TargetFile {
            id: GAME_MODE.to_string(),
            label: "TDM.cs".to_string(),
            path: PathBuf::from("TDM.cs"),
            required: true,
            patterns: game_mode_patterns(),
        },
        TargetFile {
            id: TESTING_GUIDE.to_string(),
            label: "Testing Guide".to_string(),
            path: PathBuf::from("TESTING_GUIDE.md"),
            required: false,
            patterns: vec![],
        },
    ]
}

fn rule(
    target: &str,
    needle: &str,
    unless: Option<&str>,
    ignore_case: bool,
    issue: &str,
) -> HealthRule {
    HealthRule {
        target: target.to_string(),
        needle: needle.to_string(),
        unless: unless.map(str::to_string),
        ignore_case,
        issue: issue.to_string(),
    }
}

pub fn default_health_rules() -> Vec<HealthRule> {
    vec![
        rule(
            BOT_MODULE,
            "DuelBot",
            Some("namespace InfServer.Script.DuelBot"),
            false,
            "CTFBot.cs still contains DuelBot references",
        ),
        rule(
            BOT_MODULE,
            "[DEBUG]",
            Some("[CTF DEBUG]"),
            false,
            "CTFBot.cs debug messages not updated to CTF prefix",
        ),
        rule(
            GAME_MODE,
            "ArenaBot",
            None,
            false,
            "TDM.cs still references ArenaBot instead of CTFBot",
        ),
        rule(
            GAME_MODE,
            "vehicle 113",
            None,
            true,
            "TDM.cs still uses vehicle 113 instead of 301/129",
        ),
    ]
}

pub fn default_summary() -> SummaryText {
    let lines = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    SummaryText {
        confirmations: lines(&[
            "Integration appears ready for testing",
            "CTFBot has proper structure and combat AI",
            "TDM has bot spawning integration",
            "Vehicle alternation (301/129) configured",
            "Namespace and imports correct",
        ]),
        next_steps: lines(&[
            "Compile the server and check for errors",
            "Start TDM game mode",
            "Follow the TESTING_GUIDE.md for detailed testing",
            "Look for '[CTF DEBUG]' messages in console",
            "Verify bots spawn with alternating vehicles 301/129",
        ]),
    }
}

//! Game configuration and maze file loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mazechase_core::{Maze, MazeError};
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while loading a game.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),

    #[error("maze has no player spawn")]
    MissingPlayer,

    #[error("frame_rate must be at least 1")]
    FrameRate,
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// Variation selector requesting emoji presentation of the preceding char.
const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// A glyph string that cannot be drawn in one maze cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    #[error("glyph is empty")]
    Empty,

    #[error("glyph {0:?} is wider than two columns")]
    TooLong(String),
}

/// What one maze cell is drawn with.
///
/// Parsed from a string of one or two characters, ignoring U+FE0F. When a
/// maze cell is two screen columns wide, a single wide character (an emoji)
/// covers both, a single narrow character is padded with a space in the
/// same style, and two characters fill one column each (`"██"`). Joined
/// emoji sequences (ZWJ) are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Glyph {
    head: char,
    tail: Option<char>,
}

impl Glyph {
    /// A one-column glyph.
    pub const fn narrow(ch: char) -> Self {
        Self {
            head: ch,
            tail: Some(' '),
        }
    }

    /// Parse a glyph string.
    pub fn parse(text: &str) -> Result<Self, GlyphError> {
        let emoji = text.contains(EMOJI_PRESENTATION);
        let mut chars = text.chars().filter(|&c| c != EMOJI_PRESENTATION);
        let head = chars.next().ok_or(GlyphError::Empty)?;
        let second = chars.next();
        if chars.next().is_some() {
            return Err(GlyphError::TooLong(text.to_string()));
        }
        let tail = match second {
            Some(c) => Some(c),
            None if emoji || is_wide(head) => None,
            None => Some(' '),
        };
        Ok(Self { head, tail })
    }

    /// Character for the first (or only) screen column.
    pub fn head(&self) -> char {
        self.head
    }

    /// Character for the second screen column in double-width layout;
    /// `None` when the head already covers it.
    pub fn tail(&self) -> Option<char> {
        self.tail
    }
}

impl TryFrom<String> for Glyph {
    type Error = GlyphError;

    fn try_from(text: String) -> Result<Self, GlyphError> {
        Self::parse(&text)
    }
}

/// Whether `c` takes two terminal columns: East Asian wide ranges and the
/// pictographic emoji blocks.
fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2B1B..=0x2B1C
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x1F680..=0x1F6FF
            | 0x1F7E0..=0x1F7EB
            | 0x1F900..=0x1F9FF
            | 0x1FA70..=0x1FAFF
            | 0x20000..=0x3FFFD
    )
}

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Glyphs and timing, read from a JSON file.
///
/// Every field is optional in the file and unknown fields are ignored. The
/// chaser glyph may be given as `chaser` or `ghost`; `chaser` wins when
/// both are present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct GameConfig {
    pub player: Glyph,
    pub chaser: Glyph,
    pub wall: Glyph,
    pub dot: Glyph,
    pub pill: Glyph,
    pub death: Glyph,
    pub space: Glyph,
    /// Draw every maze column two terminal columns wide.
    pub use_emoji: bool,
    /// Simulation ticks per second.
    pub frame_rate: u64,
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: Glyph::narrow('P'),
            chaser: Glyph::narrow('G'),
            wall: Glyph::narrow('#'),
            dot: Glyph::narrow('.'),
            pill: Glyph::narrow('X'),
            death: Glyph::narrow('*'),
            space: Glyph::narrow(' '),
            use_emoji: false,
            frame_rate: 5,
            lives: 1,
        }
    }
}

/// On-disk layout of [`GameConfig`].
#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    player: Glyph,
    chaser: Option<Glyph>,
    ghost: Option<Glyph>,
    wall: Glyph,
    dot: Glyph,
    pill: Glyph,
    death: Glyph,
    space: Glyph,
    use_emoji: bool,
    frame_rate: u64,
    lives: u32,
}

impl Default for RawConfig {
    fn default() -> Self {
        let d = GameConfig::default();
        Self {
            player: d.player,
            chaser: None,
            ghost: None,
            wall: d.wall,
            dot: d.dot,
            pill: d.pill,
            death: d.death,
            space: d.space,
            use_emoji: d.use_emoji,
            frame_rate: d.frame_rate,
            lives: d.lives,
        }
    }
}

impl From<RawConfig> for GameConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            player: raw.player,
            chaser: raw
                .chaser
                .or(raw.ghost)
                .unwrap_or(GameConfig::default().chaser),
            wall: raw.wall,
            dot: raw.dot,
            pill: raw.pill,
            death: raw.death,
            space: raw.space,
            use_emoji: raw.use_emoji,
            frame_rate: raw.frame_rate,
            lives: raw.lives,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let cfg = Self::from_json(&read(path)?)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::FrameRate);
        }
        Ok(())
    }

    /// Time between two simulation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.frame_rate.max(1))
    }

    /// Terminal columns used per maze column.
    pub fn cell_width(&self) -> i32 {
        if self.use_emoji { 2 } else { 1 }
    }
}

/// Read a maze from a text file, one maze row per line.
///
/// Trailing blank lines are ignored.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, ConfigError> {
    let path = path.as_ref();
    let text = read(path)?;
    let maze = Maze::parse(text.trim_end_matches(['\n', '\r']))?;
    log::info!(
        "loaded {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A file in the system temp directory, removed on drop.
    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("mazechase-{}-{name}", std::process::id()));
            let mut f = fs::File::create(&path).unwrap();
            f.write_all(contents.as_bytes()).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn full_config_parses() {
        let cfg = GameConfig::from_json(
            r##"{
                "player": "@", "ghost": "g", "wall": "#", "dot": ".",
                "pill": "o", "death": "x", "space": " ",
                "use_emoji": true, "frame_rate": 10, "lives": 3
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.player.head(), '@');
        assert_eq!(cfg.chaser.head(), 'g');
        assert_eq!(cfg.pill.head(), 'o');
        assert!(cfg.use_emoji);
        assert_eq!(cfg.lives, 3);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(100));
        assert_eq!(cfg.cell_width(), 2);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = GameConfig::from_json(r#"{"player": "@", "extra": 1}"#).unwrap();
        assert_eq!(cfg.player, Glyph::narrow('@'));
        assert_eq!(
            GameConfig {
                player: Glyph::narrow('P'),
                ..cfg
            },
            GameConfig::default()
        );
    }

    #[test]
    fn emoji_glyphs_cover_both_columns() {
        let cfg = GameConfig::from_json(r#"{"player": "😋", "chaser": "👻"}"#).unwrap();
        assert_eq!(cfg.player.head(), '😋');
        assert_eq!(cfg.player.tail(), None);
        assert_eq!(cfg.chaser.head(), '👻');
    }

    #[test]
    fn ghost_and_chaser_keys_both_accepted() {
        let both =
            GameConfig::from_json(r#"{"ghost": "G", "chaser": "C", "frame_rate": 5}"#).unwrap();
        assert_eq!(both.chaser.head(), 'C');
        let reversed = GameConfig::from_json(r#"{"chaser": "C", "ghost": "G"}"#).unwrap();
        assert_eq!(reversed.chaser.head(), 'C');
        let ghost_only = GameConfig::from_json(r#"{"ghost": "g"}"#).unwrap();
        assert_eq!(ghost_only.chaser.head(), 'g');
        let neither = GameConfig::from_json("{}").unwrap();
        assert_eq!(neither.chaser, GameConfig::default().chaser);
    }

    #[test]
    fn glyph_strings() {
        assert_eq!(Glyph::parse("#"), Ok(Glyph::narrow('#')));
        let block = Glyph::parse("██").unwrap();
        assert_eq!((block.head(), block.tail()), ('█', Some('█')));
        let heart = Glyph::parse("❤\u{FE0F}").unwrap();
        assert_eq!((heart.head(), heart.tail()), ('❤', None));
        let square = Glyph::parse("🟦").unwrap();
        assert_eq!(square.tail(), None);
        assert_eq!(Glyph::parse(""), Err(GlyphError::Empty));
        assert!(matches!(Glyph::parse("abc"), Err(GlyphError::TooLong(_))));
        // Family emoji: three people joined by ZWJ.
        assert!(Glyph::parse("👨\u{200D}👩\u{200D}👧").is_err());
    }

    #[test]
    fn bad_json_is_rejected() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"player": "too long"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{"frame_rate": 0}"#),
            Err(ConfigError::FrameRate)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::load("/nonexistent/mazechase/config.json").unwrap_err();
        match &err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/mazechase/config.json"))
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn config_file_loads() {
        let f = TempFile::new("config.json", r#"{"wall": "█", "frame_rate": 2}"#);
        let cfg = GameConfig::load(&f.0).unwrap();
        assert_eq!(cfg.wall.head(), '█');
        assert_eq!(cfg.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn maze_file_loads_with_trailing_newlines() {
        let f = TempFile::new("maze.txt", "#####\n#P.G#\n#####\n\n");
        let maze = load_maze(&f.0).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (3, 5));
        assert_eq!(maze.dots(), 1);
        assert_eq!(maze.spawns().len(), 2);
    }

    #[test]
    fn bundled_assets_parse() {
        let cfg = GameConfig::from_json(include_str!("../assets/config.json")).unwrap();
        assert_eq!(cfg.lives, 3);
        let emoji = GameConfig::from_json(include_str!("../assets/config_emoji.json")).unwrap();
        assert!(emoji.use_emoji);

        let maze = Maze::parse(include_str!("../assets/maze.txt").trim_end()).unwrap();
        assert_eq!(maze.cols(), 28);
        assert!(maze.dots() > 0);
    }

    #[test]
    fn ragged_maze_file_is_rejected() {
        let f = TempFile::new("ragged.txt", "#####\n#P.#\n#####\n");
        assert!(matches!(
            load_maze(&f.0),
            Err(ConfigError::Maze(MazeError::InconsistentSize { row: 1, .. }))
        ));
    }
}

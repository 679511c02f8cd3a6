//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── build      # [build]
//! │   └── serve      # [serve]
//! ├── error          # ConfigError + ConfigDiagnostics
//! ├── field          # FieldPath
//! ├── handle         # Global config handle (arc-swap)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! | Section   | Purpose                                      |
//! |-----------|----------------------------------------------|
//! | `[site]`  | Site metadata (title, author, url, language) |
//! | `[build]` | Content/assets/output paths, minify          |
//! | `[serve]` | Development server (port, interface, watch)  |

mod error;
mod field;
mod handle;
pub mod section;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, reload_config};

pub use section::{BuildSectionConfig, ServeConfig, SiteSectionConfig};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'folio init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if !cli.is_init() {
            config.validate_paths()?;
        }

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);
        self.apply_command_options(cli);

        // Extract path_prefix from site.url so production links work for
        // subdirectory deployments (e.g. GitHub Pages project sites)
        self.sync_path_prefix_from_url();

        // In serve mode, clear path_prefix so local pages are reachable at /
        if matches!(cli.command, Commands::Serve { .. }) {
            self.build.path_prefix = PathBuf::new();
        }
    }

    /// Derive path_prefix from site.url.
    fn sync_path_prefix_from_url(&mut self) {
        if let Some(url) = &self.site.url
            && let Ok(parsed) = url::Url::parse(url)
        {
            let path = parsed.path().trim_matches('/');
            if !path.is_empty() {
                self.build.path_prefix = PathBuf::from(path);
            }
        }
    }

    /// Parse configuration from TOML string
    #[allow(dead_code)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename (folio.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
                watch,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port, *watch);
            }
            Commands::Init { .. } | Commands::Validate { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean = args.clean;
    }

    /// Apply serve-specific options.
    fn apply_serve_options(
        &mut self,
        interface: Option<std::net::IpAddr>,
        port: Option<u16>,
        watch: Option<bool>,
    ) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());
        Self::update_option(&mut self.serve.watch, watch.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::normalize_path;

        let root = normalize_path(root);
        self.set_root(&root);

        self.config_path = normalize_path(&self.config_path);
        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Must run before `finalize()`: normalization converts relative paths to
    /// absolute, making it impossible to detect user-specified absolute paths.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Search upward from cwd for the config file.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal required `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

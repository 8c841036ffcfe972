//! The built-in catalog of sections.
//!
//! Sections run in the order of [`SECTION_IDS`]: structure first, then
//! manifests and tool configuration, then feature modules, and installed
//! dependencies last.

use crate::checks::rules::{Probe, Rule, Severity};
use crate::core::check::Section;

/// Section identifiers, in run order.
pub mod ids {
    /// Required directories and files.
    pub const STRUCTURE: &str = "structure";
    /// Root and web package manifests.
    pub const PACKAGES: &str = "packages";
    /// TypeScript compiler options.
    pub const TYPESCRIPT: &str = "typescript";
    /// Progressive web app setup.
    pub const PWA: &str = "pwa";
    /// Web Audio engine modules.
    pub const AUDIO: &str = "audio";
    /// IndexedDB persistence layer.
    pub const INDEXEDDB: &str = "indexeddb";
    /// Test suites.
    pub const TESTS: &str = "tests";
    /// Installed dependencies.
    pub const DEPENDENCIES: &str = "dependencies";
}

/// All section identifiers, in run order.
pub const SECTION_IDS: &[&str] = &[
    ids::STRUCTURE,
    ids::PACKAGES,
    ids::TYPESCRIPT,
    ids::PWA,
    ids::AUDIO,
    ids::INDEXEDDB,
    ids::TESTS,
    ids::DEPENDENCIES,
];

/// Returns true if `id` names a built-in section.
#[must_use]
pub fn is_section(id: &str) -> bool {
    SECTION_IDS.contains(&id)
}

/// Directories that must exist.
pub const REQUIRED_DIRS: &[&str] = &[
    "apps",
    "apps/api",
    "apps/web",
    "packages",
    "packages/shared",
    "apps/web/public",
    "apps/web/public/icons",
];

/// Files that must exist.
pub const REQUIRED_FILES: &[&str] = &[
    // Root
    "package.json",
    "tsconfig.base.json",
    ".gitignore",
    ".prettierrc",
    "README.md",
    // Shared package
    "packages/shared/package.json",
    "packages/shared/src/index.ts",
    "packages/shared/src/types/index.ts",
    "packages/shared/src/constants/index.ts",
    // API
    "apps/api/package.json",
    "apps/api/tsconfig.json",
    "apps/api/nest-cli.json",
    "apps/api/src/main.ts",
    "apps/api/src/app.module.ts",
    "apps/api/src/app.controller.ts",
    "apps/api/src/app.service.ts",
    "apps/api/src/health/health.controller.ts",
    "apps/api/src/health/health.module.ts",
    "apps/api/src/tracks/tracks.controller.ts",
    "apps/api/src/tracks/tracks.service.ts",
    "apps/api/src/tracks/tracks.module.ts",
    "apps/api/src/playlists/playlists.controller.ts",
    "apps/api/src/playlists/playlists.service.ts",
    "apps/api/src/playlists/playlists.module.ts",
    // Web
    "apps/web/package.json",
    "apps/web/tsconfig.json",
    "apps/web/vite.config.ts",
    "apps/web/tailwind.config.ts",
    "apps/web/postcss.config.js",
    "apps/web/index.html",
    "apps/web/src/main.tsx",
    "apps/web/src/App.tsx",
    "apps/web/src/index.css",
    "apps/web/src/vite-env.d.ts",
    // Audio engine
    "apps/web/src/audio/AudioEngine.ts",
    "apps/web/src/audio/Equalizer.ts",
    "apps/web/src/audio/Limiter.ts",
    "apps/web/src/audio/index.ts",
    // Persistence
    "apps/web/src/db/database.ts",
    "apps/web/src/db/tracks.ts",
    "apps/web/src/db/playlists.ts",
    "apps/web/src/db/history.ts",
    "apps/web/src/db/settings.ts",
    "apps/web/src/db/index.ts",
    // State
    "apps/web/src/store/playerStore.ts",
    "apps/web/src/store/uiStore.ts",
    "apps/web/src/hooks/index.ts",
    "apps/web/src/services/fileImporter.ts",
    "apps/web/src/utils/index.ts",
    // Components
    "apps/web/src/components/common/Icons.tsx",
    "apps/web/src/components/common/index.tsx",
    "apps/web/src/components/player/PlayerBar.tsx",
    "apps/web/src/components/player/Equalizer.tsx",
    "apps/web/src/components/player/Queue.tsx",
    "apps/web/src/components/library/TrackItem.tsx",
    "apps/web/src/components/library/TrackList.tsx",
    "apps/web/src/components/playlists/PlaylistPage.tsx",
    "apps/web/src/components/settings/SettingsPage.tsx",
    "apps/web/src/components/diagnostics/DiagnosticsPanel.tsx",
    "apps/web/src/components/layout/Sidebar.tsx",
];

/// Scripts the root manifest must define.
pub const ROOT_SCRIPTS: &[&str] = &["dev", "build", "test", "lint", "format"];

/// Runtime dependencies the web app must declare.
pub const WEB_DEPENDENCIES: &[&str] = &[
    "react",
    "react-dom",
    "react-router-dom",
    "zustand",
    "idb",
    "@tanstack/react-query",
];

/// Modules of the persistence layer.
pub const DB_MODULES: &[&str] = &[
    "database.ts",
    "tracks.ts",
    "playlists.ts",
    "history.ts",
    "settings.ts",
    "index.ts",
];

const ROOT_PACKAGE: &str = "package.json";
const WEB_PACKAGE: &str = "apps/web/package.json";
const BASE_TSCONFIG: &str = "tsconfig.base.json";
const VITE_CONFIG: &str = "apps/web/vite.config.ts";
const INDEX_HTML: &str = "apps/web/index.html";
const ICONS_DIR: &str = "apps/web/public/icons";
const AUDIO_DIR: &str = "apps/web/src/audio";
const DB_DIR: &str = "apps/web/src/db";

/// Policy knobs that change how the catalog is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogPolicy {
    /// Severity of checks that depend on the local environment rather than
    /// on the committed tree (installed dependencies, generated icons).
    pub environment: Severity,
}

/// Builds every built-in section, in run order.
#[must_use]
pub fn sections(policy: CatalogPolicy) -> Vec<Section> {
    SECTION_IDS
        .iter()
        .filter_map(|id| section(id, policy))
        .collect()
}

/// Builds one built-in section by identifier.
#[must_use]
pub fn section(id: &str, policy: CatalogPolicy) -> Option<Section> {
    let section = match id {
        ids::STRUCTURE => structure(),
        ids::PACKAGES => packages(),
        ids::TYPESCRIPT => typescript(),
        ids::PWA => pwa(policy),
        ids::AUDIO => audio(),
        ids::INDEXEDDB => indexeddb(),
        ids::TESTS => test_files(),
        ids::DEPENDENCIES => dependencies(policy),
        _ => return None,
    };
    Some(section)
}

fn structure() -> Section {
    let mut section = Section::new(ids::STRUCTURE, "Project structure");
    for dir in REQUIRED_DIRS {
        section.push(Box::new(Rule::new(
            format!("Directory: {dir}/"),
            Probe::Dir((*dir).to_string()),
        )));
    }
    for file in REQUIRED_FILES {
        section.push(Box::new(Rule::new(
            format!("File: {file}"),
            Probe::File((*file).to_string()),
        )));
    }
    section
}

fn packages() -> Section {
    let mut section = Section::new(ids::PACKAGES, "Package manifests (package.json)").with_check(
        Rule::new(
            "Workspaces cover packages/* and apps/*",
            Probe::JsonArrayIncludes {
                file: ROOT_PACKAGE.to_string(),
                path: path(&["workspaces"]),
                values: owned(&["packages/*", "apps/*"]),
            },
        ),
    );

    for &script in ROOT_SCRIPTS {
        section.push(Box::new(Rule::new(
            format!("Root script: {script}"),
            Probe::JsonKey {
                file: ROOT_PACKAGE.to_string(),
                path: path(&["scripts", script]),
            },
        )));
    }

    section.push(Box::new(
        Rule::new(
            "Requires Node.js 20",
            Probe::JsonTextContains {
                file: ROOT_PACKAGE.to_string(),
                path: path(&["engines", "node"]),
                needles: owned(&["20"]),
            },
        )
        .advisory(),
    ));

    for &dependency in WEB_DEPENDENCIES {
        section.push(Box::new(Rule::new(
            format!("Web dependency: {dependency}"),
            Probe::JsonKey {
                file: WEB_PACKAGE.to_string(),
                path: path(&["dependencies", dependency]),
            },
        )));
    }

    section
}

fn typescript() -> Section {
    Section::new(ids::TYPESCRIPT, "TypeScript configuration")
        .with_check(Rule::new(
            "Strict mode enabled",
            Probe::JsonTrue {
                file: BASE_TSCONFIG.to_string(),
                path: path(&["compilerOptions", "strict"]),
            },
        ))
        .with_check(
            Rule::new(
                "Modern compilation target",
                Probe::JsonTextContains {
                    file: BASE_TSCONFIG.to_string(),
                    path: path(&["compilerOptions", "target"]),
                    needles: owned(&["ES2022", "ESNEXT"]),
                },
            )
            .advisory(),
        )
}

fn pwa(policy: CatalogPolicy) -> Section {
    let mut section = Section::new(ids::PWA, "PWA configuration")
        .with_check(contains("VitePWA plugin configured", VITE_CONFIG, "VitePWA"))
        .with_check(contains(
            "PWA manifest included in the configuration",
            VITE_CONFIG,
            "manifest",
        ))
        .with_check(contains("Workbox configuration present", VITE_CONFIG, "workbox"))
        .with_check(
            contains(
                "Service worker registerType configured",
                VITE_CONFIG,
                "registerType",
            )
            .advisory(),
        );

    for (tag, label) in [
        ("theme-color", "Meta theme-color"),
        ("apple-mobile-web-app-capable", "Meta apple-mobile-web-app-capable"),
        ("viewport", "Meta viewport"),
    ] {
        section.push(Box::new(contains(label, INDEX_HTML, tag)));
    }

    section.push(Box::new(
        Rule::new("Icons directory populated", Probe::NonEmptyDir(ICONS_DIR.to_string()))
            .with_severity(policy.environment),
    ));

    section
}

fn audio() -> Section {
    let engine = format!("{AUDIO_DIR}/AudioEngine.ts");
    let mut section = Section::new(ids::AUDIO, "Audio engine");

    for (needle, label) in [
        ("AudioContext", "Uses AudioContext"),
        ("GainNode", "Uses GainNode"),
        ("Ecualizador", "Integrates the equalizer"),
        ("Limitador", "Integrates the limiter"),
    ] {
        section.push(Box::new(contains(label, &engine, needle)));
    }

    section
        .with_check(contains(
            "Equalizer uses peaking filters",
            &format!("{AUDIO_DIR}/Equalizer.ts"),
            "peaking",
        ))
        .with_check(Rule::new(
            "Limiter uses DynamicsCompressor",
            Probe::ContainsAny {
                file: format!("{AUDIO_DIR}/Limiter.ts"),
                needles: owned(&["DynamicsCompressor", "createDynamicsCompressor"]),
            },
        ))
}

fn indexeddb() -> Section {
    let mut section = Section::new(ids::INDEXEDDB, "IndexedDB persistence");
    for module in DB_MODULES {
        section.push(Box::new(Rule::new(
            format!("DB module: {module}"),
            Probe::File(format!("{DB_DIR}/{module}")),
        )));
    }

    let database = format!("{DB_DIR}/database.ts");
    section
        .with_check(Rule::new(
            "Uses the 'idb' library",
            Probe::Matches {
                file: database.clone(),
                pattern: r#"openDB|from\s+['"]idb['"]"#.to_string(),
            },
        ))
        .with_check(Rule::new(
            "Main object stores defined",
            Probe::ContainsAll {
                file: database,
                needles: owned(&["pistas", "archivos"]),
            },
        ))
}

fn test_files() -> Section {
    Section::new(ids::TESTS, "Test files")
        .with_check(Rule::new(
            "Frontend tests",
            Probe::GlobCount {
                dir: "apps/web/src/__tests__".to_string(),
                pattern: "*.test.ts".to_string(),
                min: 1,
            },
        ))
        .with_check(Rule::new(
            "vitest.config.ts present",
            Probe::File("apps/web/vitest.config.ts".to_string()),
        ))
        .with_check(Rule::new(
            "Backend test present",
            Probe::AnyFile(owned(&[
                "apps/api/src/app.spec.ts",
                "apps/api/test/app.controller.spec.ts",
            ])),
        ))
}

fn dependencies(policy: CatalogPolicy) -> Section {
    Section::new(ids::DEPENDENCIES, "Dependencies").with_check(
        Rule::new(
            "node_modules present (run `npm install` if missing)",
            Probe::Dir("node_modules".to_string()),
        )
        .with_severity(policy.environment),
    )
}

fn contains(label: &str, file: &str, needle: &str) -> Rule {
    Rule::new(
        label,
        Probe::Contains {
            file: file.to_string(),
            needle: needle.to_string(),
        },
    )
}

fn path(keys: &[&str]) -> Vec<String> {
    owned(keys)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

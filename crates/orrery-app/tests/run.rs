use clap::Parser;
use orrery_app::{AppError, PlatformDirs, load_config, run};
use orrery_bodies::RegistryError;
use orrery_config::{CliArgs, Config};
use orrery_scene::{BodyKind, SceneError};

const TWO_BODY_TABLE: &str = r##"[
    (name: "Sun", radius: 109.0, mass: 333000.0, temperature: 5778.0,
     distance_from_sun: 0.0, orbital_period: 0.0, rotation_period: 609.12,
     color: "#FDB813"),
    (name: "Earth", radius: 1.0, mass: 1.0, temperature: 15.0,
     distance_from_sun: 1.0, orbital_period: 365.25, rotation_period: 24.0,
     color: "#6B93D6", description: "Our home planet",
     moons: [(name: "Luna", radius: 1.0, distance: 3.0, orbital_period: 27.3)]),
]"##;

fn cli(extra: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("orrery").chain(extra.iter().copied()))
}

fn config_for(args: &CliArgs) -> Config {
    let mut config = Config::default();
    config.apply_cli_overrides(args);
    config
}

#[test]
fn test_default_run_reports_solar_system() {
    let args = cli(&["--frames", "10", "--frame-time", "0.1"]);
    let snapshot = run(&config_for(&args), &args).unwrap();

    assert_eq!(snapshot.frames, 10);
    assert!((snapshot.real_time - 1.0).abs() < 1e-9);
    assert_eq!(snapshot.bodies.len(), 25);
    assert_eq!(snapshot.bodies[0].kind, BodyKind::Anchor);
    assert!(snapshot.info_panel.is_none());
    assert!(snapshot.fallback.is_none());
}

#[test]
fn test_time_scale_flag_doubles_sim_time() {
    let args = cli(&["--frames", "30", "--time-scale", "2"]);
    let snapshot = run(&config_for(&args), &args).unwrap();
    assert!((snapshot.sim_time - 2.0 * snapshot.real_time).abs() < 1e-9);
    assert_eq!(snapshot.time_scale, 2.0);
}

#[test]
fn test_select_flag_opens_panel() {
    let args = cli(&["--frames", "5", "--select", "Jupiter"]);
    let snapshot = run(&config_for(&args), &args).unwrap();

    let panel = snapshot.info_panel.unwrap();
    assert_eq!(panel.name, "Jupiter");
    let selected: Vec<_> = snapshot.bodies.iter().filter(|b| b.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Jupiter");
}

#[test]
fn test_select_unknown_or_anchor_fails() {
    let args = cli(&["--frames", "1", "--select", "Vulcan"]);
    let result = run(&config_for(&args), &args);
    assert!(matches!(
        result,
        Err(AppError::Scene(SceneError::Registry(RegistryError::NotFound(_))))
    ));

    let args = cli(&["--frames", "1", "--select", "Sun"]);
    let result = run(&config_for(&args), &args);
    assert!(matches!(
        result,
        Err(AppError::Scene(SceneError::NotSelectable(_)))
    ));
}

#[test]
fn test_bodies_file_replaces_builtin_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bodies.ron");
    std::fs::write(&path, TWO_BODY_TABLE).unwrap();

    let args = cli(&["--frames", "3", "--bodies", path.to_str().unwrap()]);
    let snapshot = run(&config_for(&args), &args).unwrap();

    let names: Vec<_> = snapshot.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Sun", "Earth", "Luna"]);
    assert_eq!(snapshot.bodies[2].parent.as_deref(), Some("Earth"));
}

#[test]
fn test_missing_bodies_file_is_registry_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.ron");
    let args = cli(&["--bodies", missing.to_str().unwrap()]);
    let result = run(&config_for(&args), &args);
    assert!(matches!(result, Err(AppError::Registry(RegistryError::Read(_)))));
}

#[test]
fn test_load_config_creates_file_and_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = PlatformDirs::with_config_dir(dir.path());
    dirs.create_dirs().unwrap();

    let args = cli(&["--frames", "7", "--width", "640"]);
    let config = load_config(&dirs, &args).unwrap();

    assert!(dir.path().join("config.ron").exists());
    assert_eq!(config.simulation.frames, 7);
    assert_eq!(config.window.width, 640);
    assert_eq!(config.simulation.time_scale, Config::default().simulation.time_scale);
}

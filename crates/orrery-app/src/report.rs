//! Final-state report in table or JSON form.

use std::fmt;

use orrery_config::OutputFormat;
use orrery_scene::{BodyKind, Fallback, InfoPanelContent, SceneSnapshot};

use crate::error::AppError;

/// Render `snapshot` in the requested format.
pub fn render(snapshot: &SceneSnapshot, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(TableReport(snapshot).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

/// Human-readable view of a snapshot.
pub struct TableReport<'a>(pub &'a SceneSnapshot);

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        writeln!(
            f,
            "frames {}  real {:.2}s  sim {:.2}s  speed x{:.2}  sun light {:.2}",
            snapshot.frames,
            snapshot.real_time,
            snapshot.sim_time,
            snapshot.time_scale,
            snapshot.sun_light_intensity,
        )?;
        let [cx, cy, cz] = snapshot.camera.position;
        writeln!(
            f,
            "camera ({cx:.1}, {cy:.1}, {cz:.1})  distance {:.1}",
            snapshot.camera.distance
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<10} {:<7} {:<8} {:>9} {:>9} {:>9} {:>8} {:>9} {:>6}",
            "BODY", "KIND", "PARENT", "X", "Y", "Z", "ORBIT", "SPIN", "RADIUS"
        )?;
        for body in &snapshot.bodies {
            let [x, y, z] = body.position;
            let marker = if body.selected { " *" } else { "" };
            writeln!(
                f,
                "{:<10} {:<7} {:<8} {:>9.2} {:>9.2} {:>9.2} {:>8.3} {:>9.3} {:>6.2}{marker}",
                body.name,
                kind_label(body.kind),
                body.parent.as_deref().unwrap_or("-"),
                x,
                y,
                z,
                body.orbital_angle,
                body.rotation_angle,
                body.display_radius,
            )?;
        }

        if let Some(panel) = &snapshot.info_panel {
            writeln!(f)?;
            write_panel(f, panel)?;
        }
        if let Some(fallback) = &snapshot.fallback {
            writeln!(f)?;
            write_fallback(f, fallback)?;
        }
        Ok(())
    }
}

fn kind_label(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Anchor => "anchor",
        BodyKind::Planet => "planet",
        BodyKind::Moon => "moon",
    }
}

fn write_panel(f: &mut fmt::Formatter<'_>, panel: &InfoPanelContent) -> fmt::Result {
    writeln!(f, "{}", panel.name)?;
    writeln!(f, "  {}", panel.description)?;
    writeln!(f, "  Distance from Sun: {}", panel.distance)?;
    writeln!(f, "  Orbital Period:    {}", panel.orbital_period)?;
    writeln!(f, "  Day Length:        {}", panel.day_length)?;
    writeln!(f, "  Size (vs Earth):   {}", panel.size)?;
    for fact in &panel.facts {
        writeln!(f, "  - {fact}")?;
    }
    Ok(())
}

fn write_fallback(f: &mut fmt::Formatter<'_>, fallback: &Fallback) -> fmt::Result {
    writeln!(f, "{}", fallback.title)?;
    writeln!(f, "  {}", fallback.subtitle)?;
    writeln!(f, "  {}", fallback.message)?;
    writeln!(f, "  [{}]", fallback.retry_label)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use orrery_bodies::solar_system;
    use orrery_config::Config;
    use orrery_scene::SceneComposer;

    use super::*;

    fn snapshot(select: Option<&str>) -> SceneSnapshot {
        let mut composer =
            SceneComposer::new(&Config::default(), Arc::new(solar_system().unwrap())).unwrap();
        if let Some(name) = select {
            composer.select_by_name(name).unwrap();
        }
        composer.frame(0.5);
        composer.snapshot()
    }

    #[test]
    fn test_table_lists_every_body() {
        let table = render(&snapshot(None), OutputFormat::Table).unwrap();
        for name in ["Sun", "Mercury", "Earth", "Luna", "Titan", "Neptune", "Triton"] {
            assert!(table.contains(name), "missing {name} in:\n{table}");
        }
        assert!(table.contains("anchor"));
        assert!(!table.contains("Distance from Sun"));
    }

    #[test]
    fn test_table_includes_panel_for_selection() {
        let table = render(&snapshot(Some("Saturn")), OutputFormat::Table).unwrap();
        assert!(table.contains("Orbital Period:    10,759 days"));
        assert!(table.contains("Size (vs Earth):   9.45x"));
        let saturn_row = table
            .lines()
            .find(|line| line.starts_with("Saturn "))
            .unwrap();
        assert!(saturn_row.ends_with(" *"));
    }

    #[test]
    fn test_json_report_parses() {
        let json = render(&snapshot(Some("Mars")), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bodies"].as_array().unwrap().len(), 25);
        assert_eq!(value["info_panel"]["name"], "Mars");
        assert!(value["fallback"].is_null());
    }
}

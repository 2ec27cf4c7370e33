//! Scene schedule labels, system sets, and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, IntoSystemConfigs, ScheduleBuildError, ScheduleLabel};

use crate::systems::{
    advance_clock, animate_sun, flicker_sun_light, update_body_visuals, update_moon_motion,
    update_planet_motion,
};

/// Labels for each scene execution stage, run top to bottom every frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSchedule {
    /// Advance the simulation clock.
    PreUpdate,
    /// Body motion and per-body visuals.
    Update,
    /// Scene-wide effects: sun animation and lighting.
    PostUpdate,
}

/// Sets for systems in the Update stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    /// Planets sample their orbits around the anchor.
    PlanetMotion,
    /// Planet visuals react to selection, including the bob offset.
    Highlight,
    /// Moons follow their parent's final translation.
    MoonMotion,
}

/// Sets for systems in the PostUpdate stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostUpdateSet {
    /// Anchor spin, glow, and corona.
    Sun,
    /// Light intensities.
    Lighting,
}

/// Configure ordering constraints for the Update stage.
pub fn configure_update_ordering(schedule: &mut Schedule) {
    schedule.configure_sets((
        UpdateSet::PlanetMotion.before(UpdateSet::Highlight),
        UpdateSet::Highlight.before(UpdateSet::MoonMotion),
    ));
}

/// Configure ordering constraints for the PostUpdate stage.
pub fn configure_postupdate_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(PostUpdateSet::Sun.before(PostUpdateSet::Lighting));
}

/// Ordered collection of [`Schedule`]s that drives one scene frame.
///
/// Every stage uses the single-threaded executor: the scene is small and
/// frames must stay deterministic.
pub struct SceneSchedules {
    schedules: Vec<(SceneSchedule, Schedule)>,
}

impl SceneSchedules {
    /// Empty stages with ordering constraints configured.
    pub fn new() -> Self {
        let stages = [
            SceneSchedule::PreUpdate,
            SceneSchedule::Update,
            SceneSchedule::PostUpdate,
        ];

        let schedules = stages
            .into_iter()
            .map(|label| {
                let mut schedule = Schedule::new(label.clone());
                schedule.set_executor_kind(ExecutorKind::SingleThreaded);
                match label {
                    SceneSchedule::Update => configure_update_ordering(&mut schedule),
                    SceneSchedule::PostUpdate => configure_postupdate_ordering(&mut schedule),
                    SceneSchedule::PreUpdate => {}
                }
                (label, schedule)
            })
            .collect();

        Self { schedules }
    }

    /// Stages with every built-in scene system registered.
    pub fn with_scene_systems() -> Self {
        let mut schedules = Self::new();
        schedules.add_system(SceneSchedule::PreUpdate, advance_clock);
        schedules.add_system(
            SceneSchedule::Update,
            update_planet_motion.in_set(UpdateSet::PlanetMotion),
        );
        schedules.add_system(
            SceneSchedule::Update,
            update_body_visuals.in_set(UpdateSet::Highlight),
        );
        schedules.add_system(
            SceneSchedule::Update,
            update_moon_motion.in_set(UpdateSet::MoonMotion),
        );
        schedules.add_system(SceneSchedule::PostUpdate, animate_sun.in_set(PostUpdateSet::Sun));
        schedules.add_system(
            SceneSchedule::PostUpdate,
            flicker_sun_light.in_set(PostUpdateSet::Lighting),
        );
        schedules
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: SceneSchedule, system: impl IntoSystemConfigs<M>) {
        if let Some(schedule) = self.get_schedule_mut(&stage) {
            schedule.add_systems(system);
        }
    }

    /// Run all stages in order for one frame.
    pub fn run(&mut self, world: &mut World) {
        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn get_schedule_mut(&mut self, stage: &SceneSchedule) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }

    /// Force-initialize all schedules, validating the dependency graph.
    pub fn initialize_all(&mut self, world: &mut World) -> Result<(), ScheduleBuildError> {
        for (_label, schedule) in &mut self.schedules {
            schedule.initialize(world)?;
        }
        Ok(())
    }
}

impl Default for SceneSchedules {
    fn default() -> Self {
        Self::new()
    }
}

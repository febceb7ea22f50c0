use std::{
    cell::{Cell, RefCell},
    path::Path,
    rc::Rc,
    sync::Arc,
};

use log::info;
use serde::{Deserialize, Serialize};
use tour_logic::{
    Building, BuildingLocationListener, BuildingLocationManager, BuildingWithLocation, Buildings,
    Location, Notification, OrientationEvent, OrientationListener, OrientationProvider, Selection,
    TrackingSettings,
};

pub mod prelude {
    pub use anyhow::{Context, anyhow, bail};
    pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
}

pub use prelude::*;

/// One thing that happens to the user during a [Scenario]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Step {
    /// A new GPS fix along with the compass heading at the time
    Fix {
        latitude: f64,
        longitude: f64,
        heading: f32,
    },
    /// The user turned without moving
    Turn { heading: f32 },
    /// The GPS fix went away
    LostFix,
    /// The compass started or stopped reporting interference
    Interference(bool),
}

/// A catalog and a walk through it, usually loaded from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub settings: TrackingSettings,
    pub buildings: Buildings,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
        let scenario = Self::from_json(&raw)?;
        if scenario.buildings.is_empty() {
            bail!("Scenario at {} has no buildings", path.display());
        }
        Ok(scenario)
    }
}

/// An [OrientationProvider] that replays [Step]s
#[derive(Default)]
pub struct ScriptedOrientation {
    location: Cell<Option<Location>>,
    heading: Cell<f32>,
    interference: Cell<bool>,
    running: Cell<bool>,
    listeners: RefCell<Vec<Rc<dyn OrientationListener>>>,
}

impl ScriptedOrientation {
    /// Update the readings for `step` and tell listeners about it. Steps are ignored while the
    /// provider is stopped.
    pub fn apply(&self, step: &Step) {
        if !self.running.get() {
            return;
        }

        let event = match step {
            Step::Fix {
                latitude,
                longitude,
                heading,
            } => {
                self.location
                    .set(Some(Location::new(*latitude, *longitude)));
                self.heading.set(*heading);
                OrientationEvent::LocationChanged
            }
            Step::Turn { heading } => {
                self.heading.set(*heading);
                OrientationEvent::OrientationChanged
            }
            Step::LostFix => {
                self.location.set(None);
                OrientationEvent::LocationChanged
            }
            Step::Interference(interference) => {
                self.interference.set(*interference);
                OrientationEvent::AccuracyChanged
            }
        };

        let listeners = self.listeners.borrow().clone();
        for listener in listeners.iter() {
            listener.on_orientation_event(event);
        }
    }
}

impl OrientationProvider for ScriptedOrientation {
    fn has_location(&self) -> bool {
        self.location.get().is_some()
    }

    fn location(&self) -> Option<Location> {
        self.location.get()
    }

    fn heading(&self) -> f32 {
        self.heading.get()
    }

    fn has_interference(&self) -> bool {
        self.interference.get()
    }

    fn start(&self) {
        self.running.set(true);
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn add_on_changed_listener(&self, listener: Rc<dyn OrientationListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    fn remove_on_changed_listener(&self, listener: &Rc<dyn OrientationListener>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }
}

/// Logs every callback and keeps it for the final report
#[derive(Default)]
pub struct LoggingListener {
    received: RefCell<Vec<Notification>>,
}

impl LoggingListener {
    pub fn into_notifications(self) -> Vec<Notification> {
        self.received.into_inner()
    }

    fn push(&self, notification: Notification) {
        info!("{notification}");
        self.received.borrow_mut().push(notification);
    }
}

impl BuildingLocationListener for LoggingListener {
    fn on_nearby_buildings_change(
        &self,
        left: Option<&BuildingWithLocation>,
        front: Option<&BuildingWithLocation>,
        right: Option<&BuildingWithLocation>,
    ) {
        self.push(Notification::NearbyBuildingsChange(Selection {
            left: left.cloned(),
            front: front.cloned(),
            right: right.cloned(),
        }));
    }

    fn on_enter_building(&self, building: &Arc<Building>) {
        self.push(Notification::EnterBuilding(building.clone()));
    }

    fn on_exit_building(&self) {
        self.push(Notification::ExitBuilding);
    }

    fn on_compass_interference(&self, has_interference: bool) {
        self.push(Notification::CompassInterference(has_interference));
    }

    fn on_has_location_change(&self, has_location: bool) {
        self.push(Notification::HasLocationChange(has_location));
    }
}

/// Walk through `scenario` with a fresh manager and return everything it reported, in order.
pub fn run_scenario(scenario: &Scenario) -> Vec<Notification> {
    let provider = Rc::new(ScriptedOrientation::default());
    let manager = BuildingLocationManager::with_settings(
        scenario.buildings.clone(),
        provider.clone(),
        scenario.settings,
    );
    let listener = Rc::new(LoggingListener::default());
    manager.add_listener(listener.clone());
    manager.start_tracking();

    for (i, step) in scenario.steps.iter().enumerate() {
        info!("Step {i}: {step:?}");
        provider.apply(step);
    }

    manager.stop_tracking();
    drop(manager);

    Rc::try_unwrap(listener)
        .map(LoggingListener::into_notifications)
        .unwrap_or_else(|listener| listener.received.borrow().clone())
}

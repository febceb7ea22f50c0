use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::Arc,
};

use log::{debug, info, warn};

use crate::{
    building::{Building, Buildings},
    building_with_location::BuildingWithLocation,
    error::TourError,
    location::{Location, OrientationEvent, OrientationListener, OrientationProvider},
    notification::Notification,
    prelude::*,
    selection::{Resolution, Selection, resolve},
    settings::TrackingSettings,
};

/// Receives changes to the buildings around the user. Every callback does nothing by default.
///
/// Callbacks run synchronously while the manager handles an orientation event. They may read
/// from the manager but must not start or stop tracking from inside a callback.
pub trait BuildingLocationListener {
    /// The building in front or to the sides changed
    fn on_nearby_buildings_change(
        &self,
        _left: Option<&BuildingWithLocation>,
        _front: Option<&BuildingWithLocation>,
        _right: Option<&BuildingWithLocation>,
    ) {
    }

    /// The user entered `building`
    fn on_enter_building(&self, _building: &Arc<Building>) {}

    /// The user left the building they were in
    fn on_exit_building(&self) {}

    /// Compass interference started or stopped
    fn on_compass_interference(&self, _has_interference: bool) {}

    /// The GPS fix was regained or lost
    fn on_has_location_change(&self, _has_location: bool) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Placement {
    /// No fix has been seen yet
    #[default]
    Unknown,
    Outside(Selection),
    Inside(Arc<Building>),
}

#[derive(Debug, Clone, Default)]
/// Everything the manager remembers between events
struct TrackingState {
    placement: Placement,
    has_location: bool,
    has_interference: bool,
    /// Interference as listeners last heard it, changes are held back while there's no fix
    announced_interference: bool,
}

impl TrackingState {
    /// Moves to the state for a new fix (or lack of one) and returns what changed.
    fn update_location(
        &mut self,
        fix: Option<(Location, f64)>,
        buildings: &Buildings,
        settings: &TrackingSettings,
    ) -> Vec<Notification> {
        let mut notifications = Vec::with_capacity(3);

        let Some((location, heading)) = fix else {
            if self.has_location {
                info!("Lost location fix");
                self.has_location = false;
                notifications.push(Notification::HasLocationChange(false));
            }
            return notifications;
        };

        if !self.has_location {
            info!("Acquired location fix at {location}");
            self.has_location = true;
            notifications.push(Notification::HasLocationChange(true));
            notifications.extend(self.announce_interference());
        }

        let next = match resolve(buildings, &location, heading, settings) {
            Resolution::Inside(building) => {
                let already_inside = matches!(
                    &self.placement,
                    Placement::Inside(current) if Arc::ptr_eq(current, &building)
                );
                if !already_inside {
                    info!("Entered {}", building.name());
                    notifications.push(Notification::EnterBuilding(building.clone()));
                }
                Placement::Inside(building)
            }
            Resolution::Outside(selection) => {
                let changed = match &self.placement {
                    Placement::Outside(previous) => *previous != selection,
                    Placement::Inside(building) => {
                        info!("Exited {}", building.name());
                        notifications.push(Notification::ExitBuilding);
                        !selection.is_empty()
                    }
                    Placement::Unknown => !selection.is_empty(),
                };
                if changed {
                    debug!("Nearby buildings changed: {selection:?}");
                    notifications.push(Notification::NearbyBuildingsChange(selection.clone()));
                }
                Placement::Outside(selection)
            }
        };

        self.placement = next;
        notifications
    }

    fn update_interference(&mut self, has_interference: bool) -> Option<Notification> {
        if self.has_interference == has_interference {
            return None;
        }

        if has_interference {
            warn!("Compass is reporting interference");
        } else {
            info!("Compass interference cleared");
        }

        self.has_interference = has_interference;
        if !self.has_location {
            debug!("No location fix, holding back interference change");
            return None;
        }
        self.announce_interference()
    }

    fn announce_interference(&mut self) -> Option<Notification> {
        if self.announced_interference == self.has_interference {
            return None;
        }
        self.announced_interference = self.has_interference;
        Some(Notification::CompassInterference(self.has_interference))
    }

    fn selection(&self) -> Option<&Selection> {
        match &self.placement {
            Placement::Outside(selection) => Some(selection),
            _ => None,
        }
    }
}

/// Hooks the manager up to its [OrientationProvider] without keeping the manager alive.
struct Subscription<P: OrientationProvider> {
    manager: Weak<BuildingLocationManager<P>>,
}

impl<P: OrientationProvider> OrientationListener for Subscription<P> {
    fn on_orientation_event(&self, event: OrientationEvent) {
        if let Some(manager) = self.manager.upgrade() {
            manager.handle_orientation_event(event);
        }
    }
}

/// Keeps track of the user's location and works out which buildings are nearby, notifying
/// [BuildingLocationListener]s as that changes.
///
/// The manager is driven entirely by events from its [OrientationProvider] and does its work
/// synchronously inside them. It is not thread safe, providers have to deliver events one at a
/// time from a single thread.
pub struct BuildingLocationManager<P: OrientationProvider> {
    buildings: Buildings,
    provider: Rc<P>,
    settings: TrackingSettings,
    state: RefCell<TrackingState>,
    listeners: RefCell<Vec<Rc<dyn BuildingLocationListener>>>,
    subscription: RefCell<Option<Rc<dyn OrientationListener>>>,
}

impl<P: OrientationProvider + 'static> BuildingLocationManager<P> {
    pub fn new(buildings: Buildings, provider: Rc<P>) -> Rc<Self> {
        Self::with_settings(buildings, provider, TrackingSettings::default())
    }

    pub fn with_settings(
        buildings: Buildings,
        provider: Rc<P>,
        settings: TrackingSettings,
    ) -> Rc<Self> {
        Rc::new(Self {
            buildings,
            provider,
            settings,
            state: RefCell::new(TrackingState::default()),
            listeners: RefCell::new(Vec::new()),
            subscription: RefCell::new(None),
        })
    }

    /// Subscribe to the provider and start it. Does nothing if already tracking.
    pub fn start_tracking(self: &Rc<Self>) {
        if self.is_tracking() {
            debug!("Already tracking, ignoring start");
            return;
        }

        let listener: Rc<dyn OrientationListener> = Rc::new(Subscription {
            manager: Rc::downgrade(self),
        });
        *self.subscription.borrow_mut() = Some(listener.clone());

        // Providers may deliver an event from inside the subscribe call
        self.provider.add_on_changed_listener(listener);

        info!("Tracking {} buildings", self.buildings.len());
        self.provider.start();
    }

    /// Stop the provider and unsubscribe from it. Does nothing if not tracking.
    pub fn stop_tracking(&self) {
        let Some(listener) = self.subscription.borrow_mut().take() else {
            debug!("Not tracking, ignoring stop");
            return;
        };

        self.provider.stop();
        self.provider.remove_on_changed_listener(&listener);
        info!("Stopped tracking");
    }
}

impl<P: OrientationProvider> BuildingLocationManager<P> {
    pub fn is_tracking(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Add a listener, listeners are notified in the order they were added. Adding the same
    /// listener twice does nothing.
    pub fn add_listener(&self, listener: Rc<dyn BuildingLocationListener>) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    pub fn remove_listener(&self, listener: &Rc<dyn BuildingLocationListener>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Handle an event from the provider. Location and orientation changes recompute where
    /// the user is, accuracy changes only refresh the interference flag.
    pub fn handle_orientation_event(&self, event: OrientationEvent) {
        debug!("Orientation event: {event:?}");
        let notifications = match event {
            OrientationEvent::OrientationChanged | OrientationEvent::LocationChanged => {
                self.update_location_state()
            }
            OrientationEvent::AccuracyChanged => {
                let has_interference = self.provider.has_interference();
                self.state
                    .borrow_mut()
                    .update_interference(has_interference)
                    .into_iter()
                    .collect()
            }
        };
        self.notify(notifications);
    }

    fn update_location_state(&self) -> Vec<Notification> {
        let fix = self
            .provider
            .has_location()
            .then(|| self.provider.location())
            .flatten()
            .map(|location| (location, f64::from(self.provider.heading())));

        self.state
            .borrow_mut()
            .update_location(fix, &self.buildings, &self.settings)
    }

    fn notify(&self, notifications: Vec<Notification>) {
        if notifications.is_empty() {
            return;
        }

        // Listeners may add or remove listeners while being notified
        let listeners = self.listeners.borrow().clone();
        for notification in notifications.iter() {
            for listener in listeners.iter() {
                notification.deliver(listener.as_ref());
            }
        }
    }

    pub fn is_inside_building(&self) -> bool {
        matches!(self.state.borrow().placement, Placement::Inside(_))
    }

    /// The building the user is in, check [Self::is_inside_building] first.
    pub fn get_building_inside(&self) -> Result<Arc<Building>> {
        match &self.state.borrow().placement {
            Placement::Inside(building) => Ok(building.clone()),
            _ => Err(TourError::NotInsideBuilding),
        }
    }

    pub fn get_left_building(&self) -> Option<BuildingWithLocation> {
        self.state.borrow().selection().and_then(|s| s.left.clone())
    }

    pub fn get_front_building(&self) -> Option<BuildingWithLocation> {
        self.state.borrow().selection().and_then(|s| s.front.clone())
    }

    pub fn get_right_building(&self) -> Option<BuildingWithLocation> {
        self.state.borrow().selection().and_then(|s| s.right.clone())
    }

    /// Left, front, and right together, empty while inside a building
    pub fn nearby(&self) -> Selection {
        self.state.borrow().selection().cloned().unwrap_or_default()
    }

    pub fn has_compass_interference(&self) -> bool {
        self.state.borrow().has_interference
    }

    pub fn has_location(&self) -> bool {
        self.state.borrow().has_location
    }

    pub fn buildings(&self) -> &Buildings {
        &self.buildings
    }

    pub fn settings(&self) -> &TrackingSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::tests::{HERE, MockOrientation, RecordingListener, located, square};

    type TestManager = BuildingLocationManager<MockOrientation>;

    struct Tour {
        provider: Rc<MockOrientation>,
        manager: Rc<TestManager>,
        recorder: Rc<RecordingListener>,
    }

    impl Tour {
        fn new(buildings: Vec<Building>) -> Self {
            let provider = MockOrientation::at(HERE, 0.0);
            let manager = TestManager::new(Buildings::new(buildings), provider.clone());
            let recorder = Rc::new(RecordingListener::default());
            manager.add_listener(recorder.clone());
            manager.start_tracking();
            Self {
                provider,
                manager,
                recorder,
            }
        }

        fn catalog(&self) -> &Buildings {
            self.manager.buildings()
        }

        fn walk_to(&self, location: Location) {
            self.provider.move_to(location);
            self.provider.fire(OrientationEvent::LocationChanged);
        }
    }

    fn campus() -> Vec<Building> {
        vec![
            square("Left", 0.01, -0.001),
            square("Front", 0.01, 0.0),
            square("Right", 0.01, 0.001),
        ]
    }

    #[test]
    fn test_start_tracking() {
        let tour = Tour::new(campus());

        assert_eq!(tour.provider.listener_count(), 1);
        assert_eq!(tour.provider.starts(), 1);
        assert!(tour.manager.is_tracking());

        tour.manager.start_tracking();
        assert_eq!(tour.provider.listener_count(), 1);
        assert_eq!(tour.provider.starts(), 1);
    }

    #[test]
    fn test_stop_tracking() {
        let tour = Tour::new(campus());

        tour.manager.stop_tracking();
        assert_eq!(tour.provider.listener_count(), 0);
        assert_eq!(tour.provider.stops(), 1);
        assert!(!tour.manager.is_tracking());

        tour.manager.stop_tracking();
        assert_eq!(tour.provider.stops(), 1);

        tour.provider.fire(OrientationEvent::LocationChanged);
        assert!(tour.recorder.take().is_empty());
    }

    #[test]
    fn test_restart_tracking() {
        let tour = Tour::new(campus());
        tour.manager.stop_tracking();
        tour.manager.start_tracking();

        assert_eq!(tour.provider.listener_count(), 1);
        assert_eq!(tour.provider.starts(), 2);
    }

    #[test]
    fn test_first_fix_reports_location_and_nearby() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);

        let expected = Selection {
            left: Some(located(tour.catalog(), 0, 0.0)),
            front: Some(located(tour.catalog(), 1, 0.0)),
            right: Some(located(tour.catalog(), 2, 0.0)),
        };
        assert_eq!(
            tour.recorder.take(),
            vec![
                Notification::HasLocationChange(true),
                Notification::NearbyBuildingsChange(expected.clone()),
            ]
        );
        assert!(tour.manager.has_location());
        assert_eq!(tour.manager.nearby(), expected);
        assert_eq!(tour.manager.get_left_building(), expected.left);
        assert_eq!(tour.manager.get_front_building(), expected.front);
        assert_eq!(tour.manager.get_right_building(), expected.right);
    }

    #[test]
    fn test_unchanged_fix_is_quiet() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.provider.fire(OrientationEvent::OrientationChanged);
        assert!(tour.recorder.take().is_empty());
    }

    #[test]
    fn test_turning_reports_new_buildings() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        tour.provider.turn_to(180.0);
        tour.provider.fire(OrientationEvent::OrientationChanged);

        // Everything is behind now
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::NearbyBuildingsChange(Selection::default())]
        );
        assert!(tour.manager.get_front_building().is_none());
    }

    #[test]
    fn test_enter_building_once() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        tour.walk_to(Location::new(0.01, 0.0));
        tour.walk_to(Location::new(0.0101, 0.0001));
        tour.provider.turn_to(90.0);
        tour.provider.fire(OrientationEvent::OrientationChanged);

        let front = tour.catalog().all()[1].clone();
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::EnterBuilding(front.clone())]
        );
        assert!(tour.manager.is_inside_building());
        let inside = tour.manager.get_building_inside().expect("Should be inside");
        assert!(Arc::ptr_eq(&inside, &front));
        assert_eq!(tour.manager.nearby(), Selection::default());
    }

    #[test]
    fn test_exit_building() {
        let tour = Tour::new(campus());
        tour.walk_to(Location::new(0.01, 0.0));
        tour.recorder.take();

        tour.walk_to(HERE);

        let events = tour.recorder.take();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Notification::ExitBuilding);
        assert!(matches!(
            &events[1],
            Notification::NearbyBuildingsChange(s) if s.front.is_some()
        ));
        assert!(!tour.manager.is_inside_building());
    }

    #[test]
    fn test_walking_between_buildings() {
        let tour = Tour::new(campus());
        tour.walk_to(Location::new(0.01, -0.001));
        tour.walk_to(Location::new(0.01, 0.001));

        let catalog = tour.catalog().all();
        assert_eq!(
            tour.recorder.take(),
            vec![
                Notification::HasLocationChange(true),
                Notification::EnterBuilding(catalog[0].clone()),
                Notification::EnterBuilding(catalog[2].clone()),
            ]
        );
    }

    #[test]
    fn test_building_inside_when_outside() {
        let tour = Tour::new(campus());
        assert_eq!(
            tour.manager.get_building_inside(),
            Err(TourError::NotInsideBuilding)
        );

        tour.provider.fire(OrientationEvent::LocationChanged);
        assert!(!tour.manager.is_inside_building());
        assert_eq!(
            tour.manager.get_building_inside(),
            Err(TourError::NotInsideBuilding)
        );
    }

    #[test]
    fn test_lost_fix_reported_once() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        let before = tour.manager.nearby();
        tour.recorder.take();

        tour.provider.lose_fix();
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.provider.turn_to(180.0);
        tour.provider.fire(OrientationEvent::OrientationChanged);
        tour.provider.fire(OrientationEvent::LocationChanged);

        assert_eq!(
            tour.recorder.take(),
            vec![Notification::HasLocationChange(false)]
        );
        assert!(!tour.manager.has_location());
        // Last known surroundings are kept
        assert_eq!(tour.manager.nearby(), before);

        tour.provider.turn_to(0.0);
        tour.provider.move_to(HERE);
        tour.provider.fire(OrientationEvent::LocationChanged);
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::HasLocationChange(true)]
        );
    }

    #[test]
    fn test_no_fix_at_start_is_quiet() {
        let tour = Tour::new(campus());
        tour.provider.lose_fix();
        tour.provider.fire(OrientationEvent::LocationChanged);

        assert!(tour.recorder.take().is_empty());
        assert!(!tour.manager.has_location());
    }

    #[test]
    fn test_interference_changes() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        tour.provider.set_interference(true);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::CompassInterference(true)]
        );
        assert!(tour.manager.has_compass_interference());

        tour.provider.set_interference(false);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::CompassInterference(false)]
        );
    }

    #[test]
    fn test_interference_while_fix_lost_is_quiet() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.provider.lose_fix();
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        tour.provider.set_interference(true);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        assert!(tour.recorder.take().is_empty());
        assert!(tour.manager.has_compass_interference());

        // Held back change goes out with the regained fix
        tour.provider.move_to(HERE);
        tour.provider.fire(OrientationEvent::LocationChanged);
        assert_eq!(
            tour.recorder.take(),
            vec![
                Notification::HasLocationChange(true),
                Notification::CompassInterference(true),
            ]
        );
    }

    #[test]
    fn test_interference_cleared_while_fix_lost() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.provider.set_interference(true);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        tour.provider.lose_fix();
        tour.provider.fire(OrientationEvent::LocationChanged);
        tour.recorder.take();

        // Comes and goes without a fix, listeners never need to hear about it
        tour.provider.set_interference(false);
        tour.provider.fire(OrientationEvent::AccuracyChanged);
        tour.provider.set_interference(true);
        tour.provider.fire(OrientationEvent::AccuracyChanged);

        tour.provider.move_to(HERE);
        tour.provider.fire(OrientationEvent::LocationChanged);
        assert_eq!(
            tour.recorder.take(),
            vec![Notification::HasLocationChange(true)]
        );
    }

    #[test]
    fn test_accuracy_change_does_not_recompute() {
        let tour = Tour::new(campus());
        tour.provider.fire(OrientationEvent::AccuracyChanged);

        assert!(tour.recorder.take().is_empty());
        assert!(!tour.manager.has_location());
        assert!(tour.manager.get_front_building().is_none());
    }

    struct OrderListener {
        id: usize,
        log: Rc<RefCell<Vec<usize>>>,
    }

    impl BuildingLocationListener for OrderListener {
        fn on_has_location_change(&self, _has_location: bool) {
            self.log.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_listeners_notified_in_order() {
        let tour = Tour::new(campus());
        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners = (0..3)
            .map(|id| {
                Rc::new(OrderListener {
                    id,
                    log: log.clone(),
                }) as Rc<dyn BuildingLocationListener>
            })
            .collect::<Vec<_>>();

        for listener in listeners.iter() {
            tour.manager.add_listener(listener.clone());
        }
        // Duplicate is ignored
        tour.manager.add_listener(listeners[0].clone());
        tour.manager.remove_listener(&listeners[1]);

        tour.provider.fire(OrientationEvent::LocationChanged);
        assert_eq!(*log.borrow(), vec![0, 2]);
    }

    #[test]
    fn test_removed_listener_not_notified() {
        let tour = Tour::new(campus());
        let recorder: Rc<dyn BuildingLocationListener> = tour.recorder.clone();
        tour.manager.remove_listener(&recorder);

        tour.provider.fire(OrientationEvent::LocationChanged);
        assert!(tour.recorder.take().is_empty());
    }

    struct ReadingListener {
        manager: Weak<TestManager>,
        saw_front: Cell<bool>,
    }

    impl BuildingLocationListener for ReadingListener {
        fn on_nearby_buildings_change(
            &self,
            _left: Option<&BuildingWithLocation>,
            front: Option<&BuildingWithLocation>,
            _right: Option<&BuildingWithLocation>,
        ) {
            if let Some(manager) = self.manager.upgrade() {
                self.saw_front
                    .set(manager.get_front_building().as_ref() == front);
            }
        }
    }

    #[test]
    fn test_listener_can_read_state() {
        let tour = Tour::new(campus());
        let reader = Rc::new(ReadingListener {
            manager: Rc::downgrade(&tour.manager),
            saw_front: Cell::new(false),
        });
        tour.manager.add_listener(reader.clone());

        tour.provider.fire(OrientationEvent::LocationChanged);
        assert!(reader.saw_front.get());
    }

    /// Fires a location change as soon as anything subscribes
    struct EagerOrientation {
        inner: Rc<MockOrientation>,
    }

    impl OrientationProvider for EagerOrientation {
        fn has_location(&self) -> bool {
            self.inner.has_location()
        }

        fn location(&self) -> Option<Location> {
            self.inner.location()
        }

        fn heading(&self) -> f32 {
            self.inner.heading()
        }

        fn has_interference(&self) -> bool {
            self.inner.has_interference()
        }

        fn start(&self) {
            self.inner.start();
        }

        fn stop(&self) {
            self.inner.stop();
        }

        fn add_on_changed_listener(&self, listener: Rc<dyn OrientationListener>) {
            self.inner.add_on_changed_listener(listener);
            self.inner.fire(OrientationEvent::LocationChanged);
        }

        fn remove_on_changed_listener(&self, listener: &Rc<dyn OrientationListener>) {
            self.inner.remove_on_changed_listener(listener);
        }
    }

    struct TrackingCheck {
        manager: Weak<BuildingLocationManager<EagerOrientation>>,
        saw_tracking: Cell<Option<bool>>,
    }

    impl BuildingLocationListener for TrackingCheck {
        fn on_has_location_change(&self, _has_location: bool) {
            if let Some(manager) = self.manager.upgrade() {
                self.saw_tracking.set(Some(manager.is_tracking()));
            }
        }
    }

    #[test]
    fn test_event_during_subscribe() {
        let provider = Rc::new(EagerOrientation {
            inner: MockOrientation::at(HERE, 0.0),
        });
        let manager = BuildingLocationManager::new(Buildings::new(campus()), provider.clone());
        let check = Rc::new(TrackingCheck {
            manager: Rc::downgrade(&manager),
            saw_tracking: Cell::new(None),
        });
        manager.add_listener(check.clone());

        manager.start_tracking();

        assert_eq!(check.saw_tracking.get(), Some(true));
        assert!(manager.has_location());
        assert!(manager.get_front_building().is_some());
        assert_eq!(provider.inner.listener_count(), 1);
        assert_eq!(provider.inner.starts(), 1);
    }

    #[test]
    fn test_dropped_manager_ignores_events() {
        let provider = MockOrientation::at(HERE, 0.0);
        let manager = TestManager::new(Buildings::new(campus()), provider.clone());
        manager.start_tracking();
        drop(manager);

        provider.fire(OrientationEvent::LocationChanged);
        assert_eq!(provider.listener_count(), 1);
    }
}

//! Player controller: triggers, locomotion state machine and physics tick

use aerie_core::CharacterId;
use glam::{Vec2, Vec3};
use tracing::{debug, info, warn};

use crate::camera::{CameraConfig, FollowCamera};
use crate::checkpoint::Checkpoints;
use crate::error::SpawnError;
use crate::input::{InputAction, InputBindings, InputHandler, InputState};
use crate::registry::CharacterRegistry;
use crate::session::{JoinSession, PauseOverlay};

use super::{
    channels, compute_direction, Animator, DashAbility, GlideVisual, Health, LatestDirection,
    LocomotionConfig, LocomotionState, MovementPrimitive,
};

/// Optional collaborators attached at spawn. Anything left out turns the
/// matching operation into a no-op.
#[derive(Default)]
pub struct Collaborators {
    pub animator: Option<Box<dyn Animator>>,
    pub dash: Option<Box<dyn DashAbility>>,
    pub health: Option<Box<dyn Health>>,
    /// Follow camera to bind; `None` means no camera
    pub camera: Option<CameraConfig>,
    /// Device bindings; `None` means triggers only arrive through the `on_*` calls
    pub bindings: Option<InputBindings>,
}

impl Collaborators {
    pub fn with_animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    pub fn with_dash(mut self, dash: impl DashAbility + 'static) -> Self {
        self.dash = Some(Box::new(dash));
        self
    }

    pub fn with_health(mut self, health: impl Health + 'static) -> Self {
        self.health = Some(Box::new(health));
        self
    }

    pub fn with_camera(mut self, config: CameraConfig) -> Self {
        self.camera = Some(config);
        self
    }

    pub fn with_bindings(mut self, bindings: InputBindings) -> Self {
        self.bindings = Some(bindings);
        self
    }
}

/// What is left of a character after [`PlayerController::destroy`]
pub struct Released<M> {
    /// Movement primitive, still present in the host's world
    pub motor: M,
    /// Follow camera, handed back only when configured as persistent
    pub camera: Option<FollowCamera>,
}

/// Third-person locomotion controller for one character
pub struct PlayerController<M: MovementPrimitive> {
    id: CharacterId,
    /// Locomotion tuning
    pub config: LocomotionConfig,
    motor: M,
    state: LocomotionState,
    /// Raw move input, each axis in [-1, 1]
    input: Vec2,
    direction: LatestDirection,
    glide_visual: Option<GlideVisual>,
    camera: Option<FollowCamera>,
    input_handler: Option<InputHandler>,
    animator: Option<Box<dyn Animator>>,
    dash: Option<Box<dyn DashAbility>>,
    health: Option<Box<dyn Health>>,
    enabled: bool,
}

impl<M: MovementPrimitive> PlayerController<M> {
    /// Create a character: admit it through the session, register it, then
    /// bind its follow camera. A rejected character is dropped on the spot.
    pub fn spawn(
        motor: M,
        config: LocomotionConfig,
        collaborators: Collaborators,
        registry: &mut CharacterRegistry,
        session: &mut dyn JoinSession,
    ) -> Result<Self, SpawnError> {
        let id = CharacterId::new();

        if !session.admit(id) {
            warn!("Character {} was not admitted, destroying it", id);
            return Err(SpawnError::NotAdmitted(id));
        }

        if let Err(e) = registry.register(id) {
            session.leave(id);
            return Err(e.into());
        }

        let Collaborators {
            animator,
            dash,
            health,
            camera,
            bindings,
        } = collaborators;

        let camera = camera.map(|camera_config| {
            let mut camera = FollowCamera::with_config(camera_config);
            camera.snap_to(motor.position());
            camera
        });

        let controller = Self {
            id,
            config,
            state: if motor.is_grounded() {
                LocomotionState::Grounded
            } else {
                LocomotionState::Airborne
            },
            motor,
            input: Vec2::ZERO,
            direction: LatestDirection::default(),
            glide_visual: None,
            camera,
            input_handler: bindings.map(InputHandler::with_bindings),
            animator,
            dash,
            health,
            enabled: true,
        };

        info!(
            "Spawned character {} at {:?} ({} registered)",
            id,
            controller.motor.position(),
            registry.len()
        );
        Ok(controller)
    }

    /// Tear the character down: deregister, then release camera and input bindings.
    /// The movement primitive goes back to the host so it can leave its world;
    /// a persistent follow camera outlives the character.
    pub fn destroy(
        mut self,
        registry: &mut CharacterRegistry,
        session: &mut dyn JoinSession,
    ) -> Released<M> {
        if let Err(e) = registry.deregister(self.id) {
            warn!("Destroying character: {}", e);
        }
        session.leave(self.id);

        if self.glide_visual.take().is_some() {
            debug!("Glide visual of {} destroyed with its character", self.id);
        }
        let camera = match self.camera.take() {
            Some(camera) if camera.config.persistent => {
                debug!("Follow camera of {} kept alive", self.id);
                Some(camera)
            }
            Some(_) => {
                debug!("Released follow camera of {}", self.id);
                None
            }
            None => None,
        };
        self.input_handler = None;

        info!("Destroyed character {}", self.id);
        Released {
            motor: self.motor,
            camera,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Direction the next physics tick will move along
    pub fn move_direction(&self) -> Vec3 {
        self.direction.get()
    }

    /// Raw move input as last received
    pub fn input(&self) -> Vec2 {
        self.input
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }

    pub fn velocity(&self) -> Vec3 {
        self.motor.velocity()
    }

    pub fn glide_visual(&self) -> Option<&GlideVisual> {
        self.glide_visual.as_ref()
    }

    pub fn camera(&self) -> Option<&FollowCamera> {
        self.camera.as_ref()
    }

    pub fn animator(&self) -> Option<&dyn Animator> {
        self.animator.as_deref()
    }

    pub fn dash_ability(&self) -> Option<&dyn DashAbility> {
        self.dash.as_deref()
    }

    pub fn has_health(&self) -> bool {
        self.health.is_some()
    }

    /// Raw device input for this character, if bindings were attached
    pub fn input_handler_mut(&mut self) -> Option<&mut InputHandler> {
        self.input_handler.as_mut()
    }

    // --- Triggers ---------------------------------------------------------

    /// `move` trigger
    pub fn on_move(&mut self, value: Vec2, pause: &dyn PauseOverlay) {
        self.input = if pause.is_active() {
            Vec2::ZERO
        } else {
            value.clamp(Vec2::NEG_ONE, Vec2::ONE)
        };
    }

    /// `jump` trigger: jump when grounded, otherwise toggle the glide
    pub fn on_jump(&mut self, pause: &dyn PauseOverlay) {
        if !self.enabled || pause.is_active() {
            return;
        }

        if self.motor.is_grounded() {
            // Ground contact wins over any aerial state
            if self.state.is_gliding() {
                self.exit_glide();
            }
            self.motor.request_jump();
            self.transition(LocomotionState::Grounded);
        } else if self.state.is_gliding() {
            self.exit_glide();
            self.transition(LocomotionState::Airborne);
        } else {
            self.enter_glide();
        }
    }

    /// `dash` trigger, forwarded with the current movement direction
    pub fn on_dash(&mut self, pause: &dyn PauseOverlay) {
        if !self.enabled || pause.is_active() {
            return;
        }
        let direction = self.direction.get();
        if let Some(dash) = self.dash.as_mut() {
            dash.dash(direction);
        }
    }

    /// `cameraOrbit` trigger, forwarded verbatim to the camera
    pub fn on_camera_orbit(&mut self, amount: f32, pause: &dyn PauseOverlay) {
        if pause.is_active() {
            return;
        }
        if let Some(camera) = self.camera.as_mut() {
            camera.orbit(amount);
        }
    }

    /// `pause` trigger
    pub fn on_pause(&mut self, pause: &mut dyn PauseOverlay) {
        pause.toggle();
        if pause.is_active() {
            self.input = Vec2::ZERO;
        }
    }

    /// Dispatch one frame of device input into the triggers
    pub fn handle_input(&mut self, input: &InputState, pause: &mut dyn PauseOverlay) {
        if input.is_just_pressed(InputAction::Pause) {
            self.on_pause(pause);
        }
        self.on_move(input.move_axis(), pause);
        if input.is_just_pressed(InputAction::Jump) {
            self.on_jump(pause);
        }
        if input.is_just_pressed(InputAction::Dash) {
            self.on_dash(pause);
        }
        let orbit = input.orbit_axis();
        if orbit != 0.0 {
            self.on_camera_orbit(orbit, pause);
        }
    }

    // --- Frame tick -------------------------------------------------------

    /// Variable-rate frame tick: sample input and publish the camera-relative
    /// direction for the physics ticks that follow.
    pub fn update(&mut self, pause: &mut dyn PauseOverlay, dt: f32) {
        if let Some(handler) = self.input_handler.as_mut() {
            let frame = handler.state.clone();
            handler.end_frame();
            if self.enabled {
                self.handle_input(&frame, pause);
            }
        }

        if !self.enabled {
            return;
        }

        if pause.is_active() {
            self.input = Vec2::ZERO;
        }

        if let Some(dash) = self.dash.as_mut() {
            dash.tick(dt);
        }

        let yaw = self.camera.as_ref().map_or(0.0, FollowCamera::yaw);
        self.direction.publish(compute_direction(self.input, yaw));

        let position = self.motor.position();
        if let Some(camera) = self.camera.as_mut() {
            camera.follow(position, dt);
        }
    }

    // --- Physics tick -----------------------------------------------------

    /// Fixed-rate physics tick: recovery, ground contact, velocity and animator sync
    pub fn fixed_update(
        &mut self,
        world: &mut M::World,
        checkpoints: &mut dyn Checkpoints,
        dt: f32,
    ) {
        if !self.enabled {
            return;
        }

        self.recover_out_of_bounds(world, checkpoints);
        self.evaluate_ground_contact();

        if self.motor.is_enabled() {
            self.motor.apply_movement(self.direction.get());
            if self.state.is_gliding() {
                self.hold_glide_descent();
            }
            self.motor.update_movement(world, dt);
        }

        if let Some(visual) = self.glide_visual.as_mut() {
            visual.follow(self.motor.position());
        }

        self.sync();
    }

    /// Below the world floor: ask for a checkpoint, move there, re-snap the camera.
    /// Returns whether a teleport was issued.
    fn recover_out_of_bounds(
        &mut self,
        world: &mut M::World,
        checkpoints: &mut dyn Checkpoints,
    ) -> bool {
        let position = self.motor.position();
        if position.y >= self.config.out_of_bounds_y {
            return false;
        }

        info!(
            "Character {} fell out of bounds at {:?}, returning to checkpoint",
            self.id, position
        );

        if self.state.is_gliding() {
            self.exit_glide();
        }

        let target = checkpoints.teleport_to_checkpoint(self.id);
        self.motor.teleport(world, target);
        self.transition(LocomotionState::Airborne);

        if let Some(camera) = self.camera.as_mut() {
            camera.snap_to(target);
        }
        true
    }

    fn evaluate_ground_contact(&mut self) {
        let grounded = self.motor.is_grounded();
        match self.state {
            LocomotionState::Gliding if grounded => {
                self.exit_glide();
                self.transition(LocomotionState::Grounded);
            }
            LocomotionState::Gliding => {}
            _ if grounded => self.transition(LocomotionState::Grounded),
            _ => self.transition(LocomotionState::Airborne),
        }
    }

    fn transition(&mut self, next: LocomotionState) {
        if self.state != next {
            debug!("Character {}: {} -> {}", self.id, self.state, next);
            self.state = next;
        }
    }

    /// Start gliding. A no-op while a glide visual already exists.
    fn enter_glide(&mut self) {
        if self.glide_visual.is_some() {
            return;
        }

        let yaw = match self.camera.as_ref() {
            Some(camera) => camera.yaw(),
            None => {
                let forward = self.motor.transform().forward();
                forward.x.atan2(forward.z)
            }
        };
        self.glide_visual = Some(GlideVisual::spawn(
            &self.motor.transform(),
            yaw,
            &self.config,
        ));
        debug!("Glide visual spawned for {}", self.id);

        if let Some(animator) = self.animator.as_mut() {
            animator.set_bool(channels::IS_FLOATING, true);
        }

        let direction = self.direction.get();
        self.motor.set_velocity(Vec3::new(
            direction.x * self.config.forward_speed,
            -self.config.float_gravity,
            direction.z * self.config.forward_speed,
        ));
        self.motor.set_gravity_enabled(false);
        self.transition(LocomotionState::Gliding);
    }

    /// Cancel the glide: drop the visual and fall at normal speed again.
    /// Horizontal velocity is preserved on every exit path.
    fn exit_glide(&mut self) {
        if self.glide_visual.take().is_some() {
            debug!("Glide visual destroyed for {}", self.id);
        }

        if let Some(animator) = self.animator.as_mut() {
            animator.set_bool(channels::IS_FLOATING, false);
        }

        let velocity = self.motor.velocity();
        self.motor
            .set_velocity(Vec3::new(velocity.x, -self.config.normal_gravity, velocity.z));
        self.motor.set_gravity_enabled(true);
    }

    fn hold_glide_descent(&mut self) {
        let velocity = self.motor.velocity();
        self.motor
            .set_velocity(Vec3::new(velocity.x, -self.config.float_gravity, velocity.z));
    }

    /// Push distance-to-destination, grounded flag and vertical speed to the animator
    pub fn sync(&mut self) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };
        animator.set_float(
            channels::DISTANCE_TO_DESTINATION,
            self.motor.distance_to_destination(),
        );
        animator.set_bool(channels::IS_GROUNDED, self.motor.is_grounded());
        animator.set_float(channels::VERTICAL_SPEED, self.motor.velocity().y);
    }

    // --- Lifecycle --------------------------------------------------------

    /// Stop the character dead: input, direction and velocity are zeroed
    /// before anything else, then the animator is synced once.
    pub fn disable(&mut self) {
        self.input = Vec2::ZERO;
        self.direction.clear();
        if self.motor.is_enabled() {
            self.motor.apply_movement(Vec3::ZERO);
        }
        self.motor.set_velocity(Vec3::ZERO);
        self.sync();

        if self.enabled {
            debug!("Character {} disabled", self.id);
        }
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        if !self.enabled {
            debug!("Character {} enabled", self.id);
        }
        self.enabled = true;
    }
}

//! Mutable session state and the single per-frame event dispatch.

use lumen_math::Vec2;

use crate::config::SessionConfig;
use crate::input::{InputEvent, Key, MouseButton};
use crate::scene::{ObstacleId, Scene};

/// What the left mouse button is currently holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    Light { offset: Vec2 },
    Obstacle { id: ObstacleId, offset: Vec2 },
}

/// Everything the event handler mutates and the tracer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub scene: Scene,
    pub config: SessionConfig,
    drag: Option<DragTarget>,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Scene::default(), SessionConfig::default())
    }
}

impl Session {
    pub fn new(scene: Scene, config: SessionConfig) -> Self {
        Self {
            scene,
            config,
            drag: None,
            running: true,
        }
    }

    /// False once a quit request has been handled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn drag(&self) -> Option<DragTarget> {
        self.drag
    }

    /// Handle a batch of events in order.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    /// Apply one input event to the session.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown { key: Key::Escape } => {
                log::info!("Quit requested");
                self.running = false;
            }
            InputEvent::MouseDown {
                button: MouseButton::Left,
                position,
            } => self.begin_drag(position),
            InputEvent::MouseMove { position } => self.update_drag(position),
            InputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                if let Some(target) = self.drag.take() {
                    log::debug!("Released {:?}", target);
                }
            }
            InputEvent::Scroll { delta } => {
                let rays = self.config.adjust_rays(delta);
                log::info!("Rays: {}", rays);
            }
            InputEvent::KeyDown { key: Key::Up } => {
                let bounces = self.config.adjust_bounces(1);
                log::info!("Bounces: {}", bounces);
            }
            InputEvent::KeyDown { key: Key::Down } => {
                let bounces = self.config.adjust_bounces(-1);
                log::info!("Bounces: {}", bounces);
            }
            _ => {}
        }
    }

    /// The light wins over obstacles; among obstacles the topmost wins.
    fn begin_drag(&mut self, position: Vec2) {
        let light = &self.scene.light;

        self.drag = if light.contains(position) {
            Some(DragTarget::Light {
                offset: position - light.position,
            })
        } else {
            self.scene.obstacle_at(position).map(|id| DragTarget::Obstacle {
                id,
                offset: position - self.scene.obstacles()[id].position,
            })
        };

        if let Some(target) = self.drag {
            log::debug!("Grabbed {:?}", target);
        }
    }

    fn update_drag(&mut self, position: Vec2) {
        match self.drag {
            Some(DragTarget::Light { offset }) => self.scene.move_light(position - offset),
            Some(DragTarget::Obstacle { id, offset }) => {
                self.scene.move_obstacle(id, position - offset)
            }
            None => {}
        }
    }
}

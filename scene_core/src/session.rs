//! A running scene: key map, cooldown gate, machine and reducer in one place.

use rand::Rng;
use site_rules::{GameProgress, SiteId, Sites};
use tracing::trace;

use crate::context::SceneContext;
use crate::error::SceneError;
use crate::events::GameEvent;
use crate::input::{InputGate, KeyMap};
use crate::machine::SceneMachine;

/// Owns the authoritative [`SceneContext`] and threads it through
/// [`SceneMachine::step`] and [`SceneContext::apply`].
///
/// Each accepted input that produces an event locks the session until the
/// presentation layer calls [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub struct SceneSession {
    machine: SceneMachine,
    context: SceneContext,
    keys: KeyMap,
    gate: InputGate,
}

impl SceneSession {
    pub fn new(machine: SceneMachine, context: SceneContext, keys: KeyMap) -> Self {
        Self {
            machine,
            context,
            keys,
            gate: InputGate::new(),
        }
    }

    /// A session at `site`'s start point with the default key map.
    pub fn start(sites: Sites, site: SiteId, progress: GameProgress) -> Result<Self, SceneError> {
        let context = SceneContext::new(&sites, site, progress)?;
        Ok(Self::new(SceneMachine::new(sites), context, KeyMap::default()))
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Handle one physical key press.
    ///
    /// Unbound keys and presses during a transition are dropped. On an error
    /// the context is left untouched and the gate reopened.
    pub fn press<R: Rng + ?Sized>(
        &mut self,
        code: u32,
        rng: &mut R,
    ) -> Result<Option<GameEvent>, SceneError> {
        let Some(key) = self.keys.map(code) else {
            trace!(code, "unbound_key");
            return Ok(None);
        };
        if !self.gate.try_begin() {
            trace!(key = %key, "input_busy");
            return Ok(None);
        }

        let pending = self.context.clone().with_key_press(key);
        let event = match self.machine.step(&pending, rng) {
            Ok(event) => event,
            Err(err) => {
                self.gate.finish();
                return Err(err);
            }
        };

        match &event {
            Some(event) => self.context = pending.apply(event),
            None => self.gate.finish(),
        }
        Ok(event)
    }

    /// The current transition has finished playing; accept input again.
    pub fn finish(&mut self) {
        self.gate.finish();
    }
}

use crate::haptics;
use sort_visualizer::Session;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

/// Shared handle to the session plus a way to re-render after mutating it.
#[derive(Clone)]
pub struct SessionHandle {
    session: Rc<RefCell<Session>>,
    refresh: UseForceUpdateHandle,
}

impl SessionHandle {
    pub fn borrow(&self) -> Ref<'_, Session> {
        self.session.borrow()
    }

    /// Mutate the session, then schedule a re-render.
    pub fn update<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        // Release the borrow before rendering reads the session again.
        let out = f(&mut self.session.borrow_mut());
        self.refresh.force_update();
        out
    }
}

/// Custom hook that keeps one session alive across re-renders.
#[hook]
pub fn use_session() -> SessionHandle {
    let session = use_mut_ref(|| Session::new(&mut rand::rng()));
    let refresh = use_force_update();
    SessionHandle { session, refresh }
}

/// Vibration feedback, enabled only once the permission probe succeeds.
#[derive(Clone, Copy, PartialEq)]
pub struct Vibration {
    pub enabled: bool,
}

impl Vibration {
    pub fn pulse(&self, duration_ms: u32) {
        if self.enabled {
            haptics::vibrate(duration_ms);
        }
    }
}

/// Custom hook that probes vibration support once on mount.
#[hook]
pub fn use_vibration() -> Vibration {
    let enabled = use_state(|| false);
    {
        let enabled = enabled.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                enabled.set(haptics::probe_vibration().await);
            });
        });
    }
    Vibration { enabled: *enabled }
}

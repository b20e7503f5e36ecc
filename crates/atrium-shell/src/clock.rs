//! Taskbar clock.
//!
//! A repeating scheduler task calls [`update`] once a second; the readout
//! lands in the well-known `clock` node. Missing node or failing time
//! service degrade to a no-op.

use atrium_scene::SceneRegistry;
use atrium_scene::helpers::set_text;

use crate::services::TimeService;

/// Well-known name of the clock node.
pub const CLOCK_NODE: &str = "clock";

/// Format the current HH:MM into the clock node.
pub fn update(scene: &mut SceneRegistry, time: &dyn TimeService) {
    if !scene.contains(CLOCK_NODE) {
        return;
    }
    match time.now() {
        Ok(t) => set_text(scene, CLOCK_NODE, &format!("{:02}:{:02}", t.hour, t.minute)),
        Err(e) => log::warn!("clock update failed: {e}"),
    }
}

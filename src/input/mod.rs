use macroquad::prelude::*;

/// Actions requested by the keyboard this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub toggle_pause: bool,
    pub restart: bool,
    pub quit: bool,
    /// Advance exactly one frame while paused
    pub single_step: bool,
}

/// Poll the keyboard: Space pauses, R restarts, N steps once, Escape/Q quits
pub fn poll_controls() -> Controls {
    type KeyAction = (KeyCode, fn(&mut Controls));

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, |c| c.toggle_pause = true),
        (KeyCode::R, |c| c.restart = true),
        (KeyCode::N, |c| c.single_step = true),
        (KeyCode::Escape, |c| c.quit = true),
        (KeyCode::Q, |c| c.quit = true),
    ];

    actions
        .iter()
        .fold(Controls::default(), |mut controls, (key, action)| {
            if is_key_pressed(*key) {
                action(&mut controls);
            }
            controls
        })
}

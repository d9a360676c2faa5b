use {
    base::Vec2,
    image::{Image, image_to_u32},
    minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions},
    moveit::{
        MoveError,
        game::{ClickSlot, GameSurface},
    },
    std::{sync::Arc, thread, time::Duration},
};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// minifb window that turns left-button presses into clicks.
pub struct WindowSurface {
    window: Window,
    clicks: Arc<ClickSlot>,
    button_down: bool,
}

impl WindowSurface {
    pub fn new(title: &str, size: Vec2<usize>, clicks: Arc<ClickSlot>) -> Result<Self, MoveError> {
        let window = Window::new(title, size.x, size.y, WindowOptions::default())
            .map_err(|error| MoveError::Display(error.to_string()))?;
        Ok(Self {
            window,
            clicks,
            button_down: false,
        })
    }

    // true on the frame the left button goes down
    fn press_edge(&mut self) -> bool {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = down && !self.button_down;
        self.button_down = down;
        pressed
    }
}

impl GameSurface for WindowSurface {
    fn show(&mut self, image: &Image) -> Result<(), MoveError> {
        self.window
            .update_with_buffer(&image_to_u32(image), image.size.x, image.size.y)
            .map_err(|error| MoveError::Display(error.to_string()))?;
        if self.press_edge() {
            if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
                self.clicks.store(Vec2::new(x as u32, y as u32));
            }
        }
        Ok(())
    }

    fn wait_for_input(&mut self) -> Result<bool, MoveError> {
        while self.window.is_open() {
            if self.window.is_key_down(Key::Escape) {
                return Ok(false);
            }
            let key = !self.window.get_keys_pressed(KeyRepeat::No).is_empty();
            if key || self.press_edge() {
                return Ok(true);
            }
            self.window.update();
            thread::sleep(POLL_INTERVAL);
        }
        Ok(false)
    }

    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

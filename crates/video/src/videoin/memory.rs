use {
    crate::*,
    base::Vec2,
    image::Image,
    std::collections::VecDeque,
};

/// Replays frames that are already in memory.
pub struct MemoryDevice {
    label: String,
    frames: VecDeque<Image>,
    frame_rate: f32,
    fail_open: Option<String>,
    fail_after: Option<usize>,
    delivered: usize,
}

impl MemoryDevice {
    pub fn new(label: impl Into<String>, frames: Vec<Image>) -> Self {
        Self {
            label: label.into(),
            frames: frames.into(),
            frame_rate: 30.0,
            fail_open: None,
            fail_after: None,
            delivered: 0,
        }
    }

    /// A device whose `open` fails with `message`.
    pub fn unavailable(label: impl Into<String>, message: impl Into<String>) -> Self {
        let mut device = Self::new(label, Vec::new());
        device.fail_open = Some(message.into());
        device
    }

    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Report a decode error once `count` frames have been delivered.
    pub fn with_error_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }
}

impl VideoInDevice for MemoryDevice {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn open(&mut self) -> Result<VideoInfo, VideoError> {
        if let Some(message) = &self.fail_open {
            return Err(VideoError::Open(format!("{}: {}", self.label, message)));
        }
        let size = self
            .frames
            .front()
            .map(|frame| frame.size)
            .unwrap_or(Vec2::new(0, 0));
        Ok(VideoInfo {
            size,
            frame_rate: self.frame_rate,
        })
    }

    fn close(&mut self) {
        self.frames.clear();
    }

    fn blocking_capture(&mut self) -> Result<Option<Image>, VideoError> {
        if self.fail_after == Some(self.delivered) {
            return Err(VideoError::Decode(format!(
                "{}: corrupt packet after frame {}",
                self.label, self.delivered
            )));
        }
        let frame = self.frames.pop_front();
        if frame.is_some() {
            self.delivered += 1;
        }
        Ok(frame)
    }
}

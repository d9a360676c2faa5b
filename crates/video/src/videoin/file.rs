use {
    crate::*,
    image::Image,
    std::path::PathBuf,
};

#[cfg(feature = "ffmpeg")]
use {
    base::Vec2,
    image::PixelFormat,
    std::sync::Once,
    video_rs::decode::Decoder,
};

/// Decodes a video container file with FFmpeg (feature `ffmpeg`).
pub struct FileDevice {
    path: PathBuf,
    #[cfg(feature = "ffmpeg")]
    decoder: Option<Decoder>,
}

impl FileDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            #[cfg(feature = "ffmpeg")]
            decoder: None,
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(feature = "ffmpeg")]
fn init_ffmpeg() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if let Err(error) = video_rs::init() {
            log::error!("failed to initialize FFmpeg: {}", error);
        }
    });
}

#[cfg(feature = "ffmpeg")]
impl VideoInDevice for FileDevice {
    fn label(&self) -> String {
        self.file_name()
    }

    fn open(&mut self) -> Result<VideoInfo, VideoError> {
        init_ffmpeg();
        if !self.path.is_file() {
            return Err(VideoError::Open(format!(
                "{}: no such file",
                self.path.display()
            )));
        }
        let decoder = Decoder::new(self.path.as_path())
            .map_err(|e| VideoError::Open(format!("{}: {}", self.path.display(), e)))?;
        let (width, height) = decoder.size();
        let info = VideoInfo {
            size: Vec2::new(width as usize, height as usize),
            frame_rate: decoder.frame_rate(),
        };
        self.decoder = Some(decoder);
        Ok(info)
    }

    fn close(&mut self) {
        self.decoder = None;
    }

    fn blocking_capture(&mut self) -> Result<Option<Image>, VideoError> {
        let decoder = self
            .decoder
            .as_mut()
            .ok_or_else(|| VideoError::Decode("decoder is not open".to_string()))?;
        match decoder.decode() {
            Ok((_timestamp, frame)) => {
                // HWC RGB24 array in logical order
                let shape = frame.shape();
                let size = Vec2::new(shape[1], shape[0]);
                let data: Vec<u8> = frame.iter().copied().collect();
                Ok(Some(Image::try_new(size, data, PixelFormat::Rgb8)?))
            }
            Err(video_rs::Error::DecodeExhausted) | Err(video_rs::Error::ReadExhausted) => Ok(None),
            Err(error) => Err(VideoError::Decode(error.to_string())),
        }
    }
}

#[cfg(not(feature = "ffmpeg"))]
impl VideoInDevice for FileDevice {
    fn label(&self) -> String {
        self.file_name()
    }

    fn open(&mut self) -> Result<VideoInfo, VideoError> {
        Err(VideoError::FeatureNotEnabled(format!(
            "{}: decoding video files requires the 'ffmpeg' feature",
            self.path.display()
        )))
    }

    fn close(&mut self) {}

    fn blocking_capture(&mut self) -> Result<Option<Image>, VideoError> {
        Ok(None)
    }
}

use {
    crate::MoveError,
    base::Vec2,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    video::is_video_file,
};

/// Frames are shrunk by this factor when several videos run at once.
pub const MULTI_VIDEO_DOWNSCALE: usize = 4;

/// One video to process and how its frames are sized.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoJob {
    pub path: PathBuf,
    /// Resolution of the first decoded frame, once known.
    pub native_size: Option<Vec2<usize>>,
    pub downscale: usize,
}

impl VideoJob {
    /// Job for one of `total_video_count` videos processed in the same run.
    pub fn new(path: impl Into<PathBuf>, total_video_count: usize) -> Self {
        Self {
            path: path.into(),
            native_size: None,
            downscale: if total_video_count > 1 {
                MULTI_VIDEO_DOWNSCALE
            } else {
                1
            },
        }
    }

    /// Name used in log lines and worker names.
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// `size` shrunk by the downscale factor, never below one pixel per side.
    pub fn reduced_size(&self, size: Vec2<usize>) -> Vec2<usize> {
        size.scale_down(self.downscale).map(|side| side.max(1))
    }

    /// Size frames are handed to the estimator at.
    pub fn target_size(&self) -> Option<Vec2<usize>> {
        self.native_size.map(|size| self.reduced_size(size))
    }
}

/// Video files directly inside `dir`, sorted by file name.
pub fn discover_videos(dir: &Path) -> Result<Vec<PathBuf>, MoveError> {
    let entries = fs::read_dir(dir).map_err(|error| {
        MoveError::SourceUnavailable(format!(
            "There was an error finding the path!, please make sure the '{}' folder exists ({})",
            dir.display(),
            error
        ))
    })?;

    let mut videos: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_video_file(path))
        .collect();
    if videos.is_empty() {
        return Err(MoveError::NoInputFound(format!(
            "Folder '{}' does not have videos!, please ensure videos are there.",
            dir.display()
        )));
    }
    videos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(videos)
}

use {
    crate::{Detection, MoveError},
    inference::pose::Landmark,
    serde::{Deserialize, Serialize},
    std::{
        fs::{self, File, OpenOptions},
        io::Write,
        path::{Path, PathBuf},
    },
};

/// How a frame's landmarks are laid out in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordLayout {
    /// One object per landmark, 33 per detected frame.
    #[default]
    Flat,
    /// One object per frame holding a `landmarks` array.
    Grouped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Flat layout record: a single landmark, or a frame without a pose.
///
/// Visibility is written under `vis`, the key existing log readers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkRecord {
    pub frame_id: u64,
    pub has_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Position>,
    #[serde(rename = "vis", default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkEntry {
    pub positions: Position,
    #[serde(rename = "vis")]
    pub visibility: f32,
}

/// All landmarks of one frame; the grouped layout writes these directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub frame_id: u64,
    pub has_data: bool,
    pub landmarks: Vec<LandmarkEntry>,
}

impl From<&Landmark> for LandmarkEntry {
    fn from(landmark: &Landmark) -> Self {
        Self {
            positions: Position {
                x: landmark.x,
                y: landmark.y,
                z: landmark.z,
            },
            visibility: landmark.visibility,
        }
    }
}

// grouped objects carry `landmarks`, so they are tried first
#[derive(Deserialize)]
#[serde(untagged)]
enum LogObject {
    Frame(FrameRecord),
    Landmark(LandmarkRecord),
}

/// Appends per-frame landmark results to `<output_dir>/<video stem>.json`.
///
/// The log is a concatenation of JSON objects with no separator, not one
/// JSON document. Writing frame 1 starts the log over.
#[derive(Debug, Clone)]
pub struct LandmarkRecorder {
    output_dir: PathBuf,
    layout: RecordLayout,
}

impl LandmarkRecorder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout: RecordLayout::Flat,
        }
    }

    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    pub fn log_path(&self, video_path: &Path) -> PathBuf {
        let stem = video_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());
        self.output_dir.join(format!("{stem}.json"))
    }

    pub fn record(
        &self,
        video_path: &Path,
        frame_index: u64,
        detection: &Detection,
    ) -> Result<(), MoveError> {
        let path = self.log_path(video_path);

        fs::create_dir_all(&self.output_dir).map_err(|e| write_failure(&path, e))?;
        if frame_index == 1 {
            File::create(&path).map_err(|e| write_failure(&path, e))?;
        }

        let mut buffer = Vec::new();
        match self.layout {
            RecordLayout::Flat => match detection {
                Detection::NoDetection => serde_json::to_writer(
                    &mut buffer,
                    &LandmarkRecord {
                        frame_id: frame_index,
                        has_data: false,
                        positions: None,
                        visibility: None,
                    },
                )
                .map_err(|e| write_failure(&path, e))?,
                Detection::Pose(landmarks) => {
                    for landmark in landmarks.iter() {
                        let entry = LandmarkEntry::from(landmark);
                        serde_json::to_writer(
                            &mut buffer,
                            &LandmarkRecord {
                                frame_id: frame_index,
                                has_data: true,
                                positions: Some(entry.positions),
                                visibility: Some(entry.visibility),
                            },
                        )
                        .map_err(|e| write_failure(&path, e))?;
                    }
                }
            },
            RecordLayout::Grouped => {
                let record = FrameRecord {
                    frame_id: frame_index,
                    has_data: detection.has_pose(),
                    landmarks: detection
                        .landmarks()
                        .map(|landmarks| landmarks.iter().map(LandmarkEntry::from).collect())
                        .unwrap_or_default(),
                };
                serde_json::to_writer(&mut buffer, &record).map_err(|e| write_failure(&path, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| write_failure(&path, e))?;
        file.write_all(&buffer).map_err(|e| write_failure(&path, e))?;
        Ok(())
    }
}

fn write_failure(path: &Path, error: impl std::fmt::Display) -> MoveError {
    MoveError::OutputWriteFailure(format!("{}: {}", path.display(), error))
}

fn read_failure(path: &Path, error: impl std::fmt::Display) -> MoveError {
    MoveError::SourceUnavailable(format!("{}: {}", path.display(), error))
}

/// Flat records of a log, in file order.
pub fn read_records(path: &Path) -> Result<Vec<LandmarkRecord>, MoveError> {
    let bytes = fs::read(path).map_err(|e| read_failure(path, e))?;
    serde_json::Deserializer::from_slice(&bytes)
        .into_iter::<LandmarkRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| read_failure(path, e))
}

/// Frames of a log in either layout; consecutive flat records of one frame are merged.
pub fn read_log(path: &Path) -> Result<Vec<FrameRecord>, MoveError> {
    let bytes = fs::read(path).map_err(|e| read_failure(path, e))?;

    let mut frames: Vec<FrameRecord> = Vec::new();
    for object in serde_json::Deserializer::from_slice(&bytes).into_iter::<LogObject>() {
        let object = object.map_err(|e| read_failure(path, e))?;
        match object {
            LogObject::Frame(frame) => frames.push(frame),
            LogObject::Landmark(record) => {
                let entry = match (record.positions, record.visibility) {
                    (Some(positions), Some(visibility)) => Some(LandmarkEntry {
                        positions,
                        visibility,
                    }),
                    _ => None,
                };
                match frames.last_mut() {
                    Some(frame) if frame.frame_id == record.frame_id && record.has_data => {
                        frame.landmarks.extend(entry)
                    }
                    _ => frames.push(FrameRecord {
                        frame_id: record.frame_id,
                        has_data: record.has_data,
                        landmarks: entry.into_iter().collect(),
                    }),
                }
            }
        }
    }
    Ok(frames)
}

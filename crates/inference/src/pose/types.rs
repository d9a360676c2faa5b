/// Number of body landmarks produced per detected pose.
pub const LANDMARK_COUNT: usize = 33;

/// One body landmark.
///
/// `x` and `y` are normalized to the frame (0 at the left/top edge, 1 at the
/// right/bottom edge) and may fall slightly outside that range. `z` is the
/// depth relative to the hips, on roughly the same scale as `x`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Likelihood in [0, 1] that the landmark is visible and not occluded.
    pub visibility: f32,
}

/// The full set of landmarks for one detected person, indexed by `LandmarkIndex`.
pub type PoseLandmarks = [Landmark; LANDMARK_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        LandmarkIndex::Nose,
        LandmarkIndex::LeftEyeInner,
        LandmarkIndex::LeftEye,
        LandmarkIndex::LeftEyeOuter,
        LandmarkIndex::RightEyeInner,
        LandmarkIndex::RightEye,
        LandmarkIndex::RightEyeOuter,
        LandmarkIndex::LeftEar,
        LandmarkIndex::RightEar,
        LandmarkIndex::MouthLeft,
        LandmarkIndex::MouthRight,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
        LandmarkIndex::LeftElbow,
        LandmarkIndex::RightElbow,
        LandmarkIndex::LeftWrist,
        LandmarkIndex::RightWrist,
        LandmarkIndex::LeftPinky,
        LandmarkIndex::RightPinky,
        LandmarkIndex::LeftIndex,
        LandmarkIndex::RightIndex,
        LandmarkIndex::LeftThumb,
        LandmarkIndex::RightThumb,
        LandmarkIndex::LeftHip,
        LandmarkIndex::RightHip,
        LandmarkIndex::LeftKnee,
        LandmarkIndex::RightKnee,
        LandmarkIndex::LeftAnkle,
        LandmarkIndex::RightAnkle,
        LandmarkIndex::LeftHeel,
        LandmarkIndex::RightHeel,
        LandmarkIndex::LeftFootIndex,
        LandmarkIndex::RightFootIndex,
    ];
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkIndex::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                LANDMARK_COUNT - 1
            )
        })
    }
}

/// Skeleton edges drawn by the overlay, as pairs of landmark indices.
pub const POSE_CONNECTIONS: [(usize, usize); 35] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    (11, 12),
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    (11, 23),
    (12, 24),
    (23, 24),
    (23, 25),
    (24, 26),
    (25, 27),
    (26, 28),
    (27, 29),
    (28, 30),
    (29, 31),
    (30, 32),
    (27, 31),
    (28, 32),
];

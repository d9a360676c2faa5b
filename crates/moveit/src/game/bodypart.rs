use inference::pose::LandmarkIndex;

/// A landmark that can be asked for, with its on-screen name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPart {
    pub name: &'static str,
    pub landmark: LandmarkIndex,
}

pub const BODY_PARTS: [BodyPart; 13] = [
    BodyPart {
        name: "nose",
        landmark: LandmarkIndex::Nose,
    },
    BodyPart {
        name: "left eye",
        landmark: LandmarkIndex::LeftEye,
    },
    BodyPart {
        name: "right eye",
        landmark: LandmarkIndex::RightEye,
    },
    BodyPart {
        name: "left shoulder",
        landmark: LandmarkIndex::LeftShoulder,
    },
    BodyPart {
        name: "right shoulder",
        landmark: LandmarkIndex::RightShoulder,
    },
    BodyPart {
        name: "left elbow",
        landmark: LandmarkIndex::LeftElbow,
    },
    BodyPart {
        name: "right elbow",
        landmark: LandmarkIndex::RightElbow,
    },
    BodyPart {
        name: "left wrist",
        landmark: LandmarkIndex::LeftWrist,
    },
    BodyPart {
        name: "right wrist",
        landmark: LandmarkIndex::RightWrist,
    },
    BodyPart {
        name: "left knee",
        landmark: LandmarkIndex::LeftKnee,
    },
    BodyPart {
        name: "right knee",
        landmark: LandmarkIndex::RightKnee,
    },
    BodyPart {
        name: "left heel",
        landmark: LandmarkIndex::LeftHeel,
    },
    BodyPart {
        name: "right heel",
        landmark: LandmarkIndex::RightHeel,
    },
];

use std::{fmt, str::FromStr};

/// Where a model session executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}

impl FromStr for Device {
    type Err = String;

    /// Accepts `cpu`, `cuda` and `cuda:<id>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda { device_id: 0 }),
            _ => match value.strip_prefix("cuda:") {
                Some(id) => id
                    .parse()
                    .map(|device_id| Device::Cuda { device_id })
                    .map_err(|_| format!("invalid CUDA device id '{id}'")),
                None => Err(format!("unknown device '{value}'")),
            },
        }
    }
}

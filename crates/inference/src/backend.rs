use crate::{Device, InferError, ModelSource, Session};

pub trait Backend: Send + Sync {
    fn name(&self) -> &str;
    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Box<dyn Session>, InferError>;
}

use {
    crate::{Backend, Device, InferError, ModelSource, Session},
    base::Tensor,
    ndarray::{ArrayD, ArrayViewD},
    ort::{
        session::{Session as OrtSession, SessionInputValue},
        value::TensorRef,
    },
    std::collections::HashMap,
};

/// ONNX Runtime backend, registered as `"onnx"`.
pub struct OnnxBackend;

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Box<dyn Session>, InferError> {
        let mut builder = OrtSession::builder()
            .map_err(|e| InferError::Backend(format!("failed to create session builder: {e}")))?;

        builder = match &device {
            Device::Cpu => {
                log::info!("onnx: using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!("onnx: CUDA requested (device_id={device_id}), available: {available}");
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let description = model.describe();
        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(path),
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes),
        }
        .map_err(|e| InferError::ModelLoad(format!("{description}: {e}")))?;

        let input_names: Vec<String> = session
            .inputs
            .iter()
            .map(|input| input.name.to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs
            .iter()
            .map(|output| output.name.to_string())
            .collect();
        log::debug!("onnx: loaded {description}, inputs {input_names:?}, outputs {output_names:?}");

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        for (name, _) in inputs {
            if !self.input_names.iter().any(|known| known == name) {
                return Err(InferError::InvalidInput {
                    name: name.to_string(),
                    expected_names: self.input_names.clone(),
                });
            }
        }

        let arrays = inputs
            .iter()
            .map(|(name, tensor)| Ok((name.to_string(), tensor_to_ndarray(tensor)?)))
            .collect::<Result<Vec<_>, InferError>>()?;
        let mut session_inputs: Vec<(String, SessionInputValue<'_>)> =
            Vec::with_capacity(arrays.len());
        for (name, array) in &arrays {
            let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                InferError::Backend(format!("failed to create tensor for '{name}': {e}"))
            })?;
            session_inputs.push((name.clone(), tensor_ref.into()));
        }

        let outputs = self
            .session
            .run(session_inputs)
            .map_err(|e| InferError::Backend(format!("inference failed: {e}")))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::Backend(format!("output '{output_name}' is not f32: {e}"))
                })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }
        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn tensor_to_ndarray(tensor: &Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape.clone(), tensor.data.clone()).map_err(|e| {
        InferError::ShapeMismatch {
            expected: format!("{:?}", tensor.shape),
            got: e.to_string(),
        }
    })
}

fn ndarray_to_tensor(array: ArrayViewD<'_, f32>) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}

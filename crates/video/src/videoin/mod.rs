use {
    crate::*,
    base::Vec2,
    futures_core::Stream,
    image::Image,
    std::{
        path::Path,
        pin::Pin,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        task::{Context, Poll},
    },
    tokio::{
        sync::{mpsc, oneshot},
        task::{JoinHandle, spawn_blocking},
    },
};

mod file;
mod memory;

pub use file::FileDevice;
pub use memory::MemoryDevice;

// capacity of the video input channel
const CHANNEL_CAPACITY: usize = 4;

/// Stream properties reported by a device when it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    pub size: Vec2<usize>,
    pub frame_rate: f32,
}

/// A blocking frame producer driven by the `VideoIn` worker thread.
pub trait VideoInDevice: Send {
    /// Short name used in log lines.
    fn label(&self) -> String;
    /// Prepare for decoding. Runs on the worker thread.
    fn open(&mut self) -> Result<VideoInfo, VideoError>;
    /// Release decoder resources, if open.
    fn close(&mut self);
    /// Next frame in decode order, or `None` once the stream is exhausted.
    fn blocking_capture(&mut self) -> Result<Option<Image>, VideoError>;
}

pub struct VideoIn {
    receiver: mpsc::Receiver<Result<VideoFrame, VideoError>>,
    cancel: Arc<AtomicBool>,
    info: VideoInfo,
    label: String,
    join_handle: Option<JoinHandle<()>>,
}

impl VideoIn {
    /// Open a video file through FFmpeg.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        Self::from_device(Box::new(FileDevice::new(path.as_ref()))).await
    }

    /// Start a worker around any device.
    pub async fn from_device(device: Box<dyn VideoInDevice>) -> Result<Self, VideoError> {
        let (sender, receiver) = mpsc::channel::<Result<VideoFrame, VideoError>>(CHANNEL_CAPACITY);
        let cancel = Arc::new(AtomicBool::new(false));
        let label = device.label();
        let (join_handle, info) = Self::spawn_worker(device, sender, Arc::clone(&cancel)).await?;
        log::info!(
            "{}: opened {}x{} at {:.2} fps",
            label,
            info.size.x,
            info.size.y,
            info.frame_rate
        );
        Ok(Self {
            receiver,
            cancel,
            info,
            label,
            join_handle: Some(join_handle),
        })
    }

    async fn spawn_worker(
        mut device: Box<dyn VideoInDevice>,
        sender: mpsc::Sender<Result<VideoFrame, VideoError>>,
        cancel: Arc<AtomicBool>,
    ) -> Result<(JoinHandle<()>, VideoInfo), VideoError> {
        // open() runs on the same thread as blocking_capture(), the result comes back here
        let (init_tx, init_rx) = oneshot::channel::<Result<VideoInfo, VideoError>>();

        let join_handle = spawn_blocking(move || {
            let label = device.label();
            match device.open() {
                Ok(info) => {
                    let _ = init_tx.send(Ok(info));
                }
                Err(error) => {
                    let _ = init_tx.send(Err(error));
                    return;
                }
            }

            let mut index = 0u64;
            while !cancel.load(Ordering::Relaxed) {
                match device.blocking_capture() {
                    Ok(Some(image)) => {
                        index += 1;
                        if sender.blocking_send(Ok(VideoFrame { index, image })).is_err() {
                            log::debug!("{}: receiver dropped after frame {}", label, index);
                            break;
                        }
                    }
                    Ok(None) => {
                        log::info!("{}: end of stream after {} frames", label, index);
                        break;
                    }
                    Err(error) => {
                        log::error!("{}: decoding frame {} failed: {}", label, index + 1, error);
                        // the error is the last item; the stream ends after it
                        let _ = sender.blocking_send(Err(error));
                        break;
                    }
                }
            }
            device.close();
            // dropping the sender ends the stream for the receiver
        });

        let info = init_rx
            .await
            .map_err(|_| VideoError::Channel("worker thread died during open".to_string()))??;

        Ok((join_handle, info))
    }

    pub fn info(&self) -> VideoInfo {
        self.info
    }

    pub fn size(&self) -> Vec2<usize> {
        self.info.size
    }

    pub fn frame_rate(&self) -> f32 {
        self.info.frame_rate
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Next frame, or `None` at end of stream.
    ///
    /// A decode failure is delivered once as `Some(Err(_))`; `None` follows it.
    pub async fn recv(&mut self) -> Option<Result<VideoFrame, VideoError>> {
        self.receiver.recv().await
    }
}

impl Stream for VideoIn {
    type Item = Result<VideoFrame, VideoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(join_handle) = self.join_handle.take() {
            join_handle.abort();
        }
    }
}

use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every rendered frame, in generation order per producer.
pub trait FrameSink: Send + Sync {
    fn present(&self, frame: FrameData);
}

use crate::domain::detection::entities::Detection;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Keeps detections whose confidence reaches `threshold`, preserving order.
/// The comparison uses the model's raw value; survivors are then clamped to
/// `0.0..=1.0`.
pub fn filter_by_confidence(detections: Vec<Detection>, threshold: f64) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|detection| detection.confidence >= threshold)
        .map(|mut detection| {
            detection.confidence = detection.confidence.clamp(0.0, 1.0);
            detection
        })
        .collect()
}

//! Turns free-form vision model output into [`Detection`] records.
//!
//! The model is asked for a JSON array but may wrap it in prose or markdown.
//! Extraction is best effort: the text between the first `[` and the last `]`
//! is parsed as an array. Anything that does not parse yields no detections;
//! there is no guessing from plain text.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::detection::entities::Detection;

pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_CATEGORY: &str = "other";

/// Parses a raw vision reply. Never fails: malformed or missing JSON gives an
/// empty list. Confidences are reported as given; [`filter_by_confidence`]
/// clamps the survivors.
///
/// [`filter_by_confidence`]: crate::domain::detection::filter::filter_by_confidence
pub fn parse_vision_response(content: &str) -> Vec<Detection> {
    let Some(candidate) = extract_json_array(content) else {
        warn!("No JSON array found in vision response, attempting text parsing");
        return parse_text_response(content);
    };

    let elements = match serde_json::from_str::<Vec<Value>>(candidate) {
        Ok(elements) => elements,
        Err(e) => {
            warn!("JSON parsing failed: {}, attempting text parsing", e);
            return parse_text_response(content);
        }
    };

    let mut detections = Vec::with_capacity(elements.len());
    for element in &elements {
        let Some(record) = element.as_object() else {
            continue;
        };

        match coerce_detection(record) {
            Ok(Some(detection)) => detections.push(detection),
            Ok(None) => {}
            Err(reason) => {
                warn!("Error parsing vision response: {}", reason);
                return Vec::new();
            }
        }
    }

    info!("Successfully parsed {} detections", detections.len());
    detections
}

/// Returns the slice from the first `[` to the last `]`, inclusive.
pub fn extract_json_array(content: &str) -> Option<&str> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;

    (start < end).then(|| &content[start..=end])
}

/// Fallback for replies without JSON. Intentionally inert.
fn parse_text_response(_content: &str) -> Vec<Detection> {
    warn!("Using fallback text parsing - JSON format preferred");
    Vec::new()
}

/// `Ok(None)` drops the element, `Err` invalidates the whole reply.
fn coerce_detection(record: &Map<String, Value>) -> Result<Option<Detection>, String> {
    let Some(name) = record.get("name").and_then(Value::as_str) else {
        return Ok(None);
    };

    let confidence = match record.get("confidence") {
        None | Some(Value::Null) => DEFAULT_CONFIDENCE,
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| format!("confidence {number} is not representable"))?,
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("confidence {text:?} is not a number: {e}"))?,
        Some(other) => return Err(format!("confidence {other} is not a number")),
    };

    if !confidence.is_finite() {
        return Err(format!("confidence {confidence} is not finite"));
    }

    let category = record
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_CATEGORY);

    let description = record
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(name);

    Ok(Some(Detection::new(name, confidence, category, description)))
}

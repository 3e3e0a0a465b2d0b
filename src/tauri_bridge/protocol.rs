//! Custom protocol handlers for efficient data transfer
//!
//! This module implements the `frame://` custom protocol for direct binary
//! transfer of render frames, bypassing Tauri's IPC JSON serialization.

use image::{codecs::jpeg::JpegEncoder, ImageBuffer, ImageEncoder, Rgba};
use tauri::http::{Response as HttpResponse, StatusCode};

use super::shared_state::{SharedFrameBuffer, SharedScreenController};
use crate::config::{compression::JPEG_QUALITY, RENDER_HEIGHT, RENDER_WIDTH};
use crate::error::BridgeError;

type Response = HttpResponse<Vec<u8>>;

/// Handle requests to the custom `frame://` protocol
///
/// Supported endpoints:
/// - `frame` or `frame.jpg`: JPEG-compressed frame (~50-100KB)
/// - `frame.raw`: Raw RGBA frame (~1.8MB)
/// - `speed`: Speed control state as JSON
pub fn handle_frame_protocol(
    uri_path: &str,
    buffer: &SharedFrameBuffer,
    controller: &SharedScreenController,
) -> Response {
    let resource = uri_path.trim_start_matches('/');

    tracing::trace!("[Protocol] Resolved resource: {}", resource);

    let result = match resource {
        "frame" | "frame.jpg" => handle_jpeg_frame(buffer),
        "frame.raw" => handle_raw_frame(buffer),
        "speed" => handle_speed(controller),
        _ => return text(StatusCode::NOT_FOUND, "Not Found"),
    };

    result.unwrap_or_else(|err| match err {
        BridgeError::FrameNotReady => text(StatusCode::SERVICE_UNAVAILABLE, "Frame not ready"),
        err => {
            tracing::warn!("[Protocol] {} failed: {}", resource, err);
            text(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    })
}

/// Handle JPEG-compressed frame request
fn handle_jpeg_frame(buffer: &SharedFrameBuffer) -> Result<Response, BridgeError> {
    let rgba_data = buffer.latest()?;

    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(RENDER_WIDTH, RENDER_HEIGHT, rgba_data).ok_or_else(|| {
            BridgeError::Encode("frame size does not match render resolution".into())
        })?;

    // Convert RGBA to RGB for JPEG (no alpha channel)
    let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let mut jpeg_data = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY)
        .write_image(
            rgb_img.as_raw(),
            RENDER_WIDTH,
            RENDER_HEIGHT,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BridgeError::Encode(e.to_string()))?;

    Ok(frame_response("image/jpeg", jpeg_data))
}

/// Handle raw RGBA frame request
fn handle_raw_frame(buffer: &SharedFrameBuffer) -> Result<Response, BridgeError> {
    Ok(frame_response("application/octet-stream", buffer.latest()?))
}

fn handle_speed(controller: &SharedScreenController) -> Result<Response, BridgeError> {
    let view = controller.view()?;
    let json = serde_json::to_vec(&view).map_err(|e| BridgeError::Encode(e.to_string()))?;
    Ok(build(
        HttpResponse::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*"),
        json,
    ))
}

fn frame_response(content_type: &str, body: Vec<u8>) -> Response {
    build(
        HttpResponse::builder()
            .status(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("X-Frame-Width", RENDER_WIDTH.to_string())
            .header("X-Frame-Height", RENDER_HEIGHT.to_string())
            .header("Access-Control-Allow-Origin", "*")
            .header(
                "Access-Control-Expose-Headers",
                "X-Frame-Width, X-Frame-Height",
            ),
        body,
    )
}

fn text(status: StatusCode, message: &str) -> Response {
    build(
        HttpResponse::builder()
            .status(status)
            .header("Content-Type", "text/plain"),
        message.as_bytes().to_vec(),
    )
}

fn build(builder: tauri::http::response::Builder, body: Vec<u8>) -> Response {
    builder.body(body).unwrap_or_else(|e| {
        tracing::error!("[Protocol] Failed to build response: {}", e);
        let mut response = HttpResponse::new(Vec::new());
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn unknown_path_is_not_found() {
        let response = handle_frame_protocol(
            "/nope",
            &SharedFrameBuffer::default(),
            &SharedScreenController::default(),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn frame_before_first_render_is_unavailable() {
        let buffer = SharedFrameBuffer::default();
        let controller = SharedScreenController::default();
        for path in ["/frame", "/frame.jpg", "/frame.raw"] {
            let response = handle_frame_protocol(path, &buffer, &controller);
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{path}");
        }
    }

    #[test]
    fn raw_frame_is_served_as_is() {
        let buffer = SharedFrameBuffer::default();
        buffer.store(vec![7; 16]).unwrap();
        let response =
            handle_frame_protocol("/frame.raw", &buffer, &SharedScreenController::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/octet-stream");
        assert_eq!(response.body(), &vec![7; 16]);
    }

    #[test]
    fn jpeg_frame_is_encoded() {
        let buffer = SharedFrameBuffer::default();
        buffer
            .store(vec![128; (RENDER_WIDTH * RENDER_HEIGHT * 4) as usize])
            .unwrap();
        let response = handle_frame_protocol("frame", &buffer, &SharedScreenController::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "image/jpeg");
        assert_eq!(&response.body()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn truncated_frame_fails_to_encode() {
        let buffer = SharedFrameBuffer::default();
        buffer.store(vec![0; 64]).unwrap();
        let response = handle_frame_protocol("frame", &buffer, &SharedScreenController::default());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn speed_endpoint_serves_current_view() {
        let controller = SharedScreenController::default();
        controller.apply_slider_input(2.0).unwrap();
        let response = handle_frame_protocol("/speed", &SharedFrameBuffer::default(), &controller);
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(json["readout"], "Animation Speed: 2.00");
        assert_eq!(json["step"].as_f64().map(|s| (s * 10.0).round()), Some(1.0));
    }
}

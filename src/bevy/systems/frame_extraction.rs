//! Frame extraction system
//!
//! This module handles extracting rendered frames from the GPU and
//! preparing them for transfer to the Tauri frontend.

use bevy::{prelude::*, render::renderer::RenderDevice};

use crate::bevy::resources::{
    FrameBufferRes, FrameCount, FrameRateLimiter, MainWorldReceiver, PreRollFrames,
};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH, TARGET_FPS};

/// Extract and process frame data from the render pipeline
pub fn extract_and_process_frame(
    receiver: Res<MainWorldReceiver>,
    buffer: Option<Res<FrameBufferRes>>,
    mut count: ResMut<FrameCount>,
    mut pre_roll: ResMut<PreRollFrames>,
    mut frame_limiter: ResMut<FrameRateLimiter>,
) {
    let Some(b) = buffer else { return };

    // Wait for scene to be fully rendered
    if pre_roll.0 > 0 {
        while receiver.try_recv().is_ok() {}
        pre_roll.0 -= 1;
        if pre_roll.0 % 10 == 0 && pre_roll.0 > 0 {
            debug!("[Bevy] Pre-roll frames remaining: {}", pre_roll.0);
        }
        return;
    }

    // Too early for the next frame: drain without processing
    if !frame_limiter.ready(std::time::Instant::now()) {
        while receiver.try_recv().is_ok() {}
        return;
    }

    // Keep only the latest frame from the render world
    let mut image_data = Vec::new();
    while let Ok(data) = receiver.try_recv() {
        image_data = data;
    }

    let Some(rgba) = remove_row_padding(&image_data, RENDER_WIDTH, RENDER_HEIGHT) else {
        return;
    };

    if let Err(err) = b.0.store(rgba) {
        warn_once!("[Bevy] Dropping frames: {}", err);
        return;
    }

    count.0 += 1;
    if count.0 == 1 {
        info!("[Bevy] First frame ready");
    } else if count.0 % (TARGET_FPS as u32 * 10) == 0 {
        debug!("[Bevy] Frames delivered: {}", count.0);
    }
}

/// Remove GPU buffer row padding alignment, returning pure RGBA data
fn remove_row_padding(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    if data.is_empty() {
        return None;
    }

    let row_bytes = width as usize * 4;
    let aligned_row_bytes = RenderDevice::align_copy_bytes_per_row(row_bytes);

    let rgba_data = if row_bytes == aligned_row_bytes {
        data[..(row_bytes * height as usize).min(data.len())].to_vec()
    } else {
        data.chunks(aligned_row_bytes)
            .take(height as usize)
            .flat_map(|row| &row[..row_bytes.min(row.len())])
            .cloned()
            .collect()
    };

    Some(rgba_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_yields_nothing() {
        assert_eq!(remove_row_padding(&[], 4, 4), None);
    }

    #[test]
    fn padding_is_stripped_per_row() {
        let (width, height) = (10u32, 3u32);
        let row_bytes = width as usize * 4;
        let aligned = RenderDevice::align_copy_bytes_per_row(row_bytes);
        assert!(aligned > row_bytes);

        let mut padded = Vec::new();
        for row in 0..height as u8 {
            padded.extend(std::iter::repeat(row + 1).take(row_bytes));
            padded.extend(std::iter::repeat(0xEE).take(aligned - row_bytes));
        }

        let rgba = remove_row_padding(&padded, width, height).unwrap();
        assert_eq!(rgba.len(), row_bytes * height as usize);
        assert!(rgba.iter().all(|&b| b != 0xEE));
        assert_eq!(rgba[row_bytes], 2);
    }

    #[test]
    fn aligned_rows_pass_through() {
        // 64 px * 4 bytes = 256, already aligned
        let data = vec![9u8; 256 * 2];
        let rgba = remove_row_padding(&data, 64, 2).unwrap();
        assert_eq!(rgba, data);
    }
}

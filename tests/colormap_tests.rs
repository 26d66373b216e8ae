// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for disparity colour mapping

use disparity_view::colormap::{ChannelOrder, TABLE_CHANNEL_ORDER};
use disparity_view::{
    ColorMapper, ColorTable, DisparityFrame, MappingError, PixelEncoding, RangeMode, map_to_color,
};

fn ramp(width: u32, height: u32, min: f32, max: f32) -> DisparityFrame {
    let count = (width * height) as usize;
    let samples: Vec<f32> = (0..count)
        .map(|i| min + (max - min) * i as f32 / (count - 1) as f32)
        .collect();
    DisparityFrame::from_samples(width, height, &samples, min, max)
}

#[test]
fn test_every_pixel_is_a_table_entry() {
    let table = ColorTable::standard();
    let entries: Vec<[u8; 3]> = (0..=u8::MAX).map(|i| table.rgb(i)).collect();

    let image = map_to_color(&ramp(37, 11, -4.0, 60.0)).unwrap();
    for px in image.as_bytes().chunks_exact(3) {
        assert!(entries.contains(&[px[0], px[1], px[2]]));
    }
}

#[test]
fn test_mapping_is_deterministic() {
    let frame = ramp(64, 48, 1.0, 33.0);
    let first = map_to_color(&frame).unwrap();
    let second = map_to_color(&frame).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_bounds_map_to_table_ends() {
    // Irregular bounds where (max - min) * scale is not exactly 255
    let (min, max) = (0.3f32, 71.7f32);
    let frame = DisparityFrame::from_samples(2, 1, &[min, max], min, max);
    let image = map_to_color(&frame).unwrap();
    let table = ColorTable::standard();
    assert_eq!(image.pixel(0, 0), Some(table.rgb(0)));
    assert_eq!(image.pixel(1, 0), Some(table.rgb(255)));
}

#[test]
fn test_output_is_red_green_blue() {
    // Table rows are stored blue-green-red; output reverses them
    assert_eq!(TABLE_CHANNEL_ORDER, ChannelOrder::Bgr);
    let frame = DisparityFrame::from_samples(1, 1, &[10.0], 0.0, 10.0);
    let image = map_to_color(&frame).unwrap();
    let [b, g, r] = ColorTable::standard().raw(255);
    assert_eq!(image.as_bytes(), &[r, g, b]);
}

#[test]
fn test_output_is_tightly_packed() {
    let mut bytes = Vec::new();
    for row in 0..3 {
        for col in 0..5 {
            bytes.extend_from_slice(&((row * 5 + col) as f32).to_le_bytes());
        }
        // 12 bytes of alignment padding
        bytes.extend_from_slice(&[0xFF; 12]);
    }
    let frame = DisparityFrame::new(5, 3, 32, PixelEncoding::Float32C1, false, bytes, 0.0, 14.0);

    let image = map_to_color(&frame).unwrap();
    assert_eq!(image.row_stride, 15);
    assert_eq!(image.as_bytes().len(), 45);
}

#[test]
fn test_no_data_sentinel() {
    let frame = ramp(4, 4, 0.0, 0.0);
    assert_eq!(
        map_to_color(&frame),
        Err(MappingError::DegenerateRange { min: 0.0, max: 0.0 })
    );
}

#[test]
fn test_wrong_encoding() {
    let mut frame = ramp(4, 4, 0.0, 8.0);
    frame.encoding = PixelEncoding::from_tag("64FC1");
    assert_eq!(
        map_to_color(&frame),
        Err(MappingError::UnsupportedEncoding("64FC1".to_string()))
    );
}

#[test]
fn test_fixed_range_matches_dynamic_at_same_bound() {
    let frame = ramp(16, 16, 0.0, 40.0);
    let dynamic = ColorMapper::new(RangeMode::Dynamic).map(&frame).unwrap();
    let fixed = ColorMapper::new(RangeMode::Fixed { max_range: 40.0 })
        .map(&frame)
        .unwrap();
    assert_eq!(dynamic, fixed);
}

#[test]
fn test_into_rgb_image_dimensions() {
    let image = map_to_color(&ramp(8, 6, 0.0, 1.0)).unwrap();
    let rgb = image.into_rgb_image().unwrap();
    assert_eq!(rgb.dimensions(), (8, 6));
}

#[test]
fn test_concurrent_mapping_shares_table() {
    let frame = ramp(32, 32, 0.0, 50.0);
    let expected = map_to_color(&frame).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| map_to_color(&frame).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

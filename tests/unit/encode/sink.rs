use super::*;

fn frame(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 2,
        fps: Fps { num: 15, den: 1 },
        background: Rgba8::opaque(0, 0, 255),
    }
}

#[test]
fn png_sequence_names_files_by_frame_index() {
    let dir = std::env::temp_dir().join(format!("statreel-seq-{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(4, 2, [255, 0, 0, 255]))
        .unwrap();
    sink.end().unwrap();

    let path = dir.join("frame_00003.png");
    assert_eq!(sink.frame_path(FrameIndex(3)), path);
    assert_eq!(sink.written(), 1);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn transparent_pixels_flatten_over_background() {
    let dir = std::env::temp_dir().join(format!("statreel-png-{}", std::process::id()));
    let path = dir.join("nested").join("one.png");
    write_png(&path, &frame(2, 2, [0, 0, 0, 0]), Rgba8::opaque(0, 0, 255)).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(4, 2, [1, 2, 3, 255]))
        .unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn zero_sized_config_is_invalid() {
    let mut bad = cfg();
    bad.width = 0;
    assert!(validate_sink_config(&bad).is_err());
    assert!(validate_sink_config(&cfg()).is_ok());
}

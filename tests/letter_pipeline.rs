use image::{Rgb, RgbImage};
use psd_letters::image::{BLACK, WHITE};
use psd_letters::letters::{LONG_LINE, best_match};
use psd_letters::{
    Action, ProcessConfig, ProcessorKind, Raster, Side, Workbench, decode, encode,
};
use tempfile::tempdir;

const INK: Rgb<u8> = Rgb([20, 20, 20]);
const PAPER: Rgb<u8> = Rgb([240, 240, 240]);

/// Two 6x8 blocks, the left one with a one-pixel hole, and a lone speck.
fn scan() -> RgbImage {
    RgbImage::from_fn(20, 12, |x, y| {
        let left = (2..=7).contains(&x) && (2..=9).contains(&y) && (x, y) != (4, 5);
        let right = (11..=16).contains(&x) && (2..=9).contains(&y);
        let speck = (x, y) == (18, 10);
        if left || right || speck { INK } else { PAPER }
    })
}

fn to_raster(img: &RgbImage) -> Raster {
    let (w, h) = img.dimensions();
    let mut channels = vec![Vec::new(); 3];
    for px in img.pixels() {
        for c in 0..3 {
            channels[c].push(px[c]);
        }
    }
    Raster::from_channels(w, h, channels).unwrap()
}

fn region_sizes(bench: &mut Workbench, raster: &Raster, cfg: &ProcessConfig) -> Vec<usize> {
    bench.reset_tracer();
    bench
        .trace_all(raster, cfg)
        .unwrap()
        .iter()
        .map(|r| r.len())
        .collect()
}

#[test]
fn test_scan_to_letters() {
    let _ = psd_letters::utils::log::init_subscriber(tracing::Level::DEBUG);

    let dir = tempdir().unwrap();
    let input = dir.path().join("scan.psd");
    encode(&to_raster(&scan()), &input).unwrap();

    let cfg = ProcessConfig::default();
    let mut bench = Workbench::new();
    let mut history = Vec::new();

    let mut page = decode(&input).unwrap();
    for kind in [
        ProcessorKind::Grayscale,
        ProcessorKind::Duotone { threshold: 127 },
    ] {
        bench.apply_in_place(kind, &mut page, &cfg).unwrap();
        Action::record(&mut history, kind);
    }
    assert_eq!(page.channel_count(), 1);
    assert!(page.samples().unwrap().iter().all(|&v| v == BLACK || v == WHITE));
    assert_eq!(region_sizes(&mut bench, &page, &cfg), vec![47, 48, 1]);

    assert!(bench.apply_in_place(ProcessorKind::Fill, &mut page, &cfg).unwrap());
    Action::record(&mut history, ProcessorKind::Fill);
    assert_eq!(region_sizes(&mut bench, &page, &cfg), vec![48, 48, 1]);

    // One top layer per block; the speck has nothing below it and stays.
    let thin = ProcessorKind::Thin(Side::Top);
    assert!(bench.apply_in_place(thin, &mut page, &cfg).unwrap());
    Action::record(&mut history, thin);
    assert_eq!(region_sizes(&mut bench, &page, &cfg), vec![42, 42, 1]);

    let regions = bench.trace_all(&page, &cfg).unwrap();
    for region in regions {
        let shape = region.shape(&page, cfg.foreground, cfg.long_line_ratio).unwrap();
        assert_eq!(shape.horizontal_runs, vec![LONG_LINE]);
        assert_eq!(shape.vertical_runs, vec![LONG_LINE]);
    }
    let speck = regions[2].cached_shape().unwrap();
    assert_eq!(best_match(speck).map(|c| c.letter), Some('.'));

    let output = dir.path().join("letters.psd");
    encode(&page, &output).unwrap();
    let reloaded = decode(&output).unwrap();
    assert_eq!(reloaded, page);

    let original = decode(&input).unwrap();
    let replayed = Workbench::new().replay(&original, &history, &cfg).unwrap();
    assert_eq!(replayed, page);
}

#[test]
fn test_inverted_palette() {
    // White ink on black paper: the same shape, processed with swapped values.
    let raster = Raster::from_fn(7, 7, |x, y| {
        if (2..=4).contains(&x) && (1..=5).contains(&y) { WHITE } else { BLACK }
    })
    .unwrap();
    let cfg = ProcessConfig::new().with_foreground(WHITE).with_background(BLACK);
    let mut bench = Workbench::new();

    let out = bench.apply(ProcessorKind::Thin(Side::Bottom), &raster, &cfg).unwrap();
    assert!(out.changed);
    let regions = bench.trace_all(&out.raster, &cfg).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].len(), 12);
    assert_eq!(regions[0].bounds().bottom_right.y, 4);
}

#[test]
fn test_replay_is_repeatable() {
    let raster = to_raster(&scan());
    let cfg = ProcessConfig::default();
    let actions = [
        Action::new(ProcessorKind::Grayscale),
        Action::new(ProcessorKind::Duotone { threshold: 100 }),
        Action::new(ProcessorKind::Fill),
        Action::repeated(ProcessorKind::Cleanup(Side::Right), 3),
        Action::new(ProcessorKind::Thin(Side::Left)),
        Action::repeated(ProcessorKind::TraceNext, 50),
    ];

    let mut bench = Workbench::new();
    let first = bench.replay(&raster, &actions, &cfg).unwrap();
    let traced = bench.tracer().regions().len();
    let second = bench.replay(&raster, &actions, &cfg).unwrap();
    assert_eq!(first, second);
    assert_eq!(bench.tracer().regions().len(), traced);
    assert_eq!(bench.tracer().next_index(), 50);
}

//! CSV persistence through the store interface

use crate::common::MemoryStore;
use fall_detection::storage::{CsvFormat, decode_window, encode_window};
use fall_detection::{SignalStore, SignalWindow, StorageError, fall_name};

fn sample_window() -> SignalWindow<8> {
    SignalWindow::from_slices(
        &[0.01, -0.02, 0.03],
        &[0.1, 0.2, 0.3],
        &[1.0, 2.5, 0.9],
        &[-10.5, 0.0, 3.25],
        &[100.0, -200.0, 0.5],
        &[0.0, 0.0, 1.0],
    )
    .unwrap()
}

#[test]
fn test_names_are_unique_per_fall() {
    let names: Vec<_> = (0..12).map(fall_name).collect();
    assert_eq!(names[0].as_str(), "FALL0.csv");
    assert_eq!(names[9].as_str(), "FALL9.csv");
    assert_eq!(names[11].as_str(), "FALL11.csv");
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_one_line_per_sample() {
    let mut text = String::new();
    encode_window(&sample_window(), &mut text, CsvFormat::default()).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(text.ends_with('\n'));
    assert_eq!(lines[1], "-0.0200,0.2000,2.5000,0.0000,-200.0000,0.0000");
    for line in lines {
        assert_eq!(line.split(',').count(), 6);
    }
}

#[test]
fn test_store_round_trip() {
    let mut store = MemoryStore::default();
    let window = sample_window();

    store.write("FALL0.csv", &window, true).unwrap();
    let back: SignalWindow<8> = store.read("FALL0.csv").unwrap();

    assert_eq!(back, window);
}

#[test]
fn test_overwrite_and_append() {
    let mut store = MemoryStore::default();
    let window = sample_window();

    store.write("FALL0.csv", &window, true).unwrap();
    store.write("FALL0.csv", &window, true).unwrap();
    assert_eq!(store.read::<8>("FALL0.csv").unwrap().len(), 3);

    store.write("FALL0.csv", &window, false).unwrap();
    assert_eq!(store.read::<8>("FALL0.csv").unwrap().len(), 6);
    // Appending past the window capacity is caught on read
    store.write("FALL0.csv", &window, false).unwrap();
    assert_eq!(
        store.read::<8>("FALL0.csv").unwrap_err(),
        StorageError::TooManyRows
    );
}

#[test]
fn test_unavailable_store() {
    let mut store = MemoryStore {
        unavailable: true,
        ..MemoryStore::default()
    };
    assert_eq!(
        store.write("FALL0.csv", &sample_window(), true),
        Err(StorageError::Unavailable)
    );
    assert_eq!(
        store.read::<8>("FALL0.csv").unwrap_err(),
        StorageError::Unavailable
    );
}

#[test]
fn test_windows_written_elsewhere_are_accepted() {
    // Two decimals and CRLF line endings
    let text = "0.01,0.10,1.00,-10.50,100.00,0.00\r\n-0.02,0.20,2.50,0.00,-200.00,0.00\r\n";
    let window: SignalWindow<8> = decode_window(text).unwrap();
    assert_eq!(window.len(), 2);
    assert_eq!(window.gyro_y(), &[100.0, -200.0]);
}
